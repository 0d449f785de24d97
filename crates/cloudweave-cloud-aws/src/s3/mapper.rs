//! Website configuration <-> document mapping

use super::model::{
    Condition, ErrorDocument, GetBucketWebsiteOutput, IndexDocument, Redirect,
    RedirectAllRequestsTo, RoutingRule, WebsiteConfiguration,
};
use cloudweave_core::mapper::{
    expand_repeated, expand_singleton, flatten_repeated, flatten_singleton, nested, put_nested,
    put_str, string_field,
};
use cloudweave_core::{Document, Expand, Fields, Flatten};

impl Expand for ErrorDocument {
    fn expand(fields: &Fields) -> Self {
        Self {
            key: string_field(fields, "key"),
        }
    }
}

impl Flatten for ErrorDocument {
    fn flatten(&self) -> Fields {
        let mut fields = Fields::new();
        put_str(&mut fields, "key", self.key.as_ref());
        fields
    }
}

impl Expand for IndexDocument {
    fn expand(fields: &Fields) -> Self {
        Self {
            suffix: string_field(fields, "suffix"),
        }
    }
}

impl Flatten for IndexDocument {
    fn flatten(&self) -> Fields {
        let mut fields = Fields::new();
        put_str(&mut fields, "suffix", self.suffix.as_ref());
        fields
    }
}

impl Expand for RedirectAllRequestsTo {
    fn expand(fields: &Fields) -> Self {
        Self {
            host_name: string_field(fields, "host_name"),
            protocol: string_field(fields, "protocol"),
        }
    }
}

impl Flatten for RedirectAllRequestsTo {
    fn flatten(&self) -> Fields {
        let mut fields = Fields::new();
        put_str(&mut fields, "host_name", self.host_name.as_ref());
        put_str(&mut fields, "protocol", self.protocol.as_ref());
        fields
    }
}

impl Expand for Condition {
    fn expand(fields: &Fields) -> Self {
        Self {
            http_error_code_returned_equals: string_field(fields, "http_error_code_returned_equals"),
            key_prefix_equals: string_field(fields, "key_prefix_equals"),
        }
    }
}

impl Flatten for Condition {
    fn flatten(&self) -> Fields {
        let mut fields = Fields::new();
        put_str(
            &mut fields,
            "http_error_code_returned_equals",
            self.http_error_code_returned_equals.as_ref(),
        );
        put_str(&mut fields, "key_prefix_equals", self.key_prefix_equals.as_ref());
        fields
    }
}

impl Expand for Redirect {
    fn expand(fields: &Fields) -> Self {
        Self {
            host_name: string_field(fields, "host_name"),
            http_redirect_code: string_field(fields, "http_redirect_code"),
            protocol: string_field(fields, "protocol"),
            replace_key_prefix_with: string_field(fields, "replace_key_prefix_with"),
            replace_key_with: string_field(fields, "replace_key_with"),
        }
    }
}

impl Flatten for Redirect {
    fn flatten(&self) -> Fields {
        let mut fields = Fields::new();
        put_str(&mut fields, "host_name", self.host_name.as_ref());
        put_str(&mut fields, "http_redirect_code", self.http_redirect_code.as_ref());
        put_str(&mut fields, "protocol", self.protocol.as_ref());
        put_str(
            &mut fields,
            "replace_key_prefix_with",
            self.replace_key_prefix_with.as_ref(),
        );
        put_str(&mut fields, "replace_key_with", self.replace_key_with.as_ref());
        fields
    }
}

impl Expand for RoutingRule {
    fn expand(fields: &Fields) -> Self {
        Self {
            condition: nested(fields, "condition"),
            redirect: nested(fields, "redirect"),
        }
    }
}

impl Flatten for RoutingRule {
    fn flatten(&self) -> Fields {
        let mut fields = Fields::new();
        put_nested(&mut fields, "condition", self.condition.as_ref());
        put_nested(&mut fields, "redirect", self.redirect.as_ref());
        fields
    }
}

/// Build the `WebsiteConfiguration` payload from a configuration document
pub fn expand_website_configuration(doc: &Document) -> WebsiteConfiguration {
    WebsiteConfiguration {
        error_document: expand_singleton(doc.get("error_document")),
        index_document: expand_singleton(doc.get("index_document")),
        redirect_all_requests_to: expand_singleton(doc.get("redirect_all_requests_to")),
        routing_rules: expand_repeated(doc.get("routing_rule")),
    }
}

/// Flatten a `GetBucketWebsite` response into the four configuration blocks
///
/// Missing blocks become empty block lists so a refresh clears them.
pub fn flatten_website_output(output: &GetBucketWebsiteOutput) -> Document {
    let mut doc = Document::new();
    doc.set("error_document", flatten_singleton(output.error_document.as_ref()));
    doc.set("index_document", flatten_singleton(output.index_document.as_ref()));
    doc.set(
        "redirect_all_requests_to",
        flatten_singleton(output.redirect_all_requests_to.as_ref()),
    );
    doc.set("routing_rule", flatten_repeated(&output.routing_rules));
    doc
}
