use cloudweave_core::{FieldSpec, Schema};

const PROTOCOLS: &[&str] = &["http", "https"];

/// Attribute schema of `aws_s3_bucket_website_configuration`
pub fn website_schema() -> Schema {
    let condition = Schema::new(vec![
        FieldSpec::scalar("http_error_code_returned_equals"),
        FieldSpec::scalar("key_prefix_equals"),
    ]);

    let redirect = Schema::new(vec![
        FieldSpec::scalar("host_name"),
        FieldSpec::scalar("http_redirect_code"),
        FieldSpec::scalar("protocol").one_of(PROTOCOLS),
        FieldSpec::scalar("replace_key_prefix_with"),
        FieldSpec::scalar("replace_key_with"),
    ]);

    let routing_rule = Schema::new(vec![
        FieldSpec::singleton("condition", condition),
        FieldSpec::singleton("redirect", redirect).required(),
    ]);

    Schema::new(vec![
        FieldSpec::scalar("bucket").required().length(1, 63),
        FieldSpec::scalar("expected_bucket_owner").account_id(),
        FieldSpec::singleton(
            "error_document",
            Schema::new(vec![FieldSpec::scalar("key").required()]),
        ),
        FieldSpec::singleton(
            "index_document",
            Schema::new(vec![FieldSpec::scalar("suffix").required()]),
        ),
        FieldSpec::singleton(
            "redirect_all_requests_to",
            Schema::new(vec![
                FieldSpec::scalar("host_name").required(),
                FieldSpec::scalar("protocol").one_of(PROTOCOLS),
            ]),
        )
        .conflicts_with(&["error_document", "index_document", "routing_rule"]),
        FieldSpec::repeated("routing_rule", routing_rule),
    ])
}
