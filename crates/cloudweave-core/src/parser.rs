//! KDLパーサー
//!
//! KDLで書かれたリソース設定をスキーマに従って `Document` に変換します。
//!
//! ```kdl
//! bucket "my-site"
//! index_document {
//!     suffix "index.html"
//! }
//! routing_rule {
//!     condition { key_prefix_equals "docs/" }
//!     redirect { replace_key_prefix_with "documents/" }
//! }
//! ```

use crate::error::{DocumentError, Result};
use crate::model::{Block, Document, Fields};
use crate::schema::{FieldKind, Schema};
use kdl::{KdlDocument, KdlNode};
use std::fs;
use std::path::Path;

/// KDLファイルをパースしてDocumentを生成
pub fn parse_document_file<P: AsRef<Path>>(path: P, schema: &Schema) -> Result<Document> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| DocumentError::IoError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    parse_document(&content, schema)
}

/// KDL文字列をパース
pub fn parse_document(content: &str, schema: &Schema) -> Result<Document> {
    let doc: KdlDocument = content.parse()?;
    let fields = parse_fields(&doc, schema, "")?;
    Ok(Document::from_fields(fields))
}

fn parse_fields(doc: &KdlDocument, schema: &Schema, prefix: &str) -> Result<Fields> {
    let mut fields = Fields::new();

    for node in doc.nodes() {
        let name = node.name().value();
        let path = format!("{prefix}{name}");
        let spec = schema
            .field(name)
            .ok_or_else(|| DocumentError::UnknownField(path.clone()))?;

        match &spec.kind {
            FieldKind::Scalar => {
                if node.children().is_some() {
                    return Err(DocumentError::ExpectedScalar(path));
                }
                let value = scalar_value(node).ok_or_else(|| DocumentError::MissingValue(path.clone()))?;
                if fields.contains_key(name) {
                    return Err(DocumentError::DuplicateField(path));
                }
                fields.insert(name.to_string(), Block::Scalar(value));
            }
            FieldKind::Singleton(nested) => {
                if fields.contains_key(name) {
                    return Err(DocumentError::TooManyItems(path));
                }
                let element = match node.children() {
                    Some(children) => Some(parse_fields(children, nested, &format!("{path}.0."))?),
                    None => None,
                };
                fields.insert(name.to_string(), Block::Singleton(element));
            }
            FieldKind::Repeated(nested) => {
                let entry = fields
                    .entry(name.to_string())
                    .or_insert_with(|| Block::Repeated(Vec::new()));
                if let Block::Repeated(items) = entry {
                    let index = items.len();
                    let element = match node.children() {
                        Some(children) => {
                            Some(parse_fields(children, nested, &format!("{path}.{index}."))?)
                        }
                        None => {
                            tracing::debug!("{}.{}: 子ノードのない要素", path, index);
                            None
                        }
                    };
                    items.push(element);
                }
            }
        }
    }

    Ok(fields)
}

/// ノードの最初の引数を文字列として取り出す（整数・真偽値も文字列化）
fn scalar_value(node: &KdlNode) -> Option<String> {
    let value = node.entries().first()?.value();

    if let Some(s) = value.as_string() {
        return Some(s.to_string());
    }
    if let Some(i) = value.as_integer() {
        return Some(i.to_string());
    }
    value.as_bool().map(|b| b.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldSpec;

    fn schema() -> Schema {
        let condition = Schema::new(vec![
            FieldSpec::scalar("http_error_code_returned_equals"),
            FieldSpec::scalar("key_prefix_equals"),
        ]);
        let redirect = Schema::new(vec![
            FieldSpec::scalar("host_name"),
            FieldSpec::scalar("replace_key_prefix_with"),
        ]);
        let rule = Schema::new(vec![
            FieldSpec::singleton("condition", condition),
            FieldSpec::singleton("redirect", redirect),
        ]);

        Schema::new(vec![
            FieldSpec::scalar("bucket"),
            FieldSpec::singleton(
                "index_document",
                Schema::new(vec![FieldSpec::scalar("suffix")]),
            ),
            FieldSpec::repeated("routing_rule", rule),
        ])
    }

    #[test]
    fn test_parse_scalars_and_blocks() {
        let kdl = r#"
bucket "site"
index_document {
    suffix "index.html"
}
"#;
        let doc = parse_document(kdl, &schema()).unwrap();
        assert_eq!(doc.get_str("bucket"), Some("site"));

        let index = doc.get("index_document").and_then(Block::as_fields).unwrap();
        assert_eq!(index.get("suffix"), Some(&Block::scalar("index.html")));
    }

    #[test]
    fn test_parse_repeated_blocks_keep_order() {
        let kdl = r#"
bucket "site"
routing_rule {
    condition { http_error_code_returned_equals 404 }
    redirect { host_name "a.example.com" }
}
routing_rule {
    redirect { replace_key_prefix_with "documents/" }
}
"#;
        let doc = parse_document(kdl, &schema()).unwrap();
        let Some(Block::Repeated(rules)) = doc.get("routing_rule") else {
            panic!("routing_rule should be a block list");
        };
        assert_eq!(rules.len(), 2);

        let first = rules[0].as_ref().unwrap();
        let condition = first.get("condition").and_then(Block::as_fields).unwrap();
        assert_eq!(
            condition.get("http_error_code_returned_equals"),
            Some(&Block::scalar("404"))
        );
        let second = rules[1].as_ref().unwrap();
        assert!(second.get("condition").is_none());
    }

    #[test]
    fn test_malformed_list_element_is_kept_as_none() {
        let kdl = r#"
bucket "site"
routing_rule "oops"
"#;
        let doc = parse_document(kdl, &schema()).unwrap();
        assert_eq!(doc.get("routing_rule"), Some(&Block::Repeated(vec![None])));
    }

    #[test]
    fn test_empty_singleton_is_configured() {
        let doc = parse_document("index_document {}", &schema()).unwrap();
        assert_eq!(doc.get("index_document"), Some(&Block::singleton(Fields::new())));
    }

    #[test]
    fn test_singleton_twice_is_rejected() {
        let kdl = r#"
index_document { suffix "a.html"; }
index_document { suffix "b.html"; }
"#;
        let err = parse_document(kdl, &schema()).unwrap_err();
        assert!(matches!(err, DocumentError::TooManyItems(path) if path == "index_document"));
    }

    #[test]
    fn test_unknown_field_is_rejected_with_path() {
        let kdl = r#"index_document { prefix "a"; }"#;
        let err = parse_document(kdl, &schema()).unwrap_err();
        assert!(matches!(err, DocumentError::UnknownField(path) if path == "index_document.0.prefix"));
    }

    #[test]
    fn test_scalar_errors() {
        assert!(matches!(
            parse_document("bucket", &schema()),
            Err(DocumentError::MissingValue(_))
        ));
        assert!(matches!(
            parse_document("bucket { suffix \"x\"; }", &schema()),
            Err(DocumentError::ExpectedScalar(_))
        ));
        assert!(matches!(
            parse_document("bucket \"a\"\nbucket \"b\"", &schema()),
            Err(DocumentError::DuplicateField(_))
        ));
    }

    #[test]
    fn test_invalid_kdl() {
        assert!(matches!(
            parse_document("bucket {", &schema()),
            Err(DocumentError::KdlParse(_))
        ));
    }

    #[test]
    fn test_parse_document_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.kdl");
        std::fs::write(&path, "bucket \"site\"").unwrap();

        let doc = parse_document_file(&path, &schema()).unwrap();
        assert_eq!(doc.get_str("bucket"), Some("site"));

        let missing = parse_document_file(dir.path().join("missing.kdl"), &schema());
        assert!(matches!(missing, Err(DocumentError::IoError { .. })));
    }
}
