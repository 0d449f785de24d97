//! 属性スキーマとバリデーション
//!
//! パーサーはスキーマを見てノードの種類（値 / ブロック / 繰り返しブロック）を決め、
//! `Schema::validate` は必須・排他・長さ・列挙値などの制約を検査します。
//! マッパーはこれらの制約を前提にしません。

use crate::error::{DocumentError, Result};
use crate::model::{Block, Document, Fields};

/// 属性の種類
#[derive(Debug, Clone)]
pub enum FieldKind {
    Scalar,
    Singleton(Schema),
    Repeated(Schema),
}

/// 1属性の定義
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min_len: Option<usize>,
    pub max_len: Option<usize>,
    /// 許可される値（空なら制限なし）
    pub one_of: &'static [&'static str],
    /// 同時に指定できない属性
    pub conflicts_with: &'static [&'static str],
    /// 12桁のアカウントIDであること
    pub account_id: bool,
}

impl FieldSpec {
    fn with_kind(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            min_len: None,
            max_len: None,
            one_of: &[],
            conflicts_with: &[],
            account_id: false,
        }
    }

    pub fn scalar(name: &'static str) -> Self {
        Self::with_kind(name, FieldKind::Scalar)
    }

    pub fn singleton(name: &'static str, schema: Schema) -> Self {
        Self::with_kind(name, FieldKind::Singleton(schema))
    }

    pub fn repeated(name: &'static str, schema: Schema) -> Self {
        Self::with_kind(name, FieldKind::Repeated(schema))
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn length(mut self, min: usize, max: usize) -> Self {
        self.min_len = Some(min);
        self.max_len = Some(max);
        self
    }

    pub fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = values;
        self
    }

    pub fn conflicts_with(mut self, names: &'static [&'static str]) -> Self {
        self.conflicts_with = names;
        self
    }

    pub fn account_id(mut self) -> Self {
        self.account_id = true;
        self
    }

    fn check_scalar(&self, path: &str, value: &str, violations: &mut Vec<String>) {
        if value.is_empty() {
            return;
        }

        let len = value.chars().count();
        if let Some(min) = self.min_len {
            if len < min {
                violations.push(format!(
                    "{path}: 長さは{min}文字以上である必要があります (現在: {len})"
                ));
            }
        }
        if let Some(max) = self.max_len {
            if len > max {
                violations.push(format!(
                    "{path}: 長さは{max}文字以下である必要があります (現在: {len})"
                ));
            }
        }

        if !self.one_of.is_empty() && !self.one_of.contains(&value) {
            violations.push(format!(
                "{path}: '{value}' は指定できません (許可: {})",
                self.one_of.join(", ")
            ));
        }

        if self.account_id && !is_account_id(value) {
            violations.push(format!(
                "{path}: '{value}' は12桁のアカウントIDではありません"
            ));
        }
    }
}

/// 属性定義の集合
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// ドキュメントを検査し、すべての違反をまとめて返す
    pub fn validate(&self, doc: &Document) -> Result<()> {
        let mut violations = Vec::new();
        self.validate_fields(doc.fields(), "", &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(DocumentError::Invalid(violations))
        }
    }

    fn validate_fields(&self, fields: &Fields, prefix: &str, violations: &mut Vec<String>) {
        for key in fields.keys() {
            if !self.contains(key) {
                violations.push(format!("{prefix}{key}: 未知の属性です"));
            }
        }

        for spec in &self.fields {
            let path = format!("{prefix}{}", spec.name);
            let block = fields.get(spec.name).unwrap_or(&Block::Absent);

            if block.is_unset() {
                if spec.required {
                    violations.push(format!("{path}: 必須の属性です"));
                }
                continue;
            }

            for other in spec.conflicts_with {
                if fields.get(*other).is_some_and(|b| !b.is_unset()) {
                    violations.push(format!("{path}: {prefix}{other} と同時に指定できません"));
                }
            }

            match (&spec.kind, block) {
                (FieldKind::Scalar, Block::Scalar(value)) => {
                    if spec.required && value.is_empty() {
                        violations.push(format!("{path}: 必須の属性です"));
                    }
                    spec.check_scalar(&path, value, violations);
                }
                (FieldKind::Singleton(schema), Block::Singleton(Some(nested))) => {
                    schema.validate_fields(nested, &format!("{path}.0."), violations);
                }
                (FieldKind::Repeated(schema), Block::Repeated(items)) => {
                    for (index, item) in items.iter().enumerate() {
                        match item {
                            Some(nested) => schema.validate_fields(
                                nested,
                                &format!("{path}.{index}."),
                                violations,
                            ),
                            None => {
                                tracing::warn!("{}.{}: ブロックではない要素は無視されます", path, index)
                            }
                        }
                    }
                }
                (kind, other) => {
                    violations.push(format!(
                        "{path}: {} が必要ですが {} が指定されています",
                        kind_label(kind),
                        other.kind_name()
                    ));
                }
            }
        }
    }
}

fn kind_label(kind: &FieldKind) -> &'static str {
    match kind {
        FieldKind::Scalar => "scalar",
        FieldKind::Singleton(_) => "block",
        FieldKind::Repeated(_) => "block list",
    }
}

fn is_account_id(value: &str) -> bool {
    value.len() == 12 && value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn website_like() -> Schema {
        let target = Schema::new(vec![
            FieldSpec::scalar("host_name").required(),
            FieldSpec::scalar("protocol").one_of(&["http", "https"]),
        ]);
        let rule = Schema::new(vec![FieldSpec::singleton(
            "redirect",
            Schema::new(vec![FieldSpec::scalar("replace_key_with")]),
        )
        .required()]);

        Schema::new(vec![
            FieldSpec::scalar("bucket").required().length(1, 63),
            FieldSpec::scalar("expected_bucket_owner").account_id(),
            FieldSpec::singleton("redirect_all_requests_to", target)
                .conflicts_with(&["routing_rule"]),
            FieldSpec::repeated("routing_rule", rule),
        ])
    }

    fn doc(pairs: Vec<(&str, Block)>) -> Document {
        pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }

    fn violations(result: Result<()>) -> Vec<String> {
        match result {
            Err(DocumentError::Invalid(v)) => v,
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_document() {
        let d = doc(vec![
            ("bucket", Block::scalar("site")),
            ("expected_bucket_owner", Block::scalar("123456789012")),
        ]);
        assert!(website_like().validate(&d).is_ok());
    }

    #[test]
    fn test_missing_required() {
        let v = violations(website_like().validate(&Document::new()));
        assert_eq!(v.len(), 1);
        assert!(v[0].starts_with("bucket:"));
    }

    #[test]
    fn test_conflicting_blocks() {
        let mut target = Fields::new();
        target.insert("host_name".into(), Block::scalar("example.com"));
        let mut redirect = Fields::new();
        redirect.insert("replace_key_with".into(), Block::scalar("x.html"));
        let mut rule = Fields::new();
        rule.insert("redirect".into(), Block::singleton(redirect));

        let d = doc(vec![
            ("bucket", Block::scalar("site")),
            ("redirect_all_requests_to", Block::singleton(target)),
            ("routing_rule", Block::repeated([rule])),
        ]);
        let v = violations(website_like().validate(&d));
        assert_eq!(v.len(), 1);
        assert!(v[0].contains("routing_rule"));
    }

    #[test]
    fn test_nested_violations_have_paths() {
        let mut target = Fields::new();
        target.insert("protocol".into(), Block::scalar("ftp"));

        let d = doc(vec![
            ("bucket", Block::scalar("a".repeat(64))),
            ("expected_bucket_owner", Block::scalar("12345")),
            ("redirect_all_requests_to", Block::singleton(target)),
        ]);
        let v = violations(website_like().validate(&d));
        assert_eq!(v.len(), 4);
        assert!(v.iter().any(|m| m.starts_with("bucket:")));
        assert!(v.iter().any(|m| m.starts_with("expected_bucket_owner:")));
        assert!(v.iter().any(|m| m.starts_with("redirect_all_requests_to.0.host_name:")));
        assert!(v.iter().any(|m| m.starts_with("redirect_all_requests_to.0.protocol:")));
    }

    #[test]
    fn test_unknown_and_mistyped_fields() {
        let d = doc(vec![
            ("bucket", Block::scalar("site")),
            ("website", Block::scalar("x")),
            ("routing_rule", Block::scalar("oops")),
        ]);
        let v = violations(website_like().validate(&d));
        assert_eq!(v.len(), 2);
        assert!(v.iter().any(|m| m.starts_with("website:")));
        assert!(v.iter().any(|m| m.starts_with("routing_rule:")));
    }
}
