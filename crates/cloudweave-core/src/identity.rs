//! リソースIDの組み立てと分解
//!
//! IDは `PRIMARY` または `PRIMARY,QUALIFIER` の形式で永続化されます。
//! 例: `my-bucket` / `my-bucket,123456789012`

use crate::error::{DocumentError, Result};

/// ID の区切り文字
pub const IDENTITY_SEPARATOR: &str = ",";

/// 2つの要素を持つIDの形式（エラーメッセージ用の名前付き）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdentityShape {
    pub primary: &'static str,
    pub qualifier: &'static str,
}

impl IdentityShape {
    pub const fn new(primary: &'static str, qualifier: &'static str) -> Self {
        Self { primary, qualifier }
    }

    /// 受け付ける形式の説明（"BUCKET or BUCKET,EXPECTED_BUCKET_OWNER"）
    pub fn expected(&self) -> String {
        format!(
            "{primary} or {primary}{IDENTITY_SEPARATOR}{qualifier}",
            primary = self.primary,
            qualifier = self.qualifier
        )
    }

    pub fn format(&self, primary: &str, qualifier: &str) -> String {
        format_identity(primary, qualifier)
    }

    /// IDを分解する
    ///
    /// 空でない要素が1つなら `(part, "")`、2つなら `(part1, part2)`。
    /// それ以外（空文字列、3要素以上、空の要素を含む2要素）はエラー。
    pub fn parse(&self, id: &str) -> Result<(String, String)> {
        let parts: Vec<&str> = id.split(IDENTITY_SEPARATOR).collect();

        match parts.as_slice() {
            [primary] if !primary.is_empty() => Ok((primary.to_string(), String::new())),
            [primary, qualifier] if !primary.is_empty() && !qualifier.is_empty() => {
                Ok((primary.to_string(), qualifier.to_string()))
            }
            _ => Err(DocumentError::MalformedIdentity {
                id: id.to_string(),
                expected: self.expected(),
            }),
        }
    }
}

impl Default for IdentityShape {
    fn default() -> Self {
        Self::new("NAME", "OWNER")
    }
}

/// IDを組み立てる
///
/// 片方が空ならもう片方だけを返す。
pub fn format_identity(primary: &str, qualifier: &str) -> String {
    if primary.is_empty() {
        return qualifier.to_string();
    }

    if qualifier.is_empty() {
        return primary.to_string();
    }

    [primary, qualifier].join(IDENTITY_SEPARATOR)
}

/// 汎用の形式 (`NAME` / `NAME,OWNER`) でIDを分解する
pub fn parse_identity(id: &str) -> Result<(String, String)> {
    IdentityShape::default().parse(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCKET: IdentityShape = IdentityShape::new("BUCKET", "EXPECTED_BUCKET_OWNER");

    #[test]
    fn test_format_identity() {
        assert_eq!(format_identity("bucket", ""), "bucket");
        assert_eq!(format_identity("", "owner"), "owner");
        assert_eq!(format_identity("bucket", "owner"), "bucket,owner");
        assert_eq!(format_identity("", ""), "");
    }

    #[test]
    fn test_parse_identity_shapes() {
        assert_eq!(
            parse_identity("bucket").unwrap(),
            ("bucket".to_string(), String::new())
        );
        assert_eq!(
            parse_identity("bucket,123456789012").unwrap(),
            ("bucket".to_string(), "123456789012".to_string())
        );
    }

    #[test]
    fn test_identity_round_trip() {
        for (a, b) in [
            ("bucket", ""),
            ("bucket", "owner"),
            ("my.bucket-01", "123456789012"),
        ] {
            let id = format_identity(a, b);
            assert_eq!(parse_identity(&id).unwrap(), (a.to_string(), b.to_string()));
        }
    }

    #[test]
    fn test_identity_with_empty_primary_collapses_to_single_part() {
        let id = format_identity("", "owner");
        assert_eq!(
            parse_identity(&id).unwrap(),
            ("owner".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_identity_rejects_malformed() {
        for id in ["", "a,b,c", "a,", ",b", ","] {
            match parse_identity(id) {
                Err(DocumentError::MalformedIdentity { id: got, .. }) => assert_eq!(got, id),
                other => panic!("expected MalformedIdentity for {:?}, got {:?}", id, other),
            }
        }
    }

    #[test]
    fn test_malformed_identity_message_names_shapes() {
        let err = BUCKET.parse("a,b,c").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected format for ID (a,b,c), expected BUCKET or BUCKET,EXPECTED_BUCKET_OWNER"
        );
    }
}
