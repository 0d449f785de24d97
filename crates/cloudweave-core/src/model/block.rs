//! ブロック（設定ドキュメントの1要素）

use std::collections::BTreeMap;

/// 属性名からブロックへの順序付きマップ
pub type Fields = BTreeMap<String, Block>;

/// 設定ドキュメントの値
///
/// `Absent`（未指定）と `Scalar("")`（空文字列）は区別されます。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Block {
    /// 属性が指定されていない
    #[default]
    Absent,

    /// 文字列値
    Scalar(String),

    /// 最大1要素のネストしたブロック
    ///
    /// `None` は空のブロックリスト、または唯一の要素が未設定であることを表す。
    Singleton(Option<Fields>),

    /// 繰り返しブロック（routing_rule など）
    ///
    /// `None` の要素は型変換に失敗したエントリ。
    Repeated(Vec<Option<Fields>>),
}

impl Block {
    pub fn scalar(value: impl Into<String>) -> Self {
        Self::Scalar(value.into())
    }

    pub fn singleton(fields: Fields) -> Self {
        Self::Singleton(Some(fields))
    }

    /// 空のブロックリスト
    pub fn empty_list() -> Self {
        Self::Singleton(None)
    }

    pub fn repeated(items: impl IntoIterator<Item = Fields>) -> Self {
        Self::Repeated(items.into_iter().map(Some).collect())
    }

    /// 文字列値を取得（空文字列も含む）
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(value) => Some(value),
            _ => None,
        }
    }

    /// 設定済みのネストブロックを取得
    pub fn as_fields(&self) -> Option<&Fields> {
        match self {
            Self::Singleton(Some(fields)) => Some(fields),
            _ => None,
        }
    }

    /// 未設定として扱えるか
    ///
    /// `Absent`、空のブロックリスト、有効な要素を持たない繰り返しブロックが該当する。
    pub fn is_unset(&self) -> bool {
        match self {
            Self::Absent | Self::Singleton(None) => true,
            Self::Scalar(_) | Self::Singleton(Some(_)) => false,
            Self::Repeated(items) => items.iter().all(Option::is_none),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Scalar(_) => "scalar",
            Self::Singleton(_) => "block",
            Self::Repeated(_) => "block list",
        }
    }

    /// 比較用に正規化する
    ///
    /// 未設定の値と空文字列を取り除く。設定済みの空ブロックは残す。
    pub fn normalized(&self) -> Option<Block> {
        match self {
            Self::Absent | Self::Singleton(None) => None,
            Self::Scalar(value) if value.is_empty() => None,
            Self::Scalar(value) => Some(Self::Scalar(value.clone())),
            Self::Singleton(Some(fields)) => Some(Self::Singleton(Some(normalize_fields(fields)))),
            Self::Repeated(items) => {
                let items: Vec<Option<Fields>> = items
                    .iter()
                    .flatten()
                    .map(|fields| Some(normalize_fields(fields)))
                    .collect();
                if items.is_empty() {
                    None
                } else {
                    Some(Self::Repeated(items))
                }
            }
        }
    }
}

impl From<&str> for Block {
    fn from(value: &str) -> Self {
        Self::Scalar(value.to_string())
    }
}

impl From<String> for Block {
    fn from(value: String) -> Self {
        Self::Scalar(value)
    }
}

pub(crate) fn normalize_fields(fields: &Fields) -> Fields {
    fields
        .iter()
        .filter_map(|(key, block)| block.normalized().map(|b| (key.clone(), b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, Block)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_absent_differs_from_empty_string() {
        assert_ne!(Block::Absent, Block::scalar(""));
        assert!(Block::Absent.is_unset());
        assert!(!Block::scalar("").is_unset());
    }

    #[test]
    fn test_unset_singletons() {
        assert!(Block::empty_list().is_unset());
        assert!(!Block::singleton(Fields::new()).is_unset());
        assert!(Block::Repeated(vec![None, None]).is_unset());
        assert!(!Block::repeated([Fields::new()]).is_unset());
    }

    #[test]
    fn test_normalized_drops_unset_and_empty_strings() {
        let block = Block::singleton(fields(&[
            ("host_name", Block::scalar("example.com")),
            ("protocol", Block::scalar("")),
            ("extra", Block::Absent),
        ]));

        let expected = Block::singleton(fields(&[("host_name", Block::scalar("example.com"))]));
        assert_eq!(block.normalized(), Some(expected));
    }

    #[test]
    fn test_normalized_keeps_configured_empty_block() {
        let block = Block::singleton(fields(&[("key", Block::scalar(""))]));
        assert_eq!(block.normalized(), Some(Block::singleton(Fields::new())));
    }

    #[test]
    fn test_normalized_repeated_skips_malformed() {
        let block = Block::Repeated(vec![None, Some(fields(&[("a", Block::scalar("1"))]))]);
        assert_eq!(
            block.normalized(),
            Some(Block::repeated([fields(&[("a", Block::scalar("1"))])]))
        );
        assert_eq!(Block::Repeated(vec![None]).normalized(), None);
    }
}
