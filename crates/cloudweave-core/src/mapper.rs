//! expand / flatten の共通実装
//!
//! リソースごとの構造体は [`Expand`] と [`Flatten`] を実装し、
//! 属性名と値の対応だけを記述します。ブロックリストの扱い（空リスト、
//! 未設定の要素、不正な要素のスキップ）はここで一括して処理します。

use crate::model::{Block, Fields};

/// ブロックの中身（属性マップ）から API の構造体を作る
pub trait Expand: Sized {
    fn expand(fields: &Fields) -> Self;
}

/// API の構造体からブロックの中身（属性マップ）を作る
///
/// 値が設定されている属性だけを出力する。
pub trait Flatten {
    fn flatten(&self) -> Fields;
}

/// 最大1要素のブロックを展開
///
/// 空のリスト・未設定の要素は `None`（APIのフィールドを省略する）。
pub fn expand_singleton<T: Expand>(block: Option<&Block>) -> Option<T> {
    match block? {
        Block::Singleton(Some(fields)) => Some(T::expand(fields)),
        Block::Absent | Block::Singleton(None) => None,
        other => {
            tracing::debug!("ブロックが必要ですが {} が渡されました", other.kind_name());
            None
        }
    }
}

/// 繰り返しブロックを展開
///
/// 要素ごとに独立して展開し、型変換に失敗した要素はスキップする。
pub fn expand_repeated<T: Expand>(block: Option<&Block>) -> Vec<T> {
    match block {
        Some(Block::Repeated(items)) => items
            .iter()
            .enumerate()
            .filter_map(|(index, item)| match item {
                Some(fields) => Some(T::expand(fields)),
                None => {
                    tracing::debug!("要素 {} はブロックではないためスキップします", index);
                    None
                }
            })
            .collect(),
        Some(Block::Absent) | None => Vec::new(),
        Some(other) => {
            tracing::debug!("ブロックリストが必要ですが {} が渡されました", other.kind_name());
            Vec::new()
        }
    }
}

/// 属性マップの中のネストブロックを展開
pub fn nested<T: Expand>(fields: &Fields, key: &str) -> Option<T> {
    expand_singleton(fields.get(key))
}

/// 空でない文字列だけを取り出す
///
/// 空文字列は「指定なし」として扱う。
pub fn string_field(fields: &Fields, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Block::as_str)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// `None` は空のブロックリストに、`Some` は1要素のリストになる
pub fn flatten_singleton<T: Flatten>(value: Option<&T>) -> Block {
    match value {
        Some(value) => Block::Singleton(Some(value.flatten())),
        None => Block::empty_list(),
    }
}

pub fn flatten_repeated<T: Flatten>(values: &[T]) -> Block {
    Block::Repeated(values.iter().map(|v| Some(v.flatten())).collect())
}

/// 値があるときだけ属性を書き込む
pub fn put_str(fields: &mut Fields, key: &str, value: Option<&String>) {
    if let Some(value) = value {
        fields.insert(key.to_string(), Block::Scalar(value.clone()));
    }
}

/// 値があるときだけネストブロックを書き込む
pub fn put_nested<T: Flatten>(fields: &mut Fields, key: &str, value: Option<&T>) {
    if value.is_some() {
        fields.insert(key.to_string(), flatten_singleton(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, PartialEq)]
    struct Target {
        host_name: Option<String>,
        protocol: Option<String>,
    }

    impl Expand for Target {
        fn expand(fields: &Fields) -> Self {
            Self {
                host_name: string_field(fields, "host_name"),
                protocol: string_field(fields, "protocol"),
            }
        }
    }

    impl Flatten for Target {
        fn flatten(&self) -> Fields {
            let mut fields = Fields::new();
            put_str(&mut fields, "host_name", self.host_name.as_ref());
            put_str(&mut fields, "protocol", self.protocol.as_ref());
            fields
        }
    }

    fn target_fields(host: &str, protocol: &str) -> Fields {
        let mut fields = Fields::new();
        fields.insert("host_name".into(), Block::scalar(host));
        fields.insert("protocol".into(), Block::scalar(protocol));
        fields
    }

    #[test]
    fn test_expand_singleton_absent_or_empty() {
        assert_eq!(expand_singleton::<Target>(None), None);
        assert_eq!(expand_singleton::<Target>(Some(&Block::Absent)), None);
        assert_eq!(expand_singleton::<Target>(Some(&Block::empty_list())), None);
        assert_eq!(expand_singleton::<Target>(Some(&Block::scalar("x"))), None);
    }

    #[test]
    fn test_expand_skips_empty_strings() {
        let block = Block::singleton(target_fields("example.com", ""));
        let target: Target = expand_singleton(Some(&block)).unwrap();
        assert_eq!(target.host_name.as_deref(), Some("example.com"));
        assert_eq!(target.protocol, None);
    }

    #[test]
    fn test_expand_present_but_blank_block() {
        let block = Block::singleton(Fields::new());
        assert_eq!(expand_singleton::<Target>(Some(&block)), Some(Target::default()));
    }

    #[test]
    fn test_expand_repeated_skips_malformed_elements() {
        let block = Block::Repeated(vec![
            Some(target_fields("a.example.com", "https")),
            None,
            Some(target_fields("b.example.com", "")),
        ]);
        let targets: Vec<Target> = expand_repeated(Some(&block));
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[1].host_name.as_deref(), Some("b.example.com"));
        assert!(expand_repeated::<Target>(Some(&Block::scalar("x"))).is_empty());
        assert!(expand_repeated::<Target>(None).is_empty());
    }

    #[test]
    fn test_flatten_none_is_empty_list() {
        assert_eq!(flatten_singleton::<Target>(None), Block::Singleton(None));
    }

    #[test]
    fn test_flatten_blank_value_is_single_empty_map() {
        assert_eq!(
            flatten_singleton(Some(&Target::default())),
            Block::Singleton(Some(Fields::new()))
        );
    }

    #[test]
    fn test_flatten_omits_unset_keys() {
        let target = Target {
            host_name: Some("example.com".into()),
            protocol: None,
        };
        let fields = target.flatten();
        assert_eq!(fields.len(), 1);
        assert!(!fields.contains_key("protocol"));
    }

    #[test]
    fn test_round_trip_normalizes_empty_strings() {
        let original = Block::singleton(target_fields("example.com", ""));
        let target: Option<Target> = expand_singleton(Some(&original));
        let flattened = flatten_singleton(target.as_ref());
        assert_eq!(flattened.normalized(), original.normalized());
        assert_eq!(
            flattened,
            Block::singleton({
                let mut f = Fields::new();
                f.insert("host_name".into(), Block::scalar("example.com"));
                f
            })
        );
    }
}
