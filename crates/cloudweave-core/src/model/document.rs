//! 設定ドキュメント

use super::block::{Block, Fields, normalize_fields};

/// 1リソース分の設定ドキュメント（トップレベルの属性）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    fields: Fields,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fields(fields: Fields) -> Self {
        Self { fields }
    }

    /// 属性を取得
    ///
    /// 明示的に指定されていない属性（`Absent`）は `None`。
    pub fn get(&self, key: &str) -> Option<&Block> {
        self.fields.get(key).filter(|b| !matches!(b, Block::Absent))
    }

    /// 空でない文字列属性を取得
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)
            .and_then(Block::as_str)
            .filter(|v| !v.is_empty())
    }

    /// 属性を設定（`Absent` を設定すると属性を取り除く）
    pub fn set(&mut self, key: impl Into<String>, value: Block) {
        let key = key.into();
        if matches!(value, Block::Absent) {
            self.fields.remove(&key);
        } else {
            self.fields.insert(key, value);
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Block> {
        self.fields.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Block)> {
        self.fields.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(Block::is_unset)
    }

    /// 未設定の値と空文字列を取り除いたドキュメント
    pub fn normalized(&self) -> Document {
        Self::from_fields(normalize_fields(&self.fields))
    }
}

impl FromIterator<(String, Block)> for Document {
    fn from_iter<I: IntoIterator<Item = (String, Block)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (key, value) in iter {
            doc.set(key, value);
        }
        doc
    }
}
