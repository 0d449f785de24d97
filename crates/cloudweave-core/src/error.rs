use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("KDLパースエラー: {0}")]
    KdlParse(#[from] kdl::KdlError),

    #[error("IO エラー: {path}\n理由: {message}")]
    IoError { path: PathBuf, message: String },

    #[error("未知の属性です: {0}")]
    UnknownField(String),

    #[error("属性 '{0}' は値を1つ取ります")]
    MissingValue(String),

    #[error("属性 '{0}' はブロックではなく値を取ります")]
    ExpectedScalar(String),

    #[error("属性 '{0}' が重複しています")]
    DuplicateField(String),

    #[error("ブロック '{0}' は1つまでしか指定できません")]
    TooManyItems(String),

    #[error("設定が不正です:\n  - {}", .0.join("\n  - "))]
    Invalid(Vec<String>),

    #[error("unexpected format for ID ({id}), expected {expected}")]
    MalformedIdentity { id: String, expected: String },
}

pub type Result<T> = std::result::Result<T, DocumentError>;
