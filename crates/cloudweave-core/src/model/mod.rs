//! モデル定義
//!
//! 設定ドキュメントをタグ付きのツリーとして表現します。

mod block;
mod document;

// Re-exports
pub use block::*;
pub use document::*;
