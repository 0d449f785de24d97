//! cloudweave core
//!
//! 宣言的な設定ドキュメント（ブロックのツリー）と、
//! プロバイダーAPIの構造体との相互変換を担う基盤クレートです。
//!
//! - [`model`]: `Block` / `Document` のツリーモデル
//! - [`schema`]: 属性定義とバリデーション
//! - [`parser`] / [`render`]: KDL との読み書き
//! - [`mapper`]: expand / flatten の共通実装
//! - [`identity`]: 永続化されるリソースIDの組み立てと分解

pub mod error;
pub mod identity;
pub mod mapper;
pub mod model;
pub mod parser;
pub mod render;
pub mod schema;

pub use error::{DocumentError, Result};
pub use identity::{IDENTITY_SEPARATOR, IdentityShape, format_identity, parse_identity};
pub use mapper::{Expand, Flatten};
pub use model::{Block, Document, Fields};
pub use parser::{parse_document, parse_document_file};
pub use render::render_document;
pub use schema::{FieldKind, FieldSpec, Schema};
