pub mod config;
pub mod expand;
pub mod flatten;
pub mod id;
pub mod validate;
pub mod waiters;

use anyhow::Context;
use cloudweave_cloud_aws::s3::website_schema;
use cloudweave_core::{Document, parse_document_file};
use std::path::Path;

/// S3ウェブサイト設定のKDLファイルを読み込む（スキーマ検証はしない）
pub(crate) fn load_website_document(path: &Path) -> anyhow::Result<Document> {
    parse_document_file(path, &website_schema())
        .with_context(|| format!("{} の読み込みに失敗しました", path.display()))
}
