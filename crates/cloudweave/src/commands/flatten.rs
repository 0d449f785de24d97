use anyhow::Context;
use cloudweave_cloud_aws::s3::flatten_website_output;
use cloudweave_cloud_aws::s3::model::GetBucketWebsiteOutput;
use cloudweave_core::{Block, render_document};
use std::path::Path;

/// GetBucketWebsite の出力 (JSON) をKDLドキュメントとして出力
pub fn handle(file: &Path, bucket: Option<String>, owner: Option<String>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("{} の読み込みに失敗しました", file.display()))?;
    let output: GetBucketWebsiteOutput = serde_json::from_str(&content)
        .with_context(|| format!("{} は GetBucketWebsite の出力ではありません", file.display()))?;

    let mut doc = flatten_website_output(&output);
    if let Some(bucket) = bucket {
        doc.set("bucket", Block::Scalar(bucket));
    }
    if let Some(owner) = owner {
        doc.set("expected_bucket_owner", Block::Scalar(owner));
    }

    print!("{}", render_document(&doc));
    Ok(())
}
