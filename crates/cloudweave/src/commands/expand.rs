use super::load_website_document;
use cloudweave_cloud_aws::s3::model::PutBucketWebsiteInput;
use cloudweave_cloud_aws::s3::{expand_website_configuration, website_schema};

/// ドキュメントを PutBucketWebsite の入力 (JSON) に変換して出力
pub fn handle(file: &std::path::Path) -> anyhow::Result<()> {
    let doc = load_website_document(file)?;
    website_schema().validate(&doc)?;

    let input = PutBucketWebsiteInput {
        bucket: doc.get_str("bucket").unwrap_or_default().to_string(),
        expected_bucket_owner: doc.get_str("expected_bucket_owner").map(str::to_string),
        website_configuration: expand_website_configuration(&doc),
    };

    tracing::debug!(bucket = %input.bucket, "expanded website configuration");
    println!("{}", serde_json::to_string_pretty(&input)?);
    Ok(())
}
