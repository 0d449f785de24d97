use cloudweave_cloud_aws::s3::BUCKET_WEBSITE_ID;
use colored::Colorize;

pub fn format(bucket: &str, owner: Option<&str>) -> anyhow::Result<()> {
    println!("{}", BUCKET_WEBSITE_ID.format(bucket, owner.unwrap_or_default()));
    Ok(())
}

pub fn parse(id: &str) -> anyhow::Result<()> {
    let (bucket, owner) = BUCKET_WEBSITE_ID.parse(id)?;
    println!("bucket: {}", bucket.cyan());
    if owner.is_empty() {
        println!("expected_bucket_owner: {}", "(なし)".dimmed());
    } else {
        println!("expected_bucket_owner: {}", owner.cyan());
    }
    Ok(())
}
