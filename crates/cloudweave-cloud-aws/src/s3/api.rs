use super::model::{
    DeleteBucketWebsiteInput, GetBucketWebsiteInput, GetBucketWebsiteOutput, PutBucketWebsiteInput,
};
use async_trait::async_trait;
use cloudweave_cloud::Result;

pub const ERR_CODE_NO_SUCH_BUCKET: &str = "NoSuchBucket";
pub const ERR_CODE_NO_SUCH_WEBSITE_CONFIGURATION: &str = "NoSuchWebsiteConfiguration";

/// S3 website endpoints used by the bucket website resource
///
/// Implementations report provider failures as `CloudError::Api` with the
/// S3 error code.
#[async_trait]
pub trait WebsiteApi: Send + Sync {
    async fn put_bucket_website(&self, input: &PutBucketWebsiteInput) -> Result<()>;

    /// `Ok(None)` when the call succeeded but returned no body
    async fn get_bucket_website(
        &self,
        input: &GetBucketWebsiteInput,
    ) -> Result<Option<GetBucketWebsiteOutput>>;

    async fn delete_bucket_website(&self, input: &DeleteBucketWebsiteInput) -> Result<()>;
}
