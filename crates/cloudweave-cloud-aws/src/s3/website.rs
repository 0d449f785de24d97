//! `aws_s3_bucket_website_configuration` resource

use super::api::{ERR_CODE_NO_SUCH_BUCKET, ERR_CODE_NO_SUCH_WEBSITE_CONFIGURATION, WebsiteApi};
use super::mapper::{expand_website_configuration, flatten_website_output};
use super::model::{GetBucketWebsiteInput, PutBucketWebsiteInput};
use super::schema::website_schema;
use async_trait::async_trait;
use cloudweave_cloud::{
    CloudError, Operation, OperationContext, Resource, ResourceData, Result, RetryConfig,
    retry_on_codes,
};
use cloudweave_core::{Block, IdentityShape, Schema, format_identity};
use std::sync::Arc;
use tracing::{info, warn};

/// Identity format: `BUCKET` or `BUCKET,EXPECTED_BUCKET_OWNER`
pub const BUCKET_WEBSITE_ID: IdentityShape = IdentityShape::new("BUCKET", "EXPECTED_BUCKET_OWNER");

const NOT_FOUND_CODES: &[&str] = &[ERR_CODE_NO_SUCH_BUCKET, ERR_CODE_NO_SUCH_WEBSITE_CONFIGURATION];
const DISPLAY_NAME: &str = "S3 Bucket Website Configuration";

/// Website hosting configuration of an S3 bucket
pub struct BucketWebsiteConfiguration {
    api: Arc<dyn WebsiteApi>,
    retry: RetryConfig,
}

impl BucketWebsiteConfiguration {
    pub fn new(api: Arc<dyn WebsiteApi>) -> Self {
        Self {
            api,
            retry: RetryConfig::default(),
        }
    }

    /// Retry settings for `NoSuchBucket` right after bucket creation
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    fn parse_id(&self, data: &ResourceData, operation: Operation) -> Result<(String, String)> {
        BUCKET_WEBSITE_ID
            .parse(data.id())
            .map_err(CloudError::from)
            .with_operation(operation, DISPLAY_NAME, data.id())
    }

    fn put_input(data: &ResourceData, bucket: String, owner: &str) -> PutBucketWebsiteInput {
        PutBucketWebsiteInput {
            bucket,
            expected_bucket_owner: non_empty(owner),
            website_configuration: expand_website_configuration(data.document()),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

#[async_trait]
impl Resource for BucketWebsiteConfiguration {
    fn type_name(&self) -> &str {
        "aws_s3_bucket_website_configuration"
    }

    fn display_name(&self) -> &str {
        DISPLAY_NAME
    }

    fn schema(&self) -> Schema {
        website_schema()
    }

    async fn create(&self, data: &mut ResourceData) -> Result<()> {
        let bucket = data.get_str("bucket").unwrap_or_default().to_string();
        let owner = data.get_str("expected_bucket_owner").unwrap_or_default().to_string();
        let input = Self::put_input(data, bucket.clone(), &owner);

        retry_on_codes(&self.retry, &[ERR_CODE_NO_SUCH_BUCKET], || {
            self.api.put_bucket_website(&input)
        })
        .await
        .with_operation(Operation::Create, DISPLAY_NAME, &bucket)?;

        data.set_id(format_identity(&bucket, &owner));
        info!(id = %data.id(), "{} created", DISPLAY_NAME);

        self.read(data).await
    }

    async fn read(&self, data: &mut ResourceData) -> Result<()> {
        let (bucket, owner) = self.parse_id(data, Operation::Read)?;
        let id = data.id().to_string();

        let input = GetBucketWebsiteInput {
            bucket: bucket.clone(),
            expected_bucket_owner: non_empty(&owner),
        };

        let output = match self.api.get_bucket_website(&input).await {
            Err(err) if !data.is_new_resource() && err.is_code(NOT_FOUND_CODES) => {
                warn!("{} ({}) not found, removing from state", DISPLAY_NAME, id);
                data.set_id("");
                return Ok(());
            }
            result => result.with_operation(Operation::Read, DISPLAY_NAME, &id)?,
        };

        let Some(output) = output else {
            if data.is_new_resource() {
                let err = CloudError::ResourceNotFound("empty output".to_string());
                return Err::<(), _>(err).with_operation(Operation::Read, DISPLAY_NAME, &id);
            }
            warn!("{} ({}) not found, removing from state", DISPLAY_NAME, id);
            data.set_id("");
            return Ok(());
        };

        data.set("bucket", Block::Scalar(bucket))?;
        data.set("expected_bucket_owner", Block::Scalar(owner))?;
        for (key, block) in flatten_website_output(&output).into_fields() {
            data.set(&key, block)?;
        }

        Ok(())
    }

    async fn update(&self, data: &mut ResourceData) -> Result<()> {
        let (bucket, owner) = self.parse_id(data, Operation::Update)?;
        let input = Self::put_input(data, bucket, &owner);

        self.api
            .put_bucket_website(&input)
            .await
            .with_operation(Operation::Update, DISPLAY_NAME, data.id())?;
        info!(id = %data.id(), "{} updated", DISPLAY_NAME);

        self.read(data).await
    }

    async fn delete(&self, data: &mut ResourceData) -> Result<()> {
        let (bucket, owner) = self.parse_id(data, Operation::Delete)?;

        let input = GetBucketWebsiteInput {
            bucket,
            expected_bucket_owner: non_empty(&owner),
        };

        match self.api.delete_bucket_website(&input).await {
            Err(err) if err.is_code(NOT_FOUND_CODES) => {
                info!(id = %data.id(), "{} already gone", DISPLAY_NAME);
            }
            result => result.with_operation(Operation::Delete, DISPLAY_NAME, data.id())?,
        }

        data.set_id("");
        Ok(())
    }
}
