//! AWS resources for cloudweave
//!
//! # Resources
//!
//! - **S3**: `aws_s3_bucket_website_configuration` lifecycle plus the
//!   expand / flatten mapping between configuration documents and the
//!   `PutBucketWebsite` / `GetBucketWebsite` payloads
//! - **Glue**: state waiters for ML transforms, registries, schemas,
//!   schema versions, triggers and dev endpoints
//!
//! Provider calls go through the [`s3::WebsiteApi`] and [`glue::GlueApi`]
//! traits so any client (SDK, HTTP, fake) can be plugged in.
//!
//! # Example
//!
//! ```ignore
//! use cloudweave_cloud_aws::glue::{GlueTimeouts, GlueWaiters};
//!
//! let waiters = GlueWaiters::new(api, GlueTimeouts::default());
//! let endpoint = waiters.dev_endpoint_created("etl-dev").await?;
//! ```

pub mod glue;
pub mod s3;

pub use glue::{GlueApi, GlueTimeouts, GlueWaiter, GlueWaiters};
pub use s3::{BucketWebsiteConfiguration, WebsiteApi};
