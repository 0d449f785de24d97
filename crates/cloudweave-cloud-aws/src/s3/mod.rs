//! S3 bucket website configuration

mod api;
mod mapper;
pub mod model;
mod schema;
mod website;

pub use api::{ERR_CODE_NO_SUCH_BUCKET, ERR_CODE_NO_SUCH_WEBSITE_CONFIGURATION, WebsiteApi};
pub use mapper::{expand_website_configuration, flatten_website_output};
pub use schema::website_schema;
pub use website::{BUCKET_WEBSITE_ID, BucketWebsiteConfiguration};
