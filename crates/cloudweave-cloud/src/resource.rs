//! Resource lifecycle trait and configuration boundary

use crate::error::{CloudError, Result};
use async_trait::async_trait;
use cloudweave_core::{Block, Document, Schema};

/// Managed cloud resource
///
/// Each lifecycle step works on a [`ResourceData`] which carries the
/// configuration document and the persisted identity.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Resource type name (e.g., "aws_s3_bucket_website_configuration")
    fn type_name(&self) -> &str;

    /// Display name used in error context
    fn display_name(&self) -> &str;

    fn schema(&self) -> Schema;

    async fn create(&self, data: &mut ResourceData) -> Result<()>;

    /// Refresh `data` from the provider. Clears the identity when the
    /// resource no longer exists.
    async fn read(&self, data: &mut ResourceData) -> Result<()>;

    async fn update(&self, data: &mut ResourceData) -> Result<()>;

    async fn delete(&self, data: &mut ResourceData) -> Result<()>;
}

/// Configuration and identity of one resource instance
#[derive(Debug, Clone)]
pub struct ResourceData {
    id: String,
    document: Document,
    schema: Schema,
    is_new: bool,
}

impl ResourceData {
    /// Data for a resource that is about to be created
    pub fn new(schema: Schema, document: Document) -> Self {
        Self {
            id: String::new(),
            document,
            schema,
            is_new: true,
        }
    }

    /// Data for a resource that already exists (refresh, update, import)
    pub fn existing(schema: Schema, id: impl Into<String>, document: Document) -> Self {
        Self {
            id: id.into(),
            document,
            schema,
            is_new: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// An empty id marks the resource as gone
    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn is_new_resource(&self) -> bool {
        self.is_new
    }

    pub fn get(&self, key: &str) -> Option<&Block> {
        self.document.get(key)
    }

    /// Explicitly provided, non-empty string value
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.document.get_str(key)
    }

    pub fn set(&mut self, key: &str, value: Block) -> Result<()> {
        if !self.schema.contains(key) {
            return Err(CloudError::InvalidConfig(format!(
                "attribute '{key}' is not defined for this resource"
            )));
        }
        self.document.set(key, value);
        Ok(())
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}
