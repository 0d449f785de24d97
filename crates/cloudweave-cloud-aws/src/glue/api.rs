use super::model::{DevEndpoint, MlTransform, Registry, Schema, SchemaVersion, Trigger};
use async_trait::async_trait;
use cloudweave_cloud::Result;

pub const ERR_CODE_ENTITY_NOT_FOUND: &str = "EntityNotFoundException";

/// Glue lookups used by the waiters
///
/// A missing entity is reported as `CloudError::Api` with
/// [`ERR_CODE_ENTITY_NOT_FOUND`].
#[async_trait]
pub trait GlueApi: Send + Sync {
    async fn get_ml_transform(&self, transform_id: &str) -> Result<MlTransform>;

    async fn get_registry(&self, registry_id: &str) -> Result<Registry>;

    async fn get_schema(&self, schema_id: &str) -> Result<Schema>;

    async fn get_schema_version(&self, schema_version_id: &str) -> Result<SchemaVersion>;

    async fn get_trigger(&self, name: &str) -> Result<Trigger>;

    async fn get_dev_endpoint(&self, name: &str) -> Result<DevEndpoint>;
}

/// Map `EntityNotFoundException` to "gone"
pub fn found_or_gone<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(output) => Ok(Some(output)),
        Err(err) if err.is_code(&[ERR_CODE_ENTITY_NOT_FOUND]) => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudweave_cloud::CloudError;

    #[test]
    fn test_found_or_gone() {
        assert_eq!(found_or_gone(Ok(1)).unwrap(), Some(1));

        let gone: Result<i32> = Err(CloudError::api(ERR_CODE_ENTITY_NOT_FOUND, "no such trigger"));
        assert_eq!(found_or_gone(gone).unwrap(), None);

        let denied: Result<i32> = Err(CloudError::api("AccessDeniedException", "denied"));
        assert!(found_or_gone(denied).is_err());
    }
}
