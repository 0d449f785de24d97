//! Status adapters: how each Glue entity is looked up and what its state is
//!
//! Every adapter maps `EntityNotFoundException` to "gone".

use super::api::{GlueApi, found_or_gone};
use super::model::{
    DevEndpoint, MlTransform, Registry, Schema, SchemaVersion, Trigger, dev_endpoint_status,
};
use async_trait::async_trait;
use cloudweave_cloud::{Result, StatusAdapter};

fn state_of(status: &Option<String>) -> String {
    status.clone().unwrap_or_default()
}

pub struct MlTransformStatus<'a> {
    api: &'a dyn GlueApi,
    transform_id: &'a str,
}

impl<'a> MlTransformStatus<'a> {
    pub fn new(api: &'a dyn GlueApi, transform_id: &'a str) -> Self {
        Self { api, transform_id }
    }
}

#[async_trait]
impl<'a> StatusAdapter for MlTransformStatus<'a> {
    type Request = String;
    type Output = MlTransform;

    fn build_request(&self) -> String {
        self.transform_id.to_string()
    }

    async fn query(&self, request: &String) -> Result<Option<MlTransform>> {
        found_or_gone(self.api.get_ml_transform(request).await)
    }

    fn extract_state(&self, output: &MlTransform) -> String {
        state_of(&output.status)
    }
}

pub struct RegistryStatus<'a> {
    api: &'a dyn GlueApi,
    registry_id: &'a str,
}

impl<'a> RegistryStatus<'a> {
    pub fn new(api: &'a dyn GlueApi, registry_id: &'a str) -> Self {
        Self { api, registry_id }
    }
}

#[async_trait]
impl<'a> StatusAdapter for RegistryStatus<'a> {
    type Request = String;
    type Output = Registry;

    fn build_request(&self) -> String {
        self.registry_id.to_string()
    }

    async fn query(&self, request: &String) -> Result<Option<Registry>> {
        found_or_gone(self.api.get_registry(request).await)
    }

    fn extract_state(&self, output: &Registry) -> String {
        state_of(&output.status)
    }
}

pub struct SchemaStatus<'a> {
    api: &'a dyn GlueApi,
    schema_id: &'a str,
}

impl<'a> SchemaStatus<'a> {
    pub fn new(api: &'a dyn GlueApi, schema_id: &'a str) -> Self {
        Self { api, schema_id }
    }
}

#[async_trait]
impl<'a> StatusAdapter for SchemaStatus<'a> {
    type Request = String;
    type Output = Schema;

    fn build_request(&self) -> String {
        self.schema_id.to_string()
    }

    async fn query(&self, request: &String) -> Result<Option<Schema>> {
        found_or_gone(self.api.get_schema(request).await)
    }

    fn extract_state(&self, output: &Schema) -> String {
        state_of(&output.schema_status)
    }
}

pub struct SchemaVersionStatus<'a> {
    api: &'a dyn GlueApi,
    schema_version_id: &'a str,
}

impl<'a> SchemaVersionStatus<'a> {
    pub fn new(api: &'a dyn GlueApi, schema_version_id: &'a str) -> Self {
        Self {
            api,
            schema_version_id,
        }
    }
}

#[async_trait]
impl<'a> StatusAdapter for SchemaVersionStatus<'a> {
    type Request = String;
    type Output = SchemaVersion;

    fn build_request(&self) -> String {
        self.schema_version_id.to_string()
    }

    async fn query(&self, request: &String) -> Result<Option<SchemaVersion>> {
        found_or_gone(self.api.get_schema_version(request).await)
    }

    fn extract_state(&self, output: &SchemaVersion) -> String {
        state_of(&output.status)
    }
}

pub struct TriggerStatus<'a> {
    api: &'a dyn GlueApi,
    name: &'a str,
}

impl<'a> TriggerStatus<'a> {
    pub fn new(api: &'a dyn GlueApi, name: &'a str) -> Self {
        Self { api, name }
    }
}

#[async_trait]
impl<'a> StatusAdapter for TriggerStatus<'a> {
    type Request = String;
    type Output = Trigger;

    fn build_request(&self) -> String {
        self.name.to_string()
    }

    async fn query(&self, request: &String) -> Result<Option<Trigger>> {
        found_or_gone(self.api.get_trigger(request).await)
    }

    fn extract_state(&self, output: &Trigger) -> String {
        state_of(&output.state)
    }
}

pub struct DevEndpointStatus<'a> {
    api: &'a dyn GlueApi,
    name: &'a str,
}

impl<'a> DevEndpointStatus<'a> {
    pub fn new(api: &'a dyn GlueApi, name: &'a str) -> Self {
        Self { api, name }
    }
}

#[async_trait]
impl<'a> StatusAdapter for DevEndpointStatus<'a> {
    type Request = String;
    type Output = DevEndpoint;

    fn build_request(&self) -> String {
        self.name.to_string()
    }

    async fn query(&self, request: &String) -> Result<Option<DevEndpoint>> {
        found_or_gone(self.api.get_dev_endpoint(request).await)
    }

    fn extract_state(&self, output: &DevEndpoint) -> String {
        state_of(&output.status)
    }

    fn failure_reason(&self, output: &DevEndpoint) -> Option<String> {
        if output.status.as_deref() == Some(dev_endpoint_status::FAILED) {
            output.failure_reason.clone()
        } else {
            None
        }
    }
}
