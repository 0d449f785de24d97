//! Glue lookup payloads and status values

use serde::{Deserialize, Serialize};

pub mod transform_status {
    pub const NOT_READY: &str = "NOT_READY";
    pub const READY: &str = "READY";
    pub const DELETING: &str = "DELETING";
}

pub mod registry_status {
    pub const AVAILABLE: &str = "AVAILABLE";
    pub const DELETING: &str = "DELETING";
}

pub mod schema_status {
    pub const AVAILABLE: &str = "AVAILABLE";
    pub const PENDING: &str = "PENDING";
    pub const DELETING: &str = "DELETING";
}

pub mod schema_version_status {
    pub const AVAILABLE: &str = "AVAILABLE";
    pub const PENDING: &str = "PENDING";
    pub const FAILURE: &str = "FAILURE";
    pub const DELETING: &str = "DELETING";
}

pub mod trigger_state {
    pub const CREATING: &str = "CREATING";
    pub const CREATED: &str = "CREATED";
    pub const ACTIVATING: &str = "ACTIVATING";
    pub const ACTIVATED: &str = "ACTIVATED";
    pub const DEACTIVATING: &str = "DEACTIVATING";
    pub const DEACTIVATED: &str = "DEACTIVATED";
    pub const DELETING: &str = "DELETING";
    pub const UPDATING: &str = "UPDATING";
}

pub mod dev_endpoint_status {
    pub const PROVISIONING: &str = "PROVISIONING";
    pub const READY: &str = "READY";
    pub const FAILED: &str = "FAILED";
    pub const TERMINATING: &str = "TERMINATING";
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MlTransform {
    pub transform_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Registry {
    #[serde(default)]
    pub registry_arn: Option<String>,
    #[serde(default)]
    pub registry_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Schema {
    #[serde(default)]
    pub schema_arn: Option<String>,
    #[serde(default)]
    pub schema_name: Option<String>,
    #[serde(default)]
    pub schema_status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SchemaVersion {
    #[serde(default)]
    pub schema_version_id: Option<String>,
    #[serde(default)]
    pub version_number: Option<i64>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Trigger {
    pub name: String,
    #[serde(default)]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DevEndpoint {
    pub endpoint_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub failure_reason: Option<String>,
}
