//! Glue waiters: state sets per entity plus one entry point per waiter

use super::api::GlueApi;
use super::model::{
    DevEndpoint, MlTransform, Registry, Schema, SchemaVersion, Trigger, dev_endpoint_status,
    registry_status, schema_status, schema_version_status, transform_status, trigger_state,
};
use super::status::{
    DevEndpointStatus, MlTransformStatus, RegistryStatus, SchemaStatus, SchemaVersionStatus,
    TriggerStatus,
};
use super::timeouts::GlueTimeouts;
use cloudweave_cloud::{BackoffConfig, StateChange, WaitError};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub type WaitResult<T> = std::result::Result<Option<T>, WaitError<T>>;

/// Available Glue waiters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlueWaiter {
    MlTransformDeleted,
    RegistryDeleted,
    SchemaAvailable,
    SchemaDeleted,
    SchemaVersionAvailable,
    TriggerCreated,
    TriggerDeleted,
    DevEndpointCreated,
    DevEndpointDeleted,
}

impl GlueWaiter {
    pub const ALL: [GlueWaiter; 9] = [
        GlueWaiter::MlTransformDeleted,
        GlueWaiter::RegistryDeleted,
        GlueWaiter::SchemaAvailable,
        GlueWaiter::SchemaDeleted,
        GlueWaiter::SchemaVersionAvailable,
        GlueWaiter::TriggerCreated,
        GlueWaiter::TriggerDeleted,
        GlueWaiter::DevEndpointCreated,
        GlueWaiter::DevEndpointDeleted,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GlueWaiter::MlTransformDeleted => "ml_transform_deleted",
            GlueWaiter::RegistryDeleted => "registry_deleted",
            GlueWaiter::SchemaAvailable => "schema_available",
            GlueWaiter::SchemaDeleted => "schema_deleted",
            GlueWaiter::SchemaVersionAvailable => "schema_version_available",
            GlueWaiter::TriggerCreated => "trigger_created",
            GlueWaiter::TriggerDeleted => "trigger_deleted",
            GlueWaiter::DevEndpointCreated => "dev_endpoint_created",
            GlueWaiter::DevEndpointDeleted => "dev_endpoint_deleted",
        }
    }

    pub fn pending(&self) -> &'static [&'static str] {
        match self {
            GlueWaiter::MlTransformDeleted => &[
                transform_status::NOT_READY,
                transform_status::READY,
                transform_status::DELETING,
            ],
            GlueWaiter::RegistryDeleted => &[registry_status::DELETING],
            GlueWaiter::SchemaAvailable => &[schema_status::PENDING],
            GlueWaiter::SchemaDeleted => &[schema_status::DELETING],
            GlueWaiter::SchemaVersionAvailable => &[schema_version_status::PENDING],
            GlueWaiter::TriggerCreated => &[
                trigger_state::ACTIVATING,
                trigger_state::CREATING,
                trigger_state::UPDATING,
            ],
            GlueWaiter::TriggerDeleted => &[trigger_state::DELETING],
            GlueWaiter::DevEndpointCreated => &[dev_endpoint_status::PROVISIONING],
            GlueWaiter::DevEndpointDeleted => &[dev_endpoint_status::TERMINATING],
        }
    }

    /// Empty for deletion waiters
    pub fn target(&self) -> &'static [&'static str] {
        match self {
            GlueWaiter::SchemaAvailable => &[schema_status::AVAILABLE],
            GlueWaiter::SchemaVersionAvailable => &[schema_version_status::AVAILABLE],
            GlueWaiter::TriggerCreated => &[trigger_state::ACTIVATED, trigger_state::CREATED],
            GlueWaiter::DevEndpointCreated => &[dev_endpoint_status::READY],
            GlueWaiter::MlTransformDeleted
            | GlueWaiter::RegistryDeleted
            | GlueWaiter::SchemaDeleted
            | GlueWaiter::TriggerDeleted
            | GlueWaiter::DevEndpointDeleted => &[],
        }
    }

    /// States that end the wait with an error even when no target is set
    pub fn failure(&self) -> &'static [&'static str] {
        match self {
            GlueWaiter::DevEndpointCreated | GlueWaiter::DevEndpointDeleted => {
                &[dev_endpoint_status::FAILED]
            }
            _ => &[],
        }
    }

    pub fn timeout(&self, timeouts: &GlueTimeouts) -> Duration {
        match self {
            GlueWaiter::MlTransformDeleted => timeouts.ml_transform_delete(),
            GlueWaiter::RegistryDeleted => timeouts.registry_delete(),
            GlueWaiter::SchemaAvailable => timeouts.schema_available(),
            GlueWaiter::SchemaDeleted => timeouts.schema_delete(),
            GlueWaiter::SchemaVersionAvailable => timeouts.schema_version_available(),
            GlueWaiter::TriggerCreated => timeouts.trigger_create(),
            GlueWaiter::TriggerDeleted => timeouts.trigger_delete(),
            GlueWaiter::DevEndpointCreated => timeouts.dev_endpoint_create(),
            GlueWaiter::DevEndpointDeleted => timeouts.dev_endpoint_delete(),
        }
    }
}

impl std::fmt::Display for GlueWaiter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for GlueWaiter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        GlueWaiter::ALL
            .into_iter()
            .find(|w| w.name() == s)
            .ok_or_else(|| format!("unknown glue waiter: {s}"))
    }
}

/// Entry points for the Glue waiters
pub struct GlueWaiters {
    api: Arc<dyn GlueApi>,
    timeouts: GlueTimeouts,
    backoff: BackoffConfig,
    cancellation: Option<CancellationToken>,
}

impl GlueWaiters {
    pub fn new(api: Arc<dyn GlueApi>, timeouts: GlueTimeouts) -> Self {
        Self {
            api,
            timeouts,
            backoff: BackoffConfig::default(),
            cancellation: None,
        }
    }

    pub fn with_backoff(mut self, backoff: BackoffConfig) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn state_change(&self, waiter: GlueWaiter) -> StateChange {
        let change = StateChange::new(waiter.pending(), waiter.target(), waiter.timeout(&self.timeouts))
            .with_failure(waiter.failure())
            .with_backoff(self.backoff.clone());

        match &self.cancellation {
            Some(token) => change.with_cancellation(token.clone()),
            None => change,
        }
    }

    pub async fn ml_transform_deleted(&self, transform_id: &str) -> WaitResult<MlTransform> {
        info!(waiter = %GlueWaiter::MlTransformDeleted, id = transform_id, "waiting");
        let adapter = MlTransformStatus::new(self.api.as_ref(), transform_id);
        self.state_change(GlueWaiter::MlTransformDeleted)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn registry_deleted(&self, registry_id: &str) -> WaitResult<Registry> {
        info!(waiter = %GlueWaiter::RegistryDeleted, id = registry_id, "waiting");
        let adapter = RegistryStatus::new(self.api.as_ref(), registry_id);
        self.state_change(GlueWaiter::RegistryDeleted)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn schema_available(&self, schema_id: &str) -> WaitResult<Schema> {
        info!(waiter = %GlueWaiter::SchemaAvailable, id = schema_id, "waiting");
        let adapter = SchemaStatus::new(self.api.as_ref(), schema_id);
        self.state_change(GlueWaiter::SchemaAvailable)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn schema_deleted(&self, schema_id: &str) -> WaitResult<Schema> {
        info!(waiter = %GlueWaiter::SchemaDeleted, id = schema_id, "waiting");
        let adapter = SchemaStatus::new(self.api.as_ref(), schema_id);
        self.state_change(GlueWaiter::SchemaDeleted)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn schema_version_available(
        &self,
        schema_version_id: &str,
    ) -> WaitResult<SchemaVersion> {
        info!(waiter = %GlueWaiter::SchemaVersionAvailable, id = schema_version_id, "waiting");
        let adapter = SchemaVersionStatus::new(self.api.as_ref(), schema_version_id);
        self.state_change(GlueWaiter::SchemaVersionAvailable)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn trigger_created(&self, name: &str) -> WaitResult<Trigger> {
        info!(waiter = %GlueWaiter::TriggerCreated, id = name, "waiting");
        let adapter = TriggerStatus::new(self.api.as_ref(), name);
        self.state_change(GlueWaiter::TriggerCreated)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn trigger_deleted(&self, name: &str) -> WaitResult<Trigger> {
        info!(waiter = %GlueWaiter::TriggerDeleted, id = name, "waiting");
        let adapter = TriggerStatus::new(self.api.as_ref(), name);
        self.state_change(GlueWaiter::TriggerDeleted)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn dev_endpoint_created(&self, name: &str) -> WaitResult<DevEndpoint> {
        info!(waiter = %GlueWaiter::DevEndpointCreated, id = name, "waiting");
        let adapter = DevEndpointStatus::new(self.api.as_ref(), name);
        self.state_change(GlueWaiter::DevEndpointCreated)
            .wait_for_state(&adapter)
            .await
    }

    pub async fn dev_endpoint_deleted(&self, name: &str) -> WaitResult<DevEndpoint> {
        info!(waiter = %GlueWaiter::DevEndpointDeleted, id = name, "waiting");
        let adapter = DevEndpointStatus::new(self.api.as_ref(), name);
        self.state_change(GlueWaiter::DevEndpointDeleted)
            .wait_for_state(&adapter)
            .await
    }
}
