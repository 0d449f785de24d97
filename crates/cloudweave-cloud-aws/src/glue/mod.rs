//! Glue state waiters

mod api;
pub mod model;
mod status;
mod timeouts;
mod waiter;

pub use api::{ERR_CODE_ENTITY_NOT_FOUND, GlueApi, found_or_gone};
pub use status::{
    DevEndpointStatus, MlTransformStatus, RegistryStatus, SchemaStatus, SchemaVersionStatus,
    TriggerStatus,
};
pub use timeouts::GlueTimeouts;
pub use waiter::{GlueWaiter, GlueWaiters, WaitResult};
