//! cloudweave cloud resource abstraction
//!
//! This crate provides the provider-agnostic pieces shared by every cloud
//! backend: the resource lifecycle trait, the configuration boundary
//! (`ResourceData`), retry helpers and the generic poll-until-state engine.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                 cloudweave CLI                  │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               cloudweave-cloud                  │
//! │  ┌──────────────────────────────────────────┐   │
//! │  │  trait Resource { create/read/... }      │   │
//! │  └──────────────────────────────────────────┘   │
//! │  ┌──────────────┐  ┌──────────────────────┐     │
//! │  │ retry_on_... │  │ StateChange engine   │     │
//! │  └──────────────┘  └──────────────────────┘     │
//! └───────┬─────────────────┬───────────────────────┘
//!         │                 │
//! ┌───────▼───────┐ ┌───────▼───────┐
//! │ s3 website    │ │ glue waiters  │
//! │ resource      │ │ (adapters)    │
//! └───────────────┘ └───────────────┘
//! ```

pub mod backoff;
pub mod error;
pub mod operation;
pub mod resource;
pub mod retry;
pub mod waiter;

// Re-exports
pub use backoff::{BackoffConfig, RetryConfig};
pub use error::{CloudError, Result};
pub use operation::{Operation, OperationContext};
pub use resource::{Resource, ResourceData};
pub use retry::retry_on_codes;
pub use waiter::{PollState, StateChange, StatusAdapter, WaitError};
