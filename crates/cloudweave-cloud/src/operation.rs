//! Lifecycle operations for cloud resources

use crate::error::{CloudError, Result};
use serde::{Deserialize, Serialize};

/// Lifecycle operation performed on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "creating"),
            Operation::Read => write!(f, "reading"),
            Operation::Update => write!(f, "updating"),
            Operation::Delete => write!(f, "deleting"),
        }
    }
}

/// Attach operation name and resource identity to an error
pub trait OperationContext<T> {
    fn with_operation(self, operation: Operation, resource: &str, id: &str) -> Result<T>;
}

impl<T> OperationContext<T> for Result<T> {
    fn with_operation(self, operation: Operation, resource: &str, id: &str) -> Result<T> {
        self.map_err(|source| match source {
            // already wrapped by a nested operation (e.g. read after create)
            CloudError::Operation { .. } => source,
            source => CloudError::Operation {
                operation,
                resource: resource.to_string(),
                id: id.to_string(),
                source: Box::new(source),
            },
        })
    }
}
