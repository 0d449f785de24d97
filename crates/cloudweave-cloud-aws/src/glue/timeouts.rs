use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-waiter time budgets (seconds)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlueTimeouts {
    pub ml_transform_delete_secs: u64,
    pub registry_delete_secs: u64,
    pub schema_available_secs: u64,
    pub schema_delete_secs: u64,
    pub schema_version_available_secs: u64,
    pub trigger_create_secs: u64,
    pub trigger_delete_secs: u64,
    pub dev_endpoint_create_secs: u64,
    pub dev_endpoint_delete_secs: u64,
}

impl Default for GlueTimeouts {
    fn default() -> Self {
        Self {
            ml_transform_delete_secs: 2 * 60,
            registry_delete_secs: 2 * 60,
            schema_available_secs: 2 * 60,
            schema_delete_secs: 2 * 60,
            schema_version_available_secs: 2 * 60,
            trigger_create_secs: 5 * 60,
            trigger_delete_secs: 5 * 60,
            dev_endpoint_create_secs: 15 * 60,
            dev_endpoint_delete_secs: 15 * 60,
        }
    }
}

impl GlueTimeouts {
    /// Field names and configured seconds, in declaration order
    pub fn entries(&self) -> [(&'static str, u64); 9] {
        [
            ("ml_transform_delete_secs", self.ml_transform_delete_secs),
            ("registry_delete_secs", self.registry_delete_secs),
            ("schema_available_secs", self.schema_available_secs),
            ("schema_delete_secs", self.schema_delete_secs),
            ("schema_version_available_secs", self.schema_version_available_secs),
            ("trigger_create_secs", self.trigger_create_secs),
            ("trigger_delete_secs", self.trigger_delete_secs),
            ("dev_endpoint_create_secs", self.dev_endpoint_create_secs),
            ("dev_endpoint_delete_secs", self.dev_endpoint_delete_secs),
        ]
    }

    pub fn ml_transform_delete(&self) -> Duration {
        Duration::from_secs(self.ml_transform_delete_secs)
    }

    pub fn registry_delete(&self) -> Duration {
        Duration::from_secs(self.registry_delete_secs)
    }

    pub fn schema_available(&self) -> Duration {
        Duration::from_secs(self.schema_available_secs)
    }

    pub fn schema_delete(&self) -> Duration {
        Duration::from_secs(self.schema_delete_secs)
    }

    pub fn schema_version_available(&self) -> Duration {
        Duration::from_secs(self.schema_version_available_secs)
    }

    pub fn trigger_create(&self) -> Duration {
        Duration::from_secs(self.trigger_create_secs)
    }

    pub fn trigger_delete(&self) -> Duration {
        Duration::from_secs(self.trigger_delete_secs)
    }

    pub fn dev_endpoint_create(&self) -> Duration {
        Duration::from_secs(self.dev_endpoint_create_secs)
    }

    pub fn dev_endpoint_delete(&self) -> Duration {
        Duration::from_secs(self.dev_endpoint_delete_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let timeouts = GlueTimeouts::default();
        assert_eq!(timeouts.schema_available(), Duration::from_secs(120));
        assert_eq!(timeouts.trigger_create(), Duration::from_secs(300));
        assert_eq!(timeouts.dev_endpoint_delete(), Duration::from_secs(900));
    }

    #[test]
    fn test_entries_follow_fields() {
        let timeouts = GlueTimeouts {
            trigger_delete_secs: 7,
            ..GlueTimeouts::default()
        };
        let entries = timeouts.entries();
        assert_eq!(entries[0], ("ml_transform_delete_secs", 120));
        assert!(entries.contains(&("trigger_delete_secs", 7)));
    }

    #[test]
    fn test_partial_override() {
        let timeouts: GlueTimeouts =
            serde_json::from_str(r#"{"trigger_create_secs": 30}"#).unwrap();
        assert_eq!(timeouts.trigger_create(), Duration::from_secs(30));
        assert_eq!(timeouts.trigger_delete(), Duration::from_secs(300));
    }
}
