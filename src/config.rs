use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{BugforgeError, Result};

/// Category-specific tuning parameters for one bug-injection call.
///
/// The map is free-form: each strategy reads only the keys it understands
/// and falls back to a documented default when a key is absent or
/// malformed. Curriculum definitions carry these as plain JSON objects, so
/// the backing store is a [`serde_json::Map`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BugConfig {
    values: Map<String, Value>,
}

impl BugConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(BugforgeError::Configuration(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.values.get(key).and_then(Value::as_u64)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.values.get(key).and_then(Value::as_array).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_requires_object() {
        let config = BugConfig::from_value(json!({"pair": ["turnLeft", "turnRight"]}));
        assert!(config.is_ok());

        let config = BugConfig::from_value(json!(["turnLeft", "turnRight"]));
        assert!(config.is_err());
    }

    #[test]
    fn test_typed_accessors_tolerate_missing_keys() {
        let config = BugConfig::new();
        assert!(config.get_str("pair").is_none());
        assert!(config.get_u64("count").is_none());
        assert!(config.get_bool("enabled").is_none());
        assert!(config.get_array("pair").is_none());
    }

    #[test]
    fn test_accessors_reject_wrong_types() {
        let mut config = BugConfig::new();
        config.insert("count", json!("three"));
        assert!(config.get_u64("count").is_none());
        assert_eq!(config.get_str("count"), Some("three"));
    }
}
