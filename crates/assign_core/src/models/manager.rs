//! Manager roster descriptors.
//!
//! The engine only needs the integer id; everything else about a manager
//! (name, nationality, portrait, ...) is opaque payload. Pool order matters:
//! the roster is generated weakest-first, and tier slicing relies on that.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Manager id used when no pool is available
pub const DEFAULT_MANAGER_ID: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manager {
    pub id: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// On-disk shape of the manager roster file: `{"managers": [...]}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ManagerFile {
    #[serde(default)]
    pub managers: Vec<Manager>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manager_file_shape() {
        let file: ManagerFile = serde_json::from_value(json!({
            "managers": [
                {"id": 1, "name": "Kim"},
                {"id": 2, "name": "Lee"}
            ]
        }))
        .unwrap();
        assert_eq!(file.managers.len(), 2);
        assert_eq!(file.managers[0].id, 1);
        assert_eq!(file.managers[1].extra["name"], "Lee");
    }

    #[test]
    fn test_missing_managers_key_is_empty_pool() {
        let file: ManagerFile = serde_json::from_value(json!({})).unwrap();
        assert!(file.managers.is_empty());
    }
}
