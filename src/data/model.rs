use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LoaderMetadata – configuration snapshot of a DatasetLoader
// ---------------------------------------------------------------------------

/// Typed view of the fields describing a loader instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoaderMetadata {
    /// Dataset format tag, e.g. `"dmr"`.
    pub dataset_type: String,
    /// Filesystem location the loader points at (not checked for existence).
    pub data_path: String,
}

impl LoaderMetadata {
    pub const DATASET_TYPE_KEY: &'static str = "dataset_type";
    pub const DATA_PATH_KEY: &'static str = "data_path";

    /// Flatten into a `key → value` mapping.
    pub fn into_map(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (Self::DATASET_TYPE_KEY.to_string(), self.dataset_type),
            (Self::DATA_PATH_KEY.to_string(), self.data_path),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LoaderMetadata {
        LoaderMetadata {
            dataset_type: "dmr".to_string(),
            data_path: "/path/to/data".to_string(),
        }
    }

    #[test]
    fn map_has_exactly_the_two_keys() {
        let map = sample().into_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["dataset_type"], "dmr");
        assert_eq!(map["data_path"], "/path/to/data");
    }

    #[test]
    fn json_uses_field_names_as_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["dataset_type"], "dmr");
        assert_eq!(obj["data_path"], "/path/to/data");
    }

    #[test]
    fn parses_from_json() {
        let parsed: LoaderMetadata =
            serde_json::from_str(r#"{"dataset_type":"dmr","data_path":"/path/to/data"}"#)
                .unwrap();
        assert_eq!(parsed, sample());
    }
}
