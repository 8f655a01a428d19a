use std::collections::BTreeMap;

use thiserror::Error;

use super::model::LoaderMetadata;

/// Tag used when no dataset type is given.
pub const DEFAULT_DATASET_TYPE: &str = "dmr";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("loading '{dataset_type}' datasets is not implemented yet")]
    NotImplemented { dataset_type: String },
}

impl LoadError {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, LoadError::NotImplemented { .. })
    }
}

// ---------------------------------------------------------------------------
// DatasetLoader
// ---------------------------------------------------------------------------

/// Configuration for loading a thermal imaging dataset.
///
/// Both fields are fixed at construction. No validation is done: the path
/// may not exist and the tag may name a format nobody knows about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLoader {
    data_path: String,
    dataset_type: String,
}

impl DatasetLoader {
    pub fn new(data_path: impl Into<String>, dataset_type: impl Into<String>) -> Self {
        let loader = Self {
            data_path: data_path.into(),
            dataset_type: dataset_type.into(),
        };
        log::debug!(
            "Configured {} loader for {}",
            loader.dataset_type,
            loader.data_path
        );
        loader
    }

    /// Same as [`DatasetLoader::new`] with [`DEFAULT_DATASET_TYPE`].
    pub fn with_default_type(data_path: impl Into<String>) -> Self {
        Self::new(data_path, DEFAULT_DATASET_TYPE)
    }

    pub fn data_path(&self) -> &str {
        &self.data_path
    }

    pub fn dataset_type(&self) -> &str {
        &self.dataset_type
    }

    pub fn metadata(&self) -> LoaderMetadata {
        LoaderMetadata {
            dataset_type: self.dataset_type.clone(),
            data_path: self.data_path.clone(),
        }
    }

    /// Metadata as a plain mapping, keyed by `dataset_type` and `data_path`.
    pub fn get_metadata(&self) -> BTreeMap<String, String> {
        self.metadata().into_map()
    }

    /// Load the dataset.
    ///
    /// Always fails with [`LoadError::NotImplemented`]: no dataset format is
    /// supported yet.
    pub fn load(&self) -> Result<(), LoadError> {
        log::debug!("load() called for {} at {}", self.dataset_type, self.data_path);
        Err(LoadError::NotImplemented {
            dataset_type: self.dataset_type.clone(),
        })
    }
}
