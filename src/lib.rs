//! Thermal imaging toolkit for breast cancer detection and analysis.
//!
//! Two pieces exist so far, both under [`data`]: the dataset loader
//! (configuration only, loading is not implemented) and the dataset catalog
//! built from YAML descriptions.

pub mod data;

pub use data::loader::{DatasetLoader, LoadError, DEFAULT_DATASET_TYPE};
pub use data::catalog::{Catalog, CatalogError, DatasetCard, DatasetEntry};
pub use data::model::LoaderMetadata;

// ---------------------------------------------------------------------------
// Package metadata
// ---------------------------------------------------------------------------

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = "Your Name";
pub const EMAIL: &str = "your.email@example.com";
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn package_metadata_is_populated() {
        assert_eq!(VERSION, "0.1.0");
        assert!(!AUTHOR.is_empty());
        assert!(EMAIL.contains('@'));
        assert!(DESCRIPTION.contains("thermal imaging"));
    }
}
