/// Data layer: loader configuration, its metadata view, and the dataset catalog.
///
/// Architecture:
/// ```text
///   data_path + dataset_type
///        │
///        ▼
///   ┌───────────────┐
///   │ DatasetLoader │  configured, unloaded
///   └───────────────┘
///        │                     │
///        ▼                     ▼
///   ┌────────────────┐   ┌─────────────────────────┐
///   │ LoaderMetadata │   │ load() → NotImplemented │
///   └────────────────┘   └─────────────────────────┘
///
///   datasets/*.yaml
///        │
///        ▼
///   ┌─────────┐
///   │ catalog │  cards index, per-dataset JSON, build metadata
///   └─────────┘
/// ```

pub mod catalog;
pub mod loader;
pub mod model;
