use thermal_imaging::{DatasetLoader, LoadError, LoaderMetadata, DEFAULT_DATASET_TYPE};

#[test]
fn dataset_loader_initialization() {
    let loader = DatasetLoader::new("/path/to/data", "dmr");
    assert_eq!(loader.data_path(), "/path/to/data");
    assert_eq!(loader.dataset_type(), "dmr");
}

#[test]
fn dataset_loader_metadata() {
    let loader = DatasetLoader::new("/path/to/data", "dmr");
    let metadata = loader.get_metadata();
    assert!(metadata.contains_key("dataset_type"));
    assert!(metadata.contains_key("data_path"));
    assert_eq!(metadata["dataset_type"], "dmr");
    assert_eq!(metadata["data_path"], "/path/to/data");
}

#[test]
fn dataset_loader_load_not_implemented() {
    let loader = DatasetLoader::with_default_type("/path/to/data");
    assert_eq!(loader.dataset_type(), DEFAULT_DATASET_TYPE);
    match loader.load() {
        Err(LoadError::NotImplemented { dataset_type }) => {
            assert_eq!(dataset_type, DEFAULT_DATASET_TYPE)
        }
        other => panic!("expected NotImplemented, got {other:?}"),
    }
}

#[test]
fn metadata_serializes_to_json_object() {
    let loader = DatasetLoader::new("/path/to/data", "dmr");
    let json = serde_json::to_string(&loader.metadata()).unwrap();
    let back: LoaderMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back, loader.metadata());
}

#[test]
fn load_error_converts_into_anyhow() {
    let loader = DatasetLoader::new("/does/not/exist", "dmr");
    let err: anyhow::Error = loader.load().unwrap_err().into();
    assert!(err.downcast_ref::<LoadError>().is_some_and(LoadError::is_not_implemented));
}
