use anyhow::{Context, Result};
use clap::Parser;
use thermal_imaging::DatasetLoader;

/// Report a thermal imaging dataset loader's configuration and try to load it
#[derive(Parser, Debug)]
#[command(name = "thermal-imaging", version, about, long_about = None)]
struct Args {
    /// Dataset location (not checked for existence)
    data_path: String,

    /// Dataset format tag [default: dmr]
    dataset_type: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let loader = match args.dataset_type {
        Some(dataset_type) => DatasetLoader::new(args.data_path, dataset_type),
        None => DatasetLoader::with_default_type(args.data_path),
    };

    log::info!(
        "thermal-imaging {}: {} dataset at {}",
        thermal_imaging::VERSION,
        loader.dataset_type(),
        loader.data_path()
    );

    let json = serde_json::to_string_pretty(&loader.metadata())
        .context("serializing loader metadata")?;
    println!("{json}");

    loader
        .load()
        .with_context(|| format!("loading {}", loader.data_path()))?;
    Ok(())
}
