use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use thermal_imaging::data::catalog::{Catalog, CatalogQuery, SortOrder, CARDS_FILE};

/// Build and query the dataset catalog from dataset YAML descriptions
#[derive(Parser, Debug)]
#[command(name = "build-catalog", version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write per-dataset JSON files, the cards index and build metadata
    Build {
        /// Directory holding the `*.yaml` dataset files
        datasets_dir: PathBuf,

        /// Where the cards index and build metadata go [default: parent of DATASETS_DIR]
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the cards matching a filter as JSON
    Search {
        /// Directory holding the `*.yaml` dataset files
        datasets_dir: PathBuf,

        /// Text matched against title, subtitle, description and tags
        #[arg(short, long)]
        query: Option<String>,

        /// Keep only this category
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long, value_enum, default_value_t = SortOrder::Category)]
        sort: SortOrder,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Args::parse().command {
        Command::Build {
            datasets_dir,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| {
                datasets_dir
                    .parent()
                    .map(PathBuf::from)
                    .unwrap_or_else(|| datasets_dir.clone())
            });
            let catalog = Catalog::from_dir(&datasets_dir)
                .with_context(|| format!("reading {}", datasets_dir.display()))?;
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .context("system clock before Unix epoch")?
                .as_secs();

            let metadata = catalog
                .write(&datasets_dir, &output_dir, timestamp)
                .context("writing catalog")?;

            log::info!(
                "Wrote {} ({:.1}KB) for {} datasets, {} smaller than the full data",
                output_dir.join(CARDS_FILE).display(),
                metadata.cards_file_size as f64 / 1024.0,
                metadata.datasets_count,
                metadata.performance_gain
            );
            println!("{}", serde_json::to_string_pretty(&metadata)?);
        }
        Command::Search {
            datasets_dir,
            query,
            category,
            sort,
        } => {
            let catalog = Catalog::from_dir(&datasets_dir)
                .with_context(|| format!("reading {}", datasets_dir.display()))?;
            let cards = catalog.search(&CatalogQuery {
                category,
                search: query,
                sort,
            });
            println!("{}", serde_json::to_string_pretty(&cards)?);
        }
    }
    Ok(())
}
