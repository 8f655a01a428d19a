use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map as JsonMap, Value as JsonValue};
use thiserror::Error;

/// Index of all dataset cards, written next to the datasets directory.
pub const CARDS_FILE: &str = "datasets-cards.json";
/// Build summary, written next to [`CARDS_FILE`].
pub const BUILD_METADATA_FILE: &str = "build-metadata.json";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid dataset id '{0}'")]
    InvalidId(String),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CatalogError + '_ {
    move |source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    }
}

// ---------------------------------------------------------------------------
// DatasetCard – the lightweight part of a dataset description
// ---------------------------------------------------------------------------

/// Dashboard summary of a dataset. Only these fields go into [`CARDS_FILE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetCard {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub category: String,
    #[serde(default)]
    pub card: CardSummary,
}

/// The `card` block of a dataset file. Keys other than `description` and
/// `tags` are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardSummary {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: JsonMap<String, JsonValue>,
}

impl DatasetCard {
    /// Case-insensitive substring match on title, subtitle, description and tags.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        let hit = |s: &str| s.to_lowercase().contains(&query);
        hit(&self.title)
            || hit(&self.subtitle)
            || hit(&self.card.description)
            || self.card.tags.iter().any(|t| hit(t))
    }
}

// ---------------------------------------------------------------------------
// DatasetEntry – one parsed dataset file
// ---------------------------------------------------------------------------

/// A dataset description: its card plus the full document it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetEntry {
    pub card: DatasetCard,
    pub document: JsonValue,
}

impl DatasetEntry {
    /// Load a dataset description from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(io_error(path))?;
        Self::from_yaml(&content)
            .map_err(|e| CatalogError::Parse(format!("{}: {e}", path.display())))
    }

    /// Parse a dataset description from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        let document: JsonValue =
            serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse(e.to_string()))?;
        let card: DatasetCard = serde_json::from_value(document.clone())
            .map_err(|e| CatalogError::Parse(e.to_string()))?;

        // The id doubles as a file name.
        let id = card.id.as_str();
        if id.is_empty() || id.contains(['/', '\\']) || id.starts_with('.') {
            return Err(CatalogError::InvalidId(card.id));
        }

        Ok(Self { card, document })
    }

    /// File name of the full JSON document.
    pub fn json_file_name(&self) -> String {
        format!("{}.json", self.card.id)
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SortOrder {
    /// Category, then title.
    #[default]
    Category,
    Title,
    /// Keep catalog order.
    Unsorted,
}

#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    /// Exact category to keep; `None` keeps every category.
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: SortOrder,
}

fn text_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn by_category_then_title(a: &DatasetCard, b: &DatasetCard) -> Ordering {
    text_cmp(&a.category, &b.category).then_with(|| text_cmp(&a.title, &b.title))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Summary written to [`BUILD_METADATA_FILE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildMetadata {
    /// Seconds since the Unix epoch.
    pub build_timestamp: u64,
    pub datasets_count: usize,
    pub cards_file_size: usize,
    pub total_full_size: usize,
    pub performance_gain: String,
    pub datasets: Vec<CatalogIndexEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogIndexEntry {
    pub id: String,
    pub title: String,
    pub category: String,
}

/// All dataset descriptions, ordered by category and then title.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<DatasetEntry>,
}

impl Catalog {
    pub fn from_entries(mut entries: Vec<DatasetEntry>) -> Self {
        entries.sort_by(|a, b| by_category_then_title(&a.card, &b.card));
        Self { entries }
    }

    /// Read every `*.yaml` file in `dir` whose name does not start with `_`.
    ///
    /// Files that fail to parse are logged and skipped.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        let files = yaml_files(dir)?;
        log::info!("Found {} dataset files in {}", files.len(), dir.display());

        let mut entries = Vec::with_capacity(files.len());
        for path in &files {
            match DatasetEntry::load(path) {
                Ok(entry) => {
                    log::debug!("Parsed {} from {}", entry.card.id, path.display());
                    entries.push(entry);
                }
                Err(e) => log::error!("Skipping {}: {e}", path.display()),
            }
        }
        Ok(Self::from_entries(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DatasetEntry] {
        &self.entries
    }

    pub fn cards(&self) -> impl Iterator<Item = &DatasetCard> {
        self.entries.iter().map(|e| &e.card)
    }

    pub fn get(&self, id: &str) -> Option<&DatasetEntry> {
        self.entries.iter().find(|e| e.card.id == id)
    }

    pub fn count_by_category(&self, category: &str) -> usize {
        self.cards().filter(|c| c.category == category).count()
    }

    /// Cards passing the category and search filters, in the requested order.
    pub fn search(&self, query: &CatalogQuery) -> Vec<&DatasetCard> {
        let mut cards: Vec<&DatasetCard> = self
            .cards()
            .filter(|c| query.category.as_deref().map_or(true, |cat| c.category == cat))
            .filter(|c| query.search.as_deref().map_or(true, |q| c.matches(q)))
            .collect();

        match query.sort {
            SortOrder::Category => cards.sort_by(|a, b| by_category_then_title(a, b)),
            SortOrder::Title => cards.sort_by(|a, b| text_cmp(&a.title, &b.title)),
            SortOrder::Unsorted => {}
        }
        cards
    }

    /// Write one `<id>.json` per dataset into `datasets_dir`, then
    /// [`CARDS_FILE`] and [`BUILD_METADATA_FILE`] into `output_dir`.
    pub fn write(
        &self,
        datasets_dir: &Path,
        output_dir: &Path,
        build_timestamp: u64,
    ) -> Result<BuildMetadata, CatalogError> {
        fs::create_dir_all(datasets_dir).map_err(io_error(datasets_dir))?;
        fs::create_dir_all(output_dir).map_err(io_error(output_dir))?;

        let mut total_card_size = 0;
        let mut total_full_size = 0;
        for entry in &self.entries {
            let card_json = serde_json::to_string_pretty(&entry.card)?;
            let full_json = serde_json::to_string_pretty(&entry.document)?;
            total_card_size += card_json.len();
            total_full_size += full_json.len();

            let path = datasets_dir.join(entry.json_file_name());
            fs::write(&path, &full_json).map_err(io_error(&path))?;
            log::info!(
                "{:<20} card: {:.1}KB  full: {:.1}KB",
                entry.card.id,
                card_json.len() as f64 / 1024.0,
                full_json.len() as f64 / 1024.0
            );
        }

        let cards: Vec<&DatasetCard> = self.cards().collect();
        let cards_json = serde_json::to_string_pretty(&cards)?;
        let cards_path = output_dir.join(CARDS_FILE);
        fs::write(&cards_path, &cards_json).map_err(io_error(&cards_path))?;

        let gain = if total_full_size == 0 {
            0.0
        } else {
            (1.0 - total_card_size as f64 / total_full_size as f64) * 100.0
        };
        let metadata = BuildMetadata {
            build_timestamp,
            datasets_count: self.len(),
            cards_file_size: cards_json.len(),
            total_full_size,
            performance_gain: format!("{gain:.0}%"),
            datasets: self
                .cards()
                .map(|c| CatalogIndexEntry {
                    id: c.id.clone(),
                    title: c.title.clone(),
                    category: c.category.clone(),
                })
                .collect(),
        };
        let metadata_path = output_dir.join(BUILD_METADATA_FILE);
        fs::write(&metadata_path, serde_json::to_string_pretty(&metadata)?)
            .map_err(io_error(&metadata_path))?;

        Ok(metadata)
    }
}

fn yaml_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".yaml") && !name.starts_with('_') && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
