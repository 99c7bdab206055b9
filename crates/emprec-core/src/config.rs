//! Configuration types for emprec.
//!
//! [`Config::load`] layers an optional `emprec.toml` in the working directory
//! and an optional explicit file on top of the embedded defaults.
//! [`Config::defaults`] returns the same defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::normalizer::{BoolPolicy, NormalizeOptions, NotesMismatch};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[sources]
data_dir = "data"
json     = "documents.json"
csv      = "documents.csv"
xml      = "documents.xml"
yaml     = "documents.yaml"

[normalize]
booleans       = "lenient"
notes_mismatch = "fail"

[view]
style           = "blocks"
separator_width = 40
"#;

/// Picked up from the working directory when present.
pub const LOCAL_CONFIG: &str = "emprec.toml";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub normalize: NormalizeConfig,
    #[serde(default)]
    pub view: ViewConfig,
}

/// `[sources]` section: where the sample documents live.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_json")]
    pub json: String,
    #[serde(default = "default_csv")]
    pub csv: String,
    #[serde(default = "default_xml")]
    pub xml: String,
    #[serde(default = "default_yaml")]
    pub yaml: String,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }
fn default_json() -> String { "documents.json".to_string() }
fn default_csv() -> String { "documents.csv".to_string() }
fn default_xml() -> String { "documents.xml".to_string() }
fn default_yaml() -> String { "documents.yaml".to_string() }

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            json: default_json(),
            csv: default_csv(),
            xml: default_xml(),
            yaml: default_yaml(),
        }
    }
}

/// `[normalize]` section.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct NormalizeConfig {
    #[serde(default)]
    pub booleans: BoolPolicy,
    #[serde(default)]
    pub notes_mismatch: NotesMismatch,
}

impl From<NormalizeConfig> for NormalizeOptions {
    fn from(cfg: NormalizeConfig) -> Self {
        NormalizeOptions {
            booleans: cfg.booleans,
            notes_mismatch: cfg.notes_mismatch,
        }
    }
}

/// How the presenter lays out a collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewStyle {
    /// One block of `Label: value` lines per record.
    #[default]
    Blocks,
    /// One aligned row per record under a header row.
    Table,
}

/// `[view]` section.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    pub style: ViewStyle,
    #[serde(default = "default_separator_width")]
    pub separator_width: u16,
}

fn default_separator_width() -> u16 { 40 }

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            style: ViewStyle::default(),
            separator_width: default_separator_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, then `./emprec.toml` if it exists, then
    /// `explicit` if given. An explicit file that does not exist is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(Path::new(LOCAL_CONFIG)).required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder.build()?.try_deserialize()
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// The four sample documents, in JSON, CSV, XML, YAML order.
    pub fn source_paths(&self) -> Vec<PathBuf> {
        let s = &self.sources;
        [&s.json, &s.csv, &s.xml, &s.yaml]
            .into_iter()
            .map(|name| s.data_dir.join(name))
            .collect()
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        self.normalize.into()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
