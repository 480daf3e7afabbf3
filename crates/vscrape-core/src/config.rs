use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::record::{Venue, NAME_FIELD};
use crate::schema::{RecordSchema, Schema};

/// Global configuration loaded from `~/.config/vscrape/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// CSV column order. Every exported record must only use these fields.
    #[serde(default = "default_schema")]
    pub schema: Vec<String>,
    /// Fields a record must carry to be kept.
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
    /// Directory exported CSVs are written to (None = current directory).
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// Prefix for generated filenames when none is given on the command line.
    #[serde(default)]
    pub filename_prefix: Option<String>,
}

fn default_schema() -> Vec<String> {
    Venue::FIELDS.iter().map(|f| f.to_string()).collect()
}

fn default_required_fields() -> Vec<String> {
    vec![NAME_FIELD.to_string()]
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            required_fields: default_required_fields(),
            output_dir: None,
            filename_prefix: None,
        }
    }
}

impl ScrapeConfig {
    pub fn schema(&self) -> Schema {
        Schema::new(self.schema.iter().cloned())
    }

    /// Rejects an empty or repetitive schema and required fields it cannot hold.
    pub fn validate(&self) -> Result<()> {
        if self.schema.is_empty() {
            bail!("config: schema must list at least one field");
        }
        let mut seen = HashSet::new();
        for field in &self.schema {
            if !seen.insert(field.as_str()) {
                bail!("config: schema lists field {field:?} twice");
            }
        }
        for field in &self.required_fields {
            if !seen.contains(field.as_str()) {
                bail!("config: required field {field:?} is not in the schema");
            }
        }
        Ok(())
    }

    /// Directory for exports, falling back to `fallback` when unset.
    pub fn output_dir_or(&self, fallback: &Path) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| fallback.to_path_buf())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("vscrape")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ScrapeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ScrapeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<ScrapeConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: ScrapeConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}
