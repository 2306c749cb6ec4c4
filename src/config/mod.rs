use crate::errors::{AppError, AppResult};
use crate::export::{ColumnSelection, ExportFormat};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Keys written by `init`, used by `config --check`.
const KNOWN_FIELDS: [&str; 4] = ["default_format", "include_sensitive", "columns", "log_level"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_format")]
    pub default_format: String,
    /// Phone numbers may appear in exports.
    #[serde(default = "default_include_sensitive")]
    pub include_sensitive: bool,
    #[serde(default)]
    pub columns: ColumnSelection,
    /// Fallback filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_format() -> String {
    ExportFormat::Excel.as_str().to_string()
}
fn default_include_sensitive() -> bool {
    true
}
fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            include_sensitive: default_include_sensitive(),
            columns: ColumnSelection::default(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// `~/.helferlist`, or the working directory when there is no home.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".helferlist")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("helferlist.conf")
    }

    /// Loads `path`, or the defaults when the file does not exist.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))
    }

    /// Writes the configuration as YAML, creating parent directories.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn export_format(&self) -> AppResult<ExportFormat> {
        ExportFormat::from_str(&self.default_format, true)
            .map_err(|_| AppError::InvalidExportFormat(self.default_format.clone()))
    }

    /// Top level keys the file at `path` does not set (their defaults apply).
    pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;

        let missing = KNOWN_FIELDS
            .into_iter()
            .filter(|key| value.get(*key).is_none())
            .collect();
        Ok(missing)
    }
}
