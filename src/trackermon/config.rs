use crate::commands::CommandOptions;
use crate::error::{Result, TrackermonError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILENAME: &str = "trackermon.json";

/// Configuration for trackermon, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrackermonConfig {
    /// Catalog file; `None` means `<data dir>/trackermon.json`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    /// Whether `add` resets an active `find` filter
    pub add_resets_filter: bool,

    /// Start from the sample catalog when no data file exists yet
    pub sample_data_on_first_run: bool,
}

impl Default for TrackermonConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            add_resets_filter: false,
            sample_data_on_first_run: true,
        }
    }
}

impl TrackermonConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TrackermonConfig = serde_json::from_str(&content).map_err(|e| {
            TrackermonError::Config(format!("{}: {}", config_path.display(), e))
        })?;
        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// The configured data file, or `<data_dir>/trackermon.json`.
    pub fn data_file_or(&self, data_dir: &Path) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| data_dir.join(DEFAULT_DATA_FILENAME))
    }

    pub fn command_options(&self) -> CommandOptions {
        CommandOptions {
            add_resets_filter: self.add_resets_filter,
        }
    }
}
