// Report configuration loading.
//
// Purpose
// - Read the tunable constants of every report from one TOML file.
//
// Responsibilities
// - An explicit path wins over the IDLE_REPORT_CONFIG environment variable.
// - No path at all means built-in defaults. A path that cannot be read or parsed is an error.

use crate::modules::efficiency::core::config::EfficiencyConfig;
use crate::modules::idle_time::core::config::IdleTimeConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const CONFIG_ENV: &str = "IDLE_REPORT_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub idle_time: IdleTimeConfig,
    pub efficiency: EfficiencyConfig,
}

impl ReportConfig {
    pub fn from_toml_str(input: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(input).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input, path)
    }

    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading report config");
                Self::load(&path)
            }
            None => {
                tracing::debug!("no report config given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
