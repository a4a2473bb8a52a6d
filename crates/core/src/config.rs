//! Install Configuration
//!
//! Caller-supplied parameters for one provisioning run, built from CLI
//! flags or loaded from a TOML manifest.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Parameters for one provisioning run.
///
/// `api_level`, `target`, and `arch` must form a coordinate the external
/// `sdkmanager` accepts; they are interpolated, never validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallConfig {
    /// Target platform API level.
    pub api_level: u32,
    /// System-image target flavor (e.g. `default`, `google_apis`).
    pub target: String,
    /// System-image CPU architecture (e.g. `x86_64`).
    pub arch: String,
    /// Pinned emulator build; the latest emulator is installed when unset.
    #[serde(default)]
    pub emulator_build: Option<String>,
    /// Installs `ndk;<version>` when set.
    #[serde(default)]
    pub ndk_version: Option<String>,
    /// Installs `cmake;<version>` when set.
    #[serde(default)]
    pub cmake_version: Option<String>,
}

impl InstallConfig {
    pub fn new(api_level: u32, target: impl Into<String>, arch: impl Into<String>) -> Self {
        Self {
            api_level,
            target: target.into(),
            arch: arch.into(),
            emulator_build: None,
            ndk_version: None,
            cmake_version: None,
        }
    }

    /// Load a configuration from a TOML manifest.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
        Ok(toml::from_str(&contents)?)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}
