//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/valkit/valkit.toml`
//! 3. Local config: `<dir>/.valkit.toml`
//! 4. Environment variables: `VALKIT_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;

/// Unified configuration for valkit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Pretty-print JSON output (default: true)
    pub pretty: bool,
    /// Record field used as tree node label (default: "name")
    pub label_key: String,
    /// Treat JSON `null` input as undefined (default: false)
    pub null_as_undefined: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pretty: true,
            label_key: "name".into(),
            null_as_undefined: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub pretty: Option<bool>,
    pub label_key: Option<String>,
    pub null_as_undefined: Option<bool>,
}

/// Get the XDG config directory for valkit.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "valkit").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("valkit.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".valkit.toml")
}

/// The local config path in `dir`, if the file exists.
pub fn existing_local_config(dir: &Path) -> Option<PathBuf> {
    Some(local_config_path(dir)).filter(|p| p.exists())
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            pretty: overlay.pretty.unwrap_or(self.pretty),
            label_key: overlay
                .label_key
                .clone()
                .unwrap_or_else(|| self.label_key.clone()),
            null_as_undefined: overlay.null_as_undefined.unwrap_or(self.null_as_undefined),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.valkit.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        let local = local_dir.and_then(existing_local_config);
        Self::load_from(global.as_deref(), local.as_deref())
    }

    /// Load settings from explicit file locations, then apply env overrides.
    #[instrument(level = "debug")]
    pub fn load_from(global: Option<&Path>, local: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        for path in [global, local].into_iter().flatten() {
            let raw = load_raw_settings(path)?;
            debug!(path = %path.display(), "merging config file");
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply VALKIT_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("VALKIT")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_bool("pretty") {
            settings.pretty = val;
        }
        if let Ok(val) = config.get_string("label_key") {
            settings.label_key = val;
        }
        if let Ok(val) = config.get_bool("null_as_undefined") {
            settings.null_as_undefined = val;
        }

        Ok(settings)
    }

    /// Render effective settings as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
