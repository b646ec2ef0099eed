//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Config file (~/.specseed/config.yaml, or an explicit `--config` path)
//! 3. Environment variables (SPECSEED_* prefix)
//! 4. CLI flags (handled by caller)

use super::ScaffoldConfig;
use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde::de::DeserializeOwned;
use std::env;
use std::fs;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const DEFAULTS_FILE: &str = "scaffold-defaults.yaml";
const CONFIG_FILE: &str = "config.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,

    /// Explicit config file; must exist when set
    explicit_file: Option<Utf8PathBuf>,
}

impl HierarchicalConfigLoader {
    /// Create a loader rooted at the standard config directory
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self {
            config_dir,
            explicit_file: None,
        })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self {
            config_dir,
            explicit_file: None,
        }
    }

    /// Read the file layer from `path` instead of the config directory
    pub fn with_file(mut self, path: Utf8PathBuf) -> Self {
        self.explicit_file = Some(path);
        self
    }

    /// Directory holding `config.yaml`
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the standard config directory (~/.specseed)
    ///
    /// HOME wins over `dirs::home_dir()` so containers and tests that
    /// override HOME are respected.
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = match env::var("HOME").or_else(|_| env::var("USERPROFILE")) {
            Ok(home) => Utf8PathBuf::from(home),
            Err(_) => dirs::home_dir()
                .and_then(|p| Utf8PathBuf::from_path_buf(p).ok())
                .ok_or_else(|| Error::invalid_config("Could not determine home directory"))?,
        };

        Ok(home.join(".specseed"))
    }

    /// Load the scaffolder configuration with hierarchical precedence
    pub fn load(&self) -> Result<ScaffoldConfig> {
        // Start with embedded defaults
        let mut config = Self::load_embedded_config::<ScaffoldConfig>(DEFAULTS_FILE)?;

        match &self.explicit_file {
            Some(path) => {
                if !path.exists() {
                    return Err(Error::config_not_found(path.as_str()));
                }
                tracing::debug!("Loading config from {}", path);
                config = config.merge(self.load_yaml_file(path)?);
            }
            None => {
                let path = self.config_dir.join(CONFIG_FILE);
                if path.exists() {
                    tracing::debug!("Loading config from {}", path);
                    config = config.merge(self.load_yaml_file(&path)?);
                }
            }
        }

        self.apply_env_overrides(config)
    }

    /// Load an embedded configuration file
    fn load_embedded_config<T: DeserializeOwned>(filename: &str) -> Result<T> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file and parse it
    fn load_yaml_file<T: DeserializeOwned>(&self, path: &Utf8Path) -> Result<T> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&self, mut config: ScaffoldConfig) -> Result<ScaffoldConfig> {
        if let Some(val) = non_empty_var("SPECSEED_DEFAULT_DESCRIPTION") {
            config.defaults.description = Some(val);
        }

        if let Some(val) = non_empty_var("SPECSEED_DEFAULT_PROJECT_TYPE") {
            config.defaults.project_type = Some(val.parse().map_err(|e: String| {
                Error::invalid_config(format!("SPECSEED_DEFAULT_PROJECT_TYPE: {}", e))
            })?);
        }

        if let Some(val) = non_empty_var("SPECSEED_DEFAULT_AI_TOOL") {
            config.defaults.ai_tool = Some(val.parse().map_err(|e: String| {
                Error::invalid_config(format!("SPECSEED_DEFAULT_AI_TOOL: {}", e))
            })?);
        }

        if let Some(val) = non_empty_var("SPECSEED_OUTPUT_DIR") {
            config.output_dir = Some(Utf8PathBuf::from(val));
        }

        if let Some(val) = non_empty_var("SPECSEED_TEMPLATES") {
            config.templates_file = Some(Utf8PathBuf::from(val));
        }

        Ok(config)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
