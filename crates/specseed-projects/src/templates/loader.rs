//! Template loading from embedded and runtime catalogs.
//!
//! Loads the template catalog from:
//! - Embedded `catalog.yaml` (compiled into binary)
//! - Runtime YAML files (`--templates`)
//!
//! Template bodies referenced with `template:` always come from the
//! embedded `templates/files/` directory.

use super::parser::TemplateConfig;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::path::Path;

/// Embedded catalog and template bodies
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/templates/"]
struct TemplateAssets;

const CATALOG_FILE: &str = "catalog.yaml";

/// Template loader holding a validated catalog
#[derive(Debug)]
pub struct TemplateLoader {
    config: TemplateConfig,
}

impl TemplateLoader {
    /// Load the catalog built into the binary
    pub fn from_embedded() -> Result<Self> {
        let yaml = embedded_text(CATALOG_FILE)?;
        Self::from_yaml(&yaml)
    }

    /// Load a catalog from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| Error::filesystem(path.display().to_string(), e))?;

        tracing::debug!("Loaded template catalog from {}", path.display());
        Self::from_yaml(&yaml)
    }

    /// Load a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config = TemplateConfig::from_yaml(yaml)?;
        config.validate()?;

        for name in config.template_names() {
            if TemplateAssets::get(&body_key(name)).is_none() {
                return Err(Error::template_not_found(name));
            }
        }

        Ok(Self { config })
    }

    /// Get the underlying catalog
    pub fn config(&self) -> &TemplateConfig {
        &self.config
    }

    /// Raw text of an embedded template body
    pub fn template_body(&self, name: &str) -> Result<String> {
        embedded_text(&body_key(name))
    }
}

fn body_key(name: &str) -> String {
    format!("files/{}", name)
}

fn embedded_text(key: &str) -> Result<String> {
    let file = TemplateAssets::get(key).ok_or_else(|| Error::template_not_found(key))?;

    String::from_utf8(file.data.into_owned())
        .map_err(|_| Error::invalid_template_entry(key, "template is not valid UTF-8"))
}
