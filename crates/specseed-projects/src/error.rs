//! Error types for specseed-projects

use thiserror::Error;

/// Result type alias using specseed-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Project root already exists
    #[error("Destination already exists: {path}")]
    DestinationExists { path: String },

    /// Output directory is missing or not a directory
    #[error("Output directory does not exist: {path}")]
    OutputDirMissing { path: String },

    /// Filesystem operation failed partway through materialization
    #[error("Failed to create {path}: {source}")]
    Filesystem {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Two catalog entries target the same path
    #[error("Duplicate template path: {path}")]
    DuplicateTemplatePath { path: String },

    /// A file entry sits where another entry needs a directory
    #[error("Template path {path} conflicts with file entry {file}")]
    ConflictingTemplatePath { path: String, file: String },

    /// Template path is absolute or escapes the project root
    #[error("Unsafe template path: {path}. Paths must be relative and stay inside the project")]
    UnsafeTemplatePath { path: String },

    /// Catalog has no table for a project type or AI tool
    #[error("Template catalog has no '{key}' entry under {table}")]
    MissingCatalogTable { table: &'static str, key: String },

    /// Referenced template body is not embedded
    #[error("Template not found: {template}")]
    TemplateNotFound { template: String },

    /// Entry does not name exactly one source
    #[error("Invalid template entry {path}: {message}")]
    InvalidTemplateEntry { path: String, message: String },

    /// Template catalog could not be parsed
    #[error("Failed to parse template catalog: {0}")]
    CatalogParse(#[from] serde_yaml_ng::Error),

    /// Reading operator input failed
    #[error("Failed to read input: {0}")]
    Prompt(#[source] std::io::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Core library error
    #[error(transparent)]
    Core(#[from] specseed_core::Error),
}

impl Error {
    /// Create a destination exists error
    pub fn destination_exists(path: impl Into<String>) -> Self {
        Self::DestinationExists { path: path.into() }
    }

    /// Create an output directory missing error
    pub fn output_dir_missing(path: impl Into<String>) -> Self {
        Self::OutputDirMissing { path: path.into() }
    }

    /// Create a filesystem error for `path`
    pub fn filesystem(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Create a duplicate template path error
    pub fn duplicate_template_path(path: impl Into<String>) -> Self {
        Self::DuplicateTemplatePath { path: path.into() }
    }

    /// Create a conflicting template path error
    pub fn conflicting_template_path(path: impl Into<String>, file: impl Into<String>) -> Self {
        Self::ConflictingTemplatePath {
            path: path.into(),
            file: file.into(),
        }
    }

    /// Create an unsafe template path error
    pub fn unsafe_template_path(path: impl Into<String>) -> Self {
        Self::UnsafeTemplatePath { path: path.into() }
    }

    /// Create a missing catalog table error
    pub fn missing_catalog_table(table: &'static str, key: impl Into<String>) -> Self {
        Self::MissingCatalogTable {
            table,
            key: key.into(),
        }
    }

    /// Create a template not found error
    pub fn template_not_found(template: impl Into<String>) -> Self {
        Self::TemplateNotFound {
            template: template.into(),
        }
    }

    /// Create an invalid template entry error
    pub fn invalid_template_entry(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTemplateEntry {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Whether the operator interrupted a prompt
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Prompt(e) if e.kind() == std::io::ErrorKind::Interrupted)
    }
}
