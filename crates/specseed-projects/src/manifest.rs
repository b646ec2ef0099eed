//! Resolved manifest of everything a scaffold run creates.

use crate::error::{Error, Result};
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use serde::{Serialize, Serializer};
use specseed_core::types::{AiTool, ProjectType};
use std::collections::BTreeMap;

/// Catalog table an entry was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "table", content = "key")]
pub enum EntryOrigin {
    Baseline,
    ProjectType(ProjectType),
    AiTool(AiTool),
}

impl std::fmt::Display for EntryOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::ProjectType(t) => write!(f, "project-type:{}", t),
            Self::AiTool(t) => write!(f, "ai-tool:{}", t),
        }
    }
}

/// What gets written at an entry's path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum EntryContent {
    /// Regular file with fully rendered text
    File { content: String },
    /// Empty directory marker
    Directory,
}

/// A single file or directory to create under the project root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateEntry {
    pub path: Utf8PathBuf,
    #[serde(flatten)]
    pub content: EntryContent,
    pub origin: EntryOrigin,
}

impl TemplateEntry {
    pub fn file(path: impl Into<Utf8PathBuf>, content: String, origin: EntryOrigin) -> Self {
        Self {
            path: path.into(),
            content: EntryContent::File { content },
            origin,
        }
    }

    pub fn directory(path: impl Into<Utf8PathBuf>, origin: EntryOrigin) -> Self {
        Self {
            path: path.into(),
            content: EntryContent::Directory,
            origin,
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self.content, EntryContent::Directory)
    }

    /// Rendered text for file entries
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            EntryContent::File { content } => Some(content),
            EntryContent::Directory => None,
        }
    }
}

/// Every entry for one run, keyed and ordered by path.
///
/// Path ordering compares components, so a parent directory always
/// iterates before anything inside it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateSet {
    entries: BTreeMap<Utf8PathBuf, TemplateEntry>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, rejecting unsafe, duplicate, or conflicting paths
    pub fn insert(&mut self, entry: TemplateEntry) -> Result<()> {
        validate_relative_path(&entry.path)?;

        if self.entries.contains_key(&entry.path) {
            return Err(Error::duplicate_template_path(entry.path.as_str()));
        }

        // A file can't also be a parent of another entry
        for existing in self.entries.values() {
            if !existing.is_directory() && is_strict_ancestor(&existing.path, &entry.path) {
                return Err(Error::conflicting_template_path(
                    entry.path.as_str(),
                    existing.path.as_str(),
                ));
            }
            if !entry.is_directory() && is_strict_ancestor(&entry.path, &existing.path) {
                return Err(Error::conflicting_template_path(
                    existing.path.as_str(),
                    entry.path.as_str(),
                ));
            }
        }

        self.entries.insert(entry.path.clone(), entry);
        Ok(())
    }

    pub fn get(&self, path: impl AsRef<Utf8Path>) -> Option<&TemplateEntry> {
        self.entries.get(path.as_ref())
    }

    pub fn contains(&self, path: impl AsRef<Utf8Path>) -> bool {
        self.entries.contains_key(path.as_ref())
    }

    /// Entries in creation order
    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.values()
    }

    pub fn paths(&self) -> Vec<&Utf8Path> {
        self.entries.keys().map(|p| p.as_path()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for TemplateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

/// Reject paths that are empty, absolute, or climb out of the project root
pub fn validate_relative_path(path: &Utf8Path) -> Result<()> {
    if path.as_str().is_empty() {
        return Err(Error::unsafe_template_path(path.as_str()));
    }

    for component in path.components() {
        match component {
            Utf8Component::Normal(_) | Utf8Component::CurDir => {}
            Utf8Component::ParentDir | Utf8Component::RootDir | Utf8Component::Prefix(_) => {
                return Err(Error::unsafe_template_path(path.as_str()));
            }
        }
    }

    if !path
        .components()
        .any(|c| matches!(c, Utf8Component::Normal(_)))
    {
        return Err(Error::unsafe_template_path(path.as_str()));
    }

    Ok(())
}

fn is_strict_ancestor(ancestor: &Utf8Path, path: &Utf8Path) -> bool {
    path != ancestor && path.starts_with(ancestor)
}
