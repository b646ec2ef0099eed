//! YAML catalog parsing and structure definitions.
//!
//! Parses `catalog.yaml` into strongly-typed Rust structures.

use crate::error::{Error, Result};
use camino::Utf8PathBuf;
use serde::Deserialize;
use specseed_core::types::{AiTool, ProjectType};
use std::collections::{BTreeMap, BTreeSet};

/// Complete template catalog from YAML
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TemplateConfig {
    pub version: String,
    #[serde(default)]
    pub baseline: Vec<EntrySpec>,
    #[serde(default)]
    pub project_types: BTreeMap<ProjectType, Vec<EntrySpec>>,
    #[serde(default)]
    pub ai_tools: BTreeMap<AiTool, Vec<EntrySpec>>,
}

/// One catalog entry before rendering
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntrySpec {
    /// Destination relative to the project root
    pub path: Utf8PathBuf,
    /// Name of an embedded template body
    #[serde(default)]
    pub template: Option<String>,
    /// Inline template text
    #[serde(default)]
    pub content: Option<String>,
    /// Empty directory marker
    #[serde(default)]
    pub directory: bool,
}

/// Where an entry's content comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource<'a> {
    Template(&'a str),
    Inline(&'a str),
    Directory,
}

impl EntrySpec {
    /// The entry's single content source
    pub fn source(&self) -> Result<EntrySource<'_>> {
        match (&self.template, &self.content, self.directory) {
            (Some(name), None, false) => Ok(EntrySource::Template(name)),
            (None, Some(text), false) => Ok(EntrySource::Inline(text)),
            (None, None, true) => Ok(EntrySource::Directory),
            (None, None, false) => Err(Error::invalid_template_entry(
                self.path.as_str(),
                "needs one of 'template', 'content' or 'directory: true'",
            )),
            _ => Err(Error::invalid_template_entry(
                self.path.as_str(),
                "'template', 'content' and 'directory' are mutually exclusive",
            )),
        }
    }
}

impl TemplateConfig {
    /// Parse a template catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Entries added for a project type
    pub fn entries_for_type(&self, project_type: ProjectType) -> Result<&[EntrySpec]> {
        self.project_types
            .get(&project_type)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::missing_catalog_table("project-types", project_type.as_str()))
    }

    /// Entries added for an AI tool
    pub fn entries_for_tool(&self, ai_tool: AiTool) -> Result<&[EntrySpec]> {
        self.ai_tools
            .get(&ai_tool)
            .map(Vec::as_slice)
            .ok_or_else(|| Error::missing_catalog_table("ai-tools", ai_tool.as_str()))
    }

    /// Every entry in the catalog, across all tables
    pub fn all_entries(&self) -> impl Iterator<Item = &EntrySpec> {
        self.baseline
            .iter()
            .chain(self.project_types.values().flatten())
            .chain(self.ai_tools.values().flatten())
    }

    /// Names of all embedded template bodies the catalog references
    pub fn template_names(&self) -> BTreeSet<&str> {
        self.all_entries()
            .filter_map(|e| e.template.as_deref())
            .collect()
    }

    /// Check table coverage and entry shape
    pub fn validate(&self) -> Result<()> {
        for project_type in ProjectType::all() {
            self.entries_for_type(project_type)?;
        }
        for ai_tool in AiTool::all() {
            self.entries_for_tool(ai_tool)?;
        }
        for entry in self.all_entries() {
            entry.source()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r##"
version: "1.0"
baseline:
  - path: README.md
    content: "# {project_name}"
  - path: src
    directory: true
project-types:
  data-pipeline: []
  analysis-tool: []
  algorithm:
    - path: specs/03-algorithms
      directory: true
  general: []
ai-tools:
  claude-code:
    - path: .claude/CLAUDE.md
      template: claude.md
  cursor: []
  copilot: []
  none: []
"##;

    #[test]
    fn test_parse_minimal_catalog() {
        let config = TemplateConfig::from_yaml(MINIMAL).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.baseline.len(), 2);
        assert_eq!(
            config.baseline[0].source().unwrap(),
            EntrySource::Inline("# {project_name}")
        );
        assert!(config.validate().is_ok());

        let algo = config.entries_for_type(ProjectType::Algorithm).unwrap();
        assert_eq!(algo[0].source().unwrap(), EntrySource::Directory);

        let claude = config.entries_for_tool(AiTool::ClaudeCode).unwrap();
        assert_eq!(claude[0].source().unwrap(), EntrySource::Template("claude.md"));

        assert_eq!(
            config.template_names().into_iter().collect::<Vec<_>>(),
            vec!["claude.md"]
        );
    }

    #[test]
    fn test_missing_table_fails_validation() {
        let yaml = r#"
version: "1.0"
project-types:
  general: []
ai-tools:
  none: []
"#;
        let config = TemplateConfig::from_yaml(yaml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(Error::MissingCatalogTable {
                table: "project-types",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_project_type_key_is_rejected() {
        let yaml = r#"
version: "1.0"
project-types:
  web-app: []
"#;
        assert!(matches!(
            TemplateConfig::from_yaml(yaml),
            Err(Error::CatalogParse(_))
        ));
    }

    #[test]
    fn test_entry_source_must_be_unique() {
        let both = EntrySpec {
            path: "README.md".into(),
            template: Some("readme.md".to_string()),
            content: Some("inline".to_string()),
            directory: false,
        };
        assert!(matches!(
            both.source(),
            Err(Error::InvalidTemplateEntry { .. })
        ));

        let neither = EntrySpec {
            path: "README.md".into(),
            template: None,
            content: None,
            directory: false,
        };
        assert!(neither.source().is_err());
    }

    #[test]
    fn test_unknown_entry_field_is_rejected() {
        let yaml = r#"
version: "1.0"
baseline:
  - path: README.md
    contents: "typo"
"#;
        assert!(TemplateConfig::from_yaml(yaml).is_err());
    }
}
