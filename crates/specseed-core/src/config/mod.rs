//! Configuration loading and management

mod hierarchical_loader;

pub use hierarchical_loader::HierarchicalConfigLoader;

use crate::types::{AiTool, ProjectType};
use camino::Utf8PathBuf;
use serde::Deserialize;

/// Scaffolder configuration after all layers are applied
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScaffoldConfig {
    /// Defaults offered (or applied, with `--no-input`) for answers
    #[serde(default)]
    pub defaults: AnswerDefaults,

    /// Directory the project root is created in
    #[serde(default)]
    pub output_dir: Option<Utf8PathBuf>,

    /// Custom template catalog replacing the built-in one
    #[serde(default)]
    pub templates_file: Option<Utf8PathBuf>,
}

/// Default answers for fields the operator did not supply
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AnswerDefaults {
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub project_type: Option<ProjectType>,

    #[serde(default)]
    pub ai_tool: Option<AiTool>,
}

impl ScaffoldConfig {
    /// Merge two configs; values set in `overlay` win
    pub fn merge(self, overlay: ScaffoldConfig) -> ScaffoldConfig {
        ScaffoldConfig {
            defaults: AnswerDefaults {
                description: overlay.defaults.description.or(self.defaults.description),
                project_type: overlay.defaults.project_type.or(self.defaults.project_type),
                ai_tool: overlay.defaults.ai_tool.or(self.defaults.ai_tool),
            },
            output_dir: overlay.output_dir.or(self.output_dir),
            templates_file: overlay.templates_file.or(self.templates_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_prefers_overlay() {
        let base = ScaffoldConfig {
            defaults: AnswerDefaults {
                description: Some("base".to_string()),
                project_type: Some(ProjectType::General),
                ai_tool: None,
            },
            output_dir: Some(Utf8PathBuf::from("/base")),
            templates_file: None,
        };
        let overlay = ScaffoldConfig {
            defaults: AnswerDefaults {
                description: None,
                project_type: Some(ProjectType::Algorithm),
                ai_tool: Some(AiTool::Cursor),
            },
            output_dir: None,
            templates_file: Some(Utf8PathBuf::from("catalog.yaml")),
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.defaults.description.as_deref(), Some("base"));
        assert_eq!(merged.defaults.project_type, Some(ProjectType::Algorithm));
        assert_eq!(merged.defaults.ai_tool, Some(AiTool::Cursor));
        assert_eq!(merged.output_dir, Some(Utf8PathBuf::from("/base")));
        assert_eq!(merged.templates_file, Some(Utf8PathBuf::from("catalog.yaml")));
    }

    #[test]
    fn test_deserialize_kebab_case() {
        let yaml = r#"
defaults:
  project-type: data-pipeline
  ai-tool: claude-code
output-dir: /tmp/projects
"#;
        let config: ScaffoldConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.defaults.project_type, Some(ProjectType::DataPipeline));
        assert_eq!(config.defaults.ai_tool, Some(AiTool::ClaudeCode));
        assert_eq!(config.output_dir, Some(Utf8PathBuf::from("/tmp/projects")));
        assert!(config.templates_file.is_none());
    }

    #[test]
    fn test_defaults_accept_labels_and_aliases() {
        let yaml = r#"
defaults:
  project-type: Algorithm implementation
  ai-tool: github-copilot
"#;
        let config: ScaffoldConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.defaults.project_type, Some(ProjectType::Algorithm));
        assert_eq!(config.defaults.ai_tool, Some(AiTool::Copilot));
    }
}
