//! Core types for project scaffolding

use crate::error::{Error, Result};
use serde::{de, Deserialize, Deserializer, Serialize};
use std::str::FromStr;

/// Longest project name accepted, in bytes (common filesystem name limit)
pub const MAX_NAME_LEN: usize = 255;

/// Kind of project being scaffolded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectType {
    /// Data processing / ETL pipeline
    DataPipeline,
    /// Interactive or batch analysis tool
    AnalysisTool,
    /// Implementation of a computational method
    Algorithm,
    /// Anything else
    General,
}

impl ProjectType {
    /// Get all available project types, in prompt order
    pub fn all() -> Vec<Self> {
        vec![
            Self::DataPipeline,
            Self::AnalysisTool,
            Self::Algorithm,
            Self::General,
        ]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataPipeline => "data-pipeline",
            Self::AnalysisTool => "analysis-tool",
            Self::Algorithm => "algorithm",
            Self::General => "general",
        }
    }

    /// Human-readable label shown in the selection prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::DataPipeline => "Data pipeline",
            Self::AnalysisTool => "Analysis tool",
            Self::Algorithm => "Algorithm implementation",
            Self::General => "General",
        }
    }

    /// Get aliases for this project type
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::DataPipeline => vec!["pipeline", "data", "etl"],
            Self::AnalysisTool => vec!["analysis", "tool"],
            Self::Algorithm => vec!["algo", "algorithm-implementation"],
            Self::General => vec!["other"],
        }
    }

    /// Parse from string, checking labels and aliases
    pub fn from_str_with_aliases(s: &str) -> Option<Self> {
        let s_lower = s.trim().to_lowercase();

        Self::all().into_iter().find(|project_type| {
            project_type.as_str() == s_lower
                || project_type.label().to_lowercase() == s_lower
                || project_type.aliases().contains(&s_lower.as_str())
        })
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_aliases(s).ok_or_else(|| {
            format!(
                "Unknown project type: {}. Valid types: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

/// AI coding assistant the project is prepared for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AiTool {
    ClaudeCode,
    Cursor,
    Copilot,
    None,
}

impl AiTool {
    /// Get all available tools, in prompt order
    pub fn all() -> Vec<Self> {
        vec![Self::ClaudeCode, Self::Cursor, Self::Copilot, Self::None]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "claude-code",
            Self::Cursor => "cursor",
            Self::Copilot => "copilot",
            Self::None => "none",
        }
    }

    /// Human-readable label shown in the selection prompt
    pub fn label(&self) -> &'static str {
        match self {
            Self::ClaudeCode => "Claude Code",
            Self::Cursor => "Cursor",
            Self::Copilot => "GitHub Copilot",
            Self::None => "Other/None",
        }
    }

    /// Get aliases for this tool
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::ClaudeCode => vec!["claude"],
            Self::Cursor => vec![],
            Self::Copilot => vec!["github-copilot", "gh-copilot"],
            Self::None => vec!["other", "no"],
        }
    }

    /// Parse from string, checking labels and aliases
    pub fn from_str_with_aliases(s: &str) -> Option<Self> {
        let s_lower = s.trim().to_lowercase();

        Self::all().into_iter().find(|tool| {
            tool.as_str() == s_lower
                || tool.label().to_lowercase() == s_lower
                || tool.aliases().contains(&s_lower.as_str())
        })
    }
}

impl std::fmt::Display for AiTool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AiTool {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_str_with_aliases(s).ok_or_else(|| {
            format!(
                "Unknown AI tool: {}. Valid tools: {}",
                s,
                Self::all()
                    .iter()
                    .map(|t| t.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )
        })
    }
}

// Files accept the same spellings as flags: canonical names, labels, aliases
fn deserialize_from_str<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String>,
{
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(de::Error::custom)
}

impl<'de> Deserialize<'de> for ProjectType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

impl<'de> Deserialize<'de> for AiTool {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserialize_from_str(deserializer)
    }
}

/// Validate a project name, returning it trimmed.
///
/// The name becomes a single directory under the output directory, so
/// anything that could escape it (separators, `.`/`..`) is rejected.
pub fn validate_project_name(name: &str) -> Result<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(Error::invalid_input("project name", "name is required"));
    }

    if name == "." || name == ".." {
        return Err(Error::invalid_input(
            "project name",
            format!("'{}' is not a directory name", name),
        ));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(Error::invalid_input(
            "project name",
            "must not contain path separators",
        ));
    }

    if name.chars().any(char::is_control) {
        return Err(Error::invalid_input(
            "project name",
            "must not contain control characters",
        ));
    }

    if name.len() > MAX_NAME_LEN {
        return Err(Error::invalid_input(
            "project name",
            format!("must be at most {} bytes", MAX_NAME_LEN),
        ));
    }

    Ok(name.to_string())
}

/// Validate a one-line description, returning it trimmed
pub fn validate_description(description: &str) -> Result<String> {
    let description = description.trim();

    if description.is_empty() {
        return Err(Error::invalid_input(
            "description",
            "description is required",
        ));
    }

    if description.contains('\n') || description.contains('\r') {
        return Err(Error::invalid_input(
            "description",
            "must be a single line",
        ));
    }

    Ok(description.to_string())
}

/// The operator's answers, validated on construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ProjectAnswers {
    name: String,
    description: String,
    project_type: ProjectType,
    ai_tool: AiTool,
}

impl ProjectAnswers {
    /// Build answers, validating the free-text fields
    pub fn new(
        name: &str,
        description: &str,
        project_type: ProjectType,
        ai_tool: AiTool,
    ) -> Result<Self> {
        Ok(Self {
            name: validate_project_name(name)?,
            description: validate_description(description)?,
            project_type,
            ai_tool,
        })
    }

    /// Project name (also the root directory name)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn ai_tool(&self) -> AiTool {
        self.ai_tool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_from_str() {
        assert_eq!(
            "data-pipeline".parse::<ProjectType>().unwrap(),
            ProjectType::DataPipeline
        );
        assert_eq!(
            "Data pipeline".parse::<ProjectType>().unwrap(),
            ProjectType::DataPipeline
        );
        assert_eq!("algo".parse::<ProjectType>().unwrap(), ProjectType::Algorithm);
        assert_eq!(
            "Algorithm implementation".parse::<ProjectType>().unwrap(),
            ProjectType::Algorithm
        );
        assert!("web".parse::<ProjectType>().is_err());
    }

    #[test]
    fn test_ai_tool_from_str() {
        assert_eq!("claude".parse::<AiTool>().unwrap(), AiTool::ClaudeCode);
        assert_eq!("Cursor".parse::<AiTool>().unwrap(), AiTool::Cursor);
        assert_eq!("GitHub Copilot".parse::<AiTool>().unwrap(), AiTool::Copilot);
        assert_eq!("other".parse::<AiTool>().unwrap(), AiTool::None);

        let err = "emacs".parse::<AiTool>().unwrap_err();
        assert!(err.contains("claude-code, cursor, copilot, none"));
    }

    #[test]
    fn test_serde_names_match_as_str() {
        for project_type in ProjectType::all() {
            let yaml = serde_yaml_ng::to_string(&project_type).unwrap();
            assert_eq!(yaml.trim(), project_type.as_str());
        }
        for tool in AiTool::all() {
            let yaml = serde_yaml_ng::to_string(&tool).unwrap();
            assert_eq!(yaml.trim(), tool.as_str());
        }
    }

    #[test]
    fn test_deserialize_accepts_labels_and_aliases() {
        let parse = |s: &str| serde_yaml_ng::from_str::<ProjectType>(s);
        assert_eq!(parse("data-pipeline").unwrap(), ProjectType::DataPipeline);
        assert_eq!(parse("Data pipeline").unwrap(), ProjectType::DataPipeline);
        assert_eq!(parse("pipeline").unwrap(), ProjectType::DataPipeline);
        assert!(parse("web-app").is_err());

        let parse = |s: &str| serde_yaml_ng::from_str::<AiTool>(s);
        assert_eq!(parse("Claude Code").unwrap(), AiTool::ClaudeCode);
        assert_eq!(parse("claude").unwrap(), AiTool::ClaudeCode);
        assert_eq!(parse("none").unwrap(), AiTool::None);

        let err = parse("emacs").unwrap_err();
        assert!(err.to_string().contains("Unknown AI tool"));
    }

    #[test]
    fn test_validate_project_name() {
        assert_eq!(validate_project_name("  reef-survey ").unwrap(), "reef-survey");
        assert_eq!(validate_project_name("My Project").unwrap(), "My Project");

        for bad in ["", "   ", ".", "..", "a/b", "..\\evil", "line\nbreak"] {
            let err = validate_project_name(bad).unwrap_err();
            assert!(
                matches!(err, Error::InvalidInput { .. }),
                "{bad:?} should be rejected"
            );
        }

        assert!(validate_project_name(&"x".repeat(MAX_NAME_LEN)).is_ok());
        assert!(validate_project_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_validate_description() {
        assert_eq!(
            validate_description(" Analyze coral reef transect data ").unwrap(),
            "Analyze coral reef transect data"
        );
        assert!(validate_description("\t ").is_err());
        assert!(validate_description("two\nlines").is_err());
    }

    #[test]
    fn test_project_answers_rejects_blank_name() {
        let result = ProjectAnswers::new(" ", "desc", ProjectType::General, AiTool::None);
        assert!(matches!(
            result,
            Err(Error::InvalidInput {
                field: "project name",
                ..
            })
        ));
    }

    #[test]
    fn test_project_answers_accessors() {
        let answers = ProjectAnswers::new(
            "reef-survey",
            "Analyze coral reef transect data",
            ProjectType::DataPipeline,
            AiTool::Cursor,
        )
        .unwrap();

        assert_eq!(answers.name(), "reef-survey");
        assert_eq!(answers.description(), "Analyze coral reef transect data");
        assert_eq!(answers.project_type(), ProjectType::DataPipeline);
        assert_eq!(answers.ai_tool(), AiTool::Cursor);
    }
}
