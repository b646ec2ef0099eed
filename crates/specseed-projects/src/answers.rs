//! Gathering `ProjectAnswers` from the operator.
//!
//! Interactive collection goes through the [`Prompter`] trait so the
//! reprompt rules can be driven by a terminal or by a script. Invalid input
//! is reported through [`Prompter::notice`] and asked again; it never
//! escapes [`collect_answers`].

use crate::error::{Error, Result};
use serde::Deserialize;
use specseed_core::config::AnswerDefaults;
use specseed_core::types::{
    validate_description, validate_project_name, AiTool, ProjectAnswers, ProjectType,
};
use std::io;
use std::path::Path;

/// Source of operator input
pub trait Prompter {
    /// Ask for a line of text. An empty reply returns `default` when given.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String>;

    /// Ask the operator to pick one of `items`, returning its index
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> io::Result<usize>;

    /// Tell the operator why an answer was rejected
    fn notice(&mut self, message: &str);
}

/// Answers known before prompting (flags, answers file)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialAnswers {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub ai_tool: Option<AiTool>,
}

impl PartialAnswers {
    /// Read an answers file (YAML)
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::filesystem(path.display().to_string(), e))?;
        Ok(serde_yaml_ng::from_str(&content)?)
    }

    /// Fill unset fields from `fallback`; fields already set win
    pub fn or(self, fallback: PartialAnswers) -> PartialAnswers {
        PartialAnswers {
            name: self.name.or(fallback.name),
            description: self.description.or(fallback.description),
            project_type: self.project_type.or(fallback.project_type),
            ai_tool: self.ai_tool.or(fallback.ai_tool),
        }
    }

    /// Whether every field is already known
    pub fn is_complete(&self) -> bool {
        self.name.is_some()
            && self.description.is_some()
            && self.project_type.is_some()
            && self.ai_tool.is_some()
    }

    /// Complete without prompting, using configured defaults for gaps.
    ///
    /// The name has no default; a missing name is an input error.
    pub fn complete(self, defaults: &AnswerDefaults) -> Result<ProjectAnswers> {
        let name = self
            .name
            .ok_or_else(|| specseed_core::Error::invalid_input("project name", "name is required"))?;
        let description = self
            .description
            .or_else(|| defaults.description.clone())
            .ok_or_else(|| {
                specseed_core::Error::invalid_input("description", "description is required")
            })?;
        let project_type = self.project_type.or(defaults.project_type).ok_or_else(|| {
            specseed_core::Error::invalid_input("project type", "project type is required")
        })?;
        let ai_tool = self.ai_tool.or(defaults.ai_tool).ok_or_else(|| {
            specseed_core::Error::invalid_input("AI tool", "AI tool is required")
        })?;

        Ok(ProjectAnswers::new(
            &name,
            &description,
            project_type,
            ai_tool,
        )?)
    }
}

/// Collect answers, prompting only for fields `known` leaves unset.
///
/// Pre-supplied text fields are validated but not reprompted: a bad flag
/// value is an error, not a question.
pub fn collect_answers<P: Prompter + ?Sized>(
    prompter: &mut P,
    known: PartialAnswers,
    defaults: &AnswerDefaults,
) -> Result<ProjectAnswers> {
    let name = match known.name {
        Some(name) => validate_project_name(&name)?,
        None => ask_text(
            prompter,
            "Project name (e.g., seismic-analysis)",
            None,
            validate_project_name,
        )?,
    };

    let description = match known.description {
        Some(description) => validate_description(&description)?,
        None => ask_text(
            prompter,
            "One-line description",
            defaults.description.as_deref(),
            validate_description,
        )?,
    };

    let project_type = match known.project_type {
        Some(project_type) => project_type,
        None => ask_choice(
            prompter,
            "Project type",
            &ProjectType::all(),
            defaults.project_type,
            |t| t.label(),
        )?,
    };

    let ai_tool = match known.ai_tool {
        Some(ai_tool) => ai_tool,
        None => ask_choice(
            prompter,
            "Primary AI coding assistant",
            &AiTool::all(),
            defaults.ai_tool,
            |t| t.label(),
        )?,
    };

    Ok(ProjectAnswers::new(&name, &description, project_type, ai_tool)?)
}

fn ask_text<P, F>(
    prompter: &mut P,
    prompt: &str,
    default: Option<&str>,
    validate: F,
) -> Result<String>
where
    P: Prompter + ?Sized,
    F: Fn(&str) -> specseed_core::Result<String>,
{
    loop {
        let reply = prompter.input(prompt, default).map_err(Error::Prompt)?;
        match validate(&reply) {
            Ok(value) => return Ok(value),
            Err(specseed_core::Error::InvalidInput { reason, .. }) => {
                tracing::debug!("Rejected input for '{}': {}", prompt, reason);
                prompter.notice(&capitalize(&reason));
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn ask_choice<P, T, F>(
    prompter: &mut P,
    prompt: &str,
    options: &[T],
    default: Option<T>,
    label: F,
) -> Result<T>
where
    P: Prompter + ?Sized,
    T: Copy + PartialEq,
    F: Fn(&T) -> &'static str,
{
    let items: Vec<String> = options.iter().map(|o| label(o).to_string()).collect();
    let default_index = default
        .and_then(|d| options.iter().position(|o| *o == d))
        .unwrap_or(0);

    loop {
        let index = prompter
            .select(prompt, &items, default_index)
            .map_err(Error::Prompt)?;
        match options.get(index) {
            Some(choice) => return Ok(*choice),
            None => {
                tracing::debug!("Rejected selection {} for '{}'", index, prompt);
                prompter.notice(&format!(
                    "Please enter a number between 1 and {}",
                    options.len()
                ));
            }
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
