//! Placeholder substitution for template bodies.
//!
//! Handles `{project_name}`, `{description}`, `{date}` and `{year}`.
//! Substitution is a single pass over the template, so operator text that
//! itself looks like a placeholder is inserted verbatim and never expanded.

use chrono::{Datelike, NaiveDate};
use regex::{Captures, Regex};
use serde::Serialize;
use specseed_core::types::ProjectAnswers;
use std::sync::LazyLock;

static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(project_name|description|date|year)\}").expect("placeholder regex is valid")
});

/// Template variables for rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateVars {
    pub project_name: String,
    pub description: String,
    pub date: String,
    pub year: String,
}

impl TemplateVars {
    /// Variables for `answers`, dated `created`
    pub fn new(answers: &ProjectAnswers, created: NaiveDate) -> Self {
        Self {
            project_name: answers.name().to_string(),
            description: answers.description().to_string(),
            date: created.format("%Y-%m-%d").to_string(),
            year: created.year().to_string(),
        }
    }

    fn lookup(&self, key: &str) -> &str {
        match key {
            "project_name" => &self.project_name,
            "description" => &self.description,
            "date" => &self.date,
            "year" => &self.year,
            _ => "",
        }
    }
}

/// Template renderer
#[derive(Debug, Default)]
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Create a new renderer
    pub fn new() -> Self {
        Self
    }

    /// Render a string template with variables.
    ///
    /// Unknown `{...}` tokens are left as written.
    pub fn render_string(&self, template: &str, vars: &TemplateVars) -> String {
        PLACEHOLDER_RE
            .replace_all(template, |caps: &Captures<'_>| vars.lookup(&caps[1]).to_string())
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use specseed_core::types::{AiTool, ProjectType};

    fn vars(name: &str, description: &str) -> TemplateVars {
        let answers =
            ProjectAnswers::new(name, description, ProjectType::General, AiTool::None).unwrap();
        TemplateVars::new(&answers, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap())
    }

    #[test]
    fn test_template_vars_new() {
        let vars = vars("reef-survey", "Analyze coral reef transect data");
        assert_eq!(vars.project_name, "reef-survey");
        assert_eq!(vars.description, "Analyze coral reef transect data");
        assert_eq!(vars.date, "2026-03-14");
        assert_eq!(vars.year, "2026");
    }

    #[test]
    fn test_render_string() {
        let renderer = TemplateRenderer::new();
        let vars = vars("my-app", "Does things");

        let template = "# {project_name}\n\n{description}\n\n- {date}: Initial draft ({year})";
        let result = renderer.render_string(template, &vars);

        assert_eq!(
            result,
            "# my-app\n\nDoes things\n\n- 2026-03-14: Initial draft (2026)"
        );
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let renderer = TemplateRenderer::new();
        let vars = vars("{description}", "Costs $5 & uses <tags> {date}");

        let result = renderer.render_string("{project_name} / {description}", &vars);
        assert_eq!(result, "{description} / Costs $5 & uses <tags> {date}");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let renderer = TemplateRenderer::new();
        let vars = vars("x", "y");

        let template = "{author} {project_name} {{project_name}} {}";
        assert_eq!(renderer.render_string(template, &vars), "{author} x {x} {}");
    }
}
