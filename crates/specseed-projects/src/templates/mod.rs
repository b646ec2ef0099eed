//! Template catalog system for project scaffolding.
//!
//! The catalog is a data table, not control flow: adding a project type
//! or AI tool integration means adding entries to `catalog.yaml`.
//!
//! # Architecture
//!
//! - `parser`: YAML catalog parsing into strongly-typed Rust
//! - `loader`: load the catalog from embedded or file sources
//! - `renderer`: placeholder substitution
//!
//! # Example Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use specseed_core::types::{AiTool, ProjectAnswers, ProjectType};
//! use specseed_projects::templates::TemplateManager;
//!
//! let manager = TemplateManager::new().unwrap();
//! let answers = ProjectAnswers::new(
//!     "reef-survey",
//!     "Analyze coral reef transect data",
//!     ProjectType::DataPipeline,
//!     AiTool::Cursor,
//! )
//! .unwrap();
//!
//! let set = manager
//!     .resolve(&answers, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
//!     .unwrap();
//! assert!(set.contains("specs/02-architecture/data-flow.md"));
//! assert!(set.contains(".cursorrules"));
//! ```

pub mod loader;
pub mod parser;
pub mod renderer;

pub use loader::TemplateLoader;
pub use parser::{EntrySource, EntrySpec, TemplateConfig};
pub use renderer::{TemplateRenderer, TemplateVars};

use crate::error::Result;
use crate::manifest::{EntryOrigin, TemplateEntry, TemplateSet};
use chrono::NaiveDate;
use specseed_core::types::{AiTool, ProjectAnswers, ProjectType};

/// High-level template manager combining catalog and renderer
#[derive(Debug)]
pub struct TemplateManager {
    loader: TemplateLoader,
    renderer: TemplateRenderer,
}

impl TemplateManager {
    /// Create a template manager with the embedded catalog
    pub fn new() -> Result<Self> {
        Self::from_loader(TemplateLoader::from_embedded()?)
    }

    /// Create a template manager from a catalog file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        Self::from_loader(TemplateLoader::from_file(path)?)
    }

    /// Wrap a loader, checking every type/tool combination resolves cleanly.
    ///
    /// After this succeeds, `resolve` cannot hit a duplicate or conflicting
    /// path for any valid answers.
    pub fn from_loader(loader: TemplateLoader) -> Result<Self> {
        let manager = Self {
            loader,
            renderer: TemplateRenderer::new(),
        };

        let probe_date = NaiveDate::default();
        for project_type in ProjectType::all() {
            for ai_tool in AiTool::all() {
                let answers = ProjectAnswers::new("probe", "probe", project_type, ai_tool)?;
                manager.resolve(&answers, probe_date)?;
            }
        }

        Ok(manager)
    }

    /// Resolve answers into the full manifest: baseline, then the project
    /// type's entries, then the AI tool's entries.
    ///
    /// Pure: the same answers and date always give the same set.
    pub fn resolve(&self, answers: &ProjectAnswers, created: NaiveDate) -> Result<TemplateSet> {
        let config = self.loader.config();
        let vars = TemplateVars::new(answers, created);
        let mut set = TemplateSet::new();

        self.add_entries(&mut set, &config.baseline, EntryOrigin::Baseline, &vars)?;
        self.add_entries(
            &mut set,
            config.entries_for_type(answers.project_type())?,
            EntryOrigin::ProjectType(answers.project_type()),
            &vars,
        )?;
        self.add_entries(
            &mut set,
            config.entries_for_tool(answers.ai_tool())?,
            EntryOrigin::AiTool(answers.ai_tool()),
            &vars,
        )?;

        Ok(set)
    }

    fn add_entries(
        &self,
        set: &mut TemplateSet,
        specs: &[EntrySpec],
        origin: EntryOrigin,
        vars: &TemplateVars,
    ) -> Result<()> {
        for spec in specs {
            let entry = match spec.source()? {
                EntrySource::Template(name) => {
                    let body = self.loader.template_body(name)?;
                    let content = self.renderer.render_string(&body, vars);
                    TemplateEntry::file(spec.path.clone(), content, origin)
                }
                EntrySource::Inline(text) => {
                    let content = self.renderer.render_string(text, vars);
                    TemplateEntry::file(spec.path.clone(), content, origin)
                }
                EntrySource::Directory => TemplateEntry::directory(spec.path.clone(), origin),
            };
            set.insert(entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const TABLES: &str = r#"
project-types: { data-pipeline: [], analysis-tool: [], algorithm: [], general: [] }
ai-tools: { claude-code: [], cursor: [], copilot: [], none: [] }
"#;

    fn answers(project_type: ProjectType, ai_tool: AiTool) -> ProjectAnswers {
        ProjectAnswers::new("demo", "A demo project", project_type, ai_tool).unwrap()
    }

    #[test]
    fn test_inline_content_is_rendered() {
        let yaml = format!(
            "version: \"1.0\"\nbaseline:\n  - path: NOTES.md\n    content: \"{{project_name}}: {{description}}\"\n{}",
            TABLES
        );
        let manager = TemplateManager::from_loader(TemplateLoader::from_yaml(&yaml).unwrap()).unwrap();

        let set = manager
            .resolve(&answers(ProjectType::General, AiTool::None), NaiveDate::default())
            .unwrap();
        assert_eq!(
            set.get("NOTES.md").unwrap().text(),
            Some("demo: A demo project")
        );
    }

    #[test]
    fn test_catalog_with_colliding_tables_is_rejected() {
        let yaml = r#"
version: "1.0"
baseline:
  - path: .cursorrules
    content: "baseline"
project-types: { data-pipeline: [], analysis-tool: [], algorithm: [], general: [] }
ai-tools:
  claude-code: []
  cursor:
    - path: .cursorrules
      content: "cursor"
  copilot: []
  none: []
"#;
        let loader = TemplateLoader::from_yaml(yaml).unwrap();
        assert!(matches!(
            TemplateManager::from_loader(loader),
            Err(Error::DuplicateTemplatePath { .. })
        ));
    }

    #[test]
    fn test_catalog_with_escaping_path_is_rejected() {
        let yaml = format!(
            "version: \"1.0\"\nbaseline:\n  - path: ../outside.md\n    content: x\n{}",
            TABLES
        );
        let loader = TemplateLoader::from_yaml(&yaml).unwrap();
        assert!(matches!(
            TemplateManager::from_loader(loader),
            Err(Error::UnsafeTemplatePath { .. })
        ));
    }
}
