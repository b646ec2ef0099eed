//! # specseed-projects
//!
//! Project scaffolding library for the specseed CLI providing:
//! - Answer collection through a pluggable [`Prompter`]
//! - The template catalog and placeholder rendering
//! - Filesystem materialization of the resolved manifest
//! - Next-step summaries
//!
//! The three stages are plain functions over explicit values, so each can
//! be driven on its own:
//!
//! ```no_run
//! use camino::Utf8Path;
//! use specseed_core::types::{AiTool, ProjectAnswers, ProjectType};
//! use specseed_projects::{materialize, render_summary, TemplateManager};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let answers = ProjectAnswers::new(
//!     "reef-survey",
//!     "Analyze coral reef transect data",
//!     ProjectType::DataPipeline,
//!     AiTool::Cursor,
//! )?;
//!
//! let manager = TemplateManager::new()?;
//! let set = manager.resolve(&answers, chrono::Local::now().date_naive())?;
//! let project = materialize(&set, Utf8Path::new("."), answers.name())?;
//!
//! print!("{}", render_summary(&project.root, answers.ai_tool()));
//! # Ok(())
//! # }
//! ```

pub mod answers;
pub mod error;
pub mod manifest;
pub mod materialize;
pub mod summary;
pub mod templates;

pub use error::{Error, Result};

pub use answers::{collect_answers, PartialAnswers, Prompter};
pub use manifest::{EntryContent, EntryOrigin, TemplateEntry, TemplateSet};
pub use materialize::{materialize, ScaffoldedProject};
pub use summary::render_summary;
pub use templates::{TemplateLoader, TemplateManager, TemplateRenderer, TemplateVars};
