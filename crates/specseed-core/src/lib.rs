//! # specseed-core
//!
//! Core library for the specseed scaffolder providing:
//! - Answer types (`ProjectType`, `AiTool`, `ProjectAnswers`) and input validation
//! - Layered configuration (embedded defaults, config file, environment)
//!
//! # Example
//!
//! ```
//! use specseed_core::types::{AiTool, ProjectAnswers, ProjectType};
//!
//! let answers = ProjectAnswers::new(
//!     "reef-survey",
//!     "Analyze coral reef transect data",
//!     ProjectType::DataPipeline,
//!     AiTool::Cursor,
//! )
//! .unwrap();
//! assert_eq!(answers.name(), "reef-survey");
//!
//! assert!(ProjectAnswers::new("  ", "x", ProjectType::General, AiTool::None).is_err());
//! ```

pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
