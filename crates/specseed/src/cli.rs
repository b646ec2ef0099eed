//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::Parser;
use specseed_core::types::{AiTool, ProjectType};
use specseed_projects::PartialAnswers;

/// specseed - scaffold a spec-driven project
///
/// Asks for a project name, a one-line description, a project type and an
/// AI coding assistant, then creates the project directory with
/// specification templates. Answers given as flags are not asked again.
#[derive(Parser, Debug)]
#[command(name = "specseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project name (also the directory created)
    #[arg(short, long)]
    pub name: Option<String>,

    /// One-line project description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Project type: data-pipeline, analysis-tool, algorithm, general
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub project_type: Option<ProjectType>,

    /// AI assistant integration: claude-code, cursor, copilot, none
    #[arg(short, long, value_name = "TOOL")]
    pub ai_tool: Option<AiTool>,

    /// YAML file with answers (name, description, project-type, ai-tool)
    #[arg(long, value_name = "FILE")]
    pub answers: Option<Utf8PathBuf>,

    /// Directory to create the project in [default: current directory]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<Utf8PathBuf>,

    /// Custom template catalog
    #[arg(long, value_name = "FILE")]
    pub templates: Option<Utf8PathBuf>,

    /// Never prompt; fill gaps from configured defaults or fail
    #[arg(long)]
    pub no_input: bool,

    /// Show what would be created without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Print the dry-run manifest as JSON
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// Path to a config file [default: ~/.specseed/config.yaml]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<Utf8PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Answers supplied directly on the command line
    pub fn flag_answers(&self) -> PartialAnswers {
        PartialAnswers {
            name: self.name.clone(),
            description: self.description.clone(),
            project_type: self.project_type,
            ai_tool: self.ai_tool,
        }
    }
}
