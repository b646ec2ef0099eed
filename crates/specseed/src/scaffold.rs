//! The scaffold run: config, answers, resolution, then disk or dry-run output

use anyhow::{bail, Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use specseed_core::config::{AnswerDefaults, HierarchicalConfigLoader, ScaffoldConfig};
use specseed_core::types::ProjectAnswers;
use specseed_projects::{
    collect_answers, materialize, render_summary, PartialAnswers, Prompter, TemplateManager,
    TemplateSet,
};
use std::io::{self, IsTerminal};
use tabled::{settings::Style, Table, Tabled};

use crate::cli::Cli;
use crate::output;
use crate::prompt::TerminalPrompter;

#[derive(Tabled)]
struct ManifestRow {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Kind")]
    kind: &'static str,
    #[tabled(rename = "From")]
    origin: String,
}

pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.clone())?;

    // A bad catalog should fail before the operator answers anything
    let manager = template_manager(&cli, &config)?;

    let Some(answers) = gather_answers(&cli, &config)? else {
        println!();
        output::info("Cancelled.");
        return Ok(());
    };
    tracing::info!(
        "Scaffolding {} ({}, {})",
        answers.name(),
        answers.project_type(),
        answers.ai_tool()
    );

    let set = manager.resolve(&answers, chrono::Local::now().date_naive())?;
    let output_dir = output_dir(cli.output_dir.clone(), &config)?;

    if cli.dry_run {
        return print_manifest(&set, &output_dir, answers.name(), cli.json);
    }

    let project = materialize(&set, &output_dir, answers.name())?;
    tracing::info!("Wrote {} entries under {}", project.created.len(), project.root);

    print_summary(&project.root, &answers);
    Ok(())
}

fn load_config(explicit: Option<Utf8PathBuf>) -> Result<ScaffoldConfig> {
    let mut loader = HierarchicalConfigLoader::new()?;
    if let Some(path) = explicit {
        loader = loader.with_file(path);
    }

    loader.load().context("Failed to load configuration")
}

/// `--templates`, then the configured catalog, then the built-in one
fn template_manager(cli: &Cli, config: &ScaffoldConfig) -> Result<TemplateManager> {
    match cli.templates.as_ref().or(config.templates_file.as_ref()) {
        Some(path) => TemplateManager::from_file(path)
            .with_context(|| format!("Failed to load template catalog {}", path)),
        None => TemplateManager::new().context("Failed to load built-in templates"),
    }
}

/// Merge flags over the answers file, then prompt for or default the rest.
///
/// `None` means the operator cancelled a prompt.
fn gather_answers(cli: &Cli, config: &ScaffoldConfig) -> Result<Option<ProjectAnswers>> {
    let mut known = cli.flag_answers();
    if let Some(path) = &cli.answers {
        let from_file = PartialAnswers::from_file(path.as_std_path())
            .with_context(|| format!("Failed to read answers file {}", path))?;
        known = known.or(from_file);
    }

    if cli.no_input || known.is_complete() {
        return Ok(Some(known.complete(&config.defaults)?));
    }

    if !can_prompt(&io::stdin()) {
        bail!("Not running in a terminal; pass every answer as a flag or use --no-input");
    }

    output::header("Spec-Driven Project Scaffolder");
    prompt_for(&mut TerminalPrompter, known, &config.defaults)
}

/// Prompts read from stdin and draw on stderr; stdout may be redirected
fn can_prompt(stdin: &impl IsTerminal) -> bool {
    stdin.is_terminal() && console::user_attended_stderr()
}

fn prompt_for(
    prompter: &mut dyn Prompter,
    known: PartialAnswers,
    defaults: &AnswerDefaults,
) -> Result<Option<ProjectAnswers>> {
    match collect_answers(prompter, known, defaults) {
        Ok(answers) => Ok(Some(answers)),
        Err(e) if e.is_cancelled() => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Flag, then config, then the current directory
fn output_dir(flag: Option<Utf8PathBuf>, config: &ScaffoldConfig) -> Result<Utf8PathBuf> {
    if let Some(dir) = flag.or_else(|| config.output_dir.clone()) {
        return Ok(dir);
    }

    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Utf8PathBuf::try_from(cwd).context("Current directory is not valid UTF-8")
}

fn manifest_rows(set: &TemplateSet) -> Vec<ManifestRow> {
    set.iter()
        .map(|entry| ManifestRow {
            path: entry.path.to_string(),
            kind: if entry.is_directory() { "dir" } else { "file" },
            origin: entry.origin.to_string(),
        })
        .collect()
}

fn print_manifest(set: &TemplateSet, output_dir: &Utf8Path, name: &str, json: bool) -> Result<()> {
    let root = output_dir.join(name);

    if json {
        println!("{}", serde_json::to_string_pretty(set)?);
    } else {
        output::header(&format!("Would create {}/", root));
        let mut table = Table::new(manifest_rows(set));
        table.with(Style::sharp());
        println!("{}", table);
        println!();
        output::kv("Entries", &set.len().to_string());
    }

    if root.symlink_metadata().is_ok() {
        output::warning(&format!("{} already exists; a real run would fail", root));
    } else if !output_dir.is_dir() {
        output::warning(&format!("Output directory {} does not exist", output_dir));
    }

    Ok(())
}

fn print_summary(root: &Utf8Path, answers: &ProjectAnswers) {
    println!();
    print!("{}", render_summary(root, answers.ai_tool()));
}
