//! Next-step guidance printed after a successful run.

use camino::Utf8Path;
use specseed_core::types::AiTool;

/// Integration file written for `tool` and a note on how it is picked up
fn integration_note(tool: AiTool) -> Option<String> {
    match tool {
        AiTool::ClaudeCode => Some(
            "Your .claude/CLAUDE.md is ready. Claude Code will read it automatically.".to_string(),
        ),
        AiTool::Cursor => {
            Some("Your .cursorrules is ready. Cursor will read it automatically.".to_string())
        }
        AiTool::Copilot => {
            Some("Your .github/copilot-instructions.md is ready for Copilot.".to_string())
        }
        AiTool::None => None,
    }
}

/// Numbered next steps for a project created at `root`
fn next_steps(root: &Utf8Path) -> Vec<String> {
    vec![
        format!("cd {}", root),
        "Open specs/00-overview.md and flesh out your project description".to_string(),
        "Read specs/spec-format.md to understand how to write specs".to_string(),
        "Run 'git init' to start version control".to_string(),
        "Start a conversation with your AI assistant about requirements".to_string(),
    ]
}

/// Full plain-text summary
pub fn render_summary(root: &Utf8Path, tool: AiTool) -> String {
    let mut out = format!("Project created: {}/\n\nNext steps:\n\n", root);

    for (i, step) in next_steps(root).iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, step));
    }

    if let Some(note) = integration_note(tool) {
        out.push_str(&format!("\n  {}\n", note));
    }

    out
}
