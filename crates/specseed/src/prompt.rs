//! Terminal prompts backed by dialoguer

use dialoguer::{Input, Select};
use specseed_projects::Prompter;
use std::io;

use crate::output;

/// Interactive prompter for a real terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn input(&mut self, prompt: &str, default: Option<&str>) -> io::Result<String> {
        // Empty replies come back to the caller so it can explain the rejection
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);

        if let Some(default) = default {
            input = input.default(default.to_string());
        }

        input.interact_text().map_err(io::Error::from)
    }

    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> io::Result<usize> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(io::Error::from)
    }

    fn notice(&mut self, message: &str) {
        output::warning(message);
    }
}
