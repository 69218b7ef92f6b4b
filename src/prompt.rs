//! User input and interaction handling.
//! Only commands and the onboarding workflow talk to a [`Prompter`]; template
//! processing never prompts.

use crate::error::Result;
use dialoguer::{Confirm, FuzzySelect, Input, Select};

/// Lists longer than this get a fuzzy-search picker.
const FUZZY_SELECT_THRESHOLD: usize = 10;

/// Interactive input capability.
pub trait Prompter {
    /// Asks a yes/no question.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    /// Asks the user to pick one of `items`, returning its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks for a port-sized number.
    fn number(&self, prompt: &str) -> Result<u16>;
}

/// Terminal prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }

    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        let selection = if items.len() > FUZZY_SELECT_THRESHOLD {
            FuzzySelect::new().with_prompt(prompt).default(default).items(items).interact()?
        } else {
            Select::new().with_prompt(prompt).default(default).items(items).interact()?
        };
        Ok(selection)
    }

    fn number(&self, prompt: &str) -> Result<u16> {
        Ok(Input::<u16>::new().with_prompt(prompt).interact_text()?)
    }
}

/// Asks the user to pick one of `options`, displayed with their `Display` form.
pub fn select_value<T: Copy + std::fmt::Display>(
    prompter: &dyn Prompter,
    prompt: &str,
    options: &[T],
) -> Result<T> {
    let items: Vec<String> = options.iter().map(ToString::to_string).collect();
    let index = prompter.select(prompt, &items, 0)?;
    Ok(options[index.min(options.len().saturating_sub(1))])
}
