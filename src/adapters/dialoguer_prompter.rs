use dialoguer::{Confirm, Input, Select};

use crate::domain::AppError;
use crate::ports::{AnswerValidator, Prompter};

/// Terminal prompts backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: AnswerValidator<'_>,
    ) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        input
            .validate_with(|value: &String| validate(value))
            .interact_text()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }

    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, AppError> {
        Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(|e| AppError::Prompt(e.to_string()))
    }
}
