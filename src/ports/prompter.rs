use crate::domain::AppError;

/// Validation callback for free-text answers. `Err` carries the message shown
/// before the question is asked again.
pub type AnswerValidator<'a> = &'a dyn Fn(&str) -> Result<(), String>;

/// Port for interactive operator input.
pub trait Prompter {
    /// Ask for free text, re-asking until `validate` accepts the answer.
    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: AnswerValidator<'_>,
    ) -> Result<String, AppError>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Returns the index of the chosen item.
    fn select(&self, prompt: &str, items: &[&str], default: usize) -> Result<usize, AppError>;
}
