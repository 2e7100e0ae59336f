use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{AnswerValidator, Prompter};

#[derive(Debug)]
enum Answer {
    Text(String),
    Confirm(bool),
    Select(usize),
}

/// Prompter double answering from a queue. Text answers rejected by the
/// validator are recorded and the next queued answer is tried.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: Mutex<VecDeque<Answer>>,
    rejected: Mutex<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(self, text: &str) -> Self {
        self.answers.lock().unwrap().push_back(Answer::Text(text.to_string()));
        self
    }

    pub fn confirm(self, value: bool) -> Self {
        self.answers.lock().unwrap().push_back(Answer::Confirm(value));
        self
    }

    pub fn select(self, index: usize) -> Self {
        self.answers.lock().unwrap().push_back(Answer::Select(index));
        self
    }

    pub fn is_exhausted(&self) -> bool {
        self.answers.lock().unwrap().is_empty()
    }

    pub fn rejected(&self) -> Vec<String> {
        self.rejected.lock().unwrap().clone()
    }

    fn next(&self, prompt: &str) -> Result<Answer, AppError> {
        self.answers
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }

    fn unexpected(prompt: &str, answer: Answer) -> AppError {
        AppError::Prompt(format!("'{}' got unexpected answer {:?}", prompt, answer))
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &self,
        prompt: &str,
        _default: Option<&str>,
        validate: AnswerValidator<'_>,
    ) -> Result<String, AppError> {
        loop {
            match self.next(prompt)? {
                Answer::Text(text) => match validate(&text) {
                    Ok(()) => return Ok(text),
                    Err(_) => self.rejected.lock().unwrap().push(text),
                },
                other => return Err(Self::unexpected(prompt, other)),
            }
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        match self.next(prompt)? {
            Answer::Confirm(value) => Ok(value),
            other => Err(Self::unexpected(prompt, other)),
        }
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize, AppError> {
        match self.next(prompt)? {
            Answer::Select(index) => Ok(index),
            other => Err(Self::unexpected(prompt, other)),
        }
    }
}
