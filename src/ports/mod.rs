mod command_runner;
mod prompter;

pub use command_runner::{CommandOutput, CommandRunner};
pub use prompter::{AnswerValidator, Prompter};
