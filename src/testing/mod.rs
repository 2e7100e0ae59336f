mod fake_runner;
mod scripted_prompter;

pub use fake_runner::FakeRunner;
pub use scripted_prompter::ScriptedPrompter;
