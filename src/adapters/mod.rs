mod dialoguer_prompter;
mod dry_run_runner;
pub mod embedded_templates;
mod host_files;
mod system_command_runner;

pub use dialoguer_prompter::DialoguerPrompter;
pub use dry_run_runner::DryRunRunner;
pub use embedded_templates::EmbeddedTemplates;
pub use host_files::HostFiles;
pub use system_command_runner::SystemCommandRunner;
