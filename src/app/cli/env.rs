//! Env command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api;
use crate::domain::AppError;

#[derive(Debug, Args)]
pub struct EnvArgs {
    /// Credentials file to load
    #[arg(short, long, default_value = ".env")]
    file: PathBuf,
    /// Command to run with the credentials exported
    #[arg(last = true)]
    command: Vec<String>,
}

pub fn run_env(args: EnvArgs) -> Result<i32, AppError> {
    let outcome = api::env(&args.file, &args.command)?;

    for line in &outcome.confirmations {
        println!("{}", line);
    }
    for key in &outcome.missing_required {
        eprintln!("⚠️  Missing required credential: {}", key);
    }
    Ok(outcome.exit_code.unwrap_or(0))
}
