//! CLI Adapter.

mod env;
mod provision;
mod render;
mod request_args;

use clap::{ArgAction, Parser, Subcommand};

use crate::app::logging::init_logging;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "hostprov")]
#[command(version)]
#[command(
    about = "Provision a Linux host to serve a Streamlit dashboard behind nginx",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install packages, build the environment and write service and proxy config
    #[clap(visible_alias = "p")]
    Provision(provision::ProvisionArgs),
    /// Print a rendered artifact without touching the host
    #[clap(visible_alias = "r")]
    Render(render::RenderArgs),
    /// Confirm a credentials file with redacted values, optionally running a command with it
    #[clap(visible_alias = "e")]
    Env(env::EnvArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<i32, AppError> = match cli.command {
        Commands::Provision(args) => provision::run_provision(args),
        Commands::Render(args) => render::run_render(args).map(|_| 0),
        Commands::Env(args) => env::run_env(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(remediation) = e.remediation() {
                eprintln!("Try: {}", remediation);
            }
            std::process::exit(e.exit_code());
        }
    }
}
