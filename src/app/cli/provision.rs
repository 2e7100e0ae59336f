//! Provision command implementation.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Args;

use super::request_args::RequestArgs;
use crate::app::api::{self, ProvisionOptions};
use crate::domain::{AppError, ArtifactStatus, ProvisionReport};

#[derive(Debug, Args)]
pub struct ProvisionArgs {
    #[command(flatten)]
    request: RequestArgs,
    /// Write every host path under this directory instead of /
    #[arg(long)]
    root: Option<PathBuf>,
    /// Log system commands instead of running them; files are written under --root
    #[arg(long, requires = "root")]
    dry_run: bool,
    /// Never prompt; missing values fall back to defaults
    #[arg(long)]
    non_interactive: bool,
    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

pub fn run_provision(args: ProvisionArgs) -> Result<i32, AppError> {
    let options = ProvisionOptions {
        draft: args.request.draft(),
        config: args.request.config.clone(),
        root: args.root.unwrap_or_else(|| PathBuf::from("/")),
        dry_run: args.dry_run,
        interactive: !args.non_interactive && std::io::stdin().is_terminal(),
    };
    let report = api::provision(options)?;

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| AppError::Command {
            command: "report serialization".to_string(),
            detail: e.to_string(),
        })?;
        println!("{}", json);
    } else {
        print_summary(&report);
    }
    Ok(report.exit_code)
}

fn print_summary(report: &ProvisionReport) {
    match report.outcome.abort_reason() {
        None => println!("✅ Host provisioned"),
        Some(reason) => eprintln!("❌ Provisioning aborted in {}", reason),
    }

    let (unchanged, changed): (Vec<_>, Vec<_>) =
        report.artifacts.iter().partition(|a| a.status == ArtifactStatus::Unchanged);
    if !changed.is_empty() {
        println!("  Files:");
        for artifact in changed {
            println!("    {:<9} {}", artifact.status.label(), artifact.path.display());
        }
    }
    if !unchanged.is_empty() {
        println!("  {} file(s) already up to date", unchanged.len());
    }

    if !report.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &report.warnings {
            println!("  • {}: {}", warning.state, warning.message);
        }
    }

    if let Some(remediation) = &report.remediation {
        eprintln!("Try: {}", remediation);
    } else if !report.next_steps.is_empty() {
        println!("\nNext steps:");
        for (i, step) in report.next_steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step);
        }
    }
}
