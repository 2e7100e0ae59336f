//! Render command implementation.

use clap::{Args, ValueEnum};

use super::request_args::RequestArgs;
use crate::app::api::{self, Artifact};
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ArtifactArg {
    /// systemd unit
    Service,
    /// nginx virtual host
    Proxy,
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Artifact to print
    #[arg(value_enum)]
    artifact: ArtifactArg,
    #[command(flatten)]
    request: RequestArgs,
}

pub fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let artifact = match args.artifact {
        ArtifactArg::Service => Artifact::Service,
        ArtifactArg::Proxy => Artifact::Proxy,
    };
    let rendered = api::render(args.request.draft(), args.request.config.as_deref(), artifact)?;
    print!("{}", rendered);
    Ok(())
}
