//! Command line interface for the Generatore3D bundler.
//!
//! This module parses arguments, builds [`Settings`](crate::bundler::Settings),
//! runs the pipeline and maps its outcome to a process exit code.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::OutputManager;

use crate::{
    bundler::{Bundler, Manifest, PipelineOutcome, SettingsBuilder},
    error::{CliError, Result},
};
use anyhow::Context as _;
use std::path::Path;

/// Exit code when PyInstaller fails.
pub const EXIT_BUILD_FAILED: i32 = 2;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with(args).await
}

/// Runs the pipeline for already-parsed arguments.
pub async fn run_with(args: Args) -> Result<i32> {
    args.validate()
        .map_err(|reason| CliError::InvalidArguments { reason })?;
    let config = RuntimeConfig::from(&args);

    let mut builder = SettingsBuilder::new().base_dir(&args.base_dir);
    if let Some(python) = &args.python {
        builder = builder.python(python);
    }
    if let Some(path) = &args.manifest {
        builder = builder.manifest(load_manifest(path).await?);
    }
    let settings = builder.build()?;

    let bundler = Bundler::new(settings, *config.output());
    match bundler.run().await? {
        PipelineOutcome::Packaged(report) => {
            if config.json() {
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            Ok(0)
        }
        PipelineOutcome::BuildFailed { code } => {
            log::debug!("PyInstaller exit code: {:?}", code);
            Ok(EXIT_BUILD_FAILED)
        }
    }
}

async fn load_manifest(path: &Path) -> Result<Manifest> {
    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading manifest {}", path.display()))?;
    Ok(toml::from_str(&text)?)
}
