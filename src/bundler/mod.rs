//! Freeze-and-package pipeline for Generatore3D.
//!
//! The pipeline runs five stages strictly in order:
//!
//! 1. [`preflight`] - the application source must exist in the base directory
//! 2. [`builder`] tool detection - PyInstaller is installed with pip when missing
//! 3. [`accessories`] - `.spec` descriptor, README and installer scripts are written
//! 4. [`builder`] invocation - PyInstaller runs once and blocks until it exits
//! 5. [`distribution`] - the artifact and accessories are copied into `dist_package/`
//!
//! A failed freeze stops the pipeline before stage 5.
//!
//! # Example
//!
//! ```no_run
//! use generatore3d_bundler::bundler::{Bundler, PipelineOutcome, SettingsBuilder};
//! use generatore3d_bundler::cli::OutputManager;
//!
//! # async fn example() -> generatore3d_bundler::bundler::Result<()> {
//! let settings = SettingsBuilder::new().base_dir("./app").build()?;
//! let bundler = Bundler::new(settings, OutputManager::new(true, false));
//!
//! match bundler.run().await? {
//!     PipelineOutcome::Packaged(report) => println!("{} entries", report.entries.len()),
//!     PipelineOutcome::BuildFailed { code } => println!("freeze failed: {code:?}"),
//! }
//! # Ok(())
//! # }
//! ```

pub mod accessories;
pub mod builder;
pub mod distribution;
pub mod error;
pub mod preflight;
pub mod process;
pub mod settings;
pub mod utils;

pub use accessories::InstallerFamily;
pub use builder::{Bundler, PipelineOutcome, ToolStatus};
pub use distribution::{DistributionReport, PackagedEntry};
pub use error::{Error, Result};
pub use process::{CommandSpec, ProcessOutcome, ProcessRunner, SystemRunner};
pub use settings::{
    ArtifactKind, FreezeSettings, Manifest, PackageSettings, PlatformTarget, Settings,
    SettingsBuilder,
};
