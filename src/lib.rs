//! Distribution bundler for the Generatore3D desktop application
//!
//! This library wraps PyInstaller to produce:
//! - a single-file executable (Windows `.exe`, Linux binary) or a macOS `.app` bundle
//! - a PyInstaller `.spec` descriptor
//! - a README and installer helper scripts for Windows and Unix
//! - a flat `dist_package/` folder ready for delivery
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
