//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap. Every flag is
//! optional: running without arguments executes the full pipeline in the
//! current directory.

use clap::Parser;
use std::path::PathBuf;

/// Freeze Generatore3D with PyInstaller and assemble a distribution folder
#[derive(Parser, Debug)]
#[command(
    name = "generatore3d_bundler",
    version,
    about = "Freeze Generatore3D with PyInstaller and assemble a distribution folder",
    long_about = "Builds a standalone Generatore3D executable and a ready-to-ship dist_package/.

Stages:
  1. check that photo_to_3d_generator.py exists
  2. install PyInstaller with pip if it is missing
  3. write generatore3d.spec, README.txt, installer_windows.bat, installer_unix.sh
  4. run pyinstaller (blocks until it finishes)
  5. recreate dist_package/ and copy the executable and accessories into it

Usage:
  generatore3d_bundler
  generatore3d_bundler --base-dir ~/projects/generatore3d
  generatore3d_bundler --python /usr/bin/python3.12 --json

Exit code 0 = dist_package/ assembled; 1 = error; 2 = PyInstaller failed."
)]
pub struct Args {
    /// Directory containing the application source; all outputs are written here
    #[arg(short = 'C', long, value_name = "DIR", env = "GENERATORE3D_BASE_DIR", default_value = ".")]
    pub base_dir: PathBuf,

    /// Python interpreter used to probe and install PyInstaller (default: search PATH)
    #[arg(long, value_name = "PATH", env = "GENERATORE3D_PYTHON")]
    pub python: Option<PathBuf>,

    /// TOML manifest overriding package metadata and PyInstaller options
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Print the distribution report as JSON instead of progress output
    #[arg(long)]
    pub json: bool,

    /// Print extra detail
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_dir.is_dir() {
            return Err(format!(
                "Base directory does not exist or is not a directory: {}",
                self.base_dir.display()
            ));
        }

        if let Some(manifest) = &self.manifest {
            if !manifest.is_file() {
                return Err(format!("Manifest not found: {}", manifest.display()));
            }
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,

    /// Emit the report as JSON
    json: bool,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        // JSON goes to stdout, so progress output is silenced
        let output = super::OutputManager::new(args.verbose, args.quiet || args.json);

        Self {
            output,
            json: args.json,
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    pub fn json(&self) -> bool {
        self.json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_means_current_directory() {
        let args = Args::try_parse_from(["generatore3d_bundler"]).unwrap();
        assert_eq!(args.base_dir, PathBuf::from("."));
        assert!(args.python.is_none());
        assert!(!args.json);
    }

    #[test]
    fn json_silences_progress_output() {
        let args = Args::try_parse_from(["generatore3d_bundler", "--json"]).unwrap();
        let config = RuntimeConfig::from(&args);
        assert!(config.json());
        assert!(config.output().is_quiet());
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        assert!(Args::try_parse_from(["generatore3d_bundler", "-v", "-q"]).is_err());
    }
}
