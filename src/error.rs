//! Top-level error types for the bundler CLI.
//!
//! This module defines all error types with actionable error messages and recovery suggestions.

use thiserror::Error;

/// Result type alias for bundler operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all bundler operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Bundler errors
    #[error("{0}")]
    Bundler(#[from] crate::bundler::Error),

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error;

        match self {
            BundlerError::Bundler(Error::SourceNotFound { path }) => vec![
                format!(
                    "Run the bundler from the folder containing {}",
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_else(|| path.display().to_string())
                ),
                "Or point at it with --base-dir <DIR>".to_string(),
            ],
            BundlerError::Bundler(Error::ToolNotFound { hint, .. }) => vec![hint.clone()],
            BundlerError::Bundler(Error::InstallFailed { .. }) => vec![
                "Check network access and that pip is available for this interpreter".to_string(),
                "Install manually with: python -m pip install pyinstaller".to_string(),
            ],
            BundlerError::Bundler(Error::ArtifactNotFound { .. }) => vec![
                "Inspect the PyInstaller output above; the build may have written elsewhere"
                    .to_string(),
            ],
            BundlerError::Toml(_) => vec!["Fix the manifest syntax and re-run".to_string()],
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}
