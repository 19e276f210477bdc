//! Error types for the freeze-and-package pipeline.
//!
//! Every stage reports failures through [`Error`]. I/O failures carry the
//! path and the operation that was attempted via [`ErrorExt::fs_context`].

use std::{fmt::Display, io, path::PathBuf};
use thiserror::Error;

/// Result alias used throughout the bundler.
pub type Result<T> = std::result::Result<T, Error>;

/// Pipeline error.
#[derive(Error, Debug)]
pub enum Error {
    /// The application source is missing from the base directory.
    #[error("source file not found: {}", .path.display())]
    SourceNotFound {
        /// Expected location of the source file
        path: PathBuf,
    },

    /// A required external tool could not be located.
    #[error("{tool} not found")]
    ToolNotFound {
        /// Tool name
        tool: String,
        /// What the user can do about it
        hint: String,
    },

    /// The package installer exited unsuccessfully.
    #[error("`{command}` failed with exit code {}", display_code(.code))]
    InstallFailed {
        /// Rendered install command
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
    },

    /// A subprocess could not be started.
    #[error("failed to run `{command}`: {error}")]
    CommandFailed {
        /// Rendered command
        command: String,
        /// Underlying spawn error
        error: io::Error,
    },

    /// The freeze succeeded but the expected artifact is absent.
    #[error("no {target} artifact found at {}", .path.display())]
    ArtifactNotFound {
        /// Expected artifact location
        path: PathBuf,
        /// Platform the artifact was resolved for
        target: String,
    },

    /// I/O failure with the operation and path that caused it.
    #[error("{context} ({}): {error}", .path.display())]
    Fs {
        /// Operation being performed
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying error
        #[source]
        error: io::Error,
    },

    /// Template registration failed.
    #[error("template error: {0}")]
    Template(#[from] handlebars::TemplateError),

    /// Template rendering failed.
    #[error("render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Directory traversal failed.
    #[error("walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping failed.
    #[error("path error: {0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Error with additional context.
    #[error("{context}: {source}")]
    Context {
        /// Context message
        context: String,
        /// Wrapped error
        source: Box<Error>,
    },

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

fn display_code(code: &Option<i32>) -> String {
    code.map_or_else(|| "none (terminated by signal)".to_string(), |c| c.to_string())
}

/// Attaches path context to I/O results.
pub trait ErrorExt<T> {
    /// Converts an I/O error into [`Error::Fs`] naming `context` and `path`.
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| Error::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

/// Adds a context message to fallible values.
pub trait Context<T> {
    /// Wraps the failure with `context`.
    fn context<C: Display>(self, context: C) -> Result<T>;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.map_err(|e| Error::Context {
            context: context.to_string(),
            source: Box::new(e.into()),
        })
    }
}

impl<T> Context<T> for Option<T> {
    fn context<C: Display>(self, context: C) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

/// Returns early with [`Error::GenericError`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
