//! Source precondition check.

use crate::bundler::{
    Settings,
    error::{Error, Result},
    utils::fs,
};
use std::path::PathBuf;

/// Verifies that the application source exists in the base directory.
///
/// Runs before anything is written, so a failure leaves the directory untouched.
pub async fn check_source(settings: &Settings) -> Result<PathBuf> {
    let source = settings.source_path();
    if !fs::exists(&source).await {
        log::debug!("Source lookup failed: {}", source.display());
        return Err(Error::SourceNotFound { path: source });
    }
    Ok(source)
}
