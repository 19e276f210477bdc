//! External tool detection and installation.
//!
//! Locates the Python interpreter and makes sure PyInstaller is importable
//! from it, installing it with pip when it is not.

use crate::bundler::{
    CommandSpec, ProcessRunner, Settings,
    error::{Error, Result},
};
use std::path::{Path, PathBuf};

/// Module probed to decide whether PyInstaller is installed.
pub const PYINSTALLER_MODULE: &str = "PyInstaller";

/// Distribution name passed to pip.
pub const PYINSTALLER_PACKAGE: &str = "pyinstaller";

#[cfg(windows)]
const PYTHON_CANDIDATES: &[&str] = &["python", "python3"];
#[cfg(not(windows))]
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Result of [`ensure_pyinstaller`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolStatus {
    /// The probe succeeded; nothing was installed.
    AlreadyInstalled,
    /// pip installed PyInstaller during this run.
    Installed,
}

/// Returns the configured interpreter, or the first candidate found on `PATH`.
pub fn resolve_python(settings: &Settings) -> Result<PathBuf> {
    if let Some(python) = settings.python() {
        log::debug!("Using configured interpreter: {}", python.display());
        return Ok(python.to_path_buf());
    }

    for candidate in PYTHON_CANDIDATES {
        match which::which(candidate) {
            Ok(path) => {
                log::debug!("Found {} at: {}", candidate, path.display());
                return Ok(path);
            }
            Err(e) => log::debug!("{} not found in PATH: {}", candidate, e),
        }
    }

    Err(Error::ToolNotFound {
        tool: "Python interpreter".into(),
        hint: format!(
            "Install Python 3.8+ or pass --python <PATH> (searched: {})",
            PYTHON_CANDIDATES.join(", ")
        ),
    })
}

/// `<python> -c "import PyInstaller"`
pub fn probe_command(python: &Path, base_dir: &Path) -> CommandSpec {
    CommandSpec::new(python, base_dir)
        .arg("-c")
        .arg(format!("import {PYINSTALLER_MODULE}"))
}

/// `<python> -m pip install pyinstaller`
pub fn install_command(python: &Path, base_dir: &Path) -> CommandSpec {
    CommandSpec::new(python, base_dir).args(["-m", "pip", "install", PYINSTALLER_PACKAGE])
}

/// Checks whether PyInstaller can be imported by `python`.
pub async fn pyinstaller_available<R: ProcessRunner>(
    runner: &R,
    python: &Path,
    base_dir: &Path,
) -> Result<bool> {
    let outcome = runner.run(&probe_command(python, base_dir)).await?;
    Ok(outcome.success())
}

/// Installs PyInstaller with pip unless it is already importable.
///
/// A failing install is fatal: the error propagates and the run stops.
pub async fn ensure_pyinstaller<R: ProcessRunner>(
    runner: &R,
    python: &Path,
    base_dir: &Path,
) -> Result<ToolStatus> {
    if pyinstaller_available(runner, python, base_dir).await? {
        log::info!("✓ {PYINSTALLER_MODULE} already installed");
        return Ok(ToolStatus::AlreadyInstalled);
    }

    log::info!("Installing {PYINSTALLER_PACKAGE} with pip...");
    let install = install_command(python, base_dir);
    let outcome = runner.run(&install).await?;
    if !outcome.success() {
        return Err(Error::InstallFailed {
            command: install.display(),
            code: outcome.code,
        });
    }

    log::info!("✓ {PYINSTALLER_PACKAGE} installed");
    Ok(ToolStatus::Installed)
}
