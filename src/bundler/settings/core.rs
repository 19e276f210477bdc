//! Core Settings struct and implementations.

use super::{ArtifactKind, FreezeSettings, PackageSettings, PlatformTarget};
use std::path::{Path, PathBuf};

/// PyInstaller output directory, relative to the base directory.
pub const PYINSTALLER_DIST_DIR: &str = "dist";

/// Distribution folder assembled for delivery, relative to the base directory.
pub const PACKAGE_DIR: &str = "dist_package";

/// Main settings for bundler operations.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). Every path the
/// pipeline touches is derived from [`Settings::base_dir`]; nothing consults
/// the process working directory.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Package metadata.
    package: PackageSettings,

    /// PyInstaller options.
    freeze: FreezeSettings,

    /// Absolute directory holding the source and receiving all outputs.
    base_dir: PathBuf,

    /// Platform resolved at construction.
    target: PlatformTarget,

    /// Interpreter override; `None` means search `PATH`.
    python: Option<PathBuf>,
}

impl Settings {
    /// Returns the product name.
    pub fn product_name(&self) -> &str {
        &self.package.product_name
    }

    pub fn package(&self) -> &PackageSettings {
        &self.package
    }

    pub fn freeze(&self) -> &FreezeSettings {
        &self.freeze
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn target(&self) -> PlatformTarget {
        self.target
    }

    pub fn python(&self) -> Option<&Path> {
        self.python.as_deref()
    }

    /// Absolute path of the Python entry point.
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.package.source_file)
    }

    /// Absolute path of the executable icon.
    pub fn icon_path(&self) -> PathBuf {
        self.base_dir.join(&self.package.icon)
    }

    /// Absolute path of the macOS bundle icon.
    pub fn bundle_icon_path(&self) -> PathBuf {
        self.base_dir.join(&self.package.bundle_icon)
    }

    /// Path of the generated `.spec` descriptor (`generatore3d.spec` by default).
    pub fn descriptor_path(&self) -> PathBuf {
        self.base_dir
            .join(format!("{}.spec", self.package.product_name.to_lowercase()))
    }

    /// Shape of the artifact for this target and freeze mode.
    pub fn artifact_kind(&self) -> ArtifactKind {
        self.target
            .artifact_kind(self.freeze.onefile, self.freeze.windowed)
    }

    /// Where PyInstaller is expected to leave the artifact for this target.
    pub fn artifact_path(&self) -> PathBuf {
        self.base_dir.join(PYINSTALLER_DIST_DIR).join(
            self.target
                .artifact_name(&self.package.product_name, self.artifact_kind()),
        )
    }

    /// The distribution folder.
    pub fn package_directory(&self) -> PathBuf {
        self.base_dir.join(PACKAGE_DIR)
    }

    /// Creates a new Settings instance (used by SettingsBuilder).
    pub(super) fn new(
        package: PackageSettings,
        freeze: FreezeSettings,
        base_dir: PathBuf,
        target: PlatformTarget,
        python: Option<PathBuf>,
    ) -> Self {
        Self {
            package,
            freeze,
            base_dir,
            target,
            python,
        }
    }
}
