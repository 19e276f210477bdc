//! Builder for constructing Settings.

use super::{FreezeSettings, Manifest, PackageSettings, PlatformTarget, Settings};
use crate::bundler::error::ErrorExt;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// # Examples
///
/// ```no_run
/// use generatore3d_bundler::bundler::{PlatformTarget, SettingsBuilder};
///
/// # fn example() -> generatore3d_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new()
///     .base_dir("/work/generatore3d")
///     .target(PlatformTarget::Windows)
///     .python("C:/Python312/python.exe")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct SettingsBuilder {
    base_dir: Option<PathBuf>,
    package_settings: Option<PackageSettings>,
    freeze_settings: Option<FreezeSettings>,
    manifest: Option<Manifest>,
    target: Option<PlatformTarget>,
    python: Option<PathBuf>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the directory holding the source file.
    ///
    /// Default: `.`, absolutized against the current directory once at build time.
    pub fn base_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.base_dir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets package metadata.
    ///
    /// Default: [`PackageSettings::default`]
    pub fn package_settings(mut self, settings: PackageSettings) -> Self {
        self.package_settings = Some(settings);
        self
    }

    /// Sets PyInstaller options.
    ///
    /// Default: [`FreezeSettings::default`]
    pub fn freeze_settings(mut self, settings: FreezeSettings) -> Self {
        self.freeze_settings = Some(settings);
        self
    }

    /// Applies manifest overrides on top of package and freeze settings.
    pub fn manifest(mut self, manifest: Manifest) -> Self {
        self.manifest = Some(manifest);
        self
    }

    /// Overrides the platform target.
    ///
    /// Default: [`PlatformTarget::host`]
    pub fn target(mut self, target: PlatformTarget) -> Self {
        self.target = Some(target);
        self
    }

    /// Uses this interpreter instead of searching `PATH`.
    pub fn python<P: AsRef<Path>>(mut self, python: P) -> Self {
        self.python = Some(python.as_ref().to_path_buf());
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the base directory cannot be made absolute.
    pub fn build(self) -> crate::bundler::Result<Settings> {
        let base_dir = self.base_dir.unwrap_or_else(|| PathBuf::from("."));
        let base_dir = base_dir
            .absolutize()
            .fs_context("resolving base directory", &base_dir)?
            .into_owned();

        let mut package = self.package_settings.unwrap_or_default();
        let mut freeze = self.freeze_settings.unwrap_or_default();
        if let Some(manifest) = self.manifest {
            manifest.apply(&mut package, &mut freeze);
        }

        let target = self.target.unwrap_or_else(PlatformTarget::host);
        log::debug!("Resolved platform target: {target}");

        Ok(Settings::new(package, freeze, base_dir, target, self.python))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::ArtifactKind;

    #[test]
    fn paths_hang_off_the_base_dir() {
        let settings = SettingsBuilder::new()
            .base_dir("/work/app")
            .target(PlatformTarget::Linux)
            .build()
            .unwrap();

        assert_eq!(settings.source_path(), Path::new("/work/app/photo_to_3d_generator.py"));
        assert_eq!(settings.descriptor_path(), Path::new("/work/app/generatore3d.spec"));
        assert_eq!(settings.artifact_path(), Path::new("/work/app/dist/Generatore3D"));
        assert_eq!(settings.package_directory(), Path::new("/work/app/dist_package"));
    }

    #[test]
    fn manifest_freeze_mode_moves_the_expected_artifact() {
        let manifest: Manifest = toml::from_str("[freeze]\nonefile = false\n").unwrap();
        let settings = SettingsBuilder::new()
            .base_dir("/work/app")
            .target(PlatformTarget::Windows)
            .manifest(manifest)
            .build()
            .unwrap();

        assert_eq!(settings.artifact_kind(), ArtifactKind::Folder);
        assert_eq!(settings.artifact_path(), Path::new("/work/app/dist/Generatore3D"));
    }

    #[test]
    fn relative_base_dir_is_absolutized() {
        let settings = SettingsBuilder::new().base_dir("some/dir").build().unwrap();
        assert!(settings.base_dir().is_absolute());
        assert!(settings.base_dir().ends_with("some/dir"));
    }
}
