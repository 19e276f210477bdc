//! Application package metadata.

/// Metadata about the application being frozen.
///
/// Defaults describe Generatore3D.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackageSettings {
    /// Name passed to `--name` and used for the artifact.
    pub product_name: String,
    /// Python entry point, relative to the base directory.
    pub source_file: String,
    /// Icon for the executable, used only when present on disk.
    pub icon: String,
    /// Icon for the macOS `.app` bundle, used only when present on disk.
    pub bundle_icon: String,
    /// macOS `CFBundleIdentifier`.
    pub bundle_identifier: String,
}

impl Default for PackageSettings {
    fn default() -> Self {
        Self {
            product_name: "Generatore3D".into(),
            source_file: "photo_to_3d_generator.py".into(),
            icon: "icon.ico".into(),
            bundle_icon: "icon.icns".into(),
            bundle_identifier: "com.ai.generatore3d".into(),
        }
    }
}
