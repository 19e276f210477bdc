//! Target platform resolution.

use std::fmt;

/// Platform family the freeze targets.
///
/// Resolved once when settings are built. Together with the `onefile` and
/// `windowed` flags it decides which artifact PyInstaller is expected to
/// produce, and it decides whether the `.spec` descriptor carries a macOS
/// `BUNDLE` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformTarget {
    /// `.exe` executable.
    Windows,
    /// `.app` bundle directory for windowed builds.
    MacOs,
    /// Extensionless executable.
    Linux,
}

/// Shape of the frozen artifact on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// A single regular file.
    File,
    /// An application bundle directory.
    Bundle,
    /// A one-folder build: the executable next to its libraries.
    Folder,
}

impl PlatformTarget {
    /// Returns the target for the host this binary was compiled for.
    ///
    /// Anything that is neither Windows nor macOS is treated as Linux,
    /// since PyInstaller emits a bare executable on every other Unix.
    pub fn host() -> Self {
        if cfg!(target_os = "windows") {
            PlatformTarget::Windows
        } else if cfg!(target_os = "macos") {
            PlatformTarget::MacOs
        } else {
            PlatformTarget::Linux
        }
    }

    /// Shape of what PyInstaller leaves in `dist/`.
    ///
    /// A windowed macOS build is always wrapped in a `.app`. Otherwise
    /// `--onefile` yields a single executable and a one-folder build yields
    /// a directory named after the product.
    pub fn artifact_kind(&self, onefile: bool, windowed: bool) -> ArtifactKind {
        match self {
            PlatformTarget::MacOs if windowed => ArtifactKind::Bundle,
            _ if onefile => ArtifactKind::File,
            _ => ArtifactKind::Folder,
        }
    }

    /// Name of the artifact PyInstaller writes into `dist/`.
    pub fn artifact_name(&self, product_name: &str, kind: ArtifactKind) -> String {
        match (self, kind) {
            (_, ArtifactKind::Bundle) => format!("{product_name}.app"),
            (PlatformTarget::Windows, ArtifactKind::File) => format!("{product_name}.exe"),
            _ => product_name.to_string(),
        }
    }

    /// Whether the `.spec` descriptor gets a `BUNDLE(...)` block.
    pub fn wants_app_bundle(&self) -> bool {
        matches!(self, PlatformTarget::MacOs)
    }
}

impl fmt::Display for PlatformTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlatformTarget::Windows => "windows",
            PlatformTarget::MacOs => "macos",
            PlatformTarget::Linux => "linux",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn onefile_artifact_names_follow_pyinstaller_conventions() {
        let name = |target: PlatformTarget| {
            target.artifact_name("Generatore3D", target.artifact_kind(true, true))
        };
        assert_eq!(name(PlatformTarget::Windows), "Generatore3D.exe");
        assert_eq!(name(PlatformTarget::MacOs), "Generatore3D.app");
        assert_eq!(name(PlatformTarget::Linux), "Generatore3D");
    }

    #[test]
    fn only_windowed_macos_produces_a_bundle() {
        assert_eq!(PlatformTarget::MacOs.artifact_kind(true, true), ArtifactKind::Bundle);
        assert_eq!(PlatformTarget::MacOs.artifact_kind(false, true), ArtifactKind::Bundle);
        assert_eq!(PlatformTarget::MacOs.artifact_kind(true, false), ArtifactKind::File);
        assert_eq!(PlatformTarget::Linux.artifact_kind(true, true), ArtifactKind::File);
        assert!(!PlatformTarget::Windows.wants_app_bundle());
    }

    #[test]
    fn one_folder_builds_produce_a_directory_without_extension() {
        for target in [PlatformTarget::Windows, PlatformTarget::Linux] {
            let kind = target.artifact_kind(false, true);
            assert_eq!(kind, ArtifactKind::Folder);
            assert_eq!(target.artifact_name("Generatore3D", kind), "Generatore3D");
        }
        assert_eq!(
            PlatformTarget::MacOs.artifact_kind(false, false),
            ArtifactKind::Folder
        );
    }
}
