//! Configuration structures for the bundling pipeline.
//!
//! This module provides package metadata, PyInstaller options, the target
//! platform and a builder that assembles them into [`Settings`].

mod builder;
mod core;
mod freeze;
mod manifest;
mod package;
mod platform;

// Re-export all public types
pub use builder::SettingsBuilder;
pub use self::core::{PACKAGE_DIR, PYINSTALLER_DIST_DIR, Settings};
pub use freeze::FreezeSettings;
pub use manifest::{FreezeOverrides, Manifest, PackageOverrides};
pub use package::PackageSettings;
pub use platform::{ArtifactKind, PlatformTarget};
