//! Accessory file generation.
//!
//! Writes the PyInstaller `.spec` descriptor, the end-user README and one
//! installer helper per platform family into the base directory. Existing
//! files are overwritten.
//!
//! # Module Organization
//!
//! - `template` - Handlebars sources for every generated file

mod template;

use crate::bundler::{
    PlatformTarget, Settings,
    error::Result,
    utils::fs,
};
use handlebars::Handlebars;
use serde::Serialize;
use std::path::PathBuf;

pub use template::{
    README_TEMPLATE, SPEC_TEMPLATE, UNIX_INSTALLER_TEMPLATE, WINDOWS_INSTALLER_TEMPLATE,
};

/// A generated text file shipped in the distribution folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessoryTemplate {
    /// File name in the base and distribution directories.
    pub file_name: &'static str,
    /// Handlebars source.
    pub source: &'static str,
    /// Whether the file gets `0o755` after writing.
    pub executable: bool,
}

pub const README: AccessoryTemplate = AccessoryTemplate {
    file_name: "README.txt",
    source: README_TEMPLATE,
    executable: false,
};

const WINDOWS_INSTALLER: AccessoryTemplate = AccessoryTemplate {
    file_name: "installer_windows.bat",
    source: WINDOWS_INSTALLER_TEMPLATE,
    executable: false,
};

const UNIX_INSTALLER: AccessoryTemplate = AccessoryTemplate {
    file_name: "installer_unix.sh",
    source: UNIX_INSTALLER_TEMPLATE,
    executable: true,
};

const DESCRIPTOR_TEMPLATE_NAME: &str = "descriptor.spec";

/// Platform family an installer script is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallerFamily {
    Windows,
    Unix,
}

impl InstallerFamily {
    /// Both families; every run writes both scripts.
    pub const ALL: [InstallerFamily; 2] = [InstallerFamily::Windows, InstallerFamily::Unix];

    pub fn for_target(target: PlatformTarget) -> Self {
        match target {
            PlatformTarget::Windows => InstallerFamily::Windows,
            PlatformTarget::MacOs | PlatformTarget::Linux => InstallerFamily::Unix,
        }
    }

    pub fn template(&self) -> &'static AccessoryTemplate {
        match self {
            InstallerFamily::Windows => &WINDOWS_INSTALLER,
            InstallerFamily::Unix => &UNIX_INSTALLER,
        }
    }
}

/// Accessories copied into the distribution folder, in copy order.
pub fn distributed_accessories() -> [&'static AccessoryTemplate; 3] {
    [&README, &WINDOWS_INSTALLER, &UNIX_INSTALLER]
}

#[derive(Serialize)]
struct TemplateContext<'a> {
    product_name: &'a str,
    source_file: &'a str,
    hidden_imports: &'a [String],
    excludes: &'a [String],
    console: bool,
    icon: Option<&'a str>,
    macos_bundle: bool,
    bundle_icon: Option<&'a str>,
    bundle_identifier: &'a str,
}

impl<'a> TemplateContext<'a> {
    async fn from_settings(settings: &'a Settings) -> TemplateContext<'a> {
        let package = settings.package();
        let freeze = settings.freeze();
        let macos_bundle = settings.target().wants_app_bundle();

        let icon = fs::exists(&settings.icon_path())
            .await
            .then_some(package.icon.as_str());
        let bundle_icon = if macos_bundle {
            fs::exists(&settings.bundle_icon_path())
                .await
                .then_some(package.bundle_icon.as_str())
        } else {
            None
        };

        TemplateContext {
            product_name: &package.product_name,
            source_file: &package.source_file,
            hidden_imports: &freeze.analysis_hidden_imports,
            excludes: &freeze.analysis_excludes,
            console: !freeze.windowed,
            icon,
            macos_bundle,
            bundle_icon,
            bundle_identifier: &package.bundle_identifier,
        }
    }
}

fn registry() -> Result<Handlebars<'static>> {
    let mut handlebars = Handlebars::new();
    handlebars.register_escape_fn(handlebars::no_escape);

    handlebars.register_template_string(DESCRIPTOR_TEMPLATE_NAME, SPEC_TEMPLATE)?;
    for accessory in distributed_accessories() {
        handlebars.register_template_string(accessory.file_name, accessory.source)?;
    }
    Ok(handlebars)
}

/// Renders the `.spec` descriptor for `settings` without writing it.
pub async fn render_descriptor(settings: &Settings) -> Result<String> {
    let context = TemplateContext::from_settings(settings).await;
    Ok(registry()?.render(DESCRIPTOR_TEMPLATE_NAME, &context)?)
}

/// Writes the `.spec` descriptor.
pub async fn write_descriptor(settings: &Settings) -> Result<PathBuf> {
    let path = settings.descriptor_path();
    fs::write_file(&path, &render_descriptor(settings).await?).await?;
    log::debug!("Wrote descriptor {}", path.display());
    Ok(path)
}

async fn write_accessory(
    handlebars: &Handlebars<'_>,
    context: &TemplateContext<'_>,
    settings: &Settings,
    accessory: &AccessoryTemplate,
) -> Result<PathBuf> {
    let path = settings.base_dir().join(accessory.file_name);
    let contents = handlebars.render(accessory.file_name, context)?;
    fs::write_file(&path, &contents).await?;
    if accessory.executable {
        fs::set_executable(&path).await?;
    }
    log::debug!("Wrote {}", path.display());
    Ok(path)
}

/// Writes the README.
pub async fn write_readme(settings: &Settings) -> Result<PathBuf> {
    let context = TemplateContext::from_settings(settings).await;
    write_accessory(&registry()?, &context, settings, &README).await
}

/// Writes one installer script per [`InstallerFamily`].
pub async fn write_installers(settings: &Settings) -> Result<Vec<PathBuf>> {
    let handlebars = registry()?;
    let context = TemplateContext::from_settings(settings).await;

    let mut written = Vec::with_capacity(InstallerFamily::ALL.len());
    for family in InstallerFamily::ALL {
        written.push(write_accessory(&handlebars, &context, settings, family.template()).await?);
    }
    Ok(written)
}

/// Writes the descriptor, the README and both installer scripts.
///
/// Returns the written paths in that order.
pub async fn generate_all(settings: &Settings) -> Result<Vec<PathBuf>> {
    let mut written = vec![write_descriptor(settings).await?, write_readme(settings).await?];
    written.extend(write_installers(settings).await?);
    log::info!("✓ Generated {} accessory files", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::SettingsBuilder;

    fn settings_in(dir: &std::path::Path, target: PlatformTarget) -> Settings {
        SettingsBuilder::new().base_dir(dir).target(target).build().unwrap()
    }

    #[tokio::test]
    async fn descriptor_references_icon_only_when_present() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = settings_in(tmp.path(), PlatformTarget::Windows);

        let without = render_descriptor(&settings).await.unwrap();
        assert!(without.contains("icon=None,"));

        std::fs::write(tmp.path().join("icon.ico"), b"ico").unwrap();
        let with = render_descriptor(&settings).await.unwrap();
        assert!(with.contains("icon='icon.ico',"));
    }

    #[tokio::test]
    async fn bundle_block_only_for_macos() {
        let tmp = tempfile::tempdir().unwrap();

        let linux = render_descriptor(&settings_in(tmp.path(), PlatformTarget::Linux))
            .await
            .unwrap();
        assert!(!linux.contains("BUNDLE("));

        let macos = render_descriptor(&settings_in(tmp.path(), PlatformTarget::MacOs))
            .await
            .unwrap();
        assert!(macos.contains("app = BUNDLE("));
        assert!(macos.contains("name='Generatore3D.app',"));
        assert!(macos.contains("bundle_identifier='com.ai.generatore3d',"));
        assert!(macos.contains("'NSHighResolutionCapable': 'True',"));
    }

    #[tokio::test]
    async fn windowed_build_disables_console() {
        let tmp = tempfile::tempdir().unwrap();
        let descriptor = render_descriptor(&settings_in(tmp.path(), PlatformTarget::Linux))
            .await
            .unwrap();
        assert!(descriptor.contains("console=False,"));
        assert!(descriptor.contains("name='Generatore3D',"));
        assert!(descriptor.contains("['photo_to_3d_generator.py'],"));
    }

    #[test]
    fn installer_family_follows_target() {
        assert_eq!(
            InstallerFamily::for_target(PlatformTarget::Windows).template().file_name,
            "installer_windows.bat"
        );
        assert!(InstallerFamily::for_target(PlatformTarget::MacOs).template().executable);
    }
}
