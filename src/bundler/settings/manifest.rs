//! Optional TOML manifest overriding the built-in package defaults.
//!
//! ```toml
//! [package]
//! product_name = "Generatore3D"
//! source_file = "photo_to_3d_generator.py"
//!
//! [freeze]
//! hidden_imports = ["tkinterdnd2", "PIL._imagingtk"]
//! excludes = ["matplotlib"]
//! ```
//!
//! Absent keys keep their defaults.

use super::{FreezeSettings, PackageSettings};
use serde::Deserialize;

/// Parsed manifest. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub package: PackageOverrides,
    pub freeze: FreezeOverrides,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PackageOverrides {
    pub product_name: Option<String>,
    pub source_file: Option<String>,
    pub icon: Option<String>,
    pub bundle_icon: Option<String>,
    pub bundle_identifier: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FreezeOverrides {
    pub program: Option<String>,
    pub onefile: Option<bool>,
    pub windowed: Option<bool>,
    pub clean: Option<bool>,
    pub hidden_imports: Option<Vec<String>>,
    pub excludes: Option<Vec<String>>,
    pub analysis_hidden_imports: Option<Vec<String>>,
    pub analysis_excludes: Option<Vec<String>>,
}

fn set<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl Manifest {
    /// Applies the overrides on top of `package` and `freeze`.
    pub fn apply(self, package: &mut PackageSettings, freeze: &mut FreezeSettings) {
        let p = self.package;
        set(&mut package.product_name, p.product_name);
        set(&mut package.source_file, p.source_file);
        set(&mut package.icon, p.icon);
        set(&mut package.bundle_icon, p.bundle_icon);
        set(&mut package.bundle_identifier, p.bundle_identifier);

        let f = self.freeze;
        set(&mut freeze.program, f.program);
        set(&mut freeze.onefile, f.onefile);
        set(&mut freeze.windowed, f.windowed);
        set(&mut freeze.clean, f.clean);
        set(&mut freeze.hidden_imports, f.hidden_imports);
        set(&mut freeze.excludes, f.excludes);
        set(&mut freeze.analysis_hidden_imports, f.analysis_hidden_imports);
        set(&mut freeze.analysis_excludes, f.analysis_excludes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_manifest_keeps_remaining_defaults() {
        let manifest: Manifest = toml::from_str(
            r#"
            [package]
            product_name = "Demo3D"

            [freeze]
            excludes = ["tkinter"]
            "#,
        )
        .unwrap();

        let mut package = PackageSettings::default();
        let mut freeze = FreezeSettings::default();
        manifest.apply(&mut package, &mut freeze);

        assert_eq!(package.product_name, "Demo3D");
        assert_eq!(package.source_file, "photo_to_3d_generator.py");
        assert_eq!(freeze.excludes, vec!["tkinter".to_string()]);
        assert_eq!(freeze.hidden_imports, FreezeSettings::default().hidden_imports);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let parsed = toml::from_str::<Manifest>("[package]\nname = \"x\"\n");
        assert!(parsed.is_err());
    }
}
