//! PyInstaller options.

/// Options controlling the PyInstaller invocation and the `.spec` descriptor.
///
/// The command line and the descriptor's `Analysis(...)` block carry
/// separate hint lists; the descriptor lists are broader.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreezeSettings {
    /// Program invoked for the freeze.
    pub program: String,
    /// `--onefile`
    pub onefile: bool,
    /// `--windowed` (no console window)
    pub windowed: bool,
    /// `--clean`
    pub clean: bool,
    /// `--hidden-import` values on the command line.
    pub hidden_imports: Vec<String>,
    /// `--exclude-module` values on the command line.
    pub excludes: Vec<String>,
    /// `hiddenimports=[...]` in the descriptor.
    pub analysis_hidden_imports: Vec<String>,
    /// `excludes=[...]` in the descriptor.
    pub analysis_excludes: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for FreezeSettings {
    fn default() -> Self {
        Self {
            program: "pyinstaller".into(),
            onefile: true,
            windowed: true,
            clean: true,
            hidden_imports: owned(&[
                "tkinterdnd2",
                "PIL._imagingtk",
                "PIL._tkinter_finder",
                "scipy.ndimage",
                "scipy.spatial",
                "skimage.measure",
            ]),
            excludes: owned(&["matplotlib", "pandas", "pytest", "IPython", "jupyter"]),
            analysis_hidden_imports: owned(&[
                "tkinterdnd2",
                "PIL",
                "PIL._imagingtk",
                "PIL._tkinter_finder",
                "trimesh",
                "numpy",
                "scipy",
                "scipy.ndimage",
                "scipy.spatial",
                "skimage",
                "skimage.measure",
                "requests",
                "json",
            ]),
            analysis_excludes: owned(&["matplotlib", "pandas", "pytest", "IPython"]),
        }
    }
}
