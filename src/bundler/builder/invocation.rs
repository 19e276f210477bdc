//! PyInstaller command construction and execution.

use crate::bundler::{
    CommandSpec, ProcessOutcome, ProcessRunner, Settings, error::Result, utils::fs,
};

/// Builds the PyInstaller command line.
///
/// Order: mode flags, `--name`, `--clean`, one `--hidden-import` pair per
/// hidden import, one `--exclude-module` pair per exclude, `--icon` when
/// `include_icon` is set, then the source file.
pub fn freeze_command(settings: &Settings, include_icon: bool) -> CommandSpec {
    let freeze = settings.freeze();
    let package = settings.package();

    let mut cmd = CommandSpec::new(&freeze.program, settings.base_dir());
    if freeze.onefile {
        cmd = cmd.arg("--onefile");
    }
    if freeze.windowed {
        cmd = cmd.arg("--windowed");
    }
    cmd = cmd.arg(format!("--name={}", package.product_name));
    if freeze.clean {
        cmd = cmd.arg("--clean");
    }

    for module in &freeze.hidden_imports {
        cmd = cmd.args(["--hidden-import", module.as_str()]);
    }
    for module in &freeze.excludes {
        cmd = cmd.args(["--exclude-module", module.as_str()]);
    }

    if include_icon {
        cmd = cmd.args(["--icon", package.icon.as_str()]);
    }

    cmd.arg(package.source_file.as_str())
}

/// Runs PyInstaller and waits for it, however long it takes.
///
/// A non-zero exit is logged and returned as an unsuccessful outcome rather
/// than an error; only a spawn failure is an `Err`.
pub async fn build_executable<R: ProcessRunner>(
    runner: &R,
    settings: &Settings,
) -> Result<ProcessOutcome> {
    let include_icon = fs::exists(&settings.icon_path()).await;
    if !include_icon {
        log::debug!("No icon at {}, building without one", settings.icon_path().display());
    }

    let cmd = freeze_command(settings, include_icon);
    log::info!("Running {}", cmd.display());

    let outcome = runner.run(&cmd).await?;
    if outcome.success() {
        log::info!("✓ Freeze completed");
    } else {
        log::error!("Freeze failed with exit code {:?}", outcome.code);
    }
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::{PlatformTarget, SettingsBuilder};

    fn settings() -> Settings {
        SettingsBuilder::new()
            .base_dir("/work/app")
            .target(PlatformTarget::Linux)
            .build()
            .unwrap()
    }

    #[test]
    fn command_line_matches_fixed_layout() {
        let cmd = freeze_command(&settings(), false);
        assert_eq!(cmd.program(), "pyinstaller");
        assert_eq!(
            cmd.get_args(),
            [
                "--onefile",
                "--windowed",
                "--name=Generatore3D",
                "--clean",
                "--hidden-import",
                "tkinterdnd2",
                "--hidden-import",
                "PIL._imagingtk",
                "--hidden-import",
                "PIL._tkinter_finder",
                "--hidden-import",
                "scipy.ndimage",
                "--hidden-import",
                "scipy.spatial",
                "--hidden-import",
                "skimage.measure",
                "--exclude-module",
                "matplotlib",
                "--exclude-module",
                "pandas",
                "--exclude-module",
                "pytest",
                "--exclude-module",
                "IPython",
                "--exclude-module",
                "jupyter",
                "photo_to_3d_generator.py",
            ]
        );
        assert_eq!(cmd.current_dir(), std::path::Path::new("/work/app"));
    }

    #[test]
    fn icon_flag_precedes_source_file() {
        let cmd = freeze_command(&settings(), true);
        let args = cmd.get_args();
        let n = args.len();
        assert_eq!(&args[n - 3..], ["--icon", "icon.ico", "photo_to_3d_generator.py"]);
    }
}
