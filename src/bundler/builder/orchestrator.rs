//! Main bundler orchestration and coordination.
//!
//! This module provides the [`Bundler`] orchestrator that runs the five
//! pipeline stages in order and reports progress through an [`OutputManager`].

use super::{
    invocation::build_executable,
    tool_detection::{ToolStatus, ensure_pyinstaller, resolve_python},
};
use crate::{
    bundler::{
        DistributionReport, InstallerFamily, ProcessRunner, Result, Settings, SystemRunner, accessories,
        distribution::package_distribution, preflight::check_source, settings::PACKAGE_DIR,
    },
    cli::OutputManager,
};

/// How a pipeline run ended when no error occurred.
#[derive(Debug)]
pub enum PipelineOutcome {
    /// The freeze succeeded and the distribution folder was assembled.
    Packaged(DistributionReport),
    /// PyInstaller exited unsuccessfully; packaging was skipped.
    BuildFailed {
        /// PyInstaller exit code, if any.
        code: Option<i32>,
    },
}

impl PipelineOutcome {
    pub fn is_packaged(&self) -> bool {
        matches!(self, PipelineOutcome::Packaged(_))
    }
}

/// Main bundler orchestrator.
///
/// Runs, strictly in sequence:
///
/// 1. Source check (fails before anything is written)
/// 2. PyInstaller availability, installing it when missing
/// 3. Descriptor, README and installer generation
/// 4. The PyInstaller freeze
/// 5. Distribution folder assembly, only after a successful freeze
///
/// Runs must not overlap on the same base directory.
///
/// # Examples
///
/// ```no_run
/// use generatore3d_bundler::bundler::{Bundler, SettingsBuilder};
/// use generatore3d_bundler::cli::OutputManager;
///
/// # async fn example() -> generatore3d_bundler::bundler::Result<()> {
/// let settings = SettingsBuilder::new().build()?;
/// let outcome = Bundler::new(settings, OutputManager::new(false, false)).run().await?;
/// assert!(outcome.is_packaged());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Bundler<R = SystemRunner> {
    settings: Settings,
    runner: R,
    output: OutputManager,
}

impl Bundler<SystemRunner> {
    /// Creates a bundler that spawns real processes.
    pub fn new(settings: Settings, output: OutputManager) -> Self {
        Self::with_runner(settings, SystemRunner, output)
    }
}

impl<R: ProcessRunner> Bundler<R> {
    /// Creates a bundler that runs commands through `runner`.
    pub fn with_runner(settings: Settings, runner: R, output: OutputManager) -> Self {
        Self {
            settings,
            runner,
            output,
        }
    }

    /// Returns a reference to the bundler settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the runner, mainly so tests can inspect what was executed.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Executes the whole pipeline.
    ///
    /// # Errors
    ///
    /// Missing source, missing interpreter, failed pip install, I/O failures,
    /// and a successful freeze that left no artifact are all errors. A failed
    /// freeze is not: it yields [`PipelineOutcome::BuildFailed`].
    pub async fn run(&self) -> Result<PipelineOutcome> {
        let out = &self.output;
        let product = self.settings.product_name();

        out.banner(&format!("BUILD {} EXECUTABLE", product.to_uppercase()));
        out.verbose(&format!(
            "Base directory: {} (target: {})",
            self.settings.base_dir().display(),
            self.settings.target()
        ));

        let source = check_source(&self.settings).await?;
        out.success(&format!("Source file found: {}", source.display()));

        out.progress("Checking PyInstaller...");
        let python = resolve_python(&self.settings)?;
        out.verbose(&format!("Interpreter: {}", python.display()));
        match ensure_pyinstaller(&self.runner, &python, self.settings.base_dir()).await? {
            ToolStatus::AlreadyInstalled => out.success("PyInstaller already installed"),
            ToolStatus::Installed => out.success("PyInstaller installed"),
        }

        for path in accessories::generate_all(&self.settings).await? {
            let name = path.file_name().unwrap_or(path.as_os_str());
            out.success(&format!("Created {}", name.to_string_lossy()));
        }

        out.banner("Starting build");
        out.progress("This may take several minutes...");
        let outcome = build_executable(&self.runner, &self.settings).await?;
        if !outcome.success() {
            out.error(&format!(
                "Build failed (exit code {}). Check the errors above.",
                outcome
                    .code
                    .map_or_else(|| "none".to_string(), |c| c.to_string())
            ));
            return Ok(PipelineOutcome::BuildFailed { code: outcome.code });
        }
        out.success("Build completed");

        out.progress("Creating distribution package...");
        let report = package_distribution(&self.settings).await?;
        out.success(&format!("Package created in: {}/", report.directory.display()));
        out.section("Package contents");
        for entry in &report.entries {
            out.indent(&format!("- {} ({})", entry.name, entry.display_size()));
            out.verbose(&format!("    sha256 {}", entry.checksum));
        }

        out.banner("BUILD COMPLETED SUCCESSFULLY");
        out.info(&format!("Executable created in: {PACKAGE_DIR}/"));
        out.section("Next steps");
        out.indent("1. Test the executable");
        out.indent("2. Create a ZIP archive for distribution");
        out.indent("3. (Optional) Sign the executable");
        out.indent(&format!(
            "4. Point users on this platform to {}",
            InstallerFamily::for_target(self.settings.target())
                .template()
                .file_name
        ));

        Ok(PipelineOutcome::Packaged(report))
    }
}
