//! Shared fixtures for pipeline tests

#![allow(dead_code)]

use generatore3d_bundler::bundler::{
    Bundler, CommandSpec, FreezeSettings, PlatformTarget, ProcessOutcome, ProcessRunner, Result, Settings,
    SettingsBuilder,
};
use generatore3d_bundler::cli::OutputManager;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

pub const SOURCE: &str = "photo_to_3d_generator.py";

/// What the fake PyInstaller leaves behind on success.
#[derive(Debug, Clone, Copy)]
pub enum Produce {
    Nothing,
    File(&'static str),
    Bundle(&'static str),
    Folder(&'static str),
}

/// Kind of command the pipeline issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Probe,
    Install,
    Build,
}

/// Records every command and answers with preset exit codes.
#[derive(Debug)]
pub struct FakeRunner {
    pub probe_code: i32,
    pub install_code: i32,
    pub build_code: i32,
    pub produce: Produce,
    calls: Mutex<Vec<CommandSpec>>,
}

impl FakeRunner {
    /// PyInstaller installed, build succeeds and writes `produce`.
    pub fn succeeding(produce: Produce) -> Self {
        Self {
            probe_code: 0,
            install_code: 0,
            build_code: 0,
            produce,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_kinds(&self) -> Vec<Call> {
        self.calls().iter().map(classify).collect()
    }
}

pub fn classify(cmd: &CommandSpec) -> Call {
    if cmd.program() == "pyinstaller" {
        Call::Build
    } else if cmd.get_args().iter().any(|a| a == "pip") {
        Call::Install
    } else {
        Call::Probe
    }
}

fn produce_artifact(base: &Path, produce: Produce) {
    match produce {
        Produce::Nothing => {}
        Produce::File(rel) => {
            let path = base.join(rel);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, vec![0u8; 2048]).unwrap();
        }
        Produce::Bundle(rel) => {
            let app = base.join(rel);
            std::fs::create_dir_all(app.join("Contents/MacOS")).unwrap();
            std::fs::write(app.join("Contents/Info.plist"), vec![b'p'; 100]).unwrap();
            std::fs::write(app.join("Contents/MacOS/Generatore3D"), vec![0u8; 4096]).unwrap();
        }
        Produce::Folder(rel) => {
            let dir = base.join(rel);
            std::fs::create_dir_all(dir.join("_internal")).unwrap();
            std::fs::write(dir.join("Generatore3D"), vec![0u8; 1024]).unwrap();
            std::fs::write(dir.join("_internal/libpython3.so"), vec![0u8; 512]).unwrap();
        }
    }
}

impl ProcessRunner for FakeRunner {
    async fn run(&self, command: &CommandSpec) -> Result<ProcessOutcome> {
        self.calls.lock().unwrap().push(command.clone());

        let code = match classify(command) {
            Call::Probe => self.probe_code,
            Call::Install => self.install_code,
            Call::Build => {
                if self.build_code == 0 {
                    produce_artifact(command.current_dir(), self.produce);
                }
                self.build_code
            }
        };
        Ok(ProcessOutcome::from_code(code))
    }
}

/// Temp directory holding the application source.
pub fn project() -> TempDir {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(SOURCE), "print('hello')\n").unwrap();
    tmp
}

pub fn settings(base: &Path, target: PlatformTarget) -> Settings {
    SettingsBuilder::new()
        .base_dir(base)
        .target(target)
        .python("python3")
        .build()
        .unwrap()
}

pub fn settings_with_freeze(base: &Path, target: PlatformTarget, freeze: FreezeSettings) -> Settings {
    SettingsBuilder::new()
        .base_dir(base)
        .target(target)
        .python("python3")
        .freeze_settings(freeze)
        .build()
        .unwrap()
}

pub fn bundler(settings: Settings, runner: FakeRunner) -> Bundler<FakeRunner> {
    Bundler::with_runner(settings, runner, OutputManager::new(false, true))
}
