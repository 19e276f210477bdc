//! Binary-level behavior: argument handling and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn bundler_cmd() -> Command {
    let mut cmd = Command::cargo_bin("generatore3d_bundler").unwrap();
    cmd.env_remove("GENERATORE3D_BASE_DIR")
        .env_remove("GENERATORE3D_PYTHON");
    cmd
}

#[test]
fn missing_source_exits_nonzero_without_writing() {
    let tmp = tempfile::tempdir().unwrap();

    bundler_cmd()
        .arg("--base-dir")
        .arg(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("source file not found"))
        .stderr(predicate::str::contains("--base-dir"));

    assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
}

#[test]
fn nonexistent_base_dir_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();

    bundler_cmd()
        .arg("--base-dir")
        .arg(tmp.path().join("missing"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Base directory does not exist"));
}

#[test]
fn malformed_manifest_is_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let manifest = tmp.path().join("bundle.toml");
    std::fs::write(&manifest, "[package\nproduct_name = ").unwrap();

    bundler_cmd()
        .arg("--base-dir")
        .arg(tmp.path())
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}

#[test]
fn help_describes_the_pipeline() {
    bundler_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dist_package"))
        .stdout(predicate::str::contains("--python"));
}

#[cfg(unix)]
#[test]
fn failed_freeze_exits_with_build_failure_code() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("photo_to_3d_generator.py"), "print('hi')\n").unwrap();
    let manifest = tmp.path().join("bundle.toml");
    std::fs::write(&manifest, "[freeze]\nprogram = \"false\"\n").unwrap();

    bundler_cmd()
        .arg("--base-dir")
        .arg(tmp.path())
        .arg("--python")
        .arg("true")
        .arg("--manifest")
        .arg(&manifest)
        .assert()
        .code(2);

    assert!(!tmp.path().join("dist_package").exists());
}

#[cfg(unix)]
#[test]
fn json_flag_prints_the_distribution_report() {
    use std::os::unix::fs::PermissionsExt;

    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join("photo_to_3d_generator.py"), "print('hi')\n").unwrap();

    // Stands in for PyInstaller: drops a console onefile executable into dist/
    let freezer = tmp.path().join("fake-pyinstaller");
    std::fs::write(
        &freezer,
        "#!/bin/sh\nmkdir -p dist && printf 'binary' > dist/Generatore3D\n",
    )
    .unwrap();
    std::fs::set_permissions(&freezer, std::fs::Permissions::from_mode(0o755)).unwrap();

    let manifest = tmp.path().join("bundle.toml");
    std::fs::write(
        &manifest,
        format!(
            "[freeze]\nprogram = \"{}\"\nwindowed = false\n",
            freezer.display()
        ),
    )
    .unwrap();

    let output = bundler_cmd()
        .arg("--base-dir")
        .arg(tmp.path())
        .arg("--python")
        .arg("true")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<_> = report["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "Generatore3D",
            "README.txt",
            "installer_unix.sh",
            "installer_windows.bat"
        ]
    );
    assert_eq!(report["entries"][0]["size"], 6);
    assert!(
        report["directory"]
            .as_str()
            .unwrap()
            .ends_with("dist_package")
    );
    assert!(tmp.path().join("dist_package/Generatore3D").is_file());
}
