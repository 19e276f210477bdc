//! Generatore3D Bundler - freezes the photo-to-3D application into a distribution package.
//!
//! This binary checks the source, ensures PyInstaller is installed, writes the
//! installer accessories, runs the freeze and assembles `dist_package/`.

use generatore3d_bundler::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
