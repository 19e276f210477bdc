//! Distribution folder assembly.
//!
//! After a successful freeze, the artifact and the accessory files are copied
//! into a freshly recreated `dist_package/`, and every entry is measured and
//! hashed for the final report.

use crate::bundler::{
    ArtifactKind, Settings,
    accessories::distributed_accessories,
    builder::checksum::calculate_sha256,
    error::{Context, Error, ErrorExt, Result},
    utils::fs,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One top-level entry of the distribution folder.
#[derive(Debug, Clone, Serialize)]
pub struct PackagedEntry {
    /// File or directory name.
    pub name: String,
    /// Absolute path inside the distribution folder.
    pub path: PathBuf,
    /// Size in bytes (recursive for directories).
    pub size: u64,
    /// Hex-encoded SHA-256 of the file or directory tree.
    pub checksum: String,
}

impl PackagedEntry {
    /// Size in mebibytes with one decimal, e.g. `"12.3 MB"`.
    pub fn display_size(&self) -> String {
        format_size(self.size)
    }
}

/// Result of [`package_distribution`].
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    /// The distribution folder.
    pub directory: PathBuf,
    /// Artifact path inside the distribution folder.
    pub artifact: PathBuf,
    /// Entries sorted by name.
    pub entries: Vec<PackagedEntry>,
    /// When packaging finished.
    pub created_at: DateTime<Utc>,
}

/// Formats a byte count as mebibytes with one decimal.
pub fn format_size(bytes: u64) -> String {
    format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
}

/// Checks that the artifact exists with the shape the freeze produces.
fn locate_artifact(settings: &Settings) -> Result<PathBuf> {
    let artifact = settings.artifact_path();
    let found = match settings.artifact_kind() {
        ArtifactKind::File => artifact.is_file(),
        ArtifactKind::Bundle | ArtifactKind::Folder => artifact.is_dir(),
    };

    if !found {
        return Err(Error::ArtifactNotFound {
            path: artifact,
            target: settings.target().to_string(),
        });
    }
    log::debug!("Located artifact {}", artifact.display());
    Ok(artifact)
}

async fn copy_artifact(artifact: &Path, dest_dir: &Path, kind: ArtifactKind) -> Result<PathBuf> {
    let name = artifact
        .file_name()
        .context("artifact path has no file name")?;
    let dest = dest_dir.join(name);

    match kind {
        ArtifactKind::Bundle => fs::copy_dir(artifact, &dest)
            .await
            .context("copying application bundle")?,
        ArtifactKind::Folder => fs::copy_dir(artifact, &dest)
            .await
            .context("copying application folder")?,
        ArtifactKind::File => fs::copy_file(artifact, &dest)
            .await
            .context("copying executable")?,
    }
    Ok(dest)
}

async fn collect_entries(dir: &Path) -> Result<Vec<PackagedEntry>> {
    let mut read_dir = tokio::fs::read_dir(dir)
        .await
        .fs_context("listing distribution directory", dir)?;

    let mut entries = Vec::new();
    while let Some(entry) = read_dir
        .next_entry()
        .await
        .fs_context("listing distribution directory", dir)?
    {
        let path = entry.path();
        entries.push(PackagedEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: fs::disk_usage(&path).await?,
            checksum: calculate_sha256(&path).await?,
            path,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Assembles the distribution folder.
///
/// The artifact is located first; when it is missing the existing
/// distribution folder is left alone and [`Error::ArtifactNotFound`] is
/// returned. Otherwise the folder is deleted and recreated, the artifact and
/// every accessory that exists are copied in, and each entry is reported.
pub async fn package_distribution(settings: &Settings) -> Result<DistributionReport> {
    let artifact = locate_artifact(settings)?;

    let directory = settings.package_directory();
    fs::create_dir_all(&directory, true).await?;

    let copied = copy_artifact(&artifact, &directory, settings.artifact_kind()).await?;

    for accessory in distributed_accessories() {
        let source = settings.base_dir().join(accessory.file_name);
        if !fs::exists(&source).await {
            log::warn!("Skipping missing accessory {}", source.display());
            continue;
        }
        fs::copy_file(&source, &directory.join(accessory.file_name)).await?;
    }

    let entries = collect_entries(&directory).await?;
    log::info!(
        "✓ Packaged {} entries into {}",
        entries.len(),
        directory.display()
    );

    Ok(DistributionReport {
        directory,
        artifact: copied,
        entries,
        created_at: Utc::now(),
    })
}
