//! Artifact checksum calculation.
//!
//! This module provides SHA256 checksum calculation for packaged entries,
//! supporting both single files and directory trees (e.g., macOS .app bundles).

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Calculates SHA256 checksum of a file or directory.
///
/// Directories hash every file's relative path and content in sorted order,
/// so the same tree always yields the same digest.
pub async fn calculate_sha256(path: &Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading metadata for hashing", path)?;

    if metadata.is_file() {
        let mut hasher = Sha256::new();
        hash_file_into(&mut hasher, path).await?;
        Ok(format!("{:x}", hasher.finalize()))
    } else if metadata.is_dir() {
        calculate_directory_sha256(path).await
    } else {
        bail!("Path is neither file nor directory: {}", path.display())
    }
}

async fn hash_file_into(hasher: &mut Sha256, file_path: &Path) -> Result<()> {
    let mut file = tokio::fs::File::open(file_path)
        .await
        .fs_context("opening file for hashing", file_path)?;
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for hash calculation", file_path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(())
}

async fn calculate_directory_sha256(dir_path: &Path) -> Result<String> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(dir_path).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    files.sort();

    let mut hasher = Sha256::new();
    for file in files {
        let rel_path = file.strip_prefix(dir_path)?;
        hasher.update(rel_path.to_string_lossy().as_bytes());
        hash_file_into(&mut hasher, &file).await?;
    }

    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn file_digest_matches_known_value() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("abc.txt");
        std::fs::write(&path, "abc").unwrap();

        assert_eq!(
            calculate_sha256(&path).await.unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn directory_digest_depends_on_layout() {
        let tmp = tempfile::tempdir().unwrap();
        let a = tmp.path().join("a");
        let b = tmp.path().join("b");
        std::fs::create_dir_all(a.join("x")).unwrap();
        std::fs::create_dir_all(b.join("y")).unwrap();
        std::fs::write(a.join("x/f"), "same").unwrap();
        std::fs::write(b.join("y/f"), "same").unwrap();

        assert_ne!(
            calculate_sha256(&a).await.unwrap(),
            calculate_sha256(&b).await.unwrap()
        );
    }

    #[tokio::test]
    async fn directory_walk_errors_are_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let gone = tmp.path().join("Generatore3D.app");

        assert!(calculate_directory_sha256(&gone).await.is_err());
    }
}
