//! Environment/runtime helpers
//!
//! Filesystem sanity checks run before a data file is written.

use std::path::Path;
use tracing::debug;

/// Ensure the directory that will hold `file` exists.
///
/// A bare file name (no parent component) is relative to the working
/// directory and needs nothing created.
pub async fn ensure_parent_dir(file: &Path) -> std::io::Result<()> {
    match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            if tokio::fs::metadata(parent).await.is_err() {
                debug!(dir = %parent.display(), "creating data directory");
            }
            tokio::fs::create_dir_all(parent).await
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_parent() -> Result<(), anyhow::Error> {
        let root = std::env::temp_dir().join(format!("common_env_{}", uuid::Uuid::new_v4()));
        let file = root.join("nested").join("store.json");

        ensure_parent_dir(&file).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());

        // second call is a no-op
        ensure_parent_dir(&file).await?;

        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_dir() -> Result<(), anyhow::Error> {
        ensure_parent_dir(Path::new("store.json")).await?;
        Ok(())
    }
}
