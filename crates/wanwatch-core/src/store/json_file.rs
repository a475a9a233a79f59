//! Whole-document JSON persistence.
//!
//! Files are replaced atomically: the document goes to `<name>.tmp` first and
//! is renamed over the target, so a crash never leaves a half-written store.

use serde::{de::DeserializeOwned, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

use wanwatch_types::StoreError;

/// Read and parse `path`. `Ok(None)` when the file does not exist.
pub async fn load<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::read(path, &e)),
    };
    serde_json::from_str(&content).map(Some).map_err(|e| StoreError::parse(path, &e))
}

/// Like [`load`], but any failure falls back to `T::default()` with a warning.
pub async fn load_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load(path).await {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!("[Store] {}; starting from defaults", e);
            T::default()
        },
    }
}

pub async fn save_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(value).map_err(|e| StoreError::write(path, e))?;
    let temp_path = temp_path_for(path);

    if let Err(e) = replace_with(&temp_path, path, content.as_bytes()).await {
        if let Err(cleanup) = tokio::fs::remove_file(&temp_path).await {
            if cleanup.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!("[Store] Could not remove {}: {}", temp_path.display(), cleanup);
            }
        }
        return Err(StoreError::write(path, e));
    }
    Ok(())
}

async fn replace_with(temp_path: &Path, path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(temp_path).await?;
    file.write_all(content).await?;
    file.sync_all().await?;
    drop(file);
    tokio::fs::rename(temp_path, path).await
}

/// Create `path` holding `default` if it does not exist yet.
///
/// Returns `true` when the file was created.
pub async fn ensure_exists<T: Serialize>(path: &Path, default: &T) -> Result<bool, StoreError> {
    if tokio::fs::try_exists(path).await.map_err(|e| StoreError::read(path, &e))? {
        return Ok(false);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| StoreError::write(path, e))?;
    }
    save_atomic(path, default).await?;
    Ok(true)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    path.with_file_name(format!("{}.tmp", name))
}
