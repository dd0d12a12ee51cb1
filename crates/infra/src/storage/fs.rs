//! JSON document I/O
//!
//! Shared read/write helpers for every file-backed store. Writes go
//! through a temp-file-then-rename so a crash mid-write never leaves a
//! half-serialized document; reads degrade to the default value on missing
//! or corrupt files instead of failing startup.

use std::path::Path;

use hourglass_domain::{HourglassError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

/// Read a JSON document, returning `T::default()` when the file is absent
/// or unparseable. Corrupt state is discarded, not fatal.
pub async fn read_json_or_default<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
        Err(err) => {
            return Err(HourglassError::Storage(format!(
                "failed to read {}: {err}",
                path.display()
            )))
        }
    };

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(value),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "corrupt JSON document; using defaults");
            Ok(T::default())
        }
    }
}

/// Write a JSON document atomically: serialize, write to a sibling temp
/// file, then rename over the target.
pub async fn write_json_atomic<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize,
{
    let bytes = serde_json::to_vec_pretty(value)
        .map_err(|err| HourglassError::Serialization(err.to_string()))?;

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(|err| {
            HourglassError::Storage(format!("failed to create {}: {err}", parent.display()))
        })?;
    }

    let tmp = path.with_extension("json.tmp");
    tokio::fs::write(&tmp, &bytes).await.map_err(|err| {
        HourglassError::Storage(format!("failed to write {}: {err}", tmp.display()))
    })?;
    tokio::fs::rename(&tmp, path).await.map_err(|err| {
        HourglassError::Storage(format!("failed to replace {}: {err}", path.display()))
    })?;
    Ok(())
}
