// rx-decoder Store Helpers
// JSON-file persistence shared by the history and analytics stores

use crate::types::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Resolve (and create) the per-user data directory for the stores
pub fn default_data_dir() -> Result<PathBuf, StoreError> {
    let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
    let dir = base.join("rx-decoder");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Milliseconds since the Unix epoch; 0 if the clock is before it
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Read a JSON file, treating a missing or unreadable file as the
/// default value — the stores never fail a read
pub(crate) fn read_json<T: DeserializeOwned + Default>(path: &Path) -> T {
    let Ok(contents) = fs::read_to_string(path) else {
        return T::default();
    };
    match serde_json::from_str(&contents) {
        Ok(value) => value,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "ignoring unreadable store file");
            T::default()
        }
    }
}

/// Write a value as pretty JSON
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(value)?;
    fs::write(path, contents)?;
    Ok(())
}

/// Delete a store file if it exists
pub(crate) fn remove_if_exists(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        fs::remove_file(path)?;
    }
    Ok(())
}
