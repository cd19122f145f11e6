//! JSON blob persistence for the application state.
//!
//! The whole [`AppState`] is read and written wholesale as a single
//! `state.json` document. There is exactly one writer and no concurrent
//! readers; every mutation is followed by a blocking write-through save.
//! An unreadable or corrupt store is treated as "no store" and replaced by
//! defaults; a failed save is logged and the in-memory state stands.

use std::path::{Path, PathBuf};

use log::warn;

use crate::date::day_key;
use crate::error::StorageError;
use crate::model::AppState;

const STATE_FILE: &str = "state.json";

/// Returns `~/.config/habitflow[-dev]/` based on HABITFLOW_ENV.
///
/// Set HABITFLOW_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("HABITFLOW_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("habitflow-dev")
    } else {
        base_dir.join("habitflow")
    };

    std::fs::create_dir_all(&dir)
        .map_err(|err| StorageError::DataDir(format!("{}: {err}", dir.display())))?;
    Ok(dir)
}

/// File name for an exported backup document, dated with a day key.
pub fn export_file_name(date: chrono::NaiveDate) -> String {
    format!("habitflow-backup-{}.json", day_key(date))
}

/// Read/write access to the persisted state blob.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Open the store at the default data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StorageError> {
        Ok(Self {
            path: data_dir()?.join(STATE_FILE),
        })
    }

    /// Open a store at an explicit path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw blob. `Ok(None)` on a normal first run (no file yet).
    fn read_raw(&self) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Load the state, falling back to defaults.
    ///
    /// A missing file is a normal first run; an unreadable or corrupt file
    /// is logged and treated the same way. Never propagates.
    pub fn load(&self) -> AppState {
        let raw = match self.read_raw() {
            Ok(Some(raw)) => raw,
            Ok(None) => return AppState::default(),
            Err(err) => {
                warn!("{err}; starting from defaults");
                return AppState::default();
            }
        };

        match AppState::from_json(&raw) {
            Ok(state) => state,
            Err(err) => {
                warn!(
                    "corrupt state at {}: {err}; starting from defaults",
                    self.path.display()
                );
                AppState::default()
            }
        }
    }

    /// Persist the state wholesale.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails. Callers log
    /// and continue; the in-memory state is the source of truth.
    pub fn save(&self, state: &AppState) -> Result<(), StorageError> {
        let raw = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, raw).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::with_path(dir.path().join(STATE_FILE));
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn unreadable_path_loads_defaults() {
        // The store path is a directory, so the read fails with an error
        // other than NotFound.
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::with_path(dir.path());
        assert!(matches!(
            store.read_raw(),
            Err(StorageError::ReadFailed { .. })
        ));
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn corrupt_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let store = StateStore::with_path(path);
        assert_eq!(store.load(), AppState::default());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::with_path(dir.path().join(STATE_FILE));

        let mut state = AppState::default();
        state.score = 120;
        state.settings.theme = Theme::Light;
        state.completions.set("h1", "2026-08-25", true);
        store.save(&state).unwrap();

        assert_eq!(store.load(), state);
    }

    #[test]
    fn partial_blob_loads_with_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATE_FILE);
        std::fs::write(&path, r#"{ "score": 40 }"#).unwrap();
        let state = StateStore::with_path(path).load();
        assert_eq!(state.score, 40);
        assert!(state.habits.is_empty());
        assert_eq!(state.settings.theme, Theme::Dark);
    }

    #[test]
    fn export_file_name_carries_day_key() {
        let date = chrono::NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(export_file_name(date), "habitflow-backup-2026-08-25.json");
    }
}
