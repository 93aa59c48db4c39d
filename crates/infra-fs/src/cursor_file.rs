// File-backed pagination cursor

use jobsift_core::domain::PaginationToken;
use jobsift_core::error::Result;
use jobsift_core::port::CursorStore;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// On-disk state: a single JSON object, read at loop start and overwritten
/// at the end of each page iteration
#[derive(Debug, Serialize, Deserialize)]
struct CursorState {
    next_page_token: Option<String>,
}

/// Persists the pagination resume token in a local JSON file
/// (`pagination_state.json` by default).
///
/// Read and written synchronously with no locking; concurrent invocations
/// race on the file and are not supported.
pub struct FileCursorStore {
    path: PathBuf,
}

impl FileCursorStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Remove the state file entirely (explicit query switch)
    pub fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

impl CursorStore for FileCursorStore {
    fn load(&self) -> Result<Option<PaginationToken>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        match serde_json::from_str::<CursorState>(&contents) {
            Ok(state) => Ok(state.next_page_token),
            Err(e) => {
                // Malformed state means restart from page one
                warn!(path = %self.path.display(), error = %e, "Malformed cursor state, treating as no token");
                Ok(None)
            }
        }
    }

    fn save(&self, token: Option<&str>) -> Result<()> {
        let state = CursorState {
            next_page_token: token.map(|t| t.to_string()),
        };
        fs::write(&self.path, serde_json::to_string(&state)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileCursorStore {
        let path = std::env::temp_dir().join(format!("jobsift_{}_{}.json", name, std::process::id()));
        let _ = fs::remove_file(&path);
        FileCursorStore::new(path)
    }

    #[test]
    fn test_missing_file_loads_none() {
        let store = temp_store("missing");
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("round_trip");

        store.save(Some("abc")).unwrap();
        assert_eq!(store.load().unwrap(), Some("abc".to_string()));

        store.save(None).unwrap();
        assert_eq!(store.load().unwrap(), None);

        store.clear().unwrap();
    }

    #[test]
    fn test_save_none_writes_null_token() {
        let store = temp_store("null_token");
        store.save(None).unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, r#"{"next_page_token":null}"#);

        store.clear().unwrap();
    }

    #[test]
    fn test_malformed_file_loads_none() {
        let store = temp_store("malformed");
        fs::write(store.path(), "not json at all {").unwrap();

        assert_eq!(store.load().unwrap(), None);

        store.clear().unwrap();
    }

    #[test]
    fn test_clear_removes_file() {
        let store = temp_store("clear");
        store.save(Some("tok")).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        assert_eq!(store.load().unwrap(), None);
    }
}
