// Pagination Cursor Port (Interface)

use crate::domain::PaginationToken;
use crate::error::Result;

/// Durable storage for the single pagination resume point.
///
/// At most one token is persisted at a time; it reflects the crawl's resume
/// point at the moment `save` was last called. The cursor is scoped to one
/// query configuration: switching queries without clearing it resumes the
/// old crawl.
pub trait CursorStore: Send + Sync {
    /// Read the last persisted token. Returns None when no state exists or
    /// the stored state is malformed (crawl restarts from page one).
    fn load(&self) -> Result<Option<PaginationToken>>;

    /// Overwrite the persisted state with `token`. None clears it,
    /// signaling end-of-crawl.
    fn save(&self, token: Option<&str>) -> Result<()>;
}

// ============================================================================
// Mock Implementations for Testing
// ============================================================================

pub mod mocks {
    use super::*;
    use std::sync::Mutex;

    /// In-memory cursor that records its save history
    #[derive(Default)]
    pub struct InMemoryCursorStore {
        token: Mutex<Option<String>>,
        saves: Mutex<Vec<Option<String>>>,
    }

    impl InMemoryCursorStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Cursor pre-seeded with a token, as if a prior run saved it
        pub fn with_token(token: impl Into<String>) -> Self {
            Self {
                token: Mutex::new(Some(token.into())),
                saves: Mutex::new(Vec::new()),
            }
        }

        /// Every token passed to save(), in call order
        pub fn save_history(&self) -> Vec<Option<String>> {
            self.saves.lock().unwrap().clone()
        }
    }

    impl CursorStore for InMemoryCursorStore {
        fn load(&self) -> Result<Option<PaginationToken>> {
            Ok(self.token.lock().unwrap().clone())
        }

        fn save(&self, token: Option<&str>) -> Result<()> {
            let token = token.map(|t| t.to_string());
            self.saves.lock().unwrap().push(token.clone());
            *self.token.lock().unwrap() = token;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mocks::InMemoryCursorStore;
    use super::*;

    #[test]
    fn test_round_trip() {
        let cursor = InMemoryCursorStore::new();
        assert_eq!(cursor.load().unwrap(), None);

        cursor.save(Some("abc")).unwrap();
        assert_eq!(cursor.load().unwrap(), Some("abc".to_string()));

        cursor.save(None).unwrap();
        assert_eq!(cursor.load().unwrap(), None);
    }
}
