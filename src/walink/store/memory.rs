use super::KeyValueStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    entries: HashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::WalinkError;
    use crate::sync::{KEY_COUNTRY, KEY_MESSAGE, KEY_PHONE};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_phone(mut self, phone: &str) -> Self {
            self.store.set(KEY_PHONE, phone).unwrap();
            self
        }

        pub fn with_message(mut self, message: &str) -> Self {
            self.store.set(KEY_MESSAGE, message).unwrap();
            self
        }

        pub fn with_country(mut self, dial_code: &str) -> Self {
            self.store.set(KEY_COUNTRY, dial_code).unwrap();
            self
        }
    }

    /// A store whose every call fails, standing in for unavailable storage.
    #[derive(Debug, Default)]
    pub struct UnavailableStore {
        pub attempted_writes: usize,
    }

    impl KeyValueStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(WalinkError::Store("storage unavailable".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            self.attempted_writes += 1;
            Err(WalinkError::Store("storage unavailable".to_string()))
        }
    }
}
