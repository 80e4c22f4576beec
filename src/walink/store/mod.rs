//! # Storage Layer
//!
//! The form remembers its last-used values in a plain string-to-string
//! key-value store. The [`KeyValueStore`] trait is the only contract the core
//! relies on, so the same sync logic runs against a JSON file on disk, an
//! in-memory map in tests, or a browser's local storage.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - A single flat JSON object in `state.json`
//!   - Rewritten whole on every `set`
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── state.json     # {"wa-helper:last-phone": "...", ...}
//! └── config.json    # Settings, see config.rs
//! ```
//!
//! Values carry no schema version. Unknown keys are kept untouched.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// String key-value storage.
pub trait KeyValueStore {
    /// Read a key, `None` when it was never written
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a key, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
