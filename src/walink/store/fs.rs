use super::KeyValueStore;
use crate::error::{Result, WalinkError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const STATE_FILENAME: &str = "state.json";
const BACKUP_FILENAME: &str = "state.json.bak";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn state_path(&self) -> PathBuf {
        self.root.join(STATE_FILENAME)
    }

    pub fn backup_path(&self) -> PathBuf {
        self.root.join(BACKUP_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(WalinkError::Io)?;
        }
        Ok(())
    }

    fn load_entries(&self) -> Result<BTreeMap<String, String>> {
        let path = self.state_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path).map_err(WalinkError::Io)?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        let entries: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(WalinkError::Serialization)?;
        Ok(entries)
    }

    fn save_entries(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        self.ensure_dir()?;
        let content = serde_json::to_string_pretty(entries).map_err(WalinkError::Serialization)?;
        fs::write(self.state_path(), content).map_err(WalinkError::Io)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    /// An unparseable state file is moved aside to `state.json.bak` and
    /// replaced.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = match self.load_entries() {
            Ok(entries) => entries,
            Err(WalinkError::Serialization(e)) => {
                warn!(
                    error = %e,
                    path = %self.state_path().display(),
                    "state file is corrupt, starting over"
                );
                fs::rename(self.state_path(), self.backup_path()).map_err(WalinkError::Io)?;
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        entries.insert(key.to_string(), value.to_string());
        self.save_entries(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = tempfile::tempdir().unwrap();
        let store = FileStore::new(temp.path().join("nested"));
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn set_then_get_from_fresh_instance() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("wa-helper:last-phone", "0812 3456 7890").unwrap();

        let reopened = FileStore::new(temp.path().to_path_buf());
        assert_eq!(
            reopened.get("wa-helper:last-phone").unwrap().as_deref(),
            Some("0812 3456 7890")
        );
        assert_eq!(reopened.get("wa-helper:last-message").unwrap(), None);
    }

    #[test]
    fn creates_missing_directory_on_write() {
        let temp = tempfile::tempdir().unwrap();
        let root = temp.path().join("a").join("b");
        let mut store = FileStore::new(root.clone());
        store.set("k", "v").unwrap();
        assert!(root.join(STATE_FILENAME).exists());
    }

    #[test]
    fn keeps_unrelated_keys() {
        let temp = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());
        store.set("other", "1").unwrap();
        store.set("k", "v").unwrap();
        store.set("k", "w").unwrap();
        assert_eq!(store.get("other").unwrap().as_deref(), Some("1"));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("w"));
    }

    #[test]
    fn write_after_corrupt_file_recovers() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(STATE_FILENAME), "{not json").unwrap();
        let mut store = FileStore::new(temp.path().to_path_buf());

        store.set("wa-helper:last-phone", "081234567890").unwrap();

        let reopened = FileStore::new(temp.path().to_path_buf());
        assert_eq!(
            reopened.get("wa-helper:last-phone").unwrap().as_deref(),
            Some("081234567890")
        );
        assert_eq!(
            fs::read_to_string(reopened.backup_path()).unwrap(),
            "{not json"
        );
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(STATE_FILENAME), "{not json").unwrap();
        let store = FileStore::new(temp.path().to_path_buf());
        assert!(matches!(
            store.get("k"),
            Err(WalinkError::Serialization(_))
        ));
    }
}
