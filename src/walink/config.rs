use crate::countries::{self, DEFAULT_DIAL_CODE};
use crate::error::{Result, WalinkError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SHARE_TITLE: &str = "WhatsApp Helper";

/// Keys accepted by [`WalinkConfig::get`] and [`WalinkConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["default-country", "message", "share-title"];

/// Settings, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalinkConfig {
    /// Dial code used when no country has been persisted yet
    #[serde(default = "default_dial_code")]
    pub default_country: String,

    /// Whether the message field is part of the form. When off, links carry
    /// only the number and the message is never stored.
    #[serde(default = "default_message_enabled")]
    pub message_enabled: bool,

    /// Title handed to the share sheet
    #[serde(default = "default_share_title")]
    pub share_title: String,
}

fn default_dial_code() -> String {
    DEFAULT_DIAL_CODE.to_string()
}

fn default_message_enabled() -> bool {
    true
}

fn default_share_title() -> String {
    DEFAULT_SHARE_TITLE.to_string()
}

impl Default for WalinkConfig {
    fn default() -> Self {
        Self {
            default_country: default_dial_code(),
            message_enabled: default_message_enabled(),
            share_title: default_share_title(),
        }
    }
}

impl WalinkConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WalinkError::Io)?;
        let config: WalinkConfig =
            serde_json::from_str(&content).map_err(WalinkError::Serialization)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(WalinkError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(WalinkError::Serialization)?;
        fs::write(config_path, content).map_err(WalinkError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-country" => Some(self.default_country.clone()),
            "message" => Some(self.message_enabled.to_string()),
            "share-title" => Some(self.share_title.clone()),
            _ => None,
        }
    }

    /// Set a key from its string form. Countries may be given as ISO or dial
    /// code and are stored as the dial code.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-country" => {
                let country = countries::resolve(value)?;
                self.default_country = country.dial_code.to_string();
            }
            "message" => {
                self.message_enabled = parse_bool(value).ok_or_else(|| {
                    WalinkError::Config(format!("Expected true or false, got: {}", value))
                })?;
            }
            "share-title" => {
                let title = value.trim();
                if title.is_empty() {
                    return Err(WalinkError::Config("share-title cannot be empty".into()));
                }
                self.share_title = title.to_string();
            }
            other => {
                return Err(WalinkError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WalinkConfig::default();
        assert_eq!(config.default_country, "62");
        assert!(config.message_enabled);
        assert_eq!(config.share_title, "WhatsApp Helper");
    }

    #[test]
    fn test_load_missing_config() {
        let temp = tempfile::tempdir().unwrap();
        let config = WalinkConfig::load(temp.path().join("missing")).unwrap();
        assert_eq!(config, WalinkConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = tempfile::tempdir().unwrap();
        let dir = temp.path().join("walink");

        let mut config = WalinkConfig::default();
        config.set("default-country", "GB").unwrap();
        config.set("message", "off").unwrap();
        config.save(&dir).unwrap();

        let loaded = WalinkConfig::load(&dir).unwrap();
        assert_eq!(loaded.default_country, "44");
        assert!(!loaded.message_enabled);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"message_enabled": false}"#,
        )
        .unwrap();
        let loaded = WalinkConfig::load(temp.path()).unwrap();
        assert!(!loaded.message_enabled);
        assert_eq!(loaded.default_country, "62");
        assert_eq!(loaded.share_title, "WhatsApp Helper");
    }

    #[test]
    fn test_get_known_and_unknown_keys() {
        let config = WalinkConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "{}", key);
        }
        assert_eq!(config.get("message").as_deref(), Some("true"));
        assert_eq!(config.get("nope"), None);
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = WalinkConfig::default();
        assert!(matches!(
            config.set("default-country", "ZZ"),
            Err(WalinkError::UnknownCountry(_))
        ));
        assert!(matches!(
            config.set("message", "maybe"),
            Err(WalinkError::Config(_))
        ));
        assert!(matches!(
            config.set("share-title", "   "),
            Err(WalinkError::Config(_))
        ));
        assert!(matches!(config.set("color", "red"), Err(WalinkError::Config(_))));
        assert_eq!(config, WalinkConfig::default());
    }
}
