use crate::commands::{CmdMessage, CmdResult, WalinkPaths};
use crate::config::{WalinkConfig, CONFIG_KEYS};
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &WalinkPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = paths.config_dir();
    match action {
        ConfigAction::ShowAll => {
            let config = WalinkConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = WalinkConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => result.add_message(CmdMessage::error(format!(
                    "Unknown config key: {} (known: {})",
                    key,
                    CONFIG_KEYS.join(", ")
                ))),
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = WalinkConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e.to_string()));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;

    fn paths() -> (tempfile::TempDir, WalinkPaths) {
        let temp = tempfile::tempdir().unwrap();
        let paths = WalinkPaths::new(temp.path().to_path_buf());
        (temp, paths)
    }

    #[test]
    fn show_all_returns_defaults() {
        let (_temp, paths) = paths();
        let result = run(&paths, ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(WalinkConfig::default()));
    }

    #[test]
    fn set_persists_normalized_value() {
        let (_temp, paths) = paths();
        let result = run(
            &paths,
            ConfigAction::Set("default-country".into(), "sg".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "default-country set to 65");

        let shown = run(&paths, ConfigAction::ShowKey("default-country".into())).unwrap();
        assert_eq!(shown.messages[0].content, "65");
    }

    #[test]
    fn invalid_value_reports_error_message() {
        let (_temp, paths) = paths();
        let result = run(&paths, ConfigAction::Set("message".into(), "perhaps".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.config.is_none());
    }

    #[test]
    fn unknown_key_lists_known_keys() {
        let (_temp, paths) = paths();
        let result = run(&paths, ConfigAction::ShowKey("colour".into())).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("share-title"));
    }
}
