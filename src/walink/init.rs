use crate::api::{WalinkApi, WalinkPaths};
use crate::config::WalinkConfig;
use crate::error::{Result, WalinkError};
use crate::platform::SystemPlatform;
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the per-user data directory.
pub const HOME_ENV: &str = "WALINK_HOME";

pub struct WalinkContext {
    pub api: WalinkApi<FileStore, SystemPlatform>,
}

/// Where `state.json` and `config.json` live: `$WALINK_HOME` when set and
/// non-empty, the platform data dir otherwise.
pub fn resolve_data_dir(home_override: Option<OsString>) -> Result<PathBuf> {
    if let Some(home) = home_override.filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }

    ProjectDirs::from("com", "walink", "walink")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| WalinkError::Store("Could not determine data dir".to_string()))
}

pub fn initialize() -> Result<WalinkContext> {
    let data_dir = resolve_data_dir(std::env::var_os(HOME_ENV))?;
    debug!(data_dir = %data_dir.display(), "using data dir");

    let config = match WalinkConfig::load(&data_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "could not read config, using defaults");
            WalinkConfig::default()
        }
    };

    let store = FileStore::new(data_dir.clone());
    let paths = WalinkPaths::new(data_dir);
    let api = WalinkApi::new(store, SystemPlatform::new(), config, paths);

    Ok(WalinkContext { api })
}
