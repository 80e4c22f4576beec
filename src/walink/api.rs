//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI client. It also plays the part of the form's state
//! holder: it owns the [`FormState`] restored at construction and the copied
//! indicator, and routes every event (typing, paste, button press) to the
//! matching command.
//!
//! ## Generic Over Store and Platform
//!
//! `WalinkApi<S: KeyValueStore, P: Platform>`:
//! - Production: `WalinkApi<FileStore, SystemPlatform>`
//! - Testing: `WalinkApi<InMemoryStore, MockPlatform>`
//!
//! API tests check dispatch and state handling; the behavior of each command
//! is tested in its own module.

use crate::commands;
use crate::config::WalinkConfig;
use crate::error::Result;
use crate::model::{CopiedIndicator, Field, FormState};
use crate::platform::Platform;
use crate::store::KeyValueStore;
use crate::sync;
use chrono::Utc;
use tracing::debug;

pub struct WalinkApi<S: KeyValueStore, P: Platform> {
    store: S,
    platform: P,
    config: WalinkConfig,
    paths: WalinkPaths,
    state: FormState,
    copied: CopiedIndicator,
}

impl<S: KeyValueStore, P: Platform> WalinkApi<S, P> {
    /// Builds the API and restores the last-used form values from `store`.
    pub fn new(store: S, platform: P, config: WalinkConfig, paths: WalinkPaths) -> Self {
        let state = sync::load_with_default(&store, &config.default_country);
        debug!(?state, "restored form state");
        Self {
            store,
            platform,
            config,
            paths,
            state,
            copied: CopiedIndicator::default(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn config(&self) -> &WalinkConfig {
        &self.config
    }

    pub fn paths(&self) -> &WalinkPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_visible()
    }

    pub fn show(&self) -> CmdResult {
        commands::show::run(&self.state, &self.config)
    }

    pub fn set_phone(&mut self, value: &str) -> Result<CmdResult> {
        self.set_field(Field::Phone, value)
    }

    pub fn set_message(&mut self, value: &str) -> Result<CmdResult> {
        self.set_field(Field::Message, value)
    }

    pub fn set_country(&mut self, selector: &str) -> Result<CmdResult> {
        self.set_field(Field::Country, selector)
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<CmdResult> {
        commands::edit::set_field(&mut self.store, &mut self.state, &self.config, field, value)
    }

    pub fn paste_phone(&mut self, text: &str) -> CmdResult {
        commands::edit::paste(&mut self.store, &mut self.state, &self.config, text)
    }

    /// Smart paste from the platform clipboard. An unreadable clipboard is
    /// treated as an empty paste.
    pub fn paste_from_clipboard(&mut self) -> CmdResult {
        let text = match self.platform.clipboard().read_text() {
            Ok(text) => text,
            Err(e) => {
                debug!(error = %e, "clipboard read failed");
                String::new()
            }
        };
        self.paste_phone(&text)
    }

    pub fn clear(&mut self) -> CmdResult {
        commands::edit::clear(&mut self.store, &mut self.state, &self.config)
    }

    pub fn open(&mut self) -> CmdResult {
        commands::actions::open(&mut self.platform, &self.state, &self.config)
    }

    pub fn copy(&mut self) -> CmdResult {
        commands::actions::copy(
            &mut self.platform,
            &self.state,
            &self.config,
            &mut self.copied,
            Utc::now(),
        )
    }

    pub fn share(&mut self) -> CmdResult {
        commands::actions::share(
            &mut self.platform,
            &self.state,
            &self.config,
            &mut self.copied,
            Utc::now(),
        )
    }

    pub fn countries(&self, term: Option<&str>) -> CmdResult {
        commands::countries::run(term, &self.state.dial_code)
    }

    pub fn configure(&mut self, action: ConfigAction) -> Result<CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{ActionOutcome, CmdMessage, CmdResult, CountryRow, MessageLevel, WalinkPaths};
