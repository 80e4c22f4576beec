use crate::config::WalinkConfig;
use crate::countries::Country;
use crate::model::{ActionAvailability, FormState, LinkPreview};
use std::path::{Path, PathBuf};

pub mod actions;
pub mod config;
pub mod countries;
pub mod edit;
pub mod show;

#[derive(Debug, Clone)]
pub struct WalinkPaths {
    pub data_dir: PathBuf,
}

impl WalinkPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn config_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What an action did. Swallowed failures still show up here so callers
/// can tell them apart from success, they just are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The number is invalid; nothing was attempted
    Disabled,
    Opened,
    Copied,
    Shared,
    /// Share sheet was cancelled or failed
    Dismissed,
    /// A best-effort capability call failed
    Failed,
}

/// A country list entry, flagged when it is the current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub country: &'static Country,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub state: Option<FormState>,
    pub preview: Option<LinkPreview>,
    pub actions: Option<ActionAvailability>,
    pub outcome: Option<ActionOutcome>,
    /// Whether the "copied" indicator is up
    pub copied: bool,
    pub countries: Vec<CountryRow>,
    pub config: Option<WalinkConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Attaches the state and everything derived from it.
    pub fn with_form(mut self, state: &FormState, config: &WalinkConfig) -> Self {
        self.preview = Some(state.preview(config.message_enabled));
        self.actions = Some(state.actions());
        self.state = Some(state.clone());
        self
    }

    pub fn with_outcome(mut self, outcome: ActionOutcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    pub fn with_countries(mut self, countries: Vec<CountryRow>) -> Self {
        self.countries = countries;
        self
    }

    pub fn with_config(mut self, config: WalinkConfig) -> Self {
        self.config = Some(config);
        self
    }
}
