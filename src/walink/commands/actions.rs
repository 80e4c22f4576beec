//! Open, copy and share.
//!
//! All three are disabled while the number is invalid and never call into the
//! platform in that case. Copy and share failures are swallowed: the copied
//! indicator simply does not come up, and a dismissed share sheet is a normal
//! outcome.

use crate::commands::{ActionOutcome, CmdMessage, CmdResult};
use crate::config::WalinkConfig;
use crate::model::{CopiedIndicator, FormState};
use crate::platform::{Platform, SharePayload};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

pub fn open<P: Platform>(platform: &mut P, state: &FormState, config: &WalinkConfig) -> CmdResult {
    let result = CmdResult::default().with_form(state, config);
    let Some(url) = actionable_link(state, config) else {
        return disabled(result);
    };

    match platform.opener().open(&url) {
        Ok(()) => {
            debug!(%url, "opened link");
            let mut result = result.with_outcome(ActionOutcome::Opened);
            result.add_message(CmdMessage::success("Opening WhatsApp..."));
            result
        }
        Err(e) => {
            warn!(error = %e, "could not open link");
            let mut result = result.with_outcome(ActionOutcome::Failed);
            result.add_message(CmdMessage::warning(format!(
                "Could not open a browser, open the link manually: {}",
                url
            )));
            result
        }
    }
}

pub fn copy<P: Platform>(
    platform: &mut P,
    state: &FormState,
    config: &WalinkConfig,
    indicator: &mut CopiedIndicator,
    now: DateTime<Utc>,
) -> CmdResult {
    let result = CmdResult::default().with_form(state, config);
    let Some(url) = actionable_link(state, config) else {
        return disabled(result);
    };

    write_link(platform, &url, indicator, now, result)
}

/// Shares through the native share sheet, or copies when there is none.
pub fn share<P: Platform>(
    platform: &mut P,
    state: &FormState,
    config: &WalinkConfig,
    indicator: &mut CopiedIndicator,
    now: DateTime<Utc>,
) -> CmdResult {
    let result = CmdResult::default().with_form(state, config);
    let Some(url) = actionable_link(state, config) else {
        return disabled(result);
    };

    let text = (config.message_enabled && !state.message.is_empty())
        .then(|| state.message.clone());
    let payload = SharePayload {
        title: config.share_title.clone(),
        text,
        url: url.clone(),
    };

    let shared = platform.share_sheet().map(|sheet| sheet.share(&payload));
    match shared {
        Some(Ok(())) => {
            debug!(%url, "shared link");
            let mut result = result.with_outcome(ActionOutcome::Shared);
            result.add_message(CmdMessage::success("Link shared"));
            result
        }
        Some(Err(e)) => {
            debug!(error = %e, "share dismissed");
            result.with_outcome(ActionOutcome::Dismissed)
        }
        None => {
            debug!("no share sheet, copying instead");
            write_link(platform, &url, indicator, now, result)
        }
    }
}

fn write_link<P: Platform>(
    platform: &mut P,
    url: &str,
    indicator: &mut CopiedIndicator,
    now: DateTime<Utc>,
    result: CmdResult,
) -> CmdResult {
    match platform.clipboard().write_text(url) {
        Ok(()) => {
            indicator.set(now);
            debug!(%url, "copied link");
            let mut result = result.with_outcome(ActionOutcome::Copied);
            result.copied = indicator.is_visible_at(now);
            result.add_message(CmdMessage::success("Copied!"));
            result
        }
        Err(e) => {
            debug!(error = %e, "clipboard write failed");
            result.with_outcome(ActionOutcome::Failed)
        }
    }
}

fn actionable_link(state: &FormState, config: &WalinkConfig) -> Option<String> {
    let preview = state.preview(config.message_enabled);
    preview.is_actionable().then_some(preview.url)
}

fn disabled(result: CmdResult) -> CmdResult {
    let mut result = result.with_outcome(ActionOutcome::Disabled);
    result.add_message(CmdMessage::info(
        "Enter a valid phone number to generate link",
    ));
    result
}
