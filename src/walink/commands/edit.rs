//! Field edits: typing, smart paste and clearing.
//!
//! Every change goes straight to the store through [`crate::sync`]. A failed
//! write is logged there and otherwise ignored, so edits always land in the
//! in-memory state.

use crate::commands::{CmdMessage, CmdResult};
use crate::config::WalinkConfig;
use crate::countries;
use crate::error::Result;
use crate::model::{Field, FormState};
use crate::phone::sanitize_str;
use crate::store::KeyValueStore;
use crate::sync::on_field_change;

/// Applies a typed value to one field.
///
/// Phone input is kept raw. Countries may be given as ISO code or dial code
/// and are stored as the dial code; an unknown country is an error and leaves
/// the state untouched.
pub fn set_field<S: KeyValueStore>(
    store: &mut S,
    state: &mut FormState,
    config: &WalinkConfig,
    field: Field,
    value: &str,
) -> Result<CmdResult> {
    let value = match field {
        Field::Country => countries::resolve(value)?.dial_code.to_string(),
        Field::Message if !config.message_enabled => {
            let mut result = CmdResult::default().with_form(state, config);
            result.add_message(CmdMessage::warning(
                "Message field is disabled (config: message = false)",
            ));
            return Ok(result);
        }
        _ => value.to_string(),
    };

    apply(store, state, field, value);
    Ok(CmdResult::default().with_form(state, config))
}

/// Smart paste into the phone field: the pasted text replaces the input in
/// sanitized form. Empty paste text changes nothing.
pub fn paste<S: KeyValueStore>(
    store: &mut S,
    state: &mut FormState,
    config: &WalinkConfig,
    text: &str,
) -> CmdResult {
    if text.is_empty() {
        let mut result = CmdResult::default().with_form(state, config);
        result.add_message(CmdMessage::info("Nothing to paste"));
        return result;
    }

    let cleaned = sanitize_str(text);
    apply(store, state, Field::Phone, cleaned);
    CmdResult::default().with_form(state, config)
}

/// Empties the phone and message fields. The country selection stays.
pub fn clear<S: KeyValueStore>(
    store: &mut S,
    state: &mut FormState,
    config: &WalinkConfig,
) -> CmdResult {
    apply(store, state, Field::Phone, String::new());
    if config.message_enabled {
        apply(store, state, Field::Message, String::new());
    }
    let mut result = CmdResult::default().with_form(state, config);
    result.add_message(CmdMessage::success("Form cleared"));
    result
}

fn apply<S: KeyValueStore>(store: &mut S, state: &mut FormState, field: Field, value: String) {
    on_field_change(store, field, &value);
    state.set_field(field, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WalinkError;
    use crate::store::memory::fixtures::UnavailableStore;
    use crate::store::memory::InMemoryStore;
    use crate::sync::{load_on_start, KEY_COUNTRY, KEY_MESSAGE, KEY_PHONE};

    #[test]
    fn typed_phone_is_stored_raw() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::default();
        let config = WalinkConfig::default();

        let result = set_field(&mut store, &mut state, &config, Field::Phone, "0812 3456").unwrap();

        assert_eq!(state.phone_input, "0812 3456");
        assert_eq!(store.get(KEY_PHONE).unwrap().as_deref(), Some("0812 3456"));
        assert_eq!(result.preview.unwrap().url, "https://wa.me/6208123456");
    }

    #[test]
    fn paste_sanitizes_before_storing() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::new("old", "", "62");
        let config = WalinkConfig::default();

        paste(&mut store, &mut state, &config, "+62 812-3456-7890");

        assert_eq!(state.phone_input, "6281234567890");
        assert_eq!(store.get(KEY_PHONE).unwrap().as_deref(), Some("6281234567890"));
    }

    #[test]
    fn empty_paste_changes_nothing() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::new("0812", "", "62");
        let config = WalinkConfig::default();

        let result = paste(&mut store, &mut state, &config, "");

        assert_eq!(state.phone_input, "0812");
        assert!(store.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn country_accepts_iso_code_and_stores_dial_code() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::default();
        let config = WalinkConfig::default();

        set_field(&mut store, &mut state, &config, Field::Country, "my").unwrap();

        assert_eq!(state.dial_code, "60");
        assert_eq!(store.get(KEY_COUNTRY).unwrap().as_deref(), Some("60"));
    }

    #[test]
    fn unknown_country_is_rejected_without_writing() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::default();
        let config = WalinkConfig::default();

        let err = set_field(&mut store, &mut state, &config, Field::Country, "Atlantis");

        assert!(matches!(err, Err(WalinkError::UnknownCountry(_))));
        assert_eq!(state.dial_code, "62");
        assert!(store.is_empty());
    }

    #[test]
    fn message_ignored_when_disabled() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::default();
        let config = WalinkConfig {
            message_enabled: false,
            ..WalinkConfig::default()
        };

        let result = set_field(&mut store, &mut state, &config, Field::Message, "hi").unwrap();

        assert_eq!(state.message, "");
        assert_eq!(store.get(KEY_MESSAGE).unwrap(), None);
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn edits_survive_a_fresh_load() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::default();
        let config = WalinkConfig::default();

        set_field(&mut store, &mut state, &config, Field::Phone, "081234567890").unwrap();
        set_field(&mut store, &mut state, &config, Field::Message, "Halo").unwrap();
        set_field(&mut store, &mut state, &config, Field::Country, "+65").unwrap();

        assert_eq!(load_on_start(&store), state);
    }

    #[test]
    fn clear_keeps_country() {
        let mut store = InMemoryStore::new();
        let mut state = FormState::new("081234567890", "Halo", "65");
        let config = WalinkConfig::default();

        clear(&mut store, &mut state, &config);

        assert_eq!(state, FormState::new("", "", "65"));
        assert_eq!(store.get(KEY_PHONE).unwrap().as_deref(), Some(""));
        assert_eq!(store.get(KEY_MESSAGE).unwrap().as_deref(), Some(""));
    }

    #[test]
    fn failing_store_does_not_block_edits() {
        let mut store = UnavailableStore::default();
        let mut state = FormState::default();
        let config = WalinkConfig::default();

        let result =
            set_field(&mut store, &mut state, &config, Field::Phone, "081234567890").unwrap();

        assert_eq!(state.phone_input, "081234567890");
        assert!(result.preview.unwrap().is_valid);
        assert_eq!(store.attempted_writes, 1);
    }
}
