//! Persistence sync between the form and a [`KeyValueStore`].
//!
//! The form is restored once at startup and written through on every field
//! change. Storage trouble never interrupts the user: failed reads fall back
//! to defaults and failed writes are logged and dropped.

use crate::countries::{find_by_dial_code, DEFAULT_DIAL_CODE};
use crate::model::{Field, FormState};
use crate::store::KeyValueStore;
use tracing::{debug, warn};

pub const KEY_PHONE: &str = "wa-helper:last-phone";
pub const KEY_MESSAGE: &str = "wa-helper:last-message";
pub const KEY_COUNTRY: &str = "wa-helper:last-country";

pub fn key_for(field: Field) -> &'static str {
    match field {
        Field::Phone => KEY_PHONE,
        Field::Message => KEY_MESSAGE,
        Field::Country => KEY_COUNTRY,
    }
}

/// Restores the last-used values, defaulting the dial code to `"62"`.
pub fn load_on_start<S: KeyValueStore>(store: &S) -> FormState {
    load_with_default(store, DEFAULT_DIAL_CODE)
}

/// Restores the last-used values. A missing, empty or unlisted dial code
/// falls back to `default_dial_code`.
pub fn load_with_default<S: KeyValueStore>(store: &S, default_dial_code: &str) -> FormState {
    let default_dial_code = if find_by_dial_code(default_dial_code).is_some() {
        default_dial_code
    } else {
        warn!(
            value = %default_dial_code,
            "configured default country is not in the list, using {}",
            DEFAULT_DIAL_CODE
        );
        DEFAULT_DIAL_CODE
    };

    let phone_input = read_or_empty(store, KEY_PHONE);
    let message = read_or_empty(store, KEY_MESSAGE);

    let stored_country = read_or_empty(store, KEY_COUNTRY);
    let dial_code = if stored_country.is_empty() {
        default_dial_code.to_string()
    } else if find_by_dial_code(&stored_country).is_none() {
        warn!(value = %stored_country, "stored dial code is not in the country list, using default");
        default_dial_code.to_string()
    } else {
        stored_country
    };

    FormState {
        phone_input,
        message,
        dial_code,
    }
}

fn read_or_empty<S: KeyValueStore>(store: &S, key: &str) -> String {
    match store.get(key) {
        Ok(value) => value.unwrap_or_default(),
        Err(e) => {
            warn!(key, error = %e, "could not read persisted value, using default");
            String::new()
        }
    }
}

/// Writes one field through to the store. Returns whether the write landed;
/// callers are free to ignore it.
pub fn on_field_change<S: KeyValueStore>(store: &mut S, field: Field, value: &str) -> bool {
    let key = key_for(field);
    match store.set(key, value) {
        Ok(()) => {
            debug!(%field, key, "persisted field");
            true
        }
        Err(e) => {
            warn!(%field, key, error = %e, "could not persist field");
            false
        }
    }
}
