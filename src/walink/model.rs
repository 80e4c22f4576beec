use crate::countries::DEFAULT_DIAL_CODE;
use crate::link::{build_link, display_url};
use crate::phone::{is_valid, sanitize_str};
use chrono::{DateTime, Duration, Utc};

/// How long the "copied" indicator stays up after a successful copy.
pub const COPIED_INDICATOR_SECS: i64 = 2;

/// The editable fields of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Phone,
    Message,
    Country,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Phone => write!(f, "phone"),
            Field::Message => write!(f, "message"),
            Field::Country => write!(f, "country"),
        }
    }
}

/// Everything the user can edit. All other values are derived from it on
/// demand, so there is nothing to keep in sync besides these three strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    /// Raw phone input, as typed
    pub phone_input: String,
    pub message: String,
    /// Selected dial code, digits only
    pub dial_code: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            phone_input: String::new(),
            message: String::new(),
            dial_code: DEFAULT_DIAL_CODE.to_string(),
        }
    }
}

impl FormState {
    pub fn new(
        phone_input: impl Into<String>,
        message: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Self {
        Self {
            phone_input: phone_input.into(),
            message: message.into(),
            dial_code: dial_code.into(),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Phone => &self.phone_input,
            Field::Message => &self.message,
            Field::Country => &self.dial_code,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Phone => self.phone_input = value,
            Field::Message => self.message = value,
            Field::Country => self.dial_code = value,
        }
    }

    pub fn sanitized_digits(&self) -> String {
        sanitize_str(&self.phone_input)
    }

    pub fn is_valid(&self) -> bool {
        is_valid(&self.sanitized_digits())
    }

    /// The current link. `message_enabled` selects between the
    /// message-bearing form and the number-only one.
    pub fn link(&self, message_enabled: bool) -> String {
        let message = message_enabled.then_some(self.message.as_str());
        build_link(&self.dial_code, &self.sanitized_digits(), message)
    }

    pub fn preview(&self, message_enabled: bool) -> LinkPreview {
        let url = self.link(message_enabled);
        LinkPreview {
            display_url: display_url(&url).to_string(),
            is_valid: self.is_valid(),
            url,
        }
    }

    pub fn actions(&self) -> ActionAvailability {
        ActionAvailability::from_validity(self.is_valid())
    }
}

/// Snapshot of the derived link for rendering.
///
/// `url` may be non-empty while `is_valid` is false; such a link is a preview
/// and must not be acted on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkPreview {
    pub url: String,
    pub display_url: String,
    pub is_valid: bool,
}

impl LinkPreview {
    pub fn is_actionable(&self) -> bool {
        self.is_valid && !self.url.is_empty()
    }
}

/// Which action buttons are enabled. All three follow the validity flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionAvailability {
    pub open: bool,
    pub copy: bool,
    pub share: bool,
}

impl ActionAvailability {
    pub fn from_validity(valid: bool) -> Self {
        Self {
            open: valid,
            copy: valid,
            share: valid,
        }
    }
}

/// Transient "copied" marker. Set on a successful copy, reads as hidden once
/// the window has passed. Nothing needs to clear it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopiedIndicator {
    set_at: Option<DateTime<Utc>>,
}

impl CopiedIndicator {
    pub fn set(&mut self, now: DateTime<Utc>) {
        self.set_at = Some(now);
    }

    pub fn is_visible_at(&self, now: DateTime<Utc>) -> bool {
        match self.set_at {
            Some(at) => {
                let elapsed = now.signed_duration_since(at);
                elapsed >= Duration::zero() && elapsed < Duration::seconds(COPIED_INDICATOR_SECS)
            }
            None => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_uses_default_dial_code() {
        let state = FormState::default();
        assert_eq!(state.dial_code, "62");
        assert_eq!(state.phone_input, "");
        assert_eq!(state.link(true), "");
        assert!(!state.is_valid());
    }

    #[test]
    fn derivations_follow_phone_input() {
        let mut state = FormState::new("0812-3456-7890", "", "62");
        assert_eq!(state.sanitized_digits(), "081234567890");
        assert!(state.is_valid());
        assert_eq!(state.link(true), "https://wa.me/62081234567890");

        state.set_field(Field::Phone, "812 345");
        assert_eq!(state.sanitized_digits(), "812345");
        assert!(!state.is_valid());
        // Still shown as a preview
        assert_eq!(state.link(true), "https://wa.me/62812345");
    }

    #[test]
    fn message_only_embedded_when_enabled() {
        let state = FormState::new("81234567890", "Hi there!", "62");
        assert_eq!(
            state.link(true),
            "https://wa.me/6281234567890?text=Hi%20there!"
        );
        assert_eq!(state.link(false), "https://wa.me/6281234567890");
    }

    #[test]
    fn preview_carries_display_url_and_validity() {
        let state = FormState::new("81234567890", "", "44");
        let preview = state.preview(true);
        assert_eq!(preview.url, "https://wa.me/4481234567890");
        assert_eq!(preview.display_url, "wa.me/4481234567890");
        assert!(preview.is_actionable());

        let short = FormState::new("123", "", "44").preview(true);
        assert!(!short.is_actionable());
        assert!(!short.url.is_empty());
    }

    #[test]
    fn actions_track_validity_exactly() {
        for (input, valid) in [("", false), ("1234567", false), ("12345678", true)] {
            let actions = FormState::new(input, "", "62").actions();
            assert_eq!(actions, ActionAvailability::from_validity(valid));
            assert_eq!(actions.open, valid);
            assert_eq!(actions.copy, valid);
            assert_eq!(actions.share, valid);
        }
    }

    #[test]
    fn field_accessors_round_trip() {
        let mut state = FormState::default();
        state.set_field(Field::Country, "44");
        state.set_field(Field::Message, "yo");
        assert_eq!(state.field(Field::Country), "44");
        assert_eq!(state.field(Field::Message), "yo");
        assert_eq!(state.field(Field::Phone), "");
    }

    #[test]
    fn copied_indicator_expires_after_two_seconds() {
        let start = Utc::now();
        let mut indicator = CopiedIndicator::default();
        assert!(!indicator.is_visible_at(start));

        indicator.set(start);
        assert!(indicator.is_visible_at(start));
        assert!(indicator.is_visible_at(start + Duration::milliseconds(1999)));
        assert!(!indicator.is_visible_at(start + Duration::seconds(2)));
    }

    #[test]
    fn copied_indicator_resets_window_when_set_again() {
        let start = Utc::now();
        let mut indicator = CopiedIndicator::default();
        indicator.set(start);
        indicator.set(start + Duration::seconds(1));
        assert!(indicator.is_visible_at(start + Duration::milliseconds(2500)));
    }
}
