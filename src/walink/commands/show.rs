use crate::commands::{CmdMessage, CmdResult};
use crate::config::WalinkConfig;
use crate::model::FormState;
use crate::phone::{MAX_DIGITS, MIN_DIGITS};

pub fn run(state: &FormState, config: &WalinkConfig) -> CmdResult {
    let mut result = CmdResult::default().with_form(state, config);

    let digits = state.sanitized_digits();
    if digits.is_empty() {
        result.add_message(CmdMessage::info(
            "Enter a valid phone number to generate link",
        ));
    } else if !state.is_valid() {
        result.add_message(CmdMessage::warning(format!(
            "Number must be {}-{} digits (currently {})",
            MIN_DIGITS,
            MAX_DIGITS,
            digits.len()
        )));
    }

    result
}
