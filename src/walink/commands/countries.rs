use crate::commands::{CmdMessage, CmdResult, CountryRow};
use crate::countries::search;

/// Lists reference entries matching `term`, marking the one whose dial code
/// is currently selected. Only the first entry for a shared dial code is
/// marked.
pub fn run(term: Option<&str>, selected_dial_code: &str) -> CmdResult {
    let matches = search(term.unwrap_or(""));
    let selected_code = matches
        .iter()
        .find(|c| c.dial_code == selected_dial_code)
        .map(|c| c.code);

    let rows: Vec<CountryRow> = matches
        .into_iter()
        .map(|country| CountryRow {
            country,
            selected: Some(country.code) == selected_code,
        })
        .collect();

    let mut result = CmdResult::default();
    if rows.is_empty() {
        if let Some(term) = term {
            result.add_message(CmdMessage::info(format!("No countries match \"{}\"", term)));
        }
    }
    result.with_countries(rows)
}
