use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use walink::api::{CmdMessage, CountryRow, MessageLevel};
use walink::config::WalinkConfig;
use walink::countries::find_by_dial_code;
use walink::model::{ActionAvailability, FormState, LinkPreview};

const LABEL_WIDTH: usize = 9;
const ENABLED_MARKER: &str = "●";
const DISABLED_MARKER: &str = "○";
const SELECTED_MARKER: &str = "›";

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Same as [`print_messages`], on stderr.
pub(crate) fn eprint_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn label(text: &str) -> String {
    format!("{:<width$}", text, width = LABEL_WIDTH)
}

pub(crate) fn print_form(state: &FormState, config: &WalinkConfig) {
    let country = match find_by_dial_code(&state.dial_code) {
        Some(c) => format!("{} {} (+{})", c.flag, c.name, c.dial_code),
        None => format!("+{}", state.dial_code),
    };
    println!("{}{}", label("Country").dimmed(), country);

    let phone = if state.phone_input.is_empty() {
        "-".dimmed().to_string()
    } else {
        state.phone_input.clone()
    };
    println!("{}{}", label("Phone").dimmed(), phone);

    if config.message_enabled && !state.message.is_empty() {
        println!("{}{}", label("Message").dimmed(), state.message);
    }
}

pub(crate) fn print_preview(preview: &LinkPreview) {
    if preview.url.is_empty() {
        return;
    }
    let url = if preview.is_valid {
        preview.url.green().bold()
    } else {
        preview.url.dimmed()
    };
    println!("{}{}", label("Link").dimmed(), url);
}

pub(crate) fn print_actions(actions: &ActionAvailability, copied: bool) {
    let item = |name: &str, enabled: bool| {
        if enabled {
            format!("{} {}", ENABLED_MARKER, name).normal()
        } else {
            format!("{} {}", DISABLED_MARKER, name).dimmed()
        }
    };
    let copy_label = if copied { "copied!" } else { "copy" };
    println!(
        "{}{}  {}  {}",
        label("Actions").dimmed(),
        item("open", actions.open),
        item(copy_label, actions.copy),
        item("share", actions.share)
    );
}

pub(crate) fn print_countries(rows: &[CountryRow]) {
    if rows.is_empty() {
        return;
    }

    let name_width = rows
        .iter()
        .map(|r| r.country.name.width())
        .max()
        .unwrap_or(0);

    for row in rows {
        let c = row.country;
        let marker = if row.selected { SELECTED_MARKER } else { " " };
        let padding = name_width.saturating_sub(c.name.width());
        let line = format!(
            "{} {} {}  {}{}  +{}",
            marker,
            c.flag,
            c.code,
            c.name,
            " ".repeat(padding),
            c.dial_code
        );
        if row.selected {
            println!("{}", line.green());
        } else {
            println!("{}", line);
        }
    }
}

pub(crate) fn print_config(config: &WalinkConfig) {
    println!("default-country = {}", config.default_country);
    println!("message = {}", config.message_enabled);
    println!("share-title = {}", config.share_title);
}
