use clap::Parser;
use tracing_subscriber::EnvFilter;
use walink::api::{CmdMessage, CmdResult, ConfigAction};
use walink::error::Result;
use walink::init::{initialize, WalinkContext};

mod args;
mod print;

use args::{Cli, Commands, FieldArgs};
use print::{
    eprint_messages, print_actions, print_config, print_countries, print_form, print_messages,
    print_preview,
};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "walink=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = initialize()?;

    match cli.command {
        Some(Commands::Link { fields, plain }) => handle_link(&mut ctx, fields, plain),
        Some(Commands::Set { fields }) => handle_set(&mut ctx, fields),
        Some(Commands::Paste { text }) => handle_paste(&mut ctx, text),
        Some(Commands::Open { fields }) => {
            print_messages(&apply_fields(&mut ctx, &fields)?);
            let result = ctx.api.open();
            print_result(&ctx, &result);
            Ok(())
        }
        Some(Commands::Copy { fields }) => {
            print_messages(&apply_fields(&mut ctx, &fields)?);
            let result = ctx.api.copy();
            print_result(&ctx, &result);
            Ok(())
        }
        Some(Commands::Share { fields }) => {
            print_messages(&apply_fields(&mut ctx, &fields)?);
            let result = ctx.api.share();
            print_result(&ctx, &result);
            Ok(())
        }
        Some(Commands::Countries { search }) => handle_countries(&ctx, search),
        Some(Commands::Clear) => {
            let result = ctx.api.clear();
            print_result(&ctx, &result);
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_link(&mut ctx, FieldArgs::default(), false),
    }
}

/// Applies field edits in form order: country, phone, message. Each one is
/// written through on its own. Returns the messages the edits produced.
fn apply_fields(ctx: &mut WalinkContext, fields: &FieldArgs) -> Result<Vec<CmdMessage>> {
    let mut messages = Vec::new();
    if let Some(country) = &fields.country {
        messages.extend(ctx.api.set_country(country)?.messages);
    }
    if let Some(phone) = &fields.phone {
        messages.extend(ctx.api.set_phone(phone)?.messages);
    }
    if let Some(message) = &fields.message {
        messages.extend(ctx.api.set_message(message)?.messages);
    }
    Ok(messages)
}

fn handle_link(ctx: &mut WalinkContext, fields: FieldArgs, plain: bool) -> Result<()> {
    let edits = apply_fields(ctx, &fields)?;
    let result = ctx.api.show();

    if plain {
        // stdout carries the URL alone
        eprint_messages(&edits);
        if let Some(preview) = result.preview.as_ref().filter(|p| p.is_actionable()) {
            println!("{}", preview.url);
        }
        return Ok(());
    }

    print_messages(&edits);
    print_result(ctx, &result);
    Ok(())
}

fn handle_set(ctx: &mut WalinkContext, fields: FieldArgs) -> Result<()> {
    if fields.is_empty() {
        print_messages(&[CmdMessage::info(
            "Nothing to set. Pass a phone number, --message or --country.",
        )]);
        return Ok(());
    }
    let edits = apply_fields(ctx, &fields)?;
    print_messages(&edits);
    let result = ctx.api.show();
    print_result(ctx, &result);
    Ok(())
}

fn handle_paste(ctx: &mut WalinkContext, text: Option<String>) -> Result<()> {
    let result = match text {
        Some(text) => ctx.api.paste_phone(&text),
        None => ctx.api.paste_from_clipboard(),
    };
    print_result(ctx, &result);
    Ok(())
}

fn handle_countries(ctx: &WalinkContext, search: Option<String>) -> Result<()> {
    let result = ctx.api.countries(search.as_deref());
    print_countries(&result.countries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut WalinkContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.configure(action)?;
    if let (Some(config), true) = (&result.config, result.messages.is_empty()) {
        print_config(config);
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_result(ctx: &WalinkContext, result: &CmdResult) {
    if let Some(state) = &result.state {
        print_form(state, ctx.api.config());
    }
    if let Some(preview) = &result.preview {
        print_preview(preview);
    }
    if let Some(actions) = &result.actions {
        print_actions(actions, result.copied);
    }
    print_messages(&result.messages);
}
