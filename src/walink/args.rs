use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "walink", version)]
#[command(
    about = "Start a WhatsApp chat with any number, no need to save the contact first",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Field edits that can accompany any command.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Phone number, without the country code (e.g. 0812-3456-7890)
    #[arg(required = false)]
    pub phone: Option<String>,

    /// Message to prefill in the chat
    #[arg(short, long)]
    pub message: Option<String>,

    /// Country as ISO code or dial code (e.g. ID, 62, +62)
    #[arg(short, long)]
    pub country: Option<String>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        self.phone.is_none() && self.message.is_none() && self.country.is_none()
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the link for the current form
    #[command(alias = "l", alias = "show")]
    Link {
        #[command(flatten)]
        fields: FieldArgs,

        /// Print only the URL, and only when it is usable
        #[arg(long)]
        plain: bool,
    },

    /// Change one or more fields
    Set {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Paste a number, dropping spaces, dashes and the plus sign
    #[command(alias = "p")]
    Paste {
        /// Text to paste (reads the clipboard when omitted)
        text: Option<String>,
    },

    /// Open the chat in the browser
    #[command(alias = "o")]
    Open {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Copy the link to the clipboard
    #[command(alias = "c")]
    Copy {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Share the link (copies it when no share sheet is available)
    #[command(alias = "s")]
    Share {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// List selectable countries
    #[command(alias = "ls")]
    Countries {
        /// Filter by name, ISO code or dial code
        search: Option<String>,
    },

    /// Empty the phone and message fields
    Clear,

    /// Get or set configuration
    Config {
        /// Configuration key (default-country, message, share-title)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
