//! # Platform capabilities
//!
//! The form core never touches the clipboard, a share sheet or a browser
//! directly. It calls through these narrow traits, and each UI client injects
//! its own implementations:
//!
//! - [`Clipboard`]: write text (and read it, for smart paste)
//! - [`ShareSheet`]: hand a link to the OS share UI; optional
//! - [`UrlOpener`]: open a URL in a new, unrelated browsing context
//!
//! [`Platform`] bundles them. The CLI uses [`SystemPlatform`], which shells
//! out to OS tools and has no share sheet. Tests use [`mock::MockPlatform`].

use crate::clipboard::SystemClipboard;
use crate::error::Result;
use crate::opener::SystemOpener;

pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<()>;

    fn read_text(&mut self) -> Result<String>;
}

/// What gets handed to a share sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    /// The message, when there is one
    pub text: Option<String>,
    pub url: String,
}

pub trait ShareSheet {
    /// Shares the payload. User cancellation is reported as an error too.
    fn share(&mut self, payload: &SharePayload) -> Result<()>;
}

pub trait UrlOpener {
    /// Opens `url` without keeping any handle back to the caller.
    fn open(&mut self, url: &str) -> Result<()>;
}

pub trait Platform {
    fn clipboard(&mut self) -> &mut dyn Clipboard;

    fn opener(&mut self) -> &mut dyn UrlOpener;

    /// `None` when the platform has no native share UI.
    fn share_sheet(&mut self) -> Option<&mut dyn ShareSheet>;
}

/// OS-backed capabilities for terminal use.
#[derive(Debug, Default)]
pub struct SystemPlatform {
    clipboard: SystemClipboard,
    opener: SystemOpener,
}

impl SystemPlatform {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Platform for SystemPlatform {
    fn clipboard(&mut self) -> &mut dyn Clipboard {
        &mut self.clipboard
    }

    fn opener(&mut self) -> &mut dyn UrlOpener {
        &mut self.opener
    }

    fn share_sheet(&mut self) -> Option<&mut dyn ShareSheet> {
        None
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod mock {
    use super::*;
    use crate::error::WalinkError;

    /// Records every capability call and fails on demand.
    #[derive(Debug, Default)]
    pub struct MockPlatform {
        pub copied: Vec<String>,
        pub opened: Vec<String>,
        pub clipboard_contents: String,
        pub has_share_sheet: bool,
        pub fail_clipboard: bool,
        pub fail_share: bool,
        pub fail_open: bool,
        share_sheet: MockShareSheet,
    }

    #[derive(Debug, Default)]
    struct MockShareSheet {
        shared: Vec<SharePayload>,
        fail: bool,
    }

    impl MockPlatform {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_share_sheet(mut self) -> Self {
            self.has_share_sheet = true;
            self
        }

        pub fn failing_clipboard(mut self) -> Self {
            self.fail_clipboard = true;
            self
        }

        pub fn failing_share(mut self) -> Self {
            self.fail_share = true;
            self
        }

        pub fn failing_open(mut self) -> Self {
            self.fail_open = true;
            self
        }

        pub fn with_clipboard_contents(mut self, text: &str) -> Self {
            self.clipboard_contents = text.to_string();
            self
        }

        /// Payloads handed to the share sheet, including failed attempts.
        pub fn share_attempts(&self) -> &[SharePayload] {
            &self.share_sheet.shared
        }
    }

    impl Clipboard for MockPlatform {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.fail_clipboard {
                return Err(WalinkError::Clipboard("permission denied".to_string()));
            }
            self.copied.push(text.to_string());
            self.clipboard_contents = text.to_string();
            Ok(())
        }

        fn read_text(&mut self) -> Result<String> {
            if self.fail_clipboard {
                return Err(WalinkError::Clipboard("permission denied".to_string()));
            }
            Ok(self.clipboard_contents.clone())
        }
    }

    impl UrlOpener for MockPlatform {
        fn open(&mut self, url: &str) -> Result<()> {
            if self.fail_open {
                return Err(WalinkError::Open("no browser".to_string()));
            }
            self.opened.push(url.to_string());
            Ok(())
        }
    }

    impl ShareSheet for MockShareSheet {
        fn share(&mut self, payload: &SharePayload) -> Result<()> {
            self.shared.push(payload.clone());
            if self.fail {
                return Err(WalinkError::Share("AbortError: share cancelled".to_string()));
            }
            Ok(())
        }
    }

    impl Platform for MockPlatform {
        fn clipboard(&mut self) -> &mut dyn Clipboard {
            self
        }

        fn opener(&mut self) -> &mut dyn UrlOpener {
            self
        }

        fn share_sheet(&mut self) -> Option<&mut dyn ShareSheet> {
            if !self.has_share_sheet {
                return None;
            }
            self.share_sheet.fail = self.fail_share;
            Some(&mut self.share_sheet)
        }
    }
}
