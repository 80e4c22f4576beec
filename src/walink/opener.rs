//! Opens links in the user's default browser.
//!
//! The opener process is spawned with null stdio and never waited on, so the
//! opened page has no channel back to us.

use crate::error::{Result, WalinkError};
use crate::platform::UrlOpener;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        open_in_browser(url)
    }
}

/// The command that hands `url` to the OS default handler.
pub fn opener_command(url: &str) -> Command {
    #[cfg(target_os = "macos")]
    {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    }

    #[cfg(target_os = "windows")]
    {
        // The empty string is the window title `start` expects before the target
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(url);
        cmd
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

pub fn open_in_browser(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(WalinkError::Open("no link to open".to_string()));
    }

    let mut cmd = opener_command(url);
    let program = cmd.get_program().to_string_lossy().into_owned();
    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| WalinkError::Open(format!("Failed to launch {}: {}", program, e)))?;

    debug!(pid = child.id(), url, "launched opener");
    Ok(())
}
