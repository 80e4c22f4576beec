//! System clipboard access through the OS command-line tools.
//!
//! - macOS: `pbcopy` / `pbpaste`
//! - Linux: `xclip`, falling back to `xsel`
//! - Windows: `clip` / PowerShell `Get-Clipboard`

use crate::error::{Result, WalinkError};
use crate::platform::Clipboard;
use std::io::Write;
use std::process::{Command, Stdio};
use tracing::debug;

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        copy_to_clipboard(text)
    }

    fn read_text(&mut self) -> Result<String> {
        get_from_clipboard()
    }
}

pub fn copy_to_clipboard(text: &str) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        pipe_into(&[("pbcopy", NO_ARGS)], text)
    }

    #[cfg(target_os = "linux")]
    {
        pipe_into(&[("xclip", XCLIP_IN), ("xsel", XSEL_IN)], text)
    }

    #[cfg(target_os = "windows")]
    {
        pipe_into(&[("clip", NO_ARGS)], text)
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        let _ = text;
        Err(WalinkError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

pub fn get_from_clipboard() -> Result<String> {
    #[cfg(target_os = "macos")]
    {
        read_from(&[("pbpaste", NO_ARGS)])
    }

    #[cfg(target_os = "linux")]
    {
        read_from(&[("xclip", XCLIP_OUT), ("xsel", XSEL_OUT)])
    }

    #[cfg(target_os = "windows")]
    {
        read_from(&[("powershell", POWERSHELL_GET)])
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        Err(WalinkError::Clipboard(
            "Clipboard not supported on this platform".to_string(),
        ))
    }
}

type Tool<'a> = (&'a str, &'a [&'a str]);

#[allow(dead_code)]
const NO_ARGS: &[&str] = &[];
#[allow(dead_code)]
const XCLIP_IN: &[&str] = &["-selection", "clipboard"];
#[allow(dead_code)]
const XSEL_IN: &[&str] = &["--clipboard", "--input"];
#[allow(dead_code)]
const XCLIP_OUT: &[&str] = &["-selection", "clipboard", "-o"];
#[allow(dead_code)]
const XSEL_OUT: &[&str] = &["--clipboard", "--output"];
#[allow(dead_code)]
const POWERSHELL_GET: &[&str] = &["-command", "Get-Clipboard"];

/// Feeds `text` to the first tool that can be spawned.
#[allow(dead_code)]
fn pipe_into(tools: &[Tool<'_>], text: &str) -> Result<()> {
    let mut last_err = None;

    for (program, args) in tools {
        let spawned = Command::new(program)
            .args(*args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) => {
                debug!(program, error = %e, "clipboard tool not available");
                last_err = Some(format!("Failed to spawn {}: {}", program, e));
                continue;
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                debug!(program, error = %e, "clipboard tool rejected input");
                last_err = Some(format!("Failed to write to {}: {}", program, e));
                continue;
            }
        }

        let status = child.wait().map_err(|e| {
            WalinkError::Clipboard(format!("Failed to wait for {}: {}", program, e))
        })?;

        return if status.success() {
            Ok(())
        } else {
            Err(WalinkError::Clipboard(format!(
                "{} exited with error",
                program
            )))
        };
    }

    Err(WalinkError::Clipboard(
        last_err.unwrap_or_else(|| "No clipboard tool configured".to_string()),
    ))
}

/// Reads stdout of the first tool that runs successfully.
#[allow(dead_code)]
fn read_from(tools: &[Tool<'_>]) -> Result<String> {
    let mut last_err = None;

    for (program, args) in tools {
        match Command::new(program).args(*args).output() {
            Ok(output) if output.status.success() => {
                return String::from_utf8(output.stdout).map_err(|e| {
                    WalinkError::Clipboard(format!("Invalid UTF-8 in clipboard: {}", e))
                });
            }
            Ok(_) => last_err = Some(format!("{} exited with error", program)),
            Err(e) => {
                debug!(program, error = %e, "clipboard tool not available");
                last_err = Some(format!("Failed to execute {}: {}", program, e));
            }
        }
    }

    Err(WalinkError::Clipboard(
        last_err.unwrap_or_else(|| "No clipboard tool configured".to_string()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_tool_is_a_clipboard_error() {
        let err = pipe_into(&[("walink-no-such-clipboard-tool", NO_ARGS)], "x").unwrap_err();
        assert!(matches!(err, WalinkError::Clipboard(msg) if msg.contains("Failed to spawn")));
    }

    #[test]
    fn read_with_missing_tool_is_a_clipboard_error() {
        let err = read_from(&[("walink-no-such-clipboard-tool", NO_ARGS)]).unwrap_err();
        assert!(matches!(err, WalinkError::Clipboard(_)));
    }

    #[cfg(unix)]
    #[test]
    fn tool_that_closes_stdin_falls_through_to_next() {
        // Larger than a pipe buffer, so writing to `true` fails once it exits
        let text = "6".repeat(1 << 20);
        assert!(pipe_into(&[("true", NO_ARGS), ("cat", NO_ARGS)], &text).is_ok());

        let err = pipe_into(&[("true", NO_ARGS)], &text).unwrap_err();
        assert!(matches!(err, WalinkError::Clipboard(msg) if msg.contains("Failed to write to true")));
    }

    #[test]
    fn empty_tool_list_is_an_error() {
        assert!(pipe_into(&[], "x").is_err());
    }
}
