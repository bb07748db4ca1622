//! Clipboard access through the terminal (OSC 52)

use std::io::{self, IsTerminal, Write};

use base64::Engine;

use crate::models::ClipboardOutcome;

/// Host clipboard
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> ClipboardOutcome;
}

/// Writes the clipboard through an OSC 52 escape sequence on stdout.
/// Terminals without OSC 52 support silently ignore the sequence.
#[derive(Clone, Debug)]
pub struct Osc52Clipboard {
    enabled: bool,
}

impl Osc52Clipboard {
    pub fn new(enabled: bool) -> Self {
        Osc52Clipboard { enabled }
    }
}

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> ClipboardOutcome {
        let stdout = io::stdout();
        if !self.enabled || !stdout.is_terminal() {
            return ClipboardOutcome::Unsupported;
        }
        write_osc52(&mut stdout.lock(), text)
    }
}

/// Build the OSC 52 "set clipboard" sequence
pub fn osc52_sequence(text: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(text);
    format!("\x1b]52;c;{}\x07", encoded)
}

/// Write the sequence in one go so it is not interleaved with a frame
pub fn write_osc52(writer: &mut impl Write, text: &str) -> ClipboardOutcome {
    let result = writer
        .write_all(osc52_sequence(text).as_bytes())
        .and_then(|_| writer.flush());
    match result {
        Ok(()) => ClipboardOutcome::Copied,
        Err(e) => ClipboardOutcome::Denied(e.to_string()),
    }
}
