//! Clipboard writes through the terminal (OSC 52).
//!
//! Works over SSH and inside multiplexers that pass the sequence through.
//! Terminals that ignore OSC 52 give no error back, so callers should keep
//! the raw link visible somewhere anyway.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::io::{self, Write};

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

pub fn copy_to_clipboard<W: Write>(out: &mut W, text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "nothing to copy"));
    }
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}
