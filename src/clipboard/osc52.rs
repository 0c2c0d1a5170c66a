//! OSC 52 clipboard writes
//!
//! The terminal emulator decodes the escape sequence and sets the clipboard
//! of the machine it runs on, which also works over SSH. Reads are not
//! possible this way.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const BEL: char = '\x07';

/// Ask the controlling terminal to put `text` on the clipboard
pub fn copy(text: &str) -> ClipboardResult {
    write_sequence(&mut io::stdout().lock(), text)
}

fn write_sequence(out: &mut impl Write, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|()| out.flush())
        .map_err(|e| {
            log::debug!("OSC 52 write failed: {}", e);
            ClipboardError::WriteError
        })
}

pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), BEL)
}

#[cfg(test)]
#[path = "osc52_tests.rs"]
mod osc52_tests;
