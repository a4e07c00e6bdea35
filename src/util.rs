//! Display helpers shared by the command handlers.

use std::borrow::Cow;

/// Clip a byte string to its first `max` bytes. Display only; stored data
/// is unaffected.
pub fn clip(bytes: &[u8], max: usize) -> &[u8] {
    if bytes.len() > max {
        &bytes[..max]
    } else {
        bytes
    }
}

/// Render a byte string for table output, lossily for non-UTF-8 data.
pub fn display_text(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
