//! Display formatting helpers for the widget surface.
//!
//! Pure string computation — no widget state.

/// Maximum display length before a file name is shortened.
const MAX_NAME_LEN: usize = 50;
/// Characters kept from the front of a shortened name.
const HEAD_LEN: usize = 30;
/// Characters kept from the tail of a shortened name.
const TAIL_LEN: usize = 10;

/// Shorten long file names for display.
///
/// Names longer than 50 characters render as the first 30 characters,
/// an ellipsis, and the last 10. Shorter names pass through unchanged.
/// Counts Unicode scalar values, not bytes, so multibyte names never get
/// split mid-character.
pub fn format_file_name(name: &str) -> String {
    let count = name.chars().count();
    if count <= MAX_NAME_LEN {
        return name.to_string();
    }

    let head: String = name.chars().take(HEAD_LEN).collect();
    let tail: String = name.chars().skip(count - TAIL_LEN).collect();
    format!("{}...{}", head, tail)
}

/// The "N MB max" hint shown under the attach control while the size check
/// is enabled.
pub fn size_hint(limit_mb: u32) -> String {
    format!("{} MB max", limit_mb)
}
