//! Line-based input helpers
//!
//! Reading and interpreting the answers typed at the menu prompts.

use std::io::{self, BufRead};

/// Read one answer line, trimmed
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// garbled line is just an unrecognised answer. Returns None once the
/// input is exhausted.
pub fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = Vec::new();
    if input.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
}

/// Parse a book id typed by the user
pub fn parse_id(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}

/// Only `s` (any case) confirms a destructive action
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("s")
}

/// Blank answers mean "keep the current value"
pub fn non_blank(answer: String) -> Option<String> {
    if answer.is_empty() {
        None
    } else {
        Some(answer)
    }
}
