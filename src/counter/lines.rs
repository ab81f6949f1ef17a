use std::borrow::Cow;

/// Decode raw file bytes as UTF-8, dropping invalid byte sequences.
///
/// Valid input is borrowed as-is. Invalid bytes are removed rather than
/// replaced with `U+FFFD`, so text on either side of a bad byte is joined.
#[must_use]
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    Cow::Owned(text)
}

/// Returns true for every character that ends a line.
///
/// Covers `\n`, `\r`, vertical tab, form feed, the file/group/record
/// separators, NEL, and the Unicode line and paragraph separators.
#[must_use]
pub const fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Count the lines of `content`.
///
/// `\r\n` is a single boundary. A trailing boundary does not start a new
/// line, and a final line without a terminator still counts.
#[must_use]
pub fn count_lines(content: &str) -> usize {
    let mut lines = 0;
    let mut open_line = false;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if is_line_boundary(c) {
            if c == '\r' {
                chars.next_if_eq(&'\n');
            }
            lines += 1;
            open_line = false;
        } else {
            open_line = true;
        }
    }

    if open_line { lines + 1 } else { lines }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
