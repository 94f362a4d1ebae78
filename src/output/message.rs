//! Commit message fitting for fixed-size table cells.

use std::mem;

/// Marker appended to a cut-off final line.
pub const ELLIPSIS: &str = "...";

/// Wrap `message` to `wrap_width` characters and keep at most `max_lines`.
///
/// Wrapping is greedy at word boundaries; words longer than the width are
/// split. When more lines are produced than fit, the first `max_lines - 1`
/// lines are kept and the next one becomes the last line, cut to
/// `wrap_width - 3` characters plus [`ELLIPSIS`] if it is longer than that.
/// A `max_lines` of 0 is treated as 1.
#[must_use]
pub fn truncate_message(message: &str, wrap_width: usize, max_lines: usize) -> String {
    let max_lines = max_lines.max(1);
    let mut lines = wrap_lines(message, wrap_width);

    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            let keep = wrap_width.saturating_sub(ELLIPSIS.len());
            if last.chars().count() > keep {
                let cut: String = last.chars().take(keep).collect();
                *last = cut + ELLIPSIS;
            }
        }
    }

    lines.join("\n")
}

/// Greedy word wrap. Whitespace runs, line breaks included, collapse to a
/// single space.
fn wrap_lines(message: &str, wrap_width: usize) -> Vec<String> {
    let width = wrap_width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in message.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
            continue;
        }
        let mut rest: Vec<char> = word.chars().collect();
        if current_len > 0 {
            // An over-long word starts on the current line when there is room.
            if word_len > width && current_len + 1 < width {
                let room = width - current_len - 1;
                current.push(' ');
                current.extend(rest.drain(..room));
            }
            lines.push(mem::take(&mut current));
        }
        while rest.len() > width {
            lines.push(rest.drain(..width).collect());
        }
        current_len = rest.len();
        current = rest.into_iter().collect();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[path = "message_tests.rs"]
mod tests;
