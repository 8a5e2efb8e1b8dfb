//! Target-specific text conversions.

/// Escape the five HTML-significant characters.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Escape and turn every line break into `<br />`.
pub fn escape_with_breaks(input: &str) -> String {
    unify_line_breaks(&escape_html(input)).replace('\n', "<br />")
}

/// Unify `\r\n` line endings to `\n`.
pub fn unify_line_breaks(input: &str) -> String {
    input.replace("\r\n", "\n")
}

/// First `max_chars` characters, counted as Unicode scalar values.
pub fn take_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &input[..byte_idx],
        None => input,
    }
}
