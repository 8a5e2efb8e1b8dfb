use std::sync::LazyLock;

use regex::Regex;

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid blank-line pattern"));

/// Plain-text rendition of a small HTML fragment.
pub fn strip_tags(html: &str) -> String {
    let text = TAG
        .replace_all(html, "")
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    BLANK_LINES.replace_all(text.trim(), "\n\n").to_string()
}

/// Indent every line of `text` by `width` spaces.
pub fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| format!("{}{}", pad, line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_tags() {
        let html = "<h2>Correzioni</h2>\n<p>Schede &amp; note</p>\n\n\n\n<p>Fine</p>";
        assert_eq!(strip_tags(html), "Correzioni\nSchede & note\n\nFine");
    }

    #[test]
    fn test_indent_multiline() {
        assert_eq!(indent("a\nb", 2), "  a\n  b");
    }
}
