// SPDX-License-Identifier: MPL-2.0
//! Neutralizes angle brackets in untrusted service banners.

/// Replaces `<` with `&lt;` and `>` with `&gt;`.
///
/// Only angle brackets are rewritten; ampersands and quotes pass through
/// unchanged so that banners keep their original shape.
#[must_use]
pub fn escape_angle_brackets(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_tags_are_neutralized() {
        assert_eq!(
            escape_angle_brackets("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
    }

    #[test]
    fn other_characters_are_untouched() {
        let banner = "HTTP/1.1 200 OK\r\nServer: a&b \"quoted\"";
        assert_eq!(escape_angle_brackets(banner), banner);
    }

    #[test]
    fn no_angle_brackets_remain() {
        let escaped = escape_angle_brackets("<<a>><b/>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
    }
}
