//! Lightweight message markup.
//!
//! Assistant replies arrive as plain text with a small markdown subset:
//! `![alt](url)` image placeholders, `**bold**`, leading `• ` bullets and
//! newlines. Everything else is escaped before the markup is applied, so the
//! result is safe to hand to `dangerous_inner_html`.

use std::sync::OnceLock;

use regex::{Captures, Regex};

/// Output of formatting a message body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedText {
    pub html: String,
    /// Image placeholders turned into `<img>` tags
    pub images_rendered: usize,
    /// Image placeholders found in the text, rendered or not
    pub images_found: usize,
}

fn image_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").expect("valid regex"))
}

fn bold_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"))
}

fn bullet_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^• ").expect("valid regex"))
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Format a message, rendering every image placeholder.
pub fn format_message(text: &str) -> FormattedText {
    format_with_image_limit(text, usize::MAX)
}

/// Format a message, rendering only the first `limit` image placeholders.
/// Later placeholders are removed from the output.
pub fn format_with_image_limit(text: &str, limit: usize) -> FormattedText {
    let escaped = escape_html(text);

    let mut found = 0usize;
    let mut rendered = 0usize;
    let with_images = image_regex().replace_all(&escaped, |caps: &Captures| {
        found += 1;
        if rendered < limit {
            rendered += 1;
            image_tag(&caps[2], &caps[1])
        } else {
            String::new()
        }
    });

    let with_bold = bold_regex().replace_all(&with_images, "<strong>$1</strong>");
    let with_bullets = bullet_regex().replace_all(&with_bold, "&bull; ");
    let html = with_bullets.replace('\n', "<br>");

    FormattedText {
        html,
        images_rendered: rendered,
        images_found: found,
    }
}

/// `src` and `alt` must already be escaped.
fn image_tag(src: &str, alt: &str) -> String {
    format!(r#"<img src="{src}" alt="{alt}" class="chat-profile-image" />"#)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_images_without_limit() {
        let text = "**1. AP0002**\n![AP0002](http://x/a.png)\n**2. AP0003**\n![AP0003](http://x/b.png)";
        let formatted = format_message(text);
        assert_eq!(formatted.images_rendered, 2);
        assert_eq!(formatted.images_found, 2);
        assert!(formatted.html.contains(
            r#"<img src="http://x/a.png" alt="AP0002" class="chat-profile-image" />"#
        ));
        assert!(formatted.html.contains("<strong>1. AP0002</strong><br>"));
    }

    #[test]
    fn strips_images_past_the_limit() {
        let text = "![a](1)![b](2)![c](3)";
        let formatted = format_with_image_limit(text, 2);
        assert_eq!(formatted.images_rendered, 2);
        assert_eq!(formatted.images_found, 3);
        assert!(formatted.html.contains(r#"src="2""#));
        assert!(!formatted.html.contains(r#"src="3""#));
        assert!(!formatted.html.contains("![c]"));
    }

    #[test]
    fn fewer_placeholders_than_limit_is_not_an_error() {
        let formatted = format_with_image_limit("only text", 15);
        assert_eq!(formatted.images_rendered, 0);
        assert_eq!(formatted.html, "only text");
    }

    #[test]
    fn bullets_and_newlines() {
        let formatted = format_message("Sonuçlar:\n• 100 kutu\n• çap 28");
        assert_eq!(
            formatted.html,
            "Sonuçlar:<br>&bull; 100 kutu<br>&bull; çap 28"
        );
    }

    #[test]
    fn raw_html_is_escaped() {
        let formatted = format_message(r#"<script>alert("x")</script> & **ok**"#);
        assert!(!formatted.html.contains("<script>"));
        assert!(formatted.html.contains("&lt;script&gt;"));
        assert!(formatted.html.contains("&amp; <strong>ok</strong>"));
    }

    #[test]
    fn attribute_breakout_in_placeholder_is_escaped() {
        let formatted = format_message(r#"![x" onerror="boom](http://x/a.png)"#);
        assert!(formatted.html.contains(r#"alt="x&quot; onerror=&quot;boom""#));
    }
}
