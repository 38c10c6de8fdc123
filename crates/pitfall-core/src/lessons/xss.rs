// SPDX-License-Identifier: Apache-2.0

//! Cross-site scripting lesson: escape before you interpolate.
//!
//! The vulnerable variant drops user input straight into markup:
//!
//! ```text
//! // NEVER DO THIS - the input becomes part of the page's HTML.
//! let html = format!("<div>{user_input}</div>");
//! // user_input = "<script>alert('Hacked!');</script>" executes in every
//! // visitor's browser.
//! ```
//!
//! [`render_comment`] is the safe counterpart: the same wrapper markup, with
//! the input escaped first so it can only ever render as text.

/// Escapes the five HTML-significant characters: `&`, `<`, `>`, `"`, `'`.
///
/// `&` is replaced first; doing it later would mangle the entities the
/// other replacements produce.
///
/// # Examples
///
/// ```
/// use pitfall_core::escape_html;
///
/// let input = "<script>alert('Hacked!');</script>";
/// assert_eq!(
///     escape_html(input),
///     "&lt;script&gt;alert(&#x27;Hacked!&#x27;);&lt;/script&gt;"
/// );
/// ```
#[must_use]
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Wraps untrusted input in a `<div>`, escaped so it renders as inert text.
///
/// # Examples
///
/// ```
/// use pitfall_core::render_comment;
///
/// let html = render_comment("<b>hi</b>");
/// assert_eq!(html, "<div>&lt;b&gt;hi&lt;/b&gt;</div>");
/// ```
#[must_use]
pub fn render_comment(user_input: &str) -> String {
    format!("<div>{}</div>", escape_html(user_input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_script_tags() {
        assert_eq!(
            escape_html("<script>alert('xss')</script>"),
            "&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escapes_attribute_breakout() {
        assert_eq!(
            escape_html(r#"" onmouseover="alert(1)"#),
            "&quot; onmouseover=&quot;alert(1)"
        );
    }

    #[test]
    fn test_ampersand_escaped_first() {
        // A pre-escaped entity must not pass through unchanged.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(escape_html("hello, world"), "hello, world");
    }

    #[test]
    fn test_render_comment_neutralizes_markup() {
        let html = render_comment("<img src=x onerror=alert(1)>");
        assert!(html.starts_with("<div>"));
        assert!(html.ends_with("</div>"));
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }
}
