//! Markdown rendering utilities.
//!
//! Provides safe markdown-to-HTML conversion for folder READMEs.

use comrak::{Options, markdown_to_html as render};

/// Convert markdown content to sanitized HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Autolinks
///
/// The output is sanitized using `ammonia`, so a README cannot inject
/// scripts or event handlers into the page.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    ammonia::clean(&render(markdown, &options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_headings_and_tables() {
        let html = markdown_to_html("# Notes\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<h1>Notes</h1>"));
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_strips_scripts() {
        let html = markdown_to_html("hello <script>alert(1)</script>");
        assert!(!html.contains("<script"));
        assert!(html.contains("hello"));
    }

    #[test]
    fn test_strips_event_handlers() {
        let html = markdown_to_html("<img src=\"x.png\" onerror=\"alert(1)\">");
        assert!(!html.contains("onerror"));
    }
}
