//! HTML helpers shared by the renderers.

use pulldown_cmark::{Options, Parser, html};

/// Escape HTML special characters.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// Render markdown text to HTML.
///
/// Raw HTML blocks in the source are passed through, so README files that
/// mix markdown and HTML keep their layout.
#[must_use]
pub fn render_markdown(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options);
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// External link rendered as a button.
pub(crate) fn link_button(label: &str, url: &str) -> String {
    format!(
        r#"<a class="link-button" href="{}" target="_blank" rel="noopener noreferrer">{}</a>"#,
        escape_html(url),
        escape_html(label)
    )
}
