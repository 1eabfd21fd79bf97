//! Page chrome: document head, sidebar navigation and notices.

use std::fmt::Write;

use folio_config::LoadedConfig;

use crate::html::escape_html;
use crate::router::Page;
use crate::style::inject_global_styles;

/// Robot emoji favicon as an inline SVG.
const FAVICON: &str = "data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🤖</text></svg>";

/// Wrap `content` in the full HTML document for `current`.
pub(crate) fn render_document(config: &LoadedConfig, current: Page, content: &str) -> String {
    let mut out = String::with_capacity(content.len() + 8 * 1024);

    let _ = write!(
        out,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title><link rel="icon" href="{FAVICON}">"#,
        escape_html(config.portfolio.page_title())
    );
    out.push_str(inject_global_styles());
    out.push_str(r#"</head><body><div class="app">"#);

    render_sidebar(current, &mut out);

    out.push_str(r#"<main class="block-container">"#);
    for notice in &config.notices {
        let _ = write!(
            out,
            r#"<div class="notice notice-warning" role="alert">{}</div>"#,
            escape_html(notice)
        );
    }
    out.push_str(content);
    out.push_str("</main></div></body></html>");
    out
}

fn render_sidebar(current: Page, out: &mut String) {
    out.push_str(
        r#"<aside class="sidebar"><h1>Navigation</h1><nav aria-label="Go to"><p class="nav-label">Go to</p><ul>"#,
    );
    for page in Page::ALL {
        let marker = if page == current {
            r#" aria-current="page""#
        } else {
            ""
        };
        let _ = write!(
            out,
            r#"<li><a href="{}"{marker}>{}</a></li>"#,
            page.path(),
            page.label()
        );
    }
    out.push_str("</ul></nav></aside>");
}
