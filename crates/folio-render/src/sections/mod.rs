//! Section renderers.
//!
//! Each renderer is a pure function from the portfolio document to an HTML
//! fragment. Text from the document is escaped; absent fields are omitted.

mod blog;
mod contact;
mod hero;
mod home;
mod projects;
mod skills;

pub use blog::render_blog;
pub use contact::render_contact;
pub use hero::render_hero;
pub use home::render_home;
pub use projects::render_projects;
pub use skills::{render_skills, skill_tier};

use crate::html::escape_html;

/// Separator for compact meta lines.
pub(crate) const META_SEPARATOR: &str = " • ";

/// Section heading with the last word highlighted.
fn section_heading(lead: &str, accent: &str) -> String {
    format!(
        r#"<h3 class="section-heading"><span class="section-title">{} <span class="accent">{}</span></span></h3>"#,
        escape_html(lead),
        escape_html(accent)
    )
}

fn caption(text: &str) -> String {
    format!(r#"<p class="caption">{}</p>"#, escape_html(text))
}

/// Informational banner. `html` is inserted as is.
fn info_notice(html: &str) -> String {
    format!(r#"<div class="notice notice-info">{html}</div>"#)
}
