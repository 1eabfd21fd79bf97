use std::fmt::Write;

use folio_config::{Portfolio, Project, ProjectLinks};

use super::{caption, info_notice, section_heading};
use crate::html::{escape_html, link_button};

const GUIDANCE: &str =
    "Add your projects in <code>config.yaml</code> under the <code>projects</code> section.";

/// Render one card per project in document order.
#[must_use]
pub fn render_projects(portfolio: &Portfolio) -> String {
    let mut out = section_heading("Highlighted", "Projects");
    out.push_str(&caption(
        "Selected projects that combine solid engineering with machine learning impact.",
    ));

    if portfolio.projects.is_empty() {
        out.push_str(&info_notice(GUIDANCE));
        return out;
    }

    for project in &portfolio.projects {
        render_card(portfolio, project, &mut out);
    }
    out
}

fn render_card(portfolio: &Portfolio, project: &Project, out: &mut String) {
    out.push_str(r#"<div class="project-card"><div class="project-main">"#);

    let _ = write!(
        out,
        r#"<div class="project-title">{}</div>"#,
        escape_html(portfolio.project_title(project))
    );
    if let Some(tagline) = &project.tagline {
        let _ = write!(out, r#"<div class="project-tagline">{}</div>"#, escape_html(tagline));
    }
    if let Some(description) = &project.description {
        let _ = write!(
            out,
            r#"<div class="project-description">{}</div>"#,
            escape_html(description)
        );
    }

    if !project.tech_stack.is_empty() {
        let pills: Vec<String> = project
            .tech_stack
            .iter()
            .map(|tech| format!(r#"<span class="pill">{}</span>"#, escape_html(tech)))
            .collect();
        let _ = write!(
            out,
            r#"<p class="label"><strong>Tech stack</strong></p><div class="pills">{}</div>"#,
            pills.join(" ")
        );
    }

    if !project.metrics.is_empty() {
        out.push_str(r#"<p class="label"><strong>Key metrics &amp; results</strong></p><ul class="project-metrics">"#);
        for metric in &project.metrics {
            let _ = write!(out, "<li>{}</li>", escape_html(metric));
        }
        out.push_str("</ul>");
    }

    let buttons = link_buttons(&project.links);
    if !buttons.is_empty() {
        out.push_str(r#"<div class="button-row">"#);
        for (label, url) in buttons {
            out.push_str(&link_button(label, url));
        }
        out.push_str("</div>");
    }
    out.push_str("</div>");

    if let Some(image) = &project.image {
        let _ = write!(
            out,
            r#"<div class="project-aside"><img class="project-image" src="{}" alt="{}"></div>"#,
            escape_html(image),
            escape_html(portfolio.project_title(project))
        );
    }
    out.push_str("</div>");
}

/// Buttons in fixed order, skipping absent links.
fn link_buttons(links: &ProjectLinks) -> Vec<(&'static str, &str)> {
    [
        ("Live Demo", links.demo.as_deref()),
        ("GitHub", links.github.as_deref()),
        ("Docs", links.docs.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| (label, url)))
    .collect()
}
