use std::fmt::Write;

use folio_config::{HeroMetric, Portfolio};

use super::META_SEPARATOR;
use crate::html::{escape_html, link_button};

/// Render the hero card with the "Connect" and "Snapshot" side column.
#[must_use]
pub fn render_hero(portfolio: &Portfolio) -> String {
    let mut out = String::from(r#"<section class="hero"><div class="hero-main"><div class="hero-card">"#);

    let _ = write!(
        out,
        r#"<div class="hero-title">{}</div><div class="hero-subtitle">{}</div><div class="hero-summary">{}</div>"#,
        escape_html(portfolio.name()),
        escape_html(portfolio.title()),
        escape_html(portfolio.summary())
    );

    let profile = &portfolio.profile;
    let meta: Vec<String> = [profile.current_role.as_deref(), profile.location.as_deref()]
        .into_iter()
        .flatten()
        .map(escape_html)
        .collect();
    if !meta.is_empty() {
        let _ = write!(out, r#"<div class="hero-meta">{}</div>"#, meta.join(META_SEPARATOR));
    }
    out.push_str(r#"</div></div><div class="hero-side">"#);

    out.push_str("<h4>Connect</h4>");
    for (label, url) in portfolio.social_links.iter() {
        out.push_str(&link_button(label, url));
    }

    if !portfolio.hero_metrics.is_empty() {
        out.push_str(r#"<h4>Snapshot</h4><div class="metrics">"#);
        for metric in &portfolio.hero_metrics {
            render_metric(metric, &mut out);
        }
        out.push_str("</div>");
    }

    out.push_str("</div></section>");
    out
}

fn render_metric(metric: &HeroMetric, out: &mut String) {
    let _ = write!(
        out,
        r#"<div class="metric"><div class="metric-label">{}</div><div class="metric-value">{}</div>"#,
        escape_html(metric.label.as_deref().unwrap_or_default()),
        escape_html(metric.value.as_deref().unwrap_or_default())
    );
    if let Some(delta) = metric.delta.as_deref() {
        let direction = if delta.trim_start().starts_with('-') {
            "down"
        } else {
            "up"
        };
        let _ = write!(
            out,
            r#"<div class="metric-delta metric-delta-{direction}">{}</div>"#,
            escape_html(delta)
        );
    }
    out.push_str("</div>");
}
