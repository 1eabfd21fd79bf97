use std::fmt::Write;

use folio_config::{Portfolio, Skill};

use super::{META_SEPARATOR, caption, info_notice, section_heading};
use crate::html::escape_html;

const COLUMNS: usize = 3;

const GUIDANCE: &str =
    "Define your skills matrix in <code>config.yaml</code> under the <code>skills</code> section.";

/// Progress fraction for a free-text skill level.
///
/// Matching is a case-insensitive substring test, checked from the highest
/// tier down, so `"Advanced/Expert"` counts as expert.
#[must_use]
pub fn skill_tier(level: &str) -> f64 {
    let level = level.to_lowercase();
    if level.contains("expert") {
        0.95
    } else if level.contains("advanced") {
        0.80
    } else if level.contains("intermediate") {
        0.60
    } else {
        0.40
    }
}

/// Render the skills matrix, one three-column grid per category.
#[must_use]
pub fn render_skills(portfolio: &Portfolio) -> String {
    let mut out = section_heading("Skills", "Matrix");
    out.push_str(&caption("What I’m comfortable using to ship ML and AI systems."));

    if portfolio.skills.is_empty() {
        out.push_str(&info_notice(GUIDANCE));
        return out;
    }

    for (category, skills) in portfolio.skills.iter() {
        let _ = write!(out, r#"<h3 class="skill-category">{}</h3>"#, escape_html(category));
        if skills.items.is_empty() {
            continue;
        }

        let mut columns = vec![String::new(); COLUMNS];
        for (i, skill) in skills.items.iter().enumerate() {
            render_skill(skill, &mut columns[i % COLUMNS]);
        }

        out.push_str(r#"<div class="skill-grid">"#);
        for column in columns {
            let _ = write!(out, r#"<div class="skill-column">{column}</div>"#);
        }
        out.push_str("</div>");
    }
    out
}

fn render_skill(skill: &Skill, out: &mut String) {
    let _ = write!(out, r#"<div class="skill"><div class="skill-name">{}</div>"#, escape_html(&skill.name));

    let mut details = Vec::with_capacity(2);
    if let Some(level) = &skill.level {
        details.push(escape_html(level));
    }
    if let Some(years) = &skill.years {
        details.push(format!("{}+ yrs", escape_html(years)));
    }
    if !details.is_empty() {
        let _ = write!(out, r#"<div class="skill-meta">{}</div>"#, details.join(META_SEPARATOR));
    }

    if let Some(level) = &skill.level {
        let _ = write!(
            out,
            r#"<progress class="skill-progress" value="{:.2}" max="1"></progress>"#,
            skill_tier(level)
        );
    }
    out.push_str("</div>");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn skills(yaml: &str) -> String {
        render_skills(&Portfolio::from_yaml(yaml).unwrap())
    }

    fn columns(html: &str) -> Vec<&str> {
        html.split(r#"<div class="skill-column">"#).skip(1).collect()
    }

    #[test]
    fn test_skill_tiers() {
        assert!((skill_tier("Expert") - 0.95).abs() < f64::EPSILON);
        assert!((skill_tier("Advanced") - 0.80).abs() < f64::EPSILON);
        assert!((skill_tier("Intermediate") - 0.60).abs() < f64::EPSILON);
        assert!((skill_tier("Beginner") - 0.40).abs() < f64::EPSILON);
        assert!((skill_tier("EXPERT") - 0.95).abs() < f64::EPSILON);
        assert!((skill_tier("Advanced/Expert") - 0.95).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_skills_shows_guidance_only() {
        let html = skills("skills: {}\n");

        assert!(html.contains("Define your skills matrix"));
        assert!(!html.contains("skill-category"));
    }

    #[test]
    fn test_category_without_items_renders_heading_only() {
        let html = skills("skills:\n  Empty: []\n  Also:\n    items: []\n");

        assert_eq!(html.matches("skill-category").count(), 2);
        assert!(!html.contains("skill-grid"));
    }

    #[test]
    fn test_both_category_shapes_render_the_same() {
        let list = skills("skills:\n  Core:\n    - name: Rust\n      level: Expert\n");
        let grouped = skills("skills:\n  Core:\n    items:\n      - name: Rust\n        level: Expert\n");
        assert_eq!(list, grouped);
    }

    #[test]
    fn test_grid_is_row_major() {
        let html = skills("skills:\n  Core: [a, b, c, d, e]\n");

        let cols = columns(&html);
        assert_eq!(cols.len(), 3);
        assert!(cols[0].contains(">a<") && cols[0].contains(">d<"));
        assert!(cols[1].contains(">b<") && cols[1].contains(">e<"));
        assert!(cols[2].contains(">c<"));
    }

    #[test]
    fn test_bare_skill_has_no_meta_or_progress() {
        let html = skills("skills:\n  Core: [Docker]\n");

        assert!(html.contains(r#"<div class="skill-name">Docker</div>"#));
        assert!(!html.contains("skill-meta"));
        assert!(!html.contains("<progress"));
    }

    #[test]
    fn test_meta_and_progress() {
        let html = skills("skills:\n  Core:\n    - name: Rust\n      level: Advanced\n      years: 4\n");

        assert!(html.contains(r#"<div class="skill-meta">Advanced • 4+ yrs</div>"#));
        assert!(html.contains(r#"value="0.80""#));
    }

    #[test]
    fn test_years_without_level_has_no_progress() {
        let html = skills("skills:\n  Core:\n    - name: SQL\n      years: 6\n");

        assert!(html.contains(r#"<div class="skill-meta">6+ yrs</div>"#));
        assert!(!html.contains("<progress"));
    }

    #[test]
    fn test_zero_years_is_omitted() {
        let html = skills("skills:\n  Core:\n    - name: Go\n      years: 0\n");
        assert!(!html.contains("skill-meta"));
    }

    #[test]
    fn test_categories_keep_document_order() {
        let html = skills("skills:\n  Zeta: [a]\n  Alpha: [b]\n");
        assert!(html.find("Zeta").unwrap() < html.find("Alpha").unwrap());
    }
}
