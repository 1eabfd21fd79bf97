//! Global stylesheet: dark theme with orange accents.

const GLOBAL_STYLES: &str = r#"<style>
/* Global layout */
body {
    margin: 0;
    background: #020617;
    color: #e5e7eb;
    font-family: system-ui, -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
}
a { color: #fdba74; }
.app { display: flex; min-height: 100vh; }
.block-container {
    flex: 1;
    max-width: 1100px;
    margin: 0 auto;
    padding: 1.6rem 2rem 3rem;
}
.caption { font-size: 0.85rem; color: #9ca3af; }
code {
    padding: 0.05rem 0.3rem;
    border-radius: 4px;
    background: rgba(15, 23, 42, 0.9);
    color: #fdba74;
}

/* Sidebar */
.sidebar {
    width: 15rem;
    padding: 1.6rem 1.2rem;
    background: #020617;
    border-right: 1px solid rgba(55, 65, 81, 0.7);
}
.sidebar h1 { font-size: 1.4rem; font-weight: 700; }
.sidebar .nav-label { font-size: 0.85rem; color: #9ca3af; }
.sidebar ul { list-style: none; padding: 0; }
.sidebar li a {
    display: block;
    padding: 0.35rem 0.8rem;
    margin-bottom: 0.25rem;
    border-radius: 999px;
    color: #e5e7eb;
    text-decoration: none;
}
.sidebar li a[aria-current="page"] {
    background: rgba(249, 115, 22, 0.15);
    border: 1px solid rgba(248, 153, 59, 0.7);
}

/* Notices */
.notice {
    padding: 0.8rem 1rem;
    margin-bottom: 1rem;
    border-radius: 10px;
}
.notice-info { background: rgba(30, 64, 175, 0.25); border: 1px solid rgba(59, 130, 246, 0.5); }
.notice-warning { background: rgba(153, 27, 27, 0.3); border: 1px solid rgba(239, 68, 68, 0.6); }

/* Buttons */
.link-button {
    display: block;
    padding: 0.45rem 0.9rem;
    margin-bottom: 0.4rem;
    border-radius: 999px;
    border: 1px solid rgba(248, 153, 59, 0.7);
    color: #e5e7eb;
    text-align: center;
    text-decoration: none;
}
.link-button:hover { border-color: #f97316; color: #fed7aa; }
.button-row { display: flex; gap: 0.5rem; margin-top: 0.6rem; }
.button-row .link-button { flex: 1; }

/* Hero card */
.hero { display: grid; grid-template-columns: 2.4fr 1fr; gap: 1.5rem; }
.hero-card {
    padding: 2.3rem 2.5rem;
    border-radius: 20px;
    background: linear-gradient(135deg, #0b1120, #020617);
    border: 1px solid rgba(248, 153, 59, 0.55);
    box-shadow: 0 26px 60px rgba(15, 23, 42, 0.85);
}
.hero-title {
    font-size: 2.4rem;
    font-weight: 750;
    letter-spacing: -0.03em;
    margin-bottom: 0.25rem;
}
.hero-subtitle {
    font-size: 1.05rem;
    font-weight: 500;
    color: #fed7aa;
    margin-bottom: 0.8rem;
}
.hero-summary {
    font-size: 0.97rem;
    color: #e5e7eb;
    line-height: 1.7;
}
.hero-meta {
    font-size: 0.9rem;
    color: #cbd5f5;
    margin-top: 0.8rem;
}
.metric { margin-bottom: 0.8rem; }
.metric-label { font-size: 0.85rem; color: #9ca3af; }
.metric-value { font-size: 1.8rem; font-weight: 600; }
.metric-delta { font-size: 0.85rem; }
.metric-delta-up { color: #4ade80; }
.metric-delta-down { color: #f87171; }

/* Pills / chips */
.pill {
    display: inline-flex;
    align-items: center;
    padding: 0.25rem 0.7rem;
    border-radius: 999px;
    font-size: 0.75rem;
    font-weight: 500;
    background: rgba(15, 23, 42, 0.9);
    color: #e5e7eb;
    margin-right: 0.35rem;
    margin-bottom: 0.3rem;
    border: 1px solid rgba(248, 153, 59, 0.7);
}

/* Section heading accent */
.section-title {
    font-weight: 700;
    color: #e5e7eb;
}
.section-title span.accent {
    color: #f97316;
}
.section-title::before {
    content: "";
    display: inline-block;
    width: 6px;
    height: 18px;
    border-radius: 999px;
    background: linear-gradient(180deg, #f97316, #ea580c);
    margin-right: 0.45rem;
    vertical-align: middle;
}

/* Project cards */
.project-card {
    display: grid;
    grid-template-columns: 2.3fr 1fr;
    gap: 1rem;
    border-radius: 18px;
    padding: 1.3rem 1.4rem;
    border: 1px solid rgba(55, 65, 81, 0.8);
    background: #020617;
    box-shadow: 0 18px 45px rgba(15, 23, 42, 0.9);
    margin-bottom: 1rem;
    transition: transform 140ms ease-out, box-shadow 140ms ease-out, border-color 140ms ease-out;
}
.project-card:hover {
    transform: translateY(-3px);
    border-color: rgba(248, 153, 59, 0.9);
    box-shadow: 0 26px 60px rgba(15, 23, 42, 0.98);
}
.project-title {
    font-size: 1.05rem;
    font-weight: 600;
    margin-bottom: 0.1rem;
    color: #e5e7eb;
}
.project-tagline {
    font-size: 0.86rem;
    color: #9ca3af;
    margin-bottom: 0.45rem;
}
.project-description {
    font-size: 0.9rem;
    color: #d1d5db;
    margin-bottom: 0.3rem;
}
.project-image { width: 100%; border-radius: 12px; }

/* Skills */
.skill-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.skill { margin-bottom: 0.9rem; }
.skill-name {
    font-size: 0.9rem;
    font-weight: 600;
    color: #e5e7eb;
}
.skill-meta {
    font-size: 0.8rem;
    color: #9ca3af;
    margin-bottom: 0.15rem;
}
.skill-progress {
    width: 100%;
    height: 5px;
    border: none;
    border-radius: 999px;
    accent-color: #f97316;
}

/* Blog */
.post-select { display: flex; gap: 0.5rem; align-items: center; margin-bottom: 1rem; }
.post-select select, .post-select button {
    padding: 0.3rem 0.7rem;
    border-radius: 999px;
    background: #0b1120;
    color: #e5e7eb;
    border: 1px solid rgba(248, 153, 59, 0.7);
}
.blog-content h1, .blog-content h2, .blog-content h3 {
    margin-top: 0.9rem;
    color: #e5e7eb;
}
.blog-content p {
    font-size: 0.92rem;
    line-height: 1.7;
    color: #d1d5db;
}

/* Contact */
.columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.phone { margin: 0.2rem 0; }
</style>"#;

/// Stylesheet block included once in every page.
#[must_use]
pub fn inject_global_styles() -> &'static str {
    GLOBAL_STYLES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_style_block() {
        let css = inject_global_styles();

        assert!(css.starts_with("<style>"));
        assert!(css.ends_with("</style>"));
        assert_eq!(css.matches("<style>").count(), 1);
        assert!(std::ptr::eq(css, inject_global_styles()));
    }

    #[test]
    fn test_covers_renderer_classes() {
        let css = inject_global_styles();
        for class in [".hero-card", ".project-card", ".pill", ".skill-grid", ".blog-content", ".sidebar"] {
            assert!(css.contains(class), "missing {class}");
        }
    }
}
