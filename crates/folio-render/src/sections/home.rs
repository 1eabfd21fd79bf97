use folio_config::Portfolio;

use super::render_hero;

const OVERVIEW: &str = "<h4>What you will find here</h4>\
<ul class=\"overview\">\
<li>Projects I’ve built end-to-end.</li>\
<li>The skills I use day to day.</li>\
<li>Longer-form notes and blog posts.</li>\
</ul>";

/// Render the landing page: hero plus a short overview.
#[must_use]
pub fn render_home(portfolio: &Portfolio) -> String {
    let mut out = render_hero(portfolio);
    out.push_str(OVERVIEW);
    out
}
