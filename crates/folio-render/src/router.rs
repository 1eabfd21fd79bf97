//! Page selection and dispatch.

use std::fmt;
use std::str::FromStr;

use folio_config::LoadedConfig;
use folio_fetch::ContentSource;

use crate::layout;
use crate::sections::{render_blog, render_contact, render_home, render_projects, render_skills};

/// Top-level page of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    Projects,
    Skills,
    Blog,
    Contact,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Projects,
        Page::Skills,
        Page::Blog,
        Page::Contact,
    ];

    /// Navigation label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Projects => "Projects",
            Page::Skills => "Skills",
            Page::Blog => "Blog",
            Page::Contact => "Contact",
        }
    }

    /// URL path segment; empty for the home page.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Page::Home => "",
            Page::Projects => "projects",
            Page::Skills => "skills",
            Page::Blog => "blog",
            Page::Contact => "contact",
        }
    }

    /// Absolute URL path of the page.
    #[must_use]
    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error for an unrecognized page name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPage(pub String);

impl fmt::Display for UnknownPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown page: {}", self.0)
    }
}

impl std::error::Error for UnknownPage {}

impl FromStr for Page {
    type Err = UnknownPage;

    /// Parse a label or slug, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_matches('/');
        if s.is_empty() {
            return Ok(Page::Home);
        }
        Page::ALL
            .into_iter()
            .find(|page| page.label().eq_ignore_ascii_case(s) || page.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPage(s.to_owned()))
    }
}

/// Per-request view state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Session {
    /// Page being shown.
    pub page: Page,
    /// Index of the selected blog post.
    pub post: usize,
}

impl Session {
    /// Session showing `page` with the first post selected.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self { page, post: 0 }
    }

    /// Select blog post `post`.
    #[must_use]
    pub fn with_post(mut self, post: usize) -> Self {
        self.post = post;
        self
    }
}

/// Render the full HTML document for `session`.
#[must_use]
pub fn render_page(config: &LoadedConfig, session: &Session, source: &dyn ContentSource) -> String {
    let portfolio = &config.portfolio;
    let content = match session.page {
        Page::Home => render_home(portfolio),
        Page::Projects => render_projects(portfolio),
        Page::Skills => render_skills(portfolio),
        Page::Blog => render_blog(portfolio, session.post, source),
        Page::Contact => render_contact(portfolio),
    };
    layout::render_document(config, session.page, &content)
}
