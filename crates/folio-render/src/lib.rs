//! HTML rendering for Folio.
//!
//! Turns a loaded portfolio document into complete HTML pages:
//!
//! - [`sections`]: one renderer per section (hero, projects, skills, blog, contact)
//! - [`Page`] / [`Session`]: which section to show and which post is open
//! - [`render_page`]: dispatch plus the page chrome (head, sidebar, notices)
//! - [`inject_global_styles`]: the single stylesheet block
//!
//! # Example
//!
//! ```
//! use folio_config::LoadedConfig;
//! use folio_fetch::ContentSource;
//! use folio_render::{Page, Session, render_page};
//!
//! struct Offline;
//!
//! impl ContentSource for Offline {
//!     fn fetch(&self, _url: &str) -> String {
//!         String::new()
//!     }
//! }
//!
//! let html = render_page(&LoadedConfig::default(), &Session::new(Page::Projects), &Offline);
//! assert!(html.contains("Highlighted"));
//! ```

mod html;
mod layout;
mod router;
pub mod sections;
mod style;

pub use html::{escape_html, render_markdown};
pub use router::{Page, Session, UnknownPage, render_page};
pub use sections::skill_tier;
pub use style::inject_global_styles;
