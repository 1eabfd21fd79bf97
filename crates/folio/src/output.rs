//! Colored terminal output for Folio commands.

use std::path::Path;

use console::{Style, Term};

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    green: Style,
    yellow: Style,
    red: Style,
    cyan_bold: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            cyan_bold: Style::new().cyan().bold(),
        }
    }

    /// Print the `folio serve` startup banner.
    pub(crate) fn serve_banner(&self, host: &str, port: u16, config: &Path) {
        self.line(&format!("Starting server on {host}:{port}"));
        self.line(&format!("Configuration: {}", config.display()));
        if !config.exists() {
            self.styled(
                &self.yellow,
                "Configuration file not found, serving placeholder content",
            );
        }
        self.styled(&self.cyan_bold, &format!("Open {}", site_url(host, port)));
    }

    /// Report a finished `blog_posts` rewrite (green).
    pub(crate) fn migrated(&self, config: &Path, posts: usize) {
        self.line(&format!("Wrote {posts} blog posts to {}", config.display()));
        self.styled(&self.green, "Config file updated successfully!");
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        self.styled(&self.red, msg);
    }

    fn line(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    fn styled(&self, style: &Style, msg: &str) {
        let _ = self.term.write_line(&style.apply_to(msg).to_string());
    }
}

/// Browser URL for a bind address.
///
/// Wildcard addresses are shown as `localhost`; IPv6 hosts are bracketed.
fn site_url(host: &str, port: u16) -> String {
    let host = match host {
        "0.0.0.0" | "::" | "[::]" => "localhost".to_owned(),
        h if h.contains(':') && !h.starts_with('[') => format!("[{h}]"),
        h => h.to_owned(),
    };
    format!("http://{host}:{port}/")
}
