//! `folio migrate-blog` command implementation.
//!
//! Points the blog at project READMEs instead of inline text by replacing
//! `blog_posts` with a fixed list.

use std::path::PathBuf;

use clap::Args;
use folio_config::{DEFAULT_CONFIG_PATH, RemotePost, replace_blog_posts};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the migrate-blog command.
#[derive(Args)]
pub(crate) struct MigrateBlogArgs {
    /// Path to the portfolio document.
    #[arg(short, long, env = "FOLIO_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

impl MigrateBlogArgs {
    /// Execute the migrate-blog command.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is missing, malformed, or cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let posts = remote_posts();
        replace_blog_posts(&self.config, &posts)?;
        Output::new().migrated(&self.config, posts.len());
        Ok(())
    }
}

fn post(title: &str, date: &str, tags: &[&str], readme_path: &str) -> RemotePost {
    RemotePost {
        title: title.to_owned(),
        date: date.to_owned(),
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
        readme_path: readme_path.to_owned(),
    }
}

fn remote_posts() -> Vec<RemotePost> {
    vec![
        post(
            "Telco Customer Churn Prediction - End-to-End ML Project",
            "2026-01-13",
            &["ML", "MLOps"],
            "https://raw.githubusercontent.com/youssefBedeer/End-to-End-TelcoChurn/main/README.md",
        ),
        post(
            "End-to-End Plant Disease Detection System",
            "2025-06-01",
            &["MLOps", "Computer Vision"],
            "https://raw.githubusercontent.com/youssefBedeer/End-to-End-PlantVillage/main/README.md",
        ),
        post(
            "End-to-End PDF Q&A System",
            "2025-06-01",
            &["LLMs", "RAG"],
            "https://raw.githubusercontent.com/youssefBedeer/RAG-End-to-End/main/README.md",
        ),
    ]
}
