use std::fmt::Write;

use folio_config::{BlogPost, PostBody, Portfolio};
use folio_fetch::ContentSource;

use super::{META_SEPARATOR, caption, info_notice, section_heading};
use crate::html::{escape_html, render_markdown};

const GUIDANCE: &str =
    "Add blog posts in <code>config.yaml</code> under <code>blog_posts</code> (optional).";

/// Render the blog page with post `selected` opened.
///
/// An out-of-range `selected` opens the first post. Posts with a
/// `readme_path` are fetched through `source`.
#[must_use]
pub fn render_blog(portfolio: &Portfolio, selected: usize, source: &dyn ContentSource) -> String {
    let mut out = section_heading("Writing &", "Notes");
    out.push_str(&caption("Deep dives into projects, MLOps, and AI systems thinking."));

    let posts = &portfolio.blog_posts;
    if posts.is_empty() {
        out.push_str(&info_notice(GUIDANCE));
        return out;
    }
    let selected = if selected < posts.len() { selected } else { 0 };

    render_selector(portfolio, selected, &mut out);
    render_post(portfolio, &posts[selected], source, &mut out);

    if posts.len() > 1 {
        out.push_str(r#"<hr><h4>Other articles</h4><ul class="other-articles">"#);
        for (i, post) in posts.iter().enumerate() {
            if i != selected {
                let _ = write!(out, "<li>{}</li>", escape_html(portfolio.post_title(post)));
            }
        }
        out.push_str("</ul>");
    }
    out
}

fn render_selector(portfolio: &Portfolio, selected: usize, out: &mut String) {
    out.push_str(
        r#"<form class="post-select" method="get" action="/blog"><label for="post">Select an article</label><select id="post" name="post">"#,
    );
    for (i, post) in portfolio.blog_posts.iter().enumerate() {
        let marker = if i == selected { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{i}"{marker}>{}</option>"#,
            escape_html(portfolio.post_title(post))
        );
    }
    out.push_str(r#"</select><button type="submit">Read</button></form>"#);
}

fn render_post(portfolio: &Portfolio, post: &BlogPost, source: &dyn ContentSource, out: &mut String) {
    let content = match post.body() {
        PostBody::Remote(url) => {
            tracing::info!(url = %url, "Loading content");
            source.fetch(url)
        }
        PostBody::Inline(text) => text.to_owned(),
        PostBody::Empty => String::new(),
    };

    let _ = write!(
        out,
        r#"<h3 class="post-title">{}</h3>"#,
        escape_html(portfolio.post_title(post))
    );

    let mut meta = Vec::with_capacity(2);
    if let Some(date) = &post.date {
        meta.push(escape_html(date));
    }
    if !post.tags.is_empty() {
        let tags: Vec<String> = post
            .tags
            .iter()
            .map(|tag| format!("<code>{}</code>", escape_html(tag)))
            .collect();
        meta.push(tags.join(", "));
    }
    if !meta.is_empty() {
        let _ = write!(out, r#"<p class="caption">{}</p>"#, meta.join(META_SEPARATOR));
    }

    if !content.is_empty() {
        let _ = write!(out, r#"<div class="blog-content">{}</div>"#, render_markdown(&content));
    }
}
