//! Portfolio document model.
//!
//! Every key of the document is optional. Missing sections deserialize to
//! empty values so renderers can always work with a complete tree.

use serde::Deserialize;

use crate::de::{Ordered, Scalar, nullable, opt_count, opt_text, text_list};

/// Root of the configuration document.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    /// Owner profile shown in the hero section and page title.
    #[serde(deserialize_with = "nullable")]
    pub profile: Profile,
    /// Social link buttons (label to URL) in document order.
    #[serde(deserialize_with = "nullable")]
    pub social_links: Ordered<String>,
    /// Headline metrics shown next to the hero card.
    #[serde(deserialize_with = "nullable")]
    pub hero_metrics: Vec<HeroMetric>,
    /// Projects in display order.
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<Project>,
    /// Skill categories in document order.
    #[serde(deserialize_with = "nullable")]
    pub skills: Ordered<SkillCategory>,
    /// Blog posts in document order.
    #[serde(deserialize_with = "nullable")]
    pub blog_posts: Vec<BlogPost>,
    /// Contact details.
    #[serde(deserialize_with = "nullable")]
    pub contact: Contact,
    /// Placeholder copy used when fields are absent.
    #[serde(deserialize_with = "nullable")]
    pub fallbacks: Fallbacks,
}

impl Portfolio {
    /// Parse a portfolio from YAML text.
    ///
    /// Empty documents (blank, comments only, or `null`) produce an empty
    /// portfolio.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or does not match the schema.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if is_blank_document(content) {
            return Ok(Self::default());
        }
        let parsed: Option<Self> = serde_yaml::from_str(content)?;
        Ok(parsed.unwrap_or_default())
    }

    /// Owner name, or the placeholder.
    #[must_use]
    pub fn name(&self) -> &str {
        self.profile.name.as_deref().unwrap_or(&self.fallbacks.name)
    }

    /// Professional title, or the placeholder.
    #[must_use]
    pub fn title(&self) -> &str {
        self.profile.title.as_deref().unwrap_or(&self.fallbacks.title)
    }

    /// Hero summary, or the placeholder.
    #[must_use]
    pub fn summary(&self) -> &str {
        self.profile
            .summary
            .as_deref()
            .unwrap_or(&self.fallbacks.summary)
    }

    /// Browser page title, or the placeholder.
    #[must_use]
    pub fn page_title(&self) -> &str {
        self.profile
            .page_title
            .as_deref()
            .unwrap_or(&self.fallbacks.page_title)
    }

    /// Display title of a project.
    #[must_use]
    pub fn project_title<'a>(&'a self, project: &'a Project) -> &'a str {
        project.name.as_deref().unwrap_or(&self.fallbacks.project)
    }

    /// Display title of a blog post.
    #[must_use]
    pub fn post_title<'a>(&'a self, post: &'a BlogPost) -> &'a str {
        post.title.as_deref().unwrap_or(&self.fallbacks.post)
    }
}

/// True when the document contains nothing but whitespace, comments and
/// document markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}

/// Owner profile.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub summary: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub current_role: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub page_title: Option<String>,
}

/// Labeled headline metric.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HeroMetric {
    #[serde(deserialize_with = "opt_text")]
    pub label: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub value: Option<String>,
    /// Change indicator, e.g. `+12%`.
    #[serde(deserialize_with = "opt_text")]
    pub delta: Option<String>,
}

/// Portfolio project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "opt_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub tagline: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub tech_stack: Vec<String>,
    #[serde(deserialize_with = "text_list")]
    pub metrics: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub links: ProjectLinks,
    /// Image URL or path.
    #[serde(deserialize_with = "opt_text")]
    pub image: Option<String>,
}

/// External links of a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    #[serde(deserialize_with = "opt_text")]
    pub demo: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub github: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub docs: Option<String>,
}

/// Skill category in canonical form.
///
/// The document may give a category either as a bare list of skills or as a
/// mapping with an `items` list; both normalize to this shape.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "CategoryRepr")]
pub struct SkillCategory {
    pub items: Vec<Skill>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryRepr {
    List(Vec<SkillRepr>),
    Grouped {
        #[serde(default)]
        items: Option<Vec<SkillRepr>>,
    },
    Empty(()),
}

impl From<CategoryRepr> for SkillCategory {
    fn from(repr: CategoryRepr) -> Self {
        let items = match repr {
            CategoryRepr::List(items)
            | CategoryRepr::Grouped {
                items: Some(items),
            } => items,
            CategoryRepr::Grouped { items: None } | CategoryRepr::Empty(()) => Vec::new(),
        };
        Self {
            items: items.into_iter().map(Skill::from).collect(),
        }
    }
}

/// Single skill entry in canonical form.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "SkillRepr")]
pub struct Skill {
    pub name: String,
    /// Free-text proficiency, e.g. "Expert" or "Advanced/Expert".
    pub level: Option<String>,
    /// Years of experience in display form.
    pub years: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SkillRepr {
    Bare(Scalar),
    Detailed(DetailedSkill),
}

#[derive(Deserialize)]
struct DetailedSkill {
    #[serde(default, deserialize_with = "opt_text")]
    name: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    level: Option<String>,
    #[serde(default, deserialize_with = "opt_count")]
    years: Option<String>,
}

impl From<SkillRepr> for Skill {
    fn from(repr: SkillRepr) -> Self {
        match repr {
            SkillRepr::Bare(name) => Self {
                name: name.0,
                level: None,
                years: None,
            },
            SkillRepr::Detailed(skill) => Self {
                name: skill.name.unwrap_or_default(),
                level: skill.level,
                years: skill.years,
            },
        }
    }
}

/// Blog post.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    #[serde(deserialize_with = "opt_text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "text_list")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "opt_text")]
    pub content: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub summary: Option<String>,
    /// URL of a README to fetch at render time.
    #[serde(deserialize_with = "opt_text")]
    pub readme_path: Option<String>,
}

/// Where the body of a blog post comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostBody<'a> {
    /// Fetch from this URL.
    Remote(&'a str),
    /// Inline text from the document.
    Inline(&'a str),
    /// No content.
    Empty,
}

impl BlogPost {
    /// Resolve the body: `readme_path`, then `content`, then `summary`.
    #[must_use]
    pub fn body(&self) -> PostBody<'_> {
        if let Some(url) = self.readme_path.as_deref() {
            PostBody::Remote(url)
        } else if let Some(text) = self.content.as_deref().or(self.summary.as_deref()) {
            PostBody::Inline(text)
        } else {
            PostBody::Empty
        }
    }
}

/// Contact details.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Contact {
    #[serde(deserialize_with = "opt_text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub availability: Option<String>,
    /// Booking link.
    #[serde(deserialize_with = "opt_text")]
    pub calendly: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub phone_1: Option<String>,
    #[serde(deserialize_with = "opt_text")]
    pub phone_2: Option<String>,
}

impl Contact {
    /// Configured phone numbers in order.
    pub fn phones(&self) -> impl Iterator<Item = &str> {
        [self.phone_1.as_deref(), self.phone_2.as_deref()]
            .into_iter()
            .flatten()
    }
}

/// Placeholder copy for absent fields.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Fallbacks {
    pub name: String,
    pub title: String,
    pub summary: String,
    pub page_title: String,
    pub project: String,
    pub post: String,
}

impl Default for Fallbacks {
    fn default() -> Self {
        Self {
            name: "Your Name".to_owned(),
            title: "AI/ML Engineer specializing in LLMs & MLOps".to_owned(),
            summary: "I design, build, and deploy AI/ML systems with a focus on large \
                      language models, MLOps, and production-grade data pipelines."
                .to_owned(),
            page_title: "AI/ML Engineer Portfolio".to_owned(),
            project: "Untitled Project".to_owned(),
            post: "Untitled post".to_owned(),
        }
    }
}
