//! Document head metadata

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::CombinedFields;
use crate::helpers::{full_url_for, html_escape, open_graph};

/// Title and description of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

impl Seo {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Metadata for a post or page; needs both a title and an excerpt
    pub fn for_fields(fields: &CombinedFields) -> Option<Self> {
        match (&fields.title, &fields.excerpt) {
            (Some(title), Some(excerpt)) => Some(Self::new(title.clone(), excerpt.clone())),
            _ => None,
        }
    }

    /// Head tags for a page at `path`
    pub fn render(&self, config: &SiteConfig, path: &str) -> String {
        let url = full_url_for(config, path);
        let mut tags = vec![
            format!("<title>{}</title>", html_escape(&self.title)),
            format!(
                r#"<meta name="description" content="{}">"#,
                html_escape(&self.description)
            ),
            format!(r#"<link rel="canonical" href="{}">"#, html_escape(&url)),
        ];
        tags.push(open_graph(
            &self.title,
            &self.description,
            &url,
            &config.title,
        ));
        tags.join("\n")
    }
}
