//! Built-in site templates using the Tera template engine
//!
//! All templates are embedded in the binary. Autoescaping is off: raw CMS
//! markup (post bodies, rich text titles) prints as is, and plain text goes
//! through the `html_escape` filter.

use anyhow::Result;
use chrono::Datelike;
use serde::Serialize;
use std::collections::HashMap;
use tera::{Context, Tera};

use crate::components::Seo;
use crate::config::SiteConfig;
use crate::helpers::{html_escape, meta_generator, url_for};

/// Template renderer with the embedded site templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("site/layout.html")),
            ("archive.html", include_str!("site/archive.html")),
            ("post.html", include_str!("site/post.html")),
            // Partials
            (
                "partials/head.html",
                include_str!("site/partials/head.html"),
            ),
            (
                "partials/banner.html",
                include_str!("site/partials/banner.html"),
            ),
            ("partials/nav.html", include_str!("site/partials/nav.html")),
            (
                "partials/service_form.html",
                include_str!("site/partials/service_form.html"),
            ),
            // Components
            (
                "components/image.html",
                include_str!("site/components/image.html"),
            ),
            (
                "components/image_section.html",
                include_str!("site/components/image_section.html"),
            ),
        ])?;

        tera.register_filter("html_escape", html_escape_filter);

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}

/// Everything a page or component needs to render
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub renderer: &'a TemplateRenderer,
}

impl<'a> RenderContext<'a> {
    pub fn new(config: &'a SiteConfig, renderer: &'a TemplateRenderer) -> Self {
        Self { config, renderer }
    }

    /// Base context shared by full pages
    pub fn page_context(&self, seo: Option<&Seo>, path: &str) -> Context {
        let head_meta = match seo {
            Some(seo) => seo.render(self.config, path),
            None => format!("<title>{}</title>", html_escape(&self.config.title)),
        };

        let mut context = Context::new();
        context.insert("site", &SiteData::new(self.config));
        context.insert("head_meta", &head_meta);
        context.insert("generator", &meta_generator());
        context.insert("current_path", path);
        context
    }
}

/// Tera filter: escape plain text for HTML
fn html_escape_filter(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let escaped = match value {
        tera::Value::String(s) => html_escape(s),
        tera::Value::Null => String::new(),
        other => html_escape(&other.to_string()),
    };
    Ok(tera::Value::String(escaped))
}

/// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct SiteData {
    pub title: String,
    pub language: String,
    pub home: String,
    pub blog: String,
    pub contact: String,
    pub stylesheet: String,
    pub year: i32,
}

impl SiteData {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            title: config.title.clone(),
            language: config.language.clone(),
            home: url_for(config, "/"),
            blog: url_for(config, &crate::pagination::page_path(&config.blog.path, 1)),
            contact: url_for(config, &config.contact_path),
            stylesheet: url_for(config, "/css/style.css"),
            year: chrono::Utc::now().with_timezone(&config.tz()).year(),
        }
    }
}

/// One entry of the archive list
#[derive(Debug, Clone, Serialize)]
pub struct ArchivePost {
    pub uri: String,
    /// Rich text, printed raw
    pub title: String,
    pub date: String,
    pub datetime: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaginationLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BannerData {
    pub title: String,
    pub image: Option<String>,
    pub cta_label: String,
    pub cta_href: String,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavData {
    pub heading: String,
    pub items: Vec<NavItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_load() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_html_escape_filter() {
        let out = html_escape_filter(&tera::Value::String("a < b".into()), &HashMap::new());
        assert_eq!(out.unwrap(), tera::Value::String("a &lt; b".into()));
        let out = html_escape_filter(&tera::Value::Null, &HashMap::new());
        assert_eq!(out.unwrap(), tera::Value::String(String::new()));
        let out = html_escape_filter(&serde_json::json!(800), &HashMap::new());
        assert_eq!(out.unwrap(), tera::Value::String("800".into()));
    }

    #[test]
    fn test_page_context_default_title() {
        let config = SiteConfig::default();
        let renderer = TemplateRenderer::new().unwrap();
        let ctx = RenderContext::new(&config, &renderer);
        let context = ctx.page_context(None, "/");
        let head = context.get("head_meta").unwrap().as_str().unwrap();
        assert_eq!(head, "<title>Project Landscape</title>");
    }
}
