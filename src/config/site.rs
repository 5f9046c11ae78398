//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub description: String,
    pub language: String,
    pub timezone: String,

    // URL
    pub url: String,
    pub root: String,
    /// Origin of the CMS; menu links pointing here are made site-relative
    pub cms_url: String,

    // Directory
    pub content_dir: String,
    pub static_dir: String,
    pub public_dir: String,

    // Writing
    pub date_format: String,
    pub contact_path: String,

    #[serde(default)]
    pub blog: BlogConfig,
    #[serde(default)]
    pub post: PostConfig,
    #[serde(default)]
    pub sections: SectionsConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Project Landscape".to_string(),
            description: String::new(),
            language: "en".to_string(),
            timezone: "America/Edmonton".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),
            cms_url: String::new(),

            content_dir: "content".to_string(),
            static_dir: "static".to_string(),
            public_dir: "public".to_string(),

            date_format: "MMMM DD, YYYY".to_string(),
            contact_path: "/contact".to_string(),

            blog: BlogConfig::default(),
            post: PostConfig::default(),
            sections: SectionsConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the display timezone, falling back to UTC for unknown names
    pub fn tz(&self) -> chrono_tz::Tz {
        match self.timezone.parse::<chrono_tz::Tz>() {
            Ok(tz) => tz,
            Err(_) => {
                if !self.timezone.is_empty() {
                    tracing::warn!("Unknown timezone {:?}, using UTC", self.timezone);
                }
                chrono_tz::UTC
            }
        }
    }
}

/// Blog archive configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// Path prefix of the archive pages
    pub path: String,
    pub per_page: usize,
    pub seo_title: String,
    pub seo_description: String,
    pub banner_title: String,
    pub banner_cta: String,
    pub banner_text: String,
    pub banner_image: String,
    pub empty_message: String,
    pub image_alt: String,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            path: "blog".to_string(),
            per_page: 10,
            seo_title: "Landscaping Blog - Insights From Calgary's Landscaping Company"
                .to_string(),
            seo_description: "With more than two decades of experience, you can trust \
                Project Landscape to provide you with the best landscaping advice."
                .to_string(),
            banner_title: "landscape installation and design advice".to_string(),
            banner_cta: "get free estimate".to_string(),
            banner_text: "At Project Landscape Ltd., our premier landscaping services will \
                increase the value and overall aesthetic of your home. We use quality brands, \
                and unique products to help keep your lawn healthy, and your home looking \
                incredible. This means an overall better living experience for you and your \
                family."
                .to_string(),
            banner_image: "/images/blog-banner.jpg".to_string(),
            empty_message: "No blog posts found. Add posts to your WordPress site and \
                they'll appear here!"
                .to_string(),
            image_alt: "Project landscaping blog".to_string(),
        }
    }
}

/// Post and page template configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PostConfig {
    /// Name of the menu rendered in the sidebar
    pub menu: String,
    pub sidebar_heading: String,
    pub kicker: String,
    pub banner_cta: String,
    /// Form action of the sidebar service form; empty hides the form
    pub form_action: String,
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            menu: "services".to_string(),
            sidebar_heading: "Landscaping Services".to_string(),
            kicker: "from the landscaping experts".to_string(),
            banner_cta: "get free estimate".to_string(),
            form_action: "/contact".to_string(),
        }
    }
}

/// Two-column section configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub cta_label: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            cta_label: "contact us".to_string(),
        }
    }
}
