//! Field normalization for the post template
//!
//! Posts and pages arrive in two different shapes: a handful of top-level
//! fields plus a custom field group (`post { ... }` or `page { ... }`) that
//! editors fill in for the banner. The post template renders only
//! [`CombinedFields`], so both shapes are folded into it here.

use chrono::NaiveDateTime;
use serde::Serialize;

use super::model::{MediaItem, SectionBlock, WpPage, WpPost};
use crate::helpers::parse_cms_date;

/// A record the post template can render
#[derive(Debug, Clone, Copy)]
pub enum SourceRecord<'a> {
    Post(&'a WpPost),
    Page(&'a WpPage),
}

impl SourceRecord<'_> {
    pub fn uri(&self) -> &str {
        match self {
            SourceRecord::Post(post) => &post.uri,
            SourceRecord::Page(page) => &page.uri,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            SourceRecord::Post(_) => "post",
            SourceRecord::Page(_) => "page",
        }
    }
}

/// Canonical record rendered by the post template
#[derive(Debug, Clone, Default, Serialize)]
pub struct CombinedFields {
    pub id: String,
    pub uri: String,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: String,
    pub date: Option<NaiveDateTime>,
    #[serde(skip)]
    pub banner_image: Option<MediaItem>,
    /// Menu requested by the record itself, overriding the site default
    pub menu: Option<String>,
    #[serde(skip)]
    pub sections: Vec<SectionBlock>,
}

/// Fold a post or page into the canonical shape.
///
/// Custom field group values win over the top-level ones whenever they are
/// present and not blank. Blank strings become `None`.
pub fn combine_fields(record: SourceRecord<'_>) -> CombinedFields {
    match record {
        SourceRecord::Post(post) => {
            let fields = post.post.as_ref();
            CombinedFields {
                id: post.id.clone(),
                uri: post.uri.clone(),
                title: pick(fields.and_then(|f| f.title.as_deref()), post.title.as_deref()),
                excerpt: pick(
                    fields.and_then(|f| f.excerpt.as_deref()),
                    post.excerpt.as_deref(),
                ),
                content: pick(
                    fields.and_then(|f| f.content.as_deref()),
                    post.content.as_deref(),
                )
                .unwrap_or_default(),
                date: post.date.as_deref().and_then(parse_cms_date),
                banner_image: fields.and_then(|f| f.banner_image.clone()),
                menu: None,
                sections: Vec::new(),
            }
        }
        SourceRecord::Page(page) => {
            let fields = page.page.as_ref();
            CombinedFields {
                id: page.id.clone(),
                uri: page.uri.clone(),
                title: pick(fields.and_then(|f| f.title.as_deref()), page.title.as_deref()),
                excerpt: non_blank(fields.and_then(|f| f.excerpt.as_deref())),
                content: pick(
                    fields.and_then(|f| f.content.as_deref()),
                    page.content.as_deref(),
                )
                .unwrap_or_default(),
                date: page.date.as_deref().and_then(parse_cms_date),
                banner_image: fields.and_then(|f| f.banner_image.clone()),
                menu: non_blank(fields.and_then(|f| f.menu.as_deref())),
                sections: fields.map(|f| f.sections.clone()).unwrap_or_default(),
            }
        }
    }
}

fn pick(preferred: Option<&str>, fallback: Option<&str>) -> Option<String> {
    non_blank(preferred).or_else(|| non_blank(fallback))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(|v| v.to_string())
}
