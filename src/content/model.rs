//! CMS record models
//!
//! These mirror the shape of the exported CMS query results. Every nested
//! level the CMS may leave out is optional, so a record with `null` or a
//! missing field still loads and simply renders less.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::helpers::parse_cms_date;

/// GraphQL connection wrapper (`{ "nodes": [...] }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nodes<T> {
    #[serde(default)]
    pub nodes: Vec<T>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Responsive image data produced by the image pipeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRef {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub images: ImageSources,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSources {
    #[serde(default)]
    pub fallback: Option<ImageFallback>,
    #[serde(default)]
    pub sources: Vec<ImageSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageFallback {
    #[serde(default)]
    pub src: Option<String>,
    #[serde(default)]
    pub src_set: Option<String>,
    #[serde(default)]
    pub sizes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    #[serde(default)]
    pub src_set: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default, rename = "type")]
    pub mime_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSharp {
    #[serde(default)]
    pub gatsby_image_data: Option<ImageRef>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalFile {
    #[serde(default)]
    pub child_image_sharp: Option<ImageSharp>,
}

/// A media library item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub local_file: Option<LocalFile>,
}

impl MediaItem {
    /// Image data behind `localFile.childImageSharp.gatsbyImageData`
    pub fn image_data(&self) -> Option<&ImageRef> {
        self.local_file
            .as_ref()?
            .child_image_sharp
            .as_ref()?
            .gatsby_image_data
            .as_ref()
    }
}

/// `featuredImage { node { ... } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturedImage {
    #[serde(default)]
    pub node: Option<MediaItem>,
}

/// Custom field group attached to posts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub banner_image: Option<MediaItem>,
}

/// A blog post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WpPost {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uri: String,
    /// Rich text title, may contain inline markup
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub featured_image: Option<FeaturedImage>,
    #[serde(default)]
    pub post: Option<PostFields>,
}

impl WpPost {
    /// Publication date, if the CMS sent a parseable one
    pub fn published(&self) -> Option<NaiveDateTime> {
        self.date.as_deref().and_then(parse_cms_date)
    }

    /// Featured image data, if the post has one
    pub fn featured_image_data(&self) -> Option<&ImageRef> {
        self.featured_image.as_ref()?.node.as_ref()?.image_data()
    }

    /// Alt text of the featured image
    pub fn featured_image_alt(&self) -> Option<&str> {
        self.featured_image
            .as_ref()?
            .node
            .as_ref()?
            .alt_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
    }
}

/// Side of a two-column section the image sits on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Left,
    Right,
}

/// A two-column image/text section placed on a page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionBlock {
    #[serde(default)]
    pub layout: Side,
    #[serde(default)]
    pub subheader: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub image: Option<MediaItem>,
}

/// Custom field group attached to pages
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFields {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub banner_image: Option<MediaItem>,
    /// Name of the navigation menu shown in the sidebar
    #[serde(default)]
    pub menu: Option<String>,
    #[serde(default)]
    pub sections: Vec<SectionBlock>,
}

/// A standalone page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WpPage {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub page: Option<PageFields>,
}
