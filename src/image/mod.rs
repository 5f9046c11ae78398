//! Image resolution
//!
//! Turns the image data exported by the CMS image pipeline into something a
//! template can print as an `<img>` tag. The transformation itself (resizing,
//! format conversion) happened upstream; this only picks the usable fields
//! and roots relative URLs under the site root.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::{ImageRef, MediaItem};
use crate::helpers::{encode_path, is_absolute, url_for};

/// An image ready for markup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedImage {
    pub src: String,
    pub srcset: Option<String>,
    pub sizes: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: String,
    /// Additional `<source>` entries (modern formats)
    pub sources: Vec<ResolvedSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSource {
    pub srcset: String,
    pub sizes: Option<String>,
    pub mime_type: Option<String>,
}

/// Resolve image data into a displayable image.
///
/// Returns `None` when the data carries no fallback `src`.
pub fn get_image(config: &SiteConfig, image: &ImageRef) -> Option<ResolvedImage> {
    let fallback = image.images.fallback.as_ref()?;
    let src = fallback.src.as_deref().filter(|s| !s.trim().is_empty())?;

    Some(ResolvedImage {
        src: resolve_url(config, src),
        srcset: fallback
            .src_set
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(|s| resolve_srcset(config, s)),
        sizes: fallback.sizes.clone(),
        width: image.width,
        height: image.height,
        alt: String::new(),
        sources: image
            .images
            .sources
            .iter()
            .filter(|s| !s.src_set.trim().is_empty())
            .map(|s| ResolvedSource {
                srcset: resolve_srcset(config, &s.src_set),
                sizes: s.sizes.clone(),
                mime_type: s.mime_type.clone(),
            })
            .collect(),
    })
}

/// Resolve a media item, carrying its alt text (or `default_alt`)
pub fn resolve_media(
    config: &SiteConfig,
    media: Option<&MediaItem>,
    default_alt: &str,
) -> Option<ResolvedImage> {
    let media = media?;
    let mut image = get_image(config, media.image_data()?)?;
    image.alt = media
        .alt_text
        .as_deref()
        .filter(|alt| !alt.trim().is_empty())
        .unwrap_or(default_alt)
        .to_string();
    Some(image)
}

fn resolve_url(config: &SiteConfig, src: &str) -> String {
    if is_absolute(src) {
        src.to_string()
    } else {
        url_for(config, &encode_path(src))
    }
}

/// `a.jpg 200w,\nb.jpg 400w` -> each candidate URL resolved, descriptors kept
fn resolve_srcset(config: &SiteConfig, srcset: &str) -> String {
    srcset
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(|candidate| match candidate.rsplit_once(char::is_whitespace) {
            Some((url, descriptor)) => {
                format!("{} {}", resolve_url(config, url.trim()), descriptor)
            }
            None => resolve_url(config, candidate),
        })
        .collect::<Vec<_>>()
        .join(",\n")
}
