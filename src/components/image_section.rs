//! Two-column "image beside text" sections
//!
//! The image sits on the left or right of the text block. On narrow
//! screens the stylesheet stacks the columns with the text first.

use anyhow::Result;
use serde::Serialize;
use tera::Context;

use crate::content::{MediaItem, SectionBlock, Side};
use crate::helpers::url_for;
use crate::image::resolve_media;
use crate::templates::RenderContext;

/// Props of an image section
#[derive(Debug, Clone, Default, Serialize)]
pub struct SectionProps {
    pub subheader: String,
    pub title: String,
    /// Trusted CMS markup, printed unescaped
    pub body: String,
    #[serde(skip)]
    pub image: Option<MediaItem>,
}

impl From<&SectionBlock> for SectionProps {
    fn from(block: &SectionBlock) -> Self {
        Self {
            subheader: block.subheader.clone(),
            title: block.title.clone(),
            body: block.body.clone(),
            image: block.image.clone(),
        }
    }
}

/// Image on the left, text on the right
pub fn image_left(ctx: &RenderContext<'_>, props: &SectionProps) -> Result<String> {
    render_section(ctx, props, Side::Left)
}

/// Text on the left, image on the right
pub fn image_right(ctx: &RenderContext<'_>, props: &SectionProps) -> Result<String> {
    render_section(ctx, props, Side::Right)
}

/// Render a section block placed on a page
pub fn render_block(ctx: &RenderContext<'_>, block: &SectionBlock) -> Result<String> {
    render_section(ctx, &SectionProps::from(block), block.layout)
}

fn render_section(ctx: &RenderContext<'_>, props: &SectionProps, side: Side) -> Result<String> {
    // An unresolvable image drops the image column
    let image = resolve_media(ctx.config, props.image.as_ref(), "");

    let mut context = Context::new();
    context.insert("side", &side);
    context.insert("subheader", &props.subheader);
    context.insert("title", &props.title);
    context.insert("body", &props.body);
    context.insert("image", &image);
    context.insert("image_class", "stretch");
    context.insert("cta_label", &ctx.config.sections.cta_label);
    context.insert("cta_href", &url_for(ctx.config, &ctx.config.contact_path));

    ctx.renderer.render("components/image_section.html", &context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::{ImageFallback, ImageRef, ImageSharp, ImageSources, LocalFile};
    use crate::templates::TemplateRenderer;

    fn valid_image() -> MediaItem {
        MediaItem {
            alt_text: None,
            local_file: Some(LocalFile {
                child_image_sharp: Some(ImageSharp {
                    gatsby_image_data: Some(ImageRef {
                        images: ImageSources {
                            fallback: Some(ImageFallback {
                                src: Some("/static/retaining-wall.jpg".to_string()),
                                ..Default::default()
                            }),
                            sources: Vec::new(),
                        },
                        ..Default::default()
                    }),
                }),
            }),
        }
    }

    fn props(image: Option<MediaItem>) -> SectionProps {
        SectionProps {
            subheader: "S".to_string(),
            title: "T".to_string(),
            body: "<p>B</p>".to_string(),
            image,
        }
    }

    fn render(side: Side, props: &SectionProps) -> String {
        let config = SiteConfig::default();
        let renderer = TemplateRenderer::new().unwrap();
        let ctx = RenderContext::new(&config, &renderer);
        match side {
            Side::Left => image_left(&ctx, props).unwrap(),
            Side::Right => image_right(&ctx, props).unwrap(),
        }
    }

    #[test]
    fn test_section_contains_props_and_raw_body() {
        let html = render(Side::Left, &props(Some(valid_image())));
        assert!(html.contains(r#"<p class="subheader accent">S</p>"#));
        assert!(html.contains(r#"<h2 class="title">T</h2>"#));
        assert!(html.contains("<p>B</p>"));
        assert!(html.contains(r#"src="/static/retaining-wall.jpg""#));
        assert!(html.contains(r#"<a class="btn btn-primary" href="/contact">contact us</a>"#));
    }

    #[test]
    fn test_image_side_order() {
        let left = render(Side::Left, &props(Some(valid_image())));
        assert!(left.find("<img").unwrap() < left.find("subheader").unwrap());

        let right = render(Side::Right, &props(Some(valid_image())));
        assert!(right.find("<img").unwrap() > right.find("subheader").unwrap());
        assert!(right.contains("image-right"));
    }

    #[test]
    fn test_missing_image_omits_block() {
        let html = render(Side::Left, &props(None));
        assert!(!html.contains("<img"));
        assert!(!html.contains("gatsby-image-wrapper"));
        assert!(html.contains("<p>B</p>"));
    }

    #[test]
    fn test_text_fields_are_escaped() {
        let mut p = props(None);
        p.title = "Walls & <steps>".to_string();
        let html = render(Side::Right, &p);
        assert!(html.contains("Walls &amp; &lt;steps&gt;"));
    }

    #[test]
    fn test_render_block_uses_layout() {
        let config = SiteConfig::default();
        let renderer = TemplateRenderer::new().unwrap();
        let ctx = RenderContext::new(&config, &renderer);
        let block = SectionBlock {
            layout: Side::Right,
            title: "Decks".to_string(),
            ..Default::default()
        };
        let html = render_block(&ctx, &block).unwrap();
        assert!(html.contains("image-right"));
        assert!(html.contains("Decks"));
    }
}
