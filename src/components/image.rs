//! Responsive image block

use anyhow::Result;
use tera::Context;

use crate::image::ResolvedImage;
use crate::templates::RenderContext;

/// Render an image block with the given wrapper class
pub fn render_image(ctx: &RenderContext<'_>, image: &ResolvedImage, class: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("image", image);
    context.insert("image_class", class);
    ctx.renderer.render("components/image.html", &context)
}
