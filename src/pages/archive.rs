//! Blog archive template

use anyhow::Result;

use crate::components::{render_image, Seo};
use crate::content::WpPost;
use crate::helpers::{date_xml, display_date, localize, url_for};
use crate::image::resolve_media;
use crate::pagination::PageContext;
use crate::templates::{ArchivePost, BannerData, PaginationLinks, RenderContext};

/// Render one page of the blog archive.
///
/// An empty `posts` slice renders only the "no posts" message. Posts
/// without a resolvable featured image get no image block, and each
/// pagination link appears only when its cursor is present.
pub fn render_archive(
    ctx: &RenderContext<'_>,
    posts: &[&WpPost],
    page: &PageContext,
) -> Result<String> {
    let config = ctx.config;
    let blog = &config.blog;
    let seo = Seo::new(&blog.seo_title, &blog.seo_description);

    let mut context = ctx.page_context(Some(&seo), &page.path);
    context.insert("empty_message", &blog.empty_message);

    let items = posts
        .iter()
        .map(|post| archive_item(ctx, post))
        .collect::<Result<Vec<_>>>()?;
    context.insert("posts", &items);

    let banner = (!items.is_empty()).then(|| BannerData {
        title: blog.banner_title.clone(),
        image: Some(blog.banner_image.clone())
            .filter(|i| !i.trim().is_empty())
            .map(|i| url_for(config, &i)),
        cta_label: blog.banner_cta.clone(),
        cta_href: url_for(config, &config.contact_path),
        text: Some(blog.banner_text.clone()).filter(|t| !t.trim().is_empty()),
    });
    context.insert("banner", &banner);

    context.insert(
        "pagination",
        &PaginationLinks {
            previous: page.previous().map(|p| url_for(config, p)),
            next: page.next().map(|p| url_for(config, p)),
        },
    );

    ctx.renderer.render("archive.html", &context)
}

fn archive_item(ctx: &RenderContext<'_>, post: &WpPost) -> Result<ArchivePost> {
    let config = ctx.config;
    let node = post.featured_image.as_ref().and_then(|f| f.node.as_ref());

    let image = match resolve_media(config, node, &config.blog.image_alt) {
        Some(image) => Some(render_image(ctx, &image, "stretch")?),
        None => None,
    };

    let date = post.date.as_deref().unwrap_or_default();
    Ok(ArchivePost {
        uri: url_for(config, &post.uri),
        title: post.title.clone().unwrap_or_default(),
        date: display_date(config, date),
        datetime: localize(date, config.tz()).map(|d| date_xml(&d)),
        image,
    })
}
