//! Post template, shared by blog posts and standalone pages

use anyhow::Result;

use crate::components::{image_section, Seo};
use crate::content::{CombinedFields, WpMenu};
use crate::helpers::{site_relative, strip_html, url_for};
use crate::image::resolve_media;
use crate::templates::{BannerData, NavData, NavItem, RenderContext};

/// Render a post or page that went through `combine_fields`.
///
/// Head metadata needs both title and excerpt; the banner needs a title.
/// The sidebar lists the leaf entries of `menu`.
pub fn render_post(
    ctx: &RenderContext<'_>,
    fields: &CombinedFields,
    menu: Option<&WpMenu>,
) -> Result<String> {
    let config = ctx.config;
    let seo = Seo::for_fields(fields);
    let mut context = ctx.page_context(seo.as_ref(), &fields.uri);

    let banner = fields.title.as_ref().map(|title| BannerData {
        title: title.clone(),
        image: resolve_media(config, fields.banner_image.as_ref(), "").map(|i| i.src),
        cta_label: config.post.banner_cta.clone(),
        cta_href: url_for(config, &config.contact_path),
        text: fields
            .excerpt
            .as_deref()
            .map(strip_html)
            .filter(|t| !t.is_empty()),
    });
    context.insert("banner", &banner);

    context.insert("nav", &nav_data(ctx, menu));

    let form_action = Some(config.post.form_action.as_str())
        .filter(|a| !a.trim().is_empty())
        .map(|a| url_for(config, a));
    context.insert("form_action", &form_action);

    context.insert("kicker", &config.post.kicker);
    context.insert("title", fields.title.as_deref().unwrap_or_default());
    context.insert("content", &fields.content);

    let sections = fields
        .sections
        .iter()
        .map(|block| image_section::render_block(ctx, block))
        .collect::<Result<Vec<_>>>()?;
    context.insert("sections", &sections);

    ctx.renderer.render("post.html", &context)
}

fn nav_data(ctx: &RenderContext<'_>, menu: Option<&WpMenu>) -> NavData {
    let items = menu
        .map(|m| {
            m.leaf_items()
                .into_iter()
                .map(|item| NavItem {
                    label: item.label.clone(),
                    url: url_for(ctx.config, &site_relative(ctx.config, &item.url)),
                })
                .collect()
        })
        .unwrap_or_default();

    NavData {
        heading: ctx.config.post.sidebar_heading.clone(),
        items,
    }
}
