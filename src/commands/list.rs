//! List site content

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::ContentSource;
use crate::helpers::{display_date, strip_html};
use crate::Site;

/// List site content by type
pub fn run(site: &Site, content_type: &str) -> Result<()> {
    let store = ContentLoader::new(site).load()?;

    match content_type {
        "post" | "posts" => {
            println!("Posts ({}):", store.post_count());
            for post in store.posts() {
                let title = strip_html(post.title.as_deref().unwrap_or_default());
                let date = display_date(&site.config, post.date.as_deref().unwrap_or_default());
                let image = if post.featured_image_data().is_some() {
                    " [image]"
                } else {
                    ""
                };
                println!("  {} - {} [{}]{}", date, title, post.uri, image);
            }
        }
        "page" | "pages" => {
            println!("Pages ({}):", store.pages().len());
            for page in store.pages() {
                let title = page.title.as_deref().unwrap_or("(untitled)");
                let sections = page.page.as_ref().map(|p| p.sections.len()).unwrap_or(0);
                println!("  {} [{}] {} section(s)", title, page.uri, sections);
            }
        }
        "menu" | "menus" => {
            let menus: Vec<_> = store.menus().collect();
            println!("Menus ({}):", menus.len());
            for menu in menus {
                let leaves = menu.leaf_items();
                println!("  {} ({} links)", menu.name, leaves.len());
                for item in leaves {
                    println!("    {} -> {}", item.label, item.url);
                }
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: post, page, menu",
                content_type
            );
        }
    }

    Ok(())
}
