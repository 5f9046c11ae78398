//! Generator module - writes the static site using the built-in templates

use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

use crate::content::{combine_fields, ContentSource, SourceRecord, WpMenu};
use crate::pages::{render_archive, render_post};
use crate::pagination::paginate;
use crate::templates::{RenderContext, TemplateRenderer};
use crate::Site;

/// Static site generator
pub struct Generator {
    site: Site,
    renderer: TemplateRenderer,
}

/// What a generation run produced
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GenerateStats {
    pub archive_pages: usize,
    pub posts: usize,
    pub pages: usize,
    pub assets: usize,
}

impl Generator {
    /// Create a new generator
    pub fn new(site: &Site) -> Result<Self> {
        Ok(Self {
            site: site.clone(),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, content: &dyn ContentSource) -> Result<GenerateStats> {
        fs::create_dir_all(&self.site.public_dir)?;

        let mut stats = GenerateStats {
            assets: self.copy_static_assets()?,
            ..Default::default()
        };

        let ctx = RenderContext::new(&self.site.config, &self.renderer);
        let mut written = HashSet::new();

        stats.archive_pages = self.generate_archive_pages(&ctx, content, &mut written)?;

        let default_menu = self.default_menu(content);

        for post in content.posts() {
            let record = SourceRecord::Post(post);
            if self.generate_record(&ctx, content, record, default_menu, &mut written)? {
                stats.posts += 1;
            }
        }

        for page in content.pages() {
            let record = SourceRecord::Page(page);
            if self.generate_record(&ctx, content, record, default_menu, &mut written)? {
                stats.pages += 1;
            }
        }

        tracing::info!(
            "Generated {} archive page(s), {} post(s), {} page(s)",
            stats.archive_pages,
            stats.posts,
            stats.pages
        );

        Ok(stats)
    }

    /// Generate the paginated blog archive
    fn generate_archive_pages(
        &self,
        ctx: &RenderContext<'_>,
        content: &dyn ContentSource,
        written: &mut HashSet<PathBuf>,
    ) -> Result<usize> {
        let blog = &self.site.config.blog;
        let pages = paginate(content.post_count(), blog.per_page, &blog.path);

        for page in &pages {
            let output = self.output_path(&page.path).ok_or_else(|| {
                anyhow::anyhow!("Blog path {:?} leaves the public directory", blog.path)
            })?;
            let posts = content.posts_page(page.offset, page.limit);
            let html = render_archive(ctx, &posts, page)?;
            self.write(output, html, written)?;
        }

        Ok(pages.len())
    }

    /// Render a post or page; returns false when its output path was taken
    fn generate_record(
        &self,
        ctx: &RenderContext<'_>,
        content: &dyn ContentSource,
        record: SourceRecord<'_>,
        default_menu: Option<&WpMenu>,
        written: &mut HashSet<PathBuf>,
    ) -> Result<bool> {
        let fields = combine_fields(record);

        let menu = match fields.menu.as_deref() {
            Some(name) => match content.menu(name) {
                Ok(menu) => Some(menu),
                Err(e) => {
                    tracing::warn!("{} {}: {}", record.kind(), record.uri(), e);
                    default_menu
                }
            },
            None => default_menu,
        };

        let Some(output) = self.output_path(&fields.uri) else {
            tracing::warn!(
                "Skipping {} {}: uri leaves the public directory",
                record.kind(),
                record.uri()
            );
            return Ok(false);
        };
        if written.contains(&output) {
            tracing::warn!(
                "Skipping {} {}: output already generated",
                record.kind(),
                record.uri()
            );
            return Ok(false);
        }

        let html = render_post(ctx, &fields, menu)?;
        self.write(output, html, written)?;
        Ok(true)
    }

    fn default_menu<'c>(&self, content: &'c dyn ContentSource) -> Option<&'c WpMenu> {
        let name = &self.site.config.post.menu;
        if name.trim().is_empty() {
            return None;
        }
        match content.menu(name) {
            Ok(menu) => Some(menu),
            Err(e) => {
                tracing::warn!("Sidebar navigation will be empty: {}", e);
                None
            }
        }
    }

    /// Output file for a route, or `None` when the route would escape `public_dir`
    fn output_path(&self, uri: &str) -> Option<PathBuf> {
        let mut path = self.site.public_dir.clone();
        for component in Path::new(uri.trim_matches('/')).components() {
            match component {
                Component::Normal(segment) => path.push(segment),
                Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
            }
        }
        Some(path.join("index.html"))
    }

    fn write(
        &self,
        output_path: PathBuf,
        html: String,
        written: &mut HashSet<PathBuf>,
    ) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&output_path, html)?;
        tracing::debug!("Generated: {:?}", output_path);
        written.insert(output_path);
        Ok(())
    }

    /// Copy static assets (images, css) to the public directory
    fn copy_static_assets(&self) -> Result<usize> {
        let static_dir = &self.site.static_dir;
        if !static_dir.exists() {
            return Ok(0);
        }

        let mut copied = 0;
        for entry in WalkDir::new(static_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(static_dir)?;

            // Skip hidden files (.DS_Store, .gitkeep)
            let hidden = relative.components().any(|c| {
                c.as_os_str()
                    .to_str()
                    .map(|s| s.starts_with('.'))
                    .unwrap_or(false)
            });
            if hidden {
                continue;
            }

            let dest = self.site.public_dir.join(relative);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
            copied += 1;
        }

        tracing::debug!("Copied {} static file(s)", copied);
        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, MenuItem, Nodes, PageFields, WpPage, WpPost};
    use std::path::Path;
    use tempfile::TempDir;

    fn post(n: usize) -> WpPost {
        WpPost {
            id: format!("post-{}", n),
            uri: format!("/blog/post-{}/", n),
            title: Some(format!("Post {}", n)),
            date: Some(format!("2021-01-{:02}T12:00:00", n)),
            excerpt: Some(format!("Excerpt {}", n)),
            content: Some(format!("<p>Body {}</p>", n)),
            ..Default::default()
        }
    }

    fn services_menu() -> WpMenu {
        let leaf = MenuItem {
            id: "leaf".to_string(),
            label: "Sod".to_string(),
            url: "/services/sod/".to_string(),
            child_items: Nodes::default(),
        };
        let child = MenuItem {
            child_items: Nodes { nodes: vec![leaf] },
            ..Default::default()
        };
        let top = MenuItem {
            child_items: Nodes { nodes: vec![child] },
            ..Default::default()
        };
        WpMenu {
            name: "services".to_string(),
            menu_items: Nodes { nodes: vec![top] },
        }
    }

    fn site(base: &Path, per_page: usize) -> Site {
        let mut site = Site::new(base).unwrap();
        site.config.blog.per_page = per_page;
        site
    }

    fn read(base: &Path, rel: &str) -> String {
        fs::read_to_string(base.join("public").join(rel)).unwrap()
    }

    #[test]
    fn test_generate_site() {
        let tmp = TempDir::new().unwrap();
        let base = tmp.path();
        fs::create_dir_all(base.join("static/images")).unwrap();
        fs::write(base.join("static/images/logo.svg"), "<svg/>").unwrap();
        fs::write(base.join("static/.DS_Store"), "").unwrap();

        let mut store = ContentStore::new();
        for n in 1..=5 {
            store.insert_post(post(n)).unwrap();
        }
        store
            .insert_page(WpPage {
                uri: "/services/sod/".to_string(),
                title: Some("Sod".to_string()),
                content: Some("<p>Sod page</p>".to_string()),
                ..Default::default()
            })
            .unwrap();
        store.insert_menu(services_menu());

        let site = site(base, 2);
        let stats = Generator::new(&site).unwrap().generate(&store).unwrap();
        assert_eq!(
            stats,
            GenerateStats {
                archive_pages: 3,
                posts: 5,
                pages: 1,
                assets: 1,
            }
        );

        let first = read(base, "blog/index.html");
        assert!(first.contains("Post 5"));
        assert!(first.contains("Post 4"));
        assert!(!first.contains("Post 3"));
        assert!(first.contains(r#"href="/blog/2/""#));

        let last = read(base, "blog/3/index.html");
        assert!(last.contains("Post 1"));
        assert!(!last.contains("Next page"));

        let post = read(base, "blog/post-3/index.html");
        assert!(post.contains("<p>Body 3</p>"));
        assert!(post.contains(r#"href="/services/sod/">Sod</a>"#));

        assert!(read(base, "services/sod/index.html").contains("<p>Sod page</p>"));
        assert!(base.join("public/images/logo.svg").exists());
        assert!(!base.join("public/.DS_Store").exists());
    }

    #[test]
    fn test_generate_empty_site() {
        let tmp = TempDir::new().unwrap();
        let site = site(tmp.path(), 10);
        let stats = Generator::new(&site)
            .unwrap()
            .generate(&ContentStore::new())
            .unwrap();
        assert_eq!(stats.archive_pages, 1);
        assert_eq!(stats.posts, 0);

        let html = read(tmp.path(), "blog/index.html");
        assert!(html.contains("No blog posts found."));
        assert!(!html.contains("<ol"));
    }

    #[test]
    fn test_page_menu_override_falls_back() {
        let tmp = TempDir::new().unwrap();
        let mut store = ContentStore::new();
        store.insert_menu(services_menu());
        store
            .insert_page(WpPage {
                uri: "/about/".to_string(),
                title: Some("About".to_string()),
                page: Some(PageFields {
                    menu: Some("missing".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            })
            .unwrap();

        let site = site(tmp.path(), 10);
        Generator::new(&site).unwrap().generate(&store).unwrap();
        let html = read(tmp.path(), "about/index.html");
        assert!(html.contains(">Sod</a>"));
    }

    #[test]
    fn test_uri_outside_public_dir_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let mut store = ContentStore::new();
        for uri in ["/../escaped/", "/services/../../up/", "/./about/"] {
            store
                .insert_page(WpPage {
                    uri: uri.to_string(),
                    title: Some("Sneaky".to_string()),
                    ..Default::default()
                })
                .unwrap();
        }

        let site = site(tmp.path(), 10);
        let stats = Generator::new(&site).unwrap().generate(&store).unwrap();
        assert_eq!(stats.pages, 1);
        assert!(!tmp.path().join("escaped").exists());
        assert!(!tmp.path().join("up").exists());
        assert!(tmp.path().join("public/about/index.html").exists());
    }

    #[test]
    fn test_record_clashing_with_archive_is_skipped() {
        let tmp = TempDir::new().unwrap();
        let mut store = ContentStore::new();
        store
            .insert_page(WpPage {
                uri: "/blog/".to_string(),
                title: Some("Blog landing".to_string()),
                ..Default::default()
            })
            .unwrap();

        let site = site(tmp.path(), 10);
        let stats = Generator::new(&site).unwrap().generate(&store).unwrap();
        assert_eq!(stats.pages, 0);
        assert!(read(tmp.path(), "blog/index.html").contains("No blog posts found."));
    }
}
