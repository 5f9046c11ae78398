//! In-memory content store answering the site's content queries

use indexmap::IndexMap;
use std::collections::HashSet;

use super::error::ContentError;
use super::menu::WpMenu;
use super::model::{WpPage, WpPost};

/// The queries the templates run against the CMS data
pub trait ContentSource {
    /// Posts sorted by date (newest first), `limit` of them after skipping `offset`
    fn posts_page(&self, offset: usize, limit: usize) -> Vec<&WpPost>;

    /// Total number of posts
    fn post_count(&self) -> usize;

    /// All posts, newest first
    fn posts(&self) -> &[WpPost];

    /// All standalone pages
    fn pages(&self) -> &[WpPage];

    /// Look up a menu by name (or its slug)
    fn menu(&self, name: &str) -> Result<&WpMenu, ContentError>;
}

/// Content loaded from the CMS export
#[derive(Debug, Default)]
pub struct ContentStore {
    posts: Vec<WpPost>,
    pages: Vec<WpPage>,
    menus: IndexMap<String, WpMenu>,
    uris: HashSet<String>,
}

impl ContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a post, rejecting uris that are already taken
    pub fn insert_post(&mut self, post: WpPost) -> Result<(), ContentError> {
        self.claim_uri(&post.uri)?;
        // Keep newest first; undated posts sink to the end
        let key = post.published();
        let pos = self
            .posts
            .iter()
            .position(|p| p.published() < key)
            .unwrap_or(self.posts.len());
        self.posts.insert(pos, post);
        Ok(())
    }

    /// Add a page, rejecting uris that are already taken
    pub fn insert_page(&mut self, page: WpPage) -> Result<(), ContentError> {
        self.claim_uri(&page.uri)?;
        self.pages.push(page);
        Ok(())
    }

    /// Add a menu; a later menu with the same name replaces the earlier one
    pub fn insert_menu(&mut self, menu: WpMenu) {
        if let Some(previous) = self.menus.insert(menu.name.clone(), menu) {
            tracing::warn!("Menu {:?} defined twice, keeping the last one", previous.name);
        }
    }

    /// All menus in load order
    pub fn menus(&self) -> impl Iterator<Item = &WpMenu> {
        self.menus.values()
    }

    fn claim_uri(&mut self, uri: &str) -> Result<(), ContentError> {
        let key = normalize_uri(uri);
        if !self.uris.insert(key) {
            return Err(ContentError::DuplicateUri(uri.to_string()));
        }
        Ok(())
    }
}

impl ContentSource for ContentStore {
    fn posts_page(&self, offset: usize, limit: usize) -> Vec<&WpPost> {
        self.posts.iter().skip(offset).take(limit).collect()
    }

    fn post_count(&self) -> usize {
        self.posts.len()
    }

    fn posts(&self) -> &[WpPost] {
        &self.posts
    }

    fn pages(&self) -> &[WpPage] {
        &self.pages
    }

    fn menu(&self, name: &str) -> Result<&WpMenu, ContentError> {
        if let Some(menu) = self.menus.get(name) {
            return Ok(menu);
        }
        self.menus
            .values()
            .find(|m| m.matches(name))
            .ok_or_else(|| ContentError::MenuNotFound(name.to_string()))
    }
}

/// `/blog/a`, `blog/a/` and `/blog/a/` all address the same output file
fn normalize_uri(uri: &str) -> String {
    uri.trim_matches('/').to_string()
}
