//! Content loader - reads the exported CMS query results

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::ContentError;
use super::menu::WpMenu;
use super::model::{WpPage, WpPost};
use super::store::ContentStore;
use crate::Site;

/// Loads posts, pages and menus from the content directory
///
/// Layout:
/// - `content/posts/*.json`
/// - `content/pages/*.json`
/// - `content/menus/*.json`
///
/// A file may hold a single record, an array of records, or a connection
/// object (`{ "nodes": [...] }`).
pub struct ContentLoader<'a> {
    site: &'a Site,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Load everything into a store
    pub fn load(&self) -> anyhow::Result<ContentStore> {
        let mut store = ContentStore::new();

        for post in self.load_posts()? {
            if let Err(e) = store.insert_post(post) {
                tracing::warn!("Skipping post: {}", e);
            }
        }

        for page in self.load_pages()? {
            if let Err(e) = store.insert_page(page) {
                tracing::warn!("Skipping page: {}", e);
            }
        }

        for menu in self.load_menus()? {
            store.insert_menu(menu);
        }

        Ok(store)
    }

    /// Load all posts from content/posts
    pub fn load_posts(&self) -> anyhow::Result<Vec<WpPost>> {
        let posts: Vec<WpPost> = self.load_dir("posts")?;
        Ok(self.routable(posts, |p| &p.uri, "post"))
    }

    /// Load all pages from content/pages
    pub fn load_pages(&self) -> anyhow::Result<Vec<WpPage>> {
        let pages: Vec<WpPage> = self.load_dir("pages")?;
        Ok(self.routable(pages, |p| &p.uri, "page"))
    }

    /// Load all menus from content/menus
    pub fn load_menus(&self) -> anyhow::Result<Vec<WpMenu>> {
        self.load_dir("menus")
    }

    /// Drop records the router cannot place
    fn routable<T>(&self, records: Vec<T>, uri: impl Fn(&T) -> &String, kind: &str) -> Vec<T> {
        records
            .into_iter()
            .filter(|r| {
                if uri(r).trim().is_empty() {
                    tracing::warn!("Skipping {} without uri", kind);
                    false
                } else {
                    true
                }
            })
            .collect()
    }

    fn load_dir<T: DeserializeOwned>(&self, name: &str) -> anyhow::Result<Vec<T>> {
        let dir = self.site.content_dir.join(name);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let pattern = dir.join("*.json");
        let mut files: Vec<PathBuf> = glob::glob(&pattern.to_string_lossy())?
            .filter_map(|entry| entry.ok())
            .collect();
        files.sort();

        let mut records = Vec::new();
        for path in files {
            match load_file::<T>(&path) {
                Ok(mut loaded) => {
                    tracing::debug!("Loaded {} record(s) from {:?}", loaded.len(), path);
                    records.append(&mut loaded);
                }
                Err(e) => tracing::warn!("{}", e),
            }
        }

        Ok(records)
    }
}

/// Parse one export file into records
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ContentError> {
    let content = fs::read_to_string(path).map_err(|source| ContentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let value: Value = serde_json::from_str(&content).map_err(|source| ContentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    unwrap_records(value)
        .into_iter()
        .map(|v| {
            serde_json::from_value(v).map_err(|source| ContentError::Parse {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}

fn unwrap_records(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("nodes") {
            Some(Value::Array(items)) => items,
            Some(other) => {
                map.insert("nodes".to_string(), other);
                vec![Value::Object(map)]
            }
            None => vec![Value::Object(map)],
        },
        other => vec![other],
    }
}
