//! Archive pagination
//!
//! Page 1 of an archive lives at `/<prefix>/`, page N at `/<prefix>/N/`.

use serde::Serialize;

/// Routing context handed to one archive page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub page_number: usize,
    pub total_pages: usize,
    pub offset: usize,
    pub limit: usize,
    pub path: String,
    pub previous_page_path: Option<String>,
    pub next_page_path: Option<String>,
}

impl PageContext {
    /// Previous page path, treating an empty cursor as absent
    pub fn previous(&self) -> Option<&str> {
        present(self.previous_page_path.as_deref())
    }

    /// Next page path, treating an empty cursor as absent
    pub fn next(&self) -> Option<&str> {
        present(self.next_page_path.as_deref())
    }
}

/// Split `total` items into archive pages of `per_page`.
///
/// Always yields at least one page so an empty archive still renders.
pub fn paginate(total: usize, per_page: usize, prefix: &str) -> Vec<PageContext> {
    let per_page = per_page.max(1);
    let total_pages = total.div_ceil(per_page).max(1);

    (1..=total_pages)
        .map(|page_number| PageContext {
            page_number,
            total_pages,
            offset: (page_number - 1) * per_page,
            limit: per_page,
            path: page_path(prefix, page_number),
            previous_page_path: (page_number > 1).then(|| page_path(prefix, page_number - 1)),
            next_page_path: (page_number < total_pages)
                .then(|| page_path(prefix, page_number + 1)),
        })
        .collect()
}

/// Path of archive page `n` under `prefix`
pub fn page_path(prefix: &str, n: usize) -> String {
    let prefix = prefix.trim_matches('/');
    match (prefix.is_empty(), n) {
        (true, 1) => "/".to_string(),
        (true, n) => format!("/{}/", n),
        (false, 1) => format!("/{}/", prefix),
        (false, n) => format!("/{}/{}/", prefix, n),
    }
}

fn present(cursor: Option<&str>) -> Option<&str> {
    cursor.filter(|c| !c.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginate_cursors() {
        let pages = paginate(25, 10, "blog");
        assert_eq!(pages.len(), 3);

        assert_eq!(pages[0].path, "/blog/");
        assert_eq!(pages[0].previous(), None);
        assert_eq!(pages[0].next(), Some("/blog/2/"));

        assert_eq!(pages[1].offset, 10);
        assert_eq!(pages[1].previous(), Some("/blog/"));
        assert_eq!(pages[1].next(), Some("/blog/3/"));

        assert_eq!(pages[2].path, "/blog/3/");
        assert_eq!(pages[2].next(), None);
        assert_eq!(pages[2].total_pages, 3);
    }

    #[test]
    fn test_paginate_empty_yields_one_page() {
        let pages = paginate(0, 10, "/blog/");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].path, "/blog/");
        assert!(pages[0].previous().is_none());
        assert!(pages[0].next().is_none());
    }

    #[test]
    fn test_paginate_zero_per_page() {
        let pages = paginate(3, 0, "blog");
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2].offset, 2);
    }

    #[test]
    fn test_empty_cursor_is_absent() {
        let ctx = PageContext {
            page_number: 1,
            total_pages: 1,
            offset: 0,
            limit: 10,
            path: "/blog/".to_string(),
            previous_page_path: Some(String::new()),
            next_page_path: Some("  ".to_string()),
        };
        assert!(ctx.previous().is_none());
        assert!(ctx.next().is_none());
    }

    #[test]
    fn test_page_path_root_prefix() {
        assert_eq!(page_path("", 1), "/");
        assert_eq!(page_path("/", 4), "/4/");
    }
}
