//! URL helper functions

use lazy_static::lazy_static;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use regex::Regex;

use crate::config::SiteConfig;

lazy_static! {
    static ref SCHEME_RE: Regex = Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.-]*:").unwrap();
}

/// Characters escaped inside a single path segment
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Generate a URL with the root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/blog/2/") // -> "/site/blog/2/"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_absolute(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}

/// Rewrite links into the CMS origin so they stay on the static site.
///
/// `https://cms.example.com/services/sod/` becomes `/services/sod/` when
/// `cms_url` is `https://cms.example.com`. Other links pass through.
pub fn site_relative(config: &SiteConfig, link: &str) -> String {
    let cms = config.cms_url.trim_end_matches('/');
    if cms.is_empty() {
        return link.to_string();
    }
    match link.strip_prefix(cms) {
        Some("") => "/".to_string(),
        Some(rest) if rest.starts_with('/') => rest.to_string(),
        _ => link.to_string(),
    }
}

/// Percent-encode each segment of a path, keeping the separators
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
        .collect::<Vec<_>>()
        .join("/")
}

/// Whether a link must be used as is: any scheme (`https:`, `tel:`,
/// `mailto:`), protocol-relative, or fragment-only
pub fn is_absolute(path: &str) -> bool {
    path.starts_with("//") || path.starts_with('#') || SCHEME_RE.is_match(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.url = "https://example.com".to_string();
        config.root = "/site/".to_string();
        config.cms_url = "https://cms.example.com/".to_string();
        config
    }

    #[test]
    fn test_url_for() {
        let config = test_config();
        assert_eq!(url_for(&config, "/contact"), "/site/contact");
        assert_eq!(url_for(&config, "blog/2/"), "/site/blog/2/");
        assert_eq!(url_for(&config, ""), "/site/");
        assert_eq!(url_for(&config, "https://cdn.test/a.jpg"), "https://cdn.test/a.jpg");
    }

    #[test]
    fn test_full_url_for() {
        let config = test_config();
        assert_eq!(
            full_url_for(&config, "/blog/"),
            "https://example.com/site/blog/"
        );
    }

    #[test]
    fn test_site_relative() {
        let config = test_config();
        assert_eq!(
            site_relative(&config, "https://cms.example.com/services/sod/"),
            "/services/sod/"
        );
        assert_eq!(site_relative(&config, "https://cms.example.com"), "/");
        assert_eq!(
            site_relative(&config, "https://cms.example.community/x/"),
            "https://cms.example.community/x/"
        );
        assert_eq!(site_relative(&config, "/already/"), "/already/");
    }

    #[test]
    fn test_links_with_scheme_or_fragment_pass_through() {
        let config = test_config();
        for link in [
            "tel:403-272-8932",
            "mailto:info@example.com",
            "#quote",
            "//cdn.test/a.jpg",
            "HTTPS://example.com/",
        ] {
            assert_eq!(url_for(&config, link), link);
            assert_eq!(full_url_for(&config, link), link);
        }
        assert!(!is_absolute("/services/sod/"));
        assert!(!is_absolute("blog/2/"));
    }

    #[test]
    fn test_encode_path() {
        assert_eq!(
            encode_path("/static/back yard #2.jpg"),
            "/static/back%20yard%20%232.jpg"
        );
    }
}
