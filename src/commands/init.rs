//! Initialize a new site

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Initialize a new site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("content/posts"))?;
    fs::create_dir_all(target_dir.join("content/pages"))?;
    fs::create_dir_all(target_dir.join("content/menus"))?;
    fs::create_dir_all(target_dir.join("static/css"))?;
    fs::create_dir_all(target_dir.join("static/images"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        tracing::info!("Keeping existing {:?}", config_path);
    } else {
        fs::write(&config_path, DEFAULT_CONFIG)?;
    }

    let menu_path = target_dir.join("content/menus/services.json");
    if !menu_path.exists() {
        fs::write(&menu_path, SAMPLE_MENU)?;
    }

    let post_path = target_dir.join("content/posts/hello-world.json");
    if !post_path.exists() {
        fs::write(&post_path, SAMPLE_POST)?;
    }

    let css_path = target_dir.join("static/css/style.css");
    if !css_path.exists() {
        fs::write(&css_path, "/* site styles */\n")?;
    }

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Site
title: Project Landscape
description: ''
language: en
timezone: America/Edmonton

# URL
url: http://example.com
root: /
# Links in CMS menus that point here are rewritten to site paths
cms_url: ''

# Directory
content_dir: content
static_dir: static
public_dir: public

# Writing
date_format: MMMM DD, YYYY
contact_path: /contact

blog:
  path: blog
  per_page: 10

post:
  menu: services
  sidebar_heading: Landscaping Services
  form_action: /contact

sections:
  cta_label: contact us
"#;

const SAMPLE_MENU: &str = r#"{
  "name": "services",
  "menuItems": {
    "nodes": [
      {
        "id": "services",
        "label": "Services",
        "url": "/services/",
        "childItems": {
          "nodes": [
            {
              "id": "softscape",
              "label": "Softscape",
              "url": "/services/softscape/",
              "childItems": {
                "nodes": [
                  { "id": "sod", "label": "Sod installation", "url": "/services/sod/" }
                ]
              }
            }
          ]
        }
      }
    ]
  }
}
"#;

const SAMPLE_POST: &str = r#"{
  "id": "hello-world",
  "uri": "/blog/hello-world/",
  "title": "Hello world",
  "date": "2021-01-01T09:00:00",
  "excerpt": "<p>Welcome to the blog.</p>",
  "content": "<p>Welcome to the blog.</p>"
}
"#;
