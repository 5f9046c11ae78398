//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Site;

/// Remove the generated output
pub fn run(site: &Site) -> Result<()> {
    if site.public_dir.exists() {
        fs::remove_dir_all(&site.public_dir)?;
        tracing::info!("Deleted: {:?}", site.public_dir);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_clean_removes_public_only() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("public/blog")).unwrap();
        fs::create_dir_all(tmp.path().join("content/posts")).unwrap();

        let site = Site::new(tmp.path()).unwrap();
        run(&site).unwrap();
        assert!(!tmp.path().join("public").exists());
        assert!(tmp.path().join("content/posts").exists());

        // cleaning twice is fine
        run(&site).unwrap();
    }
}
