//! CSS asset bundling

use anyhow::{Context, Result};
use std::{fs, path::Path};

const BASE: &str = include_str!("../assets/base.css");
const LAYOUT: &str = include_str!("../assets/components/layout.css");
const TAGS: &str = include_str!("../assets/components/tags.css");

const INDEX_PAGE: &str = include_str!("../assets/page-index.css");
const ARTICLE_PAGE: &str = include_str!("../assets/page-article.css");
const EXPLANATION: &str = include_str!("../assets/explanation.css");

/// Writes all bundled CSS assets to output directory
///
/// `site.css` carries the shared layout and listing styles used by every
/// page; `article.css` adds detail page and explanation styles.
///
/// # Errors
///
/// Returns error if the directory cannot be created or a file cannot be written
pub fn write_css_assets(assets_dir: &Path) -> Result<()> {
    fs::create_dir_all(assets_dir).with_context(|| {
        format!(
            "Failed to create assets directory: {}",
            assets_dir.display()
        )
    })?;

    write_bundled(assets_dir, "site.css", &[BASE, LAYOUT, TAGS, INDEX_PAGE])?;
    write_bundled(assets_dir, "article.css", &[ARTICLE_PAGE, EXPLANATION])?;
    Ok(())
}

fn write_bundled(dir: &Path, name: &str, parts: &[&str]) -> Result<()> {
    let css = parts.join("\n");
    fs::write(dir.join(name), css)
        .with_context(|| format!("Failed to write CSS asset: {}", name))?;
    Ok(())
}
