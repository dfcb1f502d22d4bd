//! Whole site generation.

use anyhow::{Context, Result, bail};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::article::{Article, load_articles, sort_newest_first, validate_article_id};
use crate::assets::write_css_assets;
use crate::config::Config;
use crate::pages;

/// Outcome of a site generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSummary {
    /// Path of generated listing page
    pub index_path: PathBuf,
    /// Number of article pages written
    pub article_pages: usize,
    /// Ids of articles skipped because they cannot be used as file names
    pub skipped: Vec<String>,
}

/// Generates static site from configuration.
///
/// Loads articles from the configured JSON file and writes the listing
/// page, one page per article and the bundled CSS into the output
/// directory.
///
/// # Errors
///
/// Returns error if articles cannot be loaded, ids are duplicated, or any
/// output file cannot be written.
pub fn generate_site(config: &Config) -> Result<SiteSummary> {
    let articles = load_articles(&config.input).context("Failed to load articles")?;
    info!(
        count = articles.len(),
        input = %config.input.display(),
        "Loaded articles"
    );

    write_site(articles, &config.output, &config.name)
}

/// Writes site for already loaded articles.
///
/// Articles whose id is not usable as a file name are skipped with a
/// warning. Remaining articles are listed newest first.
///
/// # Arguments
///
/// * `articles`: Articles to publish
/// * `output`: Output directory, created if missing
/// * `site_name`: Site name for headers and titles
///
/// # Errors
///
/// Returns error if two articles share an id or a file cannot be written.
pub fn write_site(articles: Vec<Article>, output: &Path, site_name: &str) -> Result<SiteSummary> {
    let (mut articles, skipped) = partition_valid(articles);
    ensure_unique_ids(&articles)?;
    sort_newest_first(&mut articles);

    fs::create_dir_all(output).context("Failed to create output directory")?;
    write_css_assets(&output.join("assets")).context("Failed to write CSS assets")?;

    let article_dir = output.join("article");
    fs::create_dir_all(&article_dir).context("Failed to create article directory")?;

    for article in &articles {
        let html = pages::article::generate(article, site_name);
        let page_path = output.join(article.page_path());
        fs::write(&page_path, html.into_string()).with_context(|| {
            format!("Failed to write article page to {}", page_path.display())
        })?;
        debug!(path = %page_path.display(), "Generated article page");
    }

    info!(count = articles.len(), "Generated article pages");

    let html = pages::index::generate(pages::index::IndexPageData {
        site_name,
        articles: &articles,
    });

    let index_path = output.join("index.html");
    fs::write(&index_path, html.into_string())
        .with_context(|| format!("Failed to write index page to {}", index_path.display()))?;

    info!(path = %index_path.display(), "Generated index page");

    Ok(SiteSummary {
        index_path,
        article_pages: articles.len(),
        skipped,
    })
}

/// Splits articles into publishable ones and ids of rejected ones.
fn partition_valid(articles: Vec<Article>) -> (Vec<Article>, Vec<String>) {
    let mut valid = Vec::with_capacity(articles.len());
    let mut skipped = Vec::new();

    for article in articles {
        match validate_article_id(&article.id) {
            Ok(()) => valid.push(article),
            Err(e) => {
                warn!(title = %article.title, "Skipping article: {:#}", e);
                skipped.push(article.id);
            }
        }
    }

    (valid, skipped)
}

fn ensure_unique_ids(articles: &[Article]) -> Result<()> {
    let mut seen = HashSet::with_capacity(articles.len());
    for article in articles {
        if !seen.insert(article.id.as_str()) {
            bail!("Duplicate article id: {}", article.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::ProcessingStatus;
    use tempfile::TempDir;

    fn sample(id: &str, date: &str) -> Article {
        Article {
            id: id.to_string(),
            title: format!("Paper {}", id),
            authors: vec!["Author".to_string()],
            publication_date: date.to_string(),
            abstract_text: "Abstract".to_string(),
            keywords: vec![],
            source_url: String::new(),
            processing_status: ProcessingStatus::Completed,
            simplified_text: Some("## Summary\nShort **note**.".to_string()),
            created_at: None,
        }
    }

    #[test]
    fn test_write_site_generates_pages() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let articles = vec![sample("a", "2024-01-01"), sample("b", "2024-02-01")];

        // Act
        let summary = write_site(articles, dir.path(), "Papersite")?;

        // Assert
        assert_eq!(summary.article_pages, 2);
        assert!(summary.skipped.is_empty());
        assert!(summary.index_path.exists());
        assert!(dir.path().join("article/a.html").exists());
        assert!(dir.path().join("article/b.html").exists());
        assert!(dir.path().join("assets/site.css").exists());
        assert!(dir.path().join("assets/article.css").exists());

        let index = fs::read_to_string(&summary.index_path)?;
        let newer = index.find("Paper b").expect("Should list b");
        let older = index.find("Paper a").expect("Should list a");
        assert!(newer < older, "Newest article should come first");
        Ok(())
    }

    #[test]
    fn test_write_site_skips_invalid_ids() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let articles = vec![sample("../escape", "2024-01-01"), sample("ok", "2024-01-01")];

        // Act
        let summary = write_site(articles, dir.path(), "Papersite")?;

        // Assert
        assert_eq!(summary.article_pages, 1);
        assert_eq!(summary.skipped, vec!["../escape".to_string()]);
        assert!(!dir.path().join("escape.html").exists());
        Ok(())
    }

    #[test]
    fn test_write_site_rejects_duplicate_ids() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let articles = vec![sample("same", "2024-01-01"), sample("same", "2024-03-01")];

        // Act
        let result = write_site(articles, dir.path(), "Papersite");

        // Assert
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Duplicate article id"));
        Ok(())
    }

    #[test]
    fn test_write_site_empty_collection() -> Result<()> {
        // Arrange
        let dir = TempDir::new()?;

        // Act
        let summary = write_site(Vec::new(), dir.path(), "Papersite")?;

        // Assert
        assert_eq!(summary.article_pages, 0);
        let index = fs::read_to_string(&summary.index_path)?;
        assert!(index.contains("No articles available yet"));
        Ok(())
    }
}
