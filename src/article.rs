//! Article records and loading.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Processing state of an article summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessingStatus {
    Pending,
    Processing,
    #[default]
    Completed,
    Failed,
}

impl ProcessingStatus {
    /// Returns display label for status badges.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
        }
    }
}

/// Research article with its simplified explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub authors: Vec<String>,
    pub publication_date: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub processing_status: ProcessingStatus,
    #[serde(default)]
    pub simplified_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Accepted top-level shapes of an articles file.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArticlesFile {
    List(Vec<Article>),
    Wrapped { articles: Vec<Article> },
}

impl Article {
    /// Formats publication date as `DD/MM/YYYY`.
    ///
    /// Accepts ISO dates with an optional time suffix
    /// (`2024-03-15` or `2024-03-15T10:00:00Z`). Returns the raw string
    /// unchanged when it does not start with a `YYYY-MM-DD` date.
    pub fn formatted_date(&self) -> String {
        let date = self.publication_date.get(..10).unwrap_or_default();
        let mut parts = date.splitn(3, '-');

        match (parts.next(), parts.next(), parts.next()) {
            (Some(year), Some(month), Some(day))
                if year.len() == 4
                    && month.len() == 2
                    && day.len() == 2
                    && date.chars().filter(|c| c.is_ascii_digit()).count() == 8 =>
            {
                format!("{}/{}/{}", day, month, year)
            }
            _ => self.publication_date.clone(),
        }
    }

    /// Returns author count label such as `1 author` or `3 authors`.
    pub fn author_count_label(&self) -> String {
        match self.authors.len() {
            1 => "1 author".to_string(),
            n => format!("{} authors", n),
        }
    }

    /// Returns first `limit` author names with a `+N more` suffix.
    ///
    /// # Arguments
    ///
    /// * `limit`: Maximum number of names to list
    pub fn author_preview(&self, limit: usize) -> String {
        let shown = self
            .authors
            .iter()
            .take(limit)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");

        match self.authors.len().saturating_sub(limit) {
            0 => shown,
            hidden => format!("{} +{} more", shown, hidden),
        }
    }

    /// Returns true when a non-blank simplified explanation is present.
    pub fn has_explanation(&self) -> bool {
        self.simplified_text
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }

    /// Returns path of article page relative to site root.
    pub fn page_path(&self) -> String {
        format!("article/{}.html", self.id)
    }

    /// Returns source URL when it is safe to link to.
    ///
    /// Only absolute `http` and `https` URLs qualify; anything else
    /// (relative paths, `javascript:`, `data:`) is not linked.
    pub fn source_link(&self) -> Option<&str> {
        let url = self.source_url.trim();
        let (scheme, rest) = url.split_once("://")?;

        if rest.is_empty()
            || !(scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https"))
        {
            return None;
        }

        Some(url)
    }
}

/// Validates article id for use as an output file name.
///
/// # Errors
///
/// Returns error if id is empty, is a dot segment, or contains characters
/// other than ASCII alphanumerics, `-`, `_` and `.`.
pub fn validate_article_id(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("Article id is empty");
    }

    if id == "." || id.contains("..") {
        bail!("Article id contains dot segments: {}", id);
    }

    if let Some(c) = id
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        bail!("Article id contains invalid character {:?}: {}", c, id);
    }

    Ok(())
}

/// Parses articles from JSON text.
///
/// Accepts either a bare array of articles or an object with an
/// `articles` array.
///
/// # Errors
///
/// Returns error if JSON is malformed or records are missing required fields.
pub fn parse_articles(json: &str) -> Result<Vec<Article>> {
    let file: ArticlesFile = serde_json::from_str(json).context("Invalid articles JSON")?;

    Ok(match file {
        ArticlesFile::List(articles) | ArticlesFile::Wrapped { articles } => articles,
    })
}

/// Loads articles from JSON file.
///
/// # Errors
///
/// Returns error if file cannot be read or parsed.
pub fn load_articles(path: impl AsRef<Path>) -> Result<Vec<Article>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles file: {}", path.display()))?;

    parse_articles(&json).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Sorts articles newest first, ties broken by title.
pub fn sort_newest_first(articles: &mut [Article]) {
    articles.sort_by(|a, b| {
        b.publication_date
            .cmp(&a.publication_date)
            .then_with(|| a.title.cmp(&b.title))
    });
}
