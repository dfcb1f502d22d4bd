//! Keyword tag and status badge components

use maud::{Markup, html};

use crate::article::ProcessingStatus;

/// Renders keyword tags
///
/// Returns empty markup when there are no keywords so callers can place
/// the component unconditionally.
///
/// # Arguments
///
/// * `keywords`: Article keywords in display order
///
/// # Returns
///
/// Tag list markup
pub fn keyword_tags(keywords: &[String]) -> Markup {
    html! {
        @if !keywords.is_empty() {
            ul class="keyword-tags" {
                @for keyword in keywords {
                    li class="keyword-tag" {
                        i class="ph ph-tag" {}
                        (keyword)
                    }
                }
            }
        }
    }
}

/// Renders processing status badge
///
/// Completed articles need no badge; every other status is shown so
/// readers know why an explanation may be missing.
pub fn status_badge(status: ProcessingStatus) -> Markup {
    html! {
        @if status != ProcessingStatus::Completed {
            span class=(format!("status-badge status-{}", status.label().to_lowercase())) {
                (status.label())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_tags_empty() {
        // Arrange & Act
        let html = keyword_tags(&[]).into_string();

        // Assert
        assert!(html.is_empty());
    }

    #[test]
    fn test_keyword_tags_escapes_text() {
        // Arrange
        let keywords = vec!["nlp".to_string(), "<b>".to_string()];

        // Act
        let html = keyword_tags(&keywords).into_string();

        // Assert
        assert_eq!(html.matches("keyword-tag\"").count(), 2);
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn test_status_badge_hidden_when_completed() {
        // Arrange & Act
        let completed = status_badge(ProcessingStatus::Completed).into_string();
        let pending = status_badge(ProcessingStatus::Pending).into_string();

        // Assert
        assert!(completed.is_empty());
        assert!(pending.contains("status-pending"));
        assert!(pending.contains("Pending"));
    }
}
