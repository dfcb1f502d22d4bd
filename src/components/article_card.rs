//! Article listing card component

use maud::{Markup, html};

use super::keywords::{keyword_tags, status_badge};
use crate::article::Article;

/// Maximum author names shown on a card before the `+N more` suffix
const CARD_AUTHOR_LIMIT: usize = 3;

/// Renders article card for the listing page
///
/// Shows publication date, author count, title, a short author list and
/// the abstract. The whole card links to the article page.
///
/// # Arguments
///
/// * `article`: Article to summarize
/// * `href`: Link to article page relative to current page
///
/// # Returns
///
/// Card markup
pub fn article_card(article: &Article, href: &str) -> Markup {
    html! {
        a class="article-card-link" href=(href) {
            article class="article-card" {
                div class="article-meta" {
                    span class="article-date" {
                        i class="ph ph-calendar" {}
                        (article.formatted_date())
                    }
                    span class="article-author-count" {
                        i class="ph ph-users" {}
                        (article.author_count_label())
                    }
                    (status_badge(article.processing_status))
                }
                h3 class="article-title" { (article.title) }
                p class="article-authors" { (article.author_preview(CARD_AUTHOR_LIMIT)) }
                p class="article-abstract" { (article.abstract_text) }
                (keyword_tags(&article.keywords))
                div class="article-cta" {
                    "Read the simplified version"
                    i class="ph ph-arrow-right" {}
                }
            }
        }
    }
}
