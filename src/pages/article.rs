//! Article detail page generation

use maud::{Markup, html};

use crate::article::Article;
use crate::components::keywords::{keyword_tags, status_badge};
use crate::components::layout::{PageShell, page_shell};
use crate::markdown;

/// Generates article detail page
///
/// Shows article metadata, the original abstract, and the simplified
/// explanation rendered through the markdown subset renderer. The
/// explanation section is omitted when the article has none. Article
/// pages live at `article/<id>.html`, one level below site root.
///
/// # Arguments
///
/// * `article`: Article to display
/// * `site_name`: Site name for title and footer
///
/// # Returns
///
/// Complete HTML markup for article page
pub fn generate(article: &Article, site_name: &str) -> Markup {
    let shell = PageShell {
        title: &article.title,
        site_name,
        depth: 1,
        stylesheets: &["assets/site.css", "assets/article.css"],
    };

    page_shell(
        &shell,
        html! {
            a class="back-link" href="../index.html" {
                i class="ph ph-arrow-left" {}
                "Back to articles"
            }
            article class="article-detail" {
                header class="article-header" {
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
                    h1 class="article-title" { (article.title) }
                    (keyword_tags(&article.keywords))
                    @if !article.authors.is_empty() {
                        div class="article-authors" {
                            h3 { "Authors" }
                            p { (article.authors.join(", ")) }
                        }
                    }
                    @if let Some(url) = article.source_link() {
                        a class="source-link" href=(url) target="_blank" rel="noopener noreferrer" {
                            i class="ph ph-arrow-square-out" {}
                            "View original on arXiv"
                        }
                    }
                }

                section class="original-abstract" {
                    h2 { "Original Abstract" }
                    p { (article.abstract_text) }
                }

                @if let Some(text) = article.simplified_text.as_deref().filter(|_| article.has_explanation()) {
                    section class="simplified-explanation" {
                        h2 class="section-title" { "Simplified Explanation" }
                        div class="explanation-content" {
                            (markdown::render(text))
                        }
                    }
                }
            }
        },
    )
}
