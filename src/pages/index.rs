//! Article listing page generation

use maud::{Markup, html};

use crate::article::Article;
use crate::components::article_card::article_card;
use crate::components::layout::{PageShell, page_shell};

/// Data container for index page generation
pub struct IndexPageData<'a> {
    pub site_name: &'a str,
    pub articles: &'a [Article],
}

/// Generates article listing page
///
/// Lists every article as a card linking to its detail page, in the order
/// given by the caller. An empty collection renders an empty state
/// message instead of the card grid.
///
/// # Arguments
///
/// * `data`: Index page data container with all required fields
///
/// # Returns
///
/// Complete HTML markup for index page
pub fn generate(data: IndexPageData<'_>) -> Markup {
    let shell = PageShell {
        title: "Articles",
        site_name: data.site_name,
        depth: 0,
        stylesheets: &["assets/site.css"],
    };

    page_shell(
        &shell,
        html! {
            header class="site-header" {
                h1 class="site-name" { (data.site_name) }
                p class="article-count" {
                    @if data.articles.len() == 1 {
                        "1 article"
                    } @else {
                        (data.articles.len()) " articles"
                    }
                }
            }
            main {
                @if data.articles.is_empty() {
                    p class="empty-state" { "No articles available yet" }
                } @else {
                    div class="article-grid" {
                        @for article in data.articles {
                            (article_card(article, &article.page_path()))
                        }
                    }
                }
            }
        },
    )
}
