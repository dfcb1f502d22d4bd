//! Site footer component

use maud::{Markup, html};

/// Renders site footer with tagline and arXiv reference
pub fn footer(site_name: &str) -> Markup {
    html! {
        footer class="site-footer" {
            div class="footer-brand" {
                i class="ph ph-book-open" {}
                span class="footer-name" { (site_name) }
            }
            p class="footer-tagline" {
                "Cutting-edge computer science research, simplified for everyone."
            }
            a class="footer-link" href="https://arxiv.org" target="_blank" rel="noopener noreferrer" {
                "arXiv"
            }
        }
    }
}
