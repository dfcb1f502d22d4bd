//! Page shell shared by listing and article pages

use maud::{DOCTYPE, Markup, html};

use super::footer::footer;

/// Page-level settings for [`page_shell`]
pub struct PageShell<'a> {
    /// Page title, shown before the site name in the browser tab
    pub title: &'a str,
    /// Site name for the top bar, tab title and footer
    pub site_name: &'a str,
    /// Number of directories between the page and site root
    pub depth: usize,
    /// Stylesheets relative to site root (`assets/site.css`)
    pub stylesheets: &'a [&'a str],
}

impl PageShell<'_> {
    /// Returns `../` prefix leading from the page back to site root.
    pub fn root_prefix(&self) -> String {
        "../".repeat(self.depth)
    }
}

/// Renders a complete HTML document around page content
///
/// Stylesheet paths and the top bar link are rewritten relative to the
/// page's depth, so pages under `article/` reach `assets/` and
/// `index.html` at site root.
///
/// # Arguments
///
/// * `shell`: Title, site name, depth and stylesheets
/// * `body`: Page-specific body markup
///
/// # Returns
///
/// Complete HTML document
pub fn page_shell(shell: &PageShell<'_>, body: Markup) -> Markup {
    let root = shell.root_prefix();

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (shell.title) " - " (shell.site_name) }
                script src="https://unpkg.com/@phosphor-icons/web" {}
                @for stylesheet in shell.stylesheets {
                    link rel="stylesheet" href={ (root) (stylesheet) };
                }
            }
            body {
                nav class="top-bar" {
                    a class="top-bar-brand" href={ (root) "index.html" } {
                        i class="ph ph-book-open" {}
                        (shell.site_name)
                    }
                }
                div class="container" {
                    (body)
                }
                (footer(shell.site_name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_shell_at_root() {
        // Arrange
        let shell = PageShell {
            title: "Articles",
            site_name: "Papersite",
            depth: 0,
            stylesheets: &["assets/site.css"],
        };

        // Act
        let html = page_shell(&shell, html! { p { "content" } }).into_string();

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Articles - Papersite</title>"));
        assert!(html.contains(r#"href="assets/site.css""#));
        assert!(html.contains(r#"class="top-bar-brand" href="index.html""#));
        assert!(html.contains("<p>content</p>"));
        assert!(html.contains("<footer"), "Should include footer");
    }

    #[test]
    fn test_page_shell_nested_page_paths() {
        // Arrange
        let shell = PageShell {
            title: "Paper",
            site_name: "Papersite",
            depth: 1,
            stylesheets: &["assets/site.css", "assets/article.css"],
        };

        // Act
        let html = page_shell(&shell, html! {}).into_string();

        // Assert
        assert_eq!(shell.root_prefix(), "../");
        assert!(html.contains(r#"href="../assets/site.css""#));
        assert!(html.contains(r#"href="../assets/article.css""#));
        assert!(html.contains(r#"href="../index.html""#));
    }
}
