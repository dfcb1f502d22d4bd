//! Maud rendering for parsed explanation nodes.

use maud::{Markup, html};

use super::{Fragment, Node, parse, split_emphasis};

/// Renders explanation text to HTML markup.
///
/// Parses the text into block nodes and renders each node in order.
/// All text content is escaped by Maud, so raw HTML in the source is
/// displayed literally.
///
/// # Arguments
///
/// * `text`: Simplified explanation text
///
/// # Returns
///
/// Markup with one top-level element per parsed node
///
/// # Examples
///
/// ```
/// use papersite::markdown::render;
///
/// let html = render("## Summary\nSome **bold** text").into_string();
/// assert!(html.contains("<strong>bold</strong>"));
/// ```
pub fn render(text: &str) -> Markup {
    let nodes = parse(text);

    html! {
        @for node in &nodes {
            (render_node(node))
        }
    }
}

/// Renders a single node as exactly one top-level element.
///
/// Headings keep their literal text. Paragraphs and list items go through
/// [`render_inline`] so `**strong**` spans become `<strong>` elements.
///
/// # Arguments
///
/// * `node`: Parsed block node
///
/// # Returns
///
/// Heading, paragraph, unordered list or ordered list markup
pub fn render_node(node: &Node) -> Markup {
    match node {
        Node::Heading { text } => html! {
            h2 class="explanation-heading" { (text) }
        },
        Node::Paragraph { text } => html! {
            p class="explanation-paragraph" { (render_inline(text)) }
        },
        Node::BulletList { items } => html! {
            ul class="explanation-list" {
                @for item in items {
                    li { (render_inline(item)) }
                }
            }
        },
        Node::NumberedList { items } => html! {
            ol class="explanation-list explanation-list-numbered" {
                @for item in items {
                    li { (render_inline(item)) }
                }
            }
        },
    }
}

/// Renders a line with `**strong**` spans as inline markup.
///
/// Empty plain fragments produce no output.
pub fn render_inline(text: &str) -> Markup {
    html! {
        @for fragment in split_emphasis(text) {
            @match fragment {
                Fragment::Plain(plain) => {
                    (plain)
                },
                Fragment::Strong(strong_text) => {
                    strong { (&*strong_text) }
                },
            }
        }
    }
}
