//! Markdown subset rendering for simplified article explanations.
//!
//! Supports exactly four block constructs (level-2 headings, paragraphs,
//! bullet lists and numbered lists) plus `**strong**` inline spans. Input
//! is parsed line by line into [`Node`] values which are then rendered to
//! Maud markup. Every stage is total: unrecognized markup degrades to
//! literal paragraph text.

mod inline;
mod parser;
mod renderer;

pub use inline::{Fragment, split_emphasis};
pub use parser::{Node, parse};
pub use renderer::{render, render_inline, render_node};
