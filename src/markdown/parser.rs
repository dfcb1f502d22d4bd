//! Line oriented block parser.

/// Prefix marking a level-2 heading line.
const HEADING_MARKER: &str = "## ";

/// Prefix marking a bullet list item.
const BULLET_MARKER: &str = "- ";

/// Separator between digits and item text in a numbered list item.
const NUMBERED_SEPARATOR: &str = ". ";

/// Structural block produced by [`parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Level-2 heading with the `## ` marker stripped.
    Heading { text: String },
    /// Single line of prose, may contain `**strong**` spans.
    Paragraph { text: String },
    /// Unordered list items with their `- ` markers stripped.
    BulletList { items: Vec<String> },
    /// Ordered list items with their `<digits>. ` markers stripped.
    NumberedList { items: Vec<String> },
}

/// Parses text into an ordered sequence of block nodes.
///
/// Scans lines once from top to bottom. Blank lines only terminate the
/// preceding block. Headings are detected before lists. Consecutive bullet
/// or numbered lines are grouped into a single list node; a blank or
/// otherwise non-matching line closes the run. Every remaining non-blank
/// line becomes its own paragraph, lines are never merged.
///
/// # Arguments
///
/// * `text`: Simplified explanation text
///
/// # Returns
///
/// Nodes in source order (empty for empty or blank-only input)
///
/// # Examples
///
/// ```
/// use papersite::markdown::{Node, parse};
///
/// let nodes = parse("## Summary\n- first\n- second");
/// assert_eq!(
///     nodes,
///     vec![
///         Node::Heading { text: "Summary".to_string() },
///         Node::BulletList { items: vec!["first".to_string(), "second".to_string()] },
///     ]
/// );
/// ```
pub fn parse(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut lines = text.lines().peekable();

    while let Some(line) = lines.next() {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(heading) = line.strip_prefix(HEADING_MARKER) {
            nodes.push(Node::Heading {
                text: heading.to_string(),
            });
            continue;
        }

        if let Some(first) = bullet_item(line) {
            let mut items = vec![first.to_string()];
            while let Some(item) = lines.peek().copied().and_then(bullet_item) {
                items.push(item.to_string());
                lines.next();
            }
            nodes.push(Node::BulletList { items });
            continue;
        }

        if let Some(first) = numbered_item(line) {
            let mut items = vec![first.to_string()];
            while let Some(item) = lines.peek().copied().and_then(numbered_item) {
                items.push(item.to_string());
                lines.next();
            }
            nodes.push(Node::NumberedList { items });
            continue;
        }

        nodes.push(Node::Paragraph {
            text: line.to_string(),
        });
    }

    nodes
}

/// Returns item text when line is a bullet list item.
///
/// Leading indentation is tolerated. The trimmed line must start with
/// `- `, so a bare `-` or `- ` with nothing after it is not an item.
fn bullet_item(line: &str) -> Option<&str> {
    if !line.trim().starts_with(BULLET_MARKER) {
        return None;
    }
    line.trim_start().strip_prefix(BULLET_MARKER)
}

/// Returns item text when line starts with `<digits>. `.
fn numbered_item(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return None;
    }
    rest.strip_prefix(NUMBERED_SEPARATOR)
}
