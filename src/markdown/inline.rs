//! Inline `**strong**` span splitting.

use std::borrow::Cow;

const STRONG_DELIMITER: &str = "**";

/// Piece of a line after emphasis splitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Literal text, possibly empty.
    Plain(&'a str),
    /// Emphasized text with its `**` delimiters stripped.
    Strong(Cow<'a, str>),
}

/// Splits a line into plain and strong fragments.
///
/// The line is split around every `**<non-asterisks>**` span, matched
/// left to right without nesting; the first completed span wins. Each
/// resulting segment that both starts and ends with `**` is strong, with
/// every `**` removed from its text. This covers matched spans as well as
/// wider segments such as `**n*m**`. Segments shorter than two delimiters
/// (a bare `**` or `***`) stay literal, as does any unterminated `**`.
/// Other text is kept verbatim, including empty fragments at line
/// boundaries or between adjacent spans.
///
/// # Examples
///
/// ```
/// use papersite::markdown::{Fragment, split_emphasis};
///
/// assert_eq!(
///     split_emphasis("Some **bold** text"),
///     vec![
///         Fragment::Plain("Some "),
///         Fragment::Strong("bold".into()),
///         Fragment::Plain(" text"),
///     ]
/// );
/// ```
pub fn split_emphasis(text: &str) -> Vec<Fragment<'_>> {
    let mut fragments = Vec::new();
    let mut plain_start = 0;
    let mut cursor = 0;

    while let Some(offset) = text[cursor..].find(STRONG_DELIMITER) {
        let open = cursor + offset;
        let body_start = open + STRONG_DELIMITER.len();
        let body_end = text[body_start..]
            .find('*')
            .map_or(text.len(), |p| body_start + p);

        if body_end > body_start && text[body_end..].starts_with(STRONG_DELIMITER) {
            fragments.push(classify_segment(&text[plain_start..open]));
            fragments.push(Fragment::Strong(Cow::Borrowed(&text[body_start..body_end])));
            cursor = body_end + STRONG_DELIMITER.len();
            plain_start = cursor;
        } else {
            // No span opens here, retry one byte later ("***a**" matches at 1)
            cursor = open + 1;
        }
    }

    fragments.push(classify_segment(&text[plain_start..]));
    fragments
}

/// Classifies text between matched spans.
///
/// A segment wrapped in `**` on both ends is strong even when it holds
/// single asterisks; the wrapping needs at least four bytes so the two
/// delimiters cannot overlap.
fn classify_segment(segment: &str) -> Fragment<'_> {
    let wrapped = segment.len() >= 2 * STRONG_DELIMITER.len()
        && segment.starts_with(STRONG_DELIMITER)
        && segment.ends_with(STRONG_DELIMITER);

    if !wrapped {
        return Fragment::Plain(segment);
    }

    let inner = &segment[STRONG_DELIMITER.len()..segment.len() - STRONG_DELIMITER.len()];
    if inner.contains(STRONG_DELIMITER) {
        Fragment::Strong(Cow::Owned(segment.replace(STRONG_DELIMITER, "")))
    } else {
        Fragment::Strong(Cow::Borrowed(inner))
    }
}
