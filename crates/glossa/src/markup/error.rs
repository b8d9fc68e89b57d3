//! Markup syntax errors.

use thiserror::Error;

/// A syntax error in authoring markup.
///
/// Offsets are character offsets into the parsed string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    #[error("empty message string")]
    Empty,

    /// A `$` block was never closed.
    #[error("unmatched '$' at position {offset}")]
    UnmatchedDelimiter { offset: usize },

    /// A `#` selector reference was never closed.
    #[error("unterminated '#' selector reference at position {offset}")]
    UnterminatedSelector { offset: usize },

    /// A plural block without any `#name#` selector declaration.
    #[error("plural block at position {offset} declares no '#selector#'")]
    MissingSelector { offset: usize },

    /// A selector reference that names a different variable than the block's
    /// declaration.
    #[error(
        "selector reference '#{found}#' at position {offset} does not match block selector '{expected}'"
    )]
    SelectorMismatch {
        expected: String,
        found: String,
        offset: usize,
    },

    /// A plural block with the wrong number of `|`-separated forms.
    #[error(
        "plural block at position {offset} {} requires exactly {expected} forms, got {found}",
        if *expected == 3 { "with =0" } else { "without =0" }
    )]
    FormCount {
        expected: usize,
        found: usize,
        offset: usize,
    },
}
