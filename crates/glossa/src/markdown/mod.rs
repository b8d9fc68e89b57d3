//! Inline markdown to numbered placeholders.
//!
//! `Click **here**` becomes `Click <0>here</0>` plus a mapping from `0` to
//! `<strong>`/`</strong>`, so translators see markers rather than markup.

mod compile;
mod extract;

use serde::{Deserialize, Serialize};

pub use compile::compile_markdown;
pub use extract::extract;

/// Stands in for a `#` selector reference while the markdown pass runs.
pub(crate) const SENTINEL: char = '\u{FFF2}';

/// The concrete tags behind a `<index>...</index>` placeholder pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceholderMapping {
    pub index: usize,
    pub open_tag: String,
    pub close_tag: String,
}

/// Result of extracting placeholders from one text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub text: String,
    pub mappings: Vec<PlaceholderMapping>,
    /// The first index not used by this run.
    pub next_index: usize,
}

/// A structured message with markdown replaced by placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledMessage {
    pub message: String,
    /// In index order.
    pub mappings: Vec<PlaceholderMapping>,
}
