//! Token types produced by the markup parser.

use serde::{Deserialize, Serialize};

/// A unit of parsed authoring markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Token {
    /// Literal text, escapes already resolved.
    Text(String),
    /// A `$name$` variable reference.
    Variable(String),
    /// A rendered `#name#` reference to the enclosing plural block's count.
    SelectorRef(String),
    /// A `$...|...$` plural block.
    PluralBlock(PluralBlock),
}

/// A plural block: one selector variable and its per-category forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralBlock {
    /// Name of the count variable selecting the form.
    pub selector: String,
    /// False when the declaring reference was written `#~name#`.
    pub selector_rendered: bool,
    /// True when the block declares an exact-zero form with `#name=0#`.
    pub has_zero_form: bool,
    /// `=0`, `one`, `other` with a zero form; `one`, `other` otherwise.
    pub forms: Vec<PluralForm>,
}

/// One form of a plural block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluralForm {
    pub category: String,
    pub content: Vec<Token>,
}

impl PluralBlock {
    /// Form categories, in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(|form| form.category.as_str())
    }
}
