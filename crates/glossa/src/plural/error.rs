//! Plural-rule error types.

use glossa_semantics::PluralCategory;
use thiserror::Error;

/// A syntax error in plural-rule text. Offsets are byte offsets into the
/// rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("expected {expected} at offset {offset}, found '{found}'")]
    UnexpectedToken {
        offset: usize,
        found: String,
        expected: String,
    },

    #[error("unexpected end of rule, expected {expected}")]
    UnexpectedEnd { expected: String },

    /// A number that does not fit a `u64`, or a zero modulus.
    #[error("invalid number '{text}' at offset {offset}")]
    InvalidNumber { offset: usize, text: String },

    #[error("unknown plural operand '{name}' at offset {offset}")]
    UnknownOperand { offset: usize, name: String },
}

/// Errors reading CLDR plural data.
#[derive(Debug, Error)]
pub enum CldrError {
    #[error("invalid CLDR plural data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown plural category '{name}' for locale '{locale}'")]
    UnknownCategory { locale: String, name: String },

    #[error("no plural rules for locale '{locale}'")]
    UnknownLocale { locale: String },

    #[error("invalid '{category}' rule for locale '{locale}': {source}")]
    Rule {
        locale: String,
        category: PluralCategory,
        #[source]
        source: RuleError,
    },
}
