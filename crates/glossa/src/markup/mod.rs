//! Authoring markup parser.
//!
//! The markup is the compact syntax developers write at call sites:
//! `$name$` inserts a variable, and `$#count# item|#count# items$` declares a
//! plural block whose forms are separated by `|`. The parser produces a flat
//! token stream that the structured-message codec and the markdown compiler
//! consume.

pub mod error;
mod parser;
pub mod token;

pub use error::MarkupError;
pub use parser::parse_markup;
pub use token::{PluralBlock, PluralForm, Token};
