//! Structured-message codec.
//!
//! Structured messages are the ICU-MessageFormat-like strings stored in
//! catalogs: `{name}` variables and `{name, plural, one {...} other {...}}`
//! blocks, with `#` standing for the plural count inside a branch.
//!
//! Serialization ([`render`]) consumes markup tokens. Parsing
//! ([`parse_message`]) is an independent, lenient entry point used on
//! catalog content that may have been edited by hand.

mod node;
mod parser;
mod render;

pub use node::{Branch, Node};
pub use parser::parse_message;
pub use render::{render, render_nodes};
pub(crate) use render::{open_branch, open_plural, push_variable};
