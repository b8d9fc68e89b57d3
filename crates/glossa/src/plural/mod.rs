//! CLDR plural-rule compiler.
//!
//! Rule text is parsed into an [`OrExpr`], simplified for integer counts and
//! emitted as boolean condition source plus a category dispatch skeleton.

mod ast;
mod cldr;
mod emit;
mod error;
mod parser;
mod rules;
mod simplify;

pub use ast::{AndChain, OrExpr, Range, Relation};
pub use cldr::CldrPlurals;
pub use emit::{DispatchEmitter, emit_category_dispatch, emit_condition};
pub use error::{CldrError, RuleError};
pub use parser::parse_rule;
pub use rules::PluralRules;
pub use simplify::{simplify, simplify_with};
