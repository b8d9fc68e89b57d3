//! Translation markup and plural-rule compilers.
//!
//! - [`parse_markup`] turns authoring markup such as
//!   `You have $#n# book|#n# books$` into [`Token`]s.
//! - [`render`] and [`parse_message`] convert between tokens and structured
//!   messages (`{n, plural, one {# book} other {# books}}`).
//! - [`compile_markdown`] replaces inline markdown with numbered
//!   placeholders.
//! - [`parse_rule`], [`simplify`] and [`emit_condition`] compile CLDR plural
//!   rules into condition source for integer counts.
//!
//! # Example
//!
//! ```
//! let message = glossa::to_structured("You have $#x# book|#x# books$").unwrap();
//! assert_eq!(message, "You have {x, plural, one {# book} other {# books}}");
//! ```

pub mod markdown;
pub mod markup;
pub mod message;
pub mod plural;
pub mod pseudo;
pub mod validate;

pub use glossa_semantics::{Operand, PluralCategory, Resolution, Substitution};
pub use markdown::{CompiledMessage, Extraction, PlaceholderMapping, compile_markdown, extract};
pub use markup::{MarkupError, PluralBlock, PluralForm, Token, parse_markup};
pub use message::{Branch, Node, parse_message, render, render_nodes};
pub use plural::{
    AndChain, CldrError, CldrPlurals, DispatchEmitter, OrExpr, PluralRules, Range, Relation,
    RuleError, emit_category_dispatch, emit_condition, parse_rule, simplify, simplify_with,
};
pub use pseudo::pseudo_localize;
pub use validate::{Diagnostic, validate_translation};

/// Parse authoring markup and render it as a structured message.
///
/// # Errors
///
/// Returns the markup parser's error for malformed input.
pub fn to_structured(text: &str) -> Result<String, MarkupError> {
    Ok(render(&parse_markup(text)?))
}

/// Parse authoring markup and compile it with markdown placeholders.
///
/// # Errors
///
/// Returns the markup parser's error for malformed input.
pub fn to_structured_with_markdown(text: &str) -> Result<CompiledMessage, MarkupError> {
    Ok(compile_markdown(&parse_markup(text)?))
}
