//! Condition and dispatch code emission.
//!
//! Output is plain C-family expression text: `==`, `!=`, `<`, `>`, `<=`,
//! `>=`, `%`, `&&` and `||`, with `n` as the count.

use std::collections::BTreeMap;

use bon::Builder;
use glossa_semantics::PluralCategory;
use tracing::debug;

use super::ast::{AndChain, OrExpr, Range, Relation};

/// Emit the boolean condition for a rule. `None` for an absent rule.
///
/// A chain without relations emits `true`, a host-language literal outside
/// the operator set above. Dispatch bodies never contain it: unconditional
/// categories become a bare `return`.
pub fn emit_condition(expr: Option<&OrExpr>) -> Option<String> {
    let expr = expr?;
    if let [chain] = expr.branches.as_slice() {
        return Some(emit_chain(chain));
    }

    let branches: Vec<String> = expr
        .branches
        .iter()
        .map(|chain| {
            let text = emit_chain(chain);
            if chain.relations.len() > 1 {
                format!("({text})")
            } else {
                text
            }
        })
        .collect();
    Some(branches.join(" || "))
}

fn emit_chain(chain: &AndChain) -> String {
    if chain.relations.is_empty() {
        return "true".to_string();
    }
    chain
        .relations
        .iter()
        .map(emit_relation)
        .collect::<Vec<_>>()
        .join(" && ")
}

fn emit_relation(relation: &Relation) -> String {
    let operand = match relation.modulus {
        Some(modulus) => format!("{} % {modulus}", relation.operand),
        None => relation.operand.to_string(),
    };

    if let [range] = relation.ranges.as_slice() {
        return emit_range(&operand, range, relation.negated);
    }

    let (joiner, parts): (&str, Vec<String>) = if relation.negated {
        (
            " && ",
            relation
                .ranges
                .iter()
                .map(|range| emit_range(&operand, range, true))
                .collect(),
        )
    } else {
        (
            " || ",
            relation
                .ranges
                .iter()
                .map(|range| {
                    let text = emit_range(&operand, range, false);
                    if range.is_single() {
                        text
                    } else {
                        format!("({text})")
                    }
                })
                .collect(),
        )
    };
    format!("({})", parts.join(joiner))
}

fn emit_range(operand: &str, range: &Range, negated: bool) -> String {
    match (range.high, negated) {
        (None, false) => format!("{operand} == {}", range.low),
        (None, true) => format!("{operand} != {}", range.low),
        (Some(high), false) => format!("{operand} >= {} && {operand} <= {high}", range.low),
        (Some(high), true) => format!("({operand} < {} || {operand} > {high})", range.low),
    }
}

/// Emits a category dispatch body: one `if (...) return ...;` line per
/// conditional category, then the fallbacks.
///
/// ```
/// use glossa::DispatchEmitter;
///
/// let emitter = DispatchEmitter::builder()
///     .indent("        ")
///     .category_prefix("PluralCategory.")
///     .build();
/// assert_eq!(emitter.indent(), "        ");
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct DispatchEmitter {
    /// Prefix of every emitted line.
    #[builder(default = "    ".to_string())]
    indent: String,

    /// Qualifier written before each category name, e.g. `PluralCategory.`.
    #[builder(default)]
    category_prefix: String,
}

impl Default for DispatchEmitter {
    fn default() -> Self {
        DispatchEmitter::builder().build()
    }
}

impl DispatchEmitter {
    pub fn indent(&self) -> &str {
        &self.indent
    }

    pub fn category_prefix(&self) -> &str {
        &self.category_prefix
    }

    /// Emit the dispatch for `rules`, where an absent or always-true rule is
    /// unconditional.
    ///
    /// Conditional categories are tested in ordinal order. The first
    /// unconditional category other than `Other` becomes the last check and
    /// `Other` always closes the body.
    pub fn emit(&self, rules: &BTreeMap<PluralCategory, Option<OrExpr>>) -> String {
        let mut out = String::new();
        let mut fallback = None;

        for (&category, rule) in rules {
            if category == PluralCategory::Other {
                continue;
            }
            match rule.as_ref().filter(|expr| !expr.is_unconditional()) {
                Some(expr) => {
                    let condition = emit_condition(Some(expr)).unwrap_or_default();
                    out.push_str(&format!(
                        "{}if ({condition}) return {};\n",
                        self.indent,
                        self.qualified(category)
                    ));
                }
                None if fallback.is_none() => fallback = Some(category),
                None => debug!(%category, "skipping unreachable unconditional category"),
            }
        }

        if let Some(category) = fallback {
            out.push_str(&self.return_line(category));
        }
        out.push_str(&self.return_line(PluralCategory::Other));
        out
    }

    fn return_line(&self, category: PluralCategory) -> String {
        format!("{}return {};\n", self.indent, self.qualified(category))
    }

    fn qualified(&self, category: PluralCategory) -> String {
        format!("{}{}", self.category_prefix, category.type_name())
    }
}

/// Emit a dispatch body with the given indent and unqualified category
/// names.
pub fn emit_category_dispatch(
    rules: &BTreeMap<PluralCategory, Option<OrExpr>>,
    indent: &str,
) -> String {
    DispatchEmitter::builder().indent(indent).build().emit(rules)
}
