//! Integer-domain simplification.
//!
//! Under a [`Substitution`] some operands are constants, so every relation on
//! them is either always true (dropped) or always false (its chain can never
//! hold and is dropped). Operands that still vary are renamed to the
//! table's canonical operand.

use glossa_semantics::{Resolution, Substitution};
use tracing::debug;

use super::ast::{AndChain, OrExpr, Relation};

/// Simplify a rule for integer counts.
///
/// Returns `None` when no chain can ever hold. A rule that always holds
/// comes back as a single empty chain.
pub fn simplify(expr: Option<&OrExpr>) -> Option<OrExpr> {
    simplify_with(expr, &Substitution::INTEGER)
}

/// Simplify a rule under a custom substitution table.
pub fn simplify_with(expr: Option<&OrExpr>, table: &Substitution<'_>) -> Option<OrExpr> {
    let expr = expr?;
    let mut branches = Vec::with_capacity(expr.branches.len());

    for chain in &expr.branches {
        match simplify_chain(chain, table) {
            Some(chain) if chain.relations.is_empty() => return Some(OrExpr::always()),
            Some(chain) => branches.push(chain),
            None => debug!(chain = %chain, "dropping chain that never holds"),
        }
    }

    if branches.is_empty() {
        debug!(rule = %expr, "rule never holds for integer counts");
        return None;
    }
    Some(OrExpr { branches })
}

/// `None` when some relation is always false.
fn simplify_chain(chain: &AndChain, table: &Substitution<'_>) -> Option<AndChain> {
    let mut relations = Vec::with_capacity(chain.relations.len());
    for relation in &chain.relations {
        match table.resolve(relation.operand) {
            Resolution::Constant(value) => {
                if !relation.holds(value) {
                    return None;
                }
            }
            Resolution::Variable(operand) => relations.push(Relation {
                operand,
                ..relation.clone()
            }),
        }
    }
    Some(AndChain { relations })
}
