//! Translation checks.
//!
//! A translation is compared against its source message: both must use the
//! same variables, and every plural must carry the forms the target locale
//! can select.

use std::fmt::{Display, Formatter, Result as FmtResult};

use glossa_semantics::PluralCategory;
use serde::{Deserialize, Serialize};
use strsim::levenshtein;
use tracing::trace;

use crate::message::{Node, parse_message};
use crate::plural::PluralRules;

const ZERO_FORM: &str = "=0";

/// A problem found in a translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// The source uses a variable the translation lacks.
    MissingVariable { name: String },
    /// The translation uses a variable the source lacks.
    ExtraVariable {
        name: String,
        /// A missing source variable with a similar name.
        suggestion: Option<String>,
    },
    /// A plural lacks a form the locale selects.
    MissingPluralForm {
        variable: String,
        category: PluralCategory,
    },
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Diagnostic::MissingVariable { name } => {
                write!(f, "translation is missing variable '{{{name}}}'")
            }
            Diagnostic::ExtraVariable {
                name,
                suggestion: Some(suggestion),
            } => write!(
                f,
                "translation uses unknown variable '{{{name}}}', did you mean '{{{suggestion}}}'?"
            ),
            Diagnostic::ExtraVariable {
                name,
                suggestion: None,
            } => write!(f, "translation uses unknown variable '{{{name}}}'"),
            Diagnostic::MissingPluralForm { variable, category } => {
                write!(f, "plural on '{variable}' is missing the '{category}' form")
            }
        }
    }
}

/// Check `translation` against `source`. Both are structured messages and
/// are parsed leniently, so this never fails.
///
/// Plural forms are only checked when `rules` for the target locale are
/// given. An `=0` branch counts as the `zero` form.
pub fn validate_translation(
    source: &str,
    translation: &str,
    rules: Option<&PluralRules>,
) -> Vec<Diagnostic> {
    let source_nodes = parse_message(source);
    let translation_nodes = parse_message(translation);
    let source_variables = Node::variables(&source_nodes);
    let translation_variables = Node::variables(&translation_nodes);

    let missing: Vec<&str> = source_variables
        .iter()
        .copied()
        .filter(|name| !translation_variables.contains(name))
        .collect();

    let mut diagnostics: Vec<Diagnostic> = missing
        .iter()
        .map(|name| Diagnostic::MissingVariable {
            name: (*name).to_string(),
        })
        .collect();

    diagnostics.extend(
        translation_variables
            .iter()
            .copied()
            .filter(|name| !source_variables.contains(name))
            .map(|name| Diagnostic::ExtraVariable {
                name: name.to_string(),
                suggestion: closest(name, &missing),
            }),
    );

    if let Some(rules) = rules {
        check_plural_forms(&translation_nodes, rules, &mut diagnostics);
    }

    trace!(diagnostics = diagnostics.len(), "validated translation");
    diagnostics
}

fn check_plural_forms(nodes: &[Node], rules: &PluralRules, diagnostics: &mut Vec<Diagnostic>) {
    for node in nodes {
        let Node::Plural { variable, branches } = node else {
            continue;
        };

        for category in rules.categories() {
            let present = branches.iter().any(|branch| {
                branch.category == category.name()
                    || (category == PluralCategory::Zero && branch.category == ZERO_FORM)
            });
            if !present {
                diagnostics.push(Diagnostic::MissingPluralForm {
                    variable: variable.clone(),
                    category,
                });
            }
        }

        for branch in branches {
            check_plural_forms(&branch.content, rules, diagnostics);
        }
    }
}

/// The candidate closest to `name`, if it is within a small edit distance.
fn closest(name: &str, candidates: &[&str]) -> Option<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    candidates
        .iter()
        .map(|candidate| (levenshtein(name, candidate), candidate))
        .filter(|&(distance, _)| distance > 0 && distance <= max_distance)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, candidate)| (*candidate).to_string())
}
