//! Compiled per-locale plural rules.

use std::collections::BTreeMap;

use glossa_semantics::PluralCategory;
use tracing::{debug, trace};

use super::ast::OrExpr;
use super::emit::DispatchEmitter;
use super::error::CldrError;
use super::parser::parse_rule;
use super::simplify::simplify;

/// The plural rules of one locale, simplified for integer counts.
///
/// Categories whose rule never holds for an integer are left out. `Other`
/// is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralRules {
    locale: String,
    /// `None` marks an unconditional category.
    rules: BTreeMap<PluralCategory, Option<OrExpr>>,
}

impl PluralRules {
    /// Parse and simplify the rule text of every category.
    ///
    /// # Errors
    ///
    /// Returns [`CldrError::Rule`] for the first rule that fails to parse.
    pub fn compile<'a>(
        locale: impl Into<String>,
        rules: impl IntoIterator<Item = (PluralCategory, &'a str)>,
    ) -> Result<Self, CldrError> {
        let locale = locale.into();
        let mut compiled = BTreeMap::new();

        for (category, text) in rules {
            if category == PluralCategory::Other {
                continue;
            }
            let parsed = parse_rule(text).map_err(|source| CldrError::Rule {
                locale: locale.clone(),
                category,
                source,
            })?;
            let Some(expr) = parsed else {
                compiled.insert(category, None);
                continue;
            };
            match simplify(Some(&expr)) {
                Some(simplified) if simplified.is_unconditional() => {
                    compiled.insert(category, None);
                }
                Some(simplified) => {
                    compiled.insert(category, Some(simplified));
                }
                None => debug!(%locale, %category, "omitting category with no integer values"),
            }
        }
        compiled.insert(PluralCategory::Other, None);

        trace!(%locale, categories = compiled.len(), "compiled plural rules");
        Ok(PluralRules {
            locale,
            rules: compiled,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Categories an integer count can select, in ordinal order.
    pub fn categories(&self) -> Vec<PluralCategory> {
        self.rules.keys().copied().collect()
    }

    pub fn contains(&self, category: PluralCategory) -> bool {
        self.rules.contains_key(&category)
    }

    /// The simplified rule of `category`. `None` for unconditional or
    /// omitted categories.
    pub fn rule(&self, category: PluralCategory) -> Option<&OrExpr> {
        self.rules.get(&category).and_then(Option::as_ref)
    }

    pub fn rules(&self) -> &BTreeMap<PluralCategory, Option<OrExpr>> {
        &self.rules
    }

    /// Select the category of the count `n`, in the same order the emitted
    /// dispatch tests them.
    pub fn category_for(&self, n: u64) -> PluralCategory {
        let mut fallback = None;
        for (&category, rule) in &self.rules {
            if category == PluralCategory::Other {
                continue;
            }
            match rule {
                Some(expr) if expr.matches(n) => return category,
                Some(_) => {}
                None => {
                    fallback.get_or_insert(category);
                }
            }
        }
        fallback.unwrap_or(PluralCategory::Other)
    }

    /// Emit the dispatch body for these rules.
    pub fn emit_dispatch(&self, emitter: &DispatchEmitter) -> String {
        emitter.emit(&self.rules)
    }
}
