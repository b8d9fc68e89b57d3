//! CLDR supplemental plural data.

use std::collections::BTreeMap;

use glossa_semantics::PluralCategory;
use serde::Deserialize;

use super::error::CldrError;
use super::rules::PluralRules;

const COUNT_PREFIX: &str = "pluralRule-count-";

/// The cardinal rule table of a CLDR `plurals.json` document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CldrPlurals {
    locales: BTreeMap<String, BTreeMap<String, String>>,
}

#[derive(Deserialize)]
struct Document {
    supplemental: Supplemental,
}

#[derive(Deserialize)]
struct Supplemental {
    #[serde(rename = "plurals-type-cardinal")]
    cardinal: BTreeMap<String, BTreeMap<String, String>>,
}

impl CldrPlurals {
    /// Read `supplemental."plurals-type-cardinal"` from CLDR JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CldrError::Json`] when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, CldrError> {
        let document: Document = serde_json::from_str(json)?;
        Ok(CldrPlurals {
            locales: document.supplemental.cardinal,
        })
    }

    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    /// Compile the rules of exactly `locale`. There is no fallback to a
    /// parent locale.
    ///
    /// # Errors
    ///
    /// Returns an error when the locale is absent, a key names an unknown
    /// category, or a rule fails to parse.
    pub fn rules_for(&self, locale: &str) -> Result<PluralRules, CldrError> {
        let entries = self
            .locales
            .get(locale)
            .ok_or_else(|| CldrError::UnknownLocale {
                locale: locale.to_string(),
            })?;

        let rules = entries
            .iter()
            .map(|(key, text)| {
                key.strip_prefix(COUNT_PREFIX)
                    .and_then(PluralCategory::from_name)
                    .map(|category| (category, text.as_str()))
                    .ok_or_else(|| CldrError::UnknownCategory {
                        locale: locale.to_string(),
                        name: key.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        PluralRules::compile(locale, rules)
    }
}
