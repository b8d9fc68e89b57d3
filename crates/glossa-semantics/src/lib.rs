//! Shared plural semantics used by the glossa compilers.
//!
//! This crate centralizes the CLDR plural vocabulary (categories and rule
//! operands) and the integer-domain substitution table, so the rule
//! simplifier, the rule evaluator and the message validator agree on one
//! definition of "what a count looks like".

use std::fmt::{Display, Formatter, Result as FmtResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// CLDR plural categories.
///
/// The declaration order is the dispatch order: emitted category chains test
/// `Zero` first and always fall through to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// Every category, in ordinal order.
    pub const ALL: [PluralCategory; 6] = [
        PluralCategory::Zero,
        PluralCategory::One,
        PluralCategory::Two,
        PluralCategory::Few,
        PluralCategory::Many,
        PluralCategory::Other,
    ];

    /// Resolve a lowercase CLDR category name (`"one"`, `"few"`, ...).
    pub fn from_name(name: &str) -> Option<PluralCategory> {
        match name {
            "zero" => Some(PluralCategory::Zero),
            "one" => Some(PluralCategory::One),
            "two" => Some(PluralCategory::Two),
            "few" => Some(PluralCategory::Few),
            "many" => Some(PluralCategory::Many),
            "other" => Some(PluralCategory::Other),
            _ => None,
        }
    }

    /// The lowercase CLDR name, as used for structured-message branch keys.
    pub fn name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }

    /// The capitalized identifier used in emitted dispatch code.
    pub fn type_name(self) -> &'static str {
        match self {
            PluralCategory::Zero => "Zero",
            PluralCategory::One => "One",
            PluralCategory::Two => "Two",
            PluralCategory::Few => "Few",
            PluralCategory::Many => "Many",
            PluralCategory::Other => "Other",
        }
    }
}

impl Display for PluralCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// A CLDR plural operand.
///
/// See UTS #35, "Plural Operand Meanings": `n` absolute value, `i` integer
/// digits, `v`/`w` visible fraction digit counts, `f`/`t` visible fraction
/// digits, `c`/`e` compact decimal exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operand {
    N,
    I,
    V,
    W,
    F,
    T,
    C,
    E,
}

impl Operand {
    /// Resolve the single-letter operand symbol.
    pub fn from_symbol(symbol: char) -> Option<Operand> {
        match symbol {
            'n' => Some(Operand::N),
            'i' => Some(Operand::I),
            'v' => Some(Operand::V),
            'w' => Some(Operand::W),
            'f' => Some(Operand::F),
            't' => Some(Operand::T),
            'c' => Some(Operand::C),
            'e' => Some(Operand::E),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operand::N => 'n',
            Operand::I => 'i',
            Operand::V => 'v',
            Operand::W => 'w',
            Operand::F => 'f',
            Operand::T => 't',
            Operand::C => 'c',
            Operand::E => 'e',
        }
    }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.symbol())
    }
}

/// What an operand becomes once a [`Substitution`] is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The operand still varies with the count and is written as this operand.
    Variable(Operand),
    /// The operand is the same constant for every value in the domain.
    Constant(u64),
}

/// Operand substitution describing the value domain rules are compiled for.
///
/// Operands listed in `aliases` are rewritten to `canonical`; operands listed
/// in `zeroed` are identically zero. Anything else is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution<'a> {
    pub canonical: Operand,
    pub aliases: &'a [Operand],
    pub zeroed: &'a [Operand],
}

impl Substitution<'static> {
    /// Every value is a non-negative integer count: `i` is `n`, and every
    /// operand describing fraction digits or a compact exponent is zero.
    pub const INTEGER: Substitution<'static> = Substitution {
        canonical: Operand::N,
        aliases: &[Operand::I],
        zeroed: &[
            Operand::V,
            Operand::W,
            Operand::F,
            Operand::T,
            Operand::C,
            Operand::E,
        ],
    };
}

impl Substitution<'_> {
    pub fn resolve(&self, operand: Operand) -> Resolution {
        if self.zeroed.contains(&operand) {
            Resolution::Constant(0)
        } else if self.aliases.contains(&operand) {
            Resolution::Variable(self.canonical)
        } else {
            Resolution::Variable(operand)
        }
    }
}

impl Default for Substitution<'static> {
    fn default() -> Self {
        Substitution::INTEGER
    }
}
