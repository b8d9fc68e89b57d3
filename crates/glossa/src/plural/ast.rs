//! Plural-rule AST.
//!
//! `Display` writes each node back in CLDR rule syntax, so a parsed rule
//! prints as its canonical text.

use std::fmt::{Display, Formatter, Result as FmtResult};

use glossa_semantics::{Operand, Resolution, Substitution};
use serde::{Deserialize, Serialize};

/// A single value `low` or an inclusive span `low..high`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub low: u64,
    pub high: Option<u64>,
}

impl Range {
    pub fn single(value: u64) -> Self {
        Range {
            low: value,
            high: None,
        }
    }

    pub fn span(low: u64, high: u64) -> Self {
        Range {
            low,
            high: Some(high),
        }
    }

    pub fn is_single(&self) -> bool {
        self.high.is_none()
    }

    pub fn contains(&self, value: u64) -> bool {
        match self.high {
            None => value == self.low,
            Some(high) => self.low <= value && value <= high,
        }
    }
}

/// `operand [% modulus] (= | !=) ranges`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub operand: Operand,
    pub modulus: Option<u64>,
    /// True for `!=`.
    pub negated: bool,
    pub ranges: Vec<Range>,
}

impl Relation {
    /// Whether the relation holds when its operand evaluates to `value`.
    pub fn holds(&self, value: u64) -> bool {
        let value = match self.modulus {
            Some(modulus) if modulus != 0 => value % modulus,
            _ => value,
        };
        self.ranges.iter().any(|range| range.contains(value)) != self.negated
    }

    /// Evaluate the relation for the integer count `n`.
    pub fn matches(&self, n: u64) -> bool {
        let value = match Substitution::INTEGER.resolve(self.operand) {
            Resolution::Variable(_) => n,
            Resolution::Constant(value) => value,
        };
        self.holds(value)
    }
}

/// Relations joined by `and`. An empty chain is always true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AndChain {
    pub relations: Vec<Relation>,
}

impl AndChain {
    pub fn matches(&self, n: u64) -> bool {
        self.relations.iter().all(|relation| relation.matches(n))
    }
}

/// Chains joined by `or`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrExpr {
    pub branches: Vec<AndChain>,
}

impl OrExpr {
    /// The expression that holds for every count.
    pub fn always() -> Self {
        OrExpr {
            branches: vec![AndChain::default()],
        }
    }

    /// True when some branch has no relations left to test.
    pub fn is_unconditional(&self) -> bool {
        self.branches.iter().any(|chain| chain.relations.is_empty())
    }

    pub fn matches(&self, n: u64) -> bool {
        self.branches.iter().any(|chain| chain.matches(n))
    }
}

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.high {
            None => write!(f, "{}", self.low),
            Some(high) => write!(f, "{}..{high}", self.low),
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.operand)?;
        if let Some(modulus) = self.modulus {
            write!(f, " % {modulus}")?;
        }
        f.write_str(if self.negated { " != " } else { " = " })?;
        for (index, range) in self.ranges.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{range}")?;
        }
        Ok(())
    }
}

impl Display for AndChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, relation) in self.relations.iter().enumerate() {
            if index > 0 {
                f.write_str(" and ")?;
            }
            write!(f, "{relation}")?;
        }
        Ok(())
    }
}

impl Display for OrExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (index, chain) in self.branches.iter().enumerate() {
            if index > 0 {
                f.write_str(" or ")?;
            }
            write!(f, "{chain}")?;
        }
        Ok(())
    }
}
