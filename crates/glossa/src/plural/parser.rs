//! Plural-rule parser using winnow.
//!
//! Grammar, after the `@integer`/`@decimal` samples are cut off:
//!
//! ```text
//! condition = and_chain ("or" and_chain)*
//! and_chain = relation ("and" relation)*
//! relation  = operand ("%" number)? ("=" | "!=") range ("," range)*
//! range     = number (".." number)?
//! ```

use glossa_semantics::Operand;
use winnow::ascii::{digit1, multispace0, multispace1};
use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated};
use winnow::error::{ContextError, ErrMode, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::any;

use super::ast::{AndChain, OrExpr, Range, Relation};
use super::error::RuleError;

const SAMPLES_MARKER: char = '@';
const TRAILING: &str = "'and', 'or' or end of rule";

/// Parse the condition of a CLDR plural rule.
///
/// Returns `Ok(None)` when the condition is empty, which is how CLDR writes
/// the unconditional `other` rule.
///
/// # Errors
///
/// Returns a [`RuleError`] positioned at the first token the grammar cannot
/// accept.
pub fn parse_rule(rule: &str) -> Result<Option<OrExpr>, RuleError> {
    let condition = rule
        .find(SAMPLES_MARKER)
        .map_or(rule, |samples| &rule[..samples]);
    if condition.trim().is_empty() {
        return Ok(None);
    }

    let mut remaining = condition;
    match (multispace0, or_expr, multispace0)
        .map(|(_, expr, _)| expr)
        .parse_next(&mut remaining)
    {
        Ok(expr) if remaining.is_empty() => Ok(Some(expr)),
        Ok(_) => Err(classify(condition, remaining, TRAILING)),
        Err(ErrMode::Backtrack(error) | ErrMode::Cut(error)) => {
            Err(classify(condition, remaining, expected_of(&error)))
        }
        Err(ErrMode::Incomplete(_)) => Err(RuleError::UnexpectedEnd {
            expected: TRAILING.to_string(),
        }),
    }
}

/// The innermost description attached to a failed parse.
fn expected_of(error: &ContextError) -> &'static str {
    error
        .context()
        .find_map(|context| match context {
            StrContext::Expected(StrContextValue::Description(description)) => Some(*description),
            _ => None,
        })
        .unwrap_or("relation")
}

/// Turn the failure point into a positioned error.
fn classify(condition: &str, remaining: &str, expected: &str) -> RuleError {
    let rest = remaining.trim_start();
    let offset = condition.len() - rest.len();
    let Some(first) = rest.chars().next() else {
        return RuleError::UnexpectedEnd {
            expected: expected.to_string(),
        };
    };

    match expected {
        "operand" if first.is_alphabetic() => RuleError::UnknownOperand {
            offset,
            name: leading(rest, char::is_alphanumeric),
        },
        "number" | "modulus" if first.is_ascii_digit() => RuleError::InvalidNumber {
            offset,
            text: leading(rest, |c| c.is_ascii_digit()),
        },
        _ => RuleError::UnexpectedToken {
            offset,
            found: leading(rest, |c| !c.is_whitespace()),
            expected: expected.to_string(),
        },
    }
}

fn leading(text: &str, accept: impl Fn(char) -> bool) -> String {
    text.chars().take_while(|&c| accept(c)).collect()
}

fn label(description: &'static str) -> StrContext {
    StrContext::Expected(StrContextValue::Description(description))
}

fn or_expr(input: &mut &str) -> ModalResult<OrExpr> {
    let first = and_chain(input)?;
    let rest: Vec<AndChain> =
        repeat(0.., preceded(keyword("or"), cut_err(and_chain))).parse_next(input)?;

    let mut branches = Vec::with_capacity(rest.len() + 1);
    branches.push(first);
    branches.extend(rest);
    Ok(OrExpr { branches })
}

fn and_chain(input: &mut &str) -> ModalResult<AndChain> {
    let first = relation(input)?;
    let rest: Vec<Relation> =
        repeat(0.., preceded(keyword("and"), cut_err(relation))).parse_next(input)?;

    let mut relations = Vec::with_capacity(rest.len() + 1);
    relations.push(first);
    relations.extend(rest);
    Ok(AndChain { relations })
}

/// A keyword preceded by whitespace.
fn keyword<'i>(word: &'static str) -> impl Parser<&'i str, (), ErrMode<ContextError>> {
    (multispace1, word, multispace0).void()
}

fn relation(input: &mut &str) -> ModalResult<Relation> {
    let operand = operand.context(label("operand")).parse_next(input)?;
    multispace0.parse_next(input)?;
    let modulus = opt(preceded(
        ('%', multispace0),
        cut_err(
            number
                .verify(|modulus: &u64| *modulus != 0)
                .context(label("modulus")),
        ),
    ))
    .parse_next(input)?;
    multispace0.parse_next(input)?;
    let negated = cut_err(alt(("!=".value(true), '='.value(false))))
        .context(label("'=' or '!='"))
        .parse_next(input)?;
    multispace0.parse_next(input)?;
    let ranges = cut_err(separated(1.., range, (multispace0, ',', multispace0)))
        .parse_next(input)?;

    Ok(Relation {
        operand,
        modulus,
        negated,
        ranges,
    })
}

fn operand(input: &mut &str) -> ModalResult<Operand> {
    any.verify_map(Operand::from_symbol).parse_next(input)
}

fn range(input: &mut &str) -> ModalResult<Range> {
    let low = number(input)?;
    let high = opt(preceded("..", cut_err(number))).parse_next(input)?;
    Ok(Range { low, high })
}

fn number(input: &mut &str) -> ModalResult<u64> {
    digit1
        .try_map(str::parse::<u64>)
        .context(label("number"))
        .parse_next(input)
}
