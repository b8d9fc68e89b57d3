//! Tests for condition and dispatch emission.

use std::collections::BTreeMap;

use glossa::{
    DispatchEmitter, OrExpr, PluralCategory, emit_category_dispatch, emit_condition, parse_rule,
    simplify,
};

fn rule(text: &str) -> Option<OrExpr> {
    let parsed = parse_rule(text).unwrap();
    simplify(parsed.as_ref()).or(parsed)
}

fn condition(text: &str) -> String {
    emit_condition(rule(text).as_ref()).unwrap()
}

// =========================================================================
// Conditions
// =========================================================================

#[test]
fn test_equality() {
    assert_eq!(condition("n = 1"), "n == 1");
    assert_eq!(condition("n != 1"), "n != 1");
}

#[test]
fn test_value_list() {
    assert_eq!(condition("n = 0,1"), "(n == 0 || n == 1)");
}

#[test]
fn test_range() {
    assert_eq!(condition("n % 100 = 3..10"), "n % 100 >= 3 && n % 100 <= 10");
}

#[test]
fn test_negated_range() {
    assert_eq!(
        condition("n % 100 != 12..14"),
        "(n % 100 < 12 || n % 100 > 14)"
    );
}

#[test]
fn test_negated_value_list() {
    assert_eq!(
        condition("n % 100 != 11,71,91"),
        "(n % 100 != 11 && n % 100 != 71 && n % 100 != 91)"
    );
}

#[test]
fn test_mixed_range_and_value() {
    assert_eq!(
        condition("n % 10 = 3..4,9"),
        "((n % 10 >= 3 && n % 10 <= 4) || n % 10 == 9)"
    );
}

#[test]
fn test_and_chain() {
    assert_eq!(
        condition("n % 10 = 2..4 and n % 100 != 12..14"),
        "n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14)"
    );
}

#[test]
fn test_or_of_single_relations_is_bare() {
    assert_eq!(
        condition("n % 10 = 0 or n % 10 = 5..9"),
        "n % 10 == 0 || n % 10 >= 5 && n % 10 <= 9"
    );
}

#[test]
fn test_or_of_chains_is_parenthesized() {
    assert_eq!(
        condition("n % 10 = 1 and n % 100 != 11 or n % 10 = 2 and n % 100 != 12"),
        "(n % 10 == 1 && n % 100 != 11) || (n % 10 == 2 && n % 100 != 12)"
    );
}

#[test]
fn test_absent_rule_emits_nothing() {
    assert_eq!(emit_condition(None), None);
}

#[test]
fn test_unconditional_rule_emits_true() {
    assert_eq!(emit_condition(Some(&OrExpr::always())), Some("true".to_string()));
}

// =========================================================================
// Dispatch
// =========================================================================

#[test]
fn test_english_dispatch() {
    let rules = BTreeMap::from([
        (PluralCategory::One, rule("i = 1 and v = 0")),
        (PluralCategory::Other, None),
    ]);
    assert_eq!(
        emit_category_dispatch(&rules, "    "),
        "    if (n == 1) return One;\n    return Other;\n"
    );
}

#[test]
fn test_arabic_dispatch() {
    let rules = BTreeMap::from([
        (PluralCategory::Other, None),
        (PluralCategory::Many, rule("n % 100 = 11..99")),
        (PluralCategory::Few, rule("n % 100 = 3..10")),
        (PluralCategory::Two, rule("n = 2")),
        (PluralCategory::One, rule("n = 1")),
        (PluralCategory::Zero, rule("n = 0")),
    ]);
    let emitter = DispatchEmitter::builder()
        .indent("")
        .category_prefix("PluralCategory.")
        .build();
    insta::assert_snapshot!(emitter.emit(&rules).trim_end(), @r"
    if (n == 0) return PluralCategory.Zero;
    if (n == 1) return PluralCategory.One;
    if (n == 2) return PluralCategory.Two;
    if (n % 100 >= 3 && n % 100 <= 10) return PluralCategory.Few;
    if (n % 100 >= 11 && n % 100 <= 99) return PluralCategory.Many;
    return PluralCategory.Other;
    ");
}

#[test]
fn test_russian_dispatch() {
    let rules = BTreeMap::from([
        (PluralCategory::One, rule("v = 0 and i % 10 = 1 and i % 100 != 11")),
        (
            PluralCategory::Few,
            rule("v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
        ),
        (
            PluralCategory::Many,
            rule("v = 0 and i % 10 = 0 or v = 0 and i % 10 = 5..9 or v = 0 and i % 100 = 11..14"),
        ),
        (PluralCategory::Other, None),
    ]);
    insta::assert_snapshot!(emit_category_dispatch(&rules, "").trim_end(), @r"
    if (n % 10 == 1 && n % 100 != 11) return One;
    if (n % 10 >= 2 && n % 10 <= 4 && (n % 100 < 12 || n % 100 > 14)) return Few;
    if (n % 10 == 0 || n % 10 >= 5 && n % 10 <= 9 || n % 100 >= 11 && n % 100 <= 14) return Many;
    return Other;
    ");
}

#[test]
fn test_unconditional_category_is_last_check() {
    let rules = BTreeMap::from([
        (PluralCategory::One, None),
        (PluralCategory::Zero, rule("n = 0")),
        (PluralCategory::Few, Some(OrExpr::always())),
        (PluralCategory::Other, None),
    ]);
    assert_eq!(
        emit_category_dispatch(&rules, "  "),
        "  if (n == 0) return Zero;\n  return One;\n  return Other;\n"
    );
}

#[test]
fn test_always_true_rule_dispatches_without_literal() {
    let rules = BTreeMap::from([
        (PluralCategory::One, Some(OrExpr::always())),
        (PluralCategory::Other, None),
    ]);
    let body = emit_category_dispatch(&rules, "");
    assert_eq!(body, "return One;\nreturn Other;\n");
    assert!(!body.contains("true"));
}

#[test]
fn test_only_other() {
    let rules = BTreeMap::from([(PluralCategory::Other, None)]);
    assert_eq!(emit_category_dispatch(&rules, "\t"), "\treturn Other;\n");
}

#[test]
fn test_default_emitter() {
    let emitter = DispatchEmitter::default();
    assert_eq!(emitter.indent(), "    ");
    assert_eq!(emitter.category_prefix(), "");
}
