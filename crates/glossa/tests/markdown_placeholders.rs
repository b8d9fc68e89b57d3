//! Tests for the markdown placeholder compiler.

use glossa::{PlaceholderMapping, compile_markdown, extract, parse_markup, to_structured_with_markdown};

fn mapping(index: usize, open_tag: &str, close_tag: &str) -> PlaceholderMapping {
    PlaceholderMapping {
        index,
        open_tag: open_tag.to_string(),
        close_tag: close_tag.to_string(),
    }
}

// =========================================================================
// Inline Spans
// =========================================================================

#[test]
fn test_bold() {
    let compiled = to_structured_with_markdown("Click **here** to continue").unwrap();
    assert_eq!(compiled.message, "Click <0>here</0> to continue");
    assert_eq!(compiled.mappings, vec![mapping(0, "<strong>", "</strong>")]);
}

#[test]
fn test_italic() {
    let compiled = to_structured_with_markdown("An *important* note").unwrap();
    assert_eq!(compiled.message, "An <0>important</0> note");
    assert_eq!(compiled.mappings, vec![mapping(0, "<em>", "</em>")]);
}

#[test]
fn test_inline_code() {
    let compiled = to_structured_with_markdown("Run `make all` now").unwrap();
    assert_eq!(compiled.message, "Run <0>make all</0> now");
    assert_eq!(compiled.mappings, vec![mapping(0, "<code>", "</code>")]);
}

#[test]
fn test_link() {
    let compiled =
        to_structured_with_markdown("See [the docs](https://example.com/docs) for more").unwrap();
    assert_eq!(compiled.message, "See <0>the docs</0> for more");
    assert_eq!(
        compiled.mappings,
        vec![mapping(0, "<a href=\"https://example.com/docs\">", "</a>")]
    );
}

#[test]
fn test_nested_spans_number_outer_first() {
    let compiled = to_structured_with_markdown("**bold and *nested* text**").unwrap();
    assert_eq!(compiled.message, "<0>bold and <1>nested</1> text</0>");
    assert_eq!(
        compiled.mappings,
        vec![
            mapping(0, "<strong>", "</strong>"),
            mapping(1, "<em>", "</em>"),
        ]
    );
}

#[test]
fn test_variable_inside_span() {
    let compiled = to_structured_with_markdown("Hi **$name$**!").unwrap();
    assert_eq!(compiled.message, "Hi <0>{name}</0>!");
}

#[test]
fn test_plain_text_is_unchanged() {
    let compiled = to_structured_with_markdown("Nothing to see here").unwrap();
    assert_eq!(compiled.message, "Nothing to see here");
    assert!(compiled.mappings.is_empty());
}

#[test]
fn test_backslash_escape() {
    let compiled = to_structured_with_markdown(r"Not \*emphasis\*").unwrap();
    assert_eq!(compiled.message, "Not *emphasis*");
    assert!(compiled.mappings.is_empty());
}

#[test]
fn test_paragraphs_and_line_breaks() {
    assert_eq!(
        to_structured_with_markdown("First\nline\n\nSecond").unwrap().message,
        "First\nline\n\nSecond"
    );
}

#[test]
fn test_line_leading_block_markers_are_text() {
    for input in ["- none", "+ more", "> quoted", "# Title", "---", "```"] {
        let compiled = to_structured_with_markdown(input).unwrap();
        assert_eq!(compiled.message, input);
        assert!(compiled.mappings.is_empty());
    }
}

#[test]
fn test_ordered_list_marker_before_plural() {
    let compiled = to_structured_with_markdown("1. Install $#n# app|#n# apps$").unwrap();
    assert_eq!(
        compiled.message,
        "1. Install {n, plural, one {# app} other {# apps}}"
    );
}

#[test]
fn test_quote_marker_with_inline_span() {
    let compiled = to_structured_with_markdown("> quoted **b**").unwrap();
    assert_eq!(compiled.message, "> quoted <0>b</0>");
    assert_eq!(compiled.mappings, vec![mapping(0, "<strong>", "</strong>")]);
}

#[test]
fn test_heading_underline_is_text() {
    assert_eq!(
        to_structured_with_markdown("Title\n===").unwrap().message,
        "Title\n==="
    );
}

// =========================================================================
// Plural Blocks
// =========================================================================

#[test]
fn test_plural_without_markdown_matches_render() {
    let compiled = to_structured_with_markdown("You have $#x# book|#x# books$").unwrap();
    assert_eq!(
        compiled.message,
        "You have {x, plural, one {# book} other {# books}}"
    );
    assert!(compiled.mappings.is_empty());
}

#[test]
fn test_indices_thread_through_plural_forms() {
    let compiled =
        to_structured_with_markdown("**Note:** $#n# **new** message|#n# **new** messages$")
            .unwrap();
    assert_eq!(
        compiled.message,
        "<0>Note:</0> {n, plural, one {# <1>new</1> message} other {# <2>new</2> messages}}"
    );
    let indices: Vec<usize> = compiled.mappings.iter().map(|m| m.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn test_every_open_marker_has_one_close() {
    let compiled = to_structured_with_markdown(
        "*a* $#n=0#**none**|#n# `one`|#n# [many](https://x.test)$ **b**",
    )
    .unwrap();
    for mapping in &compiled.mappings {
        let open = format!("<{}>", mapping.index);
        let close = format!("</{}>", mapping.index);
        assert_eq!(compiled.message.matches(&open).count(), 1);
        assert_eq!(compiled.message.matches(&close).count(), 1);
    }
    assert_eq!(compiled.mappings.len(), 5);
}

#[test]
fn test_spaces_around_plural_are_kept() {
    let compiled = to_structured_with_markdown("$#n# item|#n# items$ **left**").unwrap();
    assert_eq!(
        compiled.message,
        "{n, plural, one {# item} other {# items}} <0>left</0>"
    );
}

#[test]
fn test_tabs_and_newlines_around_plural_are_kept() {
    let compiled = to_structured_with_markdown("Use *x* $#n# a|#n# b$\t").unwrap();
    assert_eq!(
        compiled.message,
        "Use <0>x</0> {n, plural, one {# a} other {# b}}\t"
    );
    let compiled = to_structured_with_markdown("\n**go**\n").unwrap();
    assert_eq!(compiled.message, "\n<0>go</0>\n");
}

#[test]
fn test_compile_from_tokens() {
    let tokens = parse_markup("Read *this*").unwrap();
    let compiled = compile_markdown(&tokens);
    assert_eq!(compiled.message, "Read <0>this</0>");
}

// =========================================================================
// Extraction
// =========================================================================

#[test]
fn test_extract_from_start_index() {
    let extraction = extract("*a* and *b*", 5);
    assert_eq!(extraction.text, "<5>a</5> and <6>b</6>");
    assert_eq!(
        extraction.mappings,
        vec![mapping(5, "<em>", "</em>"), mapping(6, "<em>", "</em>")]
    );
    assert_eq!(extraction.next_index, 7);
}

#[test]
fn test_extract_keeps_list_markers() {
    let extraction = extract("2) second *item*\n* third", 0);
    assert_eq!(extraction.text, "2) second <0>item</0>\n* third");
    assert_eq!(extraction.next_index, 1);
}

#[test]
fn test_extract_without_markdown_keeps_index() {
    let extraction = extract("plain", 3);
    assert_eq!(extraction.text, "plain");
    assert!(extraction.mappings.is_empty());
    assert_eq!(extraction.next_index, 3);
}
