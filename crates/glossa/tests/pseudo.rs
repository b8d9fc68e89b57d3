//! Tests for pseudo-localization.

use glossa::pseudo::accent;
use glossa::pseudo_localize;

// =========================================================================
// Accents
// =========================================================================

#[test]
fn test_accent_marks_by_letter() {
    assert_eq!(accent("a"), "å");
    assert_eq!(accent("e"), "ë");
    assert_eq!(accent("d"), "ḋ");
    assert_eq!(accent("v"), "ṽ");
    assert_eq!(accent("T"), "Ţ");
    assert_eq!(accent("l"), "ĺ");
}

#[test]
fn test_accent_leaves_non_letters() {
    for grapheme in ["5", " ", "!", "{", "#"] {
        assert_eq!(accent(grapheme), grapheme);
    }
}

#[test]
fn test_accent_without_precomposed_form() {
    assert_eq!(accent("é"), "é\u{301}");
}

// =========================================================================
// Messages
// =========================================================================

#[test]
fn test_plain_text() {
    assert_eq!(pseudo_localize("Hello world"), "Ḧëĺĺö ẅöŕĺḋ");
    assert_eq!(pseudo_localize("Page 42!"), "Ṕåǵë 42!");
}

#[test]
fn test_variables_are_preserved() {
    assert_eq!(
        pseudo_localize("Hello {first} and {last}!"),
        "Ḧëĺĺö {first} åńḋ {last}!"
    );
}

#[test]
fn test_placeholder_markers_are_preserved() {
    assert_eq!(pseudo_localize("Click <0>here</0>"), "Ćĺïćḱ <0>ḧëŕë</0>");
}

#[test]
fn test_other_tags_are_accented() {
    assert_eq!(pseudo_localize("<b>"), "<ḃ>");
}

#[test]
fn test_plural_structure_is_preserved() {
    assert_eq!(
        pseudo_localize("{count, plural, one {# item} other {# items}}"),
        "{count, plural, one {# ïţëḿ} other {# ïţëḿś}}"
    );
}

#[test]
fn test_empty_message() {
    assert_eq!(pseudo_localize(""), "");
}
