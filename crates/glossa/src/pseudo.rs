//! Pseudo-localization.
//!
//! Every letter gets a combining mark so untranslated or truncated text
//! stands out in a UI while staying readable. Variables, `#`, plural
//! structure and `<N>`/`</N>` placeholder markers are left intact.

use unicode_normalization::UnicodeNormalization;
use unicode_segmentation::UnicodeSegmentation;

use crate::message::{Branch, Node, parse_message, render_nodes};

const RING_ABOVE: char = '\u{030A}';
const DIAERESIS: char = '\u{0308}';
const DOT_ABOVE: char = '\u{0307}';
const TILDE: char = '\u{0303}';
const CEDILLA: char = '\u{0327}';
const ACUTE: char = '\u{0301}';

/// Pseudo-localize a structured message.
pub fn pseudo_localize(message: &str) -> String {
    let nodes = parse_message(message);
    render_nodes(&accent_nodes(&nodes))
}

/// Accent a single grapheme cluster. Clusters not starting with a letter
/// are returned unchanged.
pub fn accent(grapheme: &str) -> String {
    match grapheme.chars().next() {
        Some(first) if first.is_alphabetic() => grapheme
            .chars()
            .chain([combining_mark(first)])
            .nfc()
            .collect(),
        _ => grapheme.to_string(),
    }
}

fn combining_mark(letter: char) -> char {
    match letter.to_ascii_lowercase() {
        'a' | 'u' => RING_ABOVE,
        'e' | 'i' | 'h' | 'o' | 'w' | 'x' | 'y' => DIAERESIS,
        'b' | 'd' | 'f' | 'q' => DOT_ABOVE,
        'v' => TILDE,
        't' => CEDILLA,
        _ => ACUTE,
    }
}

fn accent_nodes(nodes: &[Node]) -> Vec<Node> {
    nodes
        .iter()
        .map(|node| match node {
            Node::Text(text) => Node::Text(accent_text(text)),
            Node::Plural { variable, branches } => Node::Plural {
                variable: variable.clone(),
                branches: branches
                    .iter()
                    .map(|branch| Branch {
                        category: branch.category.clone(),
                        content: accent_nodes(&branch.content),
                    })
                    .collect(),
            },
            Node::Variable(_) | Node::Hash => node.clone(),
        })
        .collect()
}

fn accent_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(len) = placeholder_len(rest) {
            out.push_str(&rest[..len]);
            rest = &rest[len..];
            continue;
        }
        let run = rest
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '<')
            .map_or(rest.len(), |(index, _)| index);
        for grapheme in rest[..run].graphemes(true) {
            out.push_str(&accent(grapheme));
        }
        rest = &rest[run..];
    }
    out
}

/// Byte length of a `<N>` or `</N>` marker at the start of `text`.
fn placeholder_len(text: &str) -> Option<usize> {
    let inner = text.strip_prefix('<')?;
    let digits = inner.strip_prefix('/').unwrap_or(inner);
    let count = digits.bytes().take_while(u8::is_ascii_digit).count();
    if count == 0 || digits.as_bytes().get(count) != Some(&b'>') {
        return None;
    }
    Some(text.len() - digits.len() + count + 1)
}
