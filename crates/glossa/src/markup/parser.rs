//! Character scanner for authoring markup.
//!
//! Handles:
//! - Literal text, with `$$` as an escaped `$`
//! - `$name$` variables
//! - `$...|...$` plural blocks, with `||` and `##` escapes inside them
//! - Nested `$name$` variables inside plural forms

use std::mem;

use tracing::trace;

use super::error::MarkupError;
use super::token::{PluralBlock, PluralForm, Token};

const DELIMITER: char = '$';
const SEPARATOR: char = '|';
const SELECTOR: char = '#';
const HIDDEN: char = '~';
const ZERO_SUFFIX: &str = "=0";

const ZERO_FORM_CATEGORIES: [&str; 3] = ["=0", "one", "other"];
const FORM_CATEGORIES: [&str; 2] = ["one", "other"];

/// Parse authoring markup into tokens.
///
/// # Errors
///
/// Returns an error for an empty string, an unclosed `$` block or `#`
/// reference, a plural block without a selector, a selector reference naming
/// another variable, or a plural block with the wrong number of forms.
pub fn parse_markup(input: &str) -> Result<Vec<Token>, MarkupError> {
    if input.is_empty() {
        return Err(MarkupError::Empty);
    }

    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while let Some(&ch) = chars.get(pos) {
        if ch != DELIMITER {
            text.push(ch);
            pos += 1;
            continue;
        }
        if chars.get(pos + 1) == Some(&DELIMITER) {
            text.push(DELIMITER);
            pos += 2;
            continue;
        }

        flush_text(&mut text, &mut tokens);
        let (token, next) = parse_block(&chars, pos)?;
        tokens.push(token);
        pos = next;
    }
    flush_text(&mut text, &mut tokens);

    trace!(tokens = tokens.len(), "parsed markup");
    Ok(tokens)
}

fn flush_text(text: &mut String, tokens: &mut Vec<Token>) {
    if !text.is_empty() {
        tokens.push(Token::Text(mem::take(text)));
    }
}

/// Parse the block opened by the `$` at `open`, returning the token and the
/// position just past the closing `$`.
fn parse_block(chars: &[char], open: usize) -> Result<(Token, usize), MarkupError> {
    let start = open + 1;

    if is_plural_block(chars, start) {
        let close =
            find_plural_close(chars, start).ok_or(MarkupError::UnmatchedDelimiter { offset: open })?;
        let block = parse_plural_block(&chars[start..close], start, open)?;
        return Ok((Token::PluralBlock(block), close + 1));
    }

    let close = find_char(chars, start, DELIMITER)
        .ok_or(MarkupError::UnmatchedDelimiter { offset: open })?;
    let name = chars[start..close].iter().collect();
    Ok((Token::Variable(name), close + 1))
}

/// Look ahead for an unescaped `|` before the block's closing `$`.
///
/// Skips `||` escapes, `$$` escapes and nested `$name$` variables, none of
/// which end the block or separate forms.
fn is_plural_block(chars: &[char], start: usize) -> bool {
    let mut i = start;
    while let Some(&ch) = chars.get(i) {
        match ch {
            DELIMITER if chars.get(i + 1) == Some(&DELIMITER) => i += 2,
            DELIMITER => match nested_variable_end(chars, i) {
                Some(end) => i = end + 1,
                None => return false,
            },
            SEPARATOR if chars.get(i + 1) == Some(&SEPARATOR) => i += 2,
            SEPARATOR => return true,
            _ => i += 1,
        }
    }
    false
}

/// Find the `$` closing a plural block that starts at `start`.
fn find_plural_close(chars: &[char], start: usize) -> Option<usize> {
    let mut i = start;
    while let Some(&ch) = chars.get(i) {
        if ch == DELIMITER {
            if chars.get(i + 1) == Some(&DELIMITER) {
                i += 2;
                continue;
            }
            match nested_variable_end(chars, i) {
                Some(end) => i = end + 1,
                None => return Some(i),
            }
            continue;
        }
        i += 1;
    }
    None
}

/// If a `$identifier$` variable starts at `dollar`, return the position of
/// its closing `$`.
fn nested_variable_end(chars: &[char], dollar: usize) -> Option<usize> {
    let mut i = dollar + 1;
    if !chars.get(i).is_some_and(|&c| is_ident_char(c)) {
        return None;
    }
    while chars.get(i).is_some_and(|&c| is_ident_char(c)) {
        i += 1;
    }
    (chars.get(i) == Some(&DELIMITER)).then_some(i)
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn find_char(chars: &[char], from: usize, needle: char) -> Option<usize> {
    chars
        .get(from..)?
        .iter()
        .position(|&c| c == needle)
        .map(|p| from + p)
}

/// A `#name#` reference inside a plural block.
struct SelectorReference {
    name: String,
    hidden: bool,
    zero: bool,
    /// Position of the closing `#`.
    end: usize,
}

/// Read the reference whose opening `#` is at `hash`. `base` converts local
/// positions to offsets in the whole message.
fn read_reference(
    chars: &[char],
    hash: usize,
    base: usize,
) -> Result<SelectorReference, MarkupError> {
    let mut i = hash + 1;
    let hidden = chars.get(i) == Some(&HIDDEN);
    if hidden {
        i += 1;
    }

    let end = find_char(chars, i, SELECTOR).ok_or(MarkupError::UnterminatedSelector {
        offset: base + hash,
    })?;

    let mut name: String = chars[i..end].iter().collect();
    let zero = name.ends_with(ZERO_SUFFIX);
    if zero {
        name.truncate(name.len() - ZERO_SUFFIX.len());
    }

    Ok(SelectorReference {
        name,
        hidden,
        zero,
        end,
    })
}

/// Parse the content between a plural block's delimiters. `base` is the
/// offset of the content, `open` the offset of the opening `$`.
fn parse_plural_block(
    content: &[char],
    base: usize,
    open: usize,
) -> Result<PluralBlock, MarkupError> {
    let forms = split_forms(content);
    let declaration = find_declaration(content, base)?
        .ok_or(MarkupError::MissingSelector { offset: open })?;

    let categories: &[&str] = if declaration.zero {
        &ZERO_FORM_CATEGORIES
    } else {
        &FORM_CATEGORIES
    };
    if forms.len() != categories.len() {
        return Err(MarkupError::FormCount {
            expected: categories.len(),
            found: forms.len(),
            offset: open,
        });
    }

    let forms = forms
        .iter()
        .zip(categories)
        .enumerate()
        .map(|(index, (&(start, end), category))| {
            let content = parse_form(
                &content[start..end],
                base + start,
                &declaration.name,
                index == 0,
            )?;
            Ok(PluralForm {
                category: (*category).to_string(),
                content,
            })
        })
        .collect::<Result<Vec<_>, MarkupError>>()?;

    Ok(PluralBlock {
        selector: declaration.name,
        selector_rendered: !declaration.hidden,
        has_zero_form: declaration.zero,
        forms,
    })
}

/// Split block content on unescaped `|`, returning local `(start, end)`
/// ranges. Escaped `||` stays inside the form for [`parse_form`] to resolve.
fn split_forms(content: &[char]) -> Vec<(usize, usize)> {
    let mut forms = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while let Some(&ch) = content.get(i) {
        if ch != SEPARATOR {
            i += 1;
        } else if content.get(i + 1) == Some(&SEPARATOR) {
            i += 2;
        } else {
            forms.push((start, i));
            i += 1;
            start = i;
        }
    }
    forms.push((start, content.len()));
    forms
}

/// The first selector reference anywhere in the block declares the selector.
fn find_declaration(
    content: &[char],
    base: usize,
) -> Result<Option<SelectorReference>, MarkupError> {
    let mut i = 0;
    while let Some(&ch) = content.get(i) {
        if ch != SELECTOR {
            i += 1;
        } else if content.get(i + 1) == Some(&SELECTOR) {
            i += 2;
        } else {
            return read_reference(content, i, base).map(Some);
        }
    }
    Ok(None)
}

/// Parse a single plural form.
///
/// The zero-form declaration `#name=0#`, when it is the first reference of
/// the first form, only declares the block and renders nothing; hidden
/// references render nothing either.
fn parse_form(
    chars: &[char],
    base: usize,
    selector: &str,
    first_form: bool,
) -> Result<Vec<Token>, MarkupError> {
    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut seen_reference = false;
    let mut i = 0;

    while let Some(&ch) = chars.get(i) {
        match ch {
            SELECTOR if chars.get(i + 1) == Some(&SELECTOR) => {
                text.push(SELECTOR);
                i += 2;
            }
            SELECTOR => {
                let reference = read_reference(chars, i, base)?;
                if reference.name != selector {
                    return Err(MarkupError::SelectorMismatch {
                        expected: selector.to_string(),
                        found: reference.name,
                        offset: base + i,
                    });
                }
                let declaration = first_form && !seen_reference && reference.zero;
                seen_reference = true;
                i = reference.end + 1;

                if !reference.hidden && !declaration {
                    flush_text(&mut text, &mut tokens);
                    tokens.push(Token::SelectorRef(reference.name));
                }
            }
            DELIMITER if chars.get(i + 1) == Some(&DELIMITER) => {
                text.push(DELIMITER);
                i += 2;
            }
            DELIMITER => {
                let end = find_char(chars, i + 1, DELIMITER)
                    .ok_or(MarkupError::UnmatchedDelimiter { offset: base + i })?;
                flush_text(&mut text, &mut tokens);
                tokens.push(Token::Variable(chars[i + 1..end].iter().collect()));
                i = end + 1;
            }
            SEPARATOR if chars.get(i + 1) == Some(&SEPARATOR) => {
                text.push(SEPARATOR);
                i += 2;
            }
            _ => {
                text.push(ch);
                i += 1;
            }
        }
    }
    flush_text(&mut text, &mut tokens);

    Ok(tokens)
}
