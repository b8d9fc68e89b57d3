//! Structured-message serialization.

use crate::markup::Token;

use super::node::Node;

/// Serialize markup tokens to a structured-message string.
///
/// Text passes through verbatim; plural blocks become
/// `{selector, plural, one {...} other {...}}`.
pub fn render(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        render_token(token, &mut out);
    }
    out
}

fn render_token(token: &Token, out: &mut String) {
    match token {
        Token::Text(text) => out.push_str(text),
        Token::Variable(name) => push_variable(out, name),
        Token::SelectorRef(_) => out.push('#'),
        Token::PluralBlock(block) => {
            open_plural(out, &block.selector);
            for form in &block.forms {
                open_branch(out, &form.category);
                for token in &form.content {
                    render_token(token, out);
                }
                out.push('}');
            }
            out.push('}');
        }
    }
}

/// Serialize a node tree back to a structured-message string.
///
/// Unlike [`render`], text is quoted where it would otherwise be read as
/// syntax, so that parsing the result yields `nodes` again.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    render_sequence(nodes, false, &mut out);
    out
}

fn render_sequence(nodes: &[Node], in_branch: bool, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => push_quoted(out, text, in_branch),
            Node::Variable(name) => push_variable(out, name),
            Node::Hash => out.push('#'),
            Node::Plural { variable, branches } => {
                open_plural(out, variable);
                for branch in branches {
                    open_branch(out, &branch.category);
                    render_sequence(&branch.content, true, out);
                    out.push('}');
                }
                out.push('}');
            }
        }
    }
}

pub(crate) fn push_variable(out: &mut String, name: &str) {
    out.push('{');
    out.push_str(name);
    out.push('}');
}

pub(crate) fn open_plural(out: &mut String, variable: &str) {
    out.push('{');
    out.push_str(variable);
    out.push_str(", plural,");
}

pub(crate) fn open_branch(out: &mut String, category: &str) {
    out.push(' ');
    out.push_str(category);
    out.push_str(" {");
}

/// Apostrophes are doubled. Braces, and `#` inside a branch, go in a quoted
/// run that stays open across consecutive syntax characters and apostrophes.
fn push_quoted(out: &mut String, text: &str, in_branch: bool) {
    let mut quoting = false;
    for ch in text.chars() {
        if ch == '\'' {
            out.push_str("''");
            continue;
        }
        let syntax = matches!(ch, '{' | '}') || (in_branch && ch == '#');
        if syntax != quoting {
            out.push('\'');
            quoting = syntax;
        }
        out.push(ch);
    }
    if quoting {
        out.push('\'');
    }
}
