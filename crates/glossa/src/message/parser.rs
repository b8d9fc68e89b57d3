//! Lenient structured-message parser.
//!
//! Malformed input never fails: an unterminated argument or branch is
//! consumed to the end of the input, and an argument type other than
//! `plural` is read as a plain variable. Callers that need to detect
//! anomalies compare the resulting node trees instead.

use std::mem;

use tracing::debug;

use super::node::{Branch, Node};

/// Parse a structured-message string into a node tree.
///
/// Apostrophes follow ICU's quoting mode: `'` only starts a quoted run
/// before a syntax character, so `'abc'` stays literal text with both
/// apostrophes, while `'{abc}'` reads as `{abc}`.
pub fn parse_message(input: &str) -> Vec<Node> {
    let chars: Vec<char> = input.chars().collect();
    let mut cursor = Cursor {
        chars: &chars,
        pos: 0,
    };
    cursor.sequence(false)
}

struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Parse nodes until the end of input or, inside a plural branch, until
    /// the `}` closing the branch (left unconsumed).
    fn sequence(&mut self, in_branch: bool) -> Vec<Node> {
        let mut nodes = Vec::new();
        let mut text = String::new();

        while let Some(ch) = self.peek() {
            match ch {
                '#' if in_branch => {
                    flush_text(&mut text, &mut nodes);
                    nodes.push(Node::Hash);
                    self.pos += 1;
                }
                '}' if in_branch => break,
                '{' => {
                    flush_text(&mut text, &mut nodes);
                    self.pos += 1;
                    if let Some(node) = self.argument() {
                        nodes.push(node);
                    }
                }
                '\'' => self.apostrophe(in_branch, &mut text),
                _ => {
                    text.push(ch);
                    self.pos += 1;
                }
            }
        }

        flush_text(&mut text, &mut nodes);
        nodes
    }

    /// Parse an argument after its opening `{`.
    fn argument(&mut self) -> Option<Node> {
        let name = self.read_until(',', '}');
        match self.peek() {
            Some('}') => {
                self.pos += 1;
                Some(Node::Variable(name))
            }
            Some(',') => {
                self.pos += 1;
                let keyword = self.read_until(',', '}');
                if keyword == "plural" && self.peek() == Some(',') {
                    self.pos += 1;
                    let branches = self.branches();
                    Some(Node::Plural {
                        variable: name,
                        branches,
                    })
                } else {
                    debug!(variable = %name, keyword = %keyword, "reading unsupported argument as a variable");
                    self.skip_argument();
                    Some(Node::Variable(name))
                }
            }
            _ => None,
        }
    }

    /// Parse `category {content}` pairs up to and including the `}` closing
    /// the plural argument.
    fn branches(&mut self) -> Vec<Branch> {
        let mut branches = Vec::new();
        self.skip_whitespace();

        while let Some(ch) = self.peek() {
            if ch == '}' {
                self.pos += 1;
                break;
            }

            let category = self.read_until('{', '}');
            if self.peek() == Some('{') {
                self.pos += 1;
                let content = self.sequence(true);
                if self.peek() == Some('}') {
                    self.pos += 1;
                }
                branches.push(Branch { category, content });
            }
            self.skip_whitespace();
        }

        branches
    }

    /// Apostrophe handling: `''` is a literal apostrophe, an apostrophe
    /// before a syntax character opens a quoted run that ends at the next
    /// single apostrophe, and any other apostrophe is literal.
    fn apostrophe(&mut self, in_branch: bool, text: &mut String) {
        match self.peek_next() {
            Some('\'') => {
                text.push('\'');
                self.pos += 2;
            }
            Some(next) if opens_quote(next, in_branch) => {
                self.pos += 1;
                while let Some(ch) = self.peek() {
                    self.pos += 1;
                    if ch != '\'' {
                        text.push(ch);
                    } else if self.peek() == Some('\'') {
                        text.push('\'');
                        self.pos += 1;
                    } else {
                        return;
                    }
                }
            }
            _ => {
                text.push('\'');
                self.pos += 1;
            }
        }
    }

    /// Skip the remainder of an argument whose opening `{` was consumed.
    fn skip_argument(&mut self) {
        let mut depth = 1usize;
        while let Some(ch) = self.peek() {
            self.pos += 1;
            match ch {
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                _ => {}
            }
        }
    }

    fn read_until(&mut self, first: char, second: char) -> String {
        let start = self.pos;
        while self.peek().is_some_and(|ch| ch != first && ch != second) {
            self.pos += 1;
        }
        self.chars[start..self.pos]
            .iter()
            .collect::<String>()
            .trim()
            .to_string()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }
}

fn opens_quote(ch: char, in_branch: bool) -> bool {
    matches!(ch, '{' | '}' | '|') || (ch == '#' && in_branch)
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(mem::take(text)));
    }
}
