use std::mem;

use tracing::trace;

use crate::markup::Token;
use crate::message::{open_branch, open_plural, push_variable};

use super::extract::extract;
use super::{CompiledMessage, PlaceholderMapping, SENTINEL};

/// Render tokens as a structured message, replacing inline markdown with
/// numbered placeholders.
///
/// Each text run, and each plural form, is extracted on its own, but one
/// counter runs through the whole message so indices never repeat.
pub fn compile_markdown(tokens: &[Token]) -> CompiledMessage {
    let mut compiler = Compiler::default();
    compiler.sequence(tokens);
    trace!(placeholders = compiler.mappings.len(), "compiled markdown");
    CompiledMessage {
        message: compiler.out,
        mappings: compiler.mappings,
    }
}

#[derive(Default)]
struct Compiler {
    out: String,
    mappings: Vec<PlaceholderMapping>,
    next_index: usize,
}

impl Compiler {
    fn sequence(&mut self, tokens: &[Token]) {
        let mut assembled = String::new();
        for token in tokens {
            match token {
                Token::Text(text) => assembled.push_str(text),
                Token::Variable(name) => push_variable(&mut assembled, name),
                Token::SelectorRef(_) => assembled.push(SENTINEL),
                Token::PluralBlock(block) => {
                    self.flush(&mut assembled);
                    open_plural(&mut self.out, &block.selector);
                    for form in &block.forms {
                        open_branch(&mut self.out, &form.category);
                        self.sequence(&form.content);
                        self.out.push('}');
                    }
                    self.out.push('}');
                }
            }
        }
        self.flush(&mut assembled);
    }

    /// Run the markdown pass over the assembled text. Markdown drops
    /// leading and trailing whitespace, so it is carried around it.
    fn flush(&mut self, assembled: &mut String) {
        let text = mem::take(assembled);
        let body = text.trim();
        if body.is_empty() {
            self.out.push_str(&text);
            return;
        }
        let leading = text.len() - text.trim_start().len();
        let trailing = text.trim_end().len();

        let extraction = extract(body, self.next_index);
        self.next_index = extraction.next_index;
        self.mappings.extend(extraction.mappings);

        self.out.push_str(&text[..leading]);
        self.out.push_str(&extraction.text.replace(SENTINEL, "#"));
        self.out.push_str(&text[trailing..]);
    }
}
