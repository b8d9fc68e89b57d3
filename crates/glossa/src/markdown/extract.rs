use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use super::{Extraction, PlaceholderMapping};

/// Replace inline markdown in `text` with `<N>...</N>` placeholders,
/// numbering spans from `start_index` in document order.
///
/// Bold, italic, inline code and links are recognized. Block markers at the
/// start of a line (list bullets, `>`, `#`, fences, heading underlines) are
/// kept as text. Paragraphs are joined with a blank line.
pub fn extract(text: &str, start_index: usize) -> Extraction {
    let source = escape_block_markers(text);
    let mut extractor = Extractor::new(start_index);
    extractor.process(Parser::new(&source));
    Extraction {
        text: extractor.out,
        mappings: extractor.mappings,
        next_index: extractor.next_index,
    }
}

/// Backslash-escape every line-leading marker that would open a block, so
/// the parser only sees paragraphs.
fn escape_block_markers(text: &str) -> String {
    text.split('\n')
        .map(escape_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line(line: &str) -> String {
    let body = line.trim_start_matches([' ', '\t']);
    let indent = &line[..line.len() - body.len()];
    match block_marker_at(body) {
        Some(at) => format!("{indent}{}\\{}", &body[..at], &body[at..]),
        None => line.to_string(),
    }
}

/// Byte position of the marker that makes `line` open a block.
fn block_marker_at(line: &str) -> Option<usize> {
    let first = line.chars().next()?;
    let rest = &line[first.len_utf8()..];
    match first {
        '#' | '>' => Some(0),
        '-' | '+' | '*' if rest.is_empty() || rest.starts_with([' ', '\t']) => Some(0),
        '-' | '*' | '_' | '=' if is_rule_line(line, first) => Some(0),
        '`' | '~' if line.chars().take_while(|&c| c == first).count() >= 3 => Some(0),
        '[' if line.contains("]:") => Some(0),
        '0'..='9' => {
            let digits = line.bytes().take_while(u8::is_ascii_digit).count();
            let after = &line[digits..];
            let ordered = digits <= 9
                && after.starts_with(['.', ')'])
                && (after.len() == 1 || after[1..].starts_with([' ', '\t']));
            ordered.then_some(digits)
        }
        _ => None,
    }
}

/// A thematic break (`***`, `___`, `---`) or a heading underline (`===`).
fn is_rule_line(line: &str, marker: char) -> bool {
    let only_marker = line.chars().all(|c| c == marker || c == ' ' || c == '\t');
    let count = line.chars().filter(|&c| c == marker).count();
    only_marker && (count >= 3 || matches!(marker, '=' | '-'))
}

struct Extractor {
    out: String,
    mappings: Vec<PlaceholderMapping>,
    next_index: usize,
    /// Indices of the spans currently open, innermost last.
    open: Vec<usize>,
    blocks: usize,
}

impl Extractor {
    fn new(start_index: usize) -> Self {
        Extractor {
            out: String::new(),
            mappings: Vec::new(),
            next_index: start_index,
            open: Vec::new(),
            blocks: 0,
        }
    }

    fn process<'a>(&mut self, events: impl Iterator<Item = Event<'a>>) {
        for event in events {
            match event {
                Event::Start(tag) => self.start_tag(tag),
                Event::End(tag) => self.end_tag(tag),
                Event::Text(text) => self.out.push_str(&text),
                Event::Code(code) => self.inline_code(&code),
                Event::SoftBreak | Event::HardBreak => self.out.push('\n'),
                Event::Html(html) | Event::InlineHtml(html) => self.out.push_str(&html),
                _ => {}
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if self.blocks > 0 {
                    self.out.push_str("\n\n");
                }
                self.blocks += 1;
            }
            Tag::Emphasis => self.open_span("<em>".to_string(), "</em>"),
            Tag::Strong => self.open_span("<strong>".to_string(), "</strong>"),
            Tag::Link { dest_url, .. } => self.open_span(format!("<a href=\"{dest_url}\">"), "</a>"),
            _ => {}
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        if !matches!(tag, TagEnd::Emphasis | TagEnd::Strong | TagEnd::Link) {
            return;
        }
        if let Some(index) = self.open.pop() {
            self.close_marker(index);
        }
    }

    fn inline_code(&mut self, code: &str) {
        let index = self.allocate("<code>".to_string(), "</code>");
        self.open_marker(index);
        self.out.push_str(code);
        self.close_marker(index);
    }

    fn open_span(&mut self, open_tag: String, close_tag: &str) {
        let index = self.allocate(open_tag, close_tag);
        self.open_marker(index);
        self.open.push(index);
    }

    fn allocate(&mut self, open_tag: String, close_tag: &str) -> usize {
        let index = self.next_index;
        self.next_index += 1;
        self.mappings.push(PlaceholderMapping {
            index,
            open_tag,
            close_tag: close_tag.to_string(),
        });
        index
    }

    fn open_marker(&mut self, index: usize) {
        self.out.push_str(&format!("<{index}>"));
    }

    fn close_marker(&mut self, index: usize) {
        self.out.push_str(&format!("</{index}>"));
    }
}
