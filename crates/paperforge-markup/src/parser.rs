//! Fault-tolerant HTML fragment parser.
//!
//! Quiz content arrives as authored HTML snippets, not validated documents,
//! so the parser never fails: malformed constructs degrade to the closest
//! sensible tree. Unmatched close tags are dropped, unclosed elements are
//! closed at the end of input, and a stray `<` that does not start a tag is
//! kept as literal text.
//!
//! Tag and attribute names are lowercased. Attribute order, duplicate
//! attributes, and all text (entities decoded) are preserved so that an
//! unmodified tree renders back to equivalent markup.

use crate::node::{is_void_element, Element, Node};

/// Parses a markup fragment into a node tree. Never fails.
pub fn parse(input: &str) -> Vec<Node> {
    let mut parser = Parser {
        bytes: input.as_bytes(),
        input,
        pos: 0,
        builder: TreeBuilder::default(),
    };
    parser.run();
    parser.builder.finish()
}

/// Attaches finished nodes to the innermost open element, or to the root
/// list when nothing is open.
#[derive(Default)]
struct TreeBuilder {
    root: Vec<Node>,
    stack: Vec<Element>,
}

impl TreeBuilder {
    fn append(&mut self, node: Node) {
        let siblings = match self.stack.last_mut() {
            Some(open) => &mut open.children,
            None => &mut self.root,
        };
        // Adjacent text runs coalesce so tree granularity never depends on
        // how the input happened to be tokenized.
        if let (Some(Node::Text(prev)), Node::Text(text)) = (siblings.last_mut(), &node) {
            prev.push_str(text);
            return;
        }
        siblings.push(node);
    }

    fn open(&mut self, el: Element) {
        self.stack.push(el);
    }

    /// Closes the nearest open element with this tag, implicitly closing
    /// anything opened inside it. Returns false when no such element is
    /// open, in which case the close tag is discarded.
    fn close(&mut self, tag: &str) -> bool {
        if !self.stack.iter().any(|el| el.tag == tag) {
            return false;
        }
        loop {
            let el = self.stack.pop().unwrap();
            let done = el.tag == tag;
            self.append(Node::Element(el));
            if done {
                return true;
            }
        }
    }

    fn finish(mut self) -> Vec<Node> {
        while let Some(el) = self.stack.pop() {
            self.append(Node::Element(el));
        }
        self.root
    }
}

struct Parser<'a> {
    bytes: &'a [u8],
    input: &'a str,
    pos: usize,
    builder: TreeBuilder,
}

impl<'a> Parser<'a> {
    fn run(&mut self) {
        while self.pos < self.bytes.len() {
            match self.find(b'<', self.pos) {
                Some(lt) => {
                    if lt > self.pos {
                        self.emit_text(self.pos, lt);
                    }
                    self.pos = lt;
                    self.markup();
                }
                None => {
                    self.emit_text(self.pos, self.bytes.len());
                    self.pos = self.bytes.len();
                }
            }
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn find(&self, byte: u8, from: usize) -> Option<usize> {
        self.bytes[from..].iter().position(|&b| b == byte).map(|i| from + i)
    }

    fn emit_text(&mut self, start: usize, end: usize) {
        let text = unescape(&self.input[start..end]);
        self.builder.append(Node::Text(text));
    }

    /// Dispatches on the character after `<`. Called with `pos` at the `<`.
    fn markup(&mut self) {
        match self.peek(1) {
            Some(b'!') => self.comment_or_declaration(),
            Some(b'/') => self.close_tag(),
            Some(b) if b.is_ascii_alphabetic() => self.open_tag(),
            // Not a tag. Emit the `<` literally and carry on.
            _ => {
                self.builder.append(Node::text("<"));
                self.pos += 1;
            }
        }
    }

    fn comment_or_declaration(&mut self) {
        if self.input[self.pos..].starts_with("<!--") {
            // Comments may contain `>`, so look for the full terminator.
            match self.input[self.pos + 4..].find("-->") {
                Some(i) => self.pos = self.pos + 4 + i + 3,
                None => self.pos = self.bytes.len(),
            }
        } else {
            // Doctype or other declaration. Skip to the closing angle.
            match self.find(b'>', self.pos + 2) {
                Some(gt) => self.pos = gt + 1,
                None => self.pos = self.bytes.len(),
            }
        }
    }

    fn close_tag(&mut self) {
        let name_start = self.pos + 2;
        let mut end = name_start;
        while end < self.bytes.len() && is_name_byte(self.bytes[end]) {
            end += 1;
        }
        let name = self.input[name_start..end].to_ascii_lowercase();
        match self.find(b'>', end) {
            Some(gt) => self.pos = gt + 1,
            None => self.pos = self.bytes.len(),
        }
        if !name.is_empty() {
            self.builder.close(&name);
        }
    }

    fn open_tag(&mut self) {
        let name_start = self.pos + 1;
        let mut end = name_start;
        while end < self.bytes.len() && is_name_byte(self.bytes[end]) {
            end += 1;
        }
        let mut el = Element::new(self.input[name_start..end].to_ascii_lowercase());
        self.pos = end;

        loop {
            self.skip_whitespace();
            match self.peek(0) {
                Some(b'>') => {
                    self.pos += 1;
                    self.finish_open(el, false);
                    return;
                }
                Some(b'/') if self.peek(1) == Some(b'>') => {
                    self.pos += 2;
                    self.finish_open(el, true);
                    return;
                }
                // Stray slash inside the tag, skip it.
                Some(b'/') => self.pos += 1,
                Some(b'=') | Some(b'<') => self.pos += 1,
                Some(_) => {
                    let (name, value) = self.attribute();
                    el.attrs.push((name, value));
                }
                // Input ended mid-tag. Keep what we parsed.
                None => {
                    self.finish_open(el, false);
                    return;
                }
            }
        }
    }

    fn finish_open(&mut self, el: Element, self_closed: bool) {
        if self_closed || is_void_element(&el.tag) {
            self.builder.append(Node::Element(el));
        } else {
            self.builder.open(el);
        }
    }

    fn attribute(&mut self) -> (String, String) {
        let start = self.pos;
        while let Some(b) = self.peek(0) {
            if is_whitespace(b) || b == b'=' || b == b'>' || b == b'/' {
                break;
            }
            self.pos += 1;
        }
        let name = self.input[start..self.pos].to_ascii_lowercase();
        self.skip_whitespace();
        if self.peek(0) != Some(b'=') {
            return (name, String::new());
        }
        self.pos += 1;
        self.skip_whitespace();
        let value = match self.peek(0) {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let start = self.pos;
                match self.find(quote, start) {
                    Some(end) => {
                        self.pos = end + 1;
                        &self.input[start..end]
                    }
                    // Unterminated quote takes the rest of the input.
                    None => {
                        self.pos = self.bytes.len();
                        &self.input[start..]
                    }
                }
            }
            _ => {
                let start = self.pos;
                while let Some(b) = self.peek(0) {
                    if is_whitespace(b) || b == b'>' {
                        break;
                    }
                    if b == b'/' && self.peek(1) == Some(b'>') {
                        break;
                    }
                    self.pos += 1;
                }
                &self.input[start..self.pos]
            }
        };
        (name, unescape(value))
    }

    fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek(0) {
            if !is_whitespace(b) {
                break;
            }
            self.pos += 1;
        }
    }
}

fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0c)
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Decodes the named and numeric entities that show up in quiz content.
/// Anything unrecognized is kept literally.
fn unescape(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        // Entities are short; anything without a nearby semicolon is literal.
        // Byte search keeps the window safe on multibyte boundaries.
        let window = &rest.as_bytes()[..rest.len().min(12)];
        let semi = window.iter().position(|&b| b == b';');
        let decoded = semi.and_then(|i| decode_entity(&rest[1..i]));
        match (semi, decoded) {
            (Some(i), Some(ch)) => {
                out.push(ch);
                rest = &rest[i + 1..];
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes the body of one entity (between `&` and `;`).
fn decode_entity(body: &str) -> Option<char> {
    match body {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some('\u{00a0}'),
        _ => {
            let digits = body.strip_prefix('#')?;
            let code = match digits.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)
        }
    }
}
