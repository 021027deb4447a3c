//! Tag-document parsing
//!
//! Builds a full in-memory [`Entity`] tree from a complete document string;
//! there is no streaming parse. The API boundary is deliberately forgiving:
//! any structural failure yields `None` and callers fall back to defaults,
//! matching the load semantics of the stores built on top.

use crate::domain::entity::{Entity, Node};
use crate::domain::writer::unescape_markup;

/// Parse a complete document into its root entity.
///
/// Returns `None` on any parse failure. An XML declaration and comments are
/// accepted and ignored; self-closing tags are accepted; nothing but
/// whitespace, declarations, and comments may surround the root element.
pub fn parse(text: &str) -> Option<Entity> {
    let mut parser = Parser {
        input: text.as_bytes(),
        pos: 0,
    };
    parser.skip_misc()?;
    let root = parser.parse_element()?;
    parser.skip_misc()?;
    if parser.pos != parser.input.len() {
        return None;
    }
    Some(root)
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn starts_with(&self, prefix: &str) -> bool {
        self.input[self.pos..].starts_with(prefix.as_bytes())
    }

    fn expect(&mut self, literal: &str) -> Option<()> {
        if self.starts_with(literal) {
            self.pos += literal.len();
            Some(())
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace, declarations (`<?...?>`), and comments. Fails on an
    /// unterminated declaration or comment.
    fn skip_misc(&mut self) -> Option<()> {
        loop {
            self.skip_whitespace();
            if self.starts_with("<?") {
                self.skip_until("?>")?;
            } else if self.starts_with("<!--") {
                self.skip_until("-->")?;
            } else {
                return Some(());
            }
        }
    }

    fn skip_until(&mut self, terminator: &str) -> Option<()> {
        let haystack = &self.input[self.pos..];
        let found = haystack
            .windows(terminator.len())
            .position(|window| window == terminator.as_bytes())?;
        self.pos += found + terminator.len();
        Some(())
    }

    fn parse_name(&mut self) -> Option<String> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if is_name_byte(b)) {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let name = std::str::from_utf8(&self.input[start..self.pos]).ok()?;
        Some(name.to_string())
    }

    fn parse_element(&mut self) -> Option<Entity> {
        self.expect("<")?;
        let name = self.parse_name()?;
        let mut entity = Entity::new(name.as_str());

        // Opening tag: attributes until `/>` or `>`.
        loop {
            self.skip_whitespace();
            match self.peek()? {
                b'/' => {
                    self.expect("/>")?;
                    return Some(entity);
                }
                b'>' => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    let attribute = self.parse_attribute()?;
                    entity.attributes.push(attribute);
                }
            }
        }

        // Body: text runs, children, and comments up to the matching end tag.
        loop {
            if self.starts_with("</") {
                self.pos += 2;
                let end = self.parse_name()?;
                if end != name {
                    return None;
                }
                self.skip_whitespace();
                self.expect(">")?;
                return Some(entity);
            } else if self.starts_with("<!--") {
                self.skip_until("-->")?;
            } else if self.peek()? == b'<' {
                let child = self.parse_element()?;
                entity.children.push(Node::Element(child));
            } else {
                let text = self.parse_text()?;
                entity.children.push(Node::Text(text));
            }
        }
    }

    fn parse_attribute(&mut self) -> Option<(String, String)> {
        let name = self.parse_name()?;
        self.skip_whitespace();
        self.expect("=")?;
        self.skip_whitespace();
        let quote = self.peek()?;
        if quote != b'"' && quote != b'\'' {
            return None;
        }
        self.pos += 1;
        let start = self.pos;
        while self.peek()? != quote {
            self.pos += 1;
        }
        let raw = std::str::from_utf8(&self.input[start..self.pos]).ok()?;
        self.pos += 1;
        Some((name, unescape_markup(raw)))
    }

    fn parse_text(&mut self) -> Option<String> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b != b'<') {
            self.pos += 1;
        }
        let raw = std::str::from_utf8(&self.input[start..self.pos]).ok()?;
        Some(unescape_markup(raw))
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b'.' | b':')
}
