//! Streaming tag-document writer
//!
//! Emits a well-formed document one structural call at a time instead of
//! serializing a finished tree: each call appends to an internal buffer,
//! and an explicit stack of open entity names enforces the nesting
//! discipline. A writer is single-use: it assembles exactly one document
//! and [`finish`](DocumentWriter::finish) consumes it.

use tracing::debug;

use crate::domain::error::{DocumentError, DocumentResult};

/// Escape passes applied to attribute values and text, in order.
///
/// Each pass operates on the output of the previous one, so already-escaped
/// input is escaped again: `&amp;` becomes `&amp;amp;`. Byte-exact
/// round-trips with documents written by earlier versions depend on this
/// exact pass order.
const ESCAPES: [(&str, &str); 5] = [
    ("&", "&amp;"),
    ("<", "&lt;"),
    (">", "&gt;"),
    ("\"", "&quot;"),
    ("'", "&apos;"),
];

/// Transcode the five markup characters in sequential passes.
pub fn escape_markup(value: &str) -> String {
    let mut escaped = value.to_string();
    for (raw, replacement) in ESCAPES {
        escaped = escaped.replace(raw, replacement);
    }
    escaped
}

/// Decode the five escapes in reverse pass order, inverting
/// [`escape_markup`]. Unknown entity references are left untouched.
pub fn unescape_markup(value: &str) -> String {
    let mut decoded = value.to_string();
    for &(raw, replacement) in ESCAPES.iter().rev() {
        decoded = decoded.replace(replacement, raw);
    }
    decoded
}

/// Streaming writer for tag-structured documents.
///
/// The writer moves between two structural states: after
/// [`open_entity`](Self::open_entity) the opening tag is still pending
/// (attributes may be added, `>` not yet emitted); the first text, child, or
/// close terminates it. Every `open_entity` must be matched by a
/// [`close_entity`](Self::close_entity) before [`finish`](Self::finish).
///
/// Entity and attribute names are written verbatim and must be free of
/// markup characters; only attribute values and text are escaped.
#[derive(Debug, Default)]
pub struct DocumentWriter {
    /// Accumulated document text
    buf: String,
    /// Names of currently open entities, innermost last
    stack: Vec<String>,
    /// Attributes buffered for the pending opening tag
    attrs: String,
    /// True while the most recently opened entity has no child or text
    empty: bool,
    /// True once the current opening tag has been terminated with `>`
    closed: bool,
}

impl DocumentWriter {
    pub fn new() -> Self {
        Self {
            buf: String::new(),
            stack: Vec::new(),
            attrs: String::new(),
            empty: false,
            closed: true,
        }
    }

    /// Current nesting depth.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open a new entity as a child of the current one.
    pub fn open_entity(&mut self, name: &str) -> &mut Self {
        self.close_opening_tag();
        self.closed = false;
        self.buf.push('<');
        self.buf.push_str(name);
        self.stack.push(name.to_string());
        self.empty = true;
        self
    }

    /// Buffer an attribute for the entity whose opening tag is still
    /// pending.
    ///
    /// Repeatable; insertion order is preserved. Once the opening tag has
    /// closed the call is silently ignored rather than attached to a later
    /// entity.
    pub fn write_attribute(&mut self, name: &str, value: &str) -> &mut Self {
        if self.closed {
            debug!("attribute {name} dropped: opening tag already closed");
            return self;
        }
        self.attrs.push(' ');
        self.attrs.push_str(name);
        self.attrs.push_str("=\"");
        self.attrs.push_str(&escape_markup(value));
        self.attrs.push('"');
        self
    }

    /// Append escaped text content to the current entity.
    pub fn write_text(&mut self, value: &str) -> &mut Self {
        self.close_opening_tag();
        self.empty = false;
        self.buf.push_str(&escape_markup(value));
        self
    }

    /// Close the innermost open entity.
    ///
    /// An entity that never received text or a child collapses to the
    /// self-closing form, pending attributes included.
    pub fn close_entity(&mut self) -> DocumentResult<&mut Self> {
        let name = self.stack.pop().ok_or(DocumentError::UnbalancedClose)?;
        if self.empty {
            self.flush_attributes();
            self.closed = true;
            self.buf.push_str("/>");
        } else {
            self.buf.push_str("</");
            self.buf.push_str(&name);
            self.buf.push('>');
        }
        self.empty = false;
        Ok(self)
    }

    /// Finish the document and hand back the accumulated buffer.
    pub fn finish(self) -> DocumentResult<String> {
        if let Some(open) = self.stack.last() {
            return Err(DocumentError::UnclosedEntity(open.clone()));
        }
        Ok(self.buf)
    }

    /// Terminate a pending opening tag: flush buffered attributes, then
    /// `>`. Closing the opening tag does not close the entity.
    fn close_opening_tag(&mut self) {
        if !self.closed {
            self.flush_attributes();
            self.closed = true;
            self.buf.push('>');
        }
    }

    fn flush_attributes(&mut self) {
        if !self.attrs.is_empty() {
            self.buf.push_str(&self.attrs);
            self.attrs.clear();
        }
    }
}
