//! Parsed document tree

/// A child of an [`Entity`]: either a nested entity or a run of text.
///
/// Text written after a child entity stays a separate sibling node; adjacent
/// runs are never merged across element boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Entity),
    Text(String),
}

/// A named node in a tag-structured document.
///
/// Attributes keep insertion order, children keep document order. Ownership
/// is plain parent-owns-children; the structure is a tree, so no cycles or
/// shared nodes can occur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr, _)| attr == name)
            .map(|(_, value)| value.as_str())
    }

    /// Child entities in document order, skipping text runs.
    pub fn elements(&self) -> impl Iterator<Item = &Entity> {
        self.children.iter().filter_map(|child| match child {
            Node::Element(entity) => Some(entity),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this entity and all of its descendants, in
    /// document order.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(entity) => entity.collect_text(out),
            }
        }
    }

    /// First entity with the given name in document order, searching the
    /// whole subtree including `self`.
    ///
    /// Matching is deliberately not scoped to direct children: hand-edited
    /// documents that nest a field deeper than the writer emits it still
    /// resolve the same way.
    pub fn find(&self, name: &str) -> Option<&Entity> {
        if self.name == name {
            return Some(self);
        }
        self.elements().find_map(|child| child.find(name))
    }

    /// Text content of the first entity named `name`, or `""` when absent.
    ///
    /// The empty-string sentinel keeps scalar extraction call sites free of
    /// `Option` plumbing; absent and empty fields coerce identically.
    pub fn find_text(&self, name: &str) -> String {
        self.find(name).map(|e| e.text_content()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Entity {
        let mut inner = Entity::new("target");
        inner.children.push(Node::Text("inner".to_string()));

        let mut outer = Entity::new("outer");
        outer.children.push(Node::Element(inner));

        let mut late = Entity::new("target");
        late.children.push(Node::Text("later".to_string()));

        let mut root = Entity::new("root");
        root.children.push(Node::Element(outer));
        root.children.push(Node::Element(late));
        root
    }

    #[test]
    fn given_duplicate_names_when_finding_then_first_in_document_order_wins() {
        let root = sample();
        assert_eq!(root.find_text("target"), "inner");
    }

    #[test]
    fn given_missing_name_when_finding_then_returns_empty_sentinel() {
        let root = sample();
        assert!(root.find("absent").is_none());
        assert_eq!(root.find_text("absent"), "");
    }

    #[test]
    fn given_nested_text_when_reading_content_then_concatenates_in_order() {
        let root = sample();
        assert_eq!(root.text_content(), "innerlater");
    }
}
