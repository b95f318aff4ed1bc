//! The node tree that parsed quiz markup lives in.
//!
//! Fragments are ordered lists of [`Node`]s. Attribute and child order is
//! preserved exactly as written so that serializing an unmodified tree
//! reproduces the source byte for byte.

use serde::{Deserialize, Serialize};

/// One node in a parsed fragment: either literal text or an element.
///
/// Text nodes hold unescaped content; entities are decoded during parsing
/// and re-escaped during rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    Text(String),
    Element(Element),
}

/// An element with its tag, attributes in source order, and children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    pub tag: String,
    /// Attribute pairs in the order they appeared. Duplicates are kept.
    #[serde(default)]
    pub attrs: Vec<(String, String)>,
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Node {
    /// Builds a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Returns true if this node is an element with the given tag.
    pub fn is_element(&self, tag: &str) -> bool {
        matches!(self, Node::Element(el) if el.tag == tag)
    }

    /// Returns the element inside this node, if it is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and everything below it, in order.
    pub fn text_content(&self) -> String {
        fn collect(node: &Node, out: &mut String) {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(el) => {
                    for child in &el.children {
                        collect(child, out);
                    }
                }
            }
        }
        let mut out = String::new();
        collect(self, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// True for HTML void elements, which never have children and render
/// without a closing tag.
pub fn is_void_element(tag: &str) -> bool {
    matches!(
        tag,
        "area"
            | "base"
            | "br"
            | "col"
            | "embed"
            | "hr"
            | "img"
            | "input"
            | "link"
            | "meta"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

impl Element {
    /// Creates an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute, builder style.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a child node, builder style.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Appends a text child, builder style.
    pub fn text_child(mut self, content: impl Into<String>) -> Self {
        self.children.push(Node::text(content));
        self
    }

    /// Value of the first attribute with this name.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}
