//! Renderable element trait, text leaves and the owned child enum

use crate::{Anchor, Body, Div, Span, Tag, TagNode};

/// Common interface for everything that can appear in a tag tree
pub trait Element: std::fmt::Debug {
    /// Append this element and all of its descendants to `out`,
    /// using `indent` as the leading whitespace of its own lines.
    fn render(&self, out: &mut String, indent: &str);
}

/// A literal text leaf, rendered verbatim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextNode {
    text: String,
}

impl TextNode {
    /// Create a new text leaf
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Element for TextNode {
    fn render(&self, out: &mut String, indent: &str) {
        out.push_str(indent);
        out.push_str(&self.text);
        out.push('\n');
    }
}

/// A child owned by a tag, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(TextNode),
    Body(Body),
    Div(Div),
    Span(Span),
    Anchor(Anchor),
}

impl Node {
    /// Get the text content if this is a text leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text.text()),
            _ => None,
        }
    }

    /// Get the underlying tag if this is not a text leaf
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Node::Text(_) => None,
            Node::Body(tag) => Some(tag.node()),
            Node::Div(tag) => Some(tag.node()),
            Node::Span(tag) => Some(tag.node()),
            Node::Anchor(tag) => Some(tag.node()),
        }
    }

    /// Check if this is a text leaf
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }
}

impl Element for Node {
    fn render(&self, out: &mut String, indent: &str) {
        match self {
            Node::Text(text) => text.render(out, indent),
            Node::Body(tag) => tag.render(out, indent),
            Node::Div(tag) => tag.render(out, indent),
            Node::Span(tag) => tag.render(out, indent),
            Node::Anchor(tag) => tag.render(out, indent),
        }
    }
}

/// Tag types that can be stored as a [`Node`] and recovered from one
pub(crate) trait ChildTag: Sized {
    fn into_node(self) -> Node;
    fn from_node_mut(node: &mut Node) -> Option<&mut Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_render_is_verbatim() {
        let text = TextNode::new("a < b & \"c\"");
        let mut out = String::new();
        text.render(&mut out, "  ");
        assert_eq!(out, "  a < b & \"c\"\n");
    }

    #[test]
    fn test_node_accessors() {
        let text = Node::Text(TextNode::new("hello"));
        assert!(text.is_text());
        assert_eq!(text.as_text(), Some("hello"));
        assert!(text.as_tag().is_none());

        let div = Node::Div(Div::new());
        assert!(!div.is_text());
        assert_eq!(div.as_tag().map(TagNode::name), Some("div"));
    }

    #[test]
    fn test_node_render_delegates() {
        let node = Node::Span(Span::new());
        let mut out = String::new();
        node.render(&mut out, "");
        assert_eq!(out, "<span>\n</span>\n");
    }
}
