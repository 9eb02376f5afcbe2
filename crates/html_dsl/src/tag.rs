//! Generic tag node and the behavior shared by every tag type

use crate::element::ChildTag;
use crate::{Element, Node, TextNode};
use indexmap::IndexMap;

/// Indentation added per nesting level when rendering
pub const INDENT: &str = "    ";

/// A named element with ordered children and ordered attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    name: &'static str,
    /// Children in document order
    children: Vec<Node>,
    /// Attributes in order of first insertion
    attributes: IndexMap<String, String>,
}

impl TagNode {
    /// Create an empty tag with the given name
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            children: Vec::new(),
            attributes: IndexMap::new(),
        }
    }

    /// Get the tag name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the children in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get the attributes in rendering order
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Get a single attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Insert or overwrite an attribute. An overwritten key keeps its position.
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Append a text leaf
    pub fn add_text(&mut self, value: impl Into<String>) {
        self.children.push(Node::Text(TextNode::new(value)));
    }

    /// Configure `child`, append it and hand back the appended child
    pub(crate) fn append_child<T: ChildTag>(
        &mut self,
        mut child: T,
        configure: impl FnOnce(&mut T),
    ) -> &mut T {
        configure(&mut child);
        self.children.push(child.into_node());
        match self.children.last_mut().and_then(T::from_node_mut) {
            Some(child) => child,
            None => unreachable!("appended child is stored under its own variant"),
        }
    }
}

impl Element for TagNode {
    fn render(&self, out: &mut String, indent: &str) {
        out.push_str(indent);
        out.push('<');
        out.push_str(self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push_str(">\n");

        let nested = format!("{indent}{INDENT}");
        for child in &self.children {
            child.render(out, &nested);
        }

        out.push_str(indent);
        out.push_str("</");
        out.push_str(self.name);
        out.push_str(">\n");
    }
}

/// Behavior shared by every concrete tag type
pub trait Tag: Element {
    /// Get the underlying tag node
    fn node(&self) -> &TagNode;

    /// Get a mutable reference to the underlying tag node
    fn node_mut(&mut self) -> &mut TagNode;

    fn name(&self) -> &'static str {
        self.node().name()
    }

    fn children(&self) -> &[Node] {
        self.node().children()
    }

    fn attributes(&self) -> &IndexMap<String, String> {
        self.node().attributes()
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.node().attribute(key)
    }

    /// Insert or overwrite an attribute
    fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.node_mut().set_attribute(key, value);
    }

    /// Append a text leaf
    fn add_text(&mut self, value: impl Into<String>)
    where
        Self: Sized,
    {
        self.node_mut().add_text(value);
    }

    /// Render this tag and its descendants starting at an empty indent
    fn to_text(&self) -> String {
        let mut out = String::new();
        self.render(&mut out, "");
        tracing::trace!(
            target: "html_dsl",
            tag = self.name(),
            bytes = out.len(),
            "rendered tag"
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(tag: &TagNode) -> String {
        let mut out = String::new();
        tag.render(&mut out, "");
        out
    }

    #[test]
    fn test_empty_tag() {
        assert_eq!(render(&TagNode::new("div")), "<div>\n</div>\n");
    }

    #[test]
    fn test_attributes_render_in_insertion_order() {
        let mut tag = TagNode::new("div");
        tag.set_attribute("id", "main");
        tag.set_attribute("class", "wide");
        assert_eq!(render(&tag), "<div id=\"main\" class=\"wide\">\n</div>\n");
    }

    #[test]
    fn test_overwrite_keeps_first_position() {
        let mut tag = TagNode::new("div");
        tag.set_attribute("a", "1");
        tag.set_attribute("b", "2");
        tag.set_attribute("a", "3");
        assert_eq!(tag.attribute("a"), Some("3"));
        assert_eq!(tag.attributes().len(), 2);
        assert_eq!(render(&tag), "<div a=\"3\" b=\"2\">\n</div>\n");
    }

    #[test]
    fn test_children_are_indented() {
        let mut tag = TagNode::new("div");
        tag.add_text("one");
        tag.add_text("two");
        assert_eq!(tag.children().len(), 2);

        let mut out = String::new();
        tag.render(&mut out, INDENT);
        assert_eq!(out, "    <div>\n        one\n        two\n    </div>\n");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let mut tag = TagNode::new("div");
        tag.set_attribute("title", "a\"b<c>");
        assert_eq!(render(&tag), "<div title=\"a\"b<c>\">\n</div>\n");
    }

    #[test]
    fn test_missing_attribute_is_none() {
        let tag = TagNode::new("div");
        assert_eq!(tag.attribute("class"), None);
    }
}
