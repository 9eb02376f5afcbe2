//! Concrete tag types and the child operations each one allows

use crate::element::ChildTag;
use crate::{DslError, Element, Node, Result, Tag, TagNode};

const HREF: &str = "href";

/// Implement the shared tag plumbing for a newtype around [`TagNode`]
macro_rules! impl_tag {
    ($ty:ident, $name:literal) => {
        impl $ty {
            pub(crate) const NAME: &'static str = $name;
        }

        impl Tag for $ty {
            fn node(&self) -> &TagNode {
                &self.node
            }

            fn node_mut(&mut self) -> &mut TagNode {
                &mut self.node
            }
        }

        impl Element for $ty {
            fn render(&self, out: &mut String, indent: &str) {
                self.node.render(out, indent);
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.to_text())
            }
        }
    };
}

/// Implement construction and child storage for a tag that can be nested
macro_rules! impl_child_tag {
    ($ty:ident, $variant:ident) => {
        impl $ty {
            /// Create an empty tag
            pub fn new() -> Self {
                Self {
                    node: TagNode::new(Self::NAME),
                }
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }

        impl ChildTag for $ty {
            fn into_node(self) -> Node {
                Node::$variant(self)
            }

            fn from_node_mut(node: &mut Node) -> Option<&mut Self> {
                match node {
                    Node::$variant(tag) => Some(tag),
                    _ => None,
                }
            }
        }
    };
}

/// Child operations for tags that hold flow content
pub trait FlowContent: Tag {
    /// Append a configured `<div>` child
    fn div(&mut self, configure: impl FnOnce(&mut Div)) -> &mut Div
    where
        Self: Sized,
    {
        self.node_mut().append_child(Div::new(), configure)
    }

    /// Append a configured `<anchor>` child
    fn anchor(&mut self, configure: impl FnOnce(&mut Anchor)) -> &mut Anchor
    where
        Self: Sized,
    {
        self.node_mut().append_child(Anchor::new(), configure)
    }

    /// Append a configured `<span>` child
    fn span(&mut self, configure: impl FnOnce(&mut Span)) -> &mut Span
    where
        Self: Sized,
    {
        self.node_mut().append_child(Span::new(), configure)
    }
}

/// The document root. Only obtainable through [`crate::build_document`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Html {
    node: TagNode,
}

impl Html {
    pub(crate) fn new() -> Self {
        Self {
            node: TagNode::new(Self::NAME),
        }
    }

    /// Append a configured `<body>` child
    pub fn body(&mut self, configure: impl FnOnce(&mut Body)) -> &mut Body {
        self.node.append_child(Body::new(), configure)
    }
}

impl_tag!(Html, "html");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    node: TagNode,
}

impl_tag!(Body, "body");
impl_child_tag!(Body, Body);
impl FlowContent for Body {}

/// Block container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Div {
    node: TagNode,
}

impl_tag!(Div, "div");
impl_child_tag!(Div, Div);
impl FlowContent for Div {}

/// Inline container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    node: TagNode,
}

impl_tag!(Span, "span");
impl_child_tag!(Span, Span);
impl FlowContent for Span {}

/// Link element. Has no child operations of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    node: TagNode,
}

impl_tag!(Anchor, "anchor");
impl_child_tag!(Anchor, Anchor);

impl Anchor {
    /// Get the link target.
    ///
    /// Reading it before it was set is a caller bug and is reported as
    /// [`DslError::MissingAttribute`] rather than an empty string.
    pub fn href(&self) -> Result<&str> {
        self.node.attribute(HREF).ok_or_else(|| {
            tracing::debug!(target: "html_dsl", tag = Self::NAME, "href read before it was set");
            DslError::MissingAttribute {
                tag: Self::NAME,
                attribute: HREF,
            }
        })
    }

    /// Set the link target, replacing any previous value
    pub fn set_href(&mut self, value: impl Into<String>) {
        self.node.set_attribute(HREF, value);
    }
}
