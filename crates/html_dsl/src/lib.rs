//! HTML DSL - Typed builder for HTML-like tag trees
//!
//! This crate lets callers describe nested markup with ordinary closures
//! instead of string concatenation. Each tag type only exposes the child
//! operations it allows, and every tag renders to indented text.
//!
//! # Example
//!
//! ```
//! use html_dsl::{build_document, FlowContent, Tag};
//!
//! let document = build_document(|html| {
//!     html.body(|body| {
//!         body.div(|div| {
//!             div.set_attribute("class", "x");
//!             div.add_text("hello");
//!         });
//!     });
//! });
//!
//! assert!(document.to_text().starts_with("<html>\n    <body>\n"));
//! ```

mod builder;
mod element;
mod error;
mod tag;
mod tags;

pub use builder::*;
pub use element::*;
pub use error::*;
pub use tag::*;
pub use tags::*;
