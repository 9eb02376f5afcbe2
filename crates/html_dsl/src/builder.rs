//! Document entry point

use crate::{Html, Tag};

/// Build a new document: create an empty `<html>` root, let `configure`
/// populate it, and return it.
pub fn build_document(configure: impl FnOnce(&mut Html)) -> Html {
    let mut html = Html::new();
    configure(&mut html);
    tracing::trace!(
        target: "html_dsl",
        children = html.children().len(),
        "built document"
    );
    html
}

/// Render a whole document to indented text
pub fn to_text(root: &Html) -> String {
    root.to_text()
}
