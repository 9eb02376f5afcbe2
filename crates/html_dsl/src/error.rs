//! Error types for tag tree operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DslError {
    /// A required attribute was read before it was ever set
    #[error("Missing attribute \"{attribute}\" on <{tag}>")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, DslError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DslError::MissingAttribute {
            tag: "anchor",
            attribute: "href",
        };
        assert_eq!(err.to_string(), "Missing attribute \"href\" on <anchor>");
    }
}
