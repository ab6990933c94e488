//! Visitor errors

/// A visitor that cannot be used for traversal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidVisitorError {
    #[error("non-function visitor entry for `{kind}`: found {found}")]
    NonFunction { kind: String, found: &'static str },

    #[error("unknown node kind `{0}` in visitor")]
    UnknownKind(String),
}
