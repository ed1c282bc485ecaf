//! Errors raised before rendering starts.

use thiserror::Error;

use crate::node::NodeKind;

/// A malformed tree rejected by validation. No fragments are produced when a
/// render returns one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The root handed to the document renderer is not a document.
    #[error("Expected a document root, found {kind}")]
    NotADocument { kind: NodeKind },

    /// A document node appears below the root.
    #[error("Document node nested at {}", format_path(path))]
    NestedDocument { path: Vec<usize> },

    /// A heading level outside 1-6.
    #[error("Invalid heading level {level} at {}", format_path(path))]
    InvalidHeadingLevel { level: u8, path: Vec<usize> },

    /// The tree is nested deeper than the configured limit.
    #[error("Document nesting depth {depth} exceeds the limit of {limit}")]
    TooDeep { depth: usize, limit: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Formats a child-index path as `/0/2/1`.
fn format_path(path: &[usize]) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    path.iter().map(|i| format!("/{i}")).collect()
}
