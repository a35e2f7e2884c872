//! Error types shared by every search algorithm.

use thiserror::Error;

/// Errors surfaced by traversal, island counting and top-k selection.
///
/// Nothing here is transient: every variant describes bad input, so callers
/// get the error back immediately and nothing is retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Traversal start is not a node of the graph.
    #[error("invalid start: node {node} is not in the graph")]
    InvalidStart { node: String },

    /// Grid start coordinate lies outside the grid.
    #[error("invalid start: ({row}, {col}) is outside a {rows}x{cols} grid")]
    InvalidStartCell {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl SearchError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        SearchError::InvalidArgument(msg.into())
    }

    /// True for either flavour of bad start position.
    pub fn is_invalid_start(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidStart { .. } | SearchError::InvalidStartCell { .. }
        )
    }
}

impl From<serde_wasm_bindgen::Error> for SearchError {
    fn from(err: serde_wasm_bindgen::Error) -> Self {
        SearchError::InvalidArgument(err.to_string())
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::InvalidArgument(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;
