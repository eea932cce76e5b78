use serde::Serialize;
use thiserror::Error;

use crate::graph::NodeId;

pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while building graphs or searching them
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Start or end node is not part of the graph, nothing was searched
    #[error("node {node} is not part of the graph")]
    InvalidNode { node: NodeId },

    /// Frontier ran dry before the end node was settled
    #[error("no path found from {start} to {end}")]
    PathNotFound { start: NodeId, end: NodeId },

    /// Graph lookup failed for an id the engine believed valid
    #[error("unknown node {node}")]
    UnknownNode { node: NodeId },

    #[error("invalid grid configuration: {reason}")]
    InvalidGrid { reason: String },

    #[error("invalid graph: {reason}")]
    InvalidGraph { reason: String },
}

/// Stable error categories for callers that match on kind rather than message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    InvalidNode,
    PathNotFound,
    UnknownNode,
    InvalidGrid,
    InvalidGraph,
}

/// Kind + human readable message, the shape errors take at the service boundary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

impl SearchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SearchError::InvalidNode { .. } => ErrorKind::InvalidNode,
            SearchError::PathNotFound { .. } => ErrorKind::PathNotFound,
            SearchError::UnknownNode { .. } => ErrorKind::UnknownNode,
            SearchError::InvalidGrid { .. } => ErrorKind::InvalidGrid,
            SearchError::InvalidGraph { .. } => ErrorKind::InvalidGraph,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }

    pub(crate) fn invalid_grid(reason: impl Into<String>) -> Self {
        SearchError::InvalidGrid { reason: reason.into() }
    }

    pub(crate) fn invalid_graph(reason: impl Into<String>) -> Self {
        SearchError::InvalidGraph { reason: reason.into() }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_carries_kind_and_message() {
        let report = SearchError::PathNotFound { start: 3, end: 9 }.report();

        assert_eq!(report.kind, ErrorKind::PathNotFound);
        assert_eq!(report.message, "no path found from 3 to 9");
    }

    #[test]
    fn test_report_serializes_snake_case_kind() {
        let report = SearchError::InvalidNode { node: 42 }.report();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["kind"], "invalid_node");
        assert_eq!(json["message"], "node 42 is not part of the graph");
    }
}
