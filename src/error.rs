//! Errors reported by graph queries and edits.
//!
//! Only lookups of vertices that were never created are errors. An unreachable target or an
//! empty container is a regular outcome and surfaces as `None`.

use std::fmt::Debug;

use thiserror::Error;

use crate::Vertex;

/// Errors raised when a graph is asked about a vertex it does not know
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The vertex was never passed to `create_vertex` on this graph
    #[error("vertex {vertex} not found in graph")]
    VertexNotFound { vertex: String },
}

impl GraphError {
    /// Shorthand for a [`GraphError::VertexNotFound`] naming `u`
    pub fn vertex_not_found<P: Debug>(u: &Vertex<P>) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{u:?}"),
        }
    }
}

/// Result type used throughout the crate
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_vertex() {
        let err = GraphError::vertex_not_found(&Vertex::new("Z"));
        assert_eq!(err.to_string(), "vertex \"Z\" not found in graph");
        assert_eq!(
            err,
            GraphError::VertexNotFound {
                vertex: "\"Z\"".into()
            }
        );
    }
}
