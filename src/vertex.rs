/*!
# Vertex Representation

A vertex is identified purely by its payload: two vertices are equal iff their payloads are
equal. Any `Clone + Eq + Hash + Debug` type can serve as a payload, which allows cities,
strings, integers or custom structs to label the nodes of a graph.
*/

use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Capability required from the value a [`Vertex`] wraps
pub trait Payload: Clone + Eq + Hash + Debug {}

impl<T> Payload for T where T: Clone + Eq + Hash + Debug {}

/// We limit the number of vertices to `2^32 - 1`.
pub type NumVertices = u32;

/// An immutable vertex wrapping a single payload value.
///
/// Equality, ordering and hashing are derived structurally from the payload, so a vertex
/// handed out by a graph can be cloned freely and compared against any other handle for the
/// same payload.
///
/// There is no default vertex; every vertex wraps an explicit payload:
/// ```compile_fail
/// let v: lgraphs::Vertex<u32> = Default::default();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex<P>(P);

impl<P> Vertex<P> {
    /// Wraps `payload` into a vertex. This does *not* register the vertex with any graph,
    /// see [`GraphVertexEditing::create_vertex`](crate::ops::GraphVertexEditing::create_vertex).
    pub const fn new(payload: P) -> Self {
        Self(payload)
    }

    /// Returns a reference to the payload
    pub const fn payload(&self) -> &P {
        &self.0
    }

    /// Unwraps the vertex and returns its payload
    pub fn into_payload(self) -> P {
        self.0
    }
}

impl<P> From<P> for Vertex<P> {
    fn from(payload: P) -> Self {
        Self(payload)
    }
}

impl<P: Display> Display for Vertex<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<P: Debug> Debug for Vertex<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use std::hash::{BuildHasher, RandomState};

    use super::*;

    #[test]
    fn equality_is_structural() {
        let a = Vertex::new(String::from("A"));
        let b: Vertex<String> = "A".to_string().into();

        assert_eq!(a, b);
        assert_ne!(a, Vertex::new("B".to_string()));

        let state = RandomState::new();
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
    }

    #[test]
    fn formatting_shows_payload() {
        let v = Vertex::new("Tokyo");
        assert_eq!(v.to_string(), "Tokyo");
        assert_eq!(format!("{v:?}"), "\"Tokyo\"");
        assert_eq!(*v.payload(), "Tokyo");
        assert_eq!(v.into_payload(), "Tokyo");
    }
}
