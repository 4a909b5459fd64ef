use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::Vertex;

/// Weight attached to an edge. Absence (`None`) means the edge is unweighted.
pub type Weight = f64;

/// We limit the number of stored (directed) edges to `2^32 - 1`.
pub type NumEdges = u32;

/// Tag recording how an edge was requested.
///
/// Graphs only ever store directed arcs: an [`EdgeKind::Undirected`] request between `A` and
/// `B` is stored as the two arcs `A -> B` and `B -> A`, both carrying this tag.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum EdgeKind {
    /// A one-way arc
    #[default]
    Directed,
    /// One half of an undirected connection
    Undirected,
}

impl EdgeKind {
    /// Returns *true* for [`EdgeKind::Undirected`]
    pub const fn is_undirected(&self) -> bool {
        matches!(self, EdgeKind::Undirected)
    }
}

/// A directed arc between two vertices with an optional weight.
///
/// Two edges are equal iff source, destination and weight match; the [`EdgeKind`] is
/// bookkeeping and does not take part in equality or hashing. Weights are compared by their bit
/// pattern so that `Eq` and `Hash` agree with each other.
#[derive(Clone)]
pub struct Edge<P> {
    pub source: Vertex<P>,
    pub destination: Vertex<P>,
    pub weight: Option<Weight>,
    pub kind: EdgeKind,
}

impl<P> Edge<P> {
    /// Creates an unweighted directed edge
    pub fn new(source: Vertex<P>, destination: Vertex<P>) -> Self {
        Self {
            source,
            destination,
            weight: None,
            kind: EdgeKind::Directed,
        }
    }

    /// Creates a weighted directed edge
    pub fn weighted(source: Vertex<P>, destination: Vertex<P>, weight: Weight) -> Self {
        Self {
            weight: Some(weight),
            ..Self::new(source, destination)
        }
    }

    /// Sets the kind of the edge
    pub fn with_kind(mut self, kind: EdgeKind) -> Self {
        self.kind = kind;
        self
    }

    /// Returns *true* if the edge carries a weight
    pub fn is_weighted(&self) -> bool {
        self.weight.is_some()
    }

    /// Returns the weight as raw bits (used for equality & hashing)
    fn weight_bits(&self) -> Option<u64> {
        self.weight.map(Weight::to_bits)
    }
}

impl<P: Clone> Edge<P> {
    /// Reverses the edge by switching the endpoints. Weight and kind are kept.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            weight: self.weight,
            kind: self.kind,
        }
    }
}

impl<P: PartialEq> Edge<P> {
    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.source == self.destination
    }
}

impl<P: PartialEq> PartialEq for Edge<P> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && self.weight_bits() == other.weight_bits()
    }
}

impl<P: Eq> Eq for Edge<P> {}

impl<P: Hash> Hash for Edge<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
        self.weight_bits().hash(state);
    }
}

impl<P: Display> Display for Edge<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{} -> {} ({w})", self.source, self.destination),
            None => write!(f, "{} -> {}", self.source, self.destination),
        }
    }
}

impl<P: Debug> Debug for Edge<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.weight {
            Some(w) => write!(f, "{:?} -> {:?} ({w})", self.source, self.destination),
            None => write!(f, "{:?} -> {:?}", self.source, self.destination),
        }
    }
}

impl<P> From<(P, P)> for Edge<P> {
    fn from(value: (P, P)) -> Self {
        Edge::new(Vertex::new(value.0), Vertex::new(value.1))
    }
}

impl<P> From<(P, P, Weight)> for Edge<P> {
    fn from(value: (P, P, Weight)) -> Self {
        Edge::weighted(Vertex::new(value.0), Vertex::new(value.1), value.2)
    }
}

impl<P: Clone> From<&Edge<P>> for Edge<P> {
    fn from(value: &Edge<P>) -> Self {
        value.clone()
    }
}
