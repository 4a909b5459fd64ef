/*!
`lgraphs` is a graph data structure & traversal library for **l**abelled graphs:
- Vertices carry an arbitrary payload (any `Clone + Eq + Hash + Debug` type) and are identified by it
- Edges are optionally weighted and either directed or undirected
- Graphs only grow: vertices and edges can be added but not removed

# Representation

A **vertex** is a thin wrapper [`Vertex<P>`](crate::vertex::Vertex) around its payload; two vertices
are equal iff their payloads are. An **edge** [`Edge<P>`](crate::edge::Edge) stores source,
destination, an optional `f64` weight and its [`EdgeKind`](crate::edge::EdgeKind).

### Directed vs Undirected

Every edge is stored as directed arcs:

- A **directed** edge `u -> v` is stored once, in the outgoing edges of `u`.
- An **undirected** edge between `u` and `v` is stored as the two arcs `u -> v` and `v -> u`.
  Both directions can be mixed within a single graph.

### Available Representations

See the [`repr`] module for the graph stores:

- [`AdjacencyMap`](crate::repr::AdjacencyMap): adjacency lists in insertion order
- [`AdjMatrix`](crate::repr::AdjMatrix): one optional cell per ordered vertex pair

# Design

All algorithms are written against the capability traits in [`ops`] and therefore run on any
store. Configurable algorithms/generators/writers are structs that one can alter using the
*Builder* pattern before running them on a graph. The most common functionality is also
available through traits on the graph itself.

Querying a vertex that was never created is reported as [`GraphError::VertexNotFound`];
"no path" and "empty container" are ordinary `None` values.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for vertices, edges, errors, basic graph operations, and all graph stores,
- [`algo`] includes lazy traversals (`graph.bfs(&start)`) and the breadth-first/depth-first path searches,
- [`gens`] includes random graph generators and deterministic substructures such as paths/cycles/stars,
- [`io`] includes writers for other formats such as GraphViz Dot,
- [`utils`] includes the [`Stack`](crate::utils::Stack) and [`Queue`](crate::utils::Queue) containers.

[`repr::digest`] enables computing a `Sha256`-hash for a given graph.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut graph = AdjacencyMap::new();
let [s, a, e] = [graph.create_vertex("S"), graph.create_vertex("A"), graph.create_vertex("E")];

graph.add_edge(EdgeKind::Undirected, &s, &a, Some(300.0)).unwrap();
graph.add_edge(EdgeKind::Directed, &a, &e, Some(50.0)).unwrap();

let route = graph.breadth_first_search(&s, &e).unwrap().unwrap();
assert_eq!(route.len(), 2);
assert!(graph.breadth_first_search(&e, &s).unwrap().is_none());
```

# Logging

The library emits [`tracing`] events (vertex creation, rejected edges, search progress and
backtracking) but never installs a subscriber.
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

pub use edge::*;
pub use error::*;
pub use vertex::*;

/// `lgraphs::prelude` includes definitions for vertices, edges and errors, all basic graph operation traits as well as all implemented stores.
pub mod prelude {
    pub use super::{edge::*, error::*, ops::*, repr::*, vertex::*};
}
