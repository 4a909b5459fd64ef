/*!
Path searches between two vertices.

- [`breadth_first_search`] explores the graph level by level and returns a path with the fewest
  edges as the list of traversed edges.
- [`depth_first_search`] follows the left-most unexplored branch as far as possible and
  backtracks on dead ends; the returned stack holds the path from start (bottom) to end (top).

Both searches visit outgoing edges in the order reported by [`AdjacencyList::edges_of`], so
results are deterministic for a given sequence of insertions.
*/

use fxhash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use super::*;

/// How a vertex was reached during a breadth-first search
#[derive(Debug, Clone, PartialEq)]
pub enum Visit<P> {
    /// The vertex the search started at
    Source,
    /// The vertex was discovered through this edge
    Edge(Edge<P>),
}

/// Returns a path from `start` to `end` with the fewest number of edges.
///
/// - `Ok(Some(edges))`: the edges in travel order; the first edge leaves `start`, the last one
///   enters `end`, and consecutive edges share their endpoints.
/// - `Ok(Some(vec![]))` if `start == end`.
/// - `Ok(None)` if `end` cannot be reached from `start`.
///
/// Among several shortest paths, the one discovered first according to edge insertion order wins.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `start` or `end` is not part of `graph`.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyMap::from_edges([("a", "b"), ("b", "c"), ("a", "c")]);
/// let path = breadth_first_search(&graph, &Vertex::new("a"), &Vertex::new("c"))
///     .unwrap()
///     .unwrap();
///
/// assert_eq!(path, vec![Edge::new(Vertex::new("a"), Vertex::new("c"))]);
/// ```
pub fn breadth_first_search<G>(
    graph: &G,
    start: &Vertex<G::Payload>,
    end: &Vertex<G::Payload>,
) -> Result<Option<Vec<Edge<G::Payload>>>>
where
    G: AdjacencyList,
{
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;
    debug!(start = ?start, end = ?end, "breadth-first search");

    let mut visits: FxHashMap<Vertex<G::Payload>, Visit<G::Payload>> = FxHashMap::default();
    visits.insert(start.clone(), Visit::Source);

    let mut queue = Queue::with_capacity(graph.len());
    queue.enqueue(start.clone());

    while let Some(u) = queue.dequeue() {
        if &u == end {
            let route = backtrack_route(&visits, end);
            debug!(length = route.len(), "found route");
            return Ok(Some(route));
        }

        for edge in graph.edges_of(&u)? {
            if !visits.contains_key(&edge.destination) {
                queue.enqueue(edge.destination.clone());
                visits.insert(edge.destination.clone(), Visit::Edge(edge));
            }
        }
    }

    debug!(explored = visits.len(), "no route");
    Ok(None)
}

/// Follows the recorded visits from `end` back to the source
fn backtrack_route<P: Payload>(visits: &FxHashMap<Vertex<P>, Visit<P>>, end: &Vertex<P>) -> Vec<Edge<P>> {
    let mut route = Vec::new();
    let mut vertex = end;

    while let Some(Visit::Edge(edge)) = visits.get(vertex) {
        route.push(edge.clone());
        vertex = &edge.source;
    }

    route.reverse();
    route
}

/// Searches a path from `start` to `end` by always descending into the first unvisited
/// neighbor and backtracking from dead ends.
///
/// Returns the stack of vertices on the path found: `start` at the bottom, `end` on top.
/// The path is not necessarily shortest.
///
/// - `Ok(Some(stack))` with a single element if `start == end`.
/// - `Ok(None)` if `end` cannot be reached from `start`; the stack ran empty.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `start` or `end` is not part of `graph`.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyMap::from_edges([("a", "b"), ("b", "x"), ("a", "c")]);
/// let path = depth_first_search(&graph, &Vertex::new("a"), &Vertex::new("c"))
///     .unwrap()
///     .unwrap();
///
/// // "b" and "x" were explored and backtracked
/// assert_eq!(path.to_string(), "[a, c]");
/// ```
pub fn depth_first_search<G>(
    graph: &G,
    start: &Vertex<G::Payload>,
    end: &Vertex<G::Payload>,
) -> Result<Option<Stack<Vertex<G::Payload>>>>
where
    G: AdjacencyList,
{
    depth_first_search_with(graph, start, end, |_| {})
}

/// Same as [`depth_first_search`], but calls `on_backtrack` with every vertex popped from the
/// stack because all of its neighbors were already visited, in the order of backtracking.
///
/// # Errors
/// Returns [`GraphError::VertexNotFound`] if `start` or `end` is not part of `graph`.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let graph = AdjacencyMap::from_edges([("a", "b"), ("b", "x"), ("a", "c")]);
/// let mut dead_ends = Vec::new();
/// depth_first_search_with(&graph, &Vertex::new("a"), &Vertex::new("c"), |u| {
///     dead_ends.push(*u.payload())
/// })
/// .unwrap();
///
/// assert_eq!(dead_ends, vec!["x", "b"]);
/// ```
pub fn depth_first_search_with<G, F>(
    graph: &G,
    start: &Vertex<G::Payload>,
    end: &Vertex<G::Payload>,
    mut on_backtrack: F,
) -> Result<Option<Stack<Vertex<G::Payload>>>>
where
    G: AdjacencyList,
    F: FnMut(&Vertex<G::Payload>),
{
    graph.check_vertex(start)?;
    graph.check_vertex(end)?;
    debug!(start = ?start, end = ?end, "depth-first search");

    let mut visited = FxHashSet::default();
    visited.insert(start.clone());

    let mut stack = Stack::with_capacity(graph.len());
    stack.push(start.clone());

    'outer: while let Some(top) = stack.peek() {
        if top == end {
            debug!(length = stack.len(), "found route");
            return Ok(Some(stack));
        }

        let top = top.clone();
        for edge in graph.edges_of(&top)? {
            if visited.insert(edge.destination.clone()) {
                stack.push(edge.destination);
                trace!(path = ?stack, "descend");
                continue 'outer;
            }
        }

        trace!(vertex = ?top, "backtrack");
        on_backtrack(&top);
        stack.pop();
    }

    debug!(explored = visited.len(), "no route");
    Ok(None)
}
