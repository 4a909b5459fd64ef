/*!
Graph traversal iterators.

This module provides:
- a generic traversal iterator [`TraversalSearch`] whose frontier container decides the visiting
  order ([`Bfs`] with a [`Queue`], [`Dfs`] with a [`Stack`]),
- the [`Traversal`] trait that exposes traversals and path searches directly as methods on every
  graph implementing [`AdjacencyList`].

Traversals are lazy: vertices are discovered only as far as the iterator is advanced.
*/

use fxhash::FxHashSet;

use super::*;

/// Generic traversal iterator over all vertices reachable from a start vertex.
///
/// Maintains an explicit frontier (queue or stack) of vertices to visit and a set of
/// discovered vertices. A vertex is marked as discovered when it is pushed, so every
/// reachable vertex is yielded exactly once.
pub struct TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: Sequencer<Vertex<G::Payload>>,
{
    graph: &'a G,
    visited: FxHashSet<Vertex<G::Payload>>,
    sequencer: S,
    stop_at: Option<Vertex<G::Payload>>,
}

/// A traversal visiting vertices in breadth-first order
pub type Bfs<'a, G> = TraversalSearch<'a, G, Queue<Vertex<<G as GraphType>::Payload>>>;

/// A traversal visiting vertices in depth-first order
pub type Dfs<'a, G> = TraversalSearch<'a, G, Stack<Vertex<<G as GraphType>::Payload>>>;

impl<G, S> Iterator for TraversalSearch<'_, G, S>
where
    G: AdjacencyList,
    S: Sequencer<Vertex<G::Payload>>,
{
    type Item = Vertex<G::Payload>;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.sequencer.pop()?;

        if self.stop_at.as_ref() == Some(&u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            // `u` was discovered in this graph, so its edges are always available
            for v in self.graph.neighbors_of(&u).into_iter().flatten() {
                if self.visited.insert(v.clone()) {
                    self.sequencer.push(v);
                }
            }
        }

        Some(u)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.sequencer.cardinality(), Some(self.graph.len()))
    }
}

impl<'a, G, S> TraversalSearch<'a, G, S>
where
    G: AdjacencyList,
    S: Sequencer<Vertex<G::Payload>>,
{
    /// Creates a new traversal iterator starting from `start`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if `start` is not part of `graph`.
    pub fn new(graph: &'a G, start: &Vertex<G::Payload>) -> Result<Self> {
        graph.check_vertex(start)?;

        let mut visited = FxHashSet::default();
        visited.insert(start.clone());

        Ok(Self {
            graph,
            visited,
            sequencer: S::init(start.clone()),
            stop_at: None,
        })
    }

    /// Returns the graph being traversed
    pub fn graph_ref(&self) -> &G {
        self.graph
    }

    /// Returns *true* if `u` was discovered so far (or excluded)
    pub fn did_visit(&self, u: &Vertex<G::Payload>) -> bool {
        self.visited.contains(u)
    }

    /// Tries to restart the search at a yet undiscovered vertex (in creation order) and returns
    /// *true* iff successful. Requires that the search came to a halt earlier, i.e. `self.next()`
    /// returned `None`.
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert_eq!(self.sequencer.cardinality(), 0);
        let graph = self.graph;
        let vertex = graph.vertices().find(|u| !self.visited.contains(*u));
        match vertex {
            None => false,
            Some(x) => {
                self.visited.insert(x.clone());
                self.sequencer.push(x.clone());
                true
            }
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: Vertex<G::Payload>) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: Vertex<G::Payload>) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Excludes a vertex from the search. It will be treated as if it was already visited,
    /// i.e. no edges to or from that vertex will be taken.
    ///
    /// # Warning
    /// Calling this method has no effect if the vertex is already in the frontier. It is
    /// therefore highly recommended to call this method directly after the constructor.
    pub fn exclude_vertex(&mut self, u: Vertex<G::Payload>) {
        self.visited.insert(u);
    }

    /// Builder variant of [`TraversalSearch::exclude_vertex`]
    pub fn with_vertex_excluded(mut self, u: Vertex<G::Payload>) -> Self {
        self.exclude_vertex(u);
        self
    }

    /// Exclude multiple vertices from traversal. It is functionally equivalent to repeatedly
    /// calling [`TraversalSearch::exclude_vertex`].
    pub fn exclude_vertices<I>(&mut self, us: I)
    where
        I: IntoIterator<Item = Vertex<G::Payload>>,
    {
        for u in us {
            self.exclude_vertex(u);
        }
    }

    /// Builder variant of [`TraversalSearch::exclude_vertices`]
    pub fn with_vertices_excluded<I>(mut self, us: I) -> Self
    where
        I: IntoIterator<Item = Vertex<G::Payload>>,
    {
        self.exclude_vertices(us);
        self
    }
}

/// Provides convenient traversal and path search methods on every graph
pub trait Traversal: AdjacencyList {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjacencyMap::from_edges([(0u32, 1u32), (0, 2), (1, 3)]);
    ///
    /// let order: Vec<_> = g.bfs(&Vertex::new(0)).unwrap().map(Vertex::into_payload).collect();
    /// assert_eq!(order, vec![0, 1, 2, 3]);
    /// ```
    fn bfs(&self, start: &Vertex<Self::Payload>) -> Result<Bfs<'_, Self>> {
        Bfs::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let g = AdjacencyMap::from_edges([(0u32, 1u32), (0, 2), (1, 3)]);
    ///
    /// let order: Vec<_> = g.dfs(&Vertex::new(0)).unwrap().map(Vertex::into_payload).collect();
    /// assert_eq!(order, vec![0, 2, 1, 3]);
    /// ```
    fn dfs(&self, start: &Vertex<Self::Payload>) -> Result<Dfs<'_, Self>> {
        Dfs::new(self, start)
    }

    /// Returns *true* if there exists a directed path from `start` to `end`.
    ///
    /// # Errors
    /// Returns [`GraphError::VertexNotFound`] if either vertex is not part of the graph.
    fn is_reachable(
        &self,
        start: &Vertex<Self::Payload>,
        end: &Vertex<Self::Payload>,
    ) -> Result<bool> {
        self.check_vertex(end)?;
        Ok(self.bfs(start)?.stop_at(end.clone()).any(|u| &u == end))
    }

    /// Shortest path (by number of edges) from `start` to `end`.
    /// See [`breadth_first_search`](super::breadth_first_search).
    fn breadth_first_search(
        &self,
        start: &Vertex<Self::Payload>,
        end: &Vertex<Self::Payload>,
    ) -> Result<Option<Vec<Edge<Self::Payload>>>> {
        super::breadth_first_search(self, start, end)
    }

    /// Some path from `start` to `end` found by exploring the left-most branch first.
    /// See [`depth_first_search`](super::depth_first_search).
    fn depth_first_search(
        &self,
        start: &Vertex<Self::Payload>,
        end: &Vertex<Self::Payload>,
    ) -> Result<Option<Stack<Vertex<Self::Payload>>>> {
        super::depth_first_search(self, start, end)
    }
}

impl<G: AdjacencyList> Traversal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::gens::*;

    fn payloads<I: Iterator<Item = Vertex<u32>>>(iter: I) -> Vec<u32> {
        iter.map(Vertex::into_payload).collect()
    }

    fn tree() -> AdjacencyMap<u32> {
        //       0
        //    1     2
        //  3   4     5
        AdjacencyMap::from_edges([(0u32, 1u32), (0, 2), (1, 3), (1, 4), (2, 5)])
    }

    #[test]
    fn bfs_order() {
        let graph = tree();
        assert_eq!(
            payloads(graph.bfs(&Vertex::new(0)).unwrap()),
            vec![0, 1, 2, 3, 4, 5]
        );
        assert_eq!(payloads(graph.bfs(&Vertex::new(1)).unwrap()), vec![1, 3, 4]);
    }

    #[test]
    fn dfs_order() {
        let graph = tree();
        assert_eq!(
            payloads(graph.dfs(&Vertex::new(0)).unwrap()),
            vec![0, 2, 5, 1, 4, 3]
        );
    }

    #[test]
    fn stop_at() {
        let graph = tree();
        assert_eq!(
            payloads(graph.bfs(&Vertex::new(0)).unwrap().stop_at(Vertex::new(2))),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn excluded_vertices() {
        let graph = tree();
        assert_eq!(
            payloads(
                graph
                    .bfs(&Vertex::new(0))
                    .unwrap()
                    .with_vertex_excluded(Vertex::new(1))
            ),
            vec![0, 2, 5]
        );
        assert_eq!(
            payloads(
                graph
                    .dfs(&Vertex::new(0))
                    .unwrap()
                    .with_vertices_excluded([Vertex::new(2), Vertex::new(3)])
            ),
            vec![0, 1, 4]
        );
    }

    #[test]
    fn restart_covers_all_vertices() {
        let mut graph = tree();
        graph.create_vertex(6);

        let mut search = graph.bfs(&Vertex::new(1)).unwrap();
        let mut seen = search.by_ref().collect_vec();
        while search.try_restart_at_unvisited() {
            seen.extend(search.by_ref());
        }

        assert_eq!(
            payloads(seen.into_iter()),
            vec![1, 3, 4, 0, 2, 5, 6]
        );
        assert!(search.did_visit(&Vertex::new(6)));
        assert_eq!(search.graph_ref().number_of_vertices(), 7);
    }

    #[test]
    fn unknown_start() {
        let graph = tree();
        assert!(graph.bfs(&Vertex::new(17)).is_err());
        assert!(graph.dfs(&Vertex::new(17)).is_err());
        assert!(graph.is_reachable(&Vertex::new(0), &Vertex::new(17)).is_err());
    }

    #[test]
    fn reachability_matches_traversal() {
        let rng = &mut Pcg64Mcg::seed_from_u64(21);

        for _ in 0..20 {
            let graph: AdjacencyMap<u32> =
                AdjacencyMap::gnp_no_loops(rng, 20, 0.08, EdgeKind::Directed);
            let start = Vertex::new(0);

            let reached: Vec<_> = graph.bfs(&start).unwrap().sorted().collect();
            let reached_dfs: Vec<_> = graph.dfs(&start).unwrap().sorted().collect();
            assert_eq!(reached, reached_dfs);

            for u in graph.vertices() {
                assert_eq!(
                    graph.is_reachable(&start, u).unwrap(),
                    reached.binary_search(u).is_ok()
                );
            }
        }
    }
}
