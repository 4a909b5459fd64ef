//! # Dot
//!
//! The Dot-Format is a very extensive format used by [GraphViz](https://graphviz.org/) to allow
//! for detailed visualizations. We only use basic functionality to draw labelled vertices and
//! (weighted) edges.
//!
//! Graphs are always written as a `digraph`. Since an undirected connection is stored as two
//! arcs, the writer can merge both arcs into a single line drawn without arrowheads
//! (`dir=none`).
//!
//! ```
//! use lgraphs::{prelude::*, io::*};
//!
//! let mut graph = AdjacencyMap::new();
//! let [a, b] = [graph.create_vertex("a"), graph.create_vertex("b")];
//! graph.add_edge(EdgeKind::Undirected, &a, &b, Some(2.0)).unwrap();
//!
//! let mut buffer = Vec::new();
//! DotWriter::new().graph_name("cities").try_write_graph(&graph, &mut buffer).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(buffer).unwrap(),
//!     "digraph cities {\n  \"a\";\n  \"b\";\n  \"a\" -> \"b\" [label=\"2\", dir=none];\n}\n"
//! );
//! ```
use std::fmt::Display;

use fxhash::FxHashMap;

use super::*;

/// A writer for the Dot-Format
#[derive(Debug, Clone)]
pub struct DotWriter {
    /// Identifier written after `digraph` (default: `G`)
    graph_name: String,
    /// Attach weights as edge labels
    with_weights: bool,
    /// Draw the two arcs of an undirected edge as one line
    merge_undirected: bool,
}

impl Default for DotWriter {
    fn default() -> Self {
        Self {
            graph_name: "G".to_string(),
            with_weights: true,
            merge_undirected: true,
        }
    }
}

impl DotWriter {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name of the graph (`G` by default)
    pub fn graph_name<S>(mut self, name: S) -> Self
    where
        S: Into<String>,
    {
        self.graph_name = name.into();
        self
    }

    /// If *false*, weights are not written as edge labels
    pub fn with_weights(mut self, with_weights: bool) -> Self {
        self.with_weights = with_weights;
        self
    }

    /// If *false*, both arcs of an undirected edge are written separately
    pub fn merge_undirected(mut self, merge_undirected: bool) -> Self {
        self.merge_undirected = merge_undirected;
        self
    }

    /// Formats a vertex as a quoted Dot identifier
    fn format_vertex<P: Display>(u: &Vertex<P>) -> String {
        format!("\"{}\"", u.to_string().replace('\\', "\\\\").replace('"', "\\\""))
    }

    /// Writes the attribute list of an edge, if any
    fn format_attributes<P>(&self, edge: &Edge<P>, undirected: bool) -> String {
        let mut attributes = Vec::with_capacity(2);
        if self.with_weights {
            if let Some(w) = edge.weight {
                attributes.push(format!("label=\"{w}\""));
            }
        }
        if undirected {
            attributes.push("dir=none".to_string());
        }

        if attributes.is_empty() {
            String::new()
        } else {
            format!(" [{}]", attributes.join(", "))
        }
    }
}

impl<G> GraphWriter<G> for DotWriter
where
    G: AdjacencyList,
    G::Payload: Display,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        writeln!(writer, "digraph {} {{", self.graph_name)?;

        for u in graph.vertices() {
            writeln!(writer, "  {};", Self::format_vertex(u))?;
        }

        // reverse arcs still to be skipped, per undirected edge already written
        let mut pending: FxHashMap<Edge<G::Payload>, usize> = FxHashMap::default();

        for edge in graph.edges() {
            let merge = self.merge_undirected && edge.kind.is_undirected();

            if merge {
                if let Some(count) = pending.get_mut(&edge).filter(|c| **c > 0) {
                    *count -= 1;
                    continue;
                }
                *pending.entry(edge.reversed()).or_default() += 1;
            }

            writeln!(
                writer,
                "  {} -> {}{};",
                Self::format_vertex(&edge.source),
                Self::format_vertex(&edge.destination),
                self.format_attributes(&edge, merge)
            )?;
        }

        writeln!(writer, "}}")
    }
}

/// Trait for writing a graph to a writer in the Dot-Format.
/// Shorthand for default settings.
pub trait DotWrite {
    /// Tries to write the graph to a writer
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write;
}

impl<G> DotWrite for G
where
    G: AdjacencyList,
    G::Payload: Display,
{
    fn try_write_dot<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        DotWriter::default().try_write_graph(self, writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write<G: DotWrite>(graph: &G) -> String {
        let mut buffer = Vec::new();
        graph.try_write_dot(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn directed_and_undirected() {
        let mut graph = AdjacencyMap::new();
        let [a, b, c] = [graph.create_vertex(1u32), graph.create_vertex(2), graph.create_vertex(3)];
        graph.add_edge(EdgeKind::Directed, &a, &b, None).unwrap();
        graph.add_edge(EdgeKind::Undirected, &b, &c, Some(0.5)).unwrap();

        assert_eq!(
            write(&graph),
            "digraph G {\n  \"1\";\n  \"2\";\n  \"3\";\n  \"1\" -> \"2\";\n  \"2\" -> \"3\" [label=\"0.5\", dir=none];\n}\n"
        );
    }

    #[test]
    fn parallel_undirected_edges_and_loops() {
        let mut graph = AdjacencyMap::new();
        let [a, b] = [graph.create_vertex('a'), graph.create_vertex('b')];
        graph.add_edge(EdgeKind::Undirected, &a, &b, None).unwrap();
        graph.add_edge(EdgeKind::Undirected, &a, &b, None).unwrap();
        graph.add_edge(EdgeKind::Undirected, &a, &a, None).unwrap();

        let dot = write(&graph);
        assert_eq!(dot.matches("\"a\" -> \"b\" [dir=none]").count(), 2);
        assert_eq!(dot.matches("\"a\" -> \"a\" [dir=none]").count(), 1);
        assert!(!dot.contains("\"b\" -> \"a\""));
    }

    #[test]
    fn unmerged_without_weights() {
        let mut graph = AdjacencyMap::new();
        let [a, b] = [graph.create_vertex("x \"y\""), graph.create_vertex("z")];
        graph.add_edge(EdgeKind::Undirected, &a, &b, Some(4.0)).unwrap();

        let mut buffer = Vec::new();
        DotWriter::new()
            .with_weights(false)
            .merge_undirected(false)
            .try_write_graph(&graph, &mut buffer)
            .unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "digraph G {\n  \"x \\\"y\\\"\";\n  \"z\";\n  \"x \\\"y\\\"\" -> \"z\";\n  \"z\" -> \"x \\\"y\\\"\";\n}\n"
        );
    }
}
