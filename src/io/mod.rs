/*!
# IO

Utilities for writing graphs to other formats.

Currently supported output formats:
- **Dot**: The [DOT language](https://graphviz.org/doc/info/lang.html) of [GraphViz](https://graphviz.org/).

[`GraphWriter`] is implemented by configurable writers for a specific format, while format
traits such as [`DotWrite`] provide shorthands with default settings directly on the graph.
*/

pub mod dot;

use std::io::{Result, Write};

use crate::prelude::*;

pub use dot::*;

/// Trait for types that can write graphs in a specific format.
///
/// Output goes to any [`Write`] instance, e.g. a `Vec<u8>` buffer or a socket the caller
/// already owns.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;
}
