/*!
# Graph Stores

Every store implements the capability traits of [`ops`](crate::ops), so all algorithms run on
either of them:

- [`AdjacencyMap`]: adjacency lists in insertion order, parallel edges allowed,
- [`AdjMatrix`]: one optional cell per ordered vertex pair.

[`digest`] computes store-independent content hashes.
*/

use crate::{ops::*, *};

mod adjacency;
mod matrix;

pub mod digest;

pub use adjacency::*;
pub use matrix::*;
