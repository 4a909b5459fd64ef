/*!
# Graph Algorithms

This module provides the **traversal algorithms** built on top of the capability traits in
[`ops`](crate::ops). All algorithms are re-exported at the top level of this module, so you can
simply do:
```rust
use lgraphs::algo::*;
```
and gain access to lazy traversals (`graph.bfs(&start)`), reachability queries and the
breadth-first/depth-first path searches.
*/

mod search;
mod traversal;

use crate::{prelude::*, utils::*};

pub use search::*;
pub use traversal::*;
