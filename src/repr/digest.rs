/*!
# Graph Hash Digests

This module provides the [`GraphDigest`] trait, which computes **hash-based digests** of graphs
that are independent of the underlying store.

The digest encodes:
- the number of vertices,
- the sorted list of vertex records, and
- the sorted list of arc records (source, destination, weight),

before feeding them into a cryptographic hash function. Payloads are encoded through their
`Debug` rendering and every variable-length field is length-prefixed.

## Example
```
use lgraphs::{prelude::*, repr::digest::GraphDigest};

let mut list = AdjacencyMap::new();
let mut matrix = AdjMatrix::new();

let [a, b] = [list.create_vertex("a"), list.create_vertex("b")];
list.add_edge(EdgeKind::Directed, &a, &b, Some(1.5)).unwrap();

let [b, a] = [matrix.create_vertex("b"), matrix.create_vertex("a")];
matrix.add_edge(EdgeKind::Directed, &a, &b, Some(1.5)).unwrap();

// Computes a SHA-256 digest (hex string of length 64).
assert_eq!(list.digest_sha256().len(), 64);
assert_eq!(list.digest_sha256(), matrix.digest_sha256());
```
*/

use std::fmt::LowerHex;

use super::*;
use ::digest::{Digest, Output};
use itertools::Itertools;

/// Trait for computing a **canonical hash digest** of a graph.
///
/// - Vertices and arcs are encoded in sorted order, so creation and insertion order do not matter.
/// - Parallel arcs are part of the digest; the edge kind is not.
pub trait GraphDigest {
    /// Computes a digest of the graph using the provided hash function `D` and returns it as a
    /// hexadecimal string.
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest;

    /// Computes a **SHA-256 digest** of the graph.
    /// The returned string is exactly 64 characters long.
    fn digest_sha256(&self) -> String {
        self.digest::<sha2::Sha256>()
    }
}

/// Appends `bytes` prefixed by their length
fn encode_field(buffer: &mut Vec<u8>, bytes: &[u8]) {
    buffer.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
    buffer.extend_from_slice(bytes);
}

fn encode_vertex<P: Payload>(buffer: &mut Vec<u8>, u: &Vertex<P>) {
    encode_field(buffer, format!("{u:?}").as_bytes());
}

impl<G> GraphDigest for G
where
    G: AdjacencyList,
{
    fn digest<D>(&self) -> String
    where
        Output<D>: LowerHex,
        D: Digest,
    {
        let mut hasher = D::new();

        // first encode the number of vertices in the graph
        hasher.update((self.number_of_vertices() as u64).to_le_bytes());

        let vertices = self
            .vertices()
            .map(|u| {
                let mut buffer = Vec::new();
                encode_vertex(&mut buffer, u);
                buffer
            })
            .sorted_unstable();
        for record in vertices {
            hasher.update(record);
        }

        // then append a sorted arc list
        let arcs = self
            .edges()
            .map(|edge| {
                let mut buffer = Vec::new();
                encode_vertex(&mut buffer, &edge.source);
                encode_vertex(&mut buffer, &edge.destination);
                match edge.weight {
                    Some(w) => {
                        buffer.push(1);
                        buffer.extend_from_slice(&w.to_bits().to_le_bytes());
                    }
                    None => buffer.push(0),
                }
                buffer
            })
            .sorted_unstable();
        for record in arcs {
            hasher.update(record);
        }

        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle<G>(weight: Weight) -> G
    where
        G: GraphNew + GraphEdgeEditing + GraphType<Payload = char>,
    {
        let mut graph = G::new();
        let [a, b, c] = [graph.create_vertex('a'), graph.create_vertex('b'), graph.create_vertex('c')];
        graph
            .add_edges([
                Edge::weighted(a.clone(), b.clone(), weight).with_kind(EdgeKind::Undirected),
                Edge::weighted(b, c.clone(), 1.0),
                Edge::new(c, a),
            ])
            .unwrap();
        graph
    }

    #[test]
    fn store_independent() {
        let list: AdjacencyMap<char> = triangle(2.0);
        let matrix: AdjMatrix<char> = triangle(2.0);

        assert_eq!(list.digest_sha256().len(), 64);
        assert_eq!(list.digest_sha256(), matrix.digest_sha256());
    }

    #[test]
    fn weights_matter() {
        let a: AdjacencyMap<char> = triangle(2.0);
        let b: AdjacencyMap<char> = triangle(3.0);
        assert_ne!(a.digest_sha256(), b.digest_sha256());
    }

    #[test]
    fn isolated_vertices_matter() {
        let mut a: AdjacencyMap<char> = triangle(2.0);
        let before = a.digest_sha256();
        a.create_vertex('d');
        assert_ne!(before, a.digest_sha256());
    }

    #[test]
    fn payload_boundaries() {
        let mut a = AdjacencyMap::new();
        let [x, y] = [a.create_vertex("ab".to_string()), a.create_vertex("c".to_string())];
        a.add_edge(EdgeKind::Directed, &x, &y, None).unwrap();

        let mut b = AdjacencyMap::new();
        let [x, y] = [b.create_vertex("a".to_string()), b.create_vertex("bc".to_string())];
        b.add_edge(EdgeKind::Directed, &x, &y, None).unwrap();

        assert_ne!(a.digest_sha256(), b.digest_sha256());
    }
}
