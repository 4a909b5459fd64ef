/// Stamps out the contract tests every graph store has to pass.
///
/// `$multi` states whether the store keeps parallel arcs in insertion order (*true*) or keeps
/// at most one arc per ordered pair, replacing it on re-insertion and reporting arcs in
/// destination creation order (*false*).
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $multi:literal) => {
        #[cfg(test)]
        mod $env {
            use crate::{ops::*, repr::*, *};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            fn new_graph() -> $graph<u32> {
                $graph::new()
            }

            #[test]
            fn graph_new() {
                let graph = new_graph();
                assert!(graph.is_empty());
                assert!(graph.has_no_edges());
                assert_eq!(graph.vertices().count(), 0);
            }

            #[test]
            fn create_vertex_is_idempotent() {
                let mut graph = new_graph();
                let [a, b] = [graph.create_vertex(1), graph.create_vertex(2)];
                graph.add_edge(EdgeKind::Directed, &a, &b, Some(3.0)).unwrap();

                let again = graph.create_vertex(1);
                assert_eq!(again, a);
                assert_eq!(graph.number_of_vertices(), 2);
                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.weight_of(&a, &b), Ok(Some(3.0)));
            }

            #[test]
            fn fresh_vertex_has_no_edges() {
                let mut graph = new_graph();
                let a = graph.create_vertex(7);

                assert_eq!(graph.edges_of(&a).unwrap().count(), 0);
                assert_eq!(graph.degree_of(&a), Ok(0));
                assert_eq!(graph.weight_of(&a, &a), Ok(None));
            }

            #[test]
            fn undirected_edges_are_symmetric() {
                let mut graph = new_graph();
                let [a, b] = [graph.create_vertex(0), graph.create_vertex(1)];
                graph.add_edge(EdgeKind::Undirected, &a, &b, Some(2.5)).unwrap();

                assert_eq!(graph.number_of_edges(), 2);
                assert_eq!(graph.weight_of(&a, &b), Ok(Some(2.5)));
                assert_eq!(graph.weight_of(&b, &a), Ok(Some(2.5)));
                assert_eq!(graph.neighbors_of(&b).unwrap().collect_vec(), vec![a.clone()]);

                let edge = graph.edge_between(&b, &a).unwrap().unwrap();
                assert_eq!(edge.kind, EdgeKind::Undirected);
                assert_eq!(edge.source, b);
            }

            #[test]
            fn unknown_vertices_are_rejected() {
                let mut graph = new_graph();
                let a = graph.create_vertex(0);
                let ghost = Vertex::new(42);

                assert!(graph.edges_of(&ghost).is_err());
                assert!(graph.degree_of(&ghost).is_err());
                assert!(graph.weight_of(&ghost, &a).is_err());
                assert_eq!(graph.weight_of(&a, &ghost), Ok(None));
                assert!(!graph.has_edge(&ghost, &a));

                assert_eq!(
                    graph.add_edge(EdgeKind::Undirected, &a, &ghost, None),
                    Err(GraphError::vertex_not_found(&ghost))
                );
                assert!(!graph.try_add_edge(Edge::new(ghost.clone(), a.clone())));
                assert!(graph.has_no_edges());
                assert!(!graph.has_vertex(&ghost));
            }

            #[test]
            fn from_edges() {
                let graph: $graph<u32> = $graph::from_edges([(0u32, 1u32), (2, 1), (1, 0)]);

                assert_eq!(
                    graph.vertices().map(|u| *u.payload()).collect_vec(),
                    vec![0, 1, 2]
                );
                assert_eq!(graph.number_of_edges(), 3);
                assert!(graph.has_edge(&Vertex::new(2), &Vertex::new(1)));
                assert!(!graph.has_edge(&Vertex::new(1), &Vertex::new(2)));
            }

            #[test]
            fn random_edges_match_reference() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [5u32, 10, 20] {
                    for m in [n, n * 3, n * 6] {
                        let mut graph = new_graph();
                        let vertices = graph.create_vertices(0..n);

                        // arcs leaving each vertex in insertion order
                        let mut arcs: Vec<Vec<(u32, Weight)>> = vec![Vec::new(); n as usize];

                        for _ in 0..m {
                            let u = rng.random_range(0..n);
                            let v = rng.random_range(0..n);
                            let weight = rng.random_range(1..100) as Weight;
                            let kind = if rng.random_bool(0.5) {
                                EdgeKind::Undirected
                            } else {
                                EdgeKind::Directed
                            };

                            graph
                                .add_edge(kind, &vertices[u as usize], &vertices[v as usize], Some(weight))
                                .unwrap();

                            arcs[u as usize].push((v, weight));
                            if kind.is_undirected() {
                                arcs[v as usize].push((u, weight));
                            }
                        }

                        let mut total = 0;
                        for u in 0..n {
                            let vertex = &vertices[u as usize];
                            let list = &arcs[u as usize];

                            let expected = if $multi {
                                list.iter().map(|&(v, _)| v).collect_vec()
                            } else {
                                list.iter().map(|&(v, _)| v).sorted().dedup().collect_vec()
                            };

                            assert_eq!(
                                graph.neighbors_of(vertex).unwrap().map(|v| *v.payload()).collect_vec(),
                                expected
                            );
                            assert_eq!(graph.degree_of(vertex), Ok(expected.len() as NumEdges));
                            total += expected.len() as NumEdges;

                            for v in 0..n {
                                let mut matching = list.iter().filter(|&&(w, _)| w == v).map(|&(_, x)| x);
                                let expected = if $multi { matching.next() } else { matching.last() };
                                assert_eq!(
                                    graph.weight_of(vertex, &vertices[v as usize]),
                                    Ok(expected)
                                );
                            }
                        }

                        assert_eq!(graph.number_of_edges(), total);
                        assert_eq!(graph.edges().count(), total as usize);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
