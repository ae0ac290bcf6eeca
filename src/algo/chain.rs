/*!
Shortest introduction chains.

A chain from `start` to `end` lists every person along a minimum-hop path, both endpoints
included. It is reconstructed from the predecessor links of a [`BFSWithPredecessor`] that
stops as soon as `end` is dequeued. Among several shortest chains the one found first in
stored adjacency order is returned.
*/

use tracing::debug;

use super::*;
use crate::error::Result;

pub trait ShortestChain: AdjacencyList + PersonLookup {
    /// Computes the shortest chain between two indices.
    ///
    /// - `start == end` yields `[start]`.
    /// - Returns an empty vector if `end` cannot be reached from `start`.
    ///
    /// ** Panics if `start >= n || end >= n` **
    fn shortest_chain_between(&self, start: Node, end: Node) -> Vec<Node> {
        let mut parent = vec![INVALID_NODE; self.len()];

        for item in self.bfs_with_predecessor(start).stop_at(end) {
            if let Some(p) = item.predecessor() {
                parent[item.item() as usize] = p;
            }

            if item.item() == end {
                let mut chain = vec![end];
                let mut node = end;
                while node != start {
                    node = parent[node as usize];
                    chain.push(node);
                }
                chain.reverse();
                return chain;
            }
        }

        Vec::new()
    }

    /// Computes the shortest chain of names from `start` to `end`.
    ///
    /// Fails with [`GraphError::NotFound`](crate::error::GraphError::NotFound) if either name
    /// is unknown. An unreachable `end` is not an error but yields an empty chain.
    ///
    /// # Examples
    /// ```
    /// use friendgraph::{prelude::*, algo::*};
    ///
    /// let mut builder = FriendGraphBuilder::new();
    /// for name in ["a", "b", "c", "d"] {
    ///     builder.add_non_student(name).unwrap();
    /// }
    /// builder.add_friendship("a", "b").unwrap();
    /// builder.add_friendship("b", "c").unwrap();
    /// let graph = builder.build();
    ///
    /// assert_eq!(graph.shortest_chain("a", "c").unwrap(), vec!["a", "b", "c"]);
    /// assert!(graph.shortest_chain("a", "d").unwrap().is_empty());
    /// assert!(graph.shortest_chain("a", "x").is_err());
    /// ```
    fn shortest_chain(&self, start: &str, end: &str) -> Result<Vec<String>> {
        let u = self.try_index_of(start)?;
        let v = self.try_index_of(end)?;

        let chain = self.shortest_chain_between(u, v);
        debug!(start, end, length = chain.len(), "Computed shortest chain");

        Ok(self.names_of(chain))
    }
}

impl<G> ShortestChain for G where G: AdjacencyList + PersonLookup {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, testing::*};
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    #[test]
    fn chain_along_path() {
        let graph = graph_from_names(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("C", "D")]);
        assert_eq!(graph.shortest_chain("A", "D").unwrap(), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.shortest_chain("D", "B").unwrap(), vec!["D", "C", "B"]);
    }

    #[test]
    fn chain_to_self() {
        let graph = graph_from_names(&["A", "B", "E"], &[("A", "B")]);
        assert_eq!(graph.shortest_chain("E", "E").unwrap(), vec!["E"]);
        assert_eq!(graph.shortest_chain("A", "A").unwrap(), vec!["A"]);
    }

    #[test]
    fn no_chain_between_components() {
        let graph = graph_from_names(&["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]);
        assert!(graph.shortest_chain("A", "D").unwrap().is_empty());
        assert!(graph.shortest_chain_between(1, 2).is_empty());
    }

    #[test]
    fn unknown_names() {
        let graph = graph_from_names(&["A"], &[]);
        assert!(matches!(
            graph.shortest_chain("A", "Z"),
            Err(GraphError::NotFound { name }) if name == "Z"
        ));
        assert!(matches!(
            graph.shortest_chain("Y", "A"),
            Err(GraphError::NotFound { name }) if name == "Y"
        ));
    }

    #[test]
    fn shortcut_beats_detour() {
        // A - B - C - D - E and a shortcut B - E
        let graph = graph_from_names(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E"), ("B", "E")],
        );
        assert_eq!(graph.shortest_chain("A", "E").unwrap(), vec!["A", "B", "E"]);
    }

    #[test]
    fn ties_follow_adjacency_order() {
        // two chains of length 3 from A to D; via B was inserted first
        let graph = graph_from_names(
            &["A", "B", "C", "D"],
            &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")],
        );
        assert_eq!(graph.shortest_chain("A", "D").unwrap(), vec!["A", "B", "D"]);
    }

    #[test]
    fn chain_length_matches_distance() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        for n in [5, 20, 50] {
            for avg_deg in [1.0, 2.0, 4.0] {
                let graph = RandomFriendships::new()
                    .nodes(n)
                    .avg_deg(avg_deg)
                    .generate(rng);

                for u in graph.vertices() {
                    let distances = naive_distances(&graph, u);
                    for v in graph.vertices() {
                        let chain = graph.shortest_chain_between(u, v);
                        match distances[v as usize] {
                            None => assert!(chain.is_empty()),
                            Some(d) => {
                                assert_eq!(chain.len(), d as usize + 1);
                                assert_eq!(chain[0], u);
                                assert_eq!(*chain.last().unwrap(), v);
                                assert!(chain.windows(2).all(|w| {
                                    graph.neighbors_of(w[0]).any(|x| x == w[1])
                                }));
                            }
                        }
                    }
                }
            }
        }
    }
}
