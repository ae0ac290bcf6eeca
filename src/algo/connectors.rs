/*!
Connectors (articulation points).

A connector is a person whose removal splits their part of the network: some two of their
friends can no longer reach each other. Connectors are found with the classic low-link
depth-first search, started once per unvisited root so disconnected graphs are covered.

- `depth[u]` is the depth of `u` in its DFS tree (roots have depth 1). Along any root-to-leaf
  path depths strictly increase, and low-links are only ever compared against ancestors, so
  depths serve as discovery numbers.
- `low[u]` is the smallest depth reachable from the subtree of `u` using at most one
  non-tree edge.
- A non-root `u` is a connector iff it has a tree child `v` with `low[v] >= depth[u]`.
- A root is a connector iff it has more than one tree child.

The search keeps an explicit stack of neighbor iterators, so its depth is not bounded by the
call stack.
*/

use tracing::debug;

use super::*;

/// Articulation-point search over an entire graph
pub struct ConnectorSearch<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    visited: NodeBitSet,
    depth: Vec<NumNodes>,
    low: Vec<NumNodes>,
    is_connector: NodeBitSet,
    connectors: Vec<Node>,
}

impl<'a, G> ConnectorSearch<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            visited: graph.vertex_bitset_unset(),
            depth: vec![0; graph.len()],
            low: vec![0; graph.len()],
            is_connector: graph.vertex_bitset_unset(),
            connectors: Vec::new(),
        }
    }

    /// Returns all connectors in the order they were detected, each once
    pub fn compute(mut self) -> Vec<Node> {
        for root in self.graph.vertices() {
            if !self.visited.get_bit(root) {
                self.search_from(root);
            }
        }
        self.connectors
    }

    fn discover(&mut self, u: Node, depth: NumNodes) {
        self.visited.set_bit(u);
        self.depth[u as usize] = depth;
        self.low[u as usize] = depth;
    }

    fn update_low(&mut self, u: Node, value: NumNodes) {
        let low = &mut self.low[u as usize];
        *low = (*low).min(value);
    }

    fn mark_connector(&mut self, u: Node) {
        if !self.is_connector.set_bit(u) {
            self.connectors.push(u);
        }
    }

    fn search_from(&mut self, root: Node) {
        let graph = self.graph;
        let mut root_children: NumNodes = 0;

        self.discover(root, 1);
        let mut stack = vec![(root, graph.neighbors_of(root))];

        while let Some((u, neighbors)) = stack.last_mut() {
            let u = *u;

            if let Some(v) = neighbors.next() {
                if self.visited.get_bit(v) {
                    // back edge (or the edge to the DFS parent)
                    self.update_low(u, self.depth[v as usize]);
                } else {
                    if u == root {
                        root_children += 1;
                    }
                    self.discover(v, self.depth[u as usize] + 1);
                    stack.push((v, graph.neighbors_of(v)));
                }
                continue;
            }

            // all neighbors of `u` are done; close the tree edge (parent, u)
            stack.pop();
            let Some(&(parent, _)) = stack.last() else {
                continue;
            };

            if self.low[u as usize] < self.depth[parent as usize] {
                self.update_low(parent, self.low[u as usize]);
            } else if parent != root || root_children > 1 {
                self.mark_connector(parent);
            }
        }
    }
}

pub trait Connectors: AdjacencyList {
    /// Computes all connectors as indices, in order of detection
    fn connector_nodes(&self) -> Vec<Node> {
        ConnectorSearch::new(self).compute()
    }

    /// Computes the names of all connectors, in order of detection.
    ///
    /// # Examples
    /// ```
    /// use friendgraph::{prelude::*, algo::*};
    ///
    /// // two triangles sharing `m`
    /// let mut builder = FriendGraphBuilder::new();
    /// for name in ["a", "b", "m", "c", "d"] {
    ///     builder.add_non_student(name).unwrap();
    /// }
    /// for (x, y) in [("a", "b"), ("b", "m"), ("m", "a"), ("m", "c"), ("c", "d"), ("d", "m")] {
    ///     builder.add_friendship(x, y).unwrap();
    /// }
    /// let graph = builder.build();
    ///
    /// assert_eq!(graph.connectors(), vec!["m"]);
    /// ```
    fn connectors(&self) -> Vec<String>
    where
        Self: PersonLookup,
    {
        let connectors = self.connector_nodes();
        debug!(connectors = connectors.len(), "Computed connectors");
        self.names_of(connectors)
    }
}

impl<G> Connectors for G where G: AdjacencyList {}
