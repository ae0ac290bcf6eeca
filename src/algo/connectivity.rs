use itertools::Itertools;

use super::*;

pub trait Connectivity: AdjacencyList + Sized {
    /// Returns an iterator over the connected components of the graph.
    /// Components are seeded at the unvisited node with smallest index and listed in BFS order.
    fn connected_components(&self) -> ConnectedComponents<'_, Self> {
        ConnectedComponents::new(self)
    }

    /// Returns the number of connected components
    fn number_of_components(&self) -> NumNodes {
        self.connected_components().count() as NumNodes
    }

    /// Returns the number of connected components after removing `excluded` and its
    /// friendships.
    /// ** Panics if `excluded >= n` **
    fn number_of_components_without(&self, excluded: Node) -> NumNodes {
        self.connected_components()
            .exclude_node(excluded)
            .count() as NumNodes
    }
}

impl<G> Connectivity for G where G: AdjacencyList + Sized {}

pub struct ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    graph: &'a G,
    excluded: Option<Node>,
    bfs: Option<BFS<'a, G>>,
}

impl<'a, G> ConnectedComponents<'a, G>
where
    G: AdjacencyList,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            excluded: None,
            bfs: None,
        }
    }

    /// Ignores `u` and all of its friendships.
    ///
    /// # Warning
    /// Only takes effect when called before the first component was requested.
    pub fn exclude_node(mut self, u: Node) -> Self {
        self.excluded = Some(u);
        self
    }
}

impl<G> Iterator for ConnectedComponents<'_, G>
where
    G: AdjacencyList,
{
    type Item = Vec<Node>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bfs.is_none() {
            let excluded = self.excluded;
            let start = self.graph.vertices().find(|&u| Some(u) != excluded)?;

            let mut bfs = self.graph.bfs(start);
            if let Some(u) = excluded {
                bfs.exclude_node(u);
            }
            self.bfs = Some(bfs);
        }

        let bfs = self.bfs.as_mut()?;
        loop {
            let cc = bfs.by_ref().collect_vec();
            if !cc.is_empty() {
                return Some(cc);
            }

            if !bfs.try_restart_at_unvisited() {
                return None;
            }
        }
    }
}
