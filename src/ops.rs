//! Capability traits every friendship graph offers to the query algorithms.
//!
//! Algorithms in [`crate::algo`] are written against these traits only, so they never
//! see how the store lays out persons or adjacency lists.

use std::ops::Range;

use crate::{error::*, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V in index order.
    fn vertices(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Traits pertaining getters for neighborhoods
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighbors of a given vertex in stored order.
    /// A friendship inserted twice yields the neighbor twice.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of stored neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns *true* if `u` has no friends
    /// ** Panics if `u >= n` **
    fn is_singleton(&self, u: Node) -> bool {
        self.degree_of(u) == 0
    }

    /// Returns an iterator to all vertices with non-zero degree
    fn vertices_no_singletons(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices().filter(|&u| !self.is_singleton(u))
    }
}

/// Resolves between person names and node indices
pub trait PersonLookup: GraphNodeOrder {
    /// Returns the index of the person called `name` if it exists
    fn index_of(&self, name: &str) -> Option<Node>;

    /// Returns the person stored at index `u`
    /// ** Panics if `u >= n` **
    fn person(&self, u: Node) -> &Person;

    /// Like [`PersonLookup::index_of`] but fails with [`GraphError::NotFound`]
    fn try_index_of(&self, name: &str) -> Result<Node> {
        self.index_of(name)
            .ok_or_else(|| GraphError::not_found(name))
    }

    /// Returns the name of the person stored at index `u`
    /// ** Panics if `u >= n` **
    fn name_of(&self, u: Node) -> &str {
        self.person(u).name()
    }

    /// Maps a sequence of indices to owned names, keeping the order
    fn names_of<I>(&self, nodes: I) -> Vec<String>
    where
        I: IntoIterator<Item = Node>,
    {
        nodes
            .into_iter()
            .map(|u| self.name_of(u).to_string())
            .collect()
    }

    /// Returns *true* if the person at `u` is a student at `school`
    fn attends(&self, u: Node, school: &str) -> bool {
        self.person(u).attends(school)
    }
}
