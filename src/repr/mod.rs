/*!
# Friendship Graph Store

[`FriendGraph`] owns every [`Person`] together with a name index and the adjacency lists.
It is created through a [`FriendGraphBuilder`] and is immutable afterwards, so shared
references can be handed to any number of concurrent queries.

Adjacency lists are stored in **compressed sparse row** form: all neighbor lists live in one
flattened buffer and `offsets[u]..offsets[u + 1]` delimits the list of `u`. Neighbors appear
in the order their friendships were inserted.
*/

mod builder;

use std::slice::Iter;

use fxhash::FxHashMap;

use crate::{ops::*, *};

pub use builder::*;

/// Immutable friendship graph.
///
/// # Examples
/// ```
/// use friendgraph::prelude::*;
///
/// let mut builder = FriendGraphBuilder::new();
/// builder.add_student("sam", "rutgers").unwrap();
/// builder.add_non_student("nick").unwrap();
/// builder.add_friendship("sam", "nick").unwrap();
/// let graph = builder.build();
///
/// assert_eq!(graph.number_of_nodes(), 2);
/// assert_eq!(graph.index_of("nick"), Some(1));
/// assert_eq!(graph.neighbors_of(0).collect::<Vec<_>>(), vec![1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FriendGraph {
    persons: Vec<Person>,
    index: FxHashMap<String, Node>,
    offsets: Vec<usize>,
    neighbors: Vec<Node>,
    friendships: Vec<Edge>,
}

impl FriendGraph {
    /// Returns the number of inserted friendships (duplicates included)
    pub fn number_of_friendships(&self) -> NumEdges {
        self.friendships.len() as NumEdges
    }

    /// Returns all friendships in insertion order, each once
    pub fn friendships(&self) -> impl Iterator<Item = Edge> + '_ {
        self.friendships.iter().copied()
    }

    /// Returns all persons in index order
    pub fn persons(&self) -> Iter<'_, Person> {
        self.persons.iter()
    }

    /// Returns the indices of all students at `school` in index order
    pub fn students_of<'a>(&'a self, school: &'a str) -> impl Iterator<Item = Node> + 'a {
        self.vertices().filter(move |&u| self.attends(u, school))
    }

    /// Returns every school attended by at least one student, in order of first appearance
    pub fn schools(&self) -> Vec<&str> {
        let mut schools: Vec<&str> = Vec::new();
        for school in self.persons.iter().filter_map(Person::school) {
            if !schools.contains(&school) {
                schools.push(school);
            }
        }
        schools
    }

    /// Returns the stored neighbors of `u` as a slice
    /// ** Panics if `u >= n` **
    pub fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        let u = u as usize;
        &self.neighbors[self.offsets[u]..self.offsets[u + 1]]
    }
}

impl GraphNodeOrder for FriendGraph {
    fn number_of_nodes(&self) -> NumNodes {
        self.persons.len() as NumNodes
    }
}

impl AdjacencyList for FriendGraph {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.as_neighbors_slice(u).iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.as_neighbors_slice(u).len() as NumNodes
    }
}

impl PersonLookup for FriendGraph {
    fn index_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }

    fn person(&self, u: Node) -> &Person {
        &self.persons[u as usize]
    }
}
