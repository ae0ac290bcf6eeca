use fxhash::FxHashMap;
use tracing::debug;

use super::*;
use crate::error::*;

/// Construction phase of a [`FriendGraph`].
///
/// Persons are indexed in the order they are added. Friendships can only be added between
/// persons that already exist; both endpoints receive one adjacency entry per call.
#[derive(Debug, Clone, Default)]
pub struct FriendGraphBuilder {
    persons: Vec<Person>,
    index: FxHashMap<String, Node>,
    adjacency: Vec<Vec<Node>>,
    friendships: Vec<Edge>,
}

impl FriendGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder that reserves space for `n` persons
    pub fn with_capacity(n: usize) -> Self {
        Self {
            persons: Vec::with_capacity(n),
            index: FxHashMap::with_capacity_and_hasher(n, Default::default()),
            adjacency: Vec::with_capacity(n),
            friendships: Vec::new(),
        }
    }

    /// Number of persons added so far
    pub fn number_of_persons(&self) -> NumNodes {
        self.persons.len() as NumNodes
    }

    /// Returns the index of an already added person
    pub fn index_of(&self, name: &str) -> Option<Node> {
        self.index.get(name).copied()
    }

    /// Adds a person and returns its index.
    /// `school` is given iff the person is a student.
    pub fn add_person(&mut self, name: &str, school: Option<&str>) -> Result<Node> {
        self.push_person(Person::new(name, school))
    }

    /// Shorthand for [`FriendGraphBuilder::add_person`] with a school
    pub fn add_student(&mut self, name: &str, school: &str) -> Result<Node> {
        self.push_person(Person::student(name, school))
    }

    /// Shorthand for [`FriendGraphBuilder::add_person`] without a school
    pub fn add_non_student(&mut self, name: &str) -> Result<Node> {
        self.push_person(Person::non_student(name))
    }

    /// Adds an already constructed person and returns its index
    pub fn push_person(&mut self, person: Person) -> Result<Node> {
        if person.name().is_empty() {
            return Err(GraphError::EmptyName);
        }
        for text in std::iter::once(person.name()).chain(person.school()) {
            if text.trim() != text {
                return Err(GraphError::Untrimmed {
                    text: text.to_string(),
                });
            }
        }
        if self.index.contains_key(person.name()) {
            return Err(GraphError::DuplicatePerson {
                name: person.name().to_string(),
            });
        }

        let u = self.number_of_persons();
        self.index.insert(person.name().to_string(), u);
        self.persons.push(person);
        self.adjacency.push(Vec::new());
        Ok(u)
    }

    /// Adds a friendship between two named persons.
    pub fn add_friendship(&mut self, a: &str, b: &str) -> Result<()> {
        let u = self.index_of(a).ok_or_else(|| GraphError::not_found(a))?;
        let v = self.index_of(b).ok_or_else(|| GraphError::not_found(b))?;
        if u == v {
            return Err(GraphError::SelfFriendship {
                name: a.to_string(),
            });
        }

        self.add_friendship_between(u, v);
        Ok(())
    }

    /// Adds a friendship between two indices.
    /// ** Panics if `u` or `v` are out of range or `u == v` **
    pub fn add_friendship_between(&mut self, u: Node, v: Node) {
        assert_ne!(u, v, "self friendships are not supported");
        self.adjacency[u as usize].push(v);
        self.adjacency[v as usize].push(u);
        self.friendships.push(Edge(u, v));
    }

    /// Adds multiple friendships between indices
    pub fn add_friendships_between<I, E>(&mut self, edges: I)
    where
        I: IntoIterator<Item = E>,
        E: Into<Edge>,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_friendship_between(u, v);
        }
    }

    /// Finishes construction and flattens all adjacency lists
    pub fn build(self) -> FriendGraph {
        let mut offsets = Vec::with_capacity(self.adjacency.len() + 1);
        let mut neighbors = Vec::with_capacity(2 * self.friendships.len());

        offsets.push(0);
        for list in self.adjacency {
            neighbors.extend(list);
            offsets.push(neighbors.len());
        }

        debug!(
            persons = self.persons.len(),
            friendships = self.friendships.len(),
            "Built friendship graph"
        );

        FriendGraph {
            persons: self.persons,
            index: self.index,
            offsets,
            neighbors,
            friendships: self.friendships,
        }
    }
}
