/*!
School cliques.

A clique of a school is a group of its students that can reach each other through
friendships. Students are grouped by a breadth-first search seeded at every student not yet
seen, in index order. A single visited-set is shared by all searches, so each student ends up
in exactly one clique and cliques are reported in the order they were seeded.

Which friendships a search may follow is controlled by [`CliqueScope`].
*/

use std::collections::VecDeque;

use tracing::{debug, trace};

use super::*;

/// Decides through whom a clique search may continue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CliqueScope {
    /// Only students of the school itself carry the search further. Other friends of a
    /// clique member are marked as seen but never expanded.
    #[default]
    School,
    /// The search continues through every person, but only students of the school are
    /// listed. Two students share a clique iff any chain of friendships connects them.
    Network,
}

/// Configurable clique search over a graph for one school
pub struct CliqueSearch<'a, G>
where
    G: AdjacencyList + PersonLookup,
{
    graph: &'a G,
    school: &'a str,
    scope: CliqueScope,
}

impl<'a, G> CliqueSearch<'a, G>
where
    G: AdjacencyList + PersonLookup,
{
    pub fn new(graph: &'a G, school: &'a str) -> Self {
        Self {
            graph,
            school,
            scope: CliqueScope::default(),
        }
    }

    /// Updates the scope of the search
    pub fn scope(mut self, scope: CliqueScope) -> Self {
        self.scope = scope;
        self
    }

    /// Computes all cliques as lists of indices
    pub fn compute(&self) -> Vec<Vec<Node>> {
        let mut visited = self.graph.vertex_bitset_unset();
        let mut cliques = Vec::new();

        for u in self.graph.vertices() {
            if !self.graph.attends(u, self.school) || visited.set_bit(u) {
                continue;
            }

            let clique = self.collect_clique(u, &mut visited);
            trace!(seed = u, size = clique.len(), "Found clique");
            cliques.push(clique);
        }

        cliques
    }

    /// Runs a single BFS from `seed`; `seed` must already be marked as visited
    fn collect_clique(&self, seed: Node, visited: &mut NodeBitSet) -> Vec<Node> {
        let mut clique = vec![seed];
        let mut queue = VecDeque::from([seed]);

        while let Some(u) = queue.pop_front() {
            for v in self.graph.neighbors_of(u) {
                if visited.set_bit(v) {
                    continue;
                }

                let is_member = self.graph.attends(v, self.school);
                if is_member {
                    clique.push(v);
                }
                if is_member || self.scope == CliqueScope::Network {
                    queue.push_back(v);
                }
            }
        }

        clique
    }
}

pub trait Cliques: AdjacencyList + PersonLookup {
    /// Returns a configurable clique search for `school`
    fn clique_search<'a>(&'a self, school: &'a str) -> CliqueSearch<'a, Self> {
        CliqueSearch::new(self, school)
    }

    /// Computes all cliques of `school` as lists of indices
    fn clique_nodes(&self, school: &str) -> Vec<Vec<Node>> {
        self.clique_search(school).compute()
    }

    /// Computes all cliques of `school` as lists of names.
    /// A school nobody attends has no cliques.
    ///
    /// # Examples
    /// ```
    /// use friendgraph::{prelude::*, algo::*};
    ///
    /// let mut builder = FriendGraphBuilder::new();
    /// builder.add_student("sam", "rutgers").unwrap();
    /// builder.add_student("jane", "rutgers").unwrap();
    /// builder.add_student("bob", "rutgers").unwrap();
    /// builder.add_non_student("nick").unwrap();
    /// builder.add_friendship("sam", "jane").unwrap();
    /// builder.add_friendship("jane", "nick").unwrap();
    /// builder.add_friendship("nick", "bob").unwrap();
    /// let graph = builder.build();
    ///
    /// assert_eq!(graph.cliques("rutgers"), vec![vec!["sam", "jane"], vec!["bob"]]);
    /// assert!(graph.cliques("princeton").is_empty());
    /// ```
    fn cliques(&self, school: &str) -> Vec<Vec<String>> {
        let cliques = self.clique_nodes(school);
        debug!(school, cliques = cliques.len(), "Computed cliques");

        cliques
            .into_iter()
            .map(|clique| self.names_of(clique))
            .collect()
    }
}

impl<G> Cliques for G where G: AdjacencyList + PersonLookup {}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{gens::*, repr::*, testing::*};
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    fn campus() -> FriendGraph {
        // sam - jane - nick - bob   kaitlin - ana
        //         \                  /
        //          ----- mike ------
        let mut builder = FriendGraphBuilder::new();
        builder.add_student("sam", "rutgers").unwrap();
        builder.add_student("jane", "rutgers").unwrap();
        builder.add_non_student("nick").unwrap();
        builder.add_student("bob", "rutgers").unwrap();
        builder.add_student("kaitlin", "princeton").unwrap();
        builder.add_student("ana", "rutgers").unwrap();
        builder.add_student("mike", "rutgers").unwrap();
        builder.add_non_student("eve").unwrap();
        for (a, b) in [
            ("sam", "jane"),
            ("jane", "nick"),
            ("nick", "bob"),
            ("kaitlin", "ana"),
            ("jane", "mike"),
            ("mike", "kaitlin"),
        ] {
            builder.add_friendship(a, b).unwrap();
        }
        builder.build()
    }

    #[test]
    fn school_scope() {
        let graph = campus();
        assert_eq!(
            graph.cliques("rutgers"),
            vec![vec!["sam", "jane", "mike"], vec!["bob"], vec!["ana"]]
        );
        assert_eq!(graph.cliques("princeton"), vec![vec!["kaitlin"]]);
        assert!(graph.cliques("nyu").is_empty());
    }

    #[test]
    fn network_scope() {
        let graph = campus();
        let cliques = graph
            .clique_search("rutgers")
            .scope(CliqueScope::Network)
            .compute();
        assert_eq!(cliques, vec![vec![0, 1, 6, 3, 5]]);
    }

    #[test]
    fn network_scope_through_earlier_non_student() {
        let mut builder = FriendGraphBuilder::new();
        builder.add_non_student("nick").unwrap();
        builder.add_student("sam", "rutgers").unwrap();
        builder.add_student("jane", "rutgers").unwrap();
        builder.add_friendship("nick", "sam").unwrap();
        builder.add_friendship("nick", "jane").unwrap();
        let graph = builder.build();

        let network = graph
            .clique_search("rutgers")
            .scope(CliqueScope::Network)
            .compute();
        assert_eq!(network, vec![vec![1, 2]]);
        assert_eq!(graph.clique_nodes("rutgers"), vec![vec![1], vec![2]]);
    }

    #[test]
    fn non_students_never_form_cliques() {
        let graph = graph_from_names(&["E", "F"], &[("E", "F")]);
        assert!(graph.cliques("").is_empty());
        assert!(graph.clique_nodes("rutgers").is_empty());
    }

    #[test]
    fn cliques_partition_students() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let schools = ["rutgers", "princeton", "nyu"];

        for n in [10, 30, 60] {
            for avg_deg in [1.0, 3.0] {
                let graph = RandomFriendships::new()
                    .nodes(n)
                    .avg_deg(avg_deg)
                    .schools(schools)
                    .student_prob(0.7)
                    .generate(rng);

                for school in schools {
                    for scope in [CliqueScope::School, CliqueScope::Network] {
                        let cliques = graph.clique_search(school).scope(scope).compute();
                        let members = cliques.iter().flatten().copied().sorted().collect_vec();

                        assert!(members.iter().all(|&u| graph.attends(u, school)));
                        assert_eq!(members, graph.students_of(school).collect_vec());

                        let labels = match scope {
                            CliqueScope::School => {
                                naive_component_labels(&graph, |u| graph.attends(u, school))
                            }
                            CliqueScope::Network => naive_component_labels(&graph, |_| true),
                        };

                        let mut clique_of = vec![usize::MAX; graph.len()];
                        for (i, clique) in cliques.iter().enumerate() {
                            for &u in clique {
                                clique_of[u as usize] = i;
                            }
                        }

                        for (&u, &v) in members.iter().tuple_combinations() {
                            assert_eq!(
                                clique_of[u as usize] == clique_of[v as usize],
                                labels[u as usize] == labels[v as usize]
                            );
                        }
                    }
                }
            }
        }
    }
}
