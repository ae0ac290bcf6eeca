use super::*;

/// Adds common motifs of friendships between already added persons
pub trait GeneratorSubstructures {
    /// Befriends consecutive persons of `nodes_on_path`
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Like [`GeneratorSubstructures::connect_path`], but also befriends the last with the
    /// first person. Needs at least three persons.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Befriends every pair of distinct persons in `nodes`
    fn connect_clique(&mut self, nodes: &[Node]);
}

impl GeneratorSubstructures for FriendGraphBuilder {
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        let mut nodes = nodes_on_path.into_iter();
        if let Some(mut prev) = nodes.next() {
            for u in nodes {
                self.add_friendship_between(prev, u);
                prev = u;
            }
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let nodes: Vec<Node> = nodes_in_cycle.into_iter().collect();
        assert!(nodes.len() > 2, "a cycle needs at least three persons");

        self.connect_path(nodes.iter().copied());
        self.add_friendship_between(nodes[nodes.len() - 1], nodes[0]);
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                self.add_friendship_between(u, v);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    fn builder_with(n: NumNodes) -> FriendGraphBuilder {
        let mut builder = FriendGraphBuilder::new();
        for u in 0..n {
            builder.add_non_student(&format!("p{u}")).unwrap();
        }
        builder
    }

    #[test]
    fn substructures() {
        let mut builder = builder_with(6);
        builder.connect_path([0, 1, 2]);
        builder.connect_cycle([2, 3, 4]);
        builder.connect_clique(&[0, 4, 5]);
        let graph = builder.build();

        assert_eq!(
            graph.friendships().collect_vec(),
            vec![
                Edge(0, 1),
                Edge(1, 2),
                Edge(2, 3),
                Edge(3, 4),
                Edge(4, 2),
                Edge(0, 4),
                Edge(0, 5),
                Edge(4, 5)
            ]
        );
    }
}
