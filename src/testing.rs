//! Helpers shared by the test modules. The naive routines here deliberately avoid the
//! traversal code they are used to check.

use itertools::Itertools;

use crate::{prelude::*, repr::FriendGraph};

/// Routes `tracing` output of a test to the test harness; `RUST_LOG` selects the level.
/// Safe to call from several tests, only the first call installs the subscriber.
pub(crate) fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_test_writer()
        .try_init();
}

/// Builds a graph of non-students from names and named friendships
pub(crate) fn graph_from_names(names: &[&str], friendships: &[(&str, &str)]) -> FriendGraph {
    let mut builder = FriendGraphBuilder::with_capacity(names.len());
    for name in names {
        builder.add_non_student(name).unwrap();
    }
    for (a, b) in friendships {
        builder.add_friendship(a, b).unwrap();
    }
    builder.build()
}

/// Builds a graph of `n` non-students called `p0, p1, ...` from index pairs
pub(crate) fn graph_from_edges<I, E>(n: NumNodes, edges: I) -> FriendGraph
where
    I: IntoIterator<Item = E>,
    E: Into<Edge>,
{
    let mut builder = FriendGraphBuilder::with_capacity(n as usize);
    for u in 0..n {
        builder.add_non_student(&format!("p{u}")).unwrap();
    }
    builder.add_friendships_between(edges);
    builder.build()
}

/// Hop distances from `source` by repeated relaxation over all friendships
pub(crate) fn naive_distances(graph: &FriendGraph, source: Node) -> Vec<Option<NumNodes>> {
    let mut dist = vec![None; graph.len()];
    dist[source as usize] = Some(0);

    let mut changed = true;
    while changed {
        changed = false;
        for Edge(u, v) in graph.friendships() {
            for (x, y) in [(u, v), (v, u)] {
                if let Some(dx) = dist[x as usize] {
                    if dist[y as usize].is_none_or(|dy| dx + 1 < dy) {
                        dist[y as usize] = Some(dx + 1);
                        changed = true;
                    }
                }
            }
        }
    }

    dist
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

/// Union-find labels of the components of the subgraph induced by nodes satisfying `keep`.
/// Nodes that are not kept get `usize::MAX`.
pub(crate) fn naive_component_labels<F>(graph: &FriendGraph, keep: F) -> Vec<usize>
where
    F: Fn(Node) -> bool,
{
    let mut parent = (0..graph.len()).collect_vec();
    for Edge(u, v) in graph.friendships() {
        if keep(u) && keep(v) {
            let (ru, rv) = (find(&mut parent, u as usize), find(&mut parent, v as usize));
            parent[ru] = rv;
        }
    }

    graph
        .vertices()
        .map(|u| {
            if keep(u) {
                find(&mut parent, u as usize)
            } else {
                usize::MAX
            }
        })
        .collect()
}

/// Number of connected components, optionally after removing one node
pub(crate) fn naive_component_count(graph: &FriendGraph, excluded: Option<Node>) -> usize {
    naive_component_labels(graph, |u| Some(u) != excluded)
        .into_iter()
        .filter(|&label| label != usize::MAX)
        .unique()
        .count()
}

#[test]
fn naive_helpers() {
    let graph = graph_from_edges(5, [(0, 1), (1, 2), (3, 4)]);
    assert_eq!(
        naive_distances(&graph, 0),
        vec![Some(0), Some(1), Some(2), None, None]
    );
    assert_eq!(naive_component_count(&graph, None), 2);
    assert_eq!(naive_component_count(&graph, Some(1)), 3);
    assert_eq!(naive_component_count(&graph, Some(3)), 2);

    let labels = naive_component_labels(&graph, |u| u != 1);
    assert_eq!(labels[1], usize::MAX);
    assert_ne!(labels[0], labels[2]);
    assert_eq!(labels[3], labels[4]);
}
