/*!
# Friendship Graph Algorithms

All queries are provided as traits implemented on every graph offering the capabilities of
[`crate::ops`], so after
```rust
use friendgraph::{prelude::*, algo::*};
```
they can be called directly on a [`FriendGraph`](crate::repr::FriendGraph):

- [`ShortestChain`]: minimum-hop introduction chains between two persons,
- [`Cliques`]: groups of students of one school that know each other through friendships,
- [`Connectors`]: persons whose removal disconnects their friends,
- [`Connectivity`]: connected components.

Each query allocates its own scratch state and only reads the graph, so a graph may be queried
from several threads at once.
*/

mod chain;
mod cliques;
mod connectivity;
mod connectors;
pub mod traversal;

use crate::prelude::*;

pub use chain::*;
pub use cliques::*;
pub use connectivity::*;
pub use connectors::*;
pub use traversal::*;

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{graph_from_names, init_test_logging};

    #[test]
    fn concurrent_queries() {
        init_test_logging();
        let graph = graph_from_names(
            &["A", "B", "C", "D", "E"],
            &[("A", "B"), ("B", "C"), ("C", "D"), ("D", "E")],
        );

        std::thread::scope(|s| {
            let handles = (0..4)
                .map(|_| {
                    s.spawn(|| {
                        (
                            graph.shortest_chain("A", "E").unwrap(),
                            graph.connectors().len(),
                            graph.cliques("rutgers").len(),
                        )
                    })
                })
                .collect::<Vec<_>>();

            for handle in handles {
                let (chain, connectors, cliques) = handle.join().unwrap();
                assert_eq!(chain, vec!["A", "B", "C", "D", "E"]);
                assert_eq!(connectors, 3);
                assert_eq!(cliques, 0);
            }
        });
    }
}
