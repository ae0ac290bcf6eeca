/*!
`friendgraph` answers structural questions about friendship networks in which some people
are students attending a school:

- **shortest chains**: the fewest introductions needed to get from one person to another,
- **cliques**: groups of students of one school that are connected through friendships,
- **connectors**: people whose removal splits their part of the network apart.

# Representation

A [`FriendGraph`](crate::repr::FriendGraph) stores persons as dense indices `Node = u32` in the
order they were added, together with a name index and symmetric adjacency lists. It is filled
once through a [`FriendGraphBuilder`](crate::repr::FriendGraphBuilder) (or read from a
description, see [`io`]) and is immutable afterwards.
A [`Person`] carries a name and, iff it is a student, a school.

# Design

All queries are provided as traits in [`algo`] that are implemented on the graph itself, so
after `use friendgraph::{prelude::*, algo::*};` they can be called as methods. Algorithms that
can be configured (e.g. [`CliqueSearch`](crate::algo::CliqueSearch)) are additionally exposed
as structs using the *Builder* pattern.

Queries never modify the graph and allocate their own scratch state, so a graph can be shared
between threads freely. Finding no chain, no clique or no connector is a regular empty result;
only unknown names are reported as [`GraphError::NotFound`](crate::error::GraphError).

```rust
use friendgraph::{prelude::*, algo::*};

let mut builder = FriendGraphBuilder::new();
builder.add_student("sam", "rutgers").unwrap();
builder.add_student("jane", "rutgers").unwrap();
builder.add_non_student("nick").unwrap();
builder.add_friendship("sam", "jane").unwrap();
builder.add_friendship("jane", "nick").unwrap();
let graph = builder.build();

assert_eq!(graph.shortest_chain("sam", "nick").unwrap(), vec!["sam", "jane", "nick"]);
assert_eq!(graph.cliques("rutgers"), vec![vec!["sam", "jane"]]);
assert_eq!(graph.connectors(), vec!["jane"]);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod person;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;

pub use edge::*;
pub use node::*;
pub use person::*;

/// `friendgraph::prelude` includes definitions for nodes, edges and persons, the capability
/// traits of a graph, the graph store and its error type.
pub mod prelude {
    pub use super::{edge::*, error::GraphError, node::*, ops::*, person::*, repr::*};
}
