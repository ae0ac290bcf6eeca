/*!
# Friendship Graph Generators

Random friendship graphs and deterministic substructures, mainly used to exercise the query
algorithms on many inputs. Generators are configured with the builder pattern:

```rust
use friendgraph::{prelude::*, gens::*};
use rand::{SeedableRng, rngs::StdRng};

let graph = RandomFriendships::new()
    .nodes(20)
    .avg_deg(3.0)
    .schools(["rutgers", "princeton"])
    .student_prob(0.5)
    .generate(&mut StdRng::seed_from_u64(1));

assert_eq!(graph.number_of_nodes(), 20);
```
*/

mod random;
mod substructures;

use rand::Rng;

use crate::prelude::*;

pub use random::*;
pub use substructures::*;
