/*!
# Node Representation

Every person in a friendship graph is addressed by a dense index `Node = u32` in `0..n`,
assigned in the order persons were added to the store. Names are only resolved at the
boundary (see [`PersonLookup`](crate::ops::PersonLookup)); all algorithms work on indices.
*/

use stream_bitset::bitset::BitSetImpl;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` persons in a graph!
pub type NumNodes = Node;

/// BitSet for Nodes, used as visited-marker by all traversals
pub type NodeBitSet = BitSetImpl<Node>;
