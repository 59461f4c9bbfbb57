//! `sn-graph`: the friendship relation and the few graph operations the
//! analytics need.
//!
//! Not a general graph library.  It supports exactly:
//!
//! - growing an undirected, loop-free relation one edge at a time
//!   ([`FriendGraph`]),
//! - flood-fill connected components over agents that have at least one
//!   friend ([`friend_groups`]),
//! - inducing a compact CSR subgraph on a vertex set ([`InducedSubgraph`]),
//! - breadth-first layering from a source inside that subgraph
//!   ([`InducedSubgraph::bfs_layers`]).

pub mod error;
pub mod friends;
pub mod subgraph;
pub mod traversal;


pub use error::{GraphError, GraphResult};
pub use friends::FriendGraph;
pub use subgraph::InducedSubgraph;
pub use traversal::friend_groups;
