//! # Simple Graphs
//!
//! Undirected simple graphs over the fixed vertex universe `0..64`, stored as
//! `u64` bitsets, plus a graph6 codec.
//!
//! This crate provides:
//! - [`Graph`](graph::Graph): a vertex-presence bitset and one adjacency
//!   bitset per vertex slot, with in-place mutation and direct queries.
//! - [`graph6`]: decoding (and encoding) of the compact graph6 text format.
//! - [`command`]: a textual command surface for driving a graph from
//!   untyped input, as a scripting host would.
//!
//! ## Quick Start
//!
//! ```
//! use simple_graphs::prelude::*;
//!
//! // Path 0-1-2-3 in graph6
//! let mut g: Graph = "Ch".parse().unwrap();
//! assert_eq!(g.vertex_count(), 4);
//! assert_eq!(g.edges().collect::<Vec<_>>(), vec![(0, 1), (1, 2), (2, 3)]);
//!
//! g.add_vertex(4);
//! g.add_edge(3, 4).unwrap();
//! assert_eq!(g.vertices_of_degree(1).collect::<Vec<_>>(), vec![0, 4]);
//!
//! g.delete_vertex(2);
//! assert_eq!(g.number_of_edges(), 2);
//! ```
//!
//! ## Vertex ids
//!
//! Every vertex argument is reduced modulo 64. Ids `>= 64` therefore alias
//! onto low slots (`add_vertex(70)` inserts vertex `6`) rather than failing.
//!
//! ## Edges
//!
//! [`Graph::add_edge`](graph::Graph::add_edge) requires both endpoints to be
//! present already; vertices are only ever created by
//! [`Graph::add_vertex`](graph::Graph::add_vertex) or by decoding.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::inline_always)] // Intentional for bit-twiddling helpers
#![allow(clippy::needless_range_loop)] // Often clearer for matrix indexing

pub mod bits;
pub mod command;
pub mod error;
pub mod graph;
pub mod graph6;

/// Re-export commonly used types for convenience.
pub mod prelude {
    pub use crate::command::{Command, Reply};
    pub use crate::error::GraphError;
    pub use crate::graph::{Comparison, Graph};
    pub use crate::graph6::{decode, encode};
}
