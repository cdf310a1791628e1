//! Error type shared by the graph store, the graph6 codec and the command layer.

use thiserror::Error;

use crate::graph::Comparison;

/// Errors reported by graph construction, mutation, comparison and command parsing.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GraphError {
    /// An argument that must be an integer was something else.
    #[error("expected integer number as argument {argument}, got {value:?}")]
    TypeMismatch {
        /// Zero-based position of the offending argument.
        argument: usize,
        /// The text that failed to parse.
        value: String,
    },
    /// The graph6 sequence has zero length.
    #[error("g6 sequence cannot be empty")]
    EmptyInput,
    /// The graph6 sequence ends before all edge bits were supplied.
    #[error("g6 sequence is truncated: need {needed} edge bytes, got {got}")]
    TruncatedInput {
        /// Number of edge bytes required by the encoded order.
        needed: usize,
        /// Number of edge bytes present.
        got: usize,
    },
    /// A byte outside the printable graph6 range `63..=126`.
    #[error("invalid g6 byte {byte:#04x} at position {position}")]
    InvalidByte {
        /// Offset of the byte in the (trimmed) input.
        position: usize,
        /// The offending byte.
        byte: u8,
    },
    /// The graph has more vertices than a constructor or the graph6 encoder accepts.
    #[error("graph order {n} is not supported here")]
    UnsupportedOrder {
        /// Requested or encoded number of vertices.
        n: usize,
    },
    /// The vertex set is not `0..n`, so it has no graph6 form.
    #[error("vertex set {vertex_set:#018x} is not a contiguous prefix 0..n")]
    NonContiguousVertices {
        /// The raw vertex bitset.
        vertex_set: u64,
    },
    /// An ordering comparison was requested; graphs have no total order.
    #[error("comparison {op} is not supported between graphs")]
    UnsupportedComparison {
        /// The requested operator.
        op: Comparison,
    },
    /// `add_edge` was asked to connect a vertex to itself.
    #[error("self-loop rejected at vertex {vertex}")]
    SelfLoop {
        /// The vertex slot.
        vertex: u64,
    },
    /// `add_edge` named a vertex that is not in the vertex set.
    #[error("vertex {vertex} is not present in the graph")]
    MissingVertex {
        /// The vertex slot.
        vertex: u64,
    },
    /// The command name is not part of the graph surface.
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    /// The command received the wrong number of arguments.
    #[error("{command} takes {expected} argument(s), got {got}")]
    ArgumentCount {
        /// Command name.
        command: &'static str,
        /// Required argument count.
        expected: usize,
        /// Supplied argument count.
        got: usize,
    },
}
