//! The graph6 text format, restricted to the single-byte order header.
//!
//! A graph6 string is one header byte `n + 63` followed by the upper triangle
//! of the adjacency matrix packed into 6-bit groups, each stored as a byte
//! `group + 63`. Bits are taken most significant first, in the order
//! `(1,0), (2,0), (2,1), (3,0), ...`, i.e. for row `i` every column `j < i`.
//! The last group is padded with zero bits.
//!
//! The header byte alone describes orders `0..=63`; the decoder reads `~` as
//! order 63. The encoder stops at 62 so it never emits a leading `~`, which
//! other graph6 readers take as the start of the multi-byte header.

use log::debug;
use std::str::FromStr;

use crate::bits::{all_bits, popcount, MAX_VERTICES};
use crate::error::GraphError;
use crate::graph::Graph;

/// Offset added to every 6-bit value to make it printable.
const BIAS: u8 = 63;

/// Largest byte value a graph6 string may contain.
const MAX_BYTE: u8 = 126;

/// Largest order the decoder reads from the single header byte.
pub const MAX_DECODE_ORDER: usize = (MAX_BYTE - BIAS) as usize;

/// Largest order the encoder writes.
pub const MAX_ENCODE_ORDER: usize = MAX_DECODE_ORDER - 1;

/// Number of data bytes that carry the edge bits of an `n`-vertex graph.
#[inline]
pub const fn edge_bytes(n: usize) -> usize {
    let bits = n * n.saturating_sub(1) / 2;
    bits.div_ceil(6)
}

// ============================================================================
// Decoding
// ============================================================================

/// Decodes a graph6 byte sequence into a [`Graph`] on vertices `0..n`.
///
/// Surrounding ASCII whitespace (for instance a trailing newline read from a
/// file) is ignored. Only the bytes that carry edge bits are read; anything
/// after them is left unread.
///
/// # Errors
/// - [`GraphError::EmptyInput`] for an empty (or all-whitespace) sequence.
/// - [`GraphError::InvalidByte`] for a header or edge byte outside `63..=126`.
/// - [`GraphError::TruncatedInput`] if edge bytes are missing.
pub fn decode(input: &[u8]) -> Result<Graph, GraphError> {
    let input = input.trim_ascii();
    let (&header, data) = input.split_first().ok_or(GraphError::EmptyInput)?;

    let n = usize::from(checked_byte(header, 0)? - BIAS);
    let needed = edge_bytes(n);
    let data = &data[..needed.min(data.len())];
    for (k, &b) in data.iter().enumerate() {
        checked_byte(b, k + 1)?;
    }
    if data.len() < needed {
        return Err(GraphError::TruncatedInput {
            needed,
            got: data.len(),
        });
    }

    let mut adj = [0u64; MAX_VERTICES];
    let mut k = 0usize;
    for i in 1..n {
        for j in 0..i {
            let group = data[k / 6] - BIAS;
            if (group >> (5 - k % 6)) & 1 != 0 {
                adj[i] |= 1u64 << j;
                adj[j] |= 1u64 << i;
            }
            k += 1;
        }
    }

    let graph = Graph::from_raw(all_bits(n), adj);
    debug!(
        "decoded g6: {} vertices, {} edges",
        graph.vertex_count(),
        graph.number_of_edges()
    );
    Ok(graph)
}

fn checked_byte(byte: u8, position: usize) -> Result<u8, GraphError> {
    if (BIAS..=MAX_BYTE).contains(&byte) {
        Ok(byte)
    } else {
        Err(GraphError::InvalidByte { position, byte })
    }
}

// ============================================================================
// Encoding
// ============================================================================

/// Encodes a graph whose vertex set is exactly `0..n` as graph6 text.
///
/// # Errors
/// - [`GraphError::NonContiguousVertices`] if the vertex set has gaps.
/// - [`GraphError::UnsupportedOrder`] if `n > 62` (see [`MAX_ENCODE_ORDER`]).
pub fn encode(graph: &Graph) -> Result<String, GraphError> {
    let vertex_set = graph.vertex_set();
    let n = popcount(vertex_set) as usize;
    if vertex_set != all_bits(n) {
        return Err(GraphError::NonContiguousVertices { vertex_set });
    }
    if n > MAX_ENCODE_ORDER {
        return Err(GraphError::UnsupportedOrder { n });
    }

    let adj = graph.adjacency();
    let mut data = vec![0u8; edge_bytes(n)];
    let mut k = 0usize;
    for i in 1..n {
        for j in 0..i {
            if (adj[i] >> j) & 1 != 0 {
                data[k / 6] |= 1 << (5 - k % 6);
            }
            k += 1;
        }
    }

    let mut out = String::with_capacity(1 + data.len());
    out.push(char::from(n as u8 + BIAS));
    out.extend(data.into_iter().map(|group| char::from(group + BIAS)));
    debug!("encoded g6: {n} vertices as {} bytes", out.len());
    Ok(out)
}

// ============================================================================
// Graph integration
// ============================================================================

impl Graph {
    /// Decodes graph6 text. See [`decode`].
    ///
    /// # Errors
    /// Propagates the errors of [`decode`].
    pub fn from_graph6(text: &str) -> Result<Self, GraphError> {
        decode(text.as_bytes())
    }

    /// Encodes the graph as graph6 text. See [`encode`].
    ///
    /// # Errors
    /// Propagates the errors of [`encode`].
    pub fn to_graph6(&self) -> Result<String, GraphError> {
        encode(self)
    }
}

impl FromStr for Graph {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s.as_bytes())
    }
}

// ============================================================================
// Tests
// ============================================================================
