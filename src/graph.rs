//! Bitset graph store for undirected simple graphs on at most 64 vertices.

use log::{trace, warn};
use rand::Rng;
use std::fmt;
use std::io::{self, Write};

use crate::bits::{all_bits, bit, popcount, slot, BitIter, MAX_VERTICES};
use crate::error::GraphError;

// ============================================================================
// Graph
// ============================================================================

/// An undirected simple graph over the vertex universe `0..64`.
///
/// Representation:
/// - `vertices` has bit `i` set iff vertex `i` exists.
/// - `adj[i]` is the neighbor bitset of vertex slot `i`.
///
/// Every vertex argument is reduced modulo 64, so ids `>= 64` alias onto the
/// low slots instead of failing. Mutations keep the adjacency symmetric, free
/// of self-loops, and closed over the vertex set: an absent vertex has an
/// empty row and appears in no other row.
///
/// Equality is structural over both fields. There is no ordering; see
/// [`Graph::compare`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Graph {
    vertices: u64,
    adj: [u64; MAX_VERTICES],
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Creates an empty graph: no vertices, no edges.
    pub const fn new() -> Self {
        Self {
            vertices: 0,
            adj: [0u64; MAX_VERTICES],
        }
    }

    /// Creates a graph on vertices `0..n` and inserts `edges`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOrder`] if `n > 64`, or the first error
    /// raised by [`Graph::add_edge`] (self-loop or endpoint outside `0..n`).
    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (u64, u64)>,
    {
        let mut graph = Self::with_order(n)?;
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Creates an edgeless graph on vertices `0..n`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOrder`] if `n > 64`.
    pub fn with_order(n: usize) -> Result<Self, GraphError> {
        if n > MAX_VERTICES {
            return Err(GraphError::UnsupportedOrder { n });
        }
        let mut graph = Self::new();
        graph.vertices = all_bits(n);
        Ok(graph)
    }

    /// Samples a G(n, p) random graph on vertices `0..n`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedOrder`] if `n > 64`.
    pub fn random<R: Rng>(rng: &mut R, n: usize, p: f64) -> Result<Self, GraphError> {
        debug_assert!((0.0..=1.0).contains(&p), "p must be in [0, 1]");
        let mut graph = Self::with_order(n)?;
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.random_bool(p) {
                    graph.adj[i] |= 1u64 << j;
                    graph.adj[j] |= 1u64 << i;
                }
            }
        }
        Ok(graph)
    }

    /// Assembles a graph from raw bitsets, used by the graph6 decoder.
    pub(crate) fn from_raw(vertices: u64, adj: [u64; MAX_VERTICES]) -> Self {
        let graph = Self { vertices, adj };
        debug_assert!(graph.invariants_hold(), "raw adjacency breaks graph invariants");
        graph
    }

    // ------------------------------------------------------------------------
    // Raw access
    // ------------------------------------------------------------------------

    /// Returns the vertex-presence bitset.
    #[inline(always)]
    pub fn vertex_set(&self) -> u64 {
        self.vertices
    }

    /// Returns a reference to the adjacency bitsets.
    #[inline(always)]
    pub fn adjacency(&self) -> &[u64; MAX_VERTICES] {
        &self.adj
    }

    // ------------------------------------------------------------------------
    // Vertex queries
    // ------------------------------------------------------------------------

    /// Returns the number of present vertices.
    #[inline]
    pub fn vertex_count(&self) -> u32 {
        popcount(self.vertices)
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices == 0
    }

    /// Returns whether vertex `v` (mod 64) is present.
    #[inline]
    pub fn contains_vertex(&self, v: u64) -> bool {
        self.vertices & bit(v) != 0
    }

    /// Iterates over the present vertices. Each vertex is yielded once.
    #[inline]
    pub fn vertices(&self) -> BitIter {
        BitIter::new(self.vertices)
    }

    /// Returns the degree of vertex `v` (mod 64).
    ///
    /// Defined for absent vertices too, where it is 0.
    #[inline]
    pub fn vertex_degree(&self, v: u64) -> u32 {
        popcount(self.adj[slot(v)])
    }

    /// Iterates over the neighbors of vertex `v` (mod 64).
    #[inline]
    pub fn vertex_neighbors(&self, v: u64) -> BitIter {
        BitIter::new(self.adj[slot(v)])
    }

    /// Iterates over the present vertices whose degree equals `d`.
    pub fn vertices_of_degree(&self, d: u32) -> impl Iterator<Item = u64> + '_ {
        self.vertices()
            .filter(move |&v| popcount(self.adj[slot(v)]) == d)
    }

    /// Returns the degrees of all present vertices, largest first.
    pub fn degree_sequence(&self) -> Vec<u32> {
        let mut degrees: Vec<u32> = self.vertices().map(|v| self.vertex_degree(v)).collect();
        degrees.sort_unstable_by(|a, b| b.cmp(a));
        degrees
    }

    // ------------------------------------------------------------------------
    // Edge queries
    // ------------------------------------------------------------------------

    /// Returns the total number of edges in the graph.
    pub fn number_of_edges(&self) -> usize {
        let sum: u32 = self.vertices().map(|v| self.vertex_degree(v)).sum();
        (sum as usize) / 2
    }

    /// Iterates over the edges as `(i, j)` pairs with `i < j`, each edge once.
    pub fn edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.vertices().flat_map(move |i| {
            // Keep only neighbors above i.
            let upper = self.adj[slot(i)] & !all_bits(slot(i) + 1);
            BitIter::new(upper).map(move |j| (i, j))
        })
    }

    /// Returns whether the edge `{v1, v2}` (both mod 64) exists.
    #[inline(always)]
    pub fn is_edge(&self, v1: u64, v2: u64) -> bool {
        self.adj[slot(v1)] & bit(v2) != 0
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Inserts vertex `v` (mod 64). Returns `true` if it was not present before.
    pub fn add_vertex(&mut self, v: u64) -> bool {
        let mask = bit(v);
        let inserted = self.vertices & mask == 0;
        self.vertices |= mask;
        trace!("add_vertex {} (inserted: {inserted})", slot(v));
        inserted
    }

    /// Removes vertex `v` (mod 64) together with all of its incident edges.
    ///
    /// Returns `true` if the vertex was present before.
    pub fn delete_vertex(&mut self, v: u64) -> bool {
        let s = slot(v);
        let mask = bit(v);
        let removed = self.vertices & mask != 0;
        self.vertices &= !mask;

        let mut t = self.adj[s];
        while t != 0 {
            let w = t.trailing_zeros() as usize;
            t &= t - 1;
            self.adj[w] &= !mask;
        }
        self.adj[s] = 0;
        trace!("delete_vertex {s} (removed: {removed})");
        removed
    }

    /// Inserts the undirected edge `{v1, v2}` (both mod 64).
    ///
    /// Both endpoints must already be present: edges are never allowed to
    /// reference a missing vertex. Adding an existing edge is a no-op.
    ///
    /// # Errors
    /// - [`GraphError::SelfLoop`] if both ids map to the same slot.
    /// - [`GraphError::MissingVertex`] if an endpoint is absent.
    ///
    /// The graph is unchanged on error.
    pub fn add_edge(&mut self, v1: u64, v2: u64) -> Result<(), GraphError> {
        let (a, b) = (slot(v1), slot(v2));
        if a == b {
            warn!("add_edge rejected: self-loop at {a}");
            return Err(GraphError::SelfLoop { vertex: a as u64 });
        }
        for s in [a, b] {
            if self.vertices & (1u64 << s) == 0 {
                warn!("add_edge rejected: vertex {s} is absent");
                return Err(GraphError::MissingVertex { vertex: s as u64 });
            }
        }
        self.adj[a] |= 1u64 << b;
        self.adj[b] |= 1u64 << a;
        trace!("add_edge {a} {b}");
        Ok(())
    }

    /// Removes the undirected edge `{v1, v2}` (both mod 64).
    ///
    /// Returns `true` if the edge existed.
    pub fn delete_edge(&mut self, v1: u64, v2: u64) -> bool {
        let existed = self.is_edge(v1, v2);
        self.adj[slot(v1)] &= !bit(v2);
        self.adj[slot(v2)] &= !bit(v1);
        trace!("delete_edge {} {} (existed: {existed})", slot(v1), slot(v2));
        existed
    }

    // ------------------------------------------------------------------------
    // Comparison
    // ------------------------------------------------------------------------

    /// Evaluates a comparison operator against `other`.
    ///
    /// Only `==` and `!=` are meaningful; graphs have no total order.
    ///
    /// # Errors
    /// Returns [`GraphError::UnsupportedComparison`] for `<`, `<=`, `>` and `>=`.
    pub fn compare(&self, other: &Self, op: Comparison) -> Result<bool, GraphError> {
        match op {
            Comparison::Eq => Ok(self == other),
            Comparison::Ne => Ok(self != other),
            Comparison::Lt | Comparison::Le | Comparison::Gt | Comparison::Ge => {
                Err(GraphError::UnsupportedComparison { op })
            }
        }
    }

    // ------------------------------------------------------------------------
    // Output
    // ------------------------------------------------------------------------

    /// Writes the adjacency matrix of vertices `0..=max` as rows of `0/1`
    /// characters, where `max` is the highest present vertex.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write_matrix_to<W: Write>(&self, mut w: W) -> io::Result<()> {
        if self.vertices == 0 {
            return Ok(());
        }
        let order = MAX_VERTICES - self.vertices.leading_zeros() as usize;
        let mut line = vec![b'0'; order + 1];
        line[order] = b'\n';
        for &row in &self.adj[..order] {
            line[..order].fill(b'0');
            BitIter::new(row).for_each(|j| line[j as usize] = b'1');
            w.write_all(&line)?;
        }
        Ok(())
    }

    /// Checks symmetry, loop-freeness and adjacency closure.
    pub fn invariants_hold(&self) -> bool {
        for i in 0..MAX_VERTICES {
            let row = self.adj[i];
            if (row >> i) & 1 != 0 {
                return false;
            }
            if self.vertices & (1u64 << i) == 0 && row != 0 {
                return false;
            }
            if row & !self.vertices != 0 {
                return false;
            }
            for j in BitIter::new(row) {
                if (self.adj[j as usize] >> i) & 1 == 0 {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices().collect::<Vec<_>>())
            .field("edges", &self.edges().collect::<Vec<_>>())
            .finish()
    }
}

// ============================================================================
// Comparison operators
// ============================================================================

/// The six rich-comparison operators a caller may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `>=`
    Ge,
}

impl Comparison {
    /// Parses an operator symbol such as `"<="` or `"!="`.
    pub fn from_symbol(s: &str) -> Option<Self> {
        Some(match s {
            "<" => Self::Lt,
            "<=" => Self::Le,
            "==" => Self::Eq,
            "!=" => Self::Ne,
            ">" => Self::Gt,
            ">=" => Self::Ge,
            _ => return None,
        })
    }

    /// Returns the operator symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

// ============================================================================
// Tests
// ============================================================================
