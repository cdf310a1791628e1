//! Textual command surface over a [`Graph`].
//!
//! Each line names one graph operation followed by whitespace-separated
//! arguments, e.g. `add_edge 3 5`. Arguments arrive untyped; they are
//! converted while parsing, so a malformed argument is reported before the
//! graph is touched.

use std::fmt;

use crate::bits::MAX_VERTICES;
use crate::error::GraphError;
use crate::graph::{Comparison, Graph};

// ============================================================================
// Command
// ============================================================================

/// A parsed graph operation with typed arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `vertex_count` (alias `number_of_vertices`)
    VertexCount,
    /// `vertices`
    Vertices,
    /// `vertex_degree v`
    VertexDegree(u64),
    /// `vertex_neighbors v`
    VertexNeighbors(u64),
    /// `add_vertex v`
    AddVertex(u64),
    /// `delete_vertex v`
    DeleteVertex(u64),
    /// `number_of_edges`
    NumberOfEdges,
    /// `edges`
    Edges,
    /// `is_edge v1 v2`
    IsEdge(u64, u64),
    /// `add_edge v1 v2`
    AddEdge(u64, u64),
    /// `delete_edge v1 v2`
    DeleteEdge(u64, u64),
    /// `vertices_of_degree d`; `None` for a degree no vertex can have.
    VerticesOfDegree(Option<u32>),
    /// `compare <g6> <op>`
    Compare(Box<Graph>, Comparison),
    /// `graph6`
    Graph6,
}

impl Command {
    /// Parses one command line.
    ///
    /// # Errors
    /// - [`GraphError::UnknownCommand`] for an unrecognised (or missing) name.
    /// - [`GraphError::ArgumentCount`] for the wrong number of arguments.
    /// - [`GraphError::TypeMismatch`] for an argument of the wrong type.
    /// - Any decode error of the graph6 operand of `compare`.
    pub fn parse(line: &str) -> Result<Self, GraphError> {
        let mut words = line.split_whitespace();
        let name = words.next().unwrap_or("");
        let args: Vec<&str> = words.collect();

        let command = match name {
            "vertex_count" | "number_of_vertices" => {
                arity("vertex_count", &args, 0)?;
                Self::VertexCount
            }
            "vertices" => {
                arity("vertices", &args, 0)?;
                Self::Vertices
            }
            "vertex_degree" => {
                arity("vertex_degree", &args, 1)?;
                Self::VertexDegree(vertex_arg(&args, 0)?)
            }
            "vertex_neighbors" => {
                arity("vertex_neighbors", &args, 1)?;
                Self::VertexNeighbors(vertex_arg(&args, 0)?)
            }
            "add_vertex" => {
                arity("add_vertex", &args, 1)?;
                Self::AddVertex(vertex_arg(&args, 0)?)
            }
            "delete_vertex" => {
                arity("delete_vertex", &args, 1)?;
                Self::DeleteVertex(vertex_arg(&args, 0)?)
            }
            "number_of_edges" => {
                arity("number_of_edges", &args, 0)?;
                Self::NumberOfEdges
            }
            "edges" => {
                arity("edges", &args, 0)?;
                Self::Edges
            }
            "is_edge" => {
                arity("is_edge", &args, 2)?;
                Self::IsEdge(vertex_arg(&args, 0)?, vertex_arg(&args, 1)?)
            }
            "add_edge" => {
                arity("add_edge", &args, 2)?;
                Self::AddEdge(vertex_arg(&args, 0)?, vertex_arg(&args, 1)?)
            }
            "delete_edge" => {
                arity("delete_edge", &args, 2)?;
                Self::DeleteEdge(vertex_arg(&args, 0)?, vertex_arg(&args, 1)?)
            }
            "vertices_of_degree" => {
                arity("vertices_of_degree", &args, 1)?;
                let d = integer_arg(&args, 0)?;
                Self::VerticesOfDegree(u32::try_from(d).ok())
            }
            "compare" => {
                arity("compare", &args, 2)?;
                let other = Graph::from_graph6(args[0])?;
                let op = Comparison::from_symbol(args[1]).ok_or_else(|| {
                    GraphError::TypeMismatch {
                        argument: 1,
                        value: args[1].to_string(),
                    }
                })?;
                Self::Compare(Box::new(other), op)
            }
            "graph6" => {
                arity("graph6", &args, 0)?;
                Self::Graph6
            }
            other => return Err(GraphError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }

    /// Returns `true` if applying the command may modify the graph.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::AddVertex(_) | Self::DeleteVertex(_) | Self::AddEdge(..) | Self::DeleteEdge(..)
        )
    }

    /// Runs the command against `graph`.
    ///
    /// # Errors
    /// Propagates the errors of the underlying graph operation; the graph is
    /// unchanged whenever an error is returned.
    pub fn apply(&self, graph: &mut Graph) -> Result<Reply, GraphError> {
        let reply = match *self {
            Self::VertexCount => Reply::Count(u64::from(graph.vertex_count())),
            Self::Vertices => Reply::Vertices(graph.vertices().collect()),
            Self::VertexDegree(v) => Reply::Count(u64::from(graph.vertex_degree(v))),
            Self::VertexNeighbors(v) => Reply::Vertices(graph.vertex_neighbors(v).collect()),
            Self::AddVertex(v) => {
                graph.add_vertex(v);
                Reply::Done
            }
            Self::DeleteVertex(v) => {
                graph.delete_vertex(v);
                Reply::Done
            }
            Self::NumberOfEdges => Reply::Count(graph.number_of_edges() as u64),
            Self::Edges => Reply::Edges(graph.edges().collect()),
            Self::IsEdge(v1, v2) => Reply::Bool(graph.is_edge(v1, v2)),
            Self::AddEdge(v1, v2) => {
                graph.add_edge(v1, v2)?;
                Reply::Done
            }
            Self::DeleteEdge(v1, v2) => {
                graph.delete_edge(v1, v2);
                Reply::Done
            }
            Self::VerticesOfDegree(d) => match d {
                Some(d) => Reply::Vertices(graph.vertices_of_degree(d).collect()),
                None => Reply::Vertices(Vec::new()),
            },
            Self::Compare(ref other, op) => Reply::Bool(graph.compare(other, op)?),
            Self::Graph6 => Reply::Text(graph.to_graph6()?),
        };
        Ok(reply)
    }
}

fn arity(command: &'static str, args: &[&str], expected: usize) -> Result<(), GraphError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(GraphError::ArgumentCount {
            command,
            expected,
            got: args.len(),
        })
    }
}

/// Parses any integer literal that fits `i128`.
fn integer_arg(args: &[&str], argument: usize) -> Result<i128, GraphError> {
    let raw = args[argument];
    raw.parse::<i128>().map_err(|_| GraphError::TypeMismatch {
        argument,
        value: raw.to_string(),
    })
}

/// Parses a vertex id and reduces it to `0..64` with euclidean modulo.
fn vertex_arg(args: &[&str], argument: usize) -> Result<u64, GraphError> {
    let v = integer_arg(args, argument)?;
    Ok(v.rem_euclid(MAX_VERTICES as i128) as u64)
}

// ============================================================================
// Reply
// ============================================================================

/// The value produced by a successfully applied [`Command`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    /// A mutation completed.
    Done,
    /// A boolean query result.
    Bool(bool),
    /// A count (vertices, edges, degree).
    Count(u64),
    /// A set of vertices, ascending.
    Vertices(Vec<u64>),
    /// A set of edges `(i, j)` with `i < j`.
    Edges(Vec<(u64, u64)>),
    /// Free text, such as a graph6 string.
    Text(String),
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Done => f.write_str("ok"),
            Reply::Bool(b) => write!(f, "{b}"),
            Reply::Count(n) => write!(f, "{n}"),
            Reply::Vertices(vs) => {
                f.write_str("{")?;
                for (k, v) in vs.iter().enumerate() {
                    if k > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("}")
            }
            Reply::Edges(es) => {
                f.write_str("{")?;
                for (k, (u, v)) in es.iter().enumerate() {
                    if k > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "({u}, {v})")?;
                }
                f.write_str("}")
            }
            Reply::Text(s) => f.write_str(s),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
