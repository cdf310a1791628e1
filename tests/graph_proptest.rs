use proptest::prelude::*;
use simple_graphs::prelude::*;
use std::collections::BTreeSet;

#[derive(Debug, Clone)]
enum Operation {
    AddVertex(u64),
    DeleteVertex(u64),
    AddEdge(u64, u64),
    DeleteEdge(u64, u64),
}

fn operation() -> impl Strategy<Value = Operation> {
    // Small ids keep collisions frequent; a few large ids exercise aliasing.
    let id = prop_oneof![4 => 0u64..12, 1 => any::<u64>()];
    prop_oneof![
        2 => id.clone().prop_map(Operation::AddVertex),
        1 => id.clone().prop_map(Operation::DeleteVertex),
        4 => (id.clone(), id.clone()).prop_map(|(u, v)| Operation::AddEdge(u, v)),
        1 => (id.clone(), id).prop_map(|(u, v)| Operation::DeleteEdge(u, v)),
    ]
}

fn apply(graph: &mut Graph, op: &Operation) {
    match *op {
        Operation::AddVertex(v) => {
            graph.add_vertex(v);
        }
        Operation::DeleteVertex(v) => {
            graph.delete_vertex(v);
        }
        Operation::AddEdge(u, v) => {
            let _ = graph.add_edge(u, v);
        }
        Operation::DeleteEdge(u, v) => {
            graph.delete_edge(u, v);
        }
    }
}

fn build(ops: &[Operation]) -> Graph {
    let mut graph = Graph::new();
    for op in ops {
        apply(&mut graph, op);
    }
    graph
}

proptest! {
    #[test]
    fn invariants_survive_any_operation_sequence(
        ops in proptest::collection::vec(operation(), 0..200)
    ) {
        let mut graph = Graph::new();
        for op in &ops {
            apply(&mut graph, op);
            prop_assert!(graph.invariants_hold(), "invariant broken after {:?}", op);
        }
    }

    #[test]
    fn add_vertex_increments_count_unless_present(
        ops in proptest::collection::vec(operation(), 0..100),
        v in any::<u64>(),
    ) {
        let mut graph = build(&ops);
        let was_present = graph.contains_vertex(v);
        let before = graph.vertex_count();
        graph.add_vertex(v);
        let expected = if was_present { before } else { before + 1 };
        prop_assert_eq!(graph.vertex_count(), expected);
    }

    #[test]
    fn add_edge_then_delete_edge(
        ops in proptest::collection::vec(operation(), 0..100),
        u in 0u64..64,
        v in 0u64..64,
    ) {
        prop_assume!(u != v);
        let mut graph = build(&ops);
        graph.add_vertex(u);
        graph.add_vertex(v);
        graph.add_edge(u, v).unwrap();
        prop_assert!(graph.is_edge(u, v));
        prop_assert!(graph.is_edge(v, u));
        graph.delete_edge(u, v);
        prop_assert!(!graph.is_edge(u, v));
        prop_assert!(!graph.is_edge(v, u));
    }

    #[test]
    fn delete_vertex_removes_vertex_and_incident_edges(
        ops in proptest::collection::vec(operation(), 0..150),
        v in any::<u64>(),
    ) {
        let mut graph = build(&ops);
        graph.delete_vertex(v);
        let slot = v % 64;
        prop_assert!(!graph.vertices().any(|w| w == slot));
        for u in 0..64 {
            prop_assert!(!graph.is_edge(u, v));
            prop_assert!(!graph.is_edge(v, u));
        }
    }

    #[test]
    fn number_of_edges_matches_edge_iterator(
        ops in proptest::collection::vec(operation(), 0..200)
    ) {
        let graph = build(&ops);
        let edges: BTreeSet<(u64, u64)> = graph.edges().collect();
        prop_assert_eq!(graph.number_of_edges(), edges.len());
        prop_assert_eq!(graph.edges().count(), edges.len());
        for (i, j) in edges {
            prop_assert!(i < j);
            prop_assert!(graph.is_edge(i, j));
        }
    }

    #[test]
    fn vertices_of_degree_matches_popcount(
        ops in proptest::collection::vec(operation(), 0..200),
        d in 0u32..64,
    ) {
        let graph = build(&ops);
        let got: BTreeSet<u64> = graph.vertices_of_degree(d).collect();
        let expected: BTreeSet<u64> = graph
            .vertices()
            .filter(|&v| graph.adjacency()[v as usize].count_ones() == d)
            .collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn equality_is_reflexive_symmetric_and_value_based(
        ops in proptest::collection::vec(operation(), 0..100)
    ) {
        let a = build(&ops);
        let b = build(&ops);
        prop_assert_eq!(&a, &a);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(&b, &a);
        prop_assert_eq!(a.compare(&b, Comparison::Ne), Ok(false));

        let free = (0u64..64).find(|&v| !a.contains_vertex(v));
        if let Some(v) = free {
            let mut c = a.clone();
            c.add_vertex(v);
            prop_assert_ne!(&a, &c);
            prop_assert_eq!(a.compare(&c, Comparison::Eq), Ok(false));
        }
    }

    #[test]
    fn graph6_roundtrip_on_prefix_graphs(
        n in 0usize..=62,
        edges in proptest::collection::vec((0u64..62, 0u64..62), 0..150),
    ) {
        let mut graph = Graph::with_order(n).unwrap();
        for (u, v) in edges {
            let _ = graph.add_edge(u, v);
        }
        let text = graph.to_graph6().unwrap();
        let back = Graph::from_graph6(&text).unwrap();
        prop_assert_eq!(back, graph);
    }

    #[test]
    fn decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..40)) {
        if let Ok(graph) = decode(&bytes) {
            prop_assert!(graph.invariants_hold());
        }
    }
}

#[test]
fn path_graph_decodes_to_expected_edges() {
    let graph = decode(b"Ch").unwrap();
    assert_eq!(graph.vertex_count(), 4);
    let edges: BTreeSet<_> = graph.edges().collect();
    assert_eq!(edges, BTreeSet::from([(0, 1), (1, 2), (2, 3)]));
}

#[test]
fn empty_sequence_fails_without_a_graph() {
    assert_eq!(decode(b""), Err(GraphError::EmptyInput));
}

#[test]
fn isolated_vertex_breaks_equality() {
    assert_eq!(Graph::new(), Graph::new());
    let mut g = Graph::new();
    g.add_vertex(0);
    assert_ne!(g, Graph::new());
}
