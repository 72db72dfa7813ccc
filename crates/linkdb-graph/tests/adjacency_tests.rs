//! Integration tests for the adjacency map.
//!
//! These tests cover lookups in both flavors, mirrored storage of undirected
//! edges, entry counting, iteration dedup, and the vertex set after mutations.

use std::collections::HashSet;

use linkdb_core::{Arc, Edge, VertexId, VertexPair};
use linkdb_graph::{AdjacencyConfig, ArcMap, EdgeMap, GraphError};

fn ids(raw: &[i32]) -> HashSet<VertexId> {
    raw.iter().copied().map(VertexId::new).collect()
}

// ============================================================================
// Directed lookups
// ============================================================================

#[test]
fn directed_insert_then_get() {
    let mut arcs = ArcMap::new();
    arcs.insert(Arc::from((1, 2)), "follows").expect("insert");

    assert_eq!(arcs.get(&Arc::from((1, 2))), Some(&"follows"));
    assert_eq!(arcs.get(&Arc::from((2, 1))), None);
    assert!(!arcs.contains_key(&Arc::from((2, 1))));
}

#[test]
fn directed_reverse_is_independent() {
    let mut arcs = ArcMap::new();
    arcs.insert(Arc::from((1, 2)), 1).expect("insert");
    arcs.insert(Arc::from((2, 1)), 2).expect("insert");

    assert_eq!(arcs.len(), 2);
    assert_eq!(arcs.remove(&Arc::from((1, 2))), Some(1));
    assert_eq!(arcs.get(&Arc::from((2, 1))), Some(&2));
    assert_eq!(arcs.len(), 1);
}

#[test]
fn directed_overwrite_returns_previous() {
    let mut arcs = ArcMap::new();
    assert_eq!(arcs.insert(Arc::from((4, 5)), 'x').expect("insert"), None);
    assert_eq!(arcs.insert(Arc::from((4, 5)), 'y').expect("insert"), Some('x'));

    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[&Arc::from((4, 5))], 'y');
}

#[test]
fn directed_get_mut_updates_in_place() {
    let mut arcs = ArcMap::new();
    arcs.insert(Arc::from((1, 2)), 10).expect("insert");

    if let Some(weight) = arcs.get_mut(&Arc::from((1, 2))) {
        *weight += 5;
    }
    assert_eq!(arcs.get(&Arc::from((1, 2))), Some(&15));
    assert!(arcs.get_mut(&Arc::from((2, 1))).is_none());
}

// ============================================================================
// Undirected lookups
// ============================================================================

#[test]
fn undirected_found_from_either_direction() {
    let mut edges = EdgeMap::new();
    edges.insert(Edge::from((1, 2)), "knows").expect("insert");

    assert_eq!(edges.get(&Edge::from((1, 2))), Some(&"knows"));
    assert_eq!(edges.get(&Edge::from((2, 1))), Some(&"knows"));
}

#[test]
fn undirected_remove_clears_both_directions() {
    let mut edges = EdgeMap::new();
    edges.insert(Edge::from((1, 2)), 7).expect("insert");

    assert_eq!(edges.remove(&Edge::from((1, 2))), Some(7));
    assert!(edges.get(&Edge::from((1, 2))).is_none());
    assert!(edges.get(&Edge::from((2, 1))).is_none());
    assert!(edges.is_empty());
}

#[test]
fn undirected_overwrite_from_other_direction() {
    let mut edges = EdgeMap::new();
    edges.insert(Edge::from((1, 2)), 1).expect("insert");
    let previous = edges.insert(Edge::from((2, 1)), 2).expect("insert");

    assert_eq!(previous, Some(1));
    assert_eq!(edges.len(), 1);
    assert_eq!(edges.get(&Edge::from((1, 2))), Some(&2));
    assert_eq!(edges.get(&Edge::from((2, 1))), Some(&2));
}

#[test]
fn undirected_self_loop_rejected() {
    let mut edges = EdgeMap::new();
    let result = edges.insert(Edge::from((3, 3)), ());

    assert!(matches!(result, Err(GraphError::InvalidArgument(_))));
    assert!(edges.is_empty());
    assert!(edges.vertices().is_empty());
}

#[test]
fn try_from_iter_stops_at_self_loop() {
    let mut edges = EdgeMap::new();
    let result =
        edges.extend_from([(Edge::from((1, 2)), 0), (Edge::from((5, 5)), 0), (Edge::from((2, 3)), 0)]);

    assert!(result.is_err());
    assert_eq!(edges.len(), 1);
    assert!(EdgeMap::try_from_iter([(Edge::from((0, 0)), 0)]).is_err());
}

#[test]
fn remove_missing_is_noop() {
    let mut edges: EdgeMap<u8> = EdgeMap::new();
    edges.insert(Edge::from((1, 2)), 0).expect("insert");

    assert_eq!(edges.remove(&Edge::from((1, 3))), None);
    assert_eq!(edges.remove(&Edge::from((8, 9))), None);
    assert_eq!(edges.len(), 1);
}

// ============================================================================
// Counting and iteration
// ============================================================================

#[test]
fn undirected_len_counts_logical_entries() {
    let edges = EdgeMap::try_from_iter([
        (Edge::from((1, 2)), 0),
        (Edge::from((2, 1)), 1),
        (Edge::from((2, 3)), 2),
        (Edge::from((3, 1)), 3),
    ])
    .expect("build");

    assert_eq!(edges.len(), 3);
    assert_eq!(edges.iter().count(), 3);
    assert_eq!(edges.iter().len(), 3);
}

#[test]
fn undirected_iteration_yields_larger_second() {
    let edges = EdgeMap::try_from_iter([(Edge::from((3, 7)), 'a'), (Edge::from((9, 2)), 'b')])
        .expect("build");

    let mut seen: Vec<(i32, i32, char)> = edges
        .iter()
        .map(|(edge, value)| (edge.first().as_i32(), edge.second().as_i32(), *value))
        .collect();
    seen.sort_unstable();

    assert_eq!(seen, vec![(2, 9, 'b'), (3, 7, 'a')]);
}

#[test]
fn undirected_values_once_per_edge() {
    let edges = EdgeMap::try_from_iter([(Edge::from((1, 2)), 5), (Edge::from((2, 3)), 6)])
        .expect("build");

    let mut values: Vec<i32> = edges.values().copied().collect();
    values.sort_unstable();
    assert_eq!(values, vec![5, 6]);
}

#[test]
fn directed_iteration_yields_every_arc() {
    let arcs: ArcMap<()> =
        [(Arc::from((1, 2)), ()), (Arc::from((2, 1)), ()), (Arc::from((2, 3)), ())]
            .into_iter()
            .collect();

    let keys: HashSet<Arc> = arcs.keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(keys.contains(&Arc::from((2, 1))));
}

#[test]
fn peek_does_not_consume() {
    let arcs: ArcMap<u8> = [(Arc::from((1, 2)), 1)].into_iter().collect();
    let mut keys = arcs.keys();

    assert_eq!(keys.peek(), Some(Arc::from((1, 2))));
    assert_eq!(keys.next(), Some(Arc::from((1, 2))));
    assert_eq!(keys.peek(), None);
    assert_eq!(keys.next(), None);
    assert_eq!(keys.next(), None);
}

#[test]
fn empty_iterators_are_terminal() {
    let edges: EdgeMap<u8> = EdgeMap::new();
    assert!(edges.iter().next().is_none());
    assert!(edges.keys().peek().is_none());
    assert_eq!(edges.values().len(), 0);
}

#[test]
fn retain_removes_both_directions() {
    let mut edges = EdgeMap::try_from_iter([
        (Edge::from((1, 2)), 1),
        (Edge::from((2, 3)), 2),
        (Edge::from((3, 4)), 3),
    ])
    .expect("build");

    let removed = edges.retain(|_, value| value % 2 == 0);

    assert_eq!(removed, 2);
    assert_eq!(edges.len(), 1);
    assert_eq!(edges.get(&Edge::from((3, 2))), Some(&2));
    assert_eq!(edges.degree(VertexId::new(1)), 0);
    assert_eq!(edges.degree(VertexId::new(4)), 0);
}

// ============================================================================
// Vertices and clearing
// ============================================================================

#[test]
fn directed_vertices_include_targets() {
    let arcs: ArcMap<()> = [(Arc::from((1, 2)), ())].into_iter().collect();
    assert_eq!(arcs.vertices(), ids(&[1, 2]));
}

#[test]
fn undirected_vertices_include_both_ends() {
    let edges = EdgeMap::try_from_iter([(Edge::from((1, 2)), ())]).expect("build");
    assert_eq!(edges.vertices(), ids(&[1, 2]));
}

#[test]
fn removing_incident_entries_drops_vertex() {
    let mut edges = EdgeMap::try_from_iter([
        (Edge::from((1, 2)), ()),
        (Edge::from((1, 3)), ()),
        (Edge::from((2, 3)), ()),
    ])
    .expect("build");

    edges.remove(&Edge::from((2, 1)));
    edges.remove(&Edge::from((3, 1)));

    assert_eq!(edges.vertices(), ids(&[2, 3]));
    assert!(edges.neighbors(VertexId::new(1)).is_none());
}

#[test]
fn directed_vertex_kept_while_target() {
    let mut arcs: ArcMap<()> =
        [(Arc::from((1, 2)), ()), (Arc::from((3, 1)), ())].into_iter().collect();

    arcs.remove(&Arc::from((1, 2)));
    assert_eq!(arcs.vertices(), ids(&[1, 3]));

    arcs.remove(&Arc::from((3, 1)));
    assert!(arcs.vertices().is_empty());
}

#[test]
fn clear_then_reuse() {
    let mut edges = EdgeMap::try_from_iter([(Edge::from((1, 2)), 1), (Edge::from((2, 3)), 2)])
        .expect("build");

    edges.clear();
    assert!(edges.is_empty());
    assert_eq!(edges.len(), 0);
    assert!(edges.key_set().is_empty());
    assert!(edges.value_collection().is_empty());
    assert!(edges.entry_set().is_empty());
    assert!(edges.vertices().is_empty());

    edges.insert(Edge::from((5, 4)), 9).expect("insert");
    assert_eq!(edges.len(), 1);
    assert_eq!(edges.get(&Edge::from((4, 5))), Some(&9));
}

#[test]
fn neighbors_and_degree() {
    let edges = EdgeMap::try_from_iter([(Edge::from((1, 2)), 'a'), (Edge::from((3, 1)), 'b')])
        .expect("build");
    let one = VertexId::new(1);

    assert_eq!(edges.degree(one), 2);
    let neighbors = edges.neighbors(one).expect("vertex 1 has neighbors");
    assert_eq!(neighbors.get(&VertexId::new(3)), Some(&'b'));
    assert_eq!(edges.degree(VertexId::new(42)), 0);
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn with_config_behaves_like_default() {
    let config = AdjacencyConfig::new().with_outer_capacity(64).with_inner_capacity(8);
    let mut sized = ArcMap::with_config(config);
    let mut plain = ArcMap::new();

    for (a, b) in [(1, 2), (2, 3), (3, 1)] {
        sized.insert(Arc::from((a, b)), a + b).expect("insert");
        plain.insert(Arc::from((a, b)), a + b).expect("insert");
    }

    assert_eq!(sized, plain);
    assert_eq!(sized.config().outer_capacity, 64);
}

// ============================================================================
// Extreme vertex IDs
// ============================================================================

#[test]
fn undirected_extreme_ids() {
    let mut edges = EdgeMap::new();
    edges.insert(Edge::from((i32::MAX, i32::MIN)), 'x').expect("insert");
    edges.insert(Edge::from((0, -1)), 'y').expect("insert");

    assert_eq!(edges.get(&Edge::from((i32::MIN, i32::MAX))), Some(&'x'));
    let mut keys: Vec<(i32, i32)> =
        edges.keys().map(|edge| (edge.first().as_i32(), edge.second().as_i32())).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec![(i32::MIN, i32::MAX), (-1, 0)]);
}

#[test]
fn directed_self_arc_allowed() {
    let mut arcs = ArcMap::new();
    arcs.insert(Arc::from((7, 7)), "loop").expect("insert");

    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs.keys().collect::<Vec<_>>(), vec![Arc::from((7, 7))]);
    assert_eq!(arcs.vertices(), ids(&[7]));

    assert_eq!(arcs.remove(&Arc::from((7, 7))), Some("loop"));
    assert!(arcs.vertices().is_empty());
}
