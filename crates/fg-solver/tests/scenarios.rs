//! End-to-end shortest-distance scenarios.

use fg_core::VertexId;
use fg_graph::GraphModel;
use fg_solver::{Distance, distance, solve};

fn graph_with(n: usize, edges: &[(u32, u32, u32)]) -> (GraphModel, Vec<VertexId>) {
    let mut g = GraphModel::new();
    let ids: Vec<VertexId> = (1..=n)
        .map(|i| g.add_vertex(&format!("City{}", i)).unwrap())
        .collect();
    for &(a, b, w) in edges {
        g.add_edge(ids[a as usize - 1], ids[b as usize - 1], w)
            .unwrap();
    }
    (g, ids)
}

#[test]
fn two_hop_path() {
    let (g, _) = graph_with(3, &[(1, 2, 5), (2, 3, 3)]);
    let m = solve(&g);
    assert_eq!(distance(&m, 0, 2).unwrap(), Distance::Finite(8));
    assert_eq!(distance(&m, 0, 1).unwrap(), Distance::Finite(5));
    assert_eq!(distance(&m, 1, 2).unwrap(), Distance::Finite(3));
}

#[test]
fn direct_edge_beats_two_hops() {
    let (g, _) = graph_with(3, &[(1, 2, 5), (2, 3, 3), (1, 3, 4)]);
    let m = solve(&g);
    assert_eq!(distance(&m, 0, 2).unwrap(), Distance::Finite(4));
    assert_eq!(distance(&m, 2, 0).unwrap(), Distance::Finite(4));
}

#[test]
fn disconnected_pair_is_unreachable() {
    let (g, _) = graph_with(2, &[]);
    let m = solve(&g);
    assert_eq!(distance(&m, 0, 1).unwrap(), Distance::Unreachable);
    assert_eq!(distance(&m, 1, 1).unwrap(), Distance::Finite(0));
}

#[test]
fn new_vertex_joins_after_resolve() {
    // 1-2 connected, 3 isolated.
    let (mut g, ids) = graph_with(3, &[(1, 2, 6)]);
    let before = solve(&g);
    assert_eq!(distance(&before, 0, 2).unwrap(), Distance::Unreachable);

    let hub = g.add_vertex("Hub").unwrap();
    g.add_edge(hub, ids[0], 2).unwrap();
    g.add_edge(hub, ids[2], 1).unwrap();
    let after = solve(&g);

    let hub_pos = g.position_of(hub).unwrap();
    assert_eq!(distance(&after, hub_pos, 0).unwrap(), Distance::Finite(2));
    assert_eq!(distance(&after, hub_pos, 1).unwrap(), Distance::Finite(8));
    assert_eq!(distance(&after, 0, 2).unwrap(), Distance::Finite(3));

    for i in 0..before.len() {
        for j in 0..before.len() {
            let old = distance(&before, i, j).unwrap();
            let new = distance(&after, i, j).unwrap();
            assert!(new <= old, "({i},{j}) worsened: {old} -> {new}");
        }
    }
}

#[test]
fn rename_leaves_matrix_unchanged() {
    let (mut g, ids) = graph_with(4, &[(1, 2, 2), (2, 3, 2), (3, 4, 9), (1, 4, 1)]);
    let before = solve(&g);
    g.rename_vertex(ids[2], "Renamed").unwrap();
    let after = solve(&g);
    assert_eq!(before, after);
}

#[test]
fn matrix_labels_match_model() {
    let (g, ids) = graph_with(3, &[(1, 3, 7)]);
    let m = solve(&g);
    assert_eq!(m.ids(), ids.as_slice());
    assert_eq!(m.id_at(2).unwrap(), ids[2]);
}
