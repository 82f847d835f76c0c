//! End-to-end exercise of the Germany-routes fixture: loads the same 10 vertices / 11
//! edges into both built-in containers and checks the full set of cross-cutting
//! properties (CSR metadata, BFS/DFS order and cancellation, Dijkstra, Kruskal, Prim)
//! against their known reference values.
use crabgraph::algorithms::{ascending, descending};
use crabgraph::containers::csr::CsrGraph;
use crabgraph::containers::dynamic::{DynamicGraph, ValuedEdge};
use crabgraph::views::{vertices_breadth_first_search, vertices_depth_first_search, CancelKind};
use crabgraph::{dijkstra_shortest_paths, kruskal_minimum_spanning_tree, prim_minimum_spanning_tree, AdjacencyList, CopyableEdge};

const UNDIRECTED_EDGES: [(u32, u32, f64); 11] = [
    (0, 1, 85.0), (0, 4, 217.0), (0, 6, 173.0), (1, 2, 80.0), (2, 3, 250.0), (3, 8, 84.0),
    (4, 5, 103.0), (4, 7, 186.0), (5, 8, 167.0), (5, 9, 183.0), (6, 8, 502.0),
];

fn directed_edges() -> Vec<CopyableEdge<u32, f64>> {
    let mut edges: Vec<CopyableEdge<u32, f64>> = Vec::new();
    for &(s, t, w) in &UNDIRECTED_EDGES {
        edges.push(CopyableEdge::new(s, t, w));
        edges.push(CopyableEdge::new(t, s, w));
    }
    edges.sort_by_key(|e| (e.source_id, e.target_id));
    edges
}

#[test]
fn csr_metadata_matches_reference() {
    let edges: Vec<CopyableEdge<u32, f64>> = UNDIRECTED_EDGES.iter().map(|&(s, t, w)| CopyableEdge::new(s, t, w)).collect();
    let g: CsrGraph<u32, f64> = CsrGraph::from_edges(edges).unwrap();
    assert_eq!(g.vertex_count(), 10);
    let edge_count: usize = g.vertices().map(|u| g.edges(u).count()).sum();
    assert_eq!(edge_count, 11);
    let total: f64 = g.vertices().flat_map(|u| g.edges(u).collect::<Vec<_>>()).map(|e| e.value).sum();
    assert_eq!(total, 2030.0);
}

#[test]
fn bfs_from_frankfurt_matches_reference_order_and_cancels_cleanly() {
    let edges: Vec<CopyableEdge<u32, f64>> = UNDIRECTED_EDGES.iter().map(|&(s, t, w)| CopyableEdge::new(s, t, w)).collect();
    let mut g: CsrGraph<u32, f64> = CsrGraph::new();
    g.load_edges(edges).unwrap();

    let order: Vec<u32> = vertices_breadth_first_search(&g, 0).collect();
    assert_eq!(order, vec![1, 4, 6, 2, 5, 7, 8, 3, 9]);

    let mut bfs = vertices_breadth_first_search(&g, 0);
    let mut emitted = Vec::new();
    while let Some(v) = bfs.next() {
        emitted.push(v);
        if v == 2 {
            bfs.cancel(CancelKind::CancelAll);
        }
    }
    assert_eq!(emitted.len(), 4);
    assert_eq!(bfs.next(), None);
}

#[test]
fn dfs_from_frankfurt_matches_reference_order() {
    let edges: Vec<CopyableEdge<u32, f64>> = UNDIRECTED_EDGES.iter().map(|&(s, t, w)| CopyableEdge::new(s, t, w)).collect();
    let mut g: CsrGraph<u32, f64> = CsrGraph::new();
    g.load_edges(edges).unwrap();

    let order: Vec<u32> = vertices_depth_first_search(&g, 0).collect();
    assert_eq!(order, vec![1, 2, 3, 8, 4, 5, 9, 7, 6]);
}

#[test]
fn dijkstra_from_nurnberg_reaches_every_vertex() {
    let mut g: CsrGraph<u32, f64> = CsrGraph::new();
    g.load_edges(directed_edges()).unwrap();

    let (dist, _pred) = dijkstra_shortest_paths(&g, 5, |e| e.value).unwrap();
    assert_eq!(dist.len(), 10);
    assert!(dist.iter().all(|&d| d < f64::MAX));
    assert_eq!(dist[5], 0.0);
}

#[test]
fn kruskal_minimum_tree_weight_matches_reference() {
    let edges: Vec<CopyableEdge<u32, f64>> = UNDIRECTED_EDGES.iter().map(|&(s, t, w)| CopyableEdge::new(s, t, w)).collect();
    let tree = kruskal_minimum_spanning_tree(10, edges, ascending).unwrap();
    assert_eq!(tree.len(), 9);
    let total: f64 = tree.iter().map(|e| e.value).sum();
    assert_eq!(total, 1361.0);
}

#[test]
fn prim_minimum_and_maximum_tree_weight_from_frankfurt_match_reference() {
    let mut g: CsrGraph<u32, f64> = CsrGraph::new();
    g.load_edges(directed_edges()).unwrap();

    let mut pred = vec![0u32; g.vertex_count()];
    let mut weight = vec![0.0f64; g.vertex_count()];
    prim_minimum_spanning_tree(&g, 0, |e| e.value, ascending, &mut pred, &mut weight).unwrap();
    assert_eq!(pred[0], 0);
    let min_total: f64 = (1..g.vertex_count()).map(|v| weight[v]).sum();
    assert_eq!(min_total, 1361.0);

    prim_minimum_spanning_tree(&g, 0, |e| e.value, descending, &mut pred, &mut weight).unwrap();
    let max_total: f64 = (1..g.vertex_count()).map(|v| weight[v]).sum();
    assert_eq!(max_total, 1779.0);
}

#[test]
fn dynamic_container_reproduces_the_same_fixture() {
    let mut g: DynamicGraph<u32, ValuedEdge<u32, f64>> = DynamicGraph::new();
    g.load_edges(UNDIRECTED_EDGES.iter().map(|&(s, t, w)| CopyableEdge::new(s, t, w))).unwrap();
    assert_eq!(g.vertex_count(), 10);
    let total: f64 = g.vertices().flat_map(|u| g.edges(u).collect::<Vec<_>>()).map(|e| e.value).sum();
    assert_eq!(total, 2030.0);
}
