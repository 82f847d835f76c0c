//! # Dijkstra shortest paths
//!
//! ## Description
//! Single-source shortest paths over an [`IncidenceGraph`] whose edge weights are
//! extracted by a caller-supplied function. Standard binary-heap relaxation, matching
//! the classic formulation: stale heap entries are tolerated because they fail the relaxation test
//! on pop rather than being removed from the heap up front.
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::ops::Add;

use num_traits::{Bounded, Zero};

use crate::errors::{GraphError, GraphResult};
use crate::id::VertexId;
use crate::model::{EdgeTarget, IncidenceGraph};

/// A min-heap entry ordered by distance; `Ord` is reversed relative to the natural order
/// of `W` so that [`BinaryHeap`] (a max-heap) pops the smallest distance first.
struct HeapEntry<W, VId> {
    dist: W,
    vertex: VId,
}

impl<W: PartialEq, VId> PartialEq for HeapEntry<W, VId> {
    fn eq(&self, other: &Self) -> bool {
        self.dist == other.dist
    }
}

impl<W: PartialEq, VId> Eq for HeapEntry<W, VId> {}

impl<W: PartialOrd, VId> PartialOrd for HeapEntry<W, VId> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: PartialOrd, VId> Ord for HeapEntry<W, VId> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: smaller `dist` must compare as "greater" so it surfaces first.
        other.dist.partial_cmp(&self.dist).unwrap_or(Ordering::Equal)
    }
}

/// Compute, from `source`, the shortest-path distance and predecessor for every vertex of
/// `g`. `weight` extracts an edge's weight; unreachable vertices get `W::max_value()` and
/// `pred[i] == i`. Negative weights are accepted but the result is then undefined.
pub fn dijkstra_shortest_paths<G, F, W>(g: &G, source: G::VId, weight: F) -> GraphResult<(Vec<W>, Vec<G::VId>)>
where
    G: IncidenceGraph,
    F: Fn(&G::Edge) -> W,
    W: Copy + PartialOrd + Add<Output = W> + Zero + Bounded,
{
    const FUNCTION_PATH: &str = "dijkstra_shortest_paths";
    let n = g.vertex_count();
    g.find_vertex(source).map_err(|_| {
        GraphError::out_of_range(FUNCTION_PATH, format!("source id {} is out of range for a graph with {} vertices", source, n))
    })?;

    let mut dist: Vec<W> = vec![W::max_value(); n];
    let mut pred: Vec<G::VId> = (0..n).map(G::VId::from_usize).collect();
    dist[source.to_usize()] = W::zero();

    let mut heap = BinaryHeap::new();
    heap.push(HeapEntry { dist: W::zero(), vertex: source });

    while let Some(HeapEntry { dist: d, vertex: u }) = heap.pop() {
        if d > dist[u.to_usize()] {
            // Stale entry: a shorter path to `u` was already found and relaxed.
            continue;
        }
        for edge in g.edges(u) {
            let v = edge.target_id();
            let candidate = d + weight(&edge);
            let v_idx = v.to_usize();
            if candidate < dist[v_idx] {
                dist[v_idx] = candidate;
                pred[v_idx] = u;
                heap.push(HeapEntry { dist: candidate, vertex: v });
            }
        }
    }

    Ok((dist, pred))
}
