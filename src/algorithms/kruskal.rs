//! # Kruskal minimum/maximum spanning tree
//!
//! ## Description
//! Sort-based spanning-tree construction over a flat range of `{source_id, target_id,
//! weight}` triples, driven by a union-find forest with union-by-rank and path
//! compression on `find`. Two entry points: one sorts a private
//! copy of the edges (`kruskal_minimum_spanning_tree`), one sorts the caller's own slice
//! in place (`kruskal_minimum_spanning_tree_in_place`).
use std::cmp::Ordering;

use itertools::Itertools;

use crate::errors::{GraphError, GraphResult};
use crate::id::VertexId;
use crate::model::CopyableEdge;

pub use super::{ascending, descending};

struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind { parent: (0..n).collect(), rank: vec![0; n] }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    /// Returns `true` if `a` and `b` were in different components (and were therefore
    /// merged); `false` if they were already in the same one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

fn build_forest<VId, W>(vertex_count: usize, edges: impl Iterator<Item = CopyableEdge<VId, W>>) -> GraphResult<Vec<CopyableEdge<VId, W>>>
where
    VId: VertexId,
{
    const FUNCTION_PATH: &str = "kruskal_minimum_spanning_tree";
    let mut forest = UnionFind::new(vertex_count);
    let mut tree = Vec::new();
    for edge in edges {
        let (s, t) = (edge.source_id.to_usize(), edge.target_id.to_usize());
        if s >= vertex_count || t >= vertex_count {
            return Err(GraphError::out_of_range(
                FUNCTION_PATH,
                format!("edge ({}, {}) references a vertex outside a graph of {} vertices", edge.source_id, edge.target_id, vertex_count),
            ));
        }
        if forest.union(s, t) {
            tree.push(edge);
        }
    }
    Ok(tree)
}

/// Sort a private copy of `edges` under `comparator` (default: [`ascending`], a minimum
/// tree) and run the union-find sweep; the caller's own `edges` range is left untouched.
/// `O(|E| log |V|)`.
pub fn kruskal_minimum_spanning_tree<VId, W, I, Cmp>(vertex_count: usize, edges: I, mut comparator: Cmp) -> GraphResult<Vec<CopyableEdge<VId, W>>>
where
    VId: VertexId,
    W: Copy,
    I: IntoIterator<Item = CopyableEdge<VId, W>>,
    Cmp: FnMut(&W, &W) -> Ordering,
{
    let sorted = edges.into_iter().sorted_by(|a, b| comparator(&a.value, &b.value));
    build_forest(vertex_count, sorted)
}

/// Like [`kruskal_minimum_spanning_tree`], but sorts `edges` in place instead of copying
/// it, so the caller observes the sorted order afterward.
pub fn kruskal_minimum_spanning_tree_in_place<VId, W, Cmp>(vertex_count: usize, edges: &mut [CopyableEdge<VId, W>], mut comparator: Cmp) -> GraphResult<Vec<CopyableEdge<VId, W>>>
where
    VId: VertexId,
    W: Copy,
    Cmp: FnMut(&W, &W) -> Ordering,
{
    edges.sort_by(|a, b| comparator(&a.value, &b.value));
    build_forest(vertex_count, edges.iter().copied())
}



#[cfg(test)]
mod tests {
    use super::*;

    fn germany_routes() -> Vec<CopyableEdge<u32, f64>> {
        vec![
            CopyableEdge::new(0, 1, 85.0), CopyableEdge::new(0, 4, 217.0), CopyableEdge::new(0, 6, 173.0),
            CopyableEdge::new(1, 2, 80.0), CopyableEdge::new(2, 3, 250.0), CopyableEdge::new(3, 8, 84.0),
            CopyableEdge::new(4, 5, 103.0), CopyableEdge::new(4, 7, 186.0), CopyableEdge::new(5, 8, 167.0),
            CopyableEdge::new(5, 9, 183.0), CopyableEdge::new(6, 8, 502.0),
        ]
    }

    #[test]
    fn minimum_tree_weight_matches_reference() {
        let tree = kruskal_minimum_spanning_tree(10, germany_routes(), ascending).unwrap();
        assert_eq!(tree.len(), 9);
        let total: f64 = tree.iter().map(|e| e.value).sum();
        assert_eq!(total, 1361.0);
    }

    #[test]
    fn tree_is_sorted_by_weight_non_decreasing() {
        let tree = kruskal_minimum_spanning_tree(10, germany_routes(), ascending).unwrap();
        assert!(tree.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn in_place_variant_sorts_the_callers_slice() {
        let mut edges = germany_routes();
        let tree = kruskal_minimum_spanning_tree_in_place(10, &mut edges, ascending).unwrap();
        assert_eq!(tree.len(), 9);
        assert!(edges.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn spanning_forest_has_v_minus_c_edges() {
        // Two disjoint triangles-ish components: {0,1,2} and {3,4}.
        let edges = vec![
            CopyableEdge::new(0u32, 1, 1.0), CopyableEdge::new(1, 2, 1.0), CopyableEdge::new(0, 2, 1.0),
            CopyableEdge::new(3, 4, 1.0),
        ];
        let tree = kruskal_minimum_spanning_tree(5, edges, ascending).unwrap();
        // |V| - c = 5 - 2 = 3
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn maximum_tree_weight_matches_reference() {
        let tree = kruskal_minimum_spanning_tree(10, germany_routes(), descending).unwrap();
        let total: f64 = tree.iter().map(|e| e.value).sum();
        assert_eq!(total, 1779.0);
    }
}
