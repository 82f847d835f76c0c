//! # Algorithms
//!
//! ## Description
//! Single-source shortest paths and minimum/maximum spanning tree construction, built
//! once against [`crate::model::AdjacencyList`]/[`crate::model::IncidenceGraph`] so they
//! work identically over [`crate::containers::csr::CsrGraph`],
//! [`crate::containers::dynamic::DynamicGraph`], or any user-defined graph type that
//! implements the model traits.
pub mod dijkstra;
pub mod kruskal;
pub mod prim;

pub use dijkstra::dijkstra_shortest_paths;
pub use kruskal::{kruskal_minimum_spanning_tree, kruskal_minimum_spanning_tree_in_place};
pub use prim::prim_minimum_spanning_tree;

use std::cmp::Ordering;

/// The default comparator shared by [`kruskal`] and [`prim`]: ascending order, i.e. a
/// minimum spanning tree.
pub fn ascending<W: PartialOrd>(a: &W, b: &W) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Reversed comparator shared by [`kruskal`] and [`prim`]: descending order, i.e. a
/// maximum spanning tree.
pub fn descending<W: PartialOrd>(a: &W, b: &W) -> Ordering {
    ascending(a, b).reverse()
}
