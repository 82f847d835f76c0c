//! # Views
//!
//! ## Description
//! Lazy, borrowing iterators over a graph: [`vertexlist`], [`incidence`]/
//! [`sourced_incidence`]/[`neighbors`], [`edgelist`], and the breadth-/depth-first
//! traversal families. None of them mutate the graph they're built over.
pub mod bfs;
pub mod dfs;
pub mod edgelist;
pub mod incidence;
pub mod vertexlist;

pub use bfs::{edges_breadth_first_search, sourced_edges_breadth_first_search, vertices_breadth_first_search, EdgesBfs, VerticesBfs};
pub use dfs::{edges_depth_first_search, sourced_edges_depth_first_search, vertices_depth_first_search, EdgesDfs, VerticesDfs};
pub use edgelist::edgelist;
pub use incidence::{incidence, neighbors, sourced_incidence};
pub use vertexlist::vertexlist;



/// Three-valued traversal state, shared by the BFS and DFS state machines.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Color {
    White,
    Gray,
    Black,
}



/// # Cancellation request
///
/// ## Description
/// Passed to a traversal view's `cancel` method. `CancelBranch` is one-shot: the view
/// automatically restores `ContinueSearch` once the current vertex has been abandoned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CancelKind {
    ContinueSearch,
    CancelBranch,
    CancelAll,
}
