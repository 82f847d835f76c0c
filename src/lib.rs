//! <h2 id="crabgraph" style="text-align: center; font-variant: small-caps"><a href="#crabgraph">CrabGraph</a></h2>
//!
//! <div style="text-align: center"><b><i>Container-agnostic graph core for Rust</i></b></div>
//!
//! ## Welcome!
//! CrabGraph is a small graph core: a customization-point layer that lets arbitrary
//! adjacency-shaped data be treated as a graph, two reference containers built on top of
//! it ([`containers::csr::CsrGraph`], [`containers::dynamic::DynamicGraph`]), a family of
//! traversal views, and Dijkstra/Kruskal/Prim, all written once against the model so they
//! run unchanged over either container or a user-defined graph type.
//!
//! ## Layout
//! * [`id`] and [`descriptor`] — the vertex identifier trait and the vertex-descriptor
//!   newtype every container and view shares.
//! * [`model`] — the traits (`AdjacencyList`, `IncidenceGraph`, `SourcedAdjacencyList`,
//!   `VertexValues`) a type implements to be usable as a graph.
//! * [`containers`] — [`containers::csr::CsrGraph`] (static, bulk-loaded) and
//!   [`containers::dynamic::DynamicGraph`] (growable, generic over its inner edge
//!   sequence and edge record shape).
//! * [`views`] — `vertexlist`, `incidence`/`sourced_incidence`/`neighbors`, `edgelist`,
//!   and the breadth-/depth-first traversal views, all lazy and non-mutating.
//! * [`algorithms`] — Dijkstra shortest paths, Kruskal and Prim minimum/maximum spanning
//!   trees.
//! * [`errors`] — the three-member `GraphError` surface every fallible operation in this
//!   crate returns.

pub mod algorithms;
pub mod containers;
pub mod descriptor;
pub mod errors;
pub mod id;
pub mod model;
pub mod views;

pub use algorithms::{dijkstra_shortest_paths, kruskal_minimum_spanning_tree, kruskal_minimum_spanning_tree_in_place, prim_minimum_spanning_tree};
pub use containers::{CsrGraph, DynamicGraph};
pub use errors::{GraphError, GraphResult};
pub use id::VertexId;
pub use model::{AdjacencyList, CopyableEdge, CopyableVertex, IncidenceGraph, SourcedAdjacencyList, VertexValues};
