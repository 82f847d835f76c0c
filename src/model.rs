//! # Graph model and customization points
//!
//! ## Description
//! This module defines the traits a type must implement to be treated as a graph by the
//! rest of the crate: [`AdjacencyList`], [`IncidenceGraph`] and [`SourcedAdjacencyList`].
//! Both built-in containers ([`crate::containers::csr::CsrGraph`] and
//! [`crate::containers::dynamic::DynamicGraph`]) implement these traits, and so can any
//! user-defined graph type, which is what lets [`crate::views`] and
//! [`crate::algorithms`] be written once against the model instead of once per
//! container.
//!
//! The source this crate generalizes recognizes "plain-old" nested containers (a vector
//! of integers, a vector of pairs, a vector of structs) as adjacency lists without any
//! user-written glue, via tag-invoked customization-point objects resolved at compile
//! time. Rust has no analogous any-shape-of-inner-range recognition mechanism (no
//! template specialization, no ADL), so here the same intent is expressed the idiomatic
//! Rust way: a trait with methods a type opts into explicitly. A type that doesn't
//! implement the required trait fails to compile wherever it's used as a graph, which is
//! exactly the failure contract the source specifies.
use crate::id::VertexId;



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE ACCESSORS                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Edge target accessor
///
/// ## Description
/// Every edge representation in this crate implements `EdgeTarget`: it is the one
/// property no edge can do without. `CsrGraph`'s edge reference and all four of
/// `DynamicGraph`'s edge record variants implement it.
pub trait EdgeTarget<VId>
where
    VId: VertexId,
{
    fn target_id(&self) -> VId;
}



/// # Edge value accessor
///
/// ## Description
/// Implemented by edge representations that carry a user value `EV`. `CsrGraph` always
/// implements this (with `EV = ()` standing in for "no value", exactly as the rest of
/// this crate uses `()` for absent optional payloads); `DynamicGraph`'s `ValuedEdge` and
/// `SourcedValuedEdge` records implement it, `TargetEdge` and `SourcedTargetEdge` do not.
pub trait EdgeWeight<EV> {
    fn edge_value(&self) -> &EV;
}



/// # Edge source accessor
///
/// ## Description
/// Implemented only by edge representations that redundantly store their own source id.
/// `DynamicGraph`'s `SourcedTargetEdge` and `SourcedValuedEdge` records implement it;
/// `TargetEdge`, `ValuedEdge` and `CsrGraph`'s edge reference do not, because the
/// traversal context (which outgoing-edge row produced the reference) already carries
/// that information for free. Calling `source_id` on an edge handle detached from that
/// context is exactly the case this trait exists for.
pub trait EdgeSource<VId>
where
    VId: VertexId,
{
    fn source_id(&self) -> VId;
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * GRAPH CONCEPTS                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Basic adjacency list
///
/// ## Description
/// The minimal graph concept: a random-access sequence of vertex ids, and for each
/// vertex id an outgoing-edge range whose elements at least implement
/// [`EdgeTarget<Self::VId>`].
///
/// ## Details
/// `find_vertex` returns the vertex id itself rather than an iterator the way the source
/// does, because both built-in containers keep a dense, zero-based vertex range: "the
/// iterator at offset `id`" and "the id `id`" coincide. The method still exists (rather
/// than having callers use raw ids directly) because it is the place that enforces the
/// `0 <= id < vertex_count()` bound and returns `GraphError::OutOfRange` otherwise,
/// matching the source's bounds-checked `find_vertex` contract.
///
/// `edges` yields owned `Self::Edge` values rather than borrows into the container.
/// `CsrGraph` doesn't actually store a contiguous `Edge` per position (it keeps
/// `col_index`/`edge_values` as separate parallel arrays), so there is no
/// single place to borrow an edge from; cloning the value out (`EV: Clone`) at iteration
/// time is the simplest faithful translation, and since views never mutate a graph,
/// nothing downstream ever needed a borrow anyway.
pub trait AdjacencyList {
    type VId: VertexId;
    type Edge: EdgeTarget<Self::VId>;

    /// Number of vertices, `|V|`.
    fn vertex_count(&self) -> usize;

    /// Iterate over all vertex ids, `0..vertex_count()`.
    fn vertices(&self) -> Box<dyn Iterator<Item = Self::VId> + '_>;

    /// Iterate over the outgoing edges of vertex `u`.
    fn edges(&self, u: Self::VId) -> Box<dyn Iterator<Item = Self::Edge> + '_>;

    /// Bounds-checked identity lookup; `Ok(id)` iff `0 <= id < vertex_count()`.
    fn find_vertex(&self, id: Self::VId) -> crate::errors::GraphResult<Self::VId> {
        if id.to_usize() < self.vertex_count() {
            Ok(id)
        } else {
            Err(crate::errors::GraphError::out_of_range(
                "AdjacencyList::find_vertex",
                format!("vertex id {} is out of range for a graph with {} vertices", id, self.vertex_count()),
            ))
        }
    }

    /// Out-degree of vertex `u`. The default walks `edges(u)`; containers that track a
    /// row length directly (CSR) override it for O(1) access instead of O(degree).
    fn degree(&self, u: Self::VId) -> usize {
        self.edges(u).count()
    }
}



/// # Incidence graph
///
/// ## Description
/// An [`AdjacencyList`] that additionally supports looking up a vertex's outgoing edges
/// directly by id, without first dereferencing a vertex reference. For both built-in
/// containers this coincides exactly with `edges(u)` because vertex ids already are the
/// lookup key; the trait exists so algorithms (Dijkstra, Prim) can state the bound they
/// actually need.
pub trait IncidenceGraph: AdjacencyList {
    fn edges_by_id(&self, id: Self::VId) -> crate::errors::GraphResult<Box<dyn Iterator<Item = Self::Edge> + '_>> {
        let u = self.find_vertex(id)?;
        Ok(self.edges(u))
    }
}

impl<G: AdjacencyList> IncidenceGraph for G {}



/// # Vertex value accessor
///
/// ## Description
/// An [`AdjacencyList`] whose vertices carry a value `VV`, looked up by id. Both built-in
/// containers implement this (with `VV = ()` the default, as usual standing in for "no
/// value"); it's a separate trait from `AdjacencyList` itself because not every adjacency
/// list a caller hands to an algorithm needs per-vertex payloads, and [`views::vertexlist`]
/// and [`views::neighbors`] are the only things that require it.
///
/// [`views::vertexlist`]: crate::views::vertexlist::vertexlist
/// [`views::neighbors`]: crate::views::incidence::neighbors
pub trait VertexValues: AdjacencyList {
    type VV;

    fn vertex_value(&self, id: Self::VId) -> crate::errors::GraphResult<&Self::VV>;
}



/// # Sourced adjacency list
///
/// ## Description
/// An [`AdjacencyList`] whose edge representation also implements [`EdgeSource`], i.e.
/// whose edges redundantly carry their own source id. Implemented by `DynamicGraph` only
/// when instantiated with one of the two `Sourced*` edge records; `CsrGraph` never
/// implements it, since it doesn't store per-edge source ids.
pub trait SourcedAdjacencyList: AdjacencyList
where
    Self::Edge: EdgeSource<Self::VId>,
{
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * COPYABLE EDGE / VERTEX                                                            *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Copyable edge
///
/// ## Description
/// A plain value shape `{source_id, target_id, value}`, used as the lingua franca for
/// bulk loading both containers and as the item type [`crate::views::edgelist`] yields.
/// It is a value, not a reference into any graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CopyableEdge<VId, EV> {
    pub source_id: VId,
    pub target_id: VId,
    pub value: EV,
}

impl<VId, EV> CopyableEdge<VId, EV> {
    pub fn new(source_id: VId, target_id: VId, value: EV) -> Self {
        CopyableEdge { source_id, target_id, value }
    }
}



/// # Copyable vertex
///
/// ## Description
/// A plain value shape `{id, value}`, used as the lingua franca for `load_vertices` on
/// both containers. It is a value, not a reference into any graph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CopyableVertex<VId, VV> {
    pub id: VId,
    pub value: VV,
}

impl<VId, VV> CopyableVertex<VId, VV> {
    pub fn new(id: VId, value: VV) -> Self {
        CopyableVertex { id, value }
    }
}
