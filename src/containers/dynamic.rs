//! # Dynamic adjacency-list container
//!
//! ## Description
//! [`DynamicGraph`] is a mutable, growable adjacency list: an outer `Vec` of per-vertex
//! records, each holding an inner edge sequence whose container type is chosen at the
//! type level via the `S` parameter ([`EdgeSequence`] is implemented for `Vec`,
//! `VecDeque`, `LinkedList` and this module's own [`ForwardList`]). The edge record type
//! `Rec` is likewise chosen at the type level, from four variants covering every
//! combination of "carries a value" and "carries its own source id" — four distinct,
//! monomorphized structs rather than one tagged enum, so no edge pays for a
//! discriminant it never uses.
use std::collections::{LinkedList, VecDeque};
use std::marker::PhantomData;

use crate::errors::{GraphError, GraphResult};
use crate::id::VertexId;
use crate::model::{AdjacencyList, CopyableEdge, CopyableVertex, EdgeSource, EdgeTarget, EdgeWeight, SourcedAdjacencyList, VertexValues};



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE RECORD VARIANTS                                                             *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// Builds an edge record from the pieces a loader has on hand. Each of the four record
/// variants below implements this once, for exactly the `EV` its shape can carry.
pub trait EdgeRecord<VId, EV>: EdgeTarget<VId>
where
    VId: VertexId,
{
    fn from_parts(source_id: VId, target_id: VId, value: EV) -> Self;
}

/// Target id only. The cheapest record, for unweighted graphs that never need an edge's
/// source outside its own row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TargetEdge<VId> {
    pub target: VId,
}

impl<VId: VertexId> EdgeTarget<VId> for TargetEdge<VId> {
    #[inline]
    fn target_id(&self) -> VId {
        self.target
    }
}

impl<VId: VertexId> EdgeRecord<VId, ()> for TargetEdge<VId> {
    fn from_parts(_source_id: VId, target_id: VId, _value: ()) -> Self {
        TargetEdge { target: target_id }
    }
}



/// Target id plus a value, e.g. an edge weight.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ValuedEdge<VId, EV> {
    pub target: VId,
    pub value: EV,
}

impl<VId: VertexId, EV> EdgeTarget<VId> for ValuedEdge<VId, EV> {
    #[inline]
    fn target_id(&self) -> VId {
        self.target
    }
}

impl<VId, EV> EdgeWeight<EV> for ValuedEdge<VId, EV> {
    #[inline]
    fn edge_value(&self) -> &EV {
        &self.value
    }
}

impl<VId: VertexId, EV> EdgeRecord<VId, EV> for ValuedEdge<VId, EV> {
    fn from_parts(_source_id: VId, target_id: VId, value: EV) -> Self {
        ValuedEdge { target: target_id, value }
    }
}



/// Target id plus a redundant copy of the source id, for edges that must be usable
/// outside the traversal context that found them (e.g. collected into an `edgelist`).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcedTargetEdge<VId> {
    pub source: VId,
    pub target: VId,
}

impl<VId: VertexId> EdgeTarget<VId> for SourcedTargetEdge<VId> {
    #[inline]
    fn target_id(&self) -> VId {
        self.target
    }
}

impl<VId: VertexId> EdgeSource<VId> for SourcedTargetEdge<VId> {
    #[inline]
    fn source_id(&self) -> VId {
        self.source
    }
}

impl<VId: VertexId> EdgeRecord<VId, ()> for SourcedTargetEdge<VId> {
    fn from_parts(source_id: VId, target_id: VId, _value: ()) -> Self {
        SourcedTargetEdge { source: source_id, target: target_id }
    }
}



/// Target id, value, and a redundant copy of the source id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourcedValuedEdge<VId, EV> {
    pub source: VId,
    pub target: VId,
    pub value: EV,
}

impl<VId: VertexId, EV> EdgeTarget<VId> for SourcedValuedEdge<VId, EV> {
    #[inline]
    fn target_id(&self) -> VId {
        self.target
    }
}

impl<VId, EV> EdgeWeight<EV> for SourcedValuedEdge<VId, EV> {
    #[inline]
    fn edge_value(&self) -> &EV {
        &self.value
    }
}

impl<VId: VertexId, EV> EdgeSource<VId> for SourcedValuedEdge<VId, EV> {
    #[inline]
    fn source_id(&self) -> VId {
        self.source
    }
}

impl<VId: VertexId, EV> EdgeRecord<VId, EV> for SourcedValuedEdge<VId, EV> {
    fn from_parts(source_id: VId, target_id: VId, value: EV) -> Self {
        SourcedValuedEdge { source: source_id, target: target_id, value }
    }
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE SEQUENCE                                                                    *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// A vertex's choice of inner container for its outgoing edges.
pub trait EdgeSequence<Rec>: Default {
    fn push(&mut self, record: Rec);
    fn iter(&self) -> Box<dyn Iterator<Item = &Rec> + '_>;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<Rec> EdgeSequence<Rec> for Vec<Rec> {
    fn push(&mut self, record: Rec) {
        Vec::push(self, record);
    }
    fn iter(&self) -> Box<dyn Iterator<Item = &Rec> + '_> {
        Box::new(<[Rec]>::iter(self))
    }
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<Rec> EdgeSequence<Rec> for VecDeque<Rec> {
    fn push(&mut self, record: Rec) {
        VecDeque::push_back(self, record);
    }
    fn iter(&self) -> Box<dyn Iterator<Item = &Rec> + '_> {
        Box::new(VecDeque::iter(self))
    }
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<Rec> EdgeSequence<Rec> for LinkedList<Rec> {
    fn push(&mut self, record: Rec) {
        LinkedList::push_back(self, record);
    }
    fn iter(&self) -> Box<dyn Iterator<Item = &Rec> + '_> {
        Box::new(LinkedList::iter(self))
    }
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}



/// # Singly-linked edge sequence
///
/// ## Description
/// A hand-rolled forward list, the one inner container the standard library doesn't
/// already provide. It has no tail pointer, so insertion happens at the front; its
/// [`EdgeSequence::push`] implementation therefore builds a vertex's edge list in
/// reverse arrival order, which is fine for every view and algorithm in this crate (none
/// of them depend on incidence order).
pub struct ForwardList<Rec> {
    head: Option<Box<ForwardListNode<Rec>>>,
    len: usize,
}

struct ForwardListNode<Rec> {
    value: Rec,
    next: Option<Box<ForwardListNode<Rec>>>,
}

impl<Rec> Default for ForwardList<Rec> {
    fn default() -> Self {
        ForwardList { head: None, len: 0 }
    }
}

impl<Rec> ForwardList<Rec> {
    pub fn push_front(&mut self, value: Rec) {
        let new_node = Box::new(ForwardListNode { value, next: self.head.take() });
        self.head = Some(new_node);
        self.len += 1;
    }

    pub fn iter(&self) -> ForwardListIter<'_, Rec> {
        ForwardListIter { next: self.head.as_deref() }
    }
}

pub struct ForwardListIter<'a, Rec> {
    next: Option<&'a ForwardListNode<Rec>>,
}

impl<'a, Rec> Iterator for ForwardListIter<'a, Rec> {
    type Item = &'a Rec;
    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.value
        })
    }
}

impl<Rec> EdgeSequence<Rec> for ForwardList<Rec> {
    fn push(&mut self, record: Rec) {
        self.push_front(record);
    }
    fn iter(&self) -> Box<dyn Iterator<Item = &Rec> + '_> {
        Box::new(ForwardList::iter(self))
    }
    fn len(&self) -> usize {
        self.len
    }
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CONTAINER                                                                        *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



struct VertexRecord<S, VV> {
    edges: S,
    value: VV,
}

impl<S: Default, VV: Default> Default for VertexRecord<S, VV> {
    fn default() -> Self {
        VertexRecord { edges: S::default(), value: VV::default() }
    }
}



/// # Dynamic graph
///
/// ## Description
/// An adjacency list that grows as edges and vertices are loaded into it. `S` selects the
/// per-vertex edge container (default `Vec<Rec>`); `Rec` selects the edge record shape.
/// Unlike [`crate::containers::csr::CsrGraph`], edges may be loaded in any order and
/// `load_edges`/`add_edge` may be called repeatedly.
pub struct DynamicGraph<VId, Rec, S = Vec<Rec>, VV = (), GV = ()>
where
    VId: VertexId,
    S: EdgeSequence<Rec>,
{
    vertices: Vec<VertexRecord<S, VV>>,
    graph_value: GV,
    /// Set by [`DynamicGraph::resize_vertices`]; once `true`, loading an edge or vertex
    /// beyond the current vertex count fails instead of silently growing the graph.
    pinned: bool,
    _marker: PhantomData<(VId, Rec)>,
}

impl<VId, Rec, S, VV, GV> DynamicGraph<VId, Rec, S, VV, GV>
where
    VId: VertexId,
    S: EdgeSequence<Rec>,
    VV: Default,
    GV: Default,
{
    pub fn new() -> Self {
        DynamicGraph { vertices: Vec::new(), graph_value: GV::default(), pinned: false, _marker: PhantomData }
    }

    pub fn from_edges<I, EV>(edges: I) -> GraphResult<Self>
    where
        Rec: EdgeRecord<VId, EV>,
        I: IntoIterator<Item = CopyableEdge<VId, EV>>,
    {
        let mut g = Self::new();
        g.load_edges(edges)?;
        Ok(g)
    }

    pub fn graph_value(&self) -> &GV {
        &self.graph_value
    }

    pub fn graph_value_mut(&mut self) -> &mut GV {
        &mut self.graph_value
    }

    pub fn vertex_value(&self, id: VId) -> GraphResult<&VV> {
        let idx = self.find_vertex_index(id)?;
        Ok(&self.vertices[idx].value)
    }

    fn find_vertex_index(&self, id: VId) -> GraphResult<usize> {
        let idx = id.to_usize();
        if idx < self.vertices.len() {
            Ok(idx)
        } else {
            Err(GraphError::out_of_range(
                "DynamicGraph::find_vertex_index",
                format!("vertex id {} is out of range for a graph with {} vertices", id, self.vertices.len()),
            ))
        }
    }

    fn ensure_vertex_count(&mut self, n: usize) {
        while self.vertices.len() < n {
            self.vertices.push(VertexRecord::default());
        }
    }

    /// Reserve capacity for at least `additional` more vertices, without changing
    /// `vertex_count()` or pinning the graph.
    pub fn reserve(&mut self, additional: usize) {
        self.vertices.reserve(additional);
    }

    /// Fix the vertex count at exactly `vertex_count`, truncating or padding with default
    /// vertex values as needed, and pin it: subsequent edges or vertex ids outside
    /// `0..vertex_count` are rejected instead of growing the graph.
    pub fn resize_vertices(&mut self, vertex_count: usize) {
        self.vertices.resize_with(vertex_count, VertexRecord::default);
        self.pinned = true;
    }

    /// Load edges in any order. Grows the vertex set to cover every id seen, unless the
    /// graph has been pinned by [`DynamicGraph::resize_vertices`], in which case an edge
    /// referencing an id outside the pinned range fails with `GraphError::BadEdge`.
    pub fn load_edges<I, EV>(&mut self, edges: I) -> GraphResult<()>
    where
        Rec: EdgeRecord<VId, EV>,
        I: IntoIterator<Item = CopyableEdge<VId, EV>>,
    {
        const FUNCTION_PATH: &str = "DynamicGraph::load_edges";
        for edge in edges {
            let source_idx = edge.source_id.to_usize();
            let target_idx = edge.target_id.to_usize();
            let needed = source_idx.max(target_idx) + 1;
            if self.pinned && needed > self.vertices.len() {
                return Err(GraphError::bad_edge(
                    FUNCTION_PATH,
                    format!("edge ({}, {}) exceeds the pinned vertex count {}", edge.source_id, edge.target_id, self.vertices.len()),
                ));
            }
            self.ensure_vertex_count(needed);
            let record = Rec::from_parts(edge.source_id, edge.target_id, edge.value);
            self.vertices[source_idx].edges.push(record);
        }
        Ok(())
    }

    /// Load a single edge; see [`DynamicGraph::load_edges`].
    pub fn add_edge<EV>(&mut self, source_id: VId, target_id: VId, value: EV) -> GraphResult<()>
    where
        Rec: EdgeRecord<VId, EV>,
    {
        self.load_edges(std::iter::once(CopyableEdge::new(source_id, target_id, value)))
    }

    /// Assign vertex values by id, growing the vertex set unless pinned (see
    /// [`DynamicGraph::resize_vertices`]), in which case an out-of-range id fails.
    pub fn load_vertices<I>(&mut self, vertices: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = CopyableVertex<VId, VV>>,
    {
        const FUNCTION_PATH: &str = "DynamicGraph::load_vertices";
        for v in vertices {
            let idx = v.id.to_usize();
            if self.pinned && idx >= self.vertices.len() {
                return Err(GraphError::out_of_range(
                    FUNCTION_PATH,
                    format!("vertex id {} exceeds the pinned vertex count {}", v.id, self.vertices.len()),
                ));
            }
            self.ensure_vertex_count(idx + 1);
            self.vertices[idx].value = v.value;
        }
        Ok(())
    }
}

impl<VId, Rec, S, VV, GV> Default for DynamicGraph<VId, Rec, S, VV, GV>
where
    VId: VertexId,
    S: EdgeSequence<Rec>,
    VV: Default,
    GV: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

// DynamicGraph::AdjacencyList
impl<VId, Rec, S, VV, GV> AdjacencyList for DynamicGraph<VId, Rec, S, VV, GV>
where
    VId: VertexId,
    Rec: Clone + EdgeTarget<VId>,
    S: EdgeSequence<Rec>,
{
    type VId = VId;
    type Edge = Rec;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VId> + '_> {
        Box::new(crate::descriptor::descriptor_view(self.vertex_count()))
    }

    fn edges(&self, u: VId) -> Box<dyn Iterator<Item = Rec> + '_> {
        Box::new(self.vertices[u.to_usize()].edges.iter().cloned())
    }

    #[inline]
    fn degree(&self, u: VId) -> usize {
        self.vertices[u.to_usize()].edges.len()
    }
}

// DynamicGraph::VertexValues
impl<VId, Rec, S, VV, GV> VertexValues for DynamicGraph<VId, Rec, S, VV, GV>
where
    VId: VertexId,
    Rec: Clone + EdgeTarget<VId>,
    S: EdgeSequence<Rec>,
{
    type VV = VV;

    fn vertex_value(&self, id: VId) -> GraphResult<&VV> {
        let idx = self.find_vertex_index(id)?;
        Ok(&self.vertices[idx].value)
    }
}

/// `DynamicGraph` is a `SourcedAdjacencyList` exactly when instantiated with one of the
/// two `Sourced*` edge records, never for `TargetEdge`/`ValuedEdge`.
impl<VId, Rec, S, VV, GV> SourcedAdjacencyList for DynamicGraph<VId, Rec, S, VV, GV>
where
    VId: VertexId,
    Rec: Clone + EdgeTarget<VId> + EdgeSource<VId>,
    S: EdgeSequence<Rec>,
{
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AdjacencyList;

    fn edge(s: u32, t: u32, v: f64) -> CopyableEdge<u32, f64> {
        CopyableEdge::new(s, t, v)
    }

    #[test]
    fn grows_to_cover_out_of_order_edges() {
        let mut g: DynamicGraph<u32, ValuedEdge<u32, f64>> = DynamicGraph::new();
        g.load_edges(vec![edge(3, 1, 1.0), edge(0, 3, 2.0)]).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edges(3).count(), 1);
        assert_eq!(g.edges(0).count(), 1);
        assert_eq!(g.edges(1).count(), 0);
    }

    #[test]
    fn pinned_graph_rejects_out_of_range_edges() {
        let mut g: DynamicGraph<u32, ValuedEdge<u32, f64>> = DynamicGraph::new();
        g.resize_vertices(3);
        let err = g.add_edge(0, 5, 1.0).unwrap_err();
        assert!(matches!(err, GraphError::BadEdge { .. }));
        assert_eq!(g.vertex_count(), 3);
    }

    #[test]
    fn sourced_records_expose_source_id() {
        let mut g: DynamicGraph<u32, SourcedValuedEdge<u32, f64>> = DynamicGraph::new();
        g.add_edge(0, 1, 85.0).unwrap();
        let e = g.edges(0).next().unwrap();
        assert_eq!(e.source_id(), 0);
        assert_eq!(e.target_id(), 1);
        assert_eq!(*e.edge_value(), 85.0);
    }

    #[test]
    fn unweighted_target_only_records_carry_no_value() {
        let mut g: DynamicGraph<u32, TargetEdge<u32>> = DynamicGraph::new();
        g.add_edge(0, 1, ()).unwrap();
        assert_eq!(g.edges(0).next().unwrap().target_id(), 1);
    }

    #[test]
    fn forward_list_is_lifo_but_complete() {
        let mut g: DynamicGraph<u32, ValuedEdge<u32, f64>, ForwardList<ValuedEdge<u32, f64>>> = DynamicGraph::new();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 2.0).unwrap();
        let targets: Vec<u32> = g.edges(0).map(|e| e.target).collect();
        assert_eq!(targets, vec![2, 1]);
    }

    #[test]
    fn vec_deque_backed_graph_preserves_insertion_order() {
        let mut g: DynamicGraph<u32, ValuedEdge<u32, f64>, VecDeque<ValuedEdge<u32, f64>>> = DynamicGraph::new();
        g.add_edge(0, 1, 1.0).unwrap();
        g.add_edge(0, 2, 2.0).unwrap();
        let targets: Vec<u32> = g.edges(0).map(|e| e.target).collect();
        assert_eq!(targets, vec![1, 2]);
    }

    #[test]
    fn load_vertices_assigns_values_by_id() {
        let mut g: DynamicGraph<u32, ValuedEdge<u32, f64>, Vec<ValuedEdge<u32, f64>>, &'static str> = DynamicGraph::new();
        g.load_vertices(vec![CopyableVertex::new(2u32, "berlin")]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(*g.vertex_value(2).unwrap(), "berlin");
        assert_eq!(*g.vertex_value(0).unwrap(), "");
    }
}
