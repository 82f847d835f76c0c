//! # Incidence and neighbor views
use crate::model::{AdjacencyList, EdgeSource, EdgeTarget, SourcedAdjacencyList, VertexValues};

/// Yield `(target_id, edge)` for every outgoing edge of vertex `id`.
pub fn incidence<G>(g: &G, id: G::VId) -> Box<dyn Iterator<Item = (G::VId, G::Edge)> + '_>
where
    G: AdjacencyList,
{
    Box::new(g.edges(id).map(|edge| (edge.target_id(), edge)))
}

/// Like [`incidence`], additionally projecting each edge through `f`.
pub fn incidence_by<G, F, R>(g: &G, id: G::VId, mut f: F) -> Box<dyn Iterator<Item = (G::VId, G::Edge, R)> + '_>
where
    G: AdjacencyList,
    F: FnMut(&G::Edge) -> R + 'static,
{
    Box::new(g.edges(id).map(move |edge| {
        let projected = f(&edge);
        (edge.target_id(), edge, projected)
    }))
}

/// Like [`incidence`], prepending the edge's own `source_id` (requires a graph whose edge
/// records carry one, see [`SourcedAdjacencyList`]).
pub fn sourced_incidence<G>(g: &G, id: G::VId) -> Box<dyn Iterator<Item = (G::VId, G::VId, G::Edge)> + '_>
where
    G: SourcedAdjacencyList,
    G::Edge: EdgeSource<G::VId>,
{
    Box::new(g.edges(id).map(|edge| (edge.source_id(), edge.target_id(), edge)))
}

/// Yield `(target_id, target_vertex_value)` for every outgoing edge of vertex `id`,
/// dereferencing each target through [`VertexValues::vertex_value`].
pub fn neighbors<G>(g: &G, id: G::VId) -> Box<dyn Iterator<Item = (G::VId, &G::VV)> + '_>
where
    G: VertexValues,
{
    Box::new(g.edges(id).map(move |edge| {
        let target = edge.target_id();
        let value = g.vertex_value(target).expect("edge targets are always valid vertex ids");
        (target, value)
    }))
}

/// Like [`neighbors`], additionally projecting each target vertex value through `f`.
pub fn neighbors_by<G, F, R>(g: &G, id: G::VId, mut f: F) -> Box<dyn Iterator<Item = (G::VId, &G::VV, R)> + '_>
where
    G: VertexValues,
    F: FnMut(&G::VV) -> R + 'static,
{
    Box::new(g.edges(id).map(move |edge| {
        let target = edge.target_id();
        let value = g.vertex_value(target).expect("edge targets are always valid vertex ids");
        (target, value, f(value))
    }))
}
