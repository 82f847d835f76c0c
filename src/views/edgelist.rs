//! # Edge list view
use crate::model::{AdjacencyList, EdgeTarget};

/// Flatten every edge of `g` into `(source_id, target_id, edge)` triples, in vertex-id,
/// then per-row order.
pub fn edgelist<G>(g: &G) -> Box<dyn Iterator<Item = (G::VId, G::VId, G::Edge)> + '_>
where
    G: AdjacencyList,
{
    Box::new(g.vertices().flat_map(move |source_id| g.edges(source_id).map(move |edge| (source_id, edge.target_id(), edge))))
}

/// Like [`edgelist`], restricted to source ids in `[first_id, last_id)`.
pub fn edgelist_range<G>(g: &G, first_id: usize, last_id: usize) -> Box<dyn Iterator<Item = (G::VId, G::VId, G::Edge)> + '_>
where
    G: AdjacencyList,
{
    Box::new(
        crate::descriptor::descriptor_subrange_view(first_id, last_id.min(g.vertex_count()))
            .flat_map(move |source_id| g.edges(source_id).map(move |edge| (source_id, edge.target_id(), edge))),
    )
}

/// Like [`edgelist`], additionally projecting each edge through `f`.
pub fn edgelist_by<G, F, R>(g: &G, f: F) -> Box<dyn Iterator<Item = (G::VId, G::VId, G::Edge, R)> + '_>
where
    G: AdjacencyList,
    F: FnMut(&G::Edge) -> R + 'static,
{
    // `flat_map`'s outer closure is `FnMut` and is re-entered once per vertex, so it
    // can't own `f` outright (each re-entry would need to move it again); share it
    // through a `Rc<RefCell<_>>` instead, cloning the handle per row and borrowing it
    // mutably from the inner closure.
    let f = std::rc::Rc::new(std::cell::RefCell::new(f));
    Box::new(g.vertices().flat_map(move |source_id| {
        let f = f.clone();
        g.edges(source_id).map(move |edge| {
            let projected = (f.borrow_mut())(&edge);
            (source_id, edge.target_id(), edge, projected)
        })
    }))
}
