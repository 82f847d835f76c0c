//! # Vertex list view
use crate::model::VertexValues;

/// Yield `(id, vertex_value)` for every vertex of `g`, in id order.
pub fn vertexlist<G>(g: &G) -> Box<dyn Iterator<Item = (G::VId, &G::VV)> + '_>
where
    G: VertexValues,
{
    Box::new(g.vertices().map(move |id| {
        let value = g.vertex_value(id).expect("vertices() only yields ids within [0, vertex_count())");
        (id, value)
    }))
}

/// Like [`vertexlist`], additionally projecting each vertex value through `f`.
pub fn vertexlist_by<G, F, R>(g: &G, mut f: F) -> Box<dyn Iterator<Item = (G::VId, &G::VV, R)> + '_>
where
    G: VertexValues,
    F: FnMut(&G::VV) -> R + 'static,
{
    Box::new(g.vertices().map(move |id| {
        let value = g.vertex_value(id).expect("vertices() only yields ids within [0, vertex_count())");
        (id, value, f(value))
    }))
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::csr::CsrGraph;
    use crate::model::CopyableVertex;

    #[test]
    fn yields_every_vertex_with_its_value() {
        let mut g: CsrGraph<u32, (), &'static str> = CsrGraph::new();
        g.load_edges(std::iter::empty()).unwrap();
        g.load_vertices(vec![CopyableVertex::new(0u32, "frankfurt"), CopyableVertex::new(1, "mannheim")]);
        let collected: Vec<_> = vertexlist(&g).map(|(id, v)| (id, *v)).collect();
        assert_eq!(collected, vec![(0, "frankfurt"), (1, "mannheim")]);
    }

    #[test]
    fn projection_variant_applies_closure() {
        let mut g: CsrGraph<u32, (), i32> = CsrGraph::new();
        g.load_edges(std::iter::empty()).unwrap();
        g.load_vertices(vec![CopyableVertex::new(0u32, 10), CopyableVertex::new(1, 20)]);
        let doubled: Vec<i32> = vertexlist_by(&g, |v| v * 2).map(|(_, _, d)| d).collect();
        assert_eq!(doubled, vec![20, 40]);
    }
}
