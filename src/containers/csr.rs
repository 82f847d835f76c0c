//! # Compressed Sparse Row container
//!
//! ## Description
//! [`CsrGraph`] stores its adjacency structure as three parallel arrays — `row_index`,
//! `col_index`, `edge_values` — optimized for a
//! static graph that is bulk-loaded once and then only traversed.
use crate::errors::{GraphError, GraphResult};
use crate::id::VertexId;
use crate::model::{AdjacencyList, CopyableEdge, CopyableVertex, EdgeTarget, EdgeWeight, VertexValues};



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * EDGE REPRESENTATION                                                              *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// An edge as handed out by [`CsrGraph::edges`]: a target id paired with a clone of the
/// edge value stored alongside it in `edge_values`. `EV = ()` makes the clone free.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CsrEdge<VId, EV> {
    pub target: VId,
    pub value: EV,
}

// CsrEdge::EdgeTarget
impl<VId, EV> EdgeTarget<VId> for CsrEdge<VId, EV>
where
    VId: VertexId,
{
    #[inline]
    fn target_id(&self) -> VId {
        self.target
    }
}

// CsrEdge::EdgeWeight
impl<VId, EV> EdgeWeight<EV> for CsrEdge<VId, EV> {
    #[inline]
    fn edge_value(&self) -> &EV {
        &self.value
    }
}



// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *
// * CONTAINER                                                                        *
// * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * * *



/// # Compressed Sparse Row graph
///
/// ## Description
/// A static, bulk-loaded adjacency list. `load_edges` can be called at most once on a
/// freshly-constructed (empty) graph; `load_vertices` can be called any number of times,
/// before or after, and assigns vertex values by id, growing the vertex set if a higher
/// id is seen.
#[derive(Clone, Debug)]
pub struct CsrGraph<VId, EV = (), VV = (), GV = ()>
where
    VId: VertexId,
{
    row_index: Vec<usize>,
    col_index: Vec<VId>,
    edge_values: Vec<EV>,
    vertex_values: Vec<VV>,
    graph_value: GV,
    edges_loaded: bool,
}

// CsrGraph::CsrGraph
impl<VId, EV, VV, GV> CsrGraph<VId, EV, VV, GV>
where
    VId: VertexId,
    VV: Default,
    GV: Default,
{
    /// An empty graph: `|V| == 0`, `|E| == 0`.
    pub fn new() -> Self {
        CsrGraph {
            row_index: vec![0],
            col_index: Vec::new(),
            edge_values: Vec::new(),
            vertex_values: Vec::new(),
            graph_value: GV::default(),
            edges_loaded: false,
        }
    }

    /// Build a graph from a forward range of edges, sorted by `source_id`.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = CopyableEdge<VId, EV>>,
    {
        let mut g = Self::new();
        g.load_edges(edges)?;
        Ok(g)
    }

    /// Build a graph from a forward range of edges and a range of vertex values.
    pub fn from_edges_and_vertices<I, J>(edges: I, vertices: J) -> GraphResult<Self>
    where
        I: IntoIterator<Item = CopyableEdge<VId, EV>>,
        J: IntoIterator<Item = CopyableVertex<VId, VV>>,
    {
        let mut g = Self::new();
        g.load_edges(edges)?;
        g.load_vertices(vertices);
        Ok(g)
    }

    /// Number of edges, `|E|`.
    pub fn edge_count(&self) -> usize {
        self.col_index.len()
    }

    pub fn graph_value(&self) -> &GV {
        &self.graph_value
    }

    pub fn graph_value_mut(&mut self) -> &mut GV {
        &mut self.graph_value
    }

    pub fn vertex_value(&self, id: VId) -> GraphResult<&VV> {
        let idx = self.find_vertex(id)?.to_usize();
        Ok(&self.vertex_values[idx])
    }

    /// Load the edge set. May be called exactly once on an empty graph; edges must
    /// arrive in non-decreasing `source_id` order, and each row's `target_id`s must be
    /// strictly increasing (no duplicate columns on a row).
    pub fn load_edges<I>(&mut self, edges: I) -> GraphResult<()>
    where
        I: IntoIterator<Item = CopyableEdge<VId, EV>>,
    {
        const FUNCTION_PATH: &str = "CsrGraph::load_edges";
        if self.edges_loaded {
            return Err(GraphError::load_error(FUNCTION_PATH, "graph not empty"));
        }
        self.edges_loaded = true;

        let mut col_index: Vec<VId> = Vec::new();
        let mut edge_values: Vec<EV> = Vec::new();
        // row_starts[src] == the column offset where row `src`'s edges begin. Rows with
        // no edges of their own get backfilled with the next row's start, below.
        let mut row_starts: Vec<usize> = Vec::new();
        let mut current_source: Option<usize> = None;
        let mut last_target_on_row: Option<usize> = None;
        let mut max_id: usize = 0;
        let mut any_edge = false;

        for edge in edges {
            any_edge = true;
            let source = edge.source_id.to_usize();
            let target = edge.target_id.to_usize();
            max_id = max_id.max(source).max(target);

            match current_source {
                Some(cur) if source < cur => {
                    return Err(GraphError::load_error(FUNCTION_PATH, "rows not ordered"));
                }
                Some(cur) if source > cur => {
                    last_target_on_row = None;
                }
                _ => {}
            }

            if row_starts.len() <= source {
                row_starts.resize(source + 1, col_index.len());
            }

            if let Some(last) = last_target_on_row {
                if target < last {
                    return Err(GraphError::load_error(FUNCTION_PATH, "columns not ordered on a row"));
                }
                if target == last {
                    return Err(GraphError::load_error(FUNCTION_PATH, "duplicate column on a row"));
                }
            }

            last_target_on_row = Some(target);
            current_source = Some(source);
            col_index.push(edge.target_id);
            edge_values.push(edge.value);
        }

        let vertex_count = if any_edge {
            (max_id + 1).max(self.vertex_values.len())
        } else {
            self.vertex_values.len()
        };

        let mut row_index = Vec::with_capacity(vertex_count + 1);
        for i in 0..vertex_count {
            row_index.push(*row_starts.get(i).unwrap_or(&col_index.len()));
        }
        row_index.push(col_index.len());

        self.row_index = row_index;
        self.col_index = col_index;
        self.edge_values = edge_values;
        while self.vertex_values.len() < vertex_count {
            self.vertex_values.push(VV::default());
        }
        Ok(())
    }

    /// Assign vertex values by id, growing the vertex set (and, transparently, the row
    /// index) if a higher id is seen. Can be called before or after `load_edges`, and
    /// any number of times; later entries for the same id overwrite earlier ones.
    pub fn load_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = CopyableVertex<VId, VV>>,
    {
        for v in vertices {
            let idx = v.id.to_usize();
            if self.vertex_values.len() <= idx {
                self.vertex_values.resize_with(idx + 1, VV::default);
            }
            self.vertex_values[idx] = v.value;
        }
        // Keep the row index in lockstep with however far load_vertices just grew the
        // vertex set, so vertex_count() stays a single source of truth.
        let sentinel = *self.row_index.last().unwrap_or(&0);
        while self.row_index.len() - 1 < self.vertex_values.len() {
            self.row_index.push(sentinel);
        }
    }
}

impl<VId, EV, VV, GV> Default for CsrGraph<VId, EV, VV, GV>
where
    VId: VertexId,
    VV: Default,
    GV: Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Array-literal construction, mirroring the brace-initializer ergonomics the source
/// corpus leans on for small fixture graphs (`G g = {{0,1,85.0}, ...};`). Edges must
/// already satisfy the CSR ordering contract; violating it panics rather than returning
/// a `Result`, which is acceptable for a literal spelled out at the call site.
impl<VId, EV, VV, GV, const N: usize> From<[(VId, VId, EV); N]> for CsrGraph<VId, EV, VV, GV>
where
    VId: VertexId,
    VV: Default,
    GV: Default,
{
    fn from(edges: [(VId, VId, EV); N]) -> Self {
        let mut g = CsrGraph::new();
        g.load_edges(edges.into_iter().map(|(source_id, target_id, value)| CopyableEdge { source_id, target_id, value }))
            .expect("array-literal edges must already be sorted by source_id with no duplicate columns per row");
        g
    }
}

// CsrGraph::AdjacencyList
impl<VId, EV, VV, GV> AdjacencyList for CsrGraph<VId, EV, VV, GV>
where
    VId: VertexId,
    EV: Clone,
{
    type VId = VId;
    type Edge = CsrEdge<VId, EV>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.row_index.len() - 1
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = VId> + '_> {
        Box::new(crate::descriptor::descriptor_view(self.vertex_count()))
    }

    fn edges(&self, u: VId) -> Box<dyn Iterator<Item = CsrEdge<VId, EV>> + '_> {
        let idx = u.to_usize();
        let start = self.row_index[idx];
        let end = self.row_index[idx + 1];
        Box::new(
            self.col_index[start..end]
                .iter()
                .zip(self.edge_values[start..end].iter())
                .map(|(target, value)| CsrEdge { target: *target, value: value.clone() }),
        )
    }

    #[inline]
    fn degree(&self, u: VId) -> usize {
        let idx = u.to_usize();
        self.row_index[idx + 1] - self.row_index[idx]
    }
}

// CsrGraph::VertexValues
impl<VId, EV, VV, GV> VertexValues for CsrGraph<VId, EV, VV, GV>
where
    VId: VertexId,
    EV: Clone,
{
    type VV = VV;

    fn vertex_value(&self, id: VId) -> GraphResult<&VV> {
        let idx = self.find_vertex(id)?.to_usize();
        Ok(&self.vertex_values[idx])
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    fn edge(s: u32, t: u32, v: f64) -> CopyableEdge<u32, f64> {
        CopyableEdge::new(s, t, v)
    }

    #[test]
    fn empty_graph_has_no_vertices() {
        let g: CsrGraph<u32, f64> = CsrGraph::new();
        assert_eq!(g.vertex_count(), 0);
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn loads_germany_routes() {
        let edges = vec![
            edge(0, 1, 85.0), edge(0, 4, 217.0), edge(0, 6, 173.0), edge(1, 2, 80.0),
            edge(2, 3, 250.0), edge(3, 8, 84.0), edge(4, 5, 103.0), edge(4, 7, 186.0),
            edge(5, 8, 167.0), edge(5, 9, 183.0), edge(6, 8, 502.0),
        ];
        let mut g: CsrGraph<u32, f64> = CsrGraph::from_edges(edges).unwrap();
        g.load_vertices((0..10u32).map(|id| CopyableVertex::new(id, ())));
        assert_eq!(g.vertex_count(), 10);
        let edge_count: usize = g.vertices().map(|u| g.edges(u).count()).sum();
        assert_eq!(edge_count, 11);
        let total: f64 = g.vertices().flat_map(|u| g.edges(u).collect::<Vec<_>>()).map(|e| e.value).sum();
        assert_eq!(total, 2030.0);
    }

    #[test]
    fn rejects_unordered_rows() {
        let mut g: CsrGraph<u32, f64> = CsrGraph::new();
        let err = g.load_edges(vec![edge(1, 0, 1.0), edge(0, 1, 1.0)]).unwrap_err();
        assert!(matches!(err, GraphError::LoadError { .. }));
    }

    #[test]
    fn rejects_duplicate_column_on_a_row() {
        let mut g: CsrGraph<u32, f64> = CsrGraph::new();
        let err = g.load_edges(vec![edge(0, 1, 1.0), edge(0, 1, 2.0)]).unwrap_err();
        assert!(matches!(err, GraphError::LoadError { .. }));
    }

    #[test]
    fn rejects_unordered_columns_on_a_row() {
        let mut g: CsrGraph<u32, f64> = CsrGraph::new();
        let err = g.load_edges(vec![edge(0, 2, 1.0), edge(0, 1, 2.0)]).unwrap_err();
        assert!(matches!(err, GraphError::LoadError { .. }));
    }

    #[test]
    fn rejects_second_load() {
        let mut g: CsrGraph<u32, f64> = CsrGraph::new();
        g.load_edges(vec![edge(0, 1, 1.0)]).unwrap();
        let err = g.load_edges(vec![edge(0, 1, 1.0)]).unwrap_err();
        assert!(matches!(err, GraphError::LoadError { .. }));
    }

    #[test]
    fn gap_rows_are_empty() {
        let mut g: CsrGraph<u32, f64> = CsrGraph::new();
        // vertex 1 has no outgoing edges
        g.load_edges(vec![edge(0, 2, 1.0), edge(2, 0, 1.0)]).unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edges(1).count(), 0);
    }

    #[test]
    fn load_vertices_grows_past_load_edges() {
        let mut g: CsrGraph<u32, f64, &'static str> = CsrGraph::new();
        g.load_edges(vec![edge(0, 1, 1.0)]).unwrap();
        g.load_vertices(vec![CopyableVertex::new(5u32, "far")]);
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edges(5).count(), 0);
        assert_eq!(*g.vertex_value(5).unwrap(), "far");
    }
}
