//! # Depth-first traversal views
use crate::id::VertexId;
use crate::model::{AdjacencyList, EdgeSource, EdgeTarget};
use crate::views::{CancelKind, Color};

struct DfsCore<'g, G: AdjacencyList> {
    graph: &'g G,
    color: Vec<Color>,
    stack: Vec<G::VId>,
    cursor: Option<Box<dyn Iterator<Item = G::Edge> + 'g>>,
    cancel_kind: CancelKind,
}

impl<'g, G: AdjacencyList> DfsCore<'g, G> {
    fn new(graph: &'g G, seeds: impl IntoIterator<Item = G::VId>) -> Self {
        let mut color = vec![Color::White; graph.vertex_count()];
        let mut stack = Vec::new();
        // Seeds are pushed in reverse so the first given seed ends up on top and is
        // therefore explored first, matching BFS's "enqueues all given seeds in order".
        let valid_seeds: Vec<G::VId> = seeds
            .into_iter()
            .filter(|seed| {
                let idx = seed.to_usize();
                idx < color.len() && color[idx] == Color::White && {
                    color[idx] = Color::Gray;
                    true
                }
            })
            .collect();
        for seed in valid_seeds.into_iter().rev() {
            stack.push(seed);
        }
        DfsCore { graph, color, stack, cursor: None, cancel_kind: CancelKind::ContinueSearch }
    }

    fn cancel(&mut self, kind: CancelKind) {
        self.cancel_kind = kind;
    }

    fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl<'g, G: AdjacencyList> Iterator for DfsCore<'g, G> {
    type Item = (G::VId, G::Edge);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cancel_kind {
                CancelKind::CancelAll => {
                    self.stack.clear();
                    self.cursor = None;
                    return None;
                }
                CancelKind::CancelBranch => {
                    if let Some(u) = self.stack.pop() {
                        self.color[u.to_usize()] = Color::Black;
                    }
                    self.cursor = None;
                    self.cancel_kind = CancelKind::ContinueSearch;
                    continue;
                }
                CancelKind::ContinueSearch => {}
            }

            let Some(&u) = self.stack.last() else {
                return None;
            };
            if self.cursor.is_none() {
                self.cursor = Some(self.graph.edges(u));
            }
            match self.cursor.as_mut().unwrap().next() {
                Some(edge) => {
                    let target = edge.target_id();
                    if self.color[target.to_usize()] == Color::White {
                        self.color[target.to_usize()] = Color::Gray;
                        self.stack.push(target);
                        // The new top's edges haven't been visited yet; the old cursor
                        // belonged to the vertex we just descended from.
                        self.cursor = None;
                        return Some((target, edge));
                    }
                }
                None => {
                    self.color[u.to_usize()] = Color::Black;
                    self.stack.pop();
                    self.cursor = None;
                }
            }
        }
    }
}



/// Preorder vertex ids reached (excluding the seed itself) by depth-first search from
/// `seed`.
pub struct VerticesDfs<'g, G: AdjacencyList>(DfsCore<'g, G>);

impl<'g, G: AdjacencyList> VerticesDfs<'g, G> {
    pub fn cancel(&mut self, kind: CancelKind) {
        self.0.cancel(kind);
    }

    /// Current stack depth; `2` at the first yielded vertex (the seed plus the vertex
    /// just discovered), growing with each descent.
    pub fn depth(&self) -> usize {
        self.0.depth()
    }
}

impl<'g, G: AdjacencyList> Iterator for VerticesDfs<'g, G> {
    type Item = G::VId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(id, _)| id)
    }
}

/// The discovering edge of each vertex reached by depth-first search from `seed`, in
/// preorder.
pub struct EdgesDfs<'g, G: AdjacencyList>(DfsCore<'g, G>);

impl<'g, G: AdjacencyList> EdgesDfs<'g, G> {
    pub fn cancel(&mut self, kind: CancelKind) {
        self.0.cancel(kind);
    }

    pub fn depth(&self) -> usize {
        self.0.depth()
    }
}

impl<'g, G: AdjacencyList> Iterator for EdgesDfs<'g, G> {
    type Item = G::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, edge)| edge)
    }
}

pub fn vertices_depth_first_search<G: AdjacencyList>(g: &G, seed: G::VId) -> VerticesDfs<'_, G> {
    VerticesDfs(DfsCore::new(g, std::iter::once(seed)))
}

pub fn vertices_depth_first_search_multi<G: AdjacencyList>(g: &G, seeds: impl IntoIterator<Item = G::VId>) -> VerticesDfs<'_, G> {
    VerticesDfs(DfsCore::new(g, seeds))
}

pub fn edges_depth_first_search<G: AdjacencyList>(g: &G, seed: G::VId) -> EdgesDfs<'_, G> {
    EdgesDfs(DfsCore::new(g, std::iter::once(seed)))
}

pub fn edges_depth_first_search_multi<G: AdjacencyList>(g: &G, seeds: impl IntoIterator<Item = G::VId>) -> EdgesDfs<'_, G> {
    EdgesDfs(DfsCore::new(g, seeds))
}

/// Same traversal as [`edges_depth_first_search`], for a graph whose edge records also
/// carry their own source id (see [`crate::model::SourcedAdjacencyList`]).
pub fn sourced_edges_depth_first_search<G>(g: &G, seed: G::VId) -> EdgesDfs<'_, G>
where
    G: AdjacencyList,
    G::Edge: EdgeSource<G::VId>,
{
    EdgesDfs(DfsCore::new(g, std::iter::once(seed)))
}



#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::csr::CsrGraph;
    use crate::model::CopyableEdge;

    fn germany_routes() -> CsrGraph<u32, f64> {
        let edges = vec![
            CopyableEdge::new(0u32, 1, 85.0), CopyableEdge::new(0, 4, 217.0), CopyableEdge::new(0, 6, 173.0),
            CopyableEdge::new(1, 2, 80.0), CopyableEdge::new(2, 3, 250.0), CopyableEdge::new(3, 8, 84.0),
            CopyableEdge::new(4, 5, 103.0), CopyableEdge::new(4, 7, 186.0), CopyableEdge::new(5, 8, 167.0),
            CopyableEdge::new(5, 9, 183.0), CopyableEdge::new(6, 8, 502.0),
        ];
        let mut g = CsrGraph::new();
        g.load_edges(edges).unwrap();
        g
    }

    #[test]
    fn preorder_matches_reference_walk() {
        let g = germany_routes();
        let order: Vec<u32> = vertices_depth_first_search(&g, 0).collect();
        assert_eq!(order, vec![1, 2, 3, 8, 4, 5, 9, 7, 6]);
    }

    #[test]
    fn depth_stays_within_bounds_while_iterating() {
        let g = germany_routes();
        let mut dfs = vertices_depth_first_search(&g, 0);
        while dfs.next().is_some() {
            assert!(dfs.depth() >= 1 && dfs.depth() <= g.vertex_count());
        }
    }

    #[test]
    fn cancel_branch_is_one_shot() {
        let g = germany_routes();
        let mut dfs = vertices_depth_first_search(&g, 0);
        let first = dfs.next().unwrap();
        dfs.cancel(CancelKind::CancelBranch);
        // further iteration still proceeds (cancellation doesn't stick)
        assert!(dfs.next().is_some());
        let _ = first;
    }
}
