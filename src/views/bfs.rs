//! # Breadth-first traversal views
use std::collections::VecDeque;

use crate::id::VertexId;
use crate::model::{AdjacencyList, EdgeSource, EdgeTarget};
use crate::views::{CancelKind, Color};

/// Correct a possibly edge-sharing graph's apparent target id for the direction a
/// traversal actually arrived from: returns `target_id(edge)` unless that equals
/// `arrived_from`, in which case it returns `source_id(edge)` instead.
///
/// Neither built-in container shares one edge record between a vertex pair's two rows
/// (each row holds its own, already-correctly-oriented record), so this only matters for
/// a caller-defined `AdjacencyList` that represents an undirected edge as a single record
/// reachable from both endpoints.
pub fn real_target_id<VId, Edge>(edge: &Edge, arrived_from: VId) -> VId
where
    VId: VertexId,
    Edge: EdgeTarget<VId> + EdgeSource<VId>,
{
    let target = edge.target_id();
    if target == arrived_from {
        edge.source_id()
    } else {
        target
    }
}



struct BfsCore<'g, G: AdjacencyList> {
    graph: &'g G,
    color: Vec<Color>,
    queue: VecDeque<G::VId>,
    cursor: Option<Box<dyn Iterator<Item = G::Edge> + 'g>>,
    cancel_kind: CancelKind,
}

impl<'g, G: AdjacencyList> BfsCore<'g, G> {
    fn new(graph: &'g G, seeds: impl IntoIterator<Item = G::VId>) -> Self {
        let mut color = vec![Color::White; graph.vertex_count()];
        let mut queue = VecDeque::new();
        for seed in seeds {
            let idx = seed.to_usize();
            if idx >= color.len() || color[idx] != Color::White {
                continue;
            }
            color[idx] = Color::Gray;
            queue.push_back(seed);
        }
        BfsCore { graph, color, queue, cursor: None, cancel_kind: CancelKind::ContinueSearch }
    }

    fn cancel(&mut self, kind: CancelKind) {
        self.cancel_kind = kind;
    }
}

impl<'g, G: AdjacencyList> Iterator for BfsCore<'g, G> {
    type Item = (G::VId, G::Edge);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.cancel_kind {
                CancelKind::CancelAll => {
                    self.queue.clear();
                    self.cursor = None;
                    return None;
                }
                CancelKind::CancelBranch => {
                    if let Some(u) = self.queue.pop_front() {
                        self.color[u.to_usize()] = Color::Black;
                    }
                    self.cursor = None;
                    self.cancel_kind = CancelKind::ContinueSearch;
                    continue;
                }
                CancelKind::ContinueSearch => {}
            }

            let Some(u) = self.queue.front().copied() else {
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
                        self.queue.push_back(target);
                        return Some((target, edge));
                    }
                }
                None => {
                    self.queue.pop_front();
                    self.color[u.to_usize()] = Color::Black;
                    self.cursor = None;
                }
            }
        }
    }
}



/// Discovery-order vertex ids reachable (excluding the seed itself) by breadth-first
/// search from `seed`.
pub struct VerticesBfs<'g, G: AdjacencyList>(BfsCore<'g, G>);

impl<'g, G: AdjacencyList> VerticesBfs<'g, G> {
    pub fn cancel(&mut self, kind: CancelKind) {
        self.0.cancel(kind);
    }
}

impl<'g, G: AdjacencyList> Iterator for VerticesBfs<'g, G> {
    type Item = G::VId;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(id, _)| id)
    }
}

/// The discovering edge of each vertex reached by breadth-first search from `seed`, in
/// discovery order.
pub struct EdgesBfs<'g, G: AdjacencyList>(BfsCore<'g, G>);

impl<'g, G: AdjacencyList> EdgesBfs<'g, G> {
    pub fn cancel(&mut self, kind: CancelKind) {
        self.0.cancel(kind);
    }
}

impl<'g, G: AdjacencyList> Iterator for EdgesBfs<'g, G> {
    type Item = G::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(_, edge)| edge)
    }
}

pub fn vertices_breadth_first_search<G: AdjacencyList>(g: &G, seed: G::VId) -> VerticesBfs<'_, G> {
    VerticesBfs(BfsCore::new(g, std::iter::once(seed)))
}

pub fn vertices_breadth_first_search_multi<G: AdjacencyList>(g: &G, seeds: impl IntoIterator<Item = G::VId>) -> VerticesBfs<'_, G> {
    VerticesBfs(BfsCore::new(g, seeds))
}

pub fn edges_breadth_first_search<G: AdjacencyList>(g: &G, seed: G::VId) -> EdgesBfs<'_, G> {
    EdgesBfs(BfsCore::new(g, std::iter::once(seed)))
}

pub fn edges_breadth_first_search_multi<G: AdjacencyList>(g: &G, seeds: impl IntoIterator<Item = G::VId>) -> EdgesBfs<'_, G> {
    EdgesBfs(BfsCore::new(g, seeds))
}

/// Same traversal as [`edges_breadth_first_search`], for a graph whose edge records also
/// carry their own source id (see [`crate::model::SourcedAdjacencyList`]).
pub fn sourced_edges_breadth_first_search<G>(g: &G, seed: G::VId) -> EdgesBfs<'_, G>
where
    G: AdjacencyList,
    G::Edge: EdgeSource<G::VId>,
{
    EdgesBfs(BfsCore::new(g, std::iter::once(seed)))
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
    fn discovery_order_matches_reference_walk() {
        let g = germany_routes();
        let order: Vec<u32> = vertices_breadth_first_search(&g, 0).collect();
        assert_eq!(order, vec![1, 4, 6, 2, 5, 7, 8, 3, 9]);
    }

    #[test]
    fn cancel_all_drains_the_queue() {
        let g = germany_routes();
        let mut bfs = vertices_breadth_first_search(&g, 0);
        let mut emitted = Vec::new();
        while let Some(v) = bfs.next() {
            emitted.push(v);
            if v == 2 {
                bfs.cancel(CancelKind::CancelAll);
            }
        }
        assert_eq!(emitted.len(), 4);
        assert_eq!(bfs.next(), None);
    }

    #[test]
    fn seed_itself_is_never_yielded() {
        let g = germany_routes();
        let order: Vec<u32> = vertices_breadth_first_search(&g, 0).collect();
        assert!(!order.contains(&0));
    }

    #[test]
    fn invalid_and_duplicate_seeds_are_skipped() {
        let g = germany_routes();
        let order: Vec<u32> = vertices_breadth_first_search_multi(&g, vec![0, 0, 999]).collect();
        assert_eq!(order, vec![1, 4, 6, 2, 5, 7, 8, 3, 9]);
    }

    #[test]
    fn view_idempotence() {
        let g = germany_routes();
        let first: Vec<u32> = vertices_breadth_first_search(&g, 0).collect();
        let second: Vec<u32> = vertices_breadth_first_search(&g, 0).collect();
        assert_eq!(first, second);
    }
}
