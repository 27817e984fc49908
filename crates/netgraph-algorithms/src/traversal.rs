//! Level-bounded traversal
//!
//! Breadth-first neighbourhood extraction around a root node. Edges are
//! followed regardless of their direction.

use super::common::{EdgeKey, GraphView, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Result of a level-bounded BFS
#[derive(Debug, Clone, Default)]
pub struct LevelResult {
    /// Nodes in discovery order, root first
    pub order: Vec<usize>,
    /// Hop distance from the root, by dense node index
    pub levels: FxHashMap<usize, usize>,
    /// Edges collected, in the order they were first traversed
    pub edges: Vec<EdgeKey>,
    seen_edges: FxHashSet<EdgeKey>,
}

impl LevelResult {
    /// Hop distance of a node, if it was reached
    pub fn level_of(&self, idx: usize) -> Option<usize> {
        self.levels.get(&idx).copied()
    }

    /// Largest level that was actually recorded
    pub fn outermost_level(&self) -> usize {
        self.levels.values().copied().max().unwrap_or(0)
    }

    fn record_edge(&mut self, edge: EdgeKey) {
        if self.seen_edges.insert(edge) {
            self.edges.push(edge);
        }
    }
}

/// Breadth-First Search bounded by hop count.
///
/// Every node within `max_level` hops of `root` is recorded with its
/// shortest-hop distance. A node is enqueued at most once. When
/// `collect_edges` is set, every edge incident to a node below `max_level` is
/// collected, each at most once.
///
/// Returns `None` if `root` is not part of the view.
pub fn bounded_bfs(
    view: &GraphView,
    root: NodeId,
    max_level: usize,
    collect_edges: bool,
) -> Option<LevelResult> {
    let root = view.index_of(root)?;
    let mut result = LevelResult::default();
    let mut queue = VecDeque::new();

    result.levels.insert(root, 0);
    result.order.push(root);
    queue.push_back((root, 0));

    while let Some((current, level)) = queue.pop_front() {
        if level >= max_level {
            continue;
        }

        for adj in &view.incident[current] {
            if !result.levels.contains_key(&adj.node) {
                result.levels.insert(adj.node, level + 1);
                result.order.push(adj.node);
                queue.push_back((adj.node, level + 1));
            }

            if collect_edges {
                result.record_edge(adj.edge);
            }
        }
    }

    Some(result)
}

/// Add the edges that join two nodes on the outermost recorded level.
///
/// These are the edges the integer level cutoff leaves out; self-loops on
/// outermost nodes count as joining a node to itself.
pub fn add_lateral_edges(view: &GraphView, result: &mut LevelResult) {
    let outermost = result.outermost_level();
    let outer_nodes: Vec<usize> = result
        .order
        .iter()
        .copied()
        .filter(|idx| result.level_of(*idx) == Some(outermost))
        .collect();

    for idx in outer_nodes {
        for adj in &view.incident[idx] {
            if result.level_of(adj.node) == Some(outermost) {
                result.record_edge(adj.edge);
            }
        }
    }
}
