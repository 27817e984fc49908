//! Strongly connected components
//!
//! Tarjan's algorithm driven by an explicit frame stack, so graph depth is
//! bounded by heap memory rather than the thread's call stack.

use super::common::{GraphView, NodeId};

/// Result of the SCC algorithm
#[derive(Debug, Clone, Default)]
pub struct SccResult {
    /// Components in the order they were completed, each holding dense node
    /// indices in the order they were popped off the Tarjan stack
    pub components: Vec<Vec<usize>>,
}

/// A suspended visit: the node and the position of the next successor to examine.
struct Frame {
    node: usize,
    next: usize,
}

/// Per-call Tarjan bookkeeping, indexed by dense node index
struct TarjanState {
    index: Vec<Option<usize>>,
    low_link: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next_index: usize,
}

impl TarjanState {
    fn new(node_count: usize) -> Self {
        TarjanState {
            index: vec![None; node_count],
            low_link: vec![0; node_count],
            on_stack: vec![false; node_count],
            stack: Vec::new(),
            next_index: 0,
        }
    }

    fn discover(&mut self, node: usize) {
        self.index[node] = Some(self.next_index);
        self.low_link[node] = self.next_index;
        self.next_index += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }

    fn pop_component(&mut self, root: usize) -> Vec<usize> {
        let mut component = Vec::new();
        while let Some(node) = self.stack.pop() {
            self.on_stack[node] = false;
            component.push(node);
            if node == root {
                break;
            }
        }
        component
    }
}

/// Strongly Connected Components (Tarjan)
///
/// Runs a depth-first search from every root that has not been visited yet.
/// Nodes reachable from a root are visited too, so their components appear in
/// the result even when they are not roots themselves. Roots that are not
/// part of the view are skipped. Duplicate edges and self-loops are harmless.
pub fn strongly_connected_components<I>(view: &GraphView, roots: I) -> SccResult
where
    I: IntoIterator<Item = NodeId>,
{
    let mut state = TarjanState::new(view.node_count);
    let mut components = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();

    for root in roots.into_iter().filter_map(|node| view.index_of(node)) {
        if state.index[root].is_some() {
            continue;
        }

        state.discover(root);
        frames.push(Frame { node: root, next: 0 });

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;

            if let Some(adj) = view.outgoing[v].get(frame.next) {
                frame.next += 1;
                let w = adj.node;
                match state.index[w] {
                    None => {
                        state.discover(w);
                        frames.push(Frame { node: w, next: 0 });
                    }
                    Some(w_index) if state.on_stack[w] => {
                        state.low_link[v] = state.low_link[v].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            // All successors of v examined
            frames.pop();
            if let Some(parent) = frames.last() {
                let p = parent.node;
                state.low_link[p] = state.low_link[p].min(state.low_link[v]);
            }

            if Some(state.low_link[v]) == state.index[v] {
                components.push(state.pop_component(v));
            }
        }
    }

    SccResult { components }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_from(node_count: usize, edges: &[(usize, usize)]) -> GraphView {
        let mut view = GraphView::with_nodes((0..node_count as u64).collect());
        for (key, &(from, to)) in edges.iter().enumerate() {
            view.add_edge(key as u64, from, to, true);
        }
        view
    }

    fn sorted(mut components: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
        for component in &mut components {
            component.sort_unstable();
        }
        components.sort();
        components
    }

    #[test]
    fn test_chain_has_singleton_components() {
        // 0->1->2
        let view = view_from(3, &[(0, 1), (1, 2)]);
        let result = strongly_connected_components(&view, 0..3);

        assert_eq!(result.components.len(), 3);
        assert!(result.components.iter().all(|c| c.len() == 1));
        // Sinks complete first
        assert_eq!(result.components[0], vec![2]);
    }

    #[test]
    fn test_cycle_is_one_component() {
        // 0->1->2->0
        let view = view_from(3, &[(0, 1), (1, 2), (2, 0)]);
        let result = strongly_connected_components(&view, 0..3);

        assert_eq!(sorted(result.components), vec![vec![0, 1, 2]]);
    }

    #[test]
    fn test_two_cycles_joined_by_bridge() {
        // {0,1} -> {2,3}
        let view = view_from(4, &[(0, 1), (1, 0), (1, 2), (2, 3), (3, 2)]);
        let result = strongly_connected_components(&view, 0..4);

        assert_eq!(sorted(result.components), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_self_loops_and_duplicates_are_harmless() {
        let view = view_from(2, &[(0, 0), (0, 1), (0, 1), (1, 1)]);
        let result = strongly_connected_components(&view, 0..2);

        assert_eq!(sorted(result.components), vec![vec![0], vec![1]]);
    }

    #[test]
    fn test_roots_pull_in_reachable_nodes() {
        // 0->1->2->1, 3 isolated; only root 0 supplied
        let view = view_from(4, &[(0, 1), (1, 2), (2, 1)]);
        let result = strongly_connected_components(&view, [0]);

        assert_eq!(sorted(result.components), vec![vec![0], vec![1, 2]]);
    }

    #[test]
    fn test_undirected_edge_connects_both_ways() {
        let mut view = GraphView::with_nodes(vec![1, 2]);
        view.add_edge(0, 0, 1, false);
        let result = strongly_connected_components(&view, 1..3);

        assert_eq!(sorted(result.components), vec![vec![0, 1]]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let n = 200_000;
        let edges: Vec<(usize, usize)> = (0..n - 1).map(|i| (i, i + 1)).collect();
        let view = view_from(n, &edges);
        let result = strongly_connected_components(&view, [0]);

        assert_eq!(result.components.len(), n);
    }

    #[test]
    fn test_unknown_roots_are_skipped() {
        // 0->1->0
        let view = view_from(2, &[(0, 1), (1, 0)]);
        let result = strongly_connected_components(&view, [7, 1, 99]);

        assert_eq!(sorted(result.components), vec![vec![0, 1]]);
        assert!(strongly_connected_components(&view, [7]).components.is_empty());
    }

    #[test]
    fn test_empty_view() {
        let view = GraphView::with_nodes(Vec::new());
        let result = strongly_connected_components(&view, 0..0);
        assert!(result.components.is_empty());
    }
}
