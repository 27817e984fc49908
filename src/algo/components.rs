//! Strongly connected component calculation
//!
//! Runs Tarjan's algorithm over the graph and orders the components: smallest
//! first, then (for components of equal size, when a layout order is given)
//! by the smallest layout order among their vertices.

use super::{build_view, index_of, vertex_at, AlgorithmResult};
use crate::graph::{reserved_keys, Graph, MetadataValue, VertexId};
use netgraph_algorithms::strongly_connected_components;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;
use tracing::debug;

/// Optional per-vertex sort key used to order components of equal size
#[derive(Debug, Clone, Default)]
pub struct LayoutOrder {
    orders: FxHashMap<VertexId, f64>,
}

impl LayoutOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vertex: VertexId, order: f64) {
        self.orders.insert(vertex, order);
    }

    pub fn get(&self, vertex: VertexId) -> Option<f64> {
        self.orders.get(&vertex).copied()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Read the layout orders recorded with
    /// [`Graph::set_layout_order`](crate::graph::Graph::set_layout_order).
    ///
    /// Returns `None` unless the graph is flagged as carrying layout orders.
    pub fn from_graph(graph: &Graph) -> Option<Self> {
        if !graph
            .metadata()
            .contains_key(reserved_keys::SORTABLE_LAYOUT_ORDER_SET)
        {
            return None;
        }

        let orders = graph
            .vertices()
            .iter()
            .filter_map(|vertex| {
                vertex
                    .metadata()
                    .try_get_value(reserved_keys::SORTABLE_LAYOUT_ORDER)
                    .and_then(MetadataValue::to_f64)
                    .map(|order| (vertex.id(), order))
            })
            .collect();
        Some(LayoutOrder { orders })
    }

    /// Smallest order among the vertices; vertices without one sort last
    fn min_over(&self, vertices: &[VertexId]) -> f64 {
        vertices
            .iter()
            .filter_map(|v| self.get(*v))
            .fold(f64::INFINITY, f64::min)
    }
}

impl FromIterator<(VertexId, f64)> for LayoutOrder {
    fn from_iter<I: IntoIterator<Item = (VertexId, f64)>>(iter: I) -> Self {
        LayoutOrder {
            orders: iter.into_iter().collect(),
        }
    }
}

/// Calculates strongly connected components
#[derive(Debug, Clone, Copy, Default)]
pub struct ConnectedComponentCalculator;

impl ConnectedComponentCalculator {
    pub fn new() -> Self {
        ConnectedComponentCalculator
    }

    /// Strongly connected components of the graph.
    ///
    /// With `vertices`, the search starts only from those vertices; every
    /// vertex reachable from them is still traversed and its component
    /// reported. Undirected edges can be followed both ways. Duplicate edges
    /// and self-loops do not affect the result.
    ///
    /// Components are sorted by ascending vertex count. Ties keep discovery
    /// order unless `layout_order` is given, in which case they are sorted by
    /// the smallest layout order found among their vertices.
    pub fn calculate_strongly_connected_components(
        &self,
        graph: &Graph,
        vertices: Option<&[VertexId]>,
        layout_order: Option<&LayoutOrder>,
    ) -> AlgorithmResult<Vec<Vec<VertexId>>> {
        let view = build_view(graph);

        let roots: Vec<u64> = match vertices {
            Some(vertices) => {
                for &vertex in vertices {
                    index_of(graph, &view, vertex)?;
                }
                vertices.iter().map(|v| v.as_u64()).collect()
            }
            None => view.index_to_node.clone(),
        };

        let result = strongly_connected_components(&view, roots);

        let mut components: Vec<Vec<VertexId>> = result
            .components
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .map(|idx| vertex_at(graph, &view, idx))
                    .collect()
            })
            .collect();

        match layout_order {
            Some(order) => {
                let mut keyed: Vec<(f64, Vec<VertexId>)> = components
                    .into_iter()
                    .map(|component| (order.min_over(&component), component))
                    .collect();
                keyed.sort_by(|a, b| compare_components(a, b));
                components = keyed.into_iter().map(|(_, component)| component).collect();
            }
            None => components.sort_by_key(Vec::len),
        }

        debug!(
            "Found {} strongly connected components in graph {}",
            components.len(),
            graph.id()
        );
        Ok(components)
    }
}

fn compare_components(a: &(f64, Vec<VertexId>), b: &(f64, Vec<VertexId>)) -> Ordering {
    a.1.len()
        .cmp(&b.1.len())
        .then_with(|| a.0.total_cmp(&b.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::AlgorithmError;
    use crate::graph::{Directedness, GraphError, Restrictions};

    fn directed_graph(n: usize, edges: &[(usize, usize)]) -> (Graph, Vec<VertexId>) {
        let mut graph = Graph::new(Directedness::Directed, Restrictions::NONE);
        let vertices: Vec<VertexId> = (0..n)
            .map(|i| graph.add_named_vertex(format!("v{}", i)).unwrap())
            .collect();
        for &(a, b) in edges {
            graph.add_edge(vertices[a], vertices[b], true).unwrap();
        }
        (graph, vertices)
    }

    fn sorted(mut component: Vec<VertexId>) -> Vec<VertexId> {
        component.sort();
        component
    }

    #[test]
    fn test_chain_gives_singletons() {
        let (graph, _) = directed_graph(3, &[(0, 1), (1, 2)]);
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        assert_eq!(components.len(), 3);
        assert!(components.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_cycle_gives_one_component() {
        let (graph, v) = directed_graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        assert_eq!(components.len(), 1);
        assert_eq!(sorted(components[0].clone()), v);
    }

    #[test]
    fn test_sorted_by_ascending_size() {
        // {0,1,2} cycle, {3,4} cycle, 5 alone
        let (graph, v) = directed_graph(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 3), (2, 3)],
        );
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        let sizes: Vec<usize> = components.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![1, 2, 3]);
        assert_eq!(components[0], vec![v[5]]);
    }

    #[test]
    fn test_ties_keep_discovery_order_without_layout() {
        let (graph, v) = directed_graph(3, &[]);
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        assert_eq!(components, vec![vec![v[0]], vec![v[1]], vec![v[2]]]);
    }

    #[test]
    fn test_ties_sorted_by_layout_order() {
        let (graph, v) = directed_graph(3, &[]);
        let order: LayoutOrder = [(v[0], 5.0), (v[1], 1.0), (v[2], 3.0)].into_iter().collect();

        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, Some(&order))
            .unwrap();

        assert_eq!(components, vec![vec![v[1]], vec![v[2]], vec![v[0]]]);
    }

    #[test]
    fn test_vertices_without_layout_order_sort_last() {
        let (graph, v) = directed_graph(3, &[]);
        let order: LayoutOrder = [(v[2], 9.0)].into_iter().collect();

        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, Some(&order))
            .unwrap();

        assert_eq!(components[0], vec![v[2]]);
    }

    #[test]
    fn test_layout_order_from_graph() {
        let (mut graph, v) = directed_graph(2, &[]);
        assert!(LayoutOrder::from_graph(&graph).is_none());

        graph.set_layout_order(v[1], 0.5).unwrap();
        let order = LayoutOrder::from_graph(&graph).unwrap();
        assert_eq!(order.len(), 1);
        assert_eq!(order.get(v[1]), Some(0.5));
        assert_eq!(order.get(v[0]), None);
    }

    #[test]
    fn test_subset_pulls_in_reachable_vertices() {
        // 0 -> 1 <-> 2, 3 isolated
        let (graph, v) = directed_graph(4, &[(0, 1), (1, 2), (2, 1)]);
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, Some(&[v[0]]), None)
            .unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0], vec![v[0]]);
        assert_eq!(sorted(components[1].clone()), vec![v[1], v[2]]);
    }

    #[test]
    fn test_undirected_edges_connect_both_ways() {
        let mut graph = Graph::new(Directedness::Undirected, Restrictions::NONE);
        let a = graph.add_vertex().unwrap();
        let b = graph.add_vertex().unwrap();
        let c = graph.add_vertex().unwrap();
        graph.add_edge(a, b, false).unwrap();

        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[0], vec![c]);
        assert_eq!(sorted(components[1].clone()), vec![a, b]);
    }

    #[test]
    fn test_duplicates_and_self_loops_tolerated() {
        let (graph, v) = directed_graph(2, &[(0, 0), (0, 1), (0, 1), (1, 0), (1, 1)]);
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        assert_eq!(components.len(), 1);
        assert_eq!(sorted(components[0].clone()), v);
    }

    #[test]
    fn test_metadata_left_untouched() {
        let (graph, v) = directed_graph(3, &[(0, 1), (1, 2), (2, 0)]);
        ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();

        for vertex in v {
            assert!(graph.vertex(vertex).unwrap().metadata().is_empty());
        }
    }

    #[test]
    fn test_foreign_vertex_rejected() {
        let (graph, _) = directed_graph(1, &[]);
        let (_, other) = directed_graph(1, &[]);

        let result = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, Some(&other), None);
        assert!(matches!(
            result,
            Err(AlgorithmError::Graph(GraphError::VertexNotInGraph { .. }))
        ));
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new(Directedness::Directed, Restrictions::NONE);
        let components = ConnectedComponentCalculator::new()
            .calculate_strongly_connected_components(&graph, None, None)
            .unwrap();
        assert!(components.is_empty());
    }
}
