//! Network Demo
//!
//! Builds a small airline route network and runs every algorithm over it:
//! - strongly connected components, ordered by a layout order
//! - duplicate route detection
//! - neighbourhood extraction at whole and half levels, then materialization
//!
//! Run with:
//!   RUST_LOG=netgraph=debug cargo run --example network_demo

use netgraph::algo::{
    ConnectedComponentCalculator, DuplicateEdgeDetector, LayoutOrder, SubgraphCalculator,
    SubgraphOptions,
};
use netgraph::graph::{Directedness, Graph, GraphEvent, Restrictions, VertexId};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Netgraph Network Demo ===\n");

    let mut graph = Graph::new(Directedness::Directed, Restrictions::NO_SELF_LOOPS);
    graph.add_observer(Box::new(|event: &GraphEvent| {
        if let GraphEvent::VertexAdded { vertex, .. } = event {
            tracing::info!("Airport {} registered", vertex);
        }
    }));

    let airports = ["JFK", "LHR", "CDG", "FRA", "NRT", "SYD"];
    let mut ids: Vec<VertexId> = Vec::with_capacity(airports.len());
    for (position, code) in airports.iter().enumerate() {
        let id = graph.add_named_vertex(*code)?;
        graph.set_layout_order(id, position as f64)?;
        ids.push(id);
    }

    // JFK <-> LHR <-> CDG form a loop; FRA -> NRT -> SYD is one-way
    let routes = [
        (0, 1), (1, 0), (1, 2), (2, 1), (2, 0),
        (2, 3), (3, 4), (4, 5),
        (1, 2),
    ];
    for (from, to) in routes {
        graph.add_edge(ids[from], ids[to], true)?;
    }

    if graph.add_edge(ids[0], ids[0], true).is_err() {
        println!("Self-loop JFK -> JFK rejected as expected");
    }

    let stats = graph.statistics();
    println!("Graph: {} airports, {} routes\n", stats.vertex_count, stats.edge_count);

    // Strongly connected components
    let order = LayoutOrder::from_graph(&graph);
    let components = ConnectedComponentCalculator::new().calculate_strongly_connected_components(
        &graph,
        None,
        order.as_ref(),
    )?;
    println!("Strongly connected components:");
    for component in &components {
        let names: Vec<&str> = component
            .iter()
            .filter_map(|id| graph.vertex(*id).and_then(|v| v.name()))
            .collect();
        println!("  {:?}", names);
    }

    // Duplicate routes
    let detector = DuplicateEdgeDetector::new(&graph);
    println!("\nDuplicate routes:");
    println!("  unique routes:          {}", detector.unique_edges());
    println!("  routes with duplicates: {}", detector.edges_with_duplicates());
    println!(
        "  after merging:          {}",
        detector.total_edges_after_merging_duplicates_no_self_loops()
    );
    for (from, to) in detector.duplicate_keys() {
        println!("  repeated: {} -> {}", from, to);
    }

    // Neighbourhood of LHR
    let calculator = SubgraphCalculator::new();
    for levels in [1.0, 1.5] {
        let subgraph = calculator.get_subgraph(&graph, ids[1], SubgraphOptions::new(levels, true))?;
        println!(
            "\nLHR within {} levels: {} airports, {} routes",
            levels,
            subgraph.vertices.len(),
            subgraph.edges.len()
        );
        for (vertex, level) in &subgraph.vertices {
            let name = graph.vertex(*vertex).and_then(|v| v.name()).unwrap_or("?");
            println!("  {} at level {}", name, level);
        }
    }

    let neighbourhood = calculator.get_subgraph(&graph, ids[1], SubgraphOptions::default())?;
    let extracted = calculator.materialize(&graph, &neighbourhood.vertex_ids())?;
    println!(
        "\nMaterialized neighbourhood: {} airports, {} routes",
        extracted.vertex_count(),
        extracted.edge_count()
    );

    Ok(())
}
