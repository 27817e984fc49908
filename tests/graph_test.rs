use netgraph::graph::{
    reserved_keys, Directedness, Graph, GraphConfig, GraphError, GraphEvent, MetadataValue,
    Restrictions, ValueKind,
};
use std::sync::{Arc, Mutex};

#[test]
fn test_self_loop_rejected_without_side_effects() {
    let mut graph = Graph::new(Directedness::Directed, Restrictions::NO_SELF_LOOPS);
    let a = graph.add_vertex().unwrap();
    let b = graph.add_vertex().unwrap();
    graph.add_edge(a, b, true).unwrap();

    let before = graph.edge_count();
    let result = graph.add_edge(a, a, true);

    assert_eq!(result, Err(GraphError::SelfLoopNotAllowed(a)));
    assert_eq!(graph.edge_count(), before);
    assert_eq!(graph.incident_edges(a).len(), 1);
}

#[test]
fn test_parallel_edges_rejected() {
    let mut graph = Graph::new(Directedness::Mixed, Restrictions::NO_PARALLEL_EDGES);
    let a = graph.add_vertex().unwrap();
    let b = graph.add_vertex().unwrap();

    graph.add_edge(a, b, true).unwrap();
    // Opposite direction is a different directed edge
    graph.add_edge(b, a, true).unwrap();
    assert!(matches!(
        graph.add_edge(a, b, true),
        Err(GraphError::ParallelEdgeNotAllowed(..))
    ));
    // An undirected edge overlaps any edge on the pair
    assert!(matches!(
        graph.add_edge(b, a, false),
        Err(GraphError::ParallelEdgeNotAllowed(..))
    ));
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_directedness_enforced() {
    let mut directed = Graph::new(Directedness::Directed, Restrictions::NONE);
    let a = directed.add_vertex().unwrap();
    let b = directed.add_vertex().unwrap();
    assert!(matches!(
        directed.add_edge(a, b, false),
        Err(GraphError::DirectednessConflict { .. })
    ));

    let mut undirected = Graph::new(Directedness::Undirected, Restrictions::NONE);
    let c = undirected.add_vertex().unwrap();
    let d = undirected.add_vertex().unwrap();
    assert!(matches!(
        undirected.add_edge(c, d, true),
        Err(GraphError::DirectednessConflict { .. })
    ));
    assert_eq!(directed.edge_count() + undirected.edge_count(), 0);
}

#[test]
fn test_cross_graph_edges_rejected() {
    let mut first = Graph::default();
    let mut second = Graph::default();
    let a = first.add_vertex().unwrap();
    let b = second.add_vertex().unwrap();

    assert!(matches!(
        first.add_edge(a, b, false),
        Err(GraphError::VertexNotInGraph { .. })
    ));
    assert_eq!(first.edge_count(), 0);
    assert_eq!(b.graph(), second.id());
}

#[test]
fn test_ids_are_never_reused() {
    let mut graph = Graph::default();
    let a = graph.add_vertex().unwrap();
    let b = graph.add_vertex().unwrap();
    graph.remove_vertex(b).unwrap();
    let c = graph.add_vertex().unwrap();

    assert!(a.as_u64() < b.as_u64());
    assert!(b.as_u64() < c.as_u64());
    assert_eq!(graph.vertex_count(), 2);
}

#[test]
fn test_configured_first_ids() {
    let config = GraphConfig {
        first_vertex_id: 500,
        first_edge_id: 9000,
        ..GraphConfig::new(Directedness::Directed, Restrictions::ALL)
    };
    let mut graph = Graph::with_config(config).unwrap();
    let a = graph.add_vertex().unwrap();
    let b = graph.add_vertex().unwrap();
    let e = graph.add_edge(a, b, true).unwrap();

    assert_eq!(a.as_u64(), 500);
    assert_eq!(b.as_u64(), 501);
    assert_eq!(e.as_u64(), 9000);
    assert!(graph.has_restrictions(Restrictions::NO_SELF_LOOPS));

    let bad = GraphConfig {
        first_vertex_id: u64::MAX,
        ..GraphConfig::default()
    };
    assert_eq!(
        Graph::with_config(bad).unwrap_err(),
        GraphError::InvalidFirstId(u64::MAX)
    );
}

#[test]
fn test_vertex_ids_exhaust() {
    let config = GraphConfig {
        first_vertex_id: u64::MAX - 1,
        ..GraphConfig::default()
    };
    let mut graph = Graph::with_config(config).unwrap();
    assert!(graph.add_vertex().is_ok());
    assert_eq!(graph.add_vertex(), Err(GraphError::IdsExhausted));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_events_fire_in_order() {
    let mut graph = Graph::new(Directedness::Undirected, Restrictions::NO_SELF_LOOPS);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    graph.add_observer(Box::new(move |event: &GraphEvent| {
        sink.lock().unwrap().push(*event)
    }));
    let mut rx = graph.subscribe();

    let a = graph.add_vertex().unwrap();
    let b = graph.add_vertex().unwrap();
    let e = graph.add_edge(a, b, false).unwrap();
    // Rejected additions are not announced
    assert!(graph.add_edge(a, a, false).is_err());

    let expected = vec![
        GraphEvent::VertexAdded { graph: graph.id(), vertex: a },
        GraphEvent::VertexAdded { graph: graph.id(), vertex: b },
        GraphEvent::EdgeAdded { graph: graph.id(), edge: e },
    ];
    assert_eq!(*seen.lock().unwrap(), expected);

    let mut received = Vec::new();
    while let Ok(event) = rx.try_recv() {
        received.push(event);
    }
    assert_eq!(received, expected);
}

#[test]
fn test_metadata_keys() {
    let mut graph = Graph::default();
    let a = graph.add_named_vertex("alice").unwrap();
    let vertex = graph.vertex_mut(a).unwrap();

    vertex.metadata_mut().set_value("age", 30i64).unwrap();
    assert_eq!(
        vertex.metadata_mut().set_value("age", 31i64).unwrap(),
        Some(MetadataValue::Integer(30))
    );
    assert!(matches!(
        vertex.metadata_mut().set_value("", "x"),
        Err(GraphError::InvalidKey(_))
    ));
    assert!(matches!(
        vertex.metadata_mut().set_value(reserved_keys::SORTABLE_LAYOUT_ORDER, 1.0),
        Err(GraphError::InvalidKey(_))
    ));

    let metadata = graph.vertex(a).unwrap().metadata();
    assert!(metadata.contains_key("age"));
    assert!(!metadata.contains_key("Age"));
    assert!(matches!(
        metadata.get_required_value("age", ValueKind::String),
        Err(GraphError::TypeMismatch { .. })
    ));
    assert!(matches!(
        metadata.get_required_value("height", ValueKind::Integer),
        Err(GraphError::MissingKey(_))
    ));
}

#[test]
fn test_tag_holds_any_value() {
    let mut graph = Graph::default();
    let a = graph.add_vertex().unwrap();
    graph
        .vertex_mut(a)
        .unwrap()
        .metadata_mut()
        .set_tag(Some(Arc::new(String::from("payload"))));

    let metadata = graph.vertex(a).unwrap().metadata();
    assert_eq!(metadata.tag_as::<String>().map(String::as_str), Some("payload"));
    assert!(metadata.tag_as::<u32>().is_none());
}

#[test]
fn test_layout_order_uses_reserved_keys() {
    let mut graph = Graph::default();
    let a = graph.add_vertex().unwrap();
    graph.set_layout_order(a, 2.5).unwrap();

    assert!(graph
        .metadata()
        .contains_key(reserved_keys::SORTABLE_LAYOUT_ORDER_SET));
    assert_eq!(
        graph
            .vertex(a)
            .unwrap()
            .metadata()
            .try_get_value(reserved_keys::SORTABLE_LAYOUT_ORDER),
        Some(&MetadataValue::Float(2.5))
    );
}

#[test]
fn test_clone_graph_is_independent() {
    let mut graph = Graph::new(Directedness::Directed, Restrictions::NONE);
    let a = graph.add_named_vertex("a").unwrap();
    let b = graph.add_named_vertex("b").unwrap();
    graph.add_edge(a, b, true).unwrap();
    graph.metadata_mut().set_value("title", "network").unwrap();

    let mut copy = graph.clone_graph(true, false).unwrap();
    assert_ne!(copy.id(), graph.id());
    assert_eq!(copy.statistics(), graph.statistics());
    assert_eq!(
        copy.metadata().try_get_value("title"),
        Some(&MetadataValue::from("network"))
    );

    let extra = copy.add_vertex().unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert!(graph.vertex(extra).is_none());
}

#[test]
fn test_adjacency_queries() {
    let mut graph = Graph::new(Directedness::Mixed, Restrictions::NONE);
    let a = graph.add_named_vertex("a").unwrap();
    let b = graph.add_named_vertex("b").unwrap();
    let c = graph.add_named_vertex("c").unwrap();
    graph.add_edge(a, b, true).unwrap();
    graph.add_edge(c, a, false).unwrap();

    assert_eq!(graph.successors(a), vec![b, c]);
    assert_eq!(graph.predecessors(a), vec![c]);
    assert_eq!(graph.adjacent_vertices(a), vec![b, c]);
    assert!(graph.successors(b).is_empty());
    assert_eq!(graph.vertices().find_by_name("c").map(|v| v.id()), Some(c));
}

#[test]
fn test_remove_vertex_drops_incident_edges() {
    let mut graph = Graph::new(Directedness::Undirected, Restrictions::NONE);
    let a = graph.add_vertex().unwrap();
    let b = graph.add_vertex().unwrap();
    let c = graph.add_vertex().unwrap();
    graph.add_edge(a, b, false).unwrap();
    let kept = graph.add_edge(b, c, false).unwrap();
    graph.add_edge(a, a, false).unwrap();

    graph.remove_vertex(a).unwrap();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edge(kept).is_some());
    assert_eq!(graph.remove_vertex(a).unwrap_err(), GraphError::VertexNotFound(a));
}
