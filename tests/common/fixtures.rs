#![allow(dead_code)]

use flowcanvas::graph::{GraphEdge, GraphNode, GraphStore, handles};
use flowcanvas::taxonomy::NodeConfig;
use serde_json::Value;

pub fn variable(id: &str, name: &str, is_private: bool) -> GraphNode {
    GraphNode::with_id(
        id,
        NodeConfig::Variable {
            name: name.to_string(),
            value_type: "string".to_string(),
            value: Value::Null,
            is_private,
        },
    )
}

pub fn json_variable(id: &str, name: &str, value: Value) -> GraphNode {
    GraphNode::with_id(
        id,
        NodeConfig::Variable {
            name: name.to_string(),
            value_type: "json".to_string(),
            value,
            is_private: false,
        },
    )
}

pub fn math(id: &str, result_var: &str) -> GraphNode {
    GraphNode::with_id(
        id,
        NodeConfig::Math {
            val_a: "1".to_string(),
            val_b: "2".to_string(),
            op: "add".to_string(),
            result_var: result_var.to_string(),
        },
    )
}

pub fn database(id: &str, result_var: &str) -> GraphNode {
    GraphNode::with_id(
        id,
        NodeConfig::Database {
            query: "select 1".to_string(),
            query_type: "select".to_string(),
            result_var: result_var.to_string(),
        },
    )
}

pub fn api(id: &str, method: &str, path: &str) -> GraphNode {
    GraphNode::with_id(
        id,
        NodeConfig::ApiEndpoint {
            method: method.to_string(),
            path: path.to_string(),
            validation_fields: Vec::new(),
        },
    )
}

pub fn response(id: &str) -> GraphNode {
    GraphNode::with_id(id, NodeConfig::default_for_kind("response"))
}

/// Builds a store from `nodes` connected in a straight line, in order.
pub fn chain(nodes: Vec<GraphNode>) -> GraphStore {
    let ids: Vec<String> = nodes.iter().map(|n| n.id.clone()).collect();
    let mut store = GraphStore::new();
    for node in nodes {
        store.add_node(node).expect("fixture node ids are unique");
    }
    for pair in ids.windows(2) {
        store
            .add_edge(GraphEdge::with_id(
                format!("{}->{}", pair[0], pair[1]),
                pair[0].as_str(),
                pair[1].as_str(),
            ))
            .expect("fixture endpoints exist");
    }
    store
}

/// A loop construct with a back-edge:
/// `api -> loop -do-> body -> loop` and `loop -done-> resp`.
pub fn loop_graph() -> GraphStore {
    let mut store = GraphStore::new();
    store.add_node(api("api", "GET", "/items")).unwrap();
    store
        .add_node(GraphNode::with_id(
            "loop",
            NodeConfig::LoopIterator {
                collection: "items".to_string(),
                variable: "item".to_string(),
            },
        ))
        .unwrap();
    store.add_node(math("body", "doubled")).unwrap();
    store.add_node(response("resp")).unwrap();

    store
        .add_edge(GraphEdge::with_id("e1", "api", "loop"))
        .unwrap();
    store
        .add_edge(GraphEdge::with_id("e2", "loop", "body").from_handle(handles::DO))
        .unwrap();
    store
        .add_edge(GraphEdge::with_id("e3", "body", "loop"))
        .unwrap();
    store
        .add_edge(GraphEdge::with_id("e4", "loop", "resp").from_handle(handles::DONE))
        .unwrap();
    store
}
