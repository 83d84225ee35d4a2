//! Flowcanvas: the in-memory graph model behind a visual backend builder.
//!
//! A workflow is a directed graph of typed nodes (triggers, variables,
//! queries, loops, branches, responses) connected by edges that may carry
//! branch handles. This crate owns everything that happens to that graph
//! between "loaded from the service" and "saved back": structural mutation,
//! variable-scope resolution, and undo/redo.
//!
//! # Architecture
//!
//! - [`taxonomy`]: the closed registry of node kinds, their attribute
//!   payloads, and the declaration rules each kind follows.
//! - [`graph`]: [`GraphStore`](graph::GraphStore), the ordered node and
//!   edge collections for one open workflow, with referential-integrity
//!   checks at mutation time.
//! - [`resolver`]: [`resolve`](resolver::resolve), the pure scope query
//!   answering "which named values can this node reference?".
//! - [`history`]: [`HistoryManager`](history::HistoryManager), bounded
//!   snapshot undo/redo over the store.
//! - [`document`]: the serialized workflow document and the
//!   [`WorkflowService`](document::WorkflowService) boundary trait.
//!
//! # Quick start
//!
//! ```rust
//! use flowcanvas::graph::{GraphEdge, GraphNode, GraphStore};
//! use flowcanvas::resolver::resolve;
//! use flowcanvas::taxonomy::NodeConfig;
//! use serde_json::json;
//!
//! # fn main() -> Result<(), flowcanvas::graph::GraphError> {
//! let mut store = GraphStore::new();
//! store.add_node(GraphNode::with_id(
//!     "cfg",
//!     NodeConfig::Variable {
//!         name: "cfg".into(),
//!         value_type: "json".into(),
//!         value: json!({"retries": {"max": 3}}),
//!         is_private: false,
//!     },
//! ))?;
//! store.add_node(GraphNode::with_id(
//!     "resp",
//!     NodeConfig::default_for_kind("response"),
//! ))?;
//! store.add_edge(GraphEdge::new("cfg", "resp"))?;
//!
//! let scope = resolve(&store, "resp");
//! let names: Vec<&str> = scope.iter().map(|d| d.name.as_str()).collect();
//! assert!(names.contains(&"cfg"));
//! assert!(names.contains(&"cfg.retries.max"));
//! # Ok(())
//! # }
//! ```

pub mod document;
pub mod graph;
pub mod history;
pub mod resolver;
pub mod taxonomy;
pub mod types;
pub mod utils;
