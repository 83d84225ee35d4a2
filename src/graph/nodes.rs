//! Graph node type.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::NodeConfig;

/// One node of a workflow graph: a unique id plus kind-specific
/// configuration.
///
/// The serialized form flattens the configuration next to the id, matching
/// the workflow document: `{"id": "...", "type": "math", "data": {...}}`.
/// Unknown fields in the document (canvas position, label, styling) are
/// ignored on deserialization.
///
/// # Examples
///
/// ```rust
/// use flowcanvas::graph::GraphNode;
/// use flowcanvas::taxonomy::NodeConfig;
///
/// let node = GraphNode::new(NodeConfig::default_for_kind("variable"));
/// assert_eq!(node.config.kind(), "variable");
/// assert!(!node.id.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique within a graph; enforced by the store at mutation time.
    pub id: String,
    #[serde(flatten)]
    pub config: NodeConfig,
}

impl GraphNode {
    /// Creates a node with a fresh UUID id, as the editor's "add node"
    /// action does.
    #[must_use]
    pub fn new(config: NodeConfig) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            config,
        }
    }

    /// Creates a node with an explicit id (document hydration, tests).
    #[must_use]
    pub fn with_id(id: impl Into<String>, config: NodeConfig) -> Self {
        Self {
            id: id.into(),
            config,
        }
    }
}
