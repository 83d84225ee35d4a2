//! The mutable store for one workflow's nodes and edges.

use miette::Diagnostic;
use thiserror::Error;
use tracing::debug;

use super::edges::GraphEdge;
use super::nodes::GraphNode;

/// Errors raised by store mutations.
///
/// Reads never fail: dangling references are rejected when an edge is
/// added, so the resolver can assume edge endpoints exist.
#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    /// An edge referenced a node id that is not in the store.
    #[error("edge '{edge_id}' references missing node '{node_id}'")]
    #[diagnostic(
        code(flowcanvas::graph::invalid_reference),
        help("Add the node before connecting an edge to it.")
    )]
    InvalidReference { edge_id: String, node_id: String },

    /// A node was added with an id already present in the store.
    #[error("node id '{0}' is already present in the graph")]
    #[diagnostic(code(flowcanvas::graph::duplicate_node))]
    DuplicateNode(String),

    /// An edge was added with an id already present in the store.
    #[error("edge id '{0}' is already present in the graph")]
    #[diagnostic(code(flowcanvas::graph::duplicate_edge))]
    DuplicateEdge(String),
}

/// Holds the node and edge collections for one open workflow.
///
/// Mutations keep insertion order, and that order is load-bearing: the
/// resolver's graph-wide passes iterate nodes in store order, and its
/// first-wins deduplication makes the ordering observable. The store
/// performs no scope computation itself.
///
/// Each open workflow owns its own store instance; there is no shared
/// global. The expected usage is single-threaded editor callbacks mutating
/// the store in sequence.
///
/// # Examples
///
/// ```rust
/// use flowcanvas::graph::{GraphEdge, GraphNode, GraphStore};
/// use flowcanvas::taxonomy::NodeConfig;
///
/// let mut store = GraphStore::new();
/// let a = GraphNode::new(NodeConfig::default_for_kind("variable"));
/// let b = GraphNode::new(NodeConfig::default_for_kind("response"));
/// let edge = GraphEdge::new(&a.id, &b.id);
///
/// store.add_node(a).unwrap();
/// store.add_node(b).unwrap();
/// store.add_edge(edge).unwrap();
/// assert_eq!(store.node_count(), 2);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphStore {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl GraphStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing collections without re-validating
    /// them.
    ///
    /// Invariants are enforced at mutation time, not read time; documents
    /// loaded from the workflow service are trusted as-is.
    #[must_use]
    pub fn from_parts(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    /// Adds a node, rejecting duplicate ids.
    pub fn add_node(&mut self, node: GraphNode) -> Result<(), GraphError> {
        if self.node(&node.id).is_some() {
            return Err(GraphError::DuplicateNode(node.id));
        }
        debug!(node_id = %node.id, kind = node.config.kind(), "add node");
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node by id, cascading removal of every edge that touches
    /// it. Returns the removed node, or `None` if the id was absent.
    pub fn remove_node(&mut self, id: &str) -> Option<GraphNode> {
        let index = self.nodes.iter().position(|n| n.id == id)?;
        let node = self.nodes.remove(index);
        let before = self.edges.len();
        self.edges.retain(|e| e.source != id && e.target != id);
        debug!(
            node_id = %id,
            cascaded_edges = before - self.edges.len(),
            "remove node"
        );
        Some(node)
    }

    /// Adds an edge, rejecting unknown endpoints and duplicate ids.
    ///
    /// Cycles are never rejected: loop constructs legitimately connect a
    /// `do` exit back into the loop body.
    pub fn add_edge(&mut self, edge: GraphEdge) -> Result<(), GraphError> {
        for endpoint in [&edge.source, &edge.target] {
            if self.node(endpoint).is_none() {
                return Err(GraphError::InvalidReference {
                    edge_id: edge.id,
                    node_id: endpoint.clone(),
                });
            }
        }
        if self.edges.iter().any(|e| e.id == edge.id) {
            return Err(GraphError::DuplicateEdge(edge.id));
        }
        debug!(edge_id = %edge.id, source = %edge.source, target = %edge.target, "add edge");
        self.edges.push(edge);
        Ok(())
    }

    /// Removes an edge by id. Returns the removed edge, or `None` if the id
    /// was absent.
    pub fn remove_edge(&mut self, id: &str) -> Option<GraphEdge> {
        let index = self.edges.iter().position(|e| e.id == id)?;
        debug!(edge_id = %id, "remove edge");
        Some(self.edges.remove(index))
    }

    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Mutable lookup for in-place attribute edits.
    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// All nodes, in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// All edges, in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Edges whose target is `target_id`, in insertion order.
    pub fn incoming_edges<'a>(
        &'a self,
        target_id: &'a str,
    ) -> impl Iterator<Item = &'a GraphEdge> {
        self.edges.iter().filter(move |e| e.target == target_id)
    }

    /// Number of nodes in the store.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True when the store holds no nodes and no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// Replaces the store's contents with clones of the given collections.
    ///
    /// This is how undo/redo applies a snapshot back onto the live graph.
    pub fn replace(&mut self, nodes: &[GraphNode], edges: &[GraphEdge]) {
        debug!(nodes = nodes.len(), edges = edges.len(), "replace store contents");
        self.nodes = nodes.to_vec();
        self.edges = edges.to_vec();
    }
}
