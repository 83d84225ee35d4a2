//! The serialized workflow document and the remote service boundary.
//!
//! The core touches exactly one external surface: the workflow document
//! exchanged with the backend service. [`WorkflowService`] abstracts the
//! three operations collaborators must support (load, save, execute). The
//! core never performs network I/O itself; execution results are opaque
//! beyond the [`ExecutionReport`] envelope.

use async_trait::async_trait;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::graph::{GraphEdge, GraphNode, GraphStore};
use crate::taxonomy::NodeConfig;

/// What a workflow is for: an HTTP route, a reusable function, or a shared
/// interface schema.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkflowCategory {
    #[default]
    Route,
    Function,
    Interface,
}

/// The document shape exchanged with the workflow service.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub category: WorkflowCategory,
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub edges: Vec<GraphEdge>,
}

impl WorkflowDocument {
    /// Serializes the live store into a document for saving.
    #[must_use]
    pub fn from_store(
        id: impl Into<String>,
        name: impl Into<String>,
        category: WorkflowCategory,
        store: &GraphStore,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            category,
            nodes: store.nodes().to_vec(),
            edges: store.edges().to_vec(),
        }
    }

    /// Hydrates a store from this document.
    ///
    /// Documents from the service are trusted as-is; invariants are
    /// enforced at mutation time, not on load.
    #[must_use]
    pub fn into_store(self) -> GraphStore {
        GraphStore::from_parts(self.nodes, self.edges)
    }

    /// The API trigger nodes of this workflow, with their method and path.
    pub fn api_routes(&self) -> impl Iterator<Item = (&GraphNode, &str, &str)> {
        self.nodes.iter().filter_map(|node| match &node.config {
            NodeConfig::ApiEndpoint { method, path, .. } => {
                Some((node, method.as_str(), path.as_str()))
            }
            _ => None,
        })
    }
}

/// Checks whether `method` + `path` is already claimed by an API trigger in
/// any of `documents`, ignoring the workflow named by `exclude_id`.
///
/// Comparison normalizes the way the service does: surrounding slashes are
/// stripped and the method is case-insensitive. Returns the first
/// conflicting document.
pub fn find_route_conflict<'a, I>(
    documents: I,
    method: &str,
    path: &str,
    exclude_id: Option<&str>,
) -> Option<&'a WorkflowDocument>
where
    I: IntoIterator<Item = &'a WorkflowDocument>,
{
    let wanted_path = path.trim_matches('/');
    let wanted_method = method.to_ascii_uppercase();
    documents.into_iter().find(|doc| {
        if exclude_id == Some(doc.id.as_str()) {
            return false;
        }
        doc.api_routes().any(|(_, m, p)| {
            p.trim_matches('/') == wanted_path && m.eq_ignore_ascii_case(&wanted_method)
        })
    })
}

/// Outcome status of a remote execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Error,
}

/// Envelope returned by [`WorkflowService::execute`]. Opaque to the core:
/// nothing here is interpreted beyond pass-through.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutionReport {
    pub status: ExecutionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub logs: Vec<String>,
}

/// Failures surfaced by a [`WorkflowService`] implementation.
#[derive(Debug, Error, Diagnostic)]
pub enum WorkflowServiceError {
    /// No workflow with the requested id.
    #[error("workflow '{id}' was not found")]
    #[diagnostic(code(flowcanvas::service::not_found))]
    NotFound { id: String },

    /// The service rejected the request (validation, conflicts, auth).
    #[error("workflow service rejected the request: {reason}")]
    #[diagnostic(code(flowcanvas::service::rejected))]
    Rejected { reason: String },

    /// The service could not be reached or answered malformed data.
    #[error("workflow service transport failure: {message}")]
    #[diagnostic(
        code(flowcanvas::service::transport),
        help("Check connectivity to the workflow service and retry.")
    )]
    Transport { message: String },

    /// A document failed to serialize or deserialize.
    #[error(transparent)]
    #[diagnostic(code(flowcanvas::service::serde_json))]
    Serde(#[from] serde_json::Error),
}

/// The remote workflow service the editor collaborates with.
///
/// Implementations own all transport concerns. The core only ever supplies
/// which API-trigger node to start execution from.
#[async_trait]
pub trait WorkflowService: Send + Sync {
    /// Fetches a workflow document by id.
    async fn load(&self, id: &str) -> Result<WorkflowDocument, WorkflowServiceError>;

    /// Persists the given graph collections as workflow `id`.
    async fn save(
        &self,
        id: &str,
        nodes: &[GraphNode],
        edges: &[GraphEdge],
    ) -> Result<(), WorkflowServiceError>;

    /// Runs workflow `id` starting from the API-trigger node
    /// `start_node_id` with the given input payload.
    async fn execute(
        &self,
        id: &str,
        start_node_id: &str,
        input: Value,
    ) -> Result<ExecutionReport, WorkflowServiceError>;
}
