//! Graph edge type and the well-known handle names.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Well-known source-handle names for multi-exit nodes.
///
/// A condition node exposes [`TRUE`](handles::TRUE) and
/// [`FALSE`](handles::FALSE) exits; a loop exposes [`DO`](handles::DO)
/// (continuing the body, usually as a back-edge) and
/// [`DONE`](handles::DONE) (the exit after the last iteration).
pub mod handles {
    /// Condition branch taken when the predicate holds.
    pub const TRUE: &str = "true";
    /// Condition branch taken otherwise.
    pub const FALSE: &str = "false";
    /// Loop body continuation.
    pub const DO: &str = "do";
    /// Loop exit after the final iteration.
    pub const DONE: &str = "done";
}

/// A directed edge between two nodes, optionally pinned to named handles on
/// either endpoint.
///
/// Serialized with the document's camelCase handle names; absent handles are
/// omitted from the wire form entirely.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<String>,
    pub target: String,
    #[serde(
        rename = "targetHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub target_handle: Option<String>,
}

impl GraphEdge {
    /// Creates a plain edge with a fresh UUID id.
    #[must_use]
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source: source.into(),
            source_handle: None,
            target: target.into(),
            target_handle: None,
        }
    }

    /// Creates an edge with an explicit id (document hydration, tests).
    #[must_use]
    pub fn with_id(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            source_handle: None,
            target: target.into(),
            target_handle: None,
        }
    }

    /// Pins the edge to a named exit of its source node.
    #[must_use]
    pub fn from_handle(mut self, handle: impl Into<String>) -> Self {
        self.source_handle = Some(handle.into());
        self
    }

    /// Pins the edge to a named input of its target node.
    #[must_use]
    pub fn to_handle(mut self, handle: impl Into<String>) -> Self {
        self.target_handle = Some(handle.into());
        self
    }
}
