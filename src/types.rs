//! Core types shared across the flowcanvas graph model.
//!
//! This module defines the small domain primitives used by the taxonomy and
//! resolver: declaration visibility, interface transfer modes, and the
//! [`VariableDeclaration`] records the resolver emits.
//!
//! # Examples
//!
//! ```rust
//! use flowcanvas::types::{TransferMode, Visibility};
//!
//! assert_eq!(TransferMode::Query.prefix(), "query");
//! assert_eq!(Visibility::Local.to_string(), "local");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a declaration entered the scope of the node being resolved.
///
/// - `Local`: contributed by a transitive ancestor of the target node.
/// - `Global`: contributed by a graph-wide pass (public variables, ambient
///   context names, or the unconditional result-variable pass), regardless
///   of connectivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible through upstream connectivity.
    Local,
    /// Visible everywhere in the workflow.
    Global,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => write!(f, "local"),
            Self::Global => write!(f, "global"),
        }
    }
}

/// The prefix under which an interface schema exposes its fields when
/// attached to an API trigger.
///
/// A schema configured with [`TransferMode::Query`] and a field `page`
/// contributes the declaration `query.page` downstream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransferMode {
    /// Request body fields (`body.*`). The default.
    #[default]
    Body,
    /// Query-string fields (`query.*`).
    Query,
    /// Path parameters (`params.*`).
    Params,
}

impl TransferMode {
    /// The dotted-path prefix for this mode.
    #[must_use]
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Query => "query",
            Self::Params => "params",
        }
    }
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// A named, typed value a node contributes to downstream scope.
///
/// Declarations are produced transiently by the resolver; they are never
/// stored on the graph. `value_type` is a loose hint (`"number"`, `"any"`,
/// `"object"`, ...) surfaced to suggestion UIs, not a checked type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    /// The referenceable name, possibly dotted (`cfg.retries.max`).
    pub name: String,
    /// Loose type hint for editor surfaces.
    pub value_type: String,
    /// Id of the node that declared this value; `None` for the ambient
    /// context names that exist in every scope.
    pub origin: Option<String>,
    /// Whether the declaration came from ancestor connectivity or a
    /// graph-wide pass.
    pub visibility: Visibility,
}

impl VariableDeclaration {
    /// Creates a declaration contributed by a node.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        value_type: impl Into<String>,
        origin: impl Into<String>,
        visibility: Visibility,
    ) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            origin: Some(origin.into()),
            visibility,
        }
    }

    /// Creates an ambient declaration with no originating node.
    #[must_use]
    pub fn ambient(name: impl Into<String>, value_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value_type: value_type.into(),
            origin: None,
            visibility: Visibility::Global,
        }
    }
}
