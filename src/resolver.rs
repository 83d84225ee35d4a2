//! Variable-scope resolution: which named values can a node reference?
//!
//! [`resolve`] computes, for a target node, the full ordered set of
//! declarations legally referenceable from it. It is a pure function over
//! the live [`GraphStore`] (no cache to invalidate) and it is total:
//! malformed attribute content and unknown node kinds contribute nothing
//! instead of failing.
//!
//! # Emission order is a contract
//!
//! Declarations are gathered in four passes, and same-name collisions are
//! resolved by keeping the first occurrence:
//!
//! 1. **Ancestors**: every transitive ancestor of the target (worklist +
//!    visited-set traversal, so loop back-edges terminate) contributes its
//!    taxonomy declarations, tagged [`Visibility::Local`].
//! 2. **Public variables**: every non-private variable node in the graph,
//!    reachable or not, tagged [`Visibility::Global`].
//! 3. **Ambient context**: the six names every scope has, from `body`
//!    through `func_result`.
//! 4. **Graph-wide results**: every database, code, subworkflow, and
//!    function-start node, unconditionally.
//!
//! Pass 4 is deliberately broader than the opt-in model of pass 2. The
//! asymmetry looks unintentional but existing workflow documents depend on
//! it; it is preserved exactly rather than normalized.
//!
//! The loop iteration variable is likewise not scoped to the loop's `do`
//! branch: any ancestor relationship suffices. Both quirks are pinned by
//! the test suite.
//!
//! # Examples
//!
//! ```rust
//! use flowcanvas::graph::{GraphNode, GraphStore};
//! use flowcanvas::resolver::resolve;
//! use flowcanvas::taxonomy::NodeConfig;
//!
//! let mut store = GraphStore::new();
//! store
//!     .add_node(GraphNode::with_id(
//!         "resp",
//!         NodeConfig::default_for_kind("response"),
//!     ))
//!     .unwrap();
//!
//! // Even a fully disconnected node sees the ambient context names.
//! let scope = resolve(&store, "resp");
//! assert!(scope.iter().any(|d| d.name == "params"));
//! assert!(scope.iter().any(|d| d.name == "func_result"));
//! ```

use rustc_hash::FxHashSet;
use tracing::trace;

use crate::graph::GraphStore;
use crate::taxonomy::{NodeConfig, TYPE_ANY, TYPE_OBJECT};
use crate::types::{VariableDeclaration, Visibility};

/// The ambient context names present in every scope, with their type hints.
///
/// These model the request-handling environment the generated backend runs
/// in; they exist whether or not any node declares them.
pub const CONTEXT_NAMES: [(&str, &str); 6] = [
    ("body", TYPE_OBJECT),
    ("query", TYPE_OBJECT),
    ("params", TYPE_OBJECT),
    ("request", TYPE_OBJECT),
    ("user", TYPE_OBJECT),
    ("func_result", TYPE_ANY),
];

/// Resolves the ordered set of declarations referenceable from
/// `target_node_id`.
///
/// The result is deterministic for an unmutated store, never empty (the
/// ambient names are always appended), and contains at most one declaration
/// per name; first emission wins. Termination on cyclic graphs is
/// guaranteed by the visited set, bounded by node count.
#[must_use]
pub fn resolve(store: &GraphStore, target_node_id: &str) -> Vec<VariableDeclaration> {
    let mut out: Vec<VariableDeclaration> = Vec::new();

    // Pass 1: transitive ancestors via explicit worklist. Recursion is
    // unsafe here: loop constructs make back-edges a legitimate shape.
    let mut visited: FxHashSet<String> = FxHashSet::default();
    let mut worklist: Vec<String> = vec![target_node_id.to_string()];
    while let Some(current) = worklist.pop() {
        if !visited.insert(current.clone()) {
            continue;
        }
        for edge in store.incoming_edges(&current) {
            let Some(parent) = store.node(&edge.source) else {
                // Endpoints are validated at mutation time; a hydrated
                // document is trusted, so just skip anything dangling.
                continue;
            };
            parent
                .config
                .declare_into(&parent.id, Visibility::Local, &mut out);
            worklist.push(parent.id.clone());
        }
    }

    // Pass 2: public variables anywhere in the graph, connectivity ignored.
    for node in store.nodes() {
        if node.id == target_node_id {
            continue;
        }
        if let NodeConfig::Variable { is_private, .. } = &node.config {
            if !is_private {
                node.config
                    .declare_into(&node.id, Visibility::Global, &mut out);
            }
        }
    }

    // Pass 3: ambient context names, always present.
    for (name, value_type) in CONTEXT_NAMES {
        out.push(VariableDeclaration::ambient(name, value_type));
    }

    // Pass 4: result variables exposed graph-wide, regardless of
    // reachability or privacy. Broader than pass 2 on purpose; existing
    // documents rely on it.
    for node in store.nodes() {
        if node.config.is_globally_exposed() {
            node.config
                .declare_into(&node.id, Visibility::Global, &mut out);
        }
    }

    // First occurrence wins across the whole emission sequence.
    let mut seen: FxHashSet<String> = FxHashSet::default();
    out.retain(|decl| seen.insert(decl.name.clone()));

    trace!(
        target_node_id,
        ancestors = visited.len().saturating_sub(1),
        declarations = out.len(),
        "resolved scope"
    );
    out
}
