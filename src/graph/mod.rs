//! The in-memory workflow graph: nodes, edges, and the mutable store.
//!
//! A workflow is a directed graph of typed nodes. Edges may carry named
//! handles (`true`/`false` on conditions, `do`/`done` on loops) to
//! disambiguate multiple exits, and loop constructs intentionally create
//! back-edges; the store never rejects cycles.
//!
//! [`GraphStore`] owns one workflow's collections and exposes the mutation
//! and lookup surface; all scope computation lives in
//! [`resolver`](crate::resolver).

mod edges;
mod nodes;
mod store;

pub use edges::{GraphEdge, handles};
pub use nodes::GraphNode;
pub use store::{GraphError, GraphStore};
