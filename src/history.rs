//! Bounded undo/redo history over graph snapshots.
//!
//! [`HistoryManager`] keeps an append-only list of [`Snapshot`]s plus a
//! cursor. It knows nothing about scope resolution; callers snapshot the
//! store right *after* each meaningful mutation completes, so the entry at
//! the cursor always equals "current state immediately after the last
//! snapshot-worthy action". Undo and redo hand back a snapshot for the
//! caller to apply onto the store (see
//! [`GraphStore::replace`](crate::graph::GraphStore::replace)); the manager
//! itself never touches the graph.
//!
//! # Examples
//!
//! ```rust
//! use flowcanvas::graph::{GraphNode, GraphStore};
//! use flowcanvas::history::HistoryManager;
//! use flowcanvas::taxonomy::NodeConfig;
//!
//! let mut store = GraphStore::new();
//! let mut history = HistoryManager::new();
//! history.snapshot(&store); // empty baseline
//!
//! store
//!     .add_node(GraphNode::with_id("v1", NodeConfig::default_for_kind("variable")))
//!     .unwrap();
//! history.snapshot(&store);
//!
//! let previous = history.undo().unwrap().clone();
//! store.replace(&previous.nodes, &previous.edges);
//! assert!(store.is_empty());
//! ```

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::graph::{GraphEdge, GraphNode, GraphStore};

/// Maximum number of retained snapshots; the oldest are evicted beyond
/// this.
pub const MAX_ENTRIES: usize = 50;

/// An immutable value copy of the full node/edge collections at one point
/// in time.
///
/// `taken_at` is bookkeeping only: structural equality (and therefore
/// snapshot deduplication) compares nodes and edges, not timestamps.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    pub taken_at: DateTime<Utc>,
}

impl Snapshot {
    /// Captures the current contents of a store.
    #[must_use]
    pub fn capture(store: &GraphStore) -> Self {
        Self::from_parts(store.nodes().to_vec(), store.edges().to_vec())
    }

    /// Builds a snapshot from already-cloned collections.
    #[must_use]
    pub fn from_parts(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self {
            nodes,
            edges,
            taken_at: Utc::now(),
        }
    }
}

impl PartialEq for Snapshot {
    fn eq(&self, other: &Self) -> bool {
        // Cheap count comparison first; deep equality only when the shapes
        // match.
        self.nodes.len() == other.nodes.len()
            && self.edges.len() == other.edges.len()
            && self.nodes == other.nodes
            && self.edges == other.edges
    }
}

/// Append-only snapshot stack with a cursor, capped at [`MAX_ENTRIES`].
#[derive(Clone, Debug, Default)]
pub struct HistoryManager {
    entries: Vec<Snapshot>,
    /// Index of the snapshot representing "now"; `None` while empty.
    cursor: Option<usize>,
}

impl HistoryManager {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the store's current state.
    ///
    /// No-ops when the new snapshot is structurally equal to the one at the
    /// cursor. Otherwise any redo branch past the cursor is discarded, the
    /// snapshot is appended, and the oldest entries are evicted if the list
    /// exceeds [`MAX_ENTRIES`]. Returns whether an entry was recorded.
    pub fn snapshot(&mut self, store: &GraphStore) -> bool {
        self.push(Snapshot::capture(store))
    }

    /// [`snapshot`](Self::snapshot) over raw collections, for callers that
    /// track nodes and edges outside a store.
    pub fn snapshot_parts(&mut self, nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> bool {
        self.push(Snapshot::from_parts(nodes, edges))
    }

    fn push(&mut self, candidate: Snapshot) -> bool {
        if let Some(cursor) = self.cursor {
            if self.entries[cursor] == candidate {
                return false;
            }
            // Taking a new snapshot from an undone position abandons the
            // redo branch.
            self.entries.truncate(cursor + 1);
        }

        self.entries.push(candidate);
        let mut cursor = self.entries.len() - 1;

        while self.entries.len() > MAX_ENTRIES {
            self.entries.remove(0);
            cursor = cursor.saturating_sub(1);
        }
        self.cursor = Some(cursor);

        debug!(entries = self.entries.len(), cursor, "snapshot recorded");
        true
    }

    /// Steps the cursor back and returns the snapshot now current, or
    /// `None` at the oldest retained entry (state unchanged).
    pub fn undo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.entries.get(cursor - 1)
    }

    /// Steps the cursor forward and returns the snapshot now current, or
    /// `None` at the newest entry (state unchanged).
    pub fn redo(&mut self) -> Option<&Snapshot> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.entries.get(cursor + 1)
    }

    /// True when [`undo`](Self::undo) would return a snapshot.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(c) if c > 0)
    }

    /// True when [`redo`](Self::redo) would return a snapshot.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(c) if c + 1 < self.entries.len())
    }

    /// Number of retained snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no snapshot has been taken yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
