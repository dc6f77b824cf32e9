//! Serializable state snapshots.
//!
//! Persistence across sessions is the caller's job: capture a snapshot,
//! store it anywhere, restore on the next construction.

use serde::{Deserialize, Serialize};

use crate::selection::SelectionMode;
use crate::state::TreeState;

/// Point-in-time copy of a tree's state.
///
/// A snapshot is trusted to match the forest it was captured from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    pub mode: SelectionMode,
    pub expanded: Vec<String>,
    /// Insertion order is preserved.
    pub selected: Vec<String>,
    pub cursor: Option<usize>,
}

impl TreeState {
    /// Capture the current state.
    pub fn snapshot(&self) -> StateSnapshot {
        // HashSet iteration order is arbitrary
        let mut expanded: Vec<String> = self.expanded.iter().cloned().collect();
        expanded.sort();
        StateSnapshot {
            mode: self.mode,
            expanded,
            selected: self.selection.to_vec(),
            cursor: self.cursor,
        }
    }

    /// Rebuild state from a snapshot.
    pub fn restore(snapshot: StateSnapshot) -> Self {
        let mut state = TreeState::new()
            .with_mode(snapshot.mode)
            .with_expanded(snapshot.expanded);
        for id in &snapshot.selected {
            state.selection.insert(id);
        }
        state.cursor = snapshot.cursor;
        state
    }
}
