//! Selection state for tree consumers.

use serde::{Deserialize, Serialize};

/// Selection-set cardinality and toggle policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one selected id; selecting replaces the set.
    #[default]
    Single,
    /// Selecting toggles membership.
    Multiple,
    /// Same set semantics as `Multiple`, rendered with a checkbox
    /// affordance.
    Checkbox,
}

/// Insertion-ordered id selection.
///
/// The order is the emission order: existing entries keep their position,
/// new entries append.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected ids in insertion order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|i| i == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Replace the set with exactly `id`.
    /// Returns false if the set already consisted of exactly `id`.
    pub fn replace(&mut self, id: &str) -> bool {
        let changed = self.ids.len() != 1 || self.ids[0] != id;
        self.ids.clear();
        self.ids.push(id.to_string());
        changed
    }

    /// Toggle membership.
    /// Returns true if the id was inserted, false if it was removed.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|i| i == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Append `id` unless already present. Returns true if it was added.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.is_selected(id) {
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Clear the set. Returns the ids that were removed, in order.
    pub fn clear(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ids)
    }
}
