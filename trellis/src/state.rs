//! Expansion, selection, and cursor state for one tree instance.

use std::collections::HashSet;

use crate::error::StructureError;
use crate::flatten::{FlatNode, flatten};
use crate::node::{TreeNode, find};
use crate::selection::{Selection, SelectionMode};

/// Expansion change for one node.
///
/// `expanded` is the new state — or the attempted target state when the
/// node has no children and the set was left untouched.
#[derive(Debug, Clone)]
pub struct ExpandChange<'f, T> {
    pub node: &'f TreeNode<T>,
    pub expanded: bool,
}

/// Selection change: the full resulting id sequence in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub selected: Vec<String>,
}

/// State owned by one tree instance.
///
/// The forest stays with the caller and is passed into each operation;
/// the state owns only the expansion set, the selection, and the row
/// cursor. Expanding never affects the selection and vice versa.
#[derive(Debug, Clone, Default)]
pub struct TreeState {
    pub(crate) mode: SelectionMode,
    pub(crate) expanded: HashSet<String>,
    pub(crate) selection: Selection,
    pub(crate) cursor: Option<usize>,
}

impl TreeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selection mode.
    pub fn with_mode(mut self, mode: SelectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Seed the expansion set. Ids unknown to the forest or belonging to
    /// childless nodes are tolerated; they never match a toggleable row.
    pub fn with_expanded<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Seed the selection. Ids that are unknown to the forest or whose
    /// nodes are not selectable are dropped.
    pub fn with_selected<T, I, S>(mut self, forest: &[TreeNode<T>], ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for id in ids {
            let id = id.into();
            match find(forest, &id) {
                Some(node) if node.selectable => {
                    if self.mode == SelectionMode::Single {
                        self.selection.replace(&id);
                    } else {
                        self.selection.insert(&id);
                    }
                }
                _ => log::debug!("dropping initial selection key {id:?}"),
            }
        }
        self
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Selected ids in insertion order.
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection.to_vec()
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// Flip the expansion of `id`.
    ///
    /// Ids not present in the forest are inert. A childless node leaves
    /// the set untouched but still reports the attempted target state.
    pub fn toggle<'f, T>(
        &mut self,
        forest: &'f [TreeNode<T>],
        id: &str,
    ) -> Option<ExpandChange<'f, T>> {
        let node = find(forest, id)?;
        let target = !self.expanded.contains(id);
        if node.has_children() {
            if target {
                self.expanded.insert(id.to_string());
            } else {
                self.expanded.remove(id);
            }
        }
        Some(ExpandChange {
            node,
            expanded: target,
        })
    }

    /// Expand `id`. Reports a change only when the set actually grew.
    pub fn expand<'f, T>(
        &mut self,
        forest: &'f [TreeNode<T>],
        id: &str,
    ) -> Option<ExpandChange<'f, T>> {
        let node = find(forest, id)?;
        if node.has_children() && self.expanded.insert(id.to_string()) {
            Some(ExpandChange {
                node,
                expanded: true,
            })
        } else {
            None
        }
    }

    /// Collapse `id`. Reports a change only when the set actually shrank.
    pub fn collapse<'f, T>(
        &mut self,
        forest: &'f [TreeNode<T>],
        id: &str,
    ) -> Option<ExpandChange<'f, T>> {
        let node = find(forest, id)?;
        if self.expanded.remove(id) {
            Some(ExpandChange {
                node,
                expanded: false,
            })
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Select `id` according to the current mode.
    ///
    /// Nodes marked not selectable never change the set and never report
    /// a change. In `Single` mode re-selecting the sole member still
    /// reports the resulting set.
    pub fn select<T>(&mut self, forest: &[TreeNode<T>], id: &str) -> Option<SelectionChange> {
        let node = find(forest, id)?;
        if !node.selectable {
            return None;
        }
        match self.mode {
            SelectionMode::Single => {
                self.selection.replace(id);
            }
            SelectionMode::Multiple | SelectionMode::Checkbox => {
                self.selection.toggle(id);
            }
        }
        Some(SelectionChange {
            selected: self.selection.to_vec(),
        })
    }

    /// Select every selectable node. `Multiple` and `Checkbox` modes only.
    pub fn select_all<T>(&mut self, forest: &[TreeNode<T>]) -> Option<SelectionChange> {
        if self.mode == SelectionMode::Single {
            return None;
        }
        let mut changed = false;
        let mut stack: Vec<&TreeNode<T>> = forest.iter().rev().collect();
        while let Some(node) = stack.pop() {
            if node.selectable && self.selection.insert(&node.id) {
                changed = true;
            }
            stack.extend(node.children.iter().rev());
        }
        changed.then(|| SelectionChange {
            selected: self.selection.to_vec(),
        })
    }

    /// Clear the selection.
    pub fn deselect_all(&mut self) -> Option<SelectionChange> {
        let removed = self.selection.clear();
        (!removed.is_empty()).then(|| SelectionChange {
            selected: Vec::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Visible rows for the current expansion and selection state.
    pub fn visible<'f, T>(
        &self,
        forest: &'f [TreeNode<T>],
    ) -> Result<Vec<FlatNode<'f, T>>, StructureError> {
        flatten(forest, self)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Id of the row under the cursor.
    pub fn cursor_id<T>(&self, forest: &[TreeNode<T>]) -> Option<String> {
        let rows = flatten(forest, self).ok()?;
        self.cursor
            .and_then(|i| rows.get(i))
            .map(|row| row.node.id.clone())
    }

    /// Move the cursor to `index` if it addresses a visible row.
    /// Returns the previous position.
    pub fn set_cursor<T>(&mut self, forest: &[TreeNode<T>], index: usize) -> Option<usize> {
        let previous = self.cursor;
        if index < self.visible_len(forest) {
            self.cursor = Some(index);
        }
        previous
    }

    /// Move the cursor up one row. Returns `(previous, new)` on movement.
    pub fn cursor_up<T>(&mut self, forest: &[TreeNode<T>]) -> Option<(Option<usize>, usize)> {
        let len = self.visible_len(forest);
        let previous = self.cursor;
        match self.cursor {
            Some(cursor) if cursor > 0 => {
                self.cursor = Some(cursor - 1);
                Some((previous, cursor - 1))
            }
            None if len > 0 => {
                self.cursor = Some(0);
                Some((None, 0))
            }
            _ => None,
        }
    }

    /// Move the cursor down one row. Returns `(previous, new)` on movement.
    pub fn cursor_down<T>(&mut self, forest: &[TreeNode<T>]) -> Option<(Option<usize>, usize)> {
        let len = self.visible_len(forest);
        let previous = self.cursor;
        match self.cursor {
            Some(cursor) if cursor + 1 < len => {
                self.cursor = Some(cursor + 1);
                Some((previous, cursor + 1))
            }
            None if len > 0 => {
                self.cursor = Some(0);
                Some((None, 0))
            }
            _ => None,
        }
    }

    /// Move the cursor to the first row.
    pub fn cursor_first<T>(&mut self, forest: &[TreeNode<T>]) -> Option<(Option<usize>, usize)> {
        if self.visible_len(forest) == 0 {
            return None;
        }
        let previous = self.cursor;
        self.cursor = Some(0);
        Some((previous, 0))
    }

    /// Move the cursor to the last row.
    pub fn cursor_last<T>(&mut self, forest: &[TreeNode<T>]) -> Option<(Option<usize>, usize)> {
        let len = self.visible_len(forest);
        if len == 0 {
            return None;
        }
        let previous = self.cursor;
        self.cursor = Some(len - 1);
        Some((previous, len - 1))
    }

    /// Move the cursor to the parent of the current row.
    pub fn cursor_to_parent<T>(&mut self, forest: &[TreeNode<T>]) -> Option<(Option<usize>, usize)> {
        let rows = flatten(forest, self).ok()?;
        let cursor = self.cursor?;
        let depth = rows.get(cursor)?.depth;
        if depth == 0 {
            return None;
        }
        let parent = rows[..cursor].iter().rposition(|row| row.depth < depth)?;
        let previous = self.cursor;
        self.cursor = Some(parent);
        Some((previous, parent))
    }

    /// Move the cursor to the first child of the current (expanded) row.
    pub fn cursor_to_first_child<T>(
        &mut self,
        forest: &[TreeNode<T>],
    ) -> Option<(Option<usize>, usize)> {
        let rows = flatten(forest, self).ok()?;
        let cursor = self.cursor?;
        let row = rows.get(cursor)?;
        if !row.expanded {
            return None;
        }
        let first_child = cursor + 1;
        if first_child < rows.len() && rows[first_child].depth == row.depth + 1 {
            let previous = self.cursor;
            self.cursor = Some(first_child);
            Some((previous, first_child))
        } else {
            None
        }
    }

    fn visible_len<T>(&self, forest: &[TreeNode<T>]) -> usize {
        flatten(forest, self).map(|rows| rows.len()).unwrap_or(0)
    }
}
