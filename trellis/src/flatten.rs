//! Visible-row traversal.

use std::collections::HashSet;

use crate::error::{MAX_DEPTH, StructureError};
use crate::node::TreeNode;
use crate::state::TreeState;

/// One visible row of a flattened forest.
#[derive(Debug, Clone)]
pub struct FlatNode<'f, T> {
    pub node: &'f TreeNode<T>,
    pub depth: u16,
    pub expanded: bool,
    pub selected: bool,
    pub has_children: bool,
}

/// Flatten the visible portion of the forest in pre-order.
///
/// Descends into children only when a node has them and is expanded. The
/// walk is iterative with an explicit stack; repeated ids and nesting
/// beyond [`MAX_DEPTH`] are reported as structural errors.
pub fn flatten<'f, T>(
    forest: &'f [TreeNode<T>],
    state: &TreeState,
) -> Result<Vec<FlatNode<'f, T>>, StructureError> {
    let mut rows = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&TreeNode<T>, u16)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if depth >= MAX_DEPTH {
            return Err(StructureError::DepthExceeded {
                id: node.id.clone(),
                max: MAX_DEPTH,
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(StructureError::DuplicateId(node.id.clone()));
        }

        let has_children = node.has_children();
        let expanded = has_children && state.is_expanded(&node.id);
        rows.push(FlatNode {
            node,
            depth,
            expanded,
            selected: state.is_selected(&node.id),
            has_children,
        });

        if expanded {
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    Ok(rows)
}

/// Validate the whole forest, ignoring expansion state.
///
/// Same checks as [`flatten`], applied to every node; useful as an eager
/// boundary check before handing a forest to a state object.
pub fn validate<T>(forest: &[TreeNode<T>]) -> Result<(), StructureError> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&TreeNode<T>, u16)> = forest.iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        if depth >= MAX_DEPTH {
            return Err(StructureError::DepthExceeded {
                id: node.id.clone(),
                max: MAX_DEPTH,
            });
        }
        if !seen.insert(node.id.as_str()) {
            return Err(StructureError::DuplicateId(node.id.clone()));
        }
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    Ok(())
}
