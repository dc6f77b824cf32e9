//! Tree node model.

use crate::icon::NodeIcon;

/// A node in a caller-supplied forest.
///
/// Nodes are plain data: the component never mutates them, and every
/// operation takes the forest by shared reference. `id` must be unique
/// across the whole forest; traversal reports repeats as a structural
/// error.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T = ()> {
    pub id: String,
    pub label: String,
    /// An empty vec means "no children"; there is no separate absent
    /// representation.
    pub children: Vec<TreeNode<T>>,
    /// When false the node can never enter the selection set.
    pub selectable: bool,
    pub icon: Option<NodeIcon>,
    pub expanded_icon: Option<NodeIcon>,
    pub collapsed_icon: Option<NodeIcon>,
    /// Opaque caller data, untouched by the component.
    pub payload: Option<T>,
}

impl<T> TreeNode<T> {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            children: Vec::new(),
            selectable: true,
            icon: None,
            expanded_icon: None,
            collapsed_icon: None,
            payload: None,
        }
    }

    pub fn child(mut self, child: TreeNode<T>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = TreeNode<T>>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn icon(mut self, icon: NodeIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn expanded_icon(mut self, icon: NodeIcon) -> Self {
        self.expanded_icon = Some(icon);
        self
    }

    pub fn collapsed_icon(mut self, icon: NodeIcon) -> Self {
        self.collapsed_icon = Some(icon);
        self
    }

    pub fn payload(mut self, payload: T) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Whether this node can be expanded.
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Find a node by id anywhere in the forest.
///
/// Explicit-stack pre-order walk; ids are looked up lazily, so an id
/// missing from the forest is simply `None`.
pub fn find<'f, T>(forest: &'f [TreeNode<T>], id: &str) -> Option<&'f TreeNode<T>> {
    let mut stack: Vec<&TreeNode<T>> = forest.iter().rev().collect();
    while let Some(node) = stack.pop() {
        if node.id == id {
            return Some(node);
        }
        stack.extend(node.children.iter().rev());
    }
    None
}
