//! Default and template-override row rendering.

use std::collections::HashSet;

use crate::error::StructureError;
use crate::flatten::FlatNode;
use crate::icon::effective_icon;
use crate::node::TreeNode;
use crate::row::{Row, Span};
use crate::selection::SelectionMode;
use crate::state::TreeState;
use crate::theme::TreeTheme;

/// Render context handed to a node template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeContext {
    pub depth: u16,
    pub expanded: bool,
    pub selected: bool,
    pub has_children: bool,
}

/// Render the visible rows with the default row appearance.
///
/// Indentation grows by `theme.indent_width` per depth level; the toggle
/// affordance appears only on nodes with children, the checkbox
/// affordance only in `Checkbox` mode.
pub fn render_forest<T>(
    forest: &[TreeNode<T>],
    state: &TreeState,
    theme: &TreeTheme,
) -> Result<Vec<Row>, StructureError> {
    let rows = state.visible(forest)?;
    let cursor = state.cursor();
    Ok(rows
        .iter()
        .enumerate()
        .map(|(index, flat)| default_row(flat, cursor == Some(index), state.mode(), theme))
        .collect())
}

/// Render with a caller-supplied node template.
///
/// The template's returned block is used verbatim for each node: no
/// default affordances are added and the driver does not descend into
/// the node's children. A template that wants nested output renders the
/// node's children itself (e.g. by calling this driver on them at the
/// next depth).
pub fn render_forest_with<T, F>(
    forest: &[TreeNode<T>],
    state: &TreeState,
    template: F,
) -> Result<Vec<Row>, StructureError>
where
    F: Fn(&TreeNode<T>, &NodeContext) -> Vec<Row>,
{
    render_with_at(forest, state, 0, &template)
}

/// Template rendering at an explicit starting depth, for templates that
/// recurse into child forests.
pub fn render_with_at<T, F>(
    forest: &[TreeNode<T>],
    state: &TreeState,
    depth: u16,
    template: &F,
) -> Result<Vec<Row>, StructureError>
where
    F: Fn(&TreeNode<T>, &NodeContext) -> Vec<Row>,
{
    let mut out = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for node in forest {
        if !seen.insert(node.id.as_str()) {
            return Err(StructureError::DuplicateId(node.id.clone()));
        }
        let has_children = node.has_children();
        let ctx = NodeContext {
            depth,
            expanded: has_children && state.is_expanded(&node.id),
            selected: state.is_selected(&node.id),
            has_children,
        };
        out.extend(template(node, &ctx));
    }
    Ok(out)
}

fn default_row<T>(
    flat: &FlatNode<'_, T>,
    at_cursor: bool,
    mode: SelectionMode,
    theme: &TreeTheme,
) -> Row {
    let mut row = Row::new();

    if flat.depth > 0 {
        row.push(Span::raw(
            " ".repeat(theme.indent_width * flat.depth as usize),
        ));
    }

    if flat.has_children {
        let glyph = if flat.expanded {
            theme.expanded_glyph
        } else {
            theme.collapsed_glyph
        };
        row.push(Span::styled(glyph, theme.affordance));
    } else {
        // alignment filler in place of the toggle affordance
        row.push(Span::raw(" ".repeat(theme.collapsed_glyph.chars().count())));
    }

    if mode == SelectionMode::Checkbox {
        let glyph = if flat.selected {
            theme.checked_glyph
        } else {
            theme.unchecked_glyph
        };
        row.push(Span::styled(glyph, theme.affordance));
    }

    let icon = effective_icon(flat.node, flat.expanded);
    row.push(Span::styled(format!("{} ", icon.glyph()), theme.icon));

    let label = match theme.label_transform {
        Some(transform) => transform(&flat.node.label),
        None => flat.node.label.clone(),
    };
    let style = if at_cursor {
        theme.cursor_label
    } else if flat.selected {
        theme.selected_label
    } else {
        theme.label
    };
    row.push(Span::styled(label, style));

    row
}
