//! Closed icon vocabulary for tree rows.

use crate::node::TreeNode;

/// The fixed set of icons the console renders.
///
/// Names arriving from outside (e.g. a server menu payload) resolve
/// through [`NodeIcon::from_name`]; an unrecognized name resolves to
/// `None`, which renders as no icon at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeIcon {
    Folder,
    FolderOpen,
    Leaf,
    Gauge,
    Crew,
    Vessel,
    Wrench,
    Tariff,
    Document,
    Shield,
    Gear,
}

impl NodeIcon {
    /// Resolve an icon name to a variant. `None` means "no icon".
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "folder" => Some(Self::Folder),
            "folder-open" => Some(Self::FolderOpen),
            "leaf" => Some(Self::Leaf),
            "gauge" | "dashboard" => Some(Self::Gauge),
            "crew" | "users" => Some(Self::Crew),
            "vessel" | "ship" => Some(Self::Vessel),
            "wrench" | "maintenance" => Some(Self::Wrench),
            "tariff" | "coins" => Some(Self::Tariff),
            "document" | "file" => Some(Self::Document),
            "shield" | "roles" => Some(Self::Shield),
            "gear" | "settings" => Some(Self::Gear),
            _ => None,
        }
    }

    /// Terminal glyph for this icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::FolderOpen => "📂",
            Self::Leaf => "📄",
            Self::Gauge => "📊",
            Self::Crew => "👥",
            Self::Vessel => "🚢",
            Self::Wrench => "🔧",
            Self::Tariff => "💰",
            Self::Document => "📋",
            Self::Shield => "🛡",
            Self::Gear => "⚙",
        }
    }
}

/// Effective icon for a node: explicit overrides win, then the
/// open-folder / closed-folder / leaf defaults.
pub fn effective_icon<T>(node: &TreeNode<T>, expanded: bool) -> NodeIcon {
    if node.has_children() {
        if expanded {
            node.expanded_icon
                .or(node.icon)
                .unwrap_or(NodeIcon::FolderOpen)
        } else {
            node.collapsed_icon.or(node.icon).unwrap_or(NodeIcon::Folder)
        }
    } else {
        node.icon.unwrap_or(NodeIcon::Leaf)
    }
}
