//! Build a renderable forest from menu entries.

use trellis::{NodeIcon, TreeNode};

use crate::model::MenuEntry;

/// What activating a menu leaf means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuTarget {
    pub route: Option<String>,
    pub action: Option<String>,
}

/// Convert menu entries into a forest.
///
/// Siblings are stable-sorted by `order` at every level before
/// conversion; the tree itself never sorts. Hidden entries and groups
/// left with nothing to show are pruned. Granted action codes become
/// child leaves labeled with the raw code — the renderer's label
/// transform turns codes into display strings.
pub fn to_forest(entries: &[MenuEntry]) -> Vec<TreeNode<MenuTarget>> {
    build_level(entries, "")
}

fn build_level(entries: &[MenuEntry], parent_id: &str) -> Vec<TreeNode<MenuTarget>> {
    let mut sorted: Vec<&MenuEntry> = entries.iter().collect();
    sorted.sort_by_key(|entry| entry.order);
    sorted
        .into_iter()
        .filter_map(|entry| build_entry(entry, parent_id))
        .collect()
}

fn build_entry(entry: &MenuEntry, parent_id: &str) -> Option<TreeNode<MenuTarget>> {
    if !entry.visible {
        log::debug!("pruning hidden menu entry {:?}", entry.title);
        return None;
    }

    let id = if parent_id.is_empty() {
        slug(&entry.title)
    } else {
        format!("{parent_id}/{}", slug(&entry.title))
    };

    let mut children = build_level(&entry.children, &id);
    for code in &entry.actions {
        children.push(
            TreeNode::new(format!("{id}/{}", code.to_lowercase()), code.clone()).payload(
                MenuTarget {
                    route: entry.route.clone(),
                    action: Some(code.clone()),
                },
            ),
        );
    }

    if children.is_empty() && entry.route.is_none() {
        log::debug!("pruning empty menu group {:?}", entry.title);
        return None;
    }

    let icon = entry.icon.as_deref().and_then(|name| {
        let icon = NodeIcon::from_name(name);
        if icon.is_none() {
            log::debug!("unrecognized icon name {name:?} for {:?}", entry.title);
        }
        icon
    });

    let has_children = !children.is_empty();
    let mut node = TreeNode::new(id, entry.title.clone())
        .selectable(!has_children)
        .children(children);
    if let Some(icon) = icon {
        node = node.icon(icon);
    }
    if !has_children {
        node = node.payload(MenuTarget {
            route: entry.route.clone(),
            action: None,
        });
    }
    Some(node)
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c.to_ascii_lowercase() })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_menu;

    fn entry(title: &str, order: i32) -> MenuEntry {
        MenuEntry {
            title: title.to_string(),
            icon: None,
            route: Some(format!("/{}", slug(title))),
            order,
            actions: Vec::new(),
            visible: true,
            children: Vec::new(),
        }
    }

    #[test]
    fn sorts_siblings_by_order_at_every_level() {
        let entries = vec![
            MenuEntry {
                children: vec![entry("Beta", 2), entry("Alpha", 1)],
                route: None,
                ..entry("Fleet", 5)
            },
            entry("Dashboard", 1),
        ];

        let forest = to_forest(&entries);
        assert_eq!(forest[0].id, "dashboard");
        assert_eq!(forest[1].id, "fleet");
        assert_eq!(forest[1].children[0].id, "fleet/alpha");
        assert_eq!(forest[1].children[1].id, "fleet/beta");
    }

    #[test]
    fn prunes_hidden_entries_and_empty_groups() {
        let entries = vec![
            MenuEntry {
                visible: false,
                ..entry("Hidden", 1)
            },
            MenuEntry {
                route: None,
                children: vec![MenuEntry {
                    visible: false,
                    ..entry("Gone", 1)
                }],
                ..entry("Empty group", 2)
            },
            entry("Tariffs", 3),
        ];

        let forest = to_forest(&entries);
        assert_eq!(forest.len(), 1);
        assert_eq!(forest[0].id, "tariffs");
    }

    #[test]
    fn groups_are_not_selectable_leaves_are() {
        let entries = vec![MenuEntry {
            route: None,
            children: vec![entry("Vessels", 1)],
            ..entry("Fleet", 1)
        }];

        let forest = to_forest(&entries);
        assert!(!forest[0].selectable);
        assert!(forest[0].children[0].selectable);
    }

    #[test]
    fn action_codes_become_leaves_with_targets() {
        let entries = vec![MenuEntry {
            actions: vec!["LIST".to_string(), "DELETE".to_string()],
            ..entry("Crew", 1)
        }];

        let forest = to_forest(&entries);
        let crew = &forest[0];
        assert!(!crew.selectable);
        assert_eq!(crew.children.len(), 2);
        assert_eq!(crew.children[0].id, "crew/list");
        assert_eq!(crew.children[0].label, "LIST");
        assert_eq!(
            crew.children[0].payload,
            Some(MenuTarget {
                route: Some("/crew".to_string()),
                action: Some("LIST".to_string()),
            })
        );
    }

    #[test]
    fn unrecognized_icon_name_resolves_to_none() {
        let entries = vec![MenuEntry {
            icon: Some("sparkles".to_string()),
            ..entry("Dashboard", 1)
        }];
        let forest = to_forest(&entries);
        assert_eq!(forest[0].icon, None);

        let entries = vec![MenuEntry {
            icon: Some("vessel".to_string()),
            ..entry("Fleet", 1)
        }];
        let forest = to_forest(&entries);
        assert_eq!(forest[0].icon, Some(NodeIcon::Vessel));
    }

    #[test]
    fn built_forest_validates() {
        let payload = r#"[
            {"title": "Dashboard", "icon": "dashboard", "route": "/dashboard", "order": 1},
            {"title": "Crew", "icon": "crew", "route": "/crew", "order": 2,
             "actions": ["LIST", "CREATE", "UPDATE", "DELETE"]},
            {"title": "Fleet", "icon": "vessel", "order": 3, "children": [
                {"title": "Vessels", "route": "/fleet/vessels", "order": 1, "actions": ["LIST"]},
                {"title": "Maintenance", "route": "/fleet/maintenance", "order": 2}
            ]}
        ]"#;

        let entries = parse_menu(payload).unwrap();
        let forest = to_forest(&entries);
        trellis::validate(&forest).unwrap();
        assert_eq!(forest.len(), 3);
    }
}
