use trellis::{
    MAX_DEPTH, SelectionMode, StateSnapshot, StructureError, TreeNode, TreeState, flatten,
    validate,
};

/// The two-node forest used throughout: a root with one leaf child.
fn small_forest() -> Vec<TreeNode> {
    vec![TreeNode::new("a", "A").child(TreeNode::new("a1variant", "A1"))]
}

/// Three sections with leaves, one of them not selectable.
fn menu_forest() -> Vec<TreeNode> {
    vec![
        TreeNode::new("crew", "Crew")
            .selectable(false)
            .child(TreeNode::new("crew/list", "View"))
            .child(TreeNode::new("crew/create", "Create")),
        TreeNode::new("fleet", "Fleet")
            .selectable(false)
            .child(TreeNode::new("fleet/vessels", "Vessels"))
            .child(TreeNode::new("fleet/maintenance", "Maintenance")),
        TreeNode::new("tariffs", "Tariffs"),
    ]
}

// ============================================================================
// Expansion
// ============================================================================

#[test]
fn test_toggle_expands_then_collapses() {
    let forest = small_forest();
    let mut state = TreeState::new();

    let change = state.toggle(&forest, "a").unwrap();
    assert_eq!(change.node.id, "a");
    assert!(change.expanded);
    assert!(state.is_expanded("a"));

    let change = state.toggle(&forest, "a").unwrap();
    assert_eq!(change.node.id, "a");
    assert!(!change.expanded);
    assert!(!state.is_expanded("a"));
}

#[test]
fn test_double_toggle_restores_initial_expansion() {
    let forest = menu_forest();
    let mut state = TreeState::new().with_expanded(["crew", "fleet"]);

    let _ = state.toggle(&forest, "fleet");
    let _ = state.toggle(&forest, "fleet");

    assert!(state.is_expanded("crew"));
    assert!(state.is_expanded("fleet"));
    assert!(!state.is_expanded("tariffs"));
}

#[test]
fn test_toggle_childless_reports_but_does_not_expand() {
    let forest = small_forest();
    let mut state = TreeState::new().with_expanded(["a"]);

    let change = state.toggle(&forest, "a1variant").unwrap();
    assert_eq!(change.node.id, "a1variant");
    assert!(change.expanded, "attempted target state is reported");
    assert!(!state.is_expanded("a1variant"));
}

#[test]
fn test_toggle_unknown_id_is_inert() {
    let forest = small_forest();
    let mut state = TreeState::new();

    assert!(state.toggle(&forest, "missing").is_none());
    assert!(!state.is_expanded("missing"));
}

#[test]
fn test_expand_collapse_report_only_real_changes() {
    let forest = small_forest();
    let mut state = TreeState::new();

    assert!(state.expand(&forest, "a").is_some());
    assert!(state.expand(&forest, "a").is_none());
    assert!(state.collapse(&forest, "a").is_some());
    assert!(state.collapse(&forest, "a").is_none());

    // leaves cannot expand
    assert!(state.expand(&forest, "a1variant").is_none());
}

#[test]
fn test_multiple_branches_stay_expanded() {
    let forest = menu_forest();
    let mut state = TreeState::new();

    let _ = state.toggle(&forest, "crew");
    let _ = state.toggle(&forest, "fleet");

    assert!(state.is_expanded("crew"));
    assert!(state.is_expanded("fleet"));
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn test_single_mode_replaces_selection() {
    let forest = small_forest();
    let mut state = TreeState::new();

    let change = state.select(&forest, "a").unwrap();
    assert_eq!(change.selected, vec!["a"]);

    let change = state.select(&forest, "a1variant").unwrap();
    assert_eq!(change.selected, vec!["a1variant"]);
    assert_eq!(state.selected_ids(), vec!["a1variant"]);
}

#[test]
fn test_single_mode_reselect_still_reports() {
    let forest = small_forest();
    let mut state = TreeState::new();

    let _ = state.select(&forest, "a");
    let change = state.select(&forest, "a").unwrap();
    assert_eq!(change.selected, vec!["a"]);
}

#[test]
fn test_single_mode_cardinality_at_most_one() {
    let forest = menu_forest();
    let mut state = TreeState::new();

    for id in ["tariffs", "crew/list", "fleet/vessels", "crew/create"] {
        let _ = state.select(&forest, id);
        assert!(state.selected_ids().len() <= 1);
    }
    assert_eq!(state.selected_ids(), vec!["crew/create"]);
}

#[test]
fn test_checkbox_mode_toggle_roundtrip() {
    let forest = small_forest();
    let mut state = TreeState::new().with_mode(SelectionMode::Checkbox);

    let change = state.select(&forest, "a1variant").unwrap();
    assert_eq!(change.selected, vec!["a1variant"]);

    let change = state.select(&forest, "a1variant").unwrap();
    assert!(change.selected.is_empty());
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_multiple_mode_preserves_insertion_order() {
    let forest = menu_forest();
    let mut state = TreeState::new().with_mode(SelectionMode::Multiple);

    let _ = state.select(&forest, "tariffs");
    let _ = state.select(&forest, "crew/list");
    let _ = state.select(&forest, "fleet/vessels");
    assert_eq!(
        state.selected_ids(),
        vec!["tariffs", "crew/list", "fleet/vessels"]
    );

    // removal keeps the remaining order, re-adding appends
    let _ = state.select(&forest, "crew/list");
    assert_eq!(state.selected_ids(), vec!["tariffs", "fleet/vessels"]);
    let _ = state.select(&forest, "crew/list");
    assert_eq!(
        state.selected_ids(),
        vec!["tariffs", "fleet/vessels", "crew/list"]
    );
}

#[test]
fn test_unselectable_node_never_enters_selection() {
    let forest = menu_forest();

    for mode in [
        SelectionMode::Single,
        SelectionMode::Multiple,
        SelectionMode::Checkbox,
    ] {
        let mut state = TreeState::new().with_mode(mode);
        assert!(state.select(&forest, "crew").is_none());
        assert!(state.selected_ids().is_empty());
    }
}

#[test]
fn test_initial_selection_keys_are_filtered() {
    let forest = menu_forest();
    let state = TreeState::new()
        .with_mode(SelectionMode::Multiple)
        .with_selected(&forest, ["crew", "missing", "tariffs"]);

    assert_eq!(state.selected_ids(), vec!["tariffs"]);
}

#[test]
fn test_select_unknown_id_is_inert() {
    let forest = small_forest();
    let mut state = TreeState::new();

    assert!(state.select(&forest, "missing").is_none());
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_select_all_and_deselect_all() {
    let forest = menu_forest();
    let mut state = TreeState::new().with_mode(SelectionMode::Multiple);

    let change = state.select_all(&forest).unwrap();
    assert_eq!(
        change.selected,
        vec![
            "crew/list",
            "crew/create",
            "fleet/vessels",
            "fleet/maintenance",
            "tariffs"
        ]
    );
    // already complete, nothing to report
    assert!(state.select_all(&forest).is_none());

    let change = state.deselect_all().unwrap();
    assert!(change.selected.is_empty());
    assert!(state.deselect_all().is_none());
}

#[test]
fn test_select_all_refused_in_single_mode() {
    let forest = menu_forest();
    let mut state = TreeState::new();

    assert!(state.select_all(&forest).is_none());
    assert!(state.selected_ids().is_empty());
}

#[test]
fn test_expansion_and_selection_stay_independent() {
    let forest = small_forest();
    let mut state = TreeState::new().with_mode(SelectionMode::Checkbox);

    let _ = state.select(&forest, "a");
    let _ = state.toggle(&forest, "a");
    assert_eq!(state.selected_ids(), vec!["a"]);

    let _ = state.toggle(&forest, "a");
    assert_eq!(state.selected_ids(), vec!["a"]);
    let _ = state.select(&forest, "a");
    assert!(!state.is_expanded("a"));
}

// ============================================================================
// Cursor
// ============================================================================

#[test]
fn test_cursor_moves_over_visible_rows() {
    let forest = menu_forest();
    let mut state = TreeState::new().with_expanded(["crew"]);
    // visible: crew, crew/list, crew/create, fleet, tariffs

    assert_eq!(state.cursor_down(&forest), Some((None, 0)));
    assert_eq!(state.cursor_down(&forest), Some((Some(0), 1)));
    assert_eq!(state.cursor_id(&forest).as_deref(), Some("crew/list"));

    assert_eq!(state.cursor_last(&forest), Some((Some(1), 4)));
    assert_eq!(state.cursor_id(&forest).as_deref(), Some("tariffs"));
    assert!(state.cursor_down(&forest).is_none());

    assert_eq!(state.cursor_first(&forest), Some((Some(4), 0)));
    assert!(state.cursor_up(&forest).is_none());
}

#[test]
fn test_cursor_parent_and_first_child() {
    let forest = menu_forest();
    let mut state = TreeState::new().with_expanded(["crew"]);

    let _ = state.cursor_first(&forest);
    assert_eq!(state.cursor_to_first_child(&forest), Some((Some(0), 1)));
    assert_eq!(state.cursor_to_parent(&forest), Some((Some(1), 0)));

    // root rows have no parent
    assert!(state.cursor_to_parent(&forest).is_none());

    // collapsed rows have no visible child
    let _ = state.cursor_last(&forest);
    assert!(state.cursor_to_first_child(&forest).is_none());
}

// ============================================================================
// Structural errors
// ============================================================================

#[test]
fn test_duplicate_visible_id_is_reported() {
    let forest: Vec<TreeNode> = vec![
        TreeNode::new("x", "First"),
        TreeNode::new("x", "Second"),
    ];
    let state = TreeState::new();

    assert_eq!(
        flatten(&forest, &state).unwrap_err(),
        StructureError::DuplicateId("x".into())
    );
}

#[test]
fn test_validate_finds_hidden_duplicates() {
    let forest: Vec<TreeNode> = vec![
        TreeNode::new("a", "A").child(TreeNode::new("dup", "Hidden")),
        TreeNode::new("dup", "Visible"),
    ];
    let state = TreeState::new();

    // the duplicate sits under a collapsed branch, so flatten cannot see it
    assert!(flatten(&forest, &state).is_ok());
    assert_eq!(
        validate(&forest).unwrap_err(),
        StructureError::DuplicateId("dup".into())
    );
}

#[test]
fn test_excessive_depth_is_reported() {
    let mut node: TreeNode = TreeNode::new("leaf", "Leaf");
    for i in (0..MAX_DEPTH).rev() {
        node = TreeNode::new(format!("n{i}"), "N").child(node);
    }
    let forest = vec![node];

    assert!(matches!(
        validate(&forest).unwrap_err(),
        StructureError::DepthExceeded { max: MAX_DEPTH, .. }
    ));
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_snapshot_roundtrip_preserves_state() {
    let forest = menu_forest();
    let mut state = TreeState::new()
        .with_mode(SelectionMode::Multiple)
        .with_expanded(["fleet", "crew"]);
    let _ = state.select(&forest, "tariffs");
    let _ = state.select(&forest, "crew/list");
    let _ = state.cursor_first(&forest);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.expanded, vec!["crew", "fleet"]);
    assert_eq!(snapshot.selected, vec!["tariffs", "crew/list"]);

    let restored = TreeState::restore(snapshot.clone());
    assert_eq!(restored.mode(), SelectionMode::Multiple);
    assert!(restored.is_expanded("crew"));
    assert!(restored.is_expanded("fleet"));
    assert_eq!(restored.selected_ids(), vec!["tariffs", "crew/list"]);
    assert_eq!(restored.cursor(), Some(0));
    assert_eq!(restored.snapshot(), snapshot);
}

#[test]
fn test_snapshot_serializes() {
    let forest = small_forest();
    let mut state = TreeState::new().with_expanded(["a"]);
    let _ = state.select(&forest, "a1variant");

    let json = serde_json::to_string(&state.snapshot()).unwrap();
    let parsed: StateSnapshot = serde_json::from_str(&json).unwrap();
    let restored = TreeState::restore(parsed);

    assert!(restored.is_expanded("a"));
    assert_eq!(restored.selected_ids(), vec!["a1variant"]);
}
