//! Display labels for short action codes.

/// Map a short action code to its display string.
///
/// Pure lookup; unrecognized input is returned unchanged.
pub fn action_label(code: &str) -> &str {
    match code {
        "LIST" => "View",
        "CREATE" => "Create",
        "UPDATE" => "Edit",
        "DELETE" => "Delete",
        "EXPORT" => "Export",
        _ => code,
    }
}

/// [`action_label`] in the shape the row renderer's transform hook takes.
pub fn action_label_transform(label: &str) -> String {
    action_label(label).to_string()
}
