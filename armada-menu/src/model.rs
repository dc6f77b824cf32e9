//! Server menu payload model.

use serde::Deserialize;
use thiserror::Error;

/// One entry of the server-supplied navigation menu.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuEntry {
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub route: Option<String>,
    /// Sibling sort key. Sorting happens here, before the tree ever
    /// sees the forest.
    #[serde(default)]
    pub order: i32,
    /// Action codes granted to the current user.
    #[serde(default)]
    pub actions: Vec<String>,
    /// Server-side permission verdict.
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub children: Vec<MenuEntry>,
}

fn default_visible() -> bool {
    true
}

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("malformed menu payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Parse the raw menu payload.
pub fn parse_menu(payload: &str) -> Result<Vec<MenuEntry>, MenuError> {
    Ok(serde_json::from_str(payload)?)
}
