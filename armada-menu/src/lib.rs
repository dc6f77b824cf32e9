//! Navigation menu: server-supplied JSON to a renderable forest.
//!
//! The server evaluates permissions and ships the menu as JSON; this
//! crate parses it, pre-sorts siblings by their `order` field, prunes
//! what the user may not see, and hands the tree component a forest of
//! [`trellis::TreeNode`]s carrying [`MenuTarget`] payloads.

pub mod builder;
pub mod label;
pub mod model;

pub use builder::{MenuTarget, to_forest};
pub use label::{action_label, action_label_transform};
pub use model::{MenuEntry, MenuError, parse_menu};
