//! Hierarchical selectable tree component.
//!
//! The caller owns an immutable forest of [`TreeNode`]s; a [`TreeState`]
//! owns the expansion set, the selection, and the row cursor. Mutating
//! operations return the resulting change for the caller to forward
//! wherever it needs to go, and the rendering driver turns the visible
//! rows into styled [`Row`]s.

pub mod error;
pub mod flatten;
pub mod icon;
pub mod node;
pub mod render;
pub mod row;
pub mod selection;
pub mod snapshot;
pub mod state;
pub mod theme;

pub use error::{MAX_DEPTH, StructureError};
pub use flatten::{FlatNode, flatten, validate};
pub use icon::{NodeIcon, effective_icon};
pub use node::{TreeNode, find};
pub use render::{NodeContext, render_forest, render_forest_with, render_with_at};
pub use row::{Rgb, Row, Span, SpanStyle};
pub use selection::{Selection, SelectionMode};
pub use snapshot::StateSnapshot;
pub use state::{ExpandChange, SelectionChange, TreeState};
pub use theme::TreeTheme;
