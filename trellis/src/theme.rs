//! Row appearance.

use crate::row::{Rgb, SpanStyle};

/// Glyphs and colors the default row renderer uses.
#[derive(Debug, Clone)]
pub struct TreeTheme {
    /// Spaces of indentation per depth level.
    pub indent_width: usize,
    pub expanded_glyph: &'static str,
    pub collapsed_glyph: &'static str,
    pub checked_glyph: &'static str,
    pub unchecked_glyph: &'static str,
    pub affordance: SpanStyle,
    pub icon: SpanStyle,
    pub label: SpanStyle,
    pub selected_label: SpanStyle,
    pub cursor_label: SpanStyle,
    /// Pure label lookup applied to every displayed label; identity for
    /// unrecognized input.
    pub label_transform: Option<fn(&str) -> String>,
}

impl Default for TreeTheme {
    fn default() -> Self {
        Self {
            indent_width: 2,
            expanded_glyph: "▼ ",
            collapsed_glyph: "▶ ",
            checked_glyph: "[x] ",
            unchecked_glyph: "[ ] ",
            affordance: SpanStyle::new().foreground(Rgb::new(215, 175, 95)),
            icon: SpanStyle::new().foreground(Rgb::new(135, 175, 215)),
            label: SpanStyle::new(),
            selected_label: SpanStyle::new().foreground(Rgb::new(95, 215, 255)).bold(),
            cursor_label: SpanStyle::new().bold(),
            label_transform: None,
        }
    }
}

impl TreeTheme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    pub fn label_transform(mut self, transform: fn(&str) -> String) -> Self {
        self.label_transform = Some(transform);
        self
    }
}
