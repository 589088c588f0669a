//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. When adding or modifying UI
//! components, add constants to the appropriate module instead of hardcoding
//! `Color::*` values in render files.
//!
//! Theme: Newsprint - warm neutrals with a single teal accent

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    // Text colors - softer than pure white
    pub const TEXT: Color = Color::Rgb(232, 230, 227);
    pub const TEXT_DIM: Color = Color::Rgb(110, 108, 102);
    pub const TEXT_MUTED: Color = Color::Rgb(150, 147, 140);

    // Background colors
    pub const BG_SURFACE: Color = Color::Rgb(32, 31, 30);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(58, 56, 52);

    // Semantic colors
    pub const ACCENT: Color = Color::Rgb(64, 191, 173);
    pub const WARNING: Color = Color::Rgb(235, 203, 95);

    // Shared cursor style for textarea widgets
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Search overlay styles
pub mod overlay {
    use super::*;

    pub const BORDER: Color = palette::ACCENT;
    pub const INPUT_BORDER: Color = Color::Rgb(110, 108, 102);

    pub const POST_TITLE: Color = palette::TEXT;
    pub const POST_META: Color = palette::TEXT_DIM;
    pub const POST_GLYPH: Color = palette::ACCENT;

    pub const QUICK_ACTION: Color = palette::TEXT_MUTED;
    pub const RECOMMENDED: Color = palette::TEXT;

    pub const LOADING: Color = palette::ACCENT;
    pub const EMPTY_STATE: Color = palette::TEXT_DIM;

    pub const SELECTED: Style = Style::new().bg(palette::BG_HIGHLIGHT);
}

/// Start screen and recommended strip styles
pub mod start {
    use super::*;

    pub const TITLE: Color = palette::ACCENT;
    pub const HINT: Color = palette::TEXT_DIM;
    pub const STRIP_BORDER: Color = Color::Rgb(110, 108, 102);
    pub const STRIP_CARD: Color = palette::TEXT;
    pub const ARROW_ACTIVE: Color = palette::ACCENT;
    pub const ARROW_DISABLED: Color = Color::Rgb(70, 68, 64);
    pub const CONFIG_WARNING: Color = palette::WARNING;
}
