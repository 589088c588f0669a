use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

use crate::theme;

/// Query input state
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    /// Create a new InputState
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        // Configure for single-line input
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(theme::overlay::INPUT_BORDER)),
        );
        textarea.set_placeholder_text("Type to search...");
        textarea.set_cursor_style(theme::palette::CURSOR);

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    /// Get the current query text
    pub fn query(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Clear the input line
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}
