use std::time::Duration;

use super::input_state::InputState;
use super::strip::CardStrip;
use crate::config::Config;
use crate::navigate::Router;
use crate::overlay::display::{DisplayRow, compose};
use crate::overlay::item::{SearchItem, quick_actions, recommended_searches};
use crate::overlay::session::{SearchSession, SessionOptions};
use crate::slider::SnapSlider;

/// Application state
pub struct App {
    pub session: SearchSession,
    pub input: InputState,
    pub slider: SnapSlider<CardStrip>,
    pub router: Router,
    /// Selected index into the composed overlay rows
    pub selected: usize,
    recommended: Vec<SearchItem>,
    quick_actions: Vec<SearchItem>,
    config_warning: Option<String>,
    should_quit: bool,
    dirty: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &Config) -> Self {
        let mut slider = SnapSlider::new();
        slider.attach(CardStrip::new());

        Self {
            session: SearchSession::new(SessionOptions {
                search_limit: config.api.search_limit,
                debounce: Duration::from_millis(config.search.debounce_ms),
            }),
            input: InputState::new(),
            slider,
            router: Router::new(),
            selected: 0,
            recommended: recommended_searches(&config.search.recommended),
            quick_actions: quick_actions(),
            config_warning: None,
            should_quit: false,
            dirty: true,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// Check if the UI needs a redraw
    pub fn should_render(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Surface a configuration warning on the start screen
    pub fn show_config_warning(&mut self, warning: String) {
        self.config_warning = Some(warning);
    }

    pub fn config_warning(&self) -> Option<&str> {
        self.config_warning.as_deref()
    }

    /// The destination recorded by a selection, if any
    pub fn navigation(&self) -> Option<&str> {
        self.router.destination()
    }

    pub(super) fn recommended(&self) -> &[SearchItem] {
        &self.recommended
    }

    /// The overlay list in final display order
    pub fn rows(&self) -> Vec<DisplayRow<'_>> {
        compose(&self.session, &self.recommended, &self.quick_actions)
    }

    pub fn open_overlay(&mut self) {
        self.session.open();
        self.selected = 0;
        self.mark_dirty();
    }

    pub fn select_next(&mut self) {
        let len = self.rows().len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Activate the selected row: resolve its navigation target, close the
    /// overlay, and quit so the destination can be handed over. Indicator
    /// rows resolve to no selection and nothing happens.
    pub fn activate_selection(&mut self) {
        let selection = self
            .rows()
            .get(self.selected)
            .and_then(|row| row.selection());

        self.session.select(selection.as_ref(), &mut self.router);

        if self.router.destination().is_some() {
            self.should_quit = true;
        }
    }

    /// Forward an edit to the session and reset the selection to the top
    pub fn query_edited(&mut self) {
        let text = self.input.query().to_string();
        self.session.set_query_text(text);
        self.selected = 0;
    }

    /// Advance the strip's smooth scroll; each step that moves the offset is
    /// delivered to the tracker as a scroll notification.
    pub fn step_strip_animation(&mut self) -> bool {
        let moved = self
            .slider
            .container_mut()
            .map(|strip| strip.step_animation())
            .unwrap_or(false);
        if moved {
            self.slider.on_scroll();
        }
        moved
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
