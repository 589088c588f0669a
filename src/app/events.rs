use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;

use super::state::App;

/// Timeout for event polling - drives the debounce timer, response polling,
/// and the strip's scroll animation between key presses
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        // Fire a pending debounced dispatch before processing new events
        if self.session.tick() {
            self.mark_dirty();
        }

        // Apply settled fetches
        if self.session.poll_response() {
            self.mark_dirty();
        }

        // The close transition ends on the tick after close()
        if self.session.close_pending() {
            self.session.finish_close();
            self.input.reset();
            self.selected = 0;
            self.mark_dirty();
        }

        // Smooth scroll of the recommended strip
        if self.step_strip_animation() {
            self.mark_dirty();
        }

        // Poll with timeout so the timers above keep running while idle
        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                // Check that it's a key press event to avoid duplicates
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event);
                }
                // Handle paste events (bracketed paste mode)
                Event::Paste(text) => {
                    self.handle_paste_event(text);
                }
                Event::Resize(_, _) => {
                    self.mark_dirty();
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Handle paste events from bracketed paste mode
    ///
    /// Inserts all pasted text at once; the dispatch still debounces.
    fn handle_paste_event(&mut self, text: String) {
        if !self.session.is_open() {
            self.open_overlay();
        }
        self.input.textarea.insert_str(&text);
        self.query_edited();
        self.mark_dirty();
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C always quits
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.request_quit();
            return;
        }

        if self.session.is_open() {
            self.handle_overlay_key(key);
        } else {
            self.handle_start_key(key);
        }
        self.mark_dirty();
    }

    /// Keys on the start screen (overlay closed)
    fn handle_start_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('/') | KeyCode::Char('s') => self.open_overlay(),
            KeyCode::Left | KeyCode::Char('h') => self.slider.scroll_to_prev_slide(),
            KeyCode::Right | KeyCode::Char('l') => self.slider.scroll_to_next_slide(),
            KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
            _ => {}
        }
    }

    /// Keys while the search overlay is open
    fn handle_overlay_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.session.close(),
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Enter => self.activate_selection(),
            _ => {
                // Everything else edits the query line
                if self.input.textarea.input(key) {
                    self.query_edited();
                }
            }
        }
    }
}
