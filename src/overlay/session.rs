use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::navigate::Navigator;
use crate::overlay::debouncer::{DEFAULT_QUIET_PERIOD, Debouncer};
use crate::overlay::item::{Post, SearchItem};
use crate::overlay::worker::{SearchRequest, SearchResponse};

/// Tunables for a search session, sourced from configuration.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Maximum number of posts fetched per query
    pub search_limit: u32,
    /// Quiet period before a query edit dispatches a fetch
    pub debounce: Duration,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            search_limit: 8,
            debounce: DEFAULT_QUIET_PERIOD,
        }
    }
}

/// Search overlay controller.
///
/// Owns the open/close lifecycle, the query text, and the reconciliation of
/// asynchronous search responses against the latest issued request. All
/// network work happens in the search worker; this type only exchanges
/// channel messages with it from the UI event loop.
pub struct SearchSession {
    is_open: bool,
    /// Latched by close(); the reset applies when the close transition ends
    pending_reset: bool,
    query_text: String,
    is_loading: bool,
    posts: Vec<Post>,
    debouncer: Debouncer,
    search_limit: u32,

    // Async execution support
    /// Channel to send search requests to the worker
    request_tx: Option<Sender<SearchRequest>>,
    /// Channel to receive search responses from the worker
    response_rx: Option<Receiver<SearchResponse>>,
    /// Current request ID counter (starts at 1, 0 reserved for worker errors)
    next_request_id: u64,
    /// ID of currently in-flight request, if any
    in_flight_request_id: Option<u64>,
    /// Cancellation token for current request
    current_cancel_token: Option<CancellationToken>,
}

impl SearchSession {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            is_open: false,
            pending_reset: false,
            query_text: String::new(),
            is_loading: false,
            posts: Vec::new(),
            debouncer: Debouncer::new(options.debounce),
            search_limit: options.search_limit,
            request_tx: None,
            response_rx: None,
            next_request_id: 1, // Reserve 0 for worker errors
            in_flight_request_id: None,
            current_cancel_token: None,
        }
    }

    /// Attach the worker channels. Without them, dispatches are dropped.
    pub fn set_channels(
        &mut self,
        request_tx: Sender<SearchRequest>,
        response_rx: Receiver<SearchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn query_text(&self) -> &str {
        &self.query_text
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// True once close() has run but the close transition has not finished.
    pub fn close_pending(&self) -> bool {
        !self.is_open && self.pending_reset
    }

    /// Show the overlay. Prior session state persists until the close-reset,
    /// except that a reset still owed from an unfinished close applies first
    /// so every open starts clean.
    pub fn open(&mut self) {
        if self.pending_reset {
            self.apply_reset();
        }
        self.is_open = true;
    }

    /// Hide the overlay and latch the reset. Idempotent.
    pub fn close(&mut self) {
        self.is_open = false;
        self.pending_reset = true;
    }

    /// Called by the owner when the close transition ends; applies the reset
    /// so the next open starts with an empty query and no results.
    pub fn finish_close(&mut self) {
        if self.pending_reset {
            self.apply_reset();
        }
    }

    fn apply_reset(&mut self) {
        self.query_text.clear();
        self.posts.clear();
        self.cancel_in_flight();
        self.debouncer.mark_fired();
        self.is_loading = false;
        self.pending_reset = false;
    }

    /// Store raw input immediately and re-arm the debounce timer.
    ///
    /// The previous query's rows are dropped right away: they must never
    /// render under newer text. An empty query never fetches; it also drops
    /// any pending or in-flight work.
    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.query_text = text.into();
        self.posts.clear();

        if self.query_text.is_empty() {
            self.cancel_in_flight();
            self.debouncer.mark_fired();
            self.is_loading = false;
        } else {
            self.debouncer.schedule();
        }
    }

    /// Event-loop hook: fires the debounced dispatch once the quiet period
    /// has elapsed since the last edit. Returns true if a fetch was
    /// dispatched (visible state changed to loading).
    pub fn tick(&mut self) -> bool {
        if self.debouncer.should_fire() {
            self.debouncer.mark_fired();
            let term = self.query_text.clone();
            if !term.is_empty() {
                self.dispatch(term);
                return true;
            }
        }
        false
    }

    /// Send a search request to the worker.
    ///
    /// Automatically cancels any in-flight request before starting a new one.
    fn dispatch(&mut self, term: String) {
        self.cancel_in_flight();

        // Allocate new request ID
        let request_id = self.next_request_id;
        self.next_request_id = self.next_request_id.wrapping_add(1);

        // Skip 0 on wrap (reserved for worker errors)
        if self.next_request_id == 0 {
            self.next_request_id = 1;
        }

        log::debug!("Dispatching search request {} for {:?}", request_id, term);

        let cancel_token = CancellationToken::new();
        self.current_cancel_token = Some(cancel_token.clone());
        self.in_flight_request_id = Some(request_id);

        if let Some(ref tx) = self.request_tx {
            let request = SearchRequest {
                term,
                limit: self.search_limit,
                request_id,
                cancel_token,
            };

            // If send fails, worker died - clear channels
            if tx.send(request).is_err() {
                log::error!("Search worker disconnected - send failed");
                self.request_tx = None;
                self.response_rx = None;
                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.is_loading = false;
            } else {
                self.is_loading = true;
            }
        } else {
            log::debug!("No search worker attached; dropping dispatch");
            self.in_flight_request_id = None;
            self.current_cancel_token = None;
        }
    }

    /// Cancel in-flight request if any
    pub fn cancel_in_flight(&mut self) {
        if let Some(token) = self.current_cancel_token.take() {
            token.cancel();
            log::debug!("Cancelled request {:?}", self.in_flight_request_id);
        }
        self.in_flight_request_id = None;
        self.is_loading = false;
    }

    /// Poll for search responses (non-blocking)
    ///
    /// Call this in the main event loop to check for settled fetches.
    /// Returns true if visible state changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        // Take the receiver temporarily to avoid borrow checker issues
        let rx = match self.response_rx.take() {
            Some(rx) => rx,
            None => return false,
        };

        // Process all available responses
        loop {
            match rx.try_recv() {
                Ok(response) => {
                    if self.process_response(response) {
                        changed = true;
                    }
                }
                Err(TryRecvError::Empty) => {
                    // Put receiver back and break
                    self.response_rx = Some(rx);
                    break;
                }
                Err(TryRecvError::Disconnected) => {
                    log::error!("Search worker disconnected in poll_response");
                    self.request_tx = None;
                    if self.in_flight_request_id.is_some() {
                        self.in_flight_request_id = None;
                        self.current_cancel_token = None;
                        self.is_loading = false;
                        changed = true;
                    }
                    // Don't put receiver back - it's disconnected
                    break;
                }
            }
        }

        changed
    }

    /// Apply a single response.
    ///
    /// A response lands only if its id matches the latest issued request and
    /// the overlay is still open: a slow fetch settling after newer input or
    /// after close must not repopulate the list.
    fn process_response(&mut self, response: SearchResponse) -> bool {
        let current_request_id = self.in_flight_request_id;

        match response {
            SearchResponse::Success {
                posts,
                term,
                request_id,
            } => {
                // Ignore stale responses
                if Some(request_id) != current_request_id {
                    log::debug!(
                        "Ignoring stale result for {:?} from request {} (current: {:?})",
                        term,
                        request_id,
                        current_request_id
                    );
                    return false;
                }

                self.in_flight_request_id = None;
                self.current_cancel_token = None;
                self.is_loading = false;

                if !self.is_open {
                    log::debug!(
                        "Discarding result for {:?}: overlay closed while request {} was in flight",
                        term,
                        request_id
                    );
                    return false;
                }

                self.posts = posts;
                true
            }
            SearchResponse::Error {
                message,
                term,
                request_id,
            } => {
                // Worker-level errors (request_id == 0) always apply
                // Request-level errors only apply if they match current request
                if request_id == 0 || Some(request_id) == current_request_id {
                    self.in_flight_request_id = None;
                    self.current_cancel_token = None;
                    self.is_loading = false;
                    self.posts.clear();
                    // Degrades to the generic empty state; logged, never
                    // surfaced as a distinct error message
                    log::error!("Search for {:?} failed: {}", term, message);
                    return true;
                }

                log::debug!(
                    "Ignoring stale error from request {} (current: {:?})",
                    request_id,
                    current_request_id
                );
                false
            }
            SearchResponse::Cancelled { request_id } => {
                // Only clear in-flight if it matches
                if Some(request_id) == current_request_id {
                    self.in_flight_request_id = None;
                    self.current_cancel_token = None;
                    self.is_loading = false;
                }
                false
            }
        }
    }

    /// Check if a fetch is currently pending
    pub fn is_pending(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Resolve and dispatch the navigation for a selected item, then close
    /// the overlay. A missing selection is a no-op.
    pub fn select(&mut self, item: Option<&SearchItem>, navigator: &mut dyn Navigator) {
        let Some(item) = item else { return };

        let target = item.navigation_target(&self.query_text);
        navigator.navigate_to(&target);
        self.close();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
