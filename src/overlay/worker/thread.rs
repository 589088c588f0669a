//! Search Worker Thread
//!
//! Executes remote search requests in a background thread to avoid blocking
//! the UI. Receives requests via channel, runs the fetch with cancellation
//! support, and sends responses back to the main thread.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{Receiver, Sender};

use super::types::{SearchRequest, SearchResponse};
use crate::api::{ApiError, SearchBackend};

/// Spawn the search worker thread
///
/// Creates a background thread that:
/// 1. Listens for search requests on the request channel
/// 2. Executes fetches against the backend with cancellation support
/// 3. Sends responses back via the response channel
///
/// Includes panic handling to prevent TUI corruption.
pub fn spawn_worker<B: SearchBackend>(
    backend: B,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    std::thread::spawn(move || {
        // Set panic hook to prevent TUI corruption
        let response_tx_clone = response_tx.clone();
        let prev_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let panic_msg = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic in search worker".to_string()
            };

            log::error!(
                "Search worker panic: {} at {:?}",
                panic_msg,
                panic_info.location()
            );

            // Try to send error to main thread
            // Use request_id = 0 to indicate worker-level error
            let _ = response_tx_clone.send(SearchResponse::Error {
                message: format!("Search worker crashed: {}", panic_msg),
                term: String::new(), // No specific term for worker-level errors
                request_id: 0,
            });
        }));

        // Wrap worker in catch_unwind
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            // Single-threaded tokio runtime drives the async HTTP calls
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to create tokio runtime");

            rt.block_on(worker_loop(backend, request_rx, response_tx));
        }));

        // Restore panic hook
        panic::set_hook(prev_hook);

        if let Err(e) = result {
            let panic_msg = if let Some(s) = e.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = e.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            log::error!("Search worker thread panicked: {}", panic_msg);
        }
    });
}

/// Main worker loop - processes requests until channel closes
///
/// Uses blocking recv() which is fine in a dedicated thread.
async fn worker_loop<B: SearchBackend>(
    backend: B,
    request_rx: Receiver<SearchRequest>,
    response_tx: Sender<SearchResponse>,
) {
    log::debug!("Search worker thread started");

    while let Ok(request) = request_rx.recv() {
        log::debug!(
            "Worker received request {}: {:?}",
            request.request_id,
            request.term
        );
        handle_request(&backend, request, &response_tx).await;
    }

    log::debug!("Search worker thread shutting down");
}

/// Handle a single search request
async fn handle_request<B: SearchBackend>(
    backend: &B,
    request: SearchRequest,
    response_tx: &Sender<SearchResponse>,
) {
    // Check if already cancelled
    if request.cancel_token.is_cancelled() {
        let _ = response_tx.send(SearchResponse::Cancelled {
            request_id: request.request_id,
        });
        return;
    }

    match backend
        .execute(&request.term, request.limit, &request.cancel_token)
        .await
    {
        Ok(posts) => {
            log::debug!(
                "Request {} returned {} posts",
                request.request_id,
                posts.len()
            );
            let _ = response_tx.send(SearchResponse::Success {
                posts,
                term: request.term,
                request_id: request.request_id,
            });
        }
        Err(ApiError::Cancelled) => {
            log::debug!("Request {} was cancelled", request.request_id);
            let _ = response_tx.send(SearchResponse::Cancelled {
                request_id: request.request_id,
            });
        }
        Err(e) => {
            log::debug!("Request {} failed: {}", request.request_id, e);
            let _ = response_tx.send(SearchResponse::Error {
                message: e.to_string(),
                term: request.term,
                request_id: request.request_id,
            });
        }
    }
}

#[cfg(test)]
#[path = "thread_tests.rs"]
mod thread_tests;
