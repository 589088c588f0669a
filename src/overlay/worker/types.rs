//! Search Worker Types
//!
//! Channel protocol between the session and the search worker thread.

use tokio_util::sync::CancellationToken;

use crate::overlay::item::Post;

/// Request to run a remote search.
#[derive(Debug)]
pub struct SearchRequest {
    /// The settled query text
    pub term: String,
    /// Maximum number of posts to fetch
    pub limit: u32,
    /// Sequence number; a response whose id no longer matches the latest
    /// issued request is discarded by the session.
    pub request_id: u64,
    /// Token for cancelling this request
    pub cancel_token: CancellationToken,
}

/// Response from the search worker.
#[derive(Debug)]
pub enum SearchResponse {
    /// Fetch succeeded; `posts` replaces the result list wholesale
    Success {
        posts: Vec<Post>,
        term: String,
        request_id: u64,
    },
    /// Fetch failed
    ///
    /// Note: request_id = 0 indicates a worker-level error (applies
    /// regardless of the in-flight id).
    Error {
        message: String,
        term: String,
        request_id: u64,
    },
    /// Fetch was cancelled before completing
    Cancelled { request_id: u64 },
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
