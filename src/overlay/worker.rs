//! Search Worker Module
//!
//! Runs remote search requests in a background thread so the UI never blocks
//! on the network. Receives requests via channel, executes the fetch with
//! cancellation support, and sends responses back to the main thread.
//!
//! ## Architecture
//!
//! - Single background thread with std::sync::mpsc channels
//! - Blocking recv() in the dedicated thread, a current-thread tokio runtime
//!   drives the async HTTP call
//! - Panic hook to prevent TUI corruption
//! - Request/Response pattern with sequence ids and cancellation tokens

pub mod thread;
pub mod types;

// Re-exports for convenience
pub use thread::spawn_worker;
pub use types::{SearchRequest, SearchResponse};
