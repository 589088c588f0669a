//! Search overlay controller
//!
//! Owns the modal's open/close lifecycle, the debounced dispatch of remote
//! search requests, and the composition of the selectable result list from
//! static quick actions, configured recommended searches, and fetched posts.

pub mod debouncer;
pub mod display;
pub mod item;
pub mod session;
pub mod worker;

// Re-exports for convenience
pub use debouncer::Debouncer;
pub use display::{DisplayRow, compose};
pub use item::{Post, PostFormat, SearchItem, quick_actions, recommended_searches};
pub use session::{SearchSession, SessionOptions};
