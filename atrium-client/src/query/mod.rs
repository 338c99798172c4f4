//! Query cache layer
//!
//! Hierarchical cache keys, the process-wide cache and the cached
//! per-resource bindings.

pub mod cache;
pub mod cached;
pub mod key;

pub use cache::{Freshness, QueryCache};
pub use cached::Cached;
pub use key::{EntityKeys, KeySegment, QueryKey};
