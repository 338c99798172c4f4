//! Shared types for the Atrium administration suite
//!
//! Wire-level types used by both portals (via `atrium-client`) and the
//! backend: entity DTOs, the paged-response envelope, error codes and
//! common utility types.

pub mod error;
pub mod models;
pub mod response;
pub mod types;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, ErrorCategory, ErrorCode};
pub use response::Page;
pub use types::{SortDirection, Timestamp};
