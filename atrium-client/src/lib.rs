//! Atrium Client - HTTP client SDK for the Atrium backend
//!
//! Typed per-resource clients over the Atrium REST API, plus a query
//! cache with hierarchical keys, per-resource freshness windows and
//! write-path invalidation.

pub mod api;
pub mod config;
pub mod context;
pub mod error;
pub mod exports;
pub mod http;
pub mod query;
pub mod resources;

pub use api::AtriumClient;
pub use config::ClientConfig;
pub use context::SessionContext;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use query::cache::{Freshness, QueryCache};
pub use query::cached::Cached;
pub use query::key::{EntityKeys, QueryKey};

// Re-export shared types for convenience
pub use shared::{AppError, ErrorCode, Page, SortDirection};
