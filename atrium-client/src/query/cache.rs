//! Process-wide query cache
//!
//! Read results are stored under hierarchical [`QueryKey`]s with a
//! freshness window per query. Invalidation marks a key subtree stale
//! without dropping the data, so stale pages stay available for
//! placeholder rendering until the next fetch replaces them. At most
//! one fetch per exact key is in flight at a time.

use dashmap::DashMap;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::key::QueryKey;
use crate::error::ClientResult;

/// Freshness windows for one resource's cached reads
#[derive(Debug, Clone, Copy)]
pub struct Freshness {
    pub list_ttl: Duration,
    pub detail_ttl: Duration,
}

impl Freshness {
    /// Rarely-changing master data (companies, tags, products)
    pub const MASTER: Freshness = Freshness {
        list_ttl: Duration::from_secs(300),
        detail_ttl: Duration::from_secs(300),
    };

    /// Frequently-changing listings (employees, finance records)
    pub const VOLATILE: Freshness = Freshness {
        list_ttl: Duration::from_secs(30),
        detail_ttl: Duration::from_secs(60),
    };
}

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    stored_at: Instant,
    stale: bool,
}

/// Keyed result cache shared by every resource binding
#[derive(Default)]
pub struct QueryCache {
    entries: DashMap<QueryKey, CacheEntry>,
    inflight: DashMap<QueryKey, Arc<Mutex<()>>>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_value<T: Send + Sync + 'static>(
        &self,
        key: &QueryKey,
        ttl: Duration,
    ) -> Option<Arc<T>> {
        let entry = self.entries.get(key)?;
        if entry.stale || entry.stored_at.elapsed() >= ttl {
            return None;
        }
        entry.value.clone().downcast::<T>().ok()
    }

    /// Cached data under the exact key, regardless of freshness
    pub fn peek<T: Send + Sync + 'static>(&self, key: &QueryKey) -> Option<Arc<T>> {
        let entry = self.entries.get(key)?;
        entry.value.clone().downcast::<T>().ok()
    }

    /// Store a value under a key, marking it fresh
    pub fn insert<T: Send + Sync + 'static>(&self, key: QueryKey, value: Arc<T>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
                stale: false,
            },
        );
    }

    /// Fetch-through read with per-key request coalescing
    ///
    /// Returns the cached value when it is fresh; otherwise runs
    /// `fetch` and stores the result. Concurrent callers for the same
    /// key wait on the first caller's fetch instead of issuing their
    /// own. Errors are propagated and never cached.
    pub async fn get_or_fetch<T, F, Fut>(
        &self,
        key: &QueryKey,
        ttl: Duration,
        fetch: F,
    ) -> ClientResult<Arc<T>>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        if let Some(value) = self.fresh_value(key, ttl) {
            return Ok(value);
        }

        let gate = self
            .inflight
            .entry(key.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _held = gate.lock().await;

        // A coalesced caller finds the entry the winner stored.
        if let Some(value) = self.fresh_value(key, ttl) {
            return Ok(value);
        }

        let value = Arc::new(fetch().await?);
        self.insert(key.clone(), value.clone());
        Ok(value)
    }

    /// Mark every entry under the key subtree stale
    pub fn invalidate(&self, prefix: &QueryKey) {
        for mut entry in self.entries.iter_mut() {
            if entry.key().starts_with(prefix) {
                entry.stale = true;
            }
        }
    }

    /// Drop every entry under the key subtree
    pub fn remove(&self, prefix: &QueryKey) {
        self.entries.retain(|key, _| !key.starts_with(prefix));
    }

    /// Whether the exact key currently holds an entry
    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
