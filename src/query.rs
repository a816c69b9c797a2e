//! Keyed async query cache with request coalescing.
//!
//! This module provides [`QueryCache`], which memoizes an asynchronous fetch
//! by its numeric key, similar in spirit to SWR or TanStack Query but without
//! staleness or invalidation: every entry is fetched exactly once per process
//! lifetime.
//!
//! # Design Pattern: One Entry, Many Observers
//!
//! Each cache entry is a [`tokio::sync::watch`] channel holding the current
//! [`QueryState`]. The first caller for a key creates the entry in `Loading`
//! and spawns the fetch; every caller (including the first) gets a receiver
//! for the same channel. Observers can poll the current state with
//! [`QueryCache::state`] or await transitions on the receiver, and late
//! subscribers immediately see the terminal state.
//!
//! # Example
//!
//! ```rust
//! use dogdex::query::{QueryCache, QueryState};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let cache: QueryCache<Vec<String>> = QueryCache::new(|limit| {
//!     Box::pin(async move {
//!         Ok((0..limit).map(|n| format!("item-{n}")).collect())
//!     })
//! });
//!
//! let mut entry = cache.fetch(Some(3));
//! let state = entry
//!     .wait_for(QueryState::is_terminal)
//!     .await
//!     .expect("cache entry should stay alive")
//!     .clone();
//! assert_eq!(state.data().map(Vec::len), Some(3));
//! # }
//! ```

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use futures::future::BoxFuture;
use thiserror::Error;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;
use tracing::debug;

/// Limit applied when the caller omits one.
///
/// This matches the remote endpoint's own default, which is *not* the same as
/// the demo UI's selector default of 5.
pub const DEFAULT_LIMIT: u32 = 10;

/// Error type for query operations.
///
/// All three variants are captured into the entry's [`QueryState::Error`];
/// none of them propagate as panics or unhandled faults.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The request never reached the remote endpoint (DNS, connection
    /// refused, transport-level timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status (unauthorized,
    /// rate-limited, ...).
    #[error("http status {0}")]
    Http(u16),

    /// The response body was not valid JSON or did not match the expected
    /// shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// The lifecycle status of one cache entry.
///
/// An entry transitions monotonically `Uninitialized -> Loading -> Success |
/// Error` and never regresses. `Uninitialized` is the implicit status of keys
/// that were never requested; both terminal states are permanent for the
/// process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// No request was ever issued for this key.
    Uninitialized,
    /// The request is in flight.
    Loading,
    /// The request succeeded with the fetched data.
    Success(T),
    /// The request failed; the error is terminal for this key.
    Error(QueryError),
}

impl<T> QueryState<T> {
    /// Returns the data if the query succeeded, otherwise `None`.
    pub const fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error if the query failed, otherwise `None`.
    pub const fn error(&self) -> Option<&QueryError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Returns `true` if no request was ever issued for this key.
    pub const fn is_uninitialized(&self) -> bool {
        matches!(self, Self::Uninitialized)
    }

    /// Returns `true` if the request is in flight.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns `true` if the query succeeded.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the query failed.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns `true` if the query reached a terminal state.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success(_) | Self::Error(_))
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self::Uninitialized
    }
}

type Fetcher<T> = Arc<dyn Fn(u32) -> BoxFuture<'static, Result<T, QueryError>> + Send + Sync>;

/// A cache that memoizes an async fetch by its numeric key.
///
/// The fetcher is invoked at most once per distinct key: concurrent duplicate
/// calls are coalesced through the entry map, and terminal entries (success
/// and error alike) are returned as-is without re-fetching. There is no
/// expiry and no invalidation.
pub struct QueryCache<T> {
    entries: DashMap<u32, watch::Sender<QueryState<T>>>,
    fetcher: Fetcher<T>,
}

impl<T> QueryCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Creates a cache around the given fetcher.
    ///
    /// The fetcher receives the canonicalized key and produces the value for
    /// it. It is the seam tests use to substitute the network.
    pub fn new<F>(fetcher: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<T, QueryError>> + Send + Sync + 'static,
    {
        Self {
            entries: DashMap::new(),
            fetcher: Arc::new(fetcher),
        }
    }

    /// Returns the entry for the given limit, creating it on first request.
    ///
    /// A missing limit canonicalizes to [`DEFAULT_LIMIT`]. If the key has no
    /// entry yet, one is created in [`QueryState::Loading`] and a single fetch
    /// task is spawned; otherwise the existing entry is returned untouched,
    /// whatever its status. The returned receiver observes every subsequent
    /// transition of the entry.
    ///
    /// Must be called from within a tokio runtime.
    pub fn fetch(&self, limit: Option<u32>) -> watch::Receiver<QueryState<T>> {
        let key = limit.unwrap_or(DEFAULT_LIMIT);

        match self.entries.entry(key) {
            Entry::Occupied(occupied) => {
                debug!(key, "query cache hit");
                occupied.get().subscribe()
            }
            Entry::Vacant(vacant) => {
                debug!(key, "query cache miss, spawning fetch");
                let (tx, rx) = watch::channel(QueryState::Loading);
                let sender = tx.clone();
                let future = (self.fetcher)(key);
                vacant.insert(tx);

                tokio::spawn(async move {
                    let next = match future.await {
                        Ok(data) => QueryState::Success(data),
                        Err(err) => {
                            debug!(key, %err, "query failed");
                            QueryState::Error(err)
                        }
                    };
                    // The sender also lives in the entry map, so this cannot
                    // fail for lack of receivers; the result is kept either way.
                    let _ = sender.send(next);
                });

                rx
            }
        }
    }

    /// Returns a snapshot of the current status for the given limit.
    ///
    /// Unlike [`fetch`](Self::fetch) this never creates an entry or issues a
    /// request; unknown keys report [`QueryState::Uninitialized`].
    pub fn state(&self, limit: Option<u32>) -> QueryState<T> {
        let key = limit.unwrap_or(DEFAULT_LIMIT);
        self.entries
            .get(&key)
            .map(|entry| entry.borrow().clone())
            .unwrap_or_default()
    }

    /// Returns the entry for the given limit as a stream of status values.
    ///
    /// The stream yields the current status immediately and then every
    /// transition, which makes it convenient to drive with stream combinators.
    pub fn watch(&self, limit: Option<u32>) -> WatchStream<QueryState<T>> {
        WatchStream::new(self.fetch(limit))
    }

    /// Returns the number of cache entries (one per requested key).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key was ever requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
