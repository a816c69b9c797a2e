//! Process-wide store composing the counter slice and the breed query cache.
//!
//! The two slices are independent leaves: no data flows between them, and
//! each is mutated only through its own intents. Consumers dispatch an intent
//! and observe the resulting state through snapshots or watch channels.

use futures::future::BoxFuture;
use tokio::sync::watch;
use tracing::debug;

use crate::breeds::{Breed, BreedsApi};
use crate::counter::{self, CounterIntent, CounterState};
use crate::query::{QueryCache, QueryError, QueryState};

/// Everything a consumer can ask the store to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Mutate the counter slice.
    Counter(CounterIntent),
    /// Ensure the breed entry for `limit` exists, fetching it on first
    /// request. `None` canonicalizes to the endpoint's default limit.
    FetchBreeds { limit: Option<u32> },
}

/// The composed application state container.
///
/// One instance per process; hand out references (or wrap in an `Arc`) to
/// reach it from any consumer.
pub struct Store {
    counter: watch::Sender<CounterState>,
    breeds: QueryCache<Vec<Breed>>,
}

impl Store {
    /// Creates a store whose breed cache fetches through the given API client.
    pub fn new(api: BreedsApi) -> Self {
        Self::with_fetcher(move |limit| {
            let api = api.clone();
            Box::pin(async move { api.breeds(limit).await })
        })
    }

    /// Creates a store with a custom breed fetcher.
    ///
    /// This is the seam tests use to replace the network with canned data.
    pub fn with_fetcher<F>(fetcher: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Vec<Breed>, QueryError>> + Send + Sync + 'static,
    {
        let (counter, _) = watch::channel(CounterState::default());
        Self {
            counter,
            breeds: QueryCache::new(fetcher),
        }
    }

    /// Dispatches an intent.
    ///
    /// Counter intents reduce synchronously before this returns. A breeds
    /// intent only initiates a request when the key has no entry yet; either
    /// way the result must be observed through [`breeds`](Self::breeds) or
    /// [`fetch_breeds`](Self::fetch_breeds), never as a return value or fault.
    pub fn dispatch(&self, intent: Intent) {
        debug!(?intent, "dispatch");
        match intent {
            Intent::Counter(intent) => {
                self.counter
                    .send_modify(|state| *state = counter::reduce(*state, intent));
            }
            Intent::FetchBreeds { limit } => {
                let _ = self.breeds.fetch(limit);
            }
        }
    }

    /// Returns the current counter state.
    pub fn counter(&self) -> CounterState {
        *self.counter.borrow()
    }

    /// Returns a watcher over the counter for push-style observers.
    pub fn watch_counter(&self) -> watch::Receiver<CounterState> {
        self.counter.subscribe()
    }

    /// Returns a snapshot of the breed entry for `limit` without fetching.
    ///
    /// Keys that were never requested report [`QueryState::Uninitialized`].
    pub fn breeds(&self, limit: Option<u32>) -> QueryState<Vec<Breed>> {
        self.breeds.state(limit)
    }

    /// Returns the breed entry for `limit`, fetching it on first request.
    ///
    /// Equivalent to dispatching [`Intent::FetchBreeds`] and subscribing to
    /// the entry in one step.
    pub fn fetch_breeds(&self, limit: Option<u32>) -> watch::Receiver<QueryState<Vec<Breed>>> {
        self.breeds.fetch(limit)
    }
}
