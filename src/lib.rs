//! # Dogdex - Keyed Query Cache Demo
//!
//! Dogdex is a small demo library combining two independent state slices in
//! one process-wide store:
//!
//! 1. **Counter**: a signed integer mutated through two pure operations
//!    (increment by one, add an arbitrary amount)
//! 2. **Breed query cache**: a paginated fetch of dog-breed records from
//!    [TheDogAPI](https://thedogapi.com/), memoized by the requested limit
//!
//! The two slices share no data. They compose only inside [`Store`], which
//! exposes a dispatch/snapshot surface to any number of consumers.
//!
//! ## Core Components
//!
//! - [`Store`](store::Store): the composed state container
//! - [`QueryCache`](query::QueryCache): memoizes an async fetch by its key,
//!   coalescing concurrent duplicate calls and reporting
//!   `uninitialized | loading | success | error` status
//! - [`BreedsApi`](breeds::BreedsApi): the HTTP client for the breeds endpoint
//! - [`Config`](config::Config): environment configuration, read once at startup
//!
//! ## Example
//!
//! ```rust,no_run
//! use dogdex::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let store = Store::new(BreedsApi::new(&config)?);
//!
//!     store.dispatch(Intent::Counter(CounterIntent::Incremented));
//!
//!     let mut entry = store.fetch_breeds(Some(5));
//!     entry.changed().await?;
//!     if let QueryState::Success(breeds) = &*entry.borrow() {
//!         for breed in breeds {
//!             println!("{}: {}", breed.name, breed.image.url);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Caching Contract
//!
//! Each distinct limit gets exactly one fetch per process lifetime. A repeated
//! call for a key that is loading, succeeded, or failed returns the existing
//! entry without touching the network. Failed entries stay failed; recovery is
//! a process restart.

pub mod breeds;
pub mod config;
pub mod counter;
pub mod prelude;
pub mod query;
pub mod store;

pub use store::Store;
