//! Prelude module for convenient imports.
//!
//! ```
//! use dogdex::prelude::*;
//! ```

pub use crate::breeds::{Breed, BreedImage, BreedsApi};
pub use crate::config::Config;
pub use crate::counter::{CounterIntent, CounterState};
pub use crate::query::{QueryCache, QueryError, QueryState, DEFAULT_LIMIT};
pub use crate::store::{Intent, Store};
