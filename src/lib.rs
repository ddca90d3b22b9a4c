//! # bijective
//!
//! Bijective dictionaries: containers that enforce a strict one-to-one
//! correspondence between keys and values. Values are looked up by key and
//! keys by value with equal efficiency, and the whole structure can be
//! flipped.
//!
//! ## Overview
//!
//! | Type                          | Mutable | Ordered | Thread-safe |
//! |-------------------------------|:-------:|:-------:|:-----------:|
//! | [`Bijection`]                 |         |         |             |
//! | [`MutableBijection`]          | yes     |         |             |
//! | `OrderedBijection`            |         | yes     |             |
//! | `MutableOrderedBijection`     | yes     | yes     |             |
//! | `ThreadSafeBijection`         | yes     |         | yes         |
//! | `ThreadSafeOrderedBijection`  | yes     | yes     | yes         |
//!
//! Operations are grouped into the capability traits in [`traits`]:
//! `Lookup`, `Mutate`, `Ordered`, `OrderedMutate` and `Invert`.
//!
//! ## Conflict resolution
//!
//! `set(key, value)` keeps the mapping one-to-one by evicting at most two
//! stale entries: first whatever `key` mapped to, then whichever key held
//! `value`. Setting a pair that is already present is a no-op.
//!
//! ## Feature Flags
//!
//! - `ordered` (default): ordered variants, backed by `indexmap`
//! - `sync` (default): thread-safe variants, backed by `parking_lot`
//! - `arc`: immutable bijections share storage through `Arc` instead of `Rc`
//! - `fxhash` / `ahash`: faster hashers for every internal map
//! - `full`: `ordered`, `sync` and `arc`
//!
//! ## Example
//!
//! ```rust
//! use bijective::prelude::*;
//!
//! let mut bijection = MutableBijection::new();
//! bijection.set("k1", "v1");
//! bijection.set("k2", "v1");
//!
//! // "k2" took "v1" from "k1".
//! assert_eq!(bijection.get("k1"), None);
//! assert_eq!(bijection.get("k2"), Some(&"v1"));
//! assert_eq!(bijection.get_key("v1"), Some(&"k2"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every bijection type, the capability traits, and the error
/// type.
///
/// # Usage
///
/// ```rust
/// use bijective::prelude::*;
/// ```
pub mod prelude {
    pub use crate::bijection::{Bijection, MutableBijection};
    pub use crate::error::BijectionError;
    pub use crate::evicted::Evicted;
    pub use crate::traits::{Invert, Lookup, Mutate, Ordered, OrderedMutate};

    #[cfg(feature = "ordered")]
    pub use crate::ordered::{MutableOrderedBijection, OrderedBijection};

    #[cfg(feature = "sync")]
    pub use crate::sync::{ThreadSafe, ThreadSafeBijection};

    #[cfg(all(feature = "ordered", feature = "sync"))]
    pub use crate::sync::ThreadSafeOrderedBijection;
}

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer behind the immutable bijections.
///
/// With the `arc` feature this is `std::sync::Arc`, which makes
/// [`Bijection`] `Send + Sync`. Otherwise it is `std::rc::Rc`.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

pub mod bijection;
pub mod error;
pub mod evicted;
pub mod hasher;
pub mod traits;

#[cfg(feature = "ordered")]
pub mod ordered;

#[cfg(feature = "sync")]
pub mod sync;

pub use bijection::{Bijection, MutableBijection};
pub use error::BijectionError;
pub use evicted::Evicted;

#[cfg(feature = "ordered")]
pub use ordered::{MutableOrderedBijection, OrderedBijection};

#[cfg(feature = "sync")]
pub use sync::{ThreadSafe, ThreadSafeBijection};

#[cfg(all(feature = "ordered", feature = "sync"))]
pub use sync::ThreadSafeOrderedBijection;
