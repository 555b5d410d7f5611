//! # Cart Repository Trait
//!
//! The capability set a cart store must provide, abstracted behind a trait so
//! alternative backing stores can be substituted without touching callers.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  Adapter (HTTP handler, CLI, ...)                                       │
//! │       │                                                                 │
//! │       │  repo.create("user-1").await                                    │
//! │       ▼                                                                 │
//! │  dyn CartRepository                                                     │
//! │  ├── create / get_by_id / get_by_user_id                                │
//! │  └── update / delete / exists                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InMemoryCartRepository (today) / any future backing store              │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • Callers never name a concrete store type                            │
//! │  • Easy to test (substitute the repository)                            │
//! │  • Locking is isolated in one place                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The methods are `async`: the returned futures are the caller's
//! cancellation handle. The in-memory store completes in O(1) map time and
//! never awaits while holding its lock, but an I/O-backed implementation can
//! honor deadlines with no signature change.

use std::sync::Arc;

use async_trait::async_trait;

use cartwright_core::Cart;

use crate::error::StoreResult;
use crate::memory::InMemoryCartRepository;

/// The capability set of a cart store.
///
/// One cart per user: `create` for a user that already has a cart reports
/// the conflict (with the existing id) instead of allocating a second cart.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Creates an empty cart for a user and returns the new cart id.
    ///
    /// ## Errors
    /// - [`StoreError::InvalidUserId`](crate::StoreError::InvalidUserId) on
    ///   an empty user id
    /// - [`StoreError::CartExists`](crate::StoreError::CartExists) when the
    ///   user already has a cart; the error carries the existing cart id so
    ///   callers can treat it as an idempotent success
    async fn create(&self, user_id: &str) -> StoreResult<String>;

    /// Retrieves a cart by its id.
    async fn get_by_id(&self, cart_id: &str) -> StoreResult<Cart>;

    /// Retrieves a cart by its owning user's id.
    async fn get_by_user_id(&self, user_id: &str) -> StoreResult<Cart>;

    /// Replaces a stored cart wholesale and refreshes its update timestamp.
    async fn update(&self, cart_id: &str, cart: Cart) -> StoreResult<()>;

    /// Removes a cart and its user-index entry.
    ///
    /// The two removals are atomic with respect to every other repository
    /// operation, so a subsequent `create` for the same user succeeds.
    async fn delete(&self, cart_id: &str) -> StoreResult<()>;

    /// Checks whether a cart exists. Never errors on a well-formed id.
    async fn exists(&self, cart_id: &str) -> StoreResult<bool>;
}

/// Creates the default in-memory cart repository behind the capability trait.
///
/// Callers receive `Arc<dyn CartRepository>` rather than a concrete type, so
/// an alternative backing store can be swapped in without touching them.
pub fn new_cart_repository() -> Arc<dyn CartRepository> {
    Arc::new(InMemoryCartRepository::new())
}
