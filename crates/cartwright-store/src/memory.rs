//! # In-Memory Cart Repository
//!
//! The default [`CartRepository`] implementation: two maps behind a single
//! reader/writer lock.
//!
//! ## Locking Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Shared State & Locking                               │
//! │                                                                         │
//! │   RwLock ──┬── carts:      cart id  → CartRecord   (primary store)      │
//! │            └── user_carts: user id  → cart id      (secondary index)    │
//! │                                                                         │
//! │   get_by_id / get_by_user_id / exists ──► shared (read) guard           │
//! │   create / update / delete ────────────► exclusive (write) guard,       │
//! │                                          held across the whole          │
//! │                                          check-then-act sequence        │
//! │                                                                         │
//! │   Lock hold time is O(1) map work. No I/O and no caller code runs       │
//! │   while the guard is held, so no operation blocks indefinitely.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The two maps are only ever mutated together under the write guard, so
//! repository operations cannot orphan an index entry. An orphan reachable
//! only through direct corruption surfaces as `CartNotFound`, never a panic.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use async_trait::async_trait;
use cartwright_core::Cart;

use crate::error::{StoreError, StoreResult};
use crate::repository::CartRepository;

// =============================================================================
// Cart Record
// =============================================================================

/// A stored cart together with its ownership and lifecycle metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartRecord {
    /// Opaque cart identifier, unique for the process lifetime.
    pub cart_id: String,

    /// The owning user. Exactly one record exists per user at a time.
    pub user_id: String,

    /// The cart aggregate itself.
    pub cart: Cart,

    /// When the record was created.
    pub created_at: DateTime<Utc>,

    /// When the cart was last replaced by `update`.
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// In-Memory Repository
// =============================================================================

/// Primary store plus secondary index, always mutated together.
#[derive(Debug, Default)]
struct Shelf {
    carts: HashMap<String, CartRecord>,
    user_carts: HashMap<String, String>,
}

/// Thread-safe in-memory cart store.
///
/// ## Usage
/// ```rust,ignore
/// let repo = InMemoryCartRepository::new();
///
/// let cart_id = repo.create("user-1").await?;
/// let cart = repo.get_by_id(&cart_id).await?;
/// assert!(cart.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCartRepository {
    shelf: RwLock<Shelf>,
}

impl InMemoryCartRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        InMemoryCartRepository::default()
    }

    /// Allocates a cart id for a user.
    ///
    /// The UUID suffix keeps ids unique for the process lifetime; an id is
    /// never reused, even after its cart is deleted.
    fn allocate_cart_id(user_id: &str) -> String {
        format!("cart_{}_{}", user_id, Uuid::new_v4())
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn create(&self, user_id: &str) -> StoreResult<String> {
        if user_id.is_empty() {
            return Err(StoreError::InvalidUserId);
        }

        // Exclusive guard across the whole check-then-act sequence: two
        // concurrent creates for one user must not both allocate a cart.
        let mut shelf = self.shelf.write().await;

        if let Some(existing) = shelf.user_carts.get(user_id) {
            debug!(user_id = %user_id, cart_id = %existing, "User already has a cart");
            return Err(StoreError::CartExists {
                cart_id: existing.clone(),
            });
        }

        let cart_id = Self::allocate_cart_id(user_id);
        let now = Utc::now();
        shelf.carts.insert(
            cart_id.clone(),
            CartRecord {
                cart_id: cart_id.clone(),
                user_id: user_id.to_string(),
                cart: Cart::new(),
                created_at: now,
                updated_at: now,
            },
        );
        shelf.user_carts.insert(user_id.to_string(), cart_id.clone());

        debug!(user_id = %user_id, cart_id = %cart_id, "Created cart");
        Ok(cart_id)
    }

    async fn get_by_id(&self, cart_id: &str) -> StoreResult<Cart> {
        if cart_id.is_empty() {
            return Err(StoreError::InvalidCartId);
        }

        let shelf = self.shelf.read().await;
        let record = shelf.carts.get(cart_id).ok_or(StoreError::CartNotFound)?;

        Ok(record.cart.clone())
    }

    async fn get_by_user_id(&self, user_id: &str) -> StoreResult<Cart> {
        if user_id.is_empty() {
            return Err(StoreError::InvalidUserId);
        }

        let shelf = self.shelf.read().await;
        let cart_id = shelf
            .user_carts
            .get(user_id)
            .ok_or(StoreError::CartNotFound)?;

        // An index entry pointing at a missing cart is reachable only through
        // direct corruption; it must read as absence, not a panic.
        let record = shelf.carts.get(cart_id).ok_or(StoreError::CartNotFound)?;

        Ok(record.cart.clone())
    }

    async fn update(&self, cart_id: &str, cart: Cart) -> StoreResult<()> {
        if cart_id.is_empty() {
            return Err(StoreError::InvalidCartId);
        }

        let mut shelf = self.shelf.write().await;
        let record = shelf
            .carts
            .get_mut(cart_id)
            .ok_or(StoreError::CartNotFound)?;

        record.cart = cart;
        record.updated_at = Utc::now();

        debug!(cart_id = %cart_id, "Updated cart");
        Ok(())
    }

    async fn delete(&self, cart_id: &str) -> StoreResult<()> {
        if cart_id.is_empty() {
            return Err(StoreError::InvalidCartId);
        }

        // One write guard covers both removals, keeping the index consistent
        // with the primary store at every observable point.
        let mut shelf = self.shelf.write().await;
        let record = shelf
            .carts
            .remove(cart_id)
            .ok_or(StoreError::CartNotFound)?;

        shelf.user_carts.remove(&record.user_id);

        debug!(cart_id = %cart_id, user_id = %record.user_id, "Deleted cart");
        Ok(())
    }

    async fn exists(&self, cart_id: &str) -> StoreResult<bool> {
        if cart_id.is_empty() {
            return Err(StoreError::InvalidCartId);
        }

        let shelf = self.shelf.read().await;
        Ok(shelf.carts.contains_key(cart_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
