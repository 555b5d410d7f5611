//! # cartwright-store: Concurrent Cart Repository
//!
//! Thread-safe cart lifecycle on top of [`cartwright_core`]: an opaque cart
//! id and the owning user id both resolve to the same stored [`Cart`],
//! with one cart per user.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Adapter Layer ──► dyn CartRepository ──► InMemoryCartRepository       │
//! │                     (this crate)           ├── carts:      id → record  │
//! │                                            └── user_carts: user → id    │
//! │                                                                         │
//! │   The repository owns cart lifecycle (create/fetch/update/delete)       │
//! │   under concurrent access; it knows nothing about pricing rules.        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`repository`] - The [`CartRepository`] capability trait
//! - [`memory`] - The in-memory implementation and its [`CartRecord`]
//! - [`error`] - Store error taxonomy
//!
//! ## Example Usage
//!
//! ```rust
//! use cartwright_store::{new_cart_repository, StoreError};
//!
//! # async fn example() -> Result<(), StoreError> {
//! let repo = new_cart_repository();
//!
//! let cart_id = repo.create("user-1").await?;
//!
//! // A second create for the same user reports the existing cart instead
//! // of allocating another one
//! match repo.create("user-1").await {
//!     Err(StoreError::CartExists { cart_id: existing }) => {
//!         assert_eq!(existing, cart_id);
//!     }
//!     other => panic!("expected CartExists, got {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod memory;
pub mod repository;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use memory::{CartRecord, InMemoryCartRepository};
pub use repository::{new_cart_repository, CartRepository};
