//! # Store Error Types
//!
//! Error taxonomy for cart repository operations.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Categories                                     │
//! │                                                                         │
//! │  Validation   InvalidCartId, InvalidUserId  → caller-input problems,    │
//! │               always synchronous, never retried                        │
//! │                                                                         │
//! │  Conflict     CartExists                    → "no-op, here is the       │
//! │               existing resource"; callers may treat it as an           │
//! │               idempotent success                                        │
//! │                                                                         │
//! │  Not found    CartNotFound                  → absence of an expected    │
//! │               entity; distinct from validation so adapters can map     │
//! │               it to a different outward signal (404 vs 400)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart repository errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The supplied cart id is empty.
    #[error("invalid cart ID")]
    InvalidCartId,

    /// The supplied user id is empty.
    #[error("invalid user ID")]
    InvalidUserId,

    /// No cart exists for the given id (or the user index points at a cart
    /// that is gone).
    #[error("cart not found")]
    CartNotFound,

    /// The user already has a cart. Carries the existing cart id, which is
    /// still useful to the caller on this path.
    #[error("cart already exists: {cart_id}")]
    CartExists { cart_id: String },
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(StoreError::InvalidCartId.to_string(), "invalid cart ID");
        assert_eq!(StoreError::InvalidUserId.to_string(), "invalid user ID");
        assert_eq!(StoreError::CartNotFound.to_string(), "cart not found");
        assert_eq!(
            StoreError::CartExists {
                cart_id: "cart_u1_x".to_string()
            }
            .to_string(),
            "cart already exists: cart_u1_x"
        );
    }
}
