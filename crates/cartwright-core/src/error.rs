//! # Error Types
//!
//! Domain-specific error types for cartwright-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cartwright-core errors (this file)                                     │
//! │  ├── CoreError        - Operation-level failures (add_product, parse)   │
//! │  └── ValidationError  - The specific rule that was violated             │
//! │                                                                         │
//! │  cartwright-store errors (separate crate)                               │
//! │  └── StoreError       - Repository operation failures                   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError/adapter → caller        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Operation errors wrap the violated rule so callers can tell
//!    "invalid product: price must not be negative" from
//!    "invalid quantity: quantity must be positive"

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Pricing engine errors.
///
/// Each variant prefixes the wrapped rule with the operation that rejected it,
/// so adapter layers can distinguish the failing input without string parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A product failed validation on its way into a cart.
    #[error("invalid product: {0}")]
    InvalidProduct(ValidationError),

    /// A quantity failed validation on its way into a cart.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(ValidationError),

    /// A money literal could not be parsed as an exact decimal.
    ///
    /// Construction fails fast; an unparseable amount is never coerced to
    /// zero.
    #[error("invalid money literal: '{literal}'")]
    InvalidMoneyLiteral { literal: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These identify the specific business rule an input violated. They are
/// always wrapped in a [`CoreError`] variant naming the rejecting operation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} cannot be empty")]
    Required { field: String },

    /// Value must be positive (> 0).
    #[error("{field} must be a positive integer")]
    MustBePositive { field: String },

    /// Value must not be negative (>= 0 allowed).
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
