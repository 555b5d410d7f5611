//! # cartwright-core: Pure Pricing Logic for Cartwright
//!
//! This crate is the **heart** of Cartwright. It contains the pricing and
//! promotion engine as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Cartwright Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Adapter Layer (HTTP, CLI, IPC)                 │   │
//! │  │   marshals requests in, marshals Money/Cart/errors back out    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ cartwright-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │  product  │  │ promotion │  │   cart    │  │   │
//! │  │   │   Money   │  │  Product  │  │ Promotion │  │   Cart    │  │   │
//! │  │   │  exact ℚ  │  │ discounts │  │   kinds   │  │  totals   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              cartwright-store (Repository Layer)                │   │
//! │  │          concurrent cart store keyed by cart and user           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal money type (no floating point!)
//! - [`product`] - Catalog entries with intrinsic discounts
//! - [`promotion`] - Promotion rules layered on top of product discounts
//! - [`cart`] - The cart aggregate and total calculation
//! - [`validation`] - Business rule validation
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: All monetary values are base-10 decimals; rounding
//!    happens once, at the display boundary
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use cartwright_core::{Cart, Product, Promotion, PromotionKind};
//!
//! let mut cart = Cart::new();
//!
//! // 100.00 with a 10% intrinsic discount
//! let mut product = Product::new("A", "Widget", "100.00".parse().unwrap());
//! product.discount = 10;
//! cart.add_product(product, 2).unwrap();
//!
//! // An extra 18% promotion on top
//! cart.add_promotion(Promotion {
//!     id: "SPRING".to_string(),
//!     product_id: "A".to_string(),
//!     discount: 18,
//!     kind: PromotionKind::PercentageDiscount,
//! });
//!
//! assert_eq!(cart.calculate_total().to_string(), "147.60");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod product;
pub mod promotion;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use cartwright_core::Money` instead of
// `use cartwright_core::money::Money`

pub use cart::{display_price, Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use product::Product;
pub use promotion::{Promotion, PromotionKind};
