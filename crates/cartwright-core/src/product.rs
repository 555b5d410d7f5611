//! # Product Types
//!
//! A catalog entry with a price and an intrinsic percentage discount.
//!
//! The intrinsic discount is a permanent property of the product and is
//! applied before any promotion; promotions never mutate it.

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A priced catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Business identifier. Must be non-empty to enter a cart.
    pub id: String,

    /// Display description shown to the shopper.
    pub description: String,

    /// Unit price. Must be non-negative to enter a cart.
    pub price: Money,

    /// Intrinsic percentage discount. Valid range is 0..=100; values outside
    /// that range are rejected by [`crate::validation::validate_product`] but
    /// tolerated by [`Product::discounted_price`].
    pub discount: i64,
}

impl Product {
    /// Creates a product with no intrinsic discount.
    pub fn new(id: impl Into<String>, description: impl Into<String>, price: Money) -> Self {
        Product {
            id: id.into(),
            description: description.into(),
            price,
            discount: 0,
        }
    }

    /// Calculates the final unit price after applying the intrinsic discount.
    ///
    /// Out-of-range discounts (`<= 0` or `> 100`) leave the price unchanged,
    /// so callers always obtain a sane price even for a product that would
    /// fail validation. Pure function, no side effects.
    ///
    /// ## Example
    /// ```rust
    /// use cartwright_core::product::Product;
    ///
    /// let mut product = Product::new("A", "Widget", "100.00".parse().unwrap());
    /// product.discount = 10;
    /// assert_eq!(product.discounted_price().to_string(), "90.00");
    ///
    /// product.discount = 150; // out of range: price passes through unchanged
    /// assert_eq!(product.discounted_price().to_string(), "100.00");
    /// ```
    pub fn discounted_price(&self) -> Money {
        if self.discount <= 0 || self.discount > 100 {
            return self.price;
        }
        self.price.apply_percentage_discount(self.discount)
    }

    /// Checks if the intrinsic discount percentage is in the valid range.
    ///
    /// Used by the cart's validation gate; `discounted_price` deliberately
    /// does not call this.
    pub fn validate_discount(&self) -> bool {
        (0..=100).contains(&self.discount)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product(price: &str, discount: i64) -> Product {
        Product {
            id: "P1".to_string(),
            description: "Test product".to_string(),
            price: price.parse().unwrap(),
            discount,
        }
    }

    #[test]
    fn test_discounted_price_applies_valid_discount() {
        assert_eq!(product("100.00", 10).discounted_price().to_string(), "90.00");
        assert_eq!(product("100.00", 100).discounted_price().to_string(), "0.00");
        assert_eq!(product("50.53", 15).discounted_price().to_string(), "42.95");
    }

    #[test]
    fn test_discounted_price_passes_through_out_of_range() {
        assert_eq!(product("100.00", 0).discounted_price().to_string(), "100.00");
        assert_eq!(product("100.00", -5).discounted_price().to_string(), "100.00");
        assert_eq!(product("100.00", 101).discounted_price().to_string(), "100.00");
        assert_eq!(product("100.00", 150).discounted_price().to_string(), "100.00");
    }

    #[test]
    fn test_validate_discount_bounds() {
        assert!(product("1.00", 0).validate_discount());
        assert!(product("1.00", 100).validate_discount());
        assert!(!product("1.00", -1).validate_discount());
        assert!(!product("1.00", 101).validate_discount());
        assert!(!product("1.00", 150).validate_discount());
    }
}
