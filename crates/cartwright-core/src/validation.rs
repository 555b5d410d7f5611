//! # Validation Module
//!
//! Business rule validation for cart inputs.
//!
//! Validation is the gate at the cart boundary: [`crate::cart::Cart::add_product`]
//! runs these checks before any mutation, so a rejected call leaves the cart
//! untouched. The pricing functions themselves stay permissive; an
//! out-of-range discount is rejected here but tolerated by
//! [`crate::product::Product::discounted_price`].

use crate::error::ValidationError;
use crate::product::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product before it enters a cart.
///
/// ## Rules
/// - `id` must be non-empty (whitespace does not count)
/// - `price` must be non-negative
/// - `discount` must be between 0 and 100
///
/// ## Example
/// ```rust
/// use cartwright_core::product::Product;
/// use cartwright_core::validation::validate_product;
///
/// let product = Product::new("A", "Widget", "9.99".parse().unwrap());
/// assert!(validate_product(&product).is_ok());
///
/// let nameless = Product::new("", "Widget", "9.99".parse().unwrap());
/// assert!(validate_product(&nameless).is_err());
/// ```
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product ID".to_string(),
        });
    }

    if product.price.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "product price".to_string(),
        });
    }

    if !product.validate_discount() {
        return Err(ValidationError::OutOfRange {
            field: "product discount".to_string(),
            min: 0,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, price: &str, discount: i64) -> Product {
        Product {
            id: id.to_string(),
            description: String::new(),
            price: price.parse().unwrap(),
            discount,
        }
    }

    #[test]
    fn test_validate_product_accepts_valid_inputs() {
        assert!(validate_product(&product("A", "100.00", 0)).is_ok());
        assert!(validate_product(&product("A", "0", 100)).is_ok());
    }

    #[test]
    fn test_validate_product_rejects_empty_id() {
        assert!(matches!(
            validate_product(&product("", "100.00", 0)),
            Err(ValidationError::Required { .. })
        ));
        assert!(matches!(
            validate_product(&product("   ", "100.00", 0)),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_product_rejects_negative_price() {
        assert!(matches!(
            validate_product(&product("A", "-0.01", 0)),
            Err(ValidationError::MustNotBeNegative { .. })
        ));
        // Zero price is a free item, not an error
        assert_eq!(product("A", "0.00", 0).price, Money::zero());
        assert!(validate_product(&product("A", "0.00", 0)).is_ok());
    }

    #[test]
    fn test_validate_product_rejects_out_of_range_discount() {
        assert!(matches!(
            validate_product(&product("A", "100.00", -1)),
            Err(ValidationError::OutOfRange { .. })
        ));
        assert!(matches!(
            validate_product(&product("A", "100.00", 150)),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(999).is_ok());

        assert!(matches!(
            validate_quantity(0),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_quantity(-3),
            Err(ValidationError::MustBePositive { .. })
        ));
    }
}
