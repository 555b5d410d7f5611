//! # Cart
//!
//! The shopping cart aggregate: line items keyed by product id, plus the
//! promotions layered on top of them.
//!
//! ## Invariants
//! - Items are unique by product id (adding the same product again increases
//!   quantity and keeps the first insertion's product data)
//! - At most one promotion per product id (first registration wins)
//! - At most one cart-wide total discount (last registration wins)
//! - Promotions never mutate a product's own discount; they apply strictly
//!   after it
//!
//! ## Pricing Order
//! Per line: intrinsic product discount, then the line's promotion. After all
//! lines are summed: the cart-wide total discount. The order is fixed.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::product::Product;
use crate::promotion::{Promotion, PromotionKind};
use crate::validation::{validate_product, validate_quantity};

// =============================================================================
// Cart Item
// =============================================================================

/// One product's aggregated quantity within a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// The product as it was first added to the cart.
    pub product: Product,

    /// Accumulated quantity across all additions of this product id.
    pub quantity: i64,
}

// =============================================================================
// Cart
// =============================================================================

/// A shopping cart with line items and active promotions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    /// Line items keyed by product id.
    pub items: HashMap<String, CartItem>,

    /// Per-product promotions keyed by product id.
    pub promotions: HashMap<String, Promotion>,

    /// The single cart-wide total discount slot, if any.
    pub total_promotion: Option<Promotion>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Adds a product to the cart or increases quantity if already present.
    ///
    /// The product and quantity are validated before any mutation; a rejected
    /// call leaves the cart exactly as it was.
    ///
    /// ## Errors
    /// - [`CoreError::InvalidProduct`] when the id is empty, the price is
    ///   negative, or the discount is outside 0..=100
    /// - [`CoreError::InvalidQuantity`] when the quantity is not positive
    pub fn add_product(&mut self, product: Product, quantity: i64) -> CoreResult<()> {
        validate_product(&product).map_err(CoreError::InvalidProduct)?;
        validate_quantity(quantity).map_err(CoreError::InvalidQuantity)?;

        if let Some(item) = self.items.get_mut(&product.id) {
            item.quantity += quantity;
            return Ok(());
        }

        self.items
            .insert(product.id.clone(), CartItem { product, quantity });
        Ok(())
    }

    /// Registers a promotion on the cart.
    ///
    /// A [`PromotionKind::TotalDiscount`] sets or overwrites the single
    /// cart-wide slot. Any other kind is keyed by its product id, and only if
    /// no promotion already occupies that id: a second registration for an
    /// already-promoted product is a silent no-op (first write wins), not an
    /// error.
    pub fn add_promotion(&mut self, promotion: Promotion) {
        if promotion.kind == PromotionKind::TotalDiscount {
            self.total_promotion = Some(promotion);
            return;
        }

        self.promotions
            .entry(promotion.product_id.clone())
            .or_insert(promotion);
    }

    /// Calculates the cart total.
    ///
    /// For each line: the product's intrinsic-discounted unit price, then the
    /// line's promotion if one is attached, otherwise unit price × quantity.
    /// After all lines are summed, the cart-wide total discount (if set)
    /// multiplies the running total by `(100 − discount) / 100`.
    ///
    /// Addition over exact decimals is associative and commutative, so the
    /// map's iteration order cannot affect the result. An empty cart totals
    /// zero.
    pub fn calculate_total(&self) -> Money {
        let mut total = Money::zero();

        for item in self.items.values() {
            // Apply the product's own discount first
            let unit_price = item.product.discounted_price();

            match self.promotions.get(&item.product.id) {
                Some(promotion) => {
                    total += promotion.calculate_price(unit_price, item.quantity);
                }
                None => {
                    total += unit_price.multiply_quantity(item.quantity);
                }
            }
        }

        if let Some(promotion) = &self.total_promotion {
            total = total.apply_percentage_discount(promotion.discount);
        }

        total
    }

    /// Checks if the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Renders a price with exactly two digits after the decimal point.
///
/// Delegates to [`Money`]'s fixed-2 renderer.
pub fn display_price(price: Money) -> String {
    price.to_string()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use super::*;
    use crate::error::ValidationError;

    fn product(id: &str, price: &str, discount: i64) -> Product {
        Product {
            id: id.to_string(),
            description: format!("Product {id}"),
            price: price.parse().unwrap(),
            discount,
        }
    }

    fn line_promotion(product_id: &str, kind: PromotionKind, discount: i64) -> Promotion {
        Promotion {
            id: format!("PROMO-{product_id}"),
            product_id: product_id.to_string(),
            discount,
            kind,
        }
    }

    fn total_promotion(discount: i64) -> Promotion {
        Promotion {
            id: "PROMO-TOTAL".to_string(),
            product_id: String::new(),
            discount,
            kind: PromotionKind::TotalDiscount,
        }
    }

    #[test]
    fn test_add_product_merges_by_id_and_keeps_first_metadata() {
        let mut cart = Cart::new();
        cart.add_product(product("A", "10.00", 0), 2).unwrap();
        // Second addition carries a different description; the first one wins
        cart.add_product(
            Product {
                description: "Renamed".to_string(),
                ..product("A", "10.00", 0)
            },
            3,
        )
        .unwrap();

        assert_eq!(cart.items.len(), 1);
        let item = &cart.items["A"];
        assert_eq!(item.quantity, 5);
        assert_eq!(item.product.description, "Product A");
    }

    #[test]
    fn test_add_product_rejects_invalid_input_without_mutation() {
        let mut cart = Cart::new();

        assert!(matches!(
            cart.add_product(product("", "10.00", 0), 1),
            Err(CoreError::InvalidProduct(ValidationError::Required { .. }))
        ));
        assert!(matches!(
            cart.add_product(product("A", "-1.00", 0), 1),
            Err(CoreError::InvalidProduct(
                ValidationError::MustNotBeNegative { .. }
            ))
        ));
        assert!(matches!(
            cart.add_product(product("A", "10.00", 150), 1),
            Err(CoreError::InvalidProduct(ValidationError::OutOfRange { .. }))
        ));
        assert!(matches!(
            cart.add_product(product("A", "10.00", 0), 0),
            Err(CoreError::InvalidQuantity(
                ValidationError::MustBePositive { .. }
            ))
        ));

        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_promotion_first_write_wins_per_product() {
        let mut cart = Cart::new();
        cart.add_promotion(line_promotion("A", PromotionKind::PercentageDiscount, 10));
        cart.add_promotion(line_promotion("A", PromotionKind::PercentageDiscount, 20));

        assert_eq!(cart.promotions["A"].discount, 10);
    }

    #[test]
    fn test_add_promotion_total_discount_overwrites_slot() {
        let mut cart = Cart::new();
        cart.add_promotion(total_promotion(10));
        cart.add_promotion(total_promotion(15));

        assert_eq!(cart.total_promotion.as_ref().unwrap().discount, 15);
        assert!(cart.promotions.is_empty());
    }

    #[test]
    fn test_calculate_total_empty_cart_is_zero() {
        assert!(Cart::new().calculate_total().is_zero());
    }

    #[test]
    fn test_calculate_total_intrinsic_discount_only() {
        // 100.00 at 10% off, one unit
        let mut cart = Cart::new();
        cart.add_product(product("A", "100.00", 10), 1).unwrap();

        assert_eq!(display_price(cart.calculate_total()), "90.00");
    }

    #[test]
    fn test_calculate_total_percentage_promotion_on_discounted_price() {
        // 100.00 at 10% off is 90.00; two units are 180.00; 18% promotion
        // takes it to 147.60
        let mut cart = Cart::new();
        cart.add_product(product("A", "100.00", 10), 2).unwrap();
        cart.add_promotion(line_promotion("A", PromotionKind::PercentageDiscount, 18));

        assert_eq!(display_price(cart.calculate_total()), "147.60");
    }

    #[test]
    fn test_calculate_total_buy_one_get_one_free() {
        // 100.00 at 20% off is 80.00; three units pay for two
        let mut cart = Cart::new();
        cart.add_product(product("A", "100.00", 20), 3).unwrap();
        cart.add_promotion(line_promotion("A", PromotionKind::Buy1Get1Free, 0));

        assert_eq!(display_price(cart.calculate_total()), "160.00");
    }

    #[test]
    fn test_calculate_total_cart_wide_discount_applies_last() {
        // Two lines summing 120.00, then 15% off the whole cart
        let mut cart = Cart::new();
        cart.add_product(product("A", "50.00", 0), 2).unwrap();
        cart.add_product(product("B", "20.00", 0), 1).unwrap();
        cart.add_promotion(total_promotion(15));

        assert_eq!(display_price(cart.calculate_total()), "102.00");
    }

    #[test]
    fn test_calculate_total_composes_all_three_layers() {
        // A: 100.00 @10% ×2 with 18% promotion  → 147.60
        // B: 20.00 ×1                            →  20.00
        // cart-wide 10%                          → 150.84
        let mut cart = Cart::new();
        cart.add_product(product("A", "100.00", 10), 2).unwrap();
        cart.add_product(product("B", "20.00", 0), 1).unwrap();
        cart.add_promotion(line_promotion("A", PromotionKind::PercentageDiscount, 18));
        cart.add_promotion(total_promotion(10));

        assert_eq!(display_price(cart.calculate_total()), "150.84");
    }

    // -------------------------------------------------------------------------
    // Property: iteration order never changes the total
    // -------------------------------------------------------------------------

    fn build_cart(lines: &[(i64, i64, i64)], order: &[usize]) -> Cart {
        let mut cart = Cart::new();
        for &i in order {
            let (cents, discount, quantity) = lines[i];
            let entry = Product {
                id: format!("P{i}"),
                description: format!("Product {i}"),
                price: Money::new(Decimal::new(cents, 2)),
                discount,
            };
            cart.add_product(entry, quantity).unwrap();

            // Promote every other line so the promotion path is covered too
            if i % 2 == 0 {
                cart.add_promotion(line_promotion(
                    &format!("P{i}"),
                    PromotionKind::PercentageDiscount,
                    18,
                ));
            }
        }
        cart.add_promotion(total_promotion(15));
        cart
    }

    proptest! {
        #[test]
        fn test_total_is_insertion_order_independent(
            (lines, order) in proptest::collection::vec(
                (0i64..100_000, 0i64..=100, 1i64..20),
                1..10,
            )
            .prop_flat_map(|lines| {
                let indices: Vec<usize> = (0..lines.len()).collect();
                (Just(lines), Just(indices).prop_shuffle())
            })
        ) {
            let forward: Vec<usize> = (0..lines.len()).collect();

            let sequential = build_cart(&lines, &forward);
            let permuted = build_cart(&lines, &order);

            prop_assert_eq!(sequential.calculate_total(), permuted.calculate_total());
        }
    }
}
