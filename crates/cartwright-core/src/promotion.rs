//! # Promotion Types
//!
//! Rules that discount one product's line or the whole cart, applied on top
//! of a product's intrinsic discount.
//!
//! ## Composition Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              How a line's price is composed                             │
//! │                                                                         │
//! │  Product.price                                                          │
//! │       │                                                                 │
//! │       ▼  intrinsic discount (Product::discounted_price)                 │
//! │  discounted unit price                                                  │
//! │       │                                                                 │
//! │       ▼  line promotion (Promotion::calculate_price)                    │
//! │  line total                                                             │
//! │       │                                                                 │
//! │       ▼  cart-wide TotalDiscount (applied once by the Cart)             │
//! │  final total                                                            │
//! │                                                                         │
//! │  This order is fixed and must not be rearranged.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Promotion Kind
// =============================================================================

/// The closed set of supported promotion rules.
///
/// Adding a kind is a compile-time-checked exhaustiveness update in
/// [`Promotion::calculate_price`], never a runtime string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PromotionKind {
    /// Percentage off one product's already-discounted unit price.
    PercentageDiscount,
    /// Every second unit of one product is free.
    Buy1Get1Free,
    /// Percentage off the whole cart, applied once after summation.
    TotalDiscount,
}

// =============================================================================
// Promotion
// =============================================================================

/// A discount rule layered on top of a product's intrinsic discount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    /// Identifier of the promotion itself.
    pub id: String,

    /// Targeted product id. Empty for a cart-wide [`PromotionKind::TotalDiscount`],
    /// which ignores this field.
    pub product_id: String,

    /// Percentage discount. Ignored by [`PromotionKind::Buy1Get1Free`].
    pub discount: i64,

    /// Which rule this promotion applies.
    pub kind: PromotionKind,
}

impl Promotion {
    /// Calculates the payable amount for one line under this promotion.
    ///
    /// `unit_price` is expected to already carry the product's intrinsic
    /// discount; this function layers the promotion on top of it.
    ///
    /// - `PercentageDiscount`: `unit_price × (100 − discount) / 100 × quantity`
    /// - `Buy1Get1Free`: pays for `ceil(quantity / 2)` units; quantity 3 pays
    ///   for 2, quantity 1 pays for 1, quantity 0 pays for 0
    /// - `TotalDiscount`: contributes zero per line. Cart-wide discounting is
    ///   applied once by the cart after summation, so a `TotalDiscount` that
    ///   is wrongly registered against a single product is worth nothing
    ///   rather than silently discounting a line twice.
    pub fn calculate_price(&self, unit_price: Money, quantity: i64) -> Money {
        match self.kind {
            PromotionKind::PercentageDiscount => unit_price
                .apply_percentage_discount(self.discount)
                .multiply_quantity(quantity),
            PromotionKind::Buy1Get1Free => {
                let payable_quantity = (quantity + 1) / 2;
                unit_price.multiply_quantity(payable_quantity)
            }
            PromotionKind::TotalDiscount => Money::zero(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn promotion(kind: PromotionKind, discount: i64) -> Promotion {
        Promotion {
            id: "PROMO1".to_string(),
            product_id: "P1".to_string(),
            discount,
            kind,
        }
    }

    fn money(literal: &str) -> Money {
        literal.parse().unwrap()
    }

    #[test]
    fn test_percentage_discount_applies_on_top_of_unit_price() {
        let promo = promotion(PromotionKind::PercentageDiscount, 18);
        // 90.00 per unit (already product-discounted), 2 units, 18% off
        assert_eq!(
            promo.calculate_price(money("90.00"), 2),
            money("147.60")
        );
    }

    #[test]
    fn test_buy_one_get_one_free_pays_ceil_half() {
        let promo = promotion(PromotionKind::Buy1Get1Free, 0);
        let unit = money("80.00");

        assert_eq!(promo.calculate_price(unit, 0), Money::zero());
        assert_eq!(promo.calculate_price(unit, 1), money("80.00"));
        assert_eq!(promo.calculate_price(unit, 2), money("80.00"));
        assert_eq!(promo.calculate_price(unit, 3), money("160.00"));
        assert_eq!(promo.calculate_price(unit, 4), money("160.00"));
        assert_eq!(promo.calculate_price(unit, 5), money("240.00"));
    }

    #[test]
    fn test_total_discount_contributes_nothing_per_line() {
        let promo = promotion(PromotionKind::TotalDiscount, 15);
        assert!(promo.calculate_price(money("100.00"), 3).is_zero());
    }

    #[test]
    fn test_kind_serializes_camel_case() {
        let tags: Vec<String> = [
            PromotionKind::PercentageDiscount,
            PromotionKind::Buy1Get1Free,
            PromotionKind::TotalDiscount,
        ]
        .iter()
        .map(|kind| serde_json::to_string(kind).unwrap())
        .collect();

        assert_eq!(
            tags,
            vec![
                "\"percentageDiscount\"".to_string(),
                "\"buy1Get1Free\"".to_string(),
                "\"totalDiscount\"".to_string(),
            ]
        );
    }
}
