//! # Cartwright Demo
//!
//! Console walkthrough of the pricing engine and the cart repository.
//!
//! ## Walkthrough Sequence
//! 1. Initialize tracing (logging)
//! 2. Build a catalog with different intrinsic discount levels
//! 3. Fill a cart and show the product-discounted subtotal
//! 4. Layer promotions on top and show the final total
//! 5. Demonstrate the permissive fallback for an out-of-range discount
//! 6. Exercise the repository end to end (create, fetch, update, delete)

use tracing::info;
use tracing_subscriber::EnvFilter;

use cartwright_core::{display_price, Cart, Product, Promotion, PromotionKind};
use cartwright_store::{new_cart_repository, StoreError};

fn catalog() -> Result<Vec<Product>, Box<dyn std::error::Error>> {
    Ok(vec![
        Product {
            id: "A".to_string(),
            description: "Product A".to_string(),
            price: "100.00".parse()?,
            discount: 10,
        },
        Product {
            id: "B".to_string(),
            description: "Product B".to_string(),
            price: "200.00".parse()?,
            discount: 0,
        },
        Product {
            id: "C".to_string(),
            description: "Product C".to_string(),
            price: "50.53".parse()?,
            discount: 15,
        },
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Shopping Cart with Product Discounts Demo ===");

    let products = catalog()?;

    println!("Products:");
    for product in &products {
        println!(
            "Product {}: Original {}, Discount {}%, Final {}",
            product.id,
            display_price(product.price),
            product.discount,
            display_price(product.discounted_price()),
        );
    }
    println!();

    // Fill the cart: A ×3, B ×1, C ×2
    let mut cart = Cart::new();
    let quantities = [3, 1, 2];
    for (product, quantity) in products.iter().zip(quantities) {
        cart.add_product(product.clone(), quantity)?;
    }

    println!("Cart contents:");
    for (product, quantity) in products.iter().zip(quantities) {
        println!(
            "- Product {} x{}: {}",
            product.id,
            quantity,
            display_price(product.discounted_price().multiply_quantity(quantity)),
        );
    }
    println!(
        "Subtotal (with product discounts): {}",
        display_price(cart.calculate_total())
    );
    println!();

    // Layer promotions on top of the intrinsic discounts
    println!("Applying additional promotions:");
    cart.add_promotion(Promotion {
        id: "PROMO-A".to_string(),
        product_id: "A".to_string(),
        discount: 18,
        kind: PromotionKind::PercentageDiscount,
    });
    println!("- Product A: Additional 18% promotion discount");

    cart.add_promotion(Promotion {
        id: "PROMO-C".to_string(),
        product_id: "C".to_string(),
        discount: 0,
        kind: PromotionKind::Buy1Get1Free,
    });
    println!("- Product C: Buy 1 Get 1 Free promotion");

    println!("Final Total: {}", display_price(cart.calculate_total()));
    println!();

    // Out-of-range discounts are rejected by validation but priced leniently
    println!("=== Product Discount Validation ===");
    let invalid = Product {
        id: "INVALID".to_string(),
        description: "Overdiscounted".to_string(),
        price: "100.00".parse()?,
        discount: 150,
    };
    println!(
        "Product with 150% discount is valid: {}",
        invalid.validate_discount()
    );
    println!(
        "Invalid product discounted price: {} (should be original price)",
        display_price(invalid.discounted_price())
    );
    println!();

    // Repository walkthrough: one cart per user, keyed both ways
    println!("=== Cart Repository ===");
    let repo = new_cart_repository();

    let cart_id = repo.create("user-1").await?;
    info!(cart_id = %cart_id, "Created cart for user-1");

    // A second create for the same user reports the existing cart
    match repo.create("user-1").await {
        Err(StoreError::CartExists { cart_id: existing }) => {
            println!("user-1 already has a cart: {existing}");
        }
        other => println!("unexpected: {other:?}"),
    }

    repo.update(&cart_id, cart).await?;
    let stored = repo.get_by_user_id("user-1").await?;
    println!(
        "Stored cart total for user-1: {}",
        display_price(stored.calculate_total())
    );

    repo.delete(&cart_id).await?;
    println!(
        "Cart deleted; exists = {}",
        repo.exists(&cart_id).await?
    );

    Ok(())
}
