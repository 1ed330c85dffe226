//! Demo binary: seeds the catalog and walks the whole shopping flow.
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

use std::time::Duration;
use storefront::catalog_actor::ProductFilter;
use storefront::checkout::{Checkout, CheckoutForm};
use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use storefront::model::{ProductCreate, Rating};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting storefront demo");
    let system = StorefrontSystem::new();

    // Seed the catalog the way the upstream source would populate it.
    let seed = vec![
        ProductCreate {
            title: "Fjallraven Foldsack No. 1 Backpack".to_string(),
            category: "men's clothing".to_string(),
            image: None,
            price: 109.95,
            rating: Rating {
                rate: 3.9,
                count: 120,
            },
            description: "Fits 15 inch laptops, everyday use.".to_string(),
        },
        ProductCreate {
            title: "Solid Gold Petite Micropave".to_string(),
            category: "jewelery".to_string(),
            image: None,
            price: 168.0,
            rating: Rating {
                rate: 3.9,
                count: 70,
            },
            description: "Satisfaction guaranteed.".to_string(),
        },
        ProductCreate {
            title: "Portable External Hard Drive 2TB".to_string(),
            category: "electronics".to_string(),
            image: None,
            price: 64.0,
            rating: Rating {
                rate: 4.8,
                count: 400,
            },
            description: "USB 3.0 portable storage.".to_string(),
        },
    ];
    for params in seed {
        system
            .catalog_client
            .add_product(params)
            .await
            .map_err(|e| e.to_string())?;
    }

    let span = tracing::info_span!("browsing");
    let picked = async {
        let products = system
            .catalog_client
            .list_products()
            .await
            .map_err(|e| e.to_string())?;
        let categories = system
            .catalog_client
            .list_categories()
            .await
            .map_err(|e| e.to_string())?;
        info!(
            products = products.len(),
            categories = categories.len(),
            "Catalog loaded"
        );

        let filter = ProductFilter {
            min_rating: 4.0,
            ..Default::default()
        };
        let matched = filter.apply(&products);
        info!(matched = matched.len(), "Filtered by rating");
        Ok::<_, String>(matched)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("shopping");
    async {
        // One of the filtered products twice, one straight off the listing.
        let drive = picked.first().ok_or("no product matched the filter")?;
        system
            .cart_client
            .add_item(drive.clone())
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_item(drive.clone())
            .await
            .map_err(|e| e.to_string())?;

        let backpack = system
            .catalog_client
            .get_product(storefront::model::ProductId(1))
            .await
            .map_err(|e| e.to_string())?;
        system
            .cart_client
            .add_item(backpack)
            .await
            .map_err(|e| e.to_string())?;

        system
            .cart_client
            .update_quantity(drive.id.clone(), 3)
            .await
            .map_err(|e| e.to_string())?;

        let total = system.cart_client.total().await.map_err(|e| e.to_string())?;
        let count = system
            .cart_client
            .item_count()
            .await
            .map_err(|e| e.to_string())?;
        info!(total, count, "Cart ready for checkout");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("checkout");
    async {
        let checkout = Checkout::with_delay(system.cart_client.clone(), Duration::from_secs(2));
        let form = CheckoutForm {
            name: "Alice Example".to_string(),
            email: "alice@example.com".to_string(),
            address: "Calle 1 # 2-3".to_string(),
            city: "Bogota".to_string(),
            zip_code: "110111".to_string(),
            card_number: "4111 1111 1111 1111".to_string(),
            expiry_date: "12/30".to_string(),
            cvv: "123".to_string(),
        };
        let confirmation = checkout.submit(form).await.map_err(|e| e.to_string())?;
        info!(
            lines = confirmation.items.len(),
            total = confirmation.total,
            "Order confirmed"
        );

        let remaining = system
            .cart_client
            .item_count()
            .await
            .map_err(|e| e.to_string())?;
        info!(remaining, "Cart after checkout");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    system.shutdown().await?;
    info!("Demo completed");
    Ok(())
}
