use std::sync::Arc;

use rust_decimal::Decimal;
use storefront_core::app_system::{setup_tracing, AppConfig, StoreSystem};
use storefront_core::auth::Authenticator;
use storefront_core::clock::SystemClock;
use storefront_core::domain::{CustomerCreate, OrderCreate, OrderPatch, ProductCreate};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = AppConfig::from_env();
    // Setup tracing once for the entire application
    setup_tracing(&config);

    info!("Starting storefront back-end");

    let system = StoreSystem::new(&config, Arc::new(SystemClock));

    let token = system
        .authenticator
        .login("test", "password")
        .await
        .map_err(|e| e.to_string())?;
    let principal = system
        .authenticator
        .verify(&token.access_token)
        .await
        .map_err(|e| e.to_string())?;
    info!(username = %principal.username, "Authenticated");

    let span = tracing::info_span!("catalogue_setup");
    let product_ids = async {
        let mut ids = Vec::new();
        for (name, sku, price) in [("Mug", "MUG-001", Decimal::new(1250, 2)), ("Tea", "TEA-042", Decimal::new(899, 2))] {
            let product = system
                .product_client
                .create_product(ProductCreate::new(name, sku, price))
                .await
                .map_err(|e| e.to_string())?;
            ids.push(product.id);
        }
        system
            .customer_client
            .create_customer(CustomerCreate {
                name: "Alice".to_string(),
                lastname: "Liddell".to_string(),
                address: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(ids)
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let first = system
            .order_service
            .create_order(OrderCreate::new("Alice", Decimal::new(2149, 2), product_ids.clone()))
            .await?;
        let second = system
            .order_service
            .create_order(OrderCreate::new("Bob", Decimal::new(1250, 2), [product_ids[0].clone()]))
            .await?;
        let patch = OrderPatch {
            total: Some(Decimal::new(3750, 2)),
            product_list: Some(vec![product_ids[0].clone(); 3]),
            ..Default::default()
        };
        system.order_service.update_order(&second.id, patch).await?;
        Ok::<_, storefront_core::order_actor::OrderError>(first)
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order) => info!(order_id = %order.id, "Orders processed successfully"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    for token in ["last day", "last month", "last year"] {
        match system.order_service.get_total_sold(token).await {
            Ok(total) => info!(period = token, %total, "Total sold"),
            Err(e) => error!(period = token, error = %e, "Sales query failed"),
        }
    }

    match system.order_service.get_highest_amount_order().await {
        Ok(order) => {
            let json = serde_json::to_string(&order).map_err(|e| e.to_string())?;
            info!(order = %json, "Highest amount order");
        }
        Err(e) => error!(error = %e, "Highest amount query failed"),
    }

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
