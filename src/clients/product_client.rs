use crate::actor_framework::ResourceClient;
use crate::domain::{Product, ProductCreate};
use crate::product_actor::ProductError;

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductClient, Product, ProductCreate, ProductError, product);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::ResourceActor;
    use crate::clock::FixedClock;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn start() -> ProductClient {
        start_at(FixedClock::default())
    }

    fn start_at(clock: FixedClock) -> ProductClient {
        let (actor, inner) = ResourceActor::<Product>::new(10, || "product_1".to_string(), Arc::new(clock));
        tokio::spawn(actor.run());
        ProductClient::new(inner)
    }

    #[tokio::test]
    async fn test_create_and_fetch_product() {
        let client = start();
        let params = ProductCreate::new("Mug", "MUG-001", dec!(12.50)).with_picture("mug.png");

        let product = client.create_product(params).await.unwrap();
        assert_eq!(product.sku, "MUG-001");
        assert_eq!(product.picture.as_deref(), Some("mug.png"));

        let fetched = client.get_product(product.id.clone()).await.unwrap();
        assert_eq!(fetched, Some(product));
        assert_eq!(client.get_product("nope".to_string()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_store_sets_both_timestamps() {
        let now = Utc.with_ymd_and_hms(2024, 7, 1, 8, 30, 0).unwrap();
        let client = start_at(FixedClock::new(now));

        let product = client.create_product(ProductCreate::new("Mug", "MUG-001", dec!(12.50))).await.unwrap();
        assert_eq!(product.created_at, now);
        assert_eq!(product.updated_at, now);
    }

    #[tokio::test]
    async fn test_duplicate_sku_is_rejected() {
        let client = start();
        client.create_product(ProductCreate::new("Mug", "MUG-001", dec!(12.50))).await.unwrap();

        let err = client
            .create_product(ProductCreate::new("Other mug", "MUG-001", dec!(9)))
            .await
            .unwrap_err();
        assert_eq!(err, ProductError::AlreadyExists("MUG-001".to_string()));
    }

    #[tokio::test]
    async fn test_invalid_product_never_reaches_actor() {
        let client = start();
        let err = client.create_product(ProductCreate::new("Mug", "", dec!(1))).await.unwrap_err();
        assert!(matches!(err, ProductError::ValidationError(_)));

        let err = client.create_product(ProductCreate::new("Mug", "SKU", dec!(-1))).await.unwrap_err();
        assert!(matches!(err, ProductError::ValidationError(_)));
    }
}
