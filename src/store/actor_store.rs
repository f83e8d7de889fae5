use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Order, OrderCreate, OrderPatch};
use crate::order_actor::OrderError;
use crate::store::OrderStore;

/// [`OrderStore`] over the order resource actor.
#[derive(Clone)]
pub struct ActorOrderStore {
    inner: ResourceClient<Order>,
}

impl ActorOrderStore {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl OrderStore for ActorOrderStore {
    #[instrument(skip(self, order))]
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.inner.create(order).await?)
    }

    #[instrument(skip(self, patch))]
    async fn update_by_id(&self, id: &str, patch: OrderPatch) -> Result<Order, OrderError> {
        debug!("Sending request");
        Ok(self.inner.update(id.to_string(), patch).await?)
    }

    #[instrument(skip(self))]
    async fn find_created_at_least(&self, start: DateTime<Utc>) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        Ok(self.inner.find(move |order| order.created_at >= start).await?)
    }

    #[instrument(skip(self))]
    async fn find_max_by_total(&self) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .sorted(|a, b| b.total.cmp(&a.total), 1)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| OrderError::NotFound("No orders found".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::mock_framework::{create_mock_client, expect_create, expect_find, expect_sorted, expect_update};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn order(id: &str, total: rust_decimal::Decimal, created_at: DateTime<Utc>) -> Order {
        Order {
            id: id.to_string(),
            client_name: "Alice".to_string(),
            total,
            product_list: vec![],
            created_at,
        }
    }

    #[tokio::test]
    async fn test_find_created_at_least_sends_inclusive_filter() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let store = ActorOrderStore::new(client);
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let task = tokio::spawn(async move { store.find_created_at_least(start).await });

        let (filter, responder) = expect_find(&mut receiver).await.expect("Expected Find request");
        assert!(filter(&order("o1", dec!(1), start)));
        assert!(filter(&order("o2", dec!(1), start + chrono::Duration::seconds(1))));
        assert!(!filter(&order("o3", dec!(1), start - chrono::Duration::seconds(1))));
        responder.send(Ok(vec![order("o1", dec!(1), start)])).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.len(), 1);
    }

    #[tokio::test]
    async fn test_find_max_by_total_sorts_descending_and_limits_to_one() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let store = ActorOrderStore::new(client);
        let now = Utc::now();

        let task = tokio::spawn(async move { store.find_max_by_total().await });

        let (compare, limit, responder) = expect_sorted(&mut receiver).await.expect("Expected Sorted request");
        assert_eq!(limit, 1);
        let (small, big) = (order("a", dec!(10), now), order("b", dec!(50), now));
        assert_eq!(compare(&big, &small), std::cmp::Ordering::Less);
        responder.send(Ok(vec![big.clone()])).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), big);
    }

    #[tokio::test]
    async fn test_find_max_on_empty_store_is_not_found() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let store = ActorOrderStore::new(client);

        let task = tokio::spawn(async move { store.find_max_by_total().await });
        let (_, _, responder) = expect_sorted(&mut receiver).await.expect("Expected Sorted request");
        responder.send(Ok(vec![])).unwrap();

        assert!(matches!(task.await.unwrap(), Err(OrderError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_framework_errors_map_to_order_errors() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let store = ActorOrderStore::new(client);

        let update_store = store.clone();
        let task = tokio::spawn(async move { update_store.update_by_id("order_9", OrderPatch::default()).await });
        let (id, _, responder) = expect_update(&mut receiver).await.expect("Expected Update request");
        assert_eq!(id, "order_9");
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();
        assert_eq!(task.await.unwrap(), Err(OrderError::NotFound("order_9".to_string())));

        // A responder dropped mid-request is a storage failure.
        let task = tokio::spawn(async move {
            store.create(OrderCreate::new("Bob", dec!(5), ["p1"])).await
        });
        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.client_name, "Bob");
        drop(responder);
        assert!(matches!(task.await.unwrap(), Err(OrderError::StorageError(_))));
    }
}
