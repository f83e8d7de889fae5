use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{error, info, instrument};

use crate::analytics::OrderAggregator;
use crate::clock::Clock;
use crate::domain::{Order, OrderCreate, OrderPatch};
use crate::order_actor::OrderError;
use crate::store::OrderStore;

/// Entry point for order operations used by the transport layer.
///
/// Holds one long-lived store handle. Every call is a single attempt: store
/// failures come back as [`OrderError::StorageError`] and are never retried.
#[derive(Clone)]
pub struct OrderService {
    store: Arc<dyn OrderStore>,
    aggregator: OrderAggregator,
}

impl OrderService {
    pub fn new(store: Arc<dyn OrderStore>, clock: Arc<dyn Clock>) -> Self {
        let aggregator = OrderAggregator::new(Arc::clone(&store), clock);
        Self { store, aggregator }
    }

    #[instrument(
        fields(client_name = %input.client_name, total = %input.total, products = input.product_list.len()),
        skip(self, input)
    )]
    pub async fn create_order(&self, input: OrderCreate) -> Result<Order, OrderError> {
        info!("Processing create_order request");

        if let Err(e) = input.validate() {
            error!(error = %e, "Order validation failed");
            return Err(e);
        }

        let order = self.store.create(input).await.inspect_err(|e| {
            error!(error = %e, "Order creation failed");
        })?;

        info!(order_id = %order.id, "Order created successfully");
        Ok(order)
    }

    /// Replace the supplied fields of an existing order.
    #[instrument(fields(order_id = %id), skip(self, id, patch))]
    pub async fn update_order(&self, id: &str, patch: OrderPatch) -> Result<Order, OrderError> {
        info!(empty_patch = patch.is_empty(), "Processing update_order request");

        if let Err(e) = patch.validate() {
            error!(error = %e, "Order patch validation failed");
            return Err(e);
        }

        let order = self.store.update_by_id(id, patch).await.inspect_err(|e| {
            error!(error = %e, "Order update failed");
        })?;

        info!(total = %order.total, "Order updated successfully");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_total_sold(&self, period_token: &str) -> Result<Decimal, OrderError> {
        self.aggregator.sum_sales_in_period(period_token).await
    }

    #[instrument(skip(self))]
    pub async fn get_highest_amount_order(&self) -> Result<Order, OrderError> {
        self.aggregator.highest_value_order().await
    }
}
