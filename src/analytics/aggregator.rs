use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info, instrument};

use crate::analytics::Period;
use crate::clock::Clock;
use crate::domain::Order;
use crate::order_actor::OrderError;
use crate::store::OrderStore;

/// Read-only sales figures over the order store.
///
/// Each call works on a fresh snapshot from the store and keeps nothing
/// afterwards.
#[derive(Clone)]
pub struct OrderAggregator {
    store: Arc<dyn OrderStore>,
    clock: Arc<dyn Clock>,
}

impl OrderAggregator {
    pub fn new(store: Arc<dyn OrderStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Sum of `total` over every order created within `token`'s period.
    ///
    /// An unknown token fails with [`OrderError::InvalidPeriod`] before the
    /// store is queried. No matching orders sums to zero. A sum outside the
    /// `Decimal` range fails with [`OrderError::StorageError`].
    #[instrument(skip(self))]
    pub async fn sum_sales_in_period(&self, token: &str) -> Result<Decimal, OrderError> {
        let period: Period = token.parse()?;
        self.sum_sales(period).await
    }

    #[instrument(skip(self, period), fields(period = %period))]
    pub async fn sum_sales(&self, period: Period) -> Result<Decimal, OrderError> {
        let now = self.clock.now();
        let start = period.start(now);
        debug!(%now, %start, "Resolved period");

        let orders = self.store.find_created_at_least(start).await?;
        let total = orders
            .iter()
            .try_fold(Decimal::ZERO, |acc, order| acc.checked_add(order.total))
            .ok_or_else(|| {
                OrderError::StorageError(format!(
                    "sales total over {} orders exceeds the decimal range",
                    orders.len()
                ))
            })?;

        info!(order_count = orders.len(), %total, "Computed sales total");
        Ok(total)
    }

    /// The order with the largest `total` in the whole store.
    ///
    /// Which of several equally large orders is returned is not guaranteed.
    #[instrument(skip(self))]
    pub async fn highest_value_order(&self) -> Result<Order, OrderError> {
        let order = self.store.find_max_by_total().await?;
        info!(order_id = %order.id, total = %order.total, "Found highest value order");
        Ok(order)
    }
}
