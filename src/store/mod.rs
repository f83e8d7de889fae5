//! Order persistence boundary.
//!
//! Business logic talks to [`OrderStore`]; [`ActorOrderStore`] is the
//! in-process document collection backed by a [`ResourceActor`](crate::actor_framework::ResourceActor).

mod actor_store;

pub use actor_store::ActorOrderStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Order, OrderCreate, OrderPatch};
use crate::order_actor::OrderError;

#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persist a new order. The store assigns `id` and `created_at`.
    async fn create(&self, order: OrderCreate) -> Result<Order, OrderError>;

    /// Apply the supplied fields to an existing order and return the full record.
    async fn update_by_id(&self, id: &str, patch: OrderPatch) -> Result<Order, OrderError>;

    /// All orders with `created_at >= start`, in store order.
    async fn find_created_at_least(&self, start: DateTime<Utc>) -> Result<Vec<Order>, OrderError>;

    /// The order with the largest `total`.
    ///
    /// Among equal totals the store's natural retrieval order decides. Callers
    /// must not rely on which of several tied orders comes back.
    async fn find_max_by_total(&self) -> Result<Order, OrderError>;
}
