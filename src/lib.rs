//! # storefront-core
//!
//! Order persistence and sales analytics for a small storefront back-end,
//! built as a set of resource actors with typed clients in front of them.
//!
//! - **Domain types** - [`domain::Order`], [`domain::Product`], [`domain::Customer`]
//! - **Actor framework** - one [`actor_framework::ResourceActor`] per collection, reached through a cloneable [`actor_framework::ResourceClient`]
//! - **Order store** - [`store::OrderStore`], with the actor-backed [`store::ActorOrderStore`]
//! - **Analytics** - [`analytics::Period`] resolution and the [`analytics::OrderAggregator`]
//! - **Service** - [`order_service::OrderService`], the surface transports call
//! - **System** - [`app_system::StoreSystem`] wires everything; [`app_system::setup_tracing`] configures logging
//!
//! ```rust,no_run
//! # use std::sync::Arc;
//! # use storefront_core::{app_system::{AppConfig, StoreSystem}, clock::SystemClock, domain::OrderCreate};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let system = StoreSystem::new(&AppConfig::from_env(), Arc::new(SystemClock));
//! let order = system
//!     .order_service
//!     .create_order(OrderCreate::new("Alice", 100.into(), ["p1", "p2"]))
//!     .await?;
//! let sold = system.order_service.get_total_sold("last week").await?;
//! assert_eq!(sold, order.total);
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod analytics;
pub mod app_system;
pub mod auth;
pub mod clients;
pub mod clock;
pub mod customer_actor;
pub mod domain;
pub mod order_actor;
pub mod order_service;
pub mod product_actor;
pub mod store;

#[cfg(test)]
mod mock_framework;
