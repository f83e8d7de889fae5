use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::app_system::AppConfig;
use crate::auth::MockAuthenticator;
use crate::clients::{CustomerClient, ProductClient};
use crate::clock::Clock;
use crate::domain::{Customer, Order, Product};
use crate::order_service::OrderService;
use crate::store::ActorOrderStore;

/// Sequential ids of the form `<prefix>_<n>`, starting at 1.
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

/// The storefront back-end: one resource actor per collection plus the
/// services wired on top of them.
///
/// Responsible for starting up actors, wiring them together, and handling shutdown.
pub struct StoreSystem {
    pub order_service: OrderService,
    pub product_client: ProductClient,
    pub customer_client: CustomerClient,
    pub authenticator: Arc<MockAuthenticator>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Start every actor. Must be called inside a tokio runtime.
    #[instrument(name = "store_system", skip_all)]
    pub fn new(config: &AppConfig, clock: Arc<dyn Clock>) -> Self {
        info!(channel_buffer = config.channel_buffer, "Starting store system");
        let mut handles = Vec::new();

        let (order_actor, order_resource_client) =
            ResourceActor::<Order>::new(config.channel_buffer, sequential_ids("order"), Arc::clone(&clock));
        handles.push(tokio::spawn(order_actor.run()));
        let order_store = Arc::new(ActorOrderStore::new(order_resource_client));
        let order_service = OrderService::new(order_store, Arc::clone(&clock));

        let (product_actor, product_resource_client) =
            ResourceActor::<Product>::new(config.channel_buffer, sequential_ids("product"), Arc::clone(&clock));
        handles.push(tokio::spawn(product_actor.run()));
        let product_client = ProductClient::new(product_resource_client);

        let (customer_actor, customer_resource_client) =
            ResourceActor::<Customer>::new(config.channel_buffer, sequential_ids("customer"), Arc::clone(&clock));
        handles.push(tokio::spawn(customer_actor.run()));
        let customer_client = CustomerClient::new(customer_resource_client);

        let authenticator = Arc::new(MockAuthenticator::new(config.auth_token_ttl(), clock));

        info!("Store system started successfully");
        Self {
            order_service,
            product_client,
            customer_client,
            authenticator,
            handles,
        }
    }

    /// Gracefully shutdown the system.
    ///
    /// Dropping the handles closes each actor's mailbox; actors stop once
    /// every clone of their handle is gone, so clones taken out of the system
    /// must be dropped first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store system");

        drop(self.order_service);
        drop(self.product_client);
        drop(self.customer_client);

        let mut failures = 0;
        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                failures += 1;
            }
        }

        if failures > 0 {
            return Err(format!("{} actor task(s) failed during shutdown", failures));
        }
        info!("Store system shutdown complete");
        Ok(())
    }
}
