//! Typed handles over the product and customer resource actors.

#[macro_use]
mod macros;

mod customer_client;
mod product_client;

pub use customer_client::CustomerClient;
pub use product_client::ProductClient;
