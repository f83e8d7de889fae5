//! Sales analytics over the order store.

pub mod aggregator;
pub mod period;

pub use aggregator::OrderAggregator;
pub use period::{resolve, Period};
