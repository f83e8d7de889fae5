use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::order_actor::OrderError;

/// A placed order. Owned by the order store; callers only ever see snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_name: String,
    pub total: Decimal,
    /// Product ids, in the order they were added. Duplicates are allowed.
    pub product_list: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderCreate {
    pub client_name: String,
    pub total: Decimal,
    #[serde(default)]
    pub product_list: Vec<String>,
}

/// Partial update. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderPatch {
    pub client_name: Option<String>,
    pub total: Option<Decimal>,
    pub product_list: Option<Vec<String>>,
}

impl OrderCreate {
    pub fn new<I, S>(client_name: impl Into<String>, total: Decimal, product_list: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            client_name: client_name.into(),
            total,
            product_list: product_list.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        validate_client_name(&self.client_name)?;
        validate_total(self.total)
    }
}

impl OrderPatch {
    pub fn validate(&self) -> Result<(), OrderError> {
        if let Some(client_name) = &self.client_name {
            validate_client_name(client_name)?;
        }
        if let Some(total) = self.total {
            validate_total(total)?;
        }
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.client_name.is_none() && self.total.is_none() && self.product_list.is_none()
    }
}

pub fn validate_client_name(client_name: &str) -> Result<(), OrderError> {
    if client_name.trim().is_empty() {
        return Err(OrderError::ValidationError("client_name is required".to_string()));
    }
    Ok(())
}

pub fn validate_total(total: Decimal) -> Result<(), OrderError> {
    if total < Decimal::ZERO {
        return Err(OrderError::ValidationError(format!(
            "total must be non-negative, got {}",
            total
        )));
    }
    Ok(())
}
