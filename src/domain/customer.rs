use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::customer_actor::CustomerError;

/// A store customer record.
///
/// Not linked to [`Order`](super::Order): an order carries a free-text
/// `client_name`, never a customer id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub lastname: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a new customer.
#[derive(Debug, Clone, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub lastname: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl CustomerCreate {
    pub fn validate(&self) -> Result<(), CustomerError> {
        if self.name.trim().is_empty() {
            return Err(CustomerError::ValidationError("name is required".to_string()));
        }
        if self.lastname.trim().is_empty() {
            return Err(CustomerError::ValidationError("lastname is required".to_string()));
        }
        Ok(())
    }
}
