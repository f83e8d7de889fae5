use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product_actor::ProductError;

/// Represents a product in the catalogue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Stock keeping unit, unique across the catalogue.
    pub sku: String,
    pub picture: Option<String>,
    pub price: Decimal,
    pub created_at: DateTime<Utc>,
    /// Set by the store alongside `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCreate {
    pub name: String,
    pub sku: String,
    #[serde(default)]
    pub picture: Option<String>,
    pub price: Decimal,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, sku: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            sku: sku.into(),
            picture: None,
            price,
        }
    }

    pub fn with_picture(mut self, picture: impl Into<String>) -> Self {
        self.picture = Some(picture.into());
        self
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.name.trim().is_empty() {
            return Err(ProductError::ValidationError("name is required".to_string()));
        }
        if self.sku.trim().is_empty() {
            return Err(ProductError::ValidationError("sku is required".to_string()));
        }
        if self.price < Decimal::ZERO {
            return Err(ProductError::ValidationError(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }
        Ok(())
    }
}
