use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate};
use crate::product_actor::ProductError;

impl Entity for Product {
    const NAME: &'static str = "products";
    type Id = String;
    type CreateParams = ProductCreate;
    type Patch = (); // Products have no update operation

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Product from creation parameters.
    ///
    /// # Arguments
    /// * `id` - Unique identifier for the product
    /// * `created_at` - Store-assigned creation time
    /// * `params` - Product creation parameters containing name, sku, picture and price
    fn from_create_params(id: String, created_at: DateTime<Utc>, params: ProductCreate) -> Result<Self, String> {
        params.validate().map_err(|e| match e {
            ProductError::ValidationError(msg) => msg,
            other => other.to_string(),
        })?;
        Ok(Self {
            id,
            name: params.name,
            sku: params.sku,
            picture: params.picture,
            price: params.price,
            created_at,
            updated_at: created_at,
        })
    }

    /// SKUs are unique across the catalogue.
    fn conflicts_with(&self, existing: &Self) -> Option<String> {
        (self.sku == existing.sku).then(|| self.sku.clone())
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
