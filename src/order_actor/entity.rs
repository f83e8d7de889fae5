use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderPatch};

impl Entity for Order {
    const NAME: &'static str = "orders";
    type Id = String;
    type CreateParams = OrderCreate;
    type Patch = OrderPatch;

    fn id(&self) -> &String {
        &self.id
    }

    /// Creates a new Order stamped with the store-assigned id and creation time.
    fn from_create_params(id: String, created_at: DateTime<Utc>, params: OrderCreate) -> Result<Self, String> {
        params.validate().map_err(|e| e.into_message())?;
        Ok(Self {
            id,
            client_name: params.client_name,
            total: params.total,
            product_list: params.product_list,
            created_at,
        })
    }

    /// Replaces the supplied fields. `id` and `created_at` are never touched.
    fn on_update(&mut self, patch: OrderPatch) -> Result<(), String> {
        patch.validate().map_err(|e| e.into_message())?;
        if let Some(client_name) = patch.client_name {
            self.client_name = client_name;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(product_list) = patch.product_list {
            self.product_list = product_list;
        }
        Ok(())
    }
}
