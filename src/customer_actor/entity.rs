use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::customer_actor::CustomerError;
use crate::domain::{Customer, CustomerCreate};

impl Entity for Customer {
    const NAME: &'static str = "customers";
    type Id = String;
    type CreateParams = CustomerCreate;
    type Patch = ();

    fn id(&self) -> &String {
        &self.id
    }

    fn from_create_params(id: String, created_at: DateTime<Utc>, params: CustomerCreate) -> Result<Self, String> {
        params.validate().map_err(|e| match e {
            CustomerError::ValidationError(msg) => msg,
            other => other.to_string(),
        })?;
        Ok(Self {
            id,
            name: params.name,
            lastname: params.lastname,
            address: params.address,
            created_at,
        })
    }

    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }
}
