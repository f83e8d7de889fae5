/// Generates `get_<entity>` and `create_<entity>` on a client wrapping
/// `ResourceClient<$entity>` in a field named `inner`.
///
/// `create_<entity>` validates the payload before it is sent, so malformed
/// input never reaches the actor.
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $create:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self, params))]
                pub async fn [<create_ $entity_name_snake>](&self, params: $create) -> Result<$entity, $error> {
                    tracing::debug!("Sending request");
                    params.validate()?;
                    let created = self.inner.create(params).await.map_err(<$error>::from)?;
                    tracing::info!(id = %created.id, "Created");
                    Ok(created)
                }
            }
        }
    };
}

macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: $crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $create:ty, $error:ty, $entity_name_snake:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_methods!($client_name, $entity, $create, $error, $entity_name_snake);
    };
}
