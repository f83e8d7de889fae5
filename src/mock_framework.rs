//! # Mock Framework
//!
//! Utilities for testing clients and stores in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_find`] to assert behavior
//! and script the actor's reply. Dropping a responder simulates a storage failure.

use tokio::sync::mpsc;

use crate::actor_framework::{Comparator, Entity, Filter, ResourceClient, ResourceRequest, Response};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// No `ResourceActor` is spawned. The test reads requests off `receiver`,
/// inspects them, and answers (or drops) the response channel itself, which
/// makes success, failure and disconnects deterministic.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Update request
pub async fn expect_update<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(T::Id, T::Patch, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Update { id, patch, respond_to }) => Some((id, patch, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request
pub async fn expect_find<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Filter<T>, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Sorted request
pub async fn expect_sorted<T: Entity>(receiver: &mut mpsc::Receiver<ResourceRequest<T>>) -> Option<(Comparator<T>, usize, Response<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Sorted { compare, limit, respond_to }) => Some((compare, limit, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::CustomerClient;
    use crate::domain::{Customer, CustomerCreate};
    use chrono::Utc;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<Customer>(10);
        let client = CustomerClient::new(inner);

        // Test Create
        let create_client = client.clone();
        let create_task = tokio::spawn(async move {
            let customer = CustomerCreate {
                name: "Test".to_string(),
                lastname: "User".to_string(),
                address: None,
            };
            create_client.create_customer(customer).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Test");
        let stored = Customer {
            id: "customer_1".to_string(),
            name: params.name,
            lastname: params.lastname,
            address: params.address,
            created_at: Utc::now(),
        };
        responder.send(Ok(stored.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(stored));

        // Test Get
        let get_task = tokio::spawn(async move { client.get_customer("customer_2".to_string()).await });
        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "customer_2");
        responder.send(Ok(None)).unwrap();
        assert_eq!(get_task.await.unwrap(), Ok(None));
    }
}
