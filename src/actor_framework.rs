use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

use crate::clock::Clock;

// =============================================================================
// 1. THE ABSTRACTION (Entity trait with hooks)
// =============================================================================

/// Trait that any document stored by a [`ResourceActor`] must implement.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Collection name used in spans and log fields.
    const NAME: &'static str;

    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    fn id(&self) -> &Self::Id;

    /// Construct the full entity from the store-assigned id and creation time.
    fn from_create_params(
        id: Self::Id,
        created_at: DateTime<Utc>,
        params: Self::CreateParams,
    ) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    /// Uniqueness check against an already stored entity. `Some(reason)` rejects the create.
    fn conflicts_with(&self, _existing: &Self) -> Option<String> {
        None
    }

    /// Apply a partial update. Runs against a scratch copy, so an `Err` leaves
    /// the stored entity untouched.
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
}

/// Errors reported by the generic actor layer.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Item rejected: {0}")]
    Rejected(String),
    #[error("Item conflicts with an existing record: {0}")]
    Conflict(String),
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send>;
pub type Comparator<T> = Box<dyn Fn(&T, &T) -> Ordering + Send>;

pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    /// Stable sort over insertion order, then truncate to `limit`.
    Sorted {
        compare: Comparator<T>,
        limit: usize,
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    // Insertion order is the natural retrieval order.
    entries: Vec<T>,
    index: HashMap<T::Id, usize>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
    clock: Arc<dyn Clock>,
    last_created_at: Option<DateTime<Utc>>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
        clock: Arc<dyn Clock>,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            entries: Vec::new(),
            index: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
            clock,
            last_created_at: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    #[instrument(name = "resource_actor", skip(self), fields(collection = T::NAME))]
    pub async fn run(mut self) {
        info!("ResourceActor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.index.get(&id).map(|&pos| self.entries[pos].clone());
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let items: Vec<T> = self.entries.iter().filter(|item| filter(item)).cloned().collect();
                    debug!(matched = items.len(), "Find completed");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Sorted { compare, limit, respond_to } => {
                    let mut items: Vec<&T> = self.entries.iter().collect();
                    items.sort_by(|a, b| compare(a, b));
                    let items: Vec<T> = items.into_iter().take(limit).cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
        info!("ResourceActor stopped");
    }

    /// Creation timestamps never go backwards, even if the clock does.
    fn next_created_at(&self) -> DateTime<Utc> {
        let now = self.clock.now();
        match self.last_created_at {
            Some(last) if last > now => last,
            _ => now,
        }
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let created_at = self.next_created_at();
        let item = T::from_create_params(id.clone(), created_at, params).map_err(|e| {
            warn!(error = %e, "Create rejected");
            FrameworkError::Rejected(e)
        })?;

        if let Some(reason) = self.entries.iter().find_map(|existing| item.conflicts_with(existing)) {
            warn!(reason = %reason, "Create conflicts with stored item");
            return Err(FrameworkError::Conflict(reason));
        }

        self.last_created_at = Some(created_at);
        self.index.insert(item.id().clone(), self.entries.len());
        self.entries.push(item.clone());
        debug!(id = %id, "Item created");
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let Some(&pos) = self.index.get(&id) else {
            debug!(id = %id, "Update target not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut updated = self.entries[pos].clone();
        updated.on_update(patch).map_err(|e| {
            warn!(id = %id, error = %e, "Update rejected");
            FrameworkError::Rejected(e)
        })?;

        self.entries[pos] = updated.clone();
        debug!(id = %id, "Item updated");
        Ok(updated)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Derived Clone would require `T: Clone` on the request type as well.
impl<T: Entity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self { sender: self.sender.clone() }
    }
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn find(
        &self,
        filter: impl Fn(&T) -> bool + Send + 'static,
    ) -> Result<Vec<T>, FrameworkError> {
        let filter: Filter<T> = Box::new(filter);
        self.request(|respond_to| ResourceRequest::Find { filter, respond_to }).await
    }

    pub async fn sorted(
        &self,
        compare: impl Fn(&T, &T) -> Ordering + Send + 'static,
        limit: usize,
    ) -> Result<Vec<T>, FrameworkError> {
        let compare: Comparator<T> = Box::new(compare);
        self.request(|respond_to| ResourceRequest::Sorted { compare, limit, respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
