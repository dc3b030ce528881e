/// Persistence seam for accounts and tasks
///
/// Services talk to storage only through the [`AccountStore`] and
/// [`TaskStore`] traits, combined as [`Store`]. Two implementations exist:
///
/// - [`postgres::PgStore`]: the production store, backed by the `models` SQL
/// - [`memory::MemoryStore`]: a process-local store used by tests and by
///   `DATABASE_URL=memory`
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use taskflow_shared::store::{memory::MemoryStore, Store};
///
/// let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
/// ```

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::account::{Account, CreateAccount, UpdateAccount};
use crate::models::task::{CreateTask, Task, UpdateTask};

pub mod memory;
pub mod postgres;

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A unique field already holds this value; carries the field name
    #[error("Duplicate value for {0}")]
    Duplicate(String),

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Account persistence
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Inserts an account, failing with `Duplicate("email")` on a taken email
    async fn create_account(&self, data: CreateAccount) -> StoreResult<Account>;

    async fn find_account(&self, id: Uuid) -> StoreResult<Option<Account>>;

    async fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>>;

    /// Writes the present fields, returning None if the account is gone
    async fn update_account(&self, id: Uuid, data: UpdateAccount)
        -> StoreResult<Option<Account>>;
}

/// Task persistence
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create_task(&self, data: CreateTask) -> StoreResult<Task>;

    async fn find_task(&self, id: Uuid) -> StoreResult<Option<Task>>;

    /// All tasks owned by `owner_id`, newest first
    async fn list_tasks(&self, owner_id: Uuid) -> StoreResult<Vec<Task>>;

    async fn update_task(&self, id: Uuid, data: UpdateTask) -> StoreResult<Option<Task>>;

    /// Returns true if a task was removed
    async fn delete_task(&self, id: Uuid) -> StoreResult<bool>;
}

/// Full store used by the services
#[async_trait]
pub trait Store: AccountStore + TaskStore {
    /// Short backend name for logs and health output
    fn backend(&self) -> &'static str;

    /// Checks the backend is reachable
    async fn ping(&self) -> StoreResult<()>;
}
