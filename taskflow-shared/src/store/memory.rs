/// In-memory store
///
/// Holds everything behind a single `RwLock`. Tasks are kept in insertion
/// order so listing newest-first is stable even when two tasks share a
/// timestamp.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AccountStore, Store, StoreError, StoreResult, TaskStore};
use crate::models::account::{Account, CreateAccount, UpdateAccount};
use crate::models::task::{CreateTask, Task, UpdateTask};

#[derive(Debug, Default)]
struct Inner {
    accounts: HashMap<Uuid, Account>,
    tasks: Vec<Task>,
}

/// Process-local store
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored tasks across all accounts
    pub async fn task_count(&self) -> usize {
        self.inner.read().await.tasks.len()
    }

    pub async fn account_count(&self) -> usize {
        self.inner.read().await.accounts.len()
    }
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<Uuid>) -> bool {
        self.accounts
            .values()
            .any(|a| a.email == email && Some(a.id) != except)
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    async fn create_account(&self, data: CreateAccount) -> StoreResult<Account> {
        let mut inner = self.inner.write().await;

        if inner.email_taken(&data.email, None) {
            return Err(StoreError::Duplicate("email".to_string()));
        }

        let now = Utc::now();
        let account = Account {
            id: Uuid::new_v4(),
            name: data.name,
            email: data.email,
            password_hash: data.password_hash,
            created_at: now,
            updated_at: now,
        };
        inner.accounts.insert(account.id, account.clone());

        Ok(account)
    }

    async fn find_account(&self, id: Uuid) -> StoreResult<Option<Account>> {
        Ok(self.inner.read().await.accounts.get(&id).cloned())
    }

    async fn find_account_by_email(&self, email: &str) -> StoreResult<Option<Account>> {
        let inner = self.inner.read().await;
        Ok(inner.accounts.values().find(|a| a.email == email).cloned())
    }

    async fn update_account(
        &self,
        id: Uuid,
        data: UpdateAccount,
    ) -> StoreResult<Option<Account>> {
        let mut inner = self.inner.write().await;

        if let Some(email) = &data.email {
            if inner.email_taken(email, Some(id)) {
                return Err(StoreError::Duplicate("email".to_string()));
            }
        }

        let Some(account) = inner.accounts.get_mut(&id) else {
            return Ok(None);
        };

        if let Some(name) = data.name {
            account.name = name;
        }
        if let Some(email) = data.email {
            account.email = email;
        }
        if let Some(password_hash) = data.password_hash {
            account.password_hash = password_hash;
        }
        account.updated_at = Utc::now();

        Ok(Some(account.clone()))
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn create_task(&self, data: CreateTask) -> StoreResult<Task> {
        let now = Utc::now();
        let task = Task {
            id: Uuid::new_v4(),
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        self.inner.write().await.tasks.push(task.clone());

        Ok(task)
    }

    async fn find_task(&self, id: Uuid) -> StoreResult<Option<Task>> {
        let inner = self.inner.read().await;
        Ok(inner.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(&self, owner_id: Uuid) -> StoreResult<Vec<Task>> {
        let inner = self.inner.read().await;
        Ok(inner
            .tasks
            .iter()
            .rev()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update_task(&self, id: Uuid, data: UpdateTask) -> StoreResult<Option<Task>> {
        let mut inner = self.inner.write().await;

        let Some(task) = inner.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        data.apply_to(task);
        task.updated_at = Utc::now();

        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, id: Uuid) -> StoreResult<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.tasks.len();
        inner.tasks.retain(|t| t.id != id);
        Ok(inner.tasks.len() < before)
    }
}

#[async_trait]
impl Store for MemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
