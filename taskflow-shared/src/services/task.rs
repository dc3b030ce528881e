/// Task operations scoped to the authenticated account
///
/// Reads are filtered by owner. Mutations look the task up first, answer
/// `NotFound` if it's gone and `Forbidden` if someone else owns it; a rejected
/// mutation never touches the row.

use serde::Deserialize;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::{not_blank, ServiceError, ServiceResult};
use crate::auth::authorization::require_owner;
use crate::auth::middleware::AuthContext;
use crate::models::task::{CreateTask, Task, UpdateTask};
use crate::store::Store;

/// Create body
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateTaskInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: String,

    pub description: Option<String>,
}

/// Update body; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateTaskInput {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    pub title: Option<String>,

    pub description: Option<String>,

    pub completed: Option<bool>,
}

impl From<UpdateTaskInput> for UpdateTask {
    fn from(input: UpdateTaskInput) -> Self {
        UpdateTask {
            title: input.title,
            description: input.description,
            completed: input.completed,
        }
    }
}

/// Parses a task id taken from a request path
///
/// # Errors
///
/// `Validation("Invalid task ID")` if `raw` is not a UUID
pub fn parse_task_id(raw: &str) -> ServiceResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::invalid("id", "Invalid task ID"))
}

/// Creates a task owned by the caller
pub async fn create(
    store: &dyn Store,
    auth: &AuthContext,
    input: CreateTaskInput,
) -> ServiceResult<Task> {
    input.validate()?;

    let task = store
        .create_task(CreateTask {
            owner_id: auth.account_id,
            title: input.title,
            description: input.description.unwrap_or_default(),
        })
        .await?;

    info!(task_id = %task.id, owner_id = %task.owner_id, "Task created");
    Ok(task)
}

/// Lists the caller's tasks, newest first
pub async fn list(store: &dyn Store, auth: &AuthContext) -> ServiceResult<Vec<Task>> {
    Ok(store.list_tasks(auth.account_id).await?)
}

/// Loads a task and checks the caller owns it
async fn owned_task(store: &dyn Store, auth: &AuthContext, task_id: Uuid) -> ServiceResult<Task> {
    let task = store
        .find_task(task_id)
        .await?
        .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))?;

    require_owner(auth, task.owner_id)?;

    Ok(task)
}

/// Applies the supplied fields to one of the caller's tasks
///
/// # Errors
///
/// - `Validation` for a blank title
/// - `NotFound("Task not found")` if the task doesn't exist
/// - `Forbidden("Not authorized")` if another account owns it
pub async fn update(
    store: &dyn Store,
    auth: &AuthContext,
    task_id: Uuid,
    input: UpdateTaskInput,
) -> ServiceResult<Task> {
    input.validate()?;

    owned_task(store, auth, task_id).await?;

    let task = store
        .update_task(task_id, input.into())
        .await?
        .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))?;

    info!(task_id = %task.id, completed = task.completed, "Task updated");
    Ok(task)
}

/// Deletes one of the caller's tasks
///
/// # Errors
///
/// Same existence and ownership errors as [`update`]
pub async fn delete(store: &dyn Store, auth: &AuthContext, task_id: Uuid) -> ServiceResult<()> {
    owned_task(store, auth, task_id).await?;

    if !store.delete_task(task_id).await? {
        return Err(ServiceError::NotFound("Task not found".to_string()));
    }

    info!(task_id = %task_id, "Task deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn input(title: &str) -> CreateTaskInput {
        CreateTaskInput {
            title: title.to_string(),
            description: None,
        }
    }

    fn caller() -> AuthContext {
        AuthContext::new(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_create_defaults() {
        let store = MemoryStore::new();
        let auth = caller();

        let task = create(&store, &auth, input("Buy milk")).await.unwrap();

        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.description, "");
        assert!(!task.completed);
        assert_eq!(task.owner_id, auth.account_id);
    }

    #[tokio::test]
    async fn test_create_blank_title_rejected() {
        let store = MemoryStore::new();

        let err = create(&store, &caller(), input("   ")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation { message, .. } if message == "Title is required"));
        assert_eq!(store.task_count().await, 0);
    }

    #[tokio::test]
    async fn test_list_is_scoped_and_newest_first() {
        let store = MemoryStore::new();
        let alice = caller();
        let bob = caller();

        create(&store, &alice, input("a1")).await.unwrap();
        create(&store, &bob, input("b1")).await.unwrap();
        create(&store, &alice, input("a2")).await.unwrap();

        let tasks = list(&store, &alice).await.unwrap();
        let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a2", "a1"]);
        assert!(tasks.iter().all(|t| t.owner_id == alice.account_id));
    }

    #[tokio::test]
    async fn test_update_omitted_fields_unchanged() {
        let store = MemoryStore::new();
        let auth = caller();
        let task = create(
            &store,
            &auth,
            CreateTaskInput {
                title: "Buy milk".to_string(),
                description: Some("2 litres".to_string()),
            },
        )
        .await
        .unwrap();

        let updated = update(
            &store,
            &auth,
            task.id,
            UpdateTaskInput {
                completed: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        assert!(updated.completed);
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, "2 litres");
    }

    #[tokio::test]
    async fn test_non_owner_cannot_mutate() {
        let store = MemoryStore::new();
        let owner = caller();
        let intruder = caller();
        let task = create(&store, &owner, input("mine")).await.unwrap();

        let err = update(
            &store,
            &intruder,
            task.id,
            UpdateTaskInput {
                title: Some("stolen".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));

        let err = delete(&store, &intruder, task.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::Forbidden(_)));

        let unchanged = list(&store, &owner).await.unwrap();
        assert_eq!(unchanged, vec![task]);
    }

    #[tokio::test]
    async fn test_missing_task_not_found() {
        let store = MemoryStore::new();
        let auth = caller();

        let err = update(&store, &auth, Uuid::new_v4(), UpdateTaskInput::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(m) if m == "Task not found"));

        let err = delete(&store, &auth, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_blank_title_rejected() {
        let store = MemoryStore::new();
        let auth = caller();
        let task = create(&store, &auth, input("keep")).await.unwrap();

        let err = update(
            &store,
            &auth,
            task.id,
            UpdateTaskInput {
                title: Some("".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, ServiceError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_delete_removes_task() {
        let store = MemoryStore::new();
        let auth = caller();
        let task = create(&store, &auth, input("gone")).await.unwrap();

        delete(&store, &auth, task.id).await.unwrap();

        assert!(list(&store, &auth).await.unwrap().is_empty());
    }

    #[test]
    fn test_parse_task_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_task_id(&id.to_string()).unwrap(), id);

        let err = parse_task_id("not-a-uuid").unwrap_err();
        assert!(matches!(err, ServiceError::Validation { message, .. } if message == "Invalid task ID"));
    }
}
