/// Task endpoints
///
/// All routes require a bearer token and only ever touch the caller's tasks.
///
/// # Endpoints
///
/// - `POST   /api/v1/tasks`      - Create task
/// - `GET    /api/v1/tasks`      - List tasks, newest first
/// - `PUT    /api/v1/tasks/:id`  - Update title, description or completion
/// - `DELETE /api/v1/tasks/:id`  - Delete task

use crate::{app::AppState, error::ApiResult, extract::ApiJson};
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use taskflow_shared::{
    auth::middleware::AuthContext,
    models::task::Task,
    services::task::{self, parse_task_id, CreateTaskInput, UpdateTaskInput},
};

/// Response body for deletions
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Creates a task; answers `201 Created` with the task
pub async fn create_task(
    State(state): State<AppState>,
    auth: AuthContext,
    ApiJson(req): ApiJson<CreateTaskInput>,
) -> ApiResult<(StatusCode, ApiJson<Task>)> {
    let task = task::create(state.store.as_ref(), &auth, req).await?;

    Ok((StatusCode::CREATED, ApiJson(task)))
}

pub async fn list_tasks(
    State(state): State<AppState>,
    auth: AuthContext,
) -> ApiResult<ApiJson<Vec<Task>>> {
    let tasks = task::list(state.store.as_ref(), &auth).await?;

    Ok(ApiJson(tasks))
}

/// Updates a task
///
/// # Errors
///
/// - `400 Bad Request`: Invalid task ID or blank title
/// - `403 Forbidden`: Task belongs to another account
/// - `404 Not Found`: No such task
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateTaskInput>,
) -> ApiResult<ApiJson<Task>> {
    let task_id = parse_task_id(&id)?;
    let task = task::update(state.store.as_ref(), &auth, task_id, req).await?;

    Ok(ApiJson(task))
}

/// Deletes a task; same errors as [`update_task`]
pub async fn delete_task(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id): Path<String>,
) -> ApiResult<ApiJson<MessageResponse>> {
    let task_id = parse_task_id(&id)?;
    task::delete(state.store.as_ref(), &auth, task_id).await?;

    Ok(ApiJson(MessageResponse {
        message: "Task deleted successfully".to_string(),
    }))
}
