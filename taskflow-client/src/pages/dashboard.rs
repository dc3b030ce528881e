/// Dashboard: the caller's tasks and profile
///
/// The page never patches its snapshot locally. Every successful mutation is
/// followed by a full task re-fetch, and a 401 anywhere logs the user out.

use uuid::Uuid;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{NewTask, Profile, Task, TaskPatch};
use crate::notifications::Notifications;
use crate::router::Route;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TaskFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl TaskFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            TaskFilter::All => true,
            TaskFilter::Completed => task.completed,
            TaskFilter::Pending => !task.completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardPage {
    api: ApiClient,
    pub tasks: Vec<Task>,
    pub profile: Option<Profile>,
    /// Add-task input
    pub new_title: String,
    pub editing_id: Option<Uuid>,
    pub editing_title: String,
    pub search: String,
    pub filter: TaskFilter,
}

impl DashboardPage {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            tasks: Vec::new(),
            profile: None,
            new_title: String::new(),
            editing_id: None,
            editing_title: String::new(),
            search: String::new(),
            filter: TaskFilter::All,
        }
    }

    /// Fetches tasks and profile; any failure logs out
    pub async fn load(&mut self, notes: &mut Notifications) -> Option<Route> {
        let tasks = self.api.list_tasks().await;
        let profile = self.api.profile().await;

        match (tasks, profile) {
            (Ok(tasks), Ok(profile)) => {
                self.tasks = tasks;
                self.profile = Some(profile);
                None
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::debug!(error = %e, "Dashboard load failed");
                Some(self.logout(notes))
            }
        }
    }

    /// Adds a task from `new_title`; blank titles are ignored
    pub async fn add_task(&mut self, notes: &mut Notifications) -> Option<Route> {
        if self.new_title.trim().is_empty() {
            return None;
        }

        let task = NewTask {
            title: self.new_title.clone(),
            description: None,
        };
        let result = self.api.create_task(&task).await.map(|_| ());
        if result.is_ok() {
            self.new_title.clear();
        }
        self.after_mutation(result, "Task added", notes).await
    }

    /// Flips a task's completion flag
    pub async fn toggle(&mut self, id: Uuid, notes: &mut Notifications) -> Option<Route> {
        let completed = self.tasks.iter().find(|t| t.id == id)?.completed;

        let patch = TaskPatch {
            completed: Some(!completed),
            ..TaskPatch::default()
        };
        let result = self.api.update_task(id, &patch).await.map(|_| ());
        self.after_mutation(result, "Task updated", notes).await
    }

    /// Puts a task's title into the edit box
    pub fn start_edit(&mut self, id: Uuid) {
        if let Some(task) = self.tasks.iter().find(|t| t.id == id) {
            self.editing_id = Some(id);
            self.editing_title = task.title.clone();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.editing_title.clear();
    }

    /// Saves the edit box; blank titles are ignored
    pub async fn save_edit(&mut self, notes: &mut Notifications) -> Option<Route> {
        let id = self.editing_id?;
        if self.editing_title.trim().is_empty() {
            return None;
        }

        let patch = TaskPatch {
            title: Some(self.editing_title.clone()),
            ..TaskPatch::default()
        };
        let result = self.api.update_task(id, &patch).await.map(|_| ());
        if result.is_ok() {
            self.cancel_edit();
        }
        self.after_mutation(result, "Task edited", notes).await
    }

    pub async fn delete(&mut self, id: Uuid, notes: &mut Notifications) -> Option<Route> {
        let result = self.api.delete_task(id).await.map(|_| ());
        self.after_mutation(result, "Task deleted", notes).await
    }

    /// Tasks matching the search box and filter, in snapshot order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        let needle = self.search.to_lowercase();
        self.tasks
            .iter()
            .filter(|t| t.title.to_lowercase().contains(&needle))
            .filter(|t| self.filter.matches(t))
            .collect()
    }

    /// Drops the token and returns to the login page
    pub fn logout(&mut self, notes: &mut Notifications) -> Route {
        if let Err(e) = self.api.logout() {
            tracing::warn!(error = %e, "Failed to clear stored token");
        }
        self.tasks.clear();
        self.profile = None;
        self.cancel_edit();
        notes.success("Logged out");
        Route::Login
    }

    async fn refetch(&mut self) -> ClientResult<()> {
        self.tasks = self.api.list_tasks().await?;
        Ok(())
    }

    async fn after_mutation(
        &mut self,
        result: ClientResult<()>,
        success: &str,
        notes: &mut Notifications,
    ) -> Option<Route> {
        let outcome = match result {
            Ok(()) => self.refetch().await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {
                notes.success(success);
                None
            }
            Err(ClientError::Unauthorized(_)) => Some(self.logout(notes)),
            Err(e) => {
                notes.error(e.server_message().unwrap_or("Something went wrong"));
                None
            }
        }
    }
}
