// Todo service - ownership-scoped business logic

use tracing::debug;

use crate::todos::{
    error::TodoError,
    models::{CreateTodoRequest, Todo, TodoPage, UpdateTodoRequest},
    repository::TodoRepository,
};

/// Service enforcing the ownership invariant over todo CRUD.
///
/// Every operation is parameterized by the authenticated user's id; mutation
/// paths re-check ownership before writing (read-then-act) since the storage
/// layer has no row-level access control of its own. Built once at startup
/// and shared across requests.
#[derive(Clone)]
pub struct TodoService {
    repo: TodoRepository,
}

impl TodoService {
    /// Create a new TodoService
    pub fn new(repo: TodoRepository) -> Self {
        Self { repo }
    }

    /// Fetch one page of the user's todos, newest first.
    ///
    /// `page` and `limit` must be positive (validated at the boundary);
    /// out-of-range pages yield an empty slice with consistent metadata.
    pub async fn list_page(
        &self,
        user_id: i32,
        page: u32,
        limit: u32,
    ) -> Result<TodoPage, TodoError> {
        let skip = (page as i64 - 1) * limit as i64;
        let (todos, total) = self.repo.find_page(user_id, skip, limit as i64).await?;

        debug!(user_id, page, total, "listed todo page");
        Ok(TodoPage::new(todos, total, page, limit))
    }

    /// Fetch a single todo scoped to its owner.
    ///
    /// A todo that does not exist and a todo owned by someone else both
    /// surface as `NotFound`.
    pub async fn get_owned(&self, id: i32, user_id: i32) -> Result<Todo, TodoError> {
        self.repo
            .find_by_id_and_owner(id, user_id)
            .await?
            .ok_or(TodoError::NotFound)
    }

    /// Create a todo owned by the authenticated user. The owner id comes
    /// from the session, never from request data.
    pub async fn create(&self, data: CreateTodoRequest, user_id: i32) -> Result<Todo, TodoError> {
        self.repo.create(&data, user_id).await
    }

    /// Update a todo after re-checking ownership; the owner cannot change.
    pub async fn update(
        &self,
        id: i32,
        data: UpdateTodoRequest,
        user_id: i32,
    ) -> Result<Todo, TodoError> {
        let existing = self.get_owned(id, user_id).await?;
        self.repo.update_by_id(id, &data, &existing).await
    }

    /// Delete a todo after re-checking ownership; returns the deleted row's
    /// last-known state.
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<Todo, TodoError> {
        self.get_owned(id, user_id).await?;
        self.repo.delete_by_id(id).await
    }
}
