// Database repository for todo records

use sqlx::PgPool;

use crate::todos::{
    error::TodoError,
    models::{CreateTodoRequest, Todo, UpdateTodoRequest},
};

/// Repository for owned todo rows.
///
/// Reads are keyed by id AND owner; the unscoped update/delete helpers are
/// only reachable after the service's ownership check.
#[derive(Clone)]
pub struct TodoRepository {
    pool: PgPool,
}

impl TodoRepository {
    /// Create a new TodoRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Fetch one page of a user's todos (newest first) plus the total count.
    pub async fn find_page(
        &self,
        user_id: i32,
        skip: i64,
        take: i64,
    ) -> Result<(Vec<Todo>, i64), TodoError> {
        let todos = sqlx::query_as::<_, Todo>(
            r#"
            SELECT id, user_id, title, description, completed, created_at
            FROM todos
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(user_id)
        .bind(take)
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        let total: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos WHERE user_id = $1")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await?;

        Ok((todos, total.0))
    }

    /// Find a todo by id and owner in a single lookup.
    pub async fn find_by_id_and_owner(
        &self,
        id: i32,
        user_id: i32,
    ) -> Result<Option<Todo>, TodoError> {
        let todo = sqlx::query_as::<_, Todo>(
            "SELECT id, user_id, title, description, completed, created_at FROM todos WHERE id = $1 AND user_id = $2"
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Insert a todo for the given owner.
    pub async fn create(&self, data: &CreateTodoRequest, user_id: i32) -> Result<Todo, TodoError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            INSERT INTO todos (user_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(user_id)
        .bind(&data.title)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Apply a partial update, keeping `existing`'s values for omitted
    /// fields. The owner column is never part of the statement.
    pub async fn update_by_id(
        &self,
        id: i32,
        data: &UpdateTodoRequest,
        existing: &Todo,
    ) -> Result<Todo, TodoError> {
        let todo = sqlx::query_as::<_, Todo>(
            r#"
            UPDATE todos
            SET title = $1,
                description = $2,
                completed = $3
            WHERE id = $4
            RETURNING id, user_id, title, description, completed, created_at
            "#,
        )
        .bind(data.title.as_ref().unwrap_or(&existing.title))
        .bind(data.description.as_ref().or(existing.description.as_ref()))
        .bind(data.completed.unwrap_or(existing.completed))
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(todo)
    }

    /// Delete a todo and return its last-known state.
    pub async fn delete_by_id(&self, id: i32) -> Result<Todo, TodoError> {
        sqlx::query_as::<_, Todo>(
            "DELETE FROM todos WHERE id = $1 RETURNING id, user_id, title, description, completed, created_at"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(TodoError::NotFound)
    }
}
