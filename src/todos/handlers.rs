// HTTP handlers for todo endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::auth::middleware::AuthenticatedUser;
use crate::response::ApiResponse;
use crate::todos::{
    error::TodoError,
    models::{CreateTodoRequest, Todo, TodoData, TodoListQuery, TodoPage, UpdateTodoRequest},
};
use crate::AppState;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 50;

/// Resolve pagination defaults and reject non-positive values.
fn resolve_pagination(query: TodoListQuery) -> Result<(u32, u32), TodoError> {
    let page = query.page.unwrap_or(DEFAULT_PAGE);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT);

    if page < 1 || limit < 1 {
        return Err(TodoError::ValidationError(
            "page and limit must be positive integers".to_string(),
        ));
    }

    Ok((page, limit))
}

/// Handler for GET /todos
/// Retrieves one page of the authenticated user's todos
#[utoipa::path(
    get,
    path = "/todos",
    params(
        ("page" = Option<u32>, Query, description = "Page number, defaults to 1"),
        ("limit" = Option<u32>, Query, description = "Page size, defaults to 50")
    ),
    responses(
        (status = 200, description = "One page of todos with pagination metadata", body = TodoPage),
        (status = 400, description = "Invalid pagination parameters"),
        (status = 401, description = "Missing or invalid session")
    ),
    tag = "todos"
)]
pub async fn list_todos_handler(
    State(state): State<AppState>,
    AuthenticatedUser { user_id }: AuthenticatedUser,
    Query(query): Query<TodoListQuery>,
) -> Result<Json<ApiResponse<TodoPage>>, TodoError> {
    let (page, limit) = resolve_pagination(query)?;
    let result = state.todo_service.list_page(user_id, page, limit).await?;

    Ok(Json(ApiResponse::data(result)))
}

/// Handler for GET /todos/:id
/// Retrieves a single todo owned by the authenticated user
#[utoipa::path(
    get,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo found", body = Todo),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Todo absent or owned by another user")
    ),
    tag = "todos"
)]
pub async fn get_todo_handler(
    State(state): State<AppState>,
    AuthenticatedUser { user_id }: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TodoData>>, TodoError> {
    let todo = state.todo_service.get_owned(id, user_id).await?;

    Ok(Json(ApiResponse::data(TodoData { todo })))
}

/// Handler for POST /todos
/// Creates a todo owned by the authenticated user
#[utoipa::path(
    post,
    path = "/todos",
    request_body = CreateTodoRequest,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 400, description = "Invalid todo data"),
        (status = 401, description = "Missing or invalid session")
    ),
    tag = "todos"
)]
pub async fn create_todo_handler(
    State(state): State<AppState>,
    AuthenticatedUser { user_id }: AuthenticatedUser,
    Json(request): Json<CreateTodoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TodoData>>), TodoError> {
    request
        .validate()
        .map_err(|e| TodoError::ValidationError(e.to_string()))?;

    let todo = state.todo_service.create(request, user_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Todo created successfully",
            TodoData { todo },
        )),
    ))
}

/// Handler for PUT /todos/:id
/// Partially updates a todo owned by the authenticated user
#[utoipa::path(
    put,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "Todo ID")),
    request_body = UpdateTodoRequest,
    responses(
        (status = 200, description = "Todo updated", body = Todo),
        (status = 400, description = "Invalid todo data"),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Todo absent or owned by another user")
    ),
    tag = "todos"
)]
pub async fn update_todo_handler(
    State(state): State<AppState>,
    AuthenticatedUser { user_id }: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTodoRequest>,
) -> Result<Json<ApiResponse<TodoData>>, TodoError> {
    request
        .validate()
        .map_err(|e| TodoError::ValidationError(e.to_string()))?;

    let todo = state.todo_service.update(id, request, user_id).await?;

    Ok(Json(ApiResponse::with_message(
        "Todo updated successfully",
        TodoData { todo },
    )))
}

/// Handler for DELETE /todos/:id
/// Deletes a todo owned by the authenticated user
#[utoipa::path(
    delete,
    path = "/todos/{id}",
    params(("id" = i32, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo deleted"),
        (status = 401, description = "Missing or invalid session"),
        (status = 404, description = "Todo absent or owned by another user")
    ),
    tag = "todos"
)]
pub async fn delete_todo_handler(
    State(state): State<AppState>,
    AuthenticatedUser { user_id }: AuthenticatedUser,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, TodoError> {
    state.todo_service.delete(id, user_id).await?;

    Ok(Json(ApiResponse::message("Todo deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_defaults_apply_when_absent() {
        let query = TodoListQuery {
            page: None,
            limit: None,
        };
        assert_eq!(resolve_pagination(query).unwrap(), (1, 50));
    }

    #[test]
    fn zero_page_is_rejected() {
        let query = TodoListQuery {
            page: Some(0),
            limit: Some(10),
        };
        let err = resolve_pagination(query).unwrap_err();
        assert!(matches!(err, TodoError::ValidationError(_)));
    }

    #[test]
    fn zero_limit_is_rejected() {
        let query = TodoListQuery {
            page: Some(1),
            limit: Some(0),
        };
        let err = resolve_pagination(query).unwrap_err();
        assert!(matches!(err, TodoError::ValidationError(_)));
    }
}
