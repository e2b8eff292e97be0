// Todo data models and DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Todo database model. `user_id` is assigned at creation and never changes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Todo {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Request body for creating a todo.
///
/// The owner is never part of the body; it always comes from the
/// authenticated session.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTodoRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub description: Option<String>,
}

/// Request body for partially updating a todo; omitted fields keep their
/// current values.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTodoRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Pagination query for GET /todos. Missing values default to page 1 and
/// limit 50; non-numeric values are rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct TodoListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

/// One page of a user's todos plus pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    pub total: i64,
    pub page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl TodoPage {
    /// Assemble a page from the scoped query result.
    ///
    /// `limit` must already be validated positive. Out-of-range pages carry
    /// an empty `todos` slice with consistent metadata.
    pub fn new(todos: Vec<Todo>, total: i64, page: u32, limit: u32) -> Self {
        let total_pages = ((total + limit as i64 - 1) / limit as i64) as u32;

        Self {
            todos,
            total,
            page,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// Body payload wrapping a single todo.
#[derive(Debug, Serialize)]
pub struct TodoData {
    pub todo: Todo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn page_meta(total: i64, page: u32, limit: u32) -> TodoPage {
        TodoPage::new(Vec::new(), total, page, limit)
    }

    #[test]
    fn first_page_of_125_items_at_limit_50() {
        let page = page_meta(125, 1, 50);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn last_page_of_125_items_at_limit_50() {
        let page = page_meta(125, 3, 50);
        assert_eq!(page.total_pages, 3);
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn empty_result_has_no_pages() {
        let page = page_meta(0, 1, 50);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_next);
        assert!(!page.has_prev);
    }

    #[test]
    fn out_of_range_page_keeps_meta_consistent() {
        let page = page_meta(10, 9, 50);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_next);
        assert!(page.has_prev);
    }

    #[test]
    fn meta_keys_are_camel_case_on_the_wire() {
        let json = serde_json::to_string(&page_meta(1, 1, 50)).unwrap();
        assert!(json.contains("totalPages"));
        assert!(json.contains("hasNext"));
        assert!(json.contains("hasPrev"));
    }

    proptest! {
        #[test]
        fn prop_page_meta_invariants(total in 0i64..10_000, page in 1u32..100, limit in 1u32..500) {
            let meta = page_meta(total, page, limit);
            let expected_pages = ((total as f64) / (limit as f64)).ceil() as u32;

            prop_assert_eq!(meta.total_pages, expected_pages);
            prop_assert_eq!(meta.has_next, page < expected_pages);
            prop_assert_eq!(meta.has_prev, page > 1);
        }
    }
}
