// Todos module
// Ownership-scoped CRUD and pagination over per-user todo items

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::TodoError;
pub use handlers::{
    create_todo_handler, delete_todo_handler, get_todo_handler, list_todos_handler,
    update_todo_handler,
};
pub use models::{CreateTodoRequest, Todo, TodoListQuery, TodoPage, UpdateTodoRequest};
pub use repository::TodoRepository;
pub use service::TodoService;
