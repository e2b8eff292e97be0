// Authentication module
// Provides cookie-session authentication with Argon2 password hashing and
// stateless JWT session tokens

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod password;
pub mod repository;
pub mod service;
pub mod token;

// Re-export commonly used types
pub use error::AuthError;
pub use handlers::{login_handler, logout_handler, register_handler};
pub use middleware::{AuthenticatedUser, AUTH_COOKIE};
pub use models::{LoginRequest, RegisterRequest, User, UserResponse};
pub use password::PasswordService;
pub use repository::UserRepository;
pub use service::AuthService;
pub use token::TokenService;
