mod auth;
mod config;
mod db;
mod response;
mod todos;

use axum::{
    extract::FromRef,
    http::{header, HeaderValue, Method, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use auth::{
    models::{LoginRequest, RegisterRequest, UserResponse},
    AuthService, TokenService, UserRepository,
};
use config::AppConfig;
use response::ApiResponse;
use todos::{CreateTodoRequest, Todo, TodoPage, TodoRepository, TodoService, UpdateTodoRequest};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        auth::handlers::register_handler,
        auth::handlers::login_handler,
        auth::handlers::logout_handler,
        todos::handlers::list_todos_handler,
        todos::handlers::get_todo_handler,
        todos::handlers::create_todo_handler,
        todos::handlers::update_todo_handler,
        todos::handlers::delete_todo_handler,
    ),
    components(
        schemas(RegisterRequest, LoginRequest, UserResponse, Todo, CreateTodoRequest, UpdateTodoRequest, TodoPage)
    ),
    tags(
        (name = "auth", description = "User registration and session endpoints"),
        (name = "todos", description = "Per-user todo management endpoints")
    ),
    info(
        title = "Todo API",
        version = "1.0.0",
        description = "RESTful API for per-user todo lists with cookie-session authentication"
    )
)]
struct ApiDoc;

/// Application state shared across handlers.
///
/// Services are constructed once at startup and hold only read-only
/// collaborators; cloning the state per request is cheap and no mutable
/// process-wide state exists.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub auth_service: AuthService,
    pub todo_service: TodoService,
    pub token_service: TokenService,
    pub cookie_secure: bool,
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.token_service.clone()
    }
}

/// Handler for GET /health
async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("OK"))
}

/// JSON fallback for unknown routes
async fn not_found() -> (StatusCode, Json<ApiResponse<()>>) {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::error("Route not found")),
    )
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::CorsLayer;

    // Credentialed CORS for the known frontend dev origins; wildcard origins
    // cannot be combined with cookies
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().expect("valid origin"),
            "http://localhost:5173".parse::<HeaderValue>().expect("valid origin"),
            "http://localhost:8080".parse::<HeaderValue>().expect("valid origin"),
        ])
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Auth routes
        .route("/auth/register", post(auth::register_handler))
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/logout", post(auth::logout_handler))
        // Todo routes, all behind the session cookie
        .route(
            "/todos",
            get(todos::list_todos_handler).post(todos::create_todo_handler),
        )
        .route(
            "/todos/:id",
            get(todos::get_todo_handler)
                .put(todos::update_todo_handler)
                .delete(todos::delete_todo_handler),
        )
        .route("/health", get(health))
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Todo API - Starting...");

    let config = AppConfig::from_env();

    // Create database connection pool
    tracing::info!("Connecting to database...");
    let db_pool = db::create_pool(&config.database_url)
        .await
        .expect("Failed to create database pool");

    // Run SQLx migrations on startup
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Migrations completed successfully");

    // Build the shared services once; they hold only stateless collaborators
    let token_service = TokenService::new(&config.jwt_secret, config.token_ttl_seconds);
    let auth_service = AuthService::new(
        UserRepository::new(db_pool.clone()),
        token_service.clone(),
    );
    let todo_service = TodoService::new(TodoRepository::new(db_pool.clone()));

    let state = AppState {
        db: db_pool,
        auth_service,
        todo_service,
        token_service,
        cookie_secure: config.cookie_secure,
    };

    // Create the application router
    let app = create_router(state);

    // Start the Axum server
    let addr = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Todo API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}

#[cfg(test)]
mod tests;
