// HTTP handlers for authentication endpoints

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use crate::auth::{
    error::AuthError,
    middleware::AUTH_COOKIE,
    models::{AuthData, LoginRequest, RegisterRequest},
};
use crate::response::ApiResponse;
use crate::AppState;

/// Build the session cookie carrying a freshly issued token.
fn session_cookie(state: &AppState, token: String) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(state.cookie_secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(state.token_service.ttl_seconds()))
        .build()
}

/// Register a new user
/// POST /auth/register
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered, session cookie set"),
        (status = 400, description = "Invalid email or password shape"),
        (status = 409, description = "Email already registered")
    ),
    tag = "auth"
)]
pub async fn register_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RegisterRequest>,
) -> Result<(CookieJar, (StatusCode, Json<ApiResponse<AuthData>>)), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let (user, token) = state
        .auth_service
        .register(&request.email, &request.password)
        .await?;
    let jar = jar.add(session_cookie(&state, token));

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(ApiResponse::with_message(
                "User registered successfully",
                AuthData { user },
            )),
        ),
    ))
}

/// Login a user
/// POST /auth/login
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful, session cookie set"),
        (status = 400, description = "Invalid email shape"),
        (status = 401, description = "Invalid email or password")
    ),
    tag = "auth"
)]
pub async fn login_handler(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequest>,
) -> Result<(CookieJar, Json<ApiResponse<AuthData>>), AuthError> {
    request
        .validate()
        .map_err(|e| AuthError::ValidationError(e.to_string()))?;

    let (user, token) = state
        .auth_service
        .login(&request.email, &request.password)
        .await?;
    let jar = jar.add(session_cookie(&state, token));

    Ok((
        jar,
        Json(ApiResponse::with_message("Login successful", AuthData { user })),
    ))
}

/// Logout a user
/// POST /auth/logout
///
/// Tokens are stateless, so logout only clears the client-held cookie;
/// expiry remains the sole server-side termination mechanism.
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses(
        (status = 200, description = "Session cookie cleared")
    ),
    tag = "auth"
)]
pub async fn logout_handler(jar: CookieJar) -> (CookieJar, Json<ApiResponse<()>>) {
    let jar = jar.remove(Cookie::build(AUTH_COOKIE).path("/"));

    (jar, Json(ApiResponse::message("Logged out successfully")))
}
