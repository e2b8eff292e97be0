// Session extraction for protected routes

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::cookie::CookieJar;

use crate::auth::{error::AuthError, token::TokenService};

/// Name of the session cookie issued on register/login.
pub const AUTH_COOKIE: &str = "auth-token";

/// Authenticated user extractor for protected routes.
///
/// Reads the session cookie, verifies it against the shared token service
/// and yields the subject user id. Handlers never see the raw token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: i32,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    TokenService: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar.get(AUTH_COOKIE).ok_or(AuthError::MissingToken)?;

        let token_service = TokenService::from_ref(state);
        let user_id = token_service.verify(cookie.value())?;

        Ok(AuthenticatedUser { user_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, Request};

    #[derive(Clone)]
    struct TestState {
        token_service: TokenService,
    }

    impl FromRef<TestState> for TokenService {
        fn from_ref(state: &TestState) -> Self {
            state.token_service.clone()
        }
    }

    fn test_state() -> TestState {
        TestState {
            token_service: TokenService::new(
                "test_secret_key_for_testing_purposes",
                TokenService::DEFAULT_TTL_SECONDS,
            ),
        }
    }

    fn parts_with_cookie(value: &str) -> Parts {
        let req = Request::builder()
            .uri("/")
            .header(header::COOKIE, value)
            .body(())
            .unwrap();

        let (parts, _) = req.into_parts();
        parts
    }

    #[tokio::test]
    async fn valid_cookie_is_accepted() {
        let state = test_state();
        let token = state.token_service.issue(42).unwrap();
        let mut parts = parts_with_cookie(&format!("{}={}", AUTH_COOKIE, token));

        let user = AuthenticatedUser::from_request_parts(&mut parts, &state)
            .await
            .unwrap();
        assert_eq!(user.user_id, 42);
    }

    #[tokio::test]
    async fn missing_cookie_is_rejected() {
        let req = Request::builder().uri("/").body(()).unwrap();
        let (mut parts, _) = req.into_parts();

        let err = AuthenticatedUser::from_request_parts(&mut parts, &test_state())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[tokio::test]
    async fn garbage_cookie_is_rejected() {
        let mut parts = parts_with_cookie("auth-token=not-a-token");

        let err = AuthenticatedUser::from_request_parts(&mut parts, &test_state())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[tokio::test]
    async fn token_signed_with_another_secret_is_rejected() {
        let other = TokenService::new("a-different-secret", TokenService::DEFAULT_TTL_SECONDS);
        let token = other.issue(7).unwrap();
        let mut parts = parts_with_cookie(&format!("{}={}", AUTH_COOKIE, token));

        let err = AuthenticatedUser::from_request_parts(&mut parts, &test_state())
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}
