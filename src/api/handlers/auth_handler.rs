//! Authentication handlers.
//!
//! Login only checks credentials; the returned token is a fixed
//! placeholder, no session is issued.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::handlers::user_handler::CreateUserRequest;
use crate::api::AppState;
use crate::config::PLACEHOLDER_SESSION_TOKEN;
use crate::domain::UserResponse;
use crate::errors::{AppError, AppResult};
use crate::types::Created;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// User email address
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "joana.silva@example.com")]
    pub email: String,
    /// User password
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret123")]
    pub password: String,
}

/// Successful login
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub user: UserResponse,
    /// Placeholder session token
    #[schema(example = "token123")]
    pub token: String,
}

/// Successful registration
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Authentication",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User registered successfully", body = RegisterResponse),
        (status = 400, description = "Validation error or email already in use")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created<RegisterResponse>> {
    let user = state.user_service.create_user(payload.into()).await?;

    Ok(Created(RegisterResponse {
        user: UserResponse::from(user),
    }))
}

/// Check credentials and return the user with a session token
#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = state
        .user_service
        .authenticate(&payload.email, &payload.password)
        .await
        .map_err(|e| {
            tracing::debug!(error = %e, "Login rejected");
            AppError::InvalidCredentials
        })?;

    Ok(Json(LoginResponse {
        user: UserResponse::from(user),
        token: PLACEHOLDER_SESSION_TOKEN.to_string(),
    }))
}
