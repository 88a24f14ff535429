//! Login handler: credential check plus token issuance.

use crate::api::AppState;
use crate::api::token::issue_token;
use crate::error::{Error, Result};
use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /login`
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Login name
    #[serde(default)]
    pub username: String,
    /// Password, compared verbatim against the stored column
    #[serde(default)]
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    /// Signed token embedding the user identifier, valid for one hour
    pub token: String,
}

/// POST /login - Check credentials and issue a token
///
/// One linear path: query the store for a row matching both fields, then
/// sign a token for the matched user. A missing row is a 401 with body
/// `{"error": "invalid"}`; a store failure is a 500 with `{"error": "db
/// error"}`. Neither is retried.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials matched, token issued", body = LoginResponse),
        (status = 401, description = "No matching user/password row"),
        (status = 500, description = "Datastore failure")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let user = state
        .db
        .find_by_credentials(&request.username, &request.password)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    let token = issue_token(
        &state.config.auth.jwt_secret,
        user.id,
        state.config.auth.token_ttl_secs,
    )?;

    tracing::info!(uid = user.id, "Login succeeded");
    Ok(Json(LoginResponse { token }))
}
