use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UNAUTHORIZED_MESSAGE;
use crate::account::models::Login;
use crate::inbound::http::router::AppState;

pub async fn signin(
    State(state): State<AppState>,
    Json(body): Json<SigninRequestBody>,
) -> Result<ApiSuccess<SigninResponseData>, ApiError> {
    // A login that cannot exist gets the same rejection as one that does
    // not exist
    let login = Login::new(body.login)
        .map_err(|_| ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()))?;

    let issued = state
        .auth_service
        .signin(&login, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        SigninResponseData {
            login: issued.subject,
            token: issued.token,
            expires_at: issued.expires_at,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SigninRequestBody {
    login: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SigninResponseData {
    pub login: String,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}
