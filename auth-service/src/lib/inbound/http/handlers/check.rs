use axum::http::StatusCode;
use axum::Extension;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSubject;

/// The bearer-token middleware has already validated the token and
/// confirmed the subject exists; this only reports what it found.
pub async fn check(
    Extension(subject): Extension<AuthenticatedSubject>,
) -> ApiSuccess<CheckResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        CheckResponseData {
            login: subject.login,
            expires_at: subject.expires_at,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponseData {
    pub login: String,
    pub expires_at: DateTime<Utc>,
}
