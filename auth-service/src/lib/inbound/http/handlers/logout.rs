use axum::http::StatusCode;

/// Tokens are stateless and cannot be revoked server-side, so logging out
/// is the client discarding its token. The endpoint only acknowledges.
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
