use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Failures never reach the caller: the full error goes to the log and the
/// response is a bare 500.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = %self, details = ?self, "Request failed");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::body::to_bytes;

    #[tokio::test]
    async fn database_error_maps_to_500_with_empty_body() {
        let resp = AppError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert!(body.is_empty(), "Error details must not leak into the body");
    }

    #[test]
    fn internal_error_keeps_message() {
        let err = AppError::from(anyhow::anyhow!("store offline"));
        assert_eq!(err.to_string(), "store offline");
    }
}
