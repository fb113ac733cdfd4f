use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use oddbook_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// Unexpected storage failure. Only `context` reaches the client.
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServerError {
    pub fn storage(context: &'static str, source: StoreError) -> Self {
        ServerError::Storage { context, source }
    }
}

impl From<StoreError> for ServerError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Denied(_) => ServerError::Forbidden("Access denied".to_string()),
            StoreError::NotFound(_) => ServerError::NotFound("File not found".to_string()),
            other => ServerError::storage("Storage error", other),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServerError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg.clone()),
            ServerError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ServerError::Storage { context, .. } => {
                tracing::error!(error = %self, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_errors_map_to_distinct_statuses() {
        let denied: ServerError = StoreError::Denied("x".into()).into();
        let missing: ServerError = StoreError::NotFound("x".into()).into();
        let io: ServerError = StoreError::Io(std::io::Error::other("disk full")).into();

        assert_eq!(denied.into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(missing.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(io.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_storage_message_hides_source() {
        let err = ServerError::storage(
            "Failed to save entry",
            StoreError::Io(std::io::Error::other("/secret/path")),
        );
        assert!(err.to_string().contains("/secret/path"));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
