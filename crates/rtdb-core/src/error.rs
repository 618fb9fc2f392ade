//! Core error types for the realtime database client
//!
//! Transports report failures as [`RtdbError`]; the query layer narrows generic
//! remote failures down to [`RtdbError::UnsupportedQuery`].

use thiserror::Error;
use url::Url;

/// Core error type for all realtime database operations
#[derive(Error, Debug)]
pub enum RtdbError {
    /// The query is invalid locally, or the remote service refused to run it.
    #[error("Unsupported query: {message}")]
    UnsupportedQuery {
        message: String,
        #[source]
        source: Option<DatabaseError>,
    },

    #[error("The database at {uri} does not exist.")]
    DatabaseNotFound { uri: String },

    #[error("Permission denied: {message}")]
    PermissionDenied { message: String },

    #[error("Precondition failed: {message}")]
    PreconditionFailed { message: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unexpected value: {0}")]
    Json(#[from] serde_json::Error),

    /// Any other failure reported by the remote service
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// Generic failure reported by the remote database service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Database error: {message}")]
pub struct DatabaseError {
    pub message: String,
    /// HTTP status of the failed response, when there was one
    pub status: Option<u16>,
}

impl DatabaseError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Classify a failed HTTP response from the database REST endpoint.
    ///
    /// The service reports errors as `{"error": "..."}`; any other body is used
    /// verbatim as the message.
    pub fn from_response(uri: &Url, status: u16, body: &str) -> RtdbError {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|json| json.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or_else(|| body.trim().to_string());

        match status {
            401 | 403 => RtdbError::PermissionDenied { message },
            404 => RtdbError::database_not_found(uri),
            412 => RtdbError::PreconditionFailed { message },
            _ => RtdbError::Database(DatabaseError::new(message).with_status(status)),
        }
    }
}

impl RtdbError {
    /// Local validation failure, raised before any request is made
    pub fn unsupported_query(message: impl Into<String>) -> Self {
        RtdbError::UnsupportedQuery {
            message: message.into(),
            source: None,
        }
    }

    /// The database behind `uri` does not exist. Only the origin is kept.
    pub fn database_not_found(uri: &Url) -> Self {
        RtdbError::DatabaseNotFound {
            uri: uri.origin().ascii_serialization(),
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            RtdbError::UnsupportedQuery { .. } | RtdbError::InvalidArgument(_) => 400,
            RtdbError::PermissionDenied { .. } => 403,
            RtdbError::DatabaseNotFound { .. } => 404,
            RtdbError::PreconditionFailed { .. } => 412,
            RtdbError::Json(_) => 500,
            RtdbError::Database(e) => e.status.unwrap_or(500),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RtdbError::UnsupportedQuery { .. } => "unsupported_query",
            RtdbError::DatabaseNotFound { .. } => "database_not_found",
            RtdbError::PermissionDenied { .. } => "permission_denied",
            RtdbError::PreconditionFailed { .. } => "precondition_failed",
            RtdbError::InvalidArgument(_) => "invalid_argument",
            RtdbError::Json(_) => "unexpected_value",
            RtdbError::Database(_) => "database_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    fn uri() -> Url {
        Url::parse("https://database-name.firebaseio.com/users/alice").unwrap()
    }

    #[test]
    fn test_database_not_found_keeps_only_the_host() {
        let err = RtdbError::database_not_found(&uri());
        assert!(matches!(
            &err,
            RtdbError::DatabaseNotFound { uri } if uri == "https://database-name.firebaseio.com"
        ));
        assert_eq!(
            err.to_string(),
            "The database at https://database-name.firebaseio.com does not exist."
        );
    }

    #[test]
    fn test_database_not_found_keeps_the_port() {
        let emulator = Url::parse("http://localhost:9000/users?ns=demo").unwrap();
        assert_eq!(
            RtdbError::database_not_found(&emulator).to_string(),
            "The database at http://localhost:9000 does not exist."
        );
    }

    #[test]
    fn test_from_response_extracts_error_member() {
        let err = DatabaseError::from_response(&uri(), 400, r#"{"error": "Index not defined"}"#);
        match err {
            RtdbError::Database(e) => {
                assert_eq!(e.message, "Index not defined");
                assert_eq!(e.status, Some(400));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_response_uses_raw_body() {
        let err = DatabaseError::from_response(&uri(), 500, "  upstream timeout\n");
        assert!(matches!(err, RtdbError::Database(ref e) if e.message == "upstream timeout"));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_from_response_classification() {
        assert!(matches!(
            DatabaseError::from_response(&uri(), 401, "{}"),
            RtdbError::PermissionDenied { .. }
        ));
        assert!(matches!(
            DatabaseError::from_response(&uri(), 403, r#"{"error": "Permission denied"}"#),
            RtdbError::PermissionDenied { ref message } if message == "Permission denied"
        ));
        assert!(matches!(
            DatabaseError::from_response(&uri(), 404, ""),
            RtdbError::DatabaseNotFound { .. }
        ));
        assert!(matches!(
            DatabaseError::from_response(&uri(), 412, ""),
            RtdbError::PreconditionFailed { .. }
        ));
    }

    #[test]
    fn test_unsupported_query_source() {
        let local = RtdbError::unsupported_query("only one sorter allowed");
        assert!(local.source().is_none());
        assert_eq!(local.error_code(), "unsupported_query");

        let remote = RtdbError::UnsupportedQuery {
            message: "rejected".into(),
            source: Some(DatabaseError::new("foo index not defined bar")),
        };
        let cause = remote.source().unwrap();
        assert_eq!(cause.to_string(), "Database error: foo index not defined bar");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(RtdbError::InvalidArgument("x".into()).status_code(), 400);
        assert_eq!(RtdbError::database_not_found(&uri()).status_code(), 404);
        assert_eq!(
            RtdbError::Database(DatabaseError::new("boom")).status_code(),
            500
        );
    }
}
