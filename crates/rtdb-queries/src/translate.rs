//! Remote error translation
//!
//! Failures reported while executing a query are narrowed down to the
//! errors a caller can act on.

use tracing::debug;

use rtdb_core::RtdbError;

/// Translate an error returned by the transport for a query request.
///
/// - `DatabaseNotFound` passes through unchanged.
/// - A generic `Database` error becomes `UnsupportedQuery`, keeping the
///   original error as its source. The message text is not inspected.
/// - Every other error passes through unchanged.
pub fn translate_error(error: RtdbError) -> RtdbError {
    match error {
        RtdbError::Database(source) => {
            debug!(
                status = ?source.status,
                error = %source.message,
                "Remote service rejected the query"
            );
            RtdbError::UnsupportedQuery {
                message: source.message.clone(),
                source: Some(source),
            }
        }
        error @ (RtdbError::DatabaseNotFound { .. }
        | RtdbError::UnsupportedQuery { .. }
        | RtdbError::PermissionDenied { .. }
        | RtdbError::PreconditionFailed { .. }
        | RtdbError::InvalidArgument(_)
        | RtdbError::Json(_)) => error,
    }
}
