//! Result type alias for realtime database operations

use crate::error::RtdbError;

/// Standard Result type for realtime database operations
pub type RtdbResult<T> = Result<T, RtdbError>;
