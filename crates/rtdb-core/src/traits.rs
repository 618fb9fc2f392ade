//! Seams to the outside world
//!
//! The HTTP transport and authentication live behind [`ApiClient`]; this crate
//! never talks to the network itself.

use std::sync::Arc;

use serde_json::Value;
use url::Url;

use crate::result::RtdbResult;

/// Transport for the database REST API (read side).
///
/// Implementations perform exactly one blocking request per call and report
/// failures as [`crate::RtdbError`]. HTTP failures should be classified with
/// [`crate::DatabaseError::from_response`] so a missing database surfaces as
/// `DatabaseNotFound` and everything else as a generic `Database` error.
pub trait ApiClient: Send + Sync {
    /// Fetch the JSON value at `uri` (query parameters included)
    fn get(&self, uri: &Url) -> RtdbResult<Value>;
}

impl<T: ApiClient + ?Sized> ApiClient for Arc<T> {
    fn get(&self, uri: &Url) -> RtdbResult<Value> {
        (**self).get(uri)
    }
}

impl<T: ApiClient + ?Sized> ApiClient for Box<T> {
    fn get(&self, uri: &Url) -> RtdbResult<Value> {
        (**self).get(uri)
    }
}
