//! Query Executor
//!
//! Runs a [`Query`] against its [`rtdb_core::ApiClient`]: one request per
//! call, no caching and no retries.

use serde_json::Value;
use tracing::debug;

use rtdb_core::{RtdbResult, Snapshot};

use crate::query::Query;
use crate::translate::translate_error;

impl Query<'_> {
    /// Read the data matching the query, together with its reference
    pub fn get_snapshot(&self) -> RtdbResult<Snapshot> {
        let value = self.get_value()?;
        Ok(Snapshot::new(self.reference().clone(), value))
    }

    /// Read only the data matching the query
    pub fn get_value(&self) -> RtdbResult<Value> {
        let uri = self.uri();
        debug!(uri = %uri, "Executing query");

        let value = self.client().get(&uri).map_err(translate_error)?;

        Ok(match self.params().sort() {
            Some(sorter) => sorter.sort(value),
            None => value,
        })
    }
}
