//! # rtdb-queries
//!
//! Read queries for the realtime database.
//!
//! A [`Query`] starts from a [`rtdb_core::Reference`], accumulates sort,
//! range and limit directives, and is executed through an
//! [`rtdb_core::ApiClient`].
//!
//! ## Structure
//!
//! - `filters` - Scalar values, range bounds and limits
//! - `sorts` - The single sort directive of a query
//! - `ordering` - The service's key and value ordering
//! - `params` - The validated parameter set and its URI form
//! - `query` - The Query model and its fluent builder methods
//! - `executor` - Running a query through the transport
//! - `translate` - Narrowing transport errors to query errors
//!
//! ## Example
//!
//! ```
//! use rtdb_core::{ApiClient, Reference, RtdbResult};
//! use rtdb_queries::Query;
//! use serde_json::{json, Value};
//! use url::Url;
//!
//! struct Fixed;
//!
//! impl ApiClient for Fixed {
//!     fn get(&self, _uri: &Url) -> RtdbResult<Value> {
//!         Ok(json!({"b": {"height": 2}, "a": {"height": 1}}))
//!     }
//! }
//!
//! let reference = Reference::parse("https://database-name.firebaseio.com/dinosaurs").unwrap();
//! let query = Query::new(&reference, &Fixed)
//!     .order_by_child("height")
//!     .unwrap()
//!     .start_at(1)
//!     .limit_to_first(2)
//!     .unwrap();
//!
//! assert_eq!(
//!     query.to_string(),
//!     "https://database-name.firebaseio.com/dinosaurs?orderBy=%22height%22&startAt=1&limitToFirst=2"
//! );
//!
//! let snapshot = query.get_snapshot().unwrap();
//! assert_eq!(snapshot.num_children(), 2);
//! ```

pub mod executor;
pub mod filters;
pub mod ordering;
pub mod params;
pub mod query;
pub mod sorts;
pub mod translate;

#[cfg(test)]
mod testing;

// Re-exports for convenience
pub use filters::{Bound, Limit, Scalar};
pub use params::QueryParams;
pub use query::{Query, ReferenceExt};
pub use sorts::Sorter;
pub use translate::translate_error;
