//! Query Model
//!
//! A [`Query`] reads the children of a [`Reference`], optionally sorted,
//! filtered and limited. Builder methods never modify the query they are
//! called on: each returns a new query, so intermediate queries stay usable
//! and can be shared between threads.

use std::fmt;

use url::Url;

use rtdb_core::{ApiClient, Reference, RtdbResult};

use crate::filters::{Bound, Limit, Scalar};
use crate::params::QueryParams;
use crate::sorts::Sorter;

/// A read query against one database location
#[derive(Clone)]
pub struct Query<'a> {
    reference: &'a Reference,
    client: &'a dyn ApiClient,
    params: QueryParams,
}

impl<'a> Query<'a> {
    /// Create an unfiltered query for `reference`
    pub fn new(reference: &'a Reference, client: &'a dyn ApiClient) -> Self {
        Self {
            reference,
            client,
            params: QueryParams::new(),
        }
    }

    /// The reference this query was created from
    pub fn reference(&self) -> &'a Reference {
        self.reference
    }

    pub fn params(&self) -> &QueryParams {
        &self.params
    }

    pub(crate) fn client(&self) -> &'a dyn ApiClient {
        self.client
    }

    fn with_params(&self, params: QueryParams) -> Self {
        Self {
            reference: self.reference,
            client: self.client,
            params,
        }
    }

    fn ordered_by(&self, sorter: Sorter) -> RtdbResult<Self> {
        Ok(self.with_params(self.params.clone().with_sort(sorter)?))
    }

    // Sort methods

    /// Order children by key
    pub fn order_by_key(&self) -> RtdbResult<Self> {
        self.ordered_by(Sorter::Key)
    }

    /// Order children by value
    pub fn order_by_value(&self) -> RtdbResult<Self> {
        self.ordered_by(Sorter::Value)
    }

    /// Order children by priority
    pub fn order_by_priority(&self) -> RtdbResult<Self> {
        self.ordered_by(Sorter::Priority)
    }

    /// Order children by the value at `path` below each child
    pub fn order_by_child(&self, path: &str) -> RtdbResult<Self> {
        self.params.ensure_unsorted("orderByChild")?;
        self.ordered_by(Sorter::child(path)?)
    }

    // Range filters

    /// Children whose ordered-by value is at or after `value`
    pub fn start_at(&self, value: impl Into<Scalar>) -> Self {
        self.with_params(self.params.clone().with_start(Bound::inclusive(value)))
    }

    /// Like [`Query::start_at`], starting at the child with `key` among equal values
    pub fn start_at_key(&self, value: impl Into<Scalar>, key: impl Into<String>) -> Self {
        self.with_params(
            self.params
                .clone()
                .with_start(Bound::inclusive(value).with_key(key)),
        )
    }

    /// Children whose ordered-by value is strictly after `value`
    pub fn start_after(&self, value: impl Into<Scalar>) -> Self {
        self.with_params(self.params.clone().with_start(Bound::exclusive(value)))
    }

    pub fn start_after_key(&self, value: impl Into<Scalar>, key: impl Into<String>) -> Self {
        self.with_params(
            self.params
                .clone()
                .with_start(Bound::exclusive(value).with_key(key)),
        )
    }

    /// Children whose ordered-by value is at or before `value`
    pub fn end_at(&self, value: impl Into<Scalar>) -> Self {
        self.with_params(self.params.clone().with_end(Bound::inclusive(value)))
    }

    pub fn end_at_key(&self, value: impl Into<Scalar>, key: impl Into<String>) -> Self {
        self.with_params(
            self.params
                .clone()
                .with_end(Bound::inclusive(value).with_key(key)),
        )
    }

    /// Children whose ordered-by value is strictly before `value`
    pub fn end_before(&self, value: impl Into<Scalar>) -> Self {
        self.with_params(self.params.clone().with_end(Bound::exclusive(value)))
    }

    pub fn end_before_key(&self, value: impl Into<Scalar>, key: impl Into<String>) -> Self {
        self.with_params(
            self.params
                .clone()
                .with_end(Bound::exclusive(value).with_key(key)),
        )
    }

    /// Children whose ordered-by value equals `value`
    pub fn equal_to(&self, value: impl Into<Scalar>) -> Self {
        self.with_params(self.params.clone().with_equal_to(Bound::inclusive(value)))
    }

    pub fn equal_to_key(&self, value: impl Into<Scalar>, key: impl Into<String>) -> Self {
        self.with_params(
            self.params
                .clone()
                .with_equal_to(Bound::inclusive(value).with_key(key)),
        )
    }

    // Limits

    /// Only the first `limit` children in sort order
    pub fn limit_to_first(&self, limit: u32) -> RtdbResult<Self> {
        Ok(self.with_params(self.params.clone().with_limit(Limit::First(limit))?))
    }

    /// Only the last `limit` children in sort order
    pub fn limit_to_last(&self, limit: u32) -> RtdbResult<Self> {
        Ok(self.with_params(self.params.clone().with_limit(Limit::Last(limit))?))
    }

    /// Fetch only the keys below the location, with `true` as their values
    pub fn shallow(&self) -> Self {
        self.with_params(self.params.clone().with_shallow())
    }

    /// Full URI of the query, parameters included
    pub fn uri(&self) -> Url {
        let mut uri = self.reference.uri().clone();
        self.params.apply_to(&mut uri);
        uri
    }
}

impl fmt::Display for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri().as_str())
    }
}

impl fmt::Debug for Query<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Query")
            .field("reference", &self.reference.uri().as_str())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

/// Start queries directly from a reference
pub trait ReferenceExt {
    fn query<'a>(&'a self, client: &'a dyn ApiClient) -> Query<'a>;
}

impl ReferenceExt for Reference {
    fn query<'a>(&'a self, client: &'a dyn ApiClient) -> Query<'a> {
        Query::new(self, client)
    }
}
