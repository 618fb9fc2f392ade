//! Query Parameters
//!
//! The validated set of directives a query accumulates. Every `with_*`
//! method consumes the set and returns the updated one, so a query can hand
//! out new queries without touching its own parameters.

use url::Url;

use rtdb_core::{RtdbError, RtdbResult};

use crate::filters::{Bound, Limit};
use crate::sorts::Sorter;

/// Filtering, sorting and pagination directives of one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    sort: Option<Sorter>,
    start: Option<Bound>,
    end: Option<Bound>,
    equal_to: Option<Bound>,
    limit: Option<Limit>,
    shallow: bool,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sort directive. A query can only be ordered once.
    pub fn with_sort(mut self, sorter: Sorter) -> RtdbResult<Self> {
        self.ensure_unsorted(sorter.method_name())?;
        self.sort = Some(sorter);
        Ok(self)
    }

    /// Fail if a sort directive is already set; `method` names the new one
    pub fn ensure_unsorted(&self, method: &str) -> RtdbResult<()> {
        match &self.sort {
            Some(existing) => Err(RtdbError::unsupported_query(format!(
                "only one sorter is allowed, {} cannot be combined with {}",
                method,
                existing.method_name()
            ))),
            None => Ok(()),
        }
    }

    /// Set the lower bound, replacing any previous one
    pub fn with_start(mut self, bound: Bound) -> Self {
        self.start = Some(bound);
        self
    }

    /// Set the upper bound, replacing any previous one
    pub fn with_end(mut self, bound: Bound) -> Self {
        self.end = Some(bound);
        self
    }

    /// Set the exact match, replacing any previous one
    pub fn with_equal_to(mut self, bound: Bound) -> Self {
        self.equal_to = Some(bound);
        self
    }

    /// Set the limit. `limitToFirst` and `limitToLast` exclude each other;
    /// repeating the same kind replaces the count.
    pub fn with_limit(mut self, limit: Limit) -> RtdbResult<Self> {
        if limit.count() == 0 {
            return Err(RtdbError::InvalidArgument(format!(
                "{} expects a positive integer",
                limit.param_name()
            )));
        }

        if let Some(existing) = &self.limit {
            if !existing.same_kind(&limit) {
                return Err(RtdbError::unsupported_query(format!(
                    "{} cannot be combined with {}",
                    limit.param_name(),
                    existing.param_name()
                )));
            }
        }

        self.limit = Some(limit);
        Ok(self)
    }

    /// Only fetch the keys directly below the location
    pub fn with_shallow(mut self) -> Self {
        self.shallow = true;
        self
    }

    pub fn sort(&self) -> Option<&Sorter> {
        self.sort.as_ref()
    }

    pub fn start(&self) -> Option<&Bound> {
        self.start.as_ref()
    }

    pub fn end(&self) -> Option<&Bound> {
        self.end.as_ref()
    }

    pub fn equal_to(&self) -> Option<&Bound> {
        self.equal_to.as_ref()
    }

    pub fn limit(&self) -> Option<Limit> {
        self.limit
    }

    pub fn is_shallow(&self) -> bool {
        self.shallow
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Parameters in the order they are sent to the service
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(sort) = &self.sort {
            pairs.push(("orderBy", sort.to_param()));
        }
        if let Some(start) = &self.start {
            let name = if start.inclusive { "startAt" } else { "startAfter" };
            pairs.push((name, start.to_param()));
        }
        if let Some(end) = &self.end {
            let name = if end.inclusive { "endAt" } else { "endBefore" };
            pairs.push((name, end.to_param()));
        }
        if let Some(equal_to) = &self.equal_to {
            pairs.push(("equalTo", equal_to.to_param()));
        }
        if let Some(limit) = &self.limit {
            pairs.push((limit.param_name(), limit.count().to_string()));
        }
        if self.shallow {
            pairs.push(("shallow", "true".to_string()));
        }

        pairs
    }

    /// Append the parameters to `uri`, keeping the pairs it already has
    pub fn apply_to(&self, uri: &mut Url) {
        let pairs = self.query_pairs();
        if pairs.is_empty() {
            return;
        }
        uri.query_pairs_mut().extend_pairs(pairs);
    }
}
