//! Database References
//!
//! A [`Reference`] points at one node of the remote JSON tree. It only knows
//! its URI; reading happens through a query built on top of it.

use std::borrow::Cow;
use std::fmt;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::error::RtdbError;
use crate::result::RtdbResult;

/// Characters the service does not accept inside a key
const FORBIDDEN_KEY_CHARS: [char; 5] = ['.', '$', '#', '[', ']'];

/// A location in the database
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    uri: Url,
}

impl Reference {
    /// Create a reference from an absolute http(s) URI
    pub fn new(uri: Url) -> RtdbResult<Self> {
        if uri.cannot_be_a_base() || !matches!(uri.scheme(), "http" | "https") {
            return Err(RtdbError::InvalidArgument(format!(
                "{uri} is not a database URI"
            )));
        }
        Ok(Self { uri })
    }

    /// Parse a reference from a URI string
    pub fn parse(uri: &str) -> RtdbResult<Self> {
        let uri = Url::parse(uri)
            .map_err(|e| RtdbError::InvalidArgument(format!("invalid URI {uri:?}: {e}")))?;
        Self::new(uri)
    }

    /// URI of the node, without query parameters added by a query
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// Decoded path segments, so a key reads back the way it was given to [`Reference::child`]
    pub fn segments(&self) -> Vec<Cow<'_, str>> {
        self.uri
            .path_segments()
            .map(|segments| {
                segments
                    .filter(|s| !s.is_empty())
                    .map(|s| percent_decode_str(s).decode_utf8_lossy())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Path relative to the database root, `""` for the root itself
    pub fn path(&self) -> String {
        self.segments().join("/")
    }

    /// Last path segment; `None` for the root
    pub fn key(&self) -> Option<Cow<'_, str>> {
        self.segments().pop()
    }

    pub fn is_root(&self) -> bool {
        self.segments().is_empty()
    }

    /// Reference to a descendant. `path` may contain several `/`-separated keys.
    pub fn child(&self, path: &str) -> RtdbResult<Self> {
        let keys = validate_path(path)?;

        let mut uri = self.uri.clone();
        uri.path_segments_mut()
            .map_err(|_| RtdbError::InvalidArgument(format!("{} has no path", self.uri)))?
            .pop_if_empty()
            .extend(keys);
        Ok(Self { uri })
    }

    /// Reference to the parent node; `None` for the root
    pub fn parent(&self) -> Option<Self> {
        if self.is_root() {
            return None;
        }

        let mut uri = self.uri.clone();
        if let Ok(mut path) = uri.path_segments_mut() {
            path.pop_if_empty().pop();
        }
        Some(Self { uri })
    }

    /// Reference to the database root
    pub fn root(&self) -> Self {
        let mut uri = self.uri.clone();
        uri.set_path("/");
        Self { uri }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri.as_str())
    }
}

/// Split a child path into keys, rejecting empty or forbidden keys
pub fn validate_path(path: &str) -> RtdbResult<Vec<&str>> {
    let keys: Vec<&str> = path.split('/').filter(|k| !k.is_empty()).collect();
    if keys.is_empty() {
        return Err(RtdbError::InvalidArgument(format!(
            "{path:?} is not a valid child path"
        )));
    }

    if let Some(key) = keys.iter().find(|k| k.contains(FORBIDDEN_KEY_CHARS)) {
        return Err(RtdbError::InvalidArgument(format!(
            "key {key:?} must not contain any of . $ # [ ]"
        )));
    }

    Ok(keys)
}
