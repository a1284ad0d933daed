//! Per-call request context.
//!
//! A [`RequestContext`] is handed to a route adapter once per inbound call.
//! It owns everything the binding layer needs (method, URI, headers, the
//! collected body bytes, and the route-matched values) and is dropped when
//! the call completes. Contexts are never shared across calls.

use bytes::Bytes;
use http::{HeaderMap, Method, Uri};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::Params;

/// A unique identifier for each inbound call, using UUID v7.
///
/// UUID v7 is time-ordered, which keeps ids sortable in logs and makes
/// correlation across components cheap.
///
/// # Example
///
/// ```
/// use keryx_router::RequestId;
///
/// let id = RequestId::new();
/// assert_ne!(id, RequestId::new());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    /// Creates a new unique request ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `RequestId` from an existing UUID, e.g. one parsed from a
    /// propagation header.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for RequestId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<RequestId> for Uuid {
    fn from(id: RequestId) -> Self {
        id.0
    }
}

/// Everything a route adapter knows about one inbound request.
///
/// The host constructs a context after collecting the body and matching the
/// route, then hands it to the adapter by value. Query values stay inside the
/// [`Uri`] until the binding layer parses them; route values arrive already
/// extracted as [`Params`].
///
/// # Example
///
/// ```rust
/// use keryx_router::{Params, RequestContext};
/// use http::{HeaderMap, Method, Uri};
/// use bytes::Bytes;
///
/// let mut route_values = Params::new();
/// route_values.push("userId", "42");
///
/// let ctx = RequestContext::new(
///     Method::GET,
///     Uri::from_static("/users/42?verbose=true"),
///     HeaderMap::new(),
///     Bytes::new(),
///     route_values,
/// );
///
/// assert_eq!(ctx.path(), "/users/42");
/// assert_eq!(ctx.query(), Some("verbose=true"));
/// assert_eq!(ctx.route_values().get("userId"), Some("42"));
/// ```
#[derive(Debug, Clone)]
pub struct RequestContext {
    request_id: RequestId,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    route_values: Params,
}

impl RequestContext {
    /// Creates a context for one inbound call, minting a fresh [`RequestId`].
    #[must_use]
    pub fn new(
        method: Method,
        uri: Uri,
        headers: HeaderMap,
        body: Bytes,
        route_values: Params,
    ) -> Self {
        Self {
            request_id: RequestId::new(),
            method,
            uri,
            headers,
            body,
            route_values,
        }
    }

    /// Returns the id minted for this call.
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Returns the HTTP method.
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Returns the full request URI.
    #[must_use]
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the path portion of the URI.
    #[must_use]
    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// Returns the raw query string, if the URI carries one.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Returns the request headers.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the collected request body.
    #[must_use]
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Returns the values extracted from route template segments.
    #[must_use]
    pub fn route_values(&self) -> &Params {
        &self.route_values
    }
}
