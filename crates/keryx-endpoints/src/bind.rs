//! Typed values out of raw request contexts.
//!
//! Two binding paths, chosen by HTTP method at registration time: JSON
//! bodies for POST/PUT (validated), merged route-and-query values for
//! GET/DELETE (never validated). Both complete before the handler is
//! invoked; a rejected or absent body means the handler is never invoked
//! at all.
//!
//! # Example
//!
//! ```rust
//! use keryx_endpoints::bind;
//! use keryx_router::{Params, RequestContext};
//! use http::{HeaderMap, Method, Uri};
//! use bytes::Bytes;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Default, Deserialize)]
//! #[serde(default)]
//! struct SearchQuery {
//!     term: String,
//!     page: u32,
//! }
//!
//! let ctx = RequestContext::new(
//!     Method::GET,
//!     Uri::from_static("/search?term=foo&page=2"),
//!     HeaderMap::new(),
//!     Bytes::new(),
//!     Params::new(),
//! );
//!
//! let query: SearchQuery = bind::bind_query(&ctx).unwrap();
//! assert_eq!(query.term, "foo");
//! assert_eq!(query.page, 2);
//! ```

use crate::{respond, EndpointError};
use bytes::Bytes;
use http::Response;
use indexmap::IndexMap;
use keryx_core::Validate;
use keryx_router::RequestContext;
use serde::de::DeserializeOwned;

/// Outcome of binding a request body.
#[derive(Debug)]
pub enum Binding<T> {
    /// The body decoded and passed validation.
    Value(T),
    /// No body was sent. The route answers with an empty 200 and the
    /// handler is skipped.
    Missing,
    /// The body decoded but failed validation. Carries the prepared
    /// rejection response; the handler is never invoked.
    Rejected(Response<Bytes>),
}

/// Binds a JSON request body to `T` and runs its validation rules.
///
/// An empty body yields [`Binding::Missing`]; a body that decodes but
/// fails validation yields [`Binding::Rejected`] carrying a 400 whose body
/// is the serialized failure list. A body that does not decode at all is
/// an error for the caller to surface.
pub fn bind_body<T>(
    ctx: &RequestContext,
    max_body_bytes: usize,
) -> Result<Binding<T>, EndpointError>
where
    T: DeserializeOwned + Validate,
{
    let body = ctx.body();

    if body.len() > max_body_bytes {
        return Err(EndpointError::body_too_large(max_body_bytes, body.len()));
    }
    if body.is_empty() {
        return Ok(Binding::Missing);
    }

    let value: T = serde_json::from_slice(body).map_err(EndpointError::body_decode)?;

    let failures = value.validate();
    if failures.is_empty() {
        return Ok(Binding::Value(value));
    }

    tracing::warn!(
        "request {} rejected with {} validation failure(s)",
        ctx.request_id(),
        failures.len()
    );
    Ok(Binding::Rejected(respond::bad_request_json(&failures)?))
}

/// Binds the merged route and query values to `T`.
///
/// Route values win over query-string pairs of the same name; within each
/// source the first occurrence of a name wins. The merged pairs are pushed
/// through the urlencoded codec so numeric and boolean members parse from
/// their string forms. An empty merge binds the type's defaults; no
/// validation runs on this path.
pub fn bind_query<T>(ctx: &RequestContext) -> Result<T, EndpointError>
where
    T: DeserializeOwned,
{
    let mut merged: IndexMap<String, String> = IndexMap::new();

    for (name, value) in ctx.route_values() {
        merged
            .entry(name.to_owned())
            .or_insert_with(|| value.to_owned());
    }

    if let Some(query) = ctx.query() {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query).map_err(EndpointError::query_decode)?;
        for (name, value) in pairs {
            merged.entry(name).or_insert(value);
        }
    }

    let encoded = serde_urlencoded::to_string(&merged).map_err(EndpointError::query_encode)?;
    serde_urlencoded::from_str(&encoded).map_err(EndpointError::query_decode)
}
