//! Route registration seam and first-match route table.
//!
//! The endpoint layer hands routes to any [`RouteRegistry`] implementation;
//! the host resolves inbound requests through [`RouteTable::lookup`]. Path
//! templates use `{name}` parameter segments, and matching is a first-match
//! scan in registration order over tables built once at startup.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http::{Method, Response};

use crate::{Params, RequestContext};

/// Boxed error crossing the adapter boundary.
///
/// Adapters surface every failure the endpoint layer does not turn into a
/// response of its own; the host's error layer decides the status code.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The future returned by a route adapter.
pub type AdapterFuture = Pin<Box<dyn Future<Output = Result<Response<Bytes>, BoxError>> + Send>>;

/// A registered, type-erased request adapter.
///
/// Adapters are `Arc`-shared because a route is matched concurrently by many
/// calls; each invocation gets its own [`RequestContext`].
pub type RouteAdapter = Arc<dyn Fn(RequestContext) -> AdapterFuture + Send + Sync>;

/// Registration seam between the endpoint layer and the routing host.
///
/// The endpoint builder only ever needs this one operation, so hosts with
/// their own routers can participate by implementing it and translating the
/// adapter into their native handler shape.
pub trait RouteRegistry {
    /// Installs `adapter` for requests matching `(method, path)`.
    ///
    /// `path` is a template which may contain `{name}` parameter segments,
    /// e.g. `/orders/{orderId}`. Installation never fails; duplicate
    /// registrations are kept and the earliest one wins at lookup time.
    fn register(&mut self, method: Method, path: &str, adapter: RouteAdapter);
}

/// One segment of a parsed path template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PathSegment {
    Literal(String),
    Param(String),
}

struct Route {
    method: Method,
    segments: Vec<PathSegment>,
    adapter: RouteAdapter,
    pattern: String,
}

impl Route {
    fn new(method: Method, pattern: &str, adapter: RouteAdapter) -> Self {
        Self {
            method,
            segments: parse_segments(pattern),
            adapter,
            pattern: pattern.to_string(),
        }
    }

    /// Matches `path` against this route's template, extracting parameters.
    fn match_path(&self, path: &str) -> Option<Params> {
        let actual: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if actual.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, value) in self.segments.iter().zip(actual.iter()) {
            match segment {
                PathSegment::Literal(expected) => {
                    if expected != value {
                        return None;
                    }
                }
                PathSegment::Param(name) => params.push(name.clone(), (*value).to_string()),
            }
        }

        Some(params)
    }
}

fn parse_segments(pattern: &str) -> Vec<PathSegment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| {
            if s.starts_with('{') && s.ends_with('}') {
                PathSegment::Param(s[1..s.len() - 1].to_string())
            } else {
                PathSegment::Literal(s.to_string())
            }
        })
        .collect()
}

/// An ordered route table with first-match lookup.
///
/// Leading and trailing slashes are insignificant: `/users`, `users`, and
/// `/users/` all name the same route.
///
/// # Example
///
/// ```rust
/// use keryx_router::{RequestContext, RouteAdapter, RouteRegistry, RouteTable};
/// use http::Method;
/// use std::sync::Arc;
///
/// fn noop() -> RouteAdapter {
///     Arc::new(|_ctx: RequestContext| {
///         Box::pin(async {
///             Ok::<_, keryx_router::BoxError>(http::Response::new(bytes::Bytes::new()))
///         })
///     })
/// }
///
/// let mut table = RouteTable::new();
/// table.register(Method::GET, "/orders/{orderId}", noop());
/// table.register(Method::POST, "/orders", noop());
///
/// let (_, params) = table.lookup(&Method::GET, "/orders/o-17").unwrap();
/// assert_eq!(params.get("orderId"), Some("o-17"));
///
/// assert!(table.lookup(&Method::DELETE, "/orders/o-17").is_none());
/// ```
#[derive(Default)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Creates an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Returns the number of installed routes, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are installed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Iterates over installed routes as `(method, pattern)` pairs, in
    /// registration order.
    pub fn routes(&self) -> impl Iterator<Item = (&Method, &str)> {
        self.routes.iter().map(|r| (&r.method, r.pattern.as_str()))
    }

    /// Resolves `(method, path)` to the earliest matching adapter and the
    /// route values its template extracted.
    #[must_use]
    pub fn lookup(&self, method: &Method, path: &str) -> Option<(RouteAdapter, Params)> {
        for route in &self.routes {
            if route.method == *method {
                if let Some(params) = route.match_path(path) {
                    return Some((Arc::clone(&route.adapter), params));
                }
            }
        }
        None
    }
}

impl RouteRegistry for RouteTable {
    fn register(&mut self, method: Method, path: &str, adapter: RouteAdapter) {
        self.routes.push(Route::new(method, path, adapter));
    }
}

impl fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.routes.iter().map(|r| format!("{} {}", r.method, r.pattern)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> RouteAdapter {
        Arc::new(|_ctx: RequestContext| {
            Box::pin(async { Ok::<_, BoxError>(Response::new(Bytes::new())) })
        })
    }

    #[test]
    fn test_table_new_is_empty() {
        let table = RouteTable::new();
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_lookup_literal_path() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/health", noop());

        let (_, params) = table.lookup(&Method::GET, "/health").expect("route matches");
        assert!(params.is_empty());
    }

    #[test]
    fn test_lookup_extracts_template_params() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/users/{userId}/posts/{postId}", noop());

        let (_, params) = table
            .lookup(&Method::GET, "/users/42/posts/99")
            .expect("route matches");
        assert_eq!(params.get("userId"), Some("42"));
        assert_eq!(params.get("postId"), Some("99"));
    }

    #[test]
    fn test_lookup_method_mismatch() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/users", noop());

        assert!(table.lookup(&Method::POST, "/users").is_none());
    }

    #[test]
    fn test_lookup_path_mismatch() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/users", noop());

        assert!(table.lookup(&Method::GET, "/orders").is_none());
    }

    #[test]
    fn test_lookup_segment_count_mismatch() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/users/{userId}", noop());

        assert!(table.lookup(&Method::GET, "/users").is_none());
        assert!(table.lookup(&Method::GET, "/users/1/extra").is_none());
    }

    #[test]
    fn test_same_path_different_methods() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/orders", noop());
        table.register(Method::POST, "/orders", noop());

        assert!(table.lookup(&Method::GET, "/orders").is_some());
        assert!(table.lookup(&Method::POST, "/orders").is_some());
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_first_registration_wins() {
        let first = noop();
        let second = noop();

        let mut table = RouteTable::new();
        table.register(Method::GET, "/dup", Arc::clone(&first));
        table.register(Method::GET, "/dup", Arc::clone(&second));

        let (matched, _) = table.lookup(&Method::GET, "/dup").expect("route matches");
        assert!(Arc::ptr_eq(&matched, &first));
        assert!(!Arc::ptr_eq(&matched, &second));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_first_match_wins_across_templates() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/a/{x}", noop());
        table.register(Method::GET, "/a/{y}", noop());

        let (_, params) = table.lookup(&Method::GET, "/a/1").expect("route matches");
        assert_eq!(params.get("x"), Some("1"));
        assert_eq!(params.get("y"), None);
    }

    #[test]
    fn test_slash_normalization() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/users", noop());

        assert!(table.lookup(&Method::GET, "users").is_some());
        assert!(table.lookup(&Method::GET, "/users/").is_some());
    }

    #[test]
    fn test_root_path() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/", noop());

        assert!(table.lookup(&Method::GET, "/").is_some());
    }

    #[test]
    fn test_routes_iterator() {
        let mut table = RouteTable::new();
        table.register(Method::GET, "/users", noop());
        table.register(Method::POST, "/users", noop());

        let listed: Vec<_> = table.routes().collect();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0], (&Method::GET, "/users"));
        assert_eq!(listed[1], (&Method::POST, "/users"));
    }
}
