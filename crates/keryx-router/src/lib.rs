//! Route table and request context for the Keryx endpoint layer.
//!
//! This crate is the boundary between Keryx and whatever HTTP host it runs
//! under. The host collects a request, asks the [`RouteTable`] for the adapter
//! registered at `(method, path)`, and invokes that adapter with a
//! [`RequestContext`]. Everything above this crate (binding, validation,
//! metadata, dispatch) is expressed in terms of the seams defined here.
//!
//! # Example
//!
//! ```rust
//! use keryx_router::{RequestContext, RouteAdapter, RouteRegistry, RouteTable};
//! use http::Method;
//! use std::sync::Arc;
//!
//! let mut table = RouteTable::new();
//!
//! let adapter: RouteAdapter = Arc::new(|_ctx: RequestContext| {
//!     Box::pin(async {
//!         Ok::<_, keryx_router::BoxError>(http::Response::new(bytes::Bytes::new()))
//!     })
//! });
//! table.register(Method::GET, "/users/{userId}", adapter);
//!
//! let (_, params) = table.lookup(&Method::GET, "/users/42").unwrap();
//! assert_eq!(params.get("userId"), Some("42"));
//! ```

#![doc(html_root_url = "https://docs.rs/keryx-router/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod context;
mod params;
mod table;

pub use context::{RequestContext, RequestId};
pub use params::Params;
pub use table::{AdapterFuture, BoxError, RouteAdapter, RouteRegistry, RouteTable};
