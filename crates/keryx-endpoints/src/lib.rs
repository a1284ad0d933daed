//! # Keryx Endpoints
//!
//! Declarative endpoint registration and request binding: declare a route,
//! a typed input shape, and a handler, and the endpoint layer installs a
//! route adapter that decodes, validates, and hands the typed value to the
//! handler, recording a metadata definition with a generated example
//! payload along the way.
//!
//! - [`EndpointsBuilder`] - fluent registrar over any
//!   [`RouteRegistry`](keryx_router::RouteRegistry)
//! - [`bind`] - the body and query binding paths
//! - [`respond`] - response builders for the statuses endpoints answer with
//! - [`EndpointError`] - what binding and response building surface
//! - [`EndpointsOptions`] - tunables such as the request body size cap
//!
//! # Example
//!
//! ```rust
//! use keryx_core::{Validate, ValidationFailure};
//! use keryx_endpoints::{respond, EndpointsBuilder};
//! use keryx_router::RouteTable;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, JsonSchema)]
//! struct CreateOrder {
//!     id: String,
//!     quantity: i32,
//! }
//!
//! impl Validate for CreateOrder {
//!     fn validate(&self) -> Vec<ValidationFailure> {
//!         if self.quantity > 0 {
//!             Vec::new()
//!         } else {
//!             vec![ValidationFailure::new("quantity", "must be greater than zero")]
//!         }
//!     }
//! }
//!
//! let mut table = RouteTable::new();
//! let definitions = EndpointsBuilder::new(&mut table)
//!     .post_bound("/orders", |order: CreateOrder, _ctx| async move {
//!         respond::created(&format!("/orders/{}", order.id))
//!     })
//!     .finish();
//!
//! assert_eq!(table.len(), 1);
//! assert!(definitions.exists("/orders"));
//! ```

#![doc(html_root_url = "https://docs.rs/keryx-endpoints/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod bind;
mod builder;
mod error;
mod options;
pub mod respond;

pub use bind::Binding;
pub use builder::EndpointsBuilder;
pub use error::EndpointError;
pub use options::{EndpointsOptions, DEFAULT_MAX_BODY_BYTES};
