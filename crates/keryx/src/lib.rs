//! # Keryx
//!
//! **Declarative HTTP Endpoint Layer for Async Rust Services**
//!
//! Keryx is a host-agnostic endpoint toolkit that provides:
//!
//! - 🧭 **Declarative Registration** – Routes declared through a fluent builder, no macros
//! - 📦 **Typed Binding** – JSON bodies and query strings decoded into plain structs
//! - ✅ **Validation Short-Circuit** – Invalid requests answer 400 before any handler runs
//! - 📖 **Self-Describing Endpoints** – Every route records metadata and an example payload
//! - 🔗 **Scoped Dispatch** – Typed requests resolved to fresh handler instances per call
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use keryx::prelude::*;
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, JsonSchema)]
//! struct CreateOrder {
//!     id: String,
//!     quantity: i64,
//! }
//!
//! impl Validate for CreateOrder {
//!     fn validate(&self) -> Vec<ValidationFailure> {
//!         let mut failures = Vec::new();
//!         if self.quantity <= 0 {
//!             failures.push(ValidationFailure::new(
//!                 "quantity",
//!                 "quantity must be greater than zero",
//!             ));
//!         }
//!         failures
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
//! // Hand `table` to the HTTP host and `definitions` to the docs generator.
//! ```
//!
//! ## Request Flow
//!
//! Every bound endpoint runs the same fixed sequence:
//!
//! ```text
//! Request → RouteTable → bind (body / query) → validate → handler → Response
//!                                                 ↓ failures
//!                                    400 + failure list (handler skipped)
//! ```

#![doc(html_root_url = "https://docs.rs/keryx/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export dispatch and validation types
pub use keryx_core as core;

// Re-export routing types
pub use keryx_router as router;

// Re-export endpoint metadata types
pub use keryx_docs as docs;

// Re-export the endpoint builder and binding layer
pub use keryx_endpoints as endpoints;

/// Prelude module for convenient imports.
///
/// # Example
///
/// ```rust,ignore
/// use keryx::prelude::*;
/// ```
pub mod prelude {
    pub use keryx_core::{
        handler_fn, DispatchError, Dispatcher, HandlerRegistry, RequestHandler, RequestScope,
        Validate, ValidationFailure,
    };

    // Re-export routing types
    pub use keryx_router::{
        Params, RequestContext, RequestId, RouteAdapter, RouteRegistry, RouteTable,
    };

    // Re-export endpoint metadata types
    pub use keryx_docs::{EndpointDefinition, EndpointDefinitions, Method, ParameterLocation};

    // Re-export the builder, binding, and response helpers
    pub use keryx_endpoints::{respond, Binding, EndpointError, EndpointsBuilder, EndpointsOptions};
}
