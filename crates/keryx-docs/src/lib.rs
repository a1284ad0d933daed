//! # Keryx Docs
//!
//! Endpoint metadata for documentation and introspection consumers.
//!
//! When routes are declared through the Keryx endpoint builder, each
//! registration leaves behind a static description of its shape:
//!
//! - [`Method`] - the four declarative HTTP methods
//! - [`EndpointDefinition`] - one declared route: method, path, parameters, responses
//! - [`EndpointParameter`] / [`EndpointResponse`] - input and output shapes
//! - [`EndpointDefinitions`] - the ordered store handed to documentation generators
//! - [`example`] - representative payload synthesis from derived JSON Schemas
//!
//! Definitions are built once at startup and immutable afterwards; nothing in
//! this crate is touched on the request path.

#![doc(html_root_url = "https://docs.rs/keryx-docs/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod definitions;
pub mod example;
mod method;

pub use definitions::{
    EndpointDefinition, EndpointDefinitions, EndpointParameter, EndpointResponse,
    ParameterLocation,
};
pub use method::Method;
