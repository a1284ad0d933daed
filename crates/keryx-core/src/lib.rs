//! # Keryx Core
//!
//! Typed request dispatch and the validation seam for the Keryx endpoint
//! layer.
//!
//! This crate provides the pieces that do not care about HTTP at all:
//!
//! - [`RequestHandler`] - async handler trait for a `(request, result)` pair
//! - [`handler_fn`] / [`FnHandler`] - adapt plain async functions to handlers
//! - [`HandlerRegistry`] - startup-time registry of per-call handler factories
//! - [`RequestScope`] - explicit per-call resolution context
//! - [`Dispatcher`] - resolves and invokes a handler within one fresh scope
//! - [`DispatchError`] - configuration failure naming the offending request type
//! - [`Validate`] / [`ValidationFailure`] - declarative validation boundary

#![doc(html_root_url = "https://docs.rs/keryx-core/0.1.0")]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dispatch;
mod handler;
mod validate;

pub use dispatch::{
    DispatchError, Dispatcher, HandlerRegistry, RequestScope, ScopeId, ScopedHandler,
};
pub use handler::{handler_fn, FnHandler, RequestHandler};
pub use validate::{Validate, ValidationFailure};
