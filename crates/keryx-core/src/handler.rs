//! Handler trait for typed request processing.
//!
//! The [`RequestHandler`] trait is the unit of business logic behind the
//! dispatcher: one implementation per `(request, result)` pair.

use std::future::Future;

/// A handler for a typed request producing a typed result.
///
/// Handlers are resolved through a fresh
/// [`RequestScope`](crate::RequestScope) for every dispatch and dropped when
/// the call completes, so implementations must not assume they outlive a
/// single request.
///
/// The result type is deliberately unconstrained: a handler that can fail
/// picks `Res = Result<…>` and the outcome travels through dispatch
/// untouched. Only *missing registration* is an error of the dispatch
/// machinery itself.
///
/// # Example
///
/// ```rust
/// use keryx_core::RequestHandler;
///
/// struct PingRequest;
/// struct PingResult(&'static str);
///
/// struct PingHandler;
///
/// impl RequestHandler<PingRequest, PingResult> for PingHandler {
///     async fn handle(&self, _request: PingRequest) -> PingResult {
///         PingResult("pong")
///     }
/// }
/// ```
pub trait RequestHandler<Req, Res>: Send + Sync + 'static
where
    Req: Send + 'static,
    Res: Send + 'static,
{
    /// Handles one request, producing the result.
    fn handle(&self, request: Req) -> impl Future<Output = Res> + Send;
}

/// A [`RequestHandler`] backed by a plain async function or closure.
///
/// Built with [`handler_fn`].
pub struct FnHandler<F> {
    func: F,
}

/// Adapts an async function into a [`RequestHandler`].
///
/// # Example
///
/// ```rust
/// use keryx_core::{handler_fn, HandlerRegistry};
///
/// #[derive(Debug)]
/// struct Greet(String);
///
/// let mut registry = HandlerRegistry::new();
/// registry.register::<Greet, String, _, _>(|| {
///     handler_fn(|request: Greet| async move { format!("hello, {}", request.0) })
/// });
/// assert!(registry.contains::<Greet, String>());
/// ```
pub fn handler_fn<F>(func: F) -> FnHandler<F> {
    FnHandler { func }
}

impl<F, Req, Res, Fut> RequestHandler<Req, Res> for FnHandler<F>
where
    F: Fn(Req) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Res> + Send,
    Req: Send + 'static,
    Res: Send + 'static,
{
    fn handle(&self, request: Req) -> impl Future<Output = Res> + Send {
        (self.func)(request)
    }
}
