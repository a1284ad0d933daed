//! Scoped request dispatch.
//!
//! Handlers are registered once at startup in a [`HandlerRegistry`], keyed by
//! their `(request, result)` type pair. Every dispatch creates a fresh
//! [`RequestScope`], resolves a handler instance from its registered factory,
//! invokes it exactly once, and tears the scope down, success or failure.
//! Nothing resolved from a scope outlives the call that created it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use uuid::Uuid;

use crate::RequestHandler;

/// Error produced by the dispatch machinery.
///
/// Dispatch itself has exactly one failure mode: nothing was registered for
/// the requested type pair. Handler-level failures travel inside the
/// handler's own result type and are not the dispatcher's concern.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// No handler factory is registered for the `(request, result)` pair.
    ///
    /// This is a configuration error: registrations happen at startup, so a
    /// miss here means the application wired itself incorrectly.
    #[error("no handler registered for request type `{request_type}`")]
    HandlerNotFound {
        /// Fully qualified name of the request type that failed to resolve.
        request_type: &'static str,
    },
}

impl DispatchError {
    /// Creates a [`DispatchError::HandlerNotFound`] for `Req`.
    #[must_use]
    pub fn handler_not_found<Req>() -> Self {
        Self::HandlerNotFound {
            request_type: std::any::type_name::<Req>(),
        }
    }

    /// Returns the request type name carried by this error.
    #[must_use]
    pub fn request_type(&self) -> &'static str {
        match self {
            Self::HandlerNotFound { request_type } => request_type,
        }
    }
}

/// Identifier for one resolution scope, using UUID v7.
///
/// Scope ids exist for log correlation: every dispatch logs under a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(Uuid);

impl ScopeId {
    /// Mints a new scope id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

type ScopedFuture<Res> = Pin<Box<dyn Future<Output = Res> + Send>>;

type ScopedInvoker<Req, Res> = Box<dyn FnOnce(Req) -> ScopedFuture<Res> + Send>;

/// The concrete factory stored behind the registry's `Any` erasure.
///
/// Stored per `(TypeId, TypeId)` key and recovered by downcast at resolve
/// time; a key hit that fails to downcast is reported the same way as a miss.
struct HandlerFactory<Req, Res> {
    build: Box<dyn Fn() -> ScopedInvoker<Req, Res> + Send + Sync>,
}

/// Startup-time registry mapping `(request, result)` type pairs to handler
/// factories.
///
/// The registry is populated single-threaded during application wiring and
/// read-only afterwards; it carries no interior locking. Factories run once
/// per dispatch, so every call gets its own handler instance.
///
/// # Example
///
/// ```rust
/// use keryx_core::{handler_fn, HandlerRegistry};
///
/// struct Ping;
///
/// let mut registry = HandlerRegistry::new();
/// registry.register::<Ping, &'static str, _, _>(|| {
///     handler_fn(|_request: Ping| async { "pong" })
/// });
///
/// assert!(registry.contains::<Ping, &'static str>());
/// assert!(!registry.contains::<Ping, String>());
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    entries: HashMap<(TypeId, TypeId), Arc<dyn Any + Send + Sync>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Registers a handler factory for the `(Req, Res)` pair.
    ///
    /// The factory is invoked once per dispatch to build a fresh handler
    /// instance for that call's scope. Registering the same pair again
    /// replaces the previous factory.
    pub fn register<Req, Res, H, F>(&mut self, factory: F)
    where
        Req: Send + 'static,
        Res: Send + 'static,
        H: RequestHandler<Req, Res>,
        F: Fn() -> H + Send + Sync + 'static,
    {
        let build: Box<dyn Fn() -> ScopedInvoker<Req, Res> + Send + Sync> = Box::new(move || {
            let handler = factory();
            Box::new(move |request: Req| -> ScopedFuture<Res> {
                Box::pin(async move { handler.handle(request).await })
            })
        });

        let key = (TypeId::of::<Req>(), TypeId::of::<Res>());
        self.entries
            .insert(key, Arc::new(HandlerFactory { build }));
        tracing::debug!(
            "handler registered: {} -> {}",
            std::any::type_name::<Req>(),
            std::any::type_name::<Res>()
        );
    }

    /// Returns true if a factory is registered for the `(Req, Res)` pair.
    #[must_use]
    pub fn contains<Req: 'static, Res: 'static>(&self) -> bool {
        self.entries
            .contains_key(&(TypeId::of::<Req>(), TypeId::of::<Res>()))
    }

    /// Returns the number of registered type pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("registered_pairs", &self.entries.len())
            .finish()
    }
}

/// A handler materialized inside one [`RequestScope`].
///
/// Invocation consumes the handle, so "invoked at most once per resolution"
/// holds by construction.
pub struct ScopedHandler<Req, Res> {
    invoker: ScopedInvoker<Req, Res>,
}

impl<Req, Res> ScopedHandler<Req, Res> {
    /// Invokes the handler with `request`, consuming this handle.
    pub async fn invoke(self, request: Req) -> Res {
        (self.invoker)(request).await
    }
}

/// Explicit per-call resolution context.
///
/// A scope is created around exactly one dispatch; handlers materialized from
/// it are dropped with it when the call completes. Scopes are never shared
/// across calls, so handler instances may hold call-local state without
/// synchronization.
#[derive(Debug)]
pub struct RequestScope {
    handlers: Arc<HandlerRegistry>,
    scope_id: ScopeId,
}

impl RequestScope {
    /// Opens a fresh scope over the shared registry.
    #[must_use]
    pub fn new(handlers: Arc<HandlerRegistry>) -> Self {
        Self {
            handlers,
            scope_id: ScopeId::new(),
        }
    }

    /// Returns this scope's id.
    #[must_use]
    pub fn scope_id(&self) -> ScopeId {
        self.scope_id
    }

    /// Materializes a handler for the `(Req, Res)` pair from its registered
    /// factory.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::HandlerNotFound`] when no factory is
    /// registered for the pair.
    pub fn resolve<Req, Res>(&self) -> Result<ScopedHandler<Req, Res>, DispatchError>
    where
        Req: Send + 'static,
        Res: Send + 'static,
    {
        let key = (TypeId::of::<Req>(), TypeId::of::<Res>());
        let factory = self
            .handlers
            .entries
            .get(&key)
            .and_then(|entry| entry.downcast_ref::<HandlerFactory<Req, Res>>())
            .ok_or_else(DispatchError::handler_not_found::<Req>)?;

        Ok(ScopedHandler {
            invoker: (factory.build)(),
        })
    }
}

/// Resolves and invokes handlers, one fresh [`RequestScope`] per call.
///
/// # Example
///
/// ```rust
/// use keryx_core::{handler_fn, Dispatcher, HandlerRegistry};
///
/// #[derive(Debug)]
/// struct Ping;
///
/// let mut registry = HandlerRegistry::new();
/// registry.register::<Ping, &'static str, _, _>(|| {
///     handler_fn(|_request: Ping| async { "pong" })
/// });
///
/// let dispatcher = Dispatcher::new(registry);
/// let answer = tokio_test::block_on(dispatcher.dispatch::<Ping, &'static str>(Ping));
/// assert_eq!(answer.unwrap(), "pong");
/// ```
#[derive(Debug, Clone)]
pub struct Dispatcher {
    handlers: Arc<HandlerRegistry>,
}

impl Dispatcher {
    /// Creates a dispatcher owning the given registry.
    #[must_use]
    pub fn new(handlers: HandlerRegistry) -> Self {
        Self {
            handlers: Arc::new(handlers),
        }
    }

    /// Creates a dispatcher over an already-shared registry.
    #[must_use]
    pub fn from_shared(handlers: Arc<HandlerRegistry>) -> Self {
        Self { handlers }
    }

    /// Dispatches `request` to the handler registered for `(Req, Res)`.
    ///
    /// Opens a fresh [`RequestScope`], resolves, invokes exactly once, and
    /// drops the scope with everything resolved from it before returning.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::HandlerNotFound`] when the pair was never
    /// registered.
    pub async fn dispatch<Req, Res>(&self, request: Req) -> Result<Res, DispatchError>
    where
        Req: Send + 'static,
        Res: Send + 'static,
    {
        let scope = RequestScope::new(Arc::clone(&self.handlers));
        tracing::debug!(
            "dispatching {} in scope {}",
            std::any::type_name::<Req>(),
            scope.scope_id()
        );

        let handler = match scope.resolve::<Req, Res>() {
            Ok(handler) => handler,
            Err(err) => {
                tracing::error!("{}", err);
                return Err(err);
            }
        };

        Ok(handler.invoke(request).await)
    }
}
