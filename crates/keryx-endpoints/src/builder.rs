//! Declarative endpoint registration.
//!
//! [`EndpointsBuilder`] is the single entry point for wiring routes: it
//! installs a binding adapter for every declared endpoint into a
//! [`RouteRegistry`] and records an [`EndpointDefinition`] describing it.
//! Handlers come in three flavors per HTTP method: raw context, bound
//! input, and bound input with a declared response shape.

use crate::bind::{self, Binding};
use crate::{respond, EndpointError, EndpointsOptions};
use bytes::Bytes;
use http::Response;
use keryx_core::Validate;
use keryx_docs::{
    example, EndpointDefinition, EndpointDefinitions, EndpointParameter, EndpointResponse, Method,
};
use keryx_router::{AdapterFuture, RequestContext, RouteAdapter, RouteRegistry};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Fluent registrar for a set of endpoints.
///
/// Every registration method consumes and returns the builder so
/// declarations chain; [`finish`](Self::finish) yields the recorded
/// definitions once all routes are declared. Registration never fails:
/// route installation is delegated to the registry and metadata generation
/// degrades to less detail rather than erroring.
///
/// Typed registrations record metadata only for the first declaration of a
/// path; later declarations of the same path still get their adapter
/// installed but add no second record. Raw registrations always append.
///
/// # Example
///
/// ```rust
/// use keryx_endpoints::{respond, EndpointsBuilder};
/// use keryx_router::RouteTable;
///
/// let mut table = RouteTable::new();
/// let definitions = EndpointsBuilder::new(&mut table)
///     .get("/ping", |_ctx| async { Ok(respond::ok()) })
///     .finish();
///
/// assert_eq!(table.len(), 1);
/// assert_eq!(definitions.len(), 1);
/// ```
pub struct EndpointsBuilder<'a, R> {
    registry: &'a mut R,
    definitions: EndpointDefinitions,
    options: EndpointsOptions,
}

impl<'a, R: RouteRegistry> EndpointsBuilder<'a, R> {
    /// Creates a builder over `registry` with default options.
    #[must_use]
    pub fn new(registry: &'a mut R) -> Self {
        Self::with_options(registry, EndpointsOptions::default())
    }

    /// Creates a builder over `registry` with explicit options.
    #[must_use]
    pub fn with_options(registry: &'a mut R, options: EndpointsOptions) -> Self {
        Self {
            registry,
            definitions: EndpointDefinitions::new(),
            options,
        }
    }

    /// Registers a GET route whose handler works from the raw context.
    #[must_use]
    pub fn get<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        self.bare(Method::Get, path, handler)
    }

    /// Registers a POST route whose handler works from the raw context.
    #[must_use]
    pub fn post<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        self.bare(Method::Post, path, handler)
    }

    /// Registers a PUT route whose handler works from the raw context.
    #[must_use]
    pub fn put<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        self.bare(Method::Put, path, handler)
    }

    /// Registers a DELETE route whose handler works from the raw context.
    #[must_use]
    pub fn delete<F, Fut>(self, path: &str, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        self.bare(Method::Delete, path, handler)
    }

    /// Registers a GET route bound from the merged route and query values.
    ///
    /// The recorded definition carries a query parameter describing `TIn`
    /// with a generated example, and a bare 200 response.
    #[must_use]
    pub fn get_bound<TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TIn: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = EndpointResponse::bare(Method::Get.success_status());
        self.bound_query::<TIn, F, Fut>(Method::Get, path, handler, response)
    }

    /// Registers a DELETE route bound from the merged route and query values.
    #[must_use]
    pub fn delete_bound<TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TIn: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = EndpointResponse::bare(Method::Delete.success_status());
        self.bound_query::<TIn, F, Fut>(Method::Delete, path, handler, response)
    }

    /// Registers a POST route bound from a validated JSON body.
    ///
    /// The recorded definition carries a body parameter describing `TIn`
    /// with a generated example, and a bare 202 response. An empty body
    /// answers 200 without invoking the handler; a body failing `TIn`'s
    /// validation rules answers 400 with the failure list.
    #[must_use]
    pub fn post_bound<TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TIn: DeserializeOwned + JsonSchema + Validate + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = EndpointResponse::bare(Method::Post.success_status());
        self.bound_body::<TIn, F, Fut>(Method::Post, path, handler, response)
    }

    /// Registers a PUT route bound from a validated JSON body.
    #[must_use]
    pub fn put_bound<TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TIn: DeserializeOwned + JsonSchema + Validate + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = EndpointResponse::bare(Method::Put.success_status());
        self.bound_body::<TIn, F, Fut>(Method::Put, path, handler, response)
    }

    /// Like [`get_bound`](Self::get_bound), additionally recording `TOut`
    /// as the declared response shape.
    #[must_use]
    pub fn get_returning<TOut, TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TOut: JsonSchema,
        TIn: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = shaped_response::<TOut>(Method::Get.success_status());
        self.bound_query::<TIn, F, Fut>(Method::Get, path, handler, response)
    }

    /// Like [`delete_bound`](Self::delete_bound), additionally recording
    /// `TOut` as the declared response shape.
    #[must_use]
    pub fn delete_returning<TOut, TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TOut: JsonSchema,
        TIn: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = shaped_response::<TOut>(Method::Delete.success_status());
        self.bound_query::<TIn, F, Fut>(Method::Delete, path, handler, response)
    }

    /// Like [`post_bound`](Self::post_bound), additionally recording `TOut`
    /// as the declared response shape.
    #[must_use]
    pub fn post_returning<TOut, TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TOut: JsonSchema,
        TIn: DeserializeOwned + JsonSchema + Validate + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = shaped_response::<TOut>(Method::Post.success_status());
        self.bound_body::<TIn, F, Fut>(Method::Post, path, handler, response)
    }

    /// Like [`put_bound`](Self::put_bound), additionally recording `TOut`
    /// as the declared response shape.
    #[must_use]
    pub fn put_returning<TOut, TIn, F, Fut>(self, path: &str, handler: F) -> Self
    where
        TOut: JsonSchema,
        TIn: DeserializeOwned + JsonSchema + Validate + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let response = shaped_response::<TOut>(Method::Put.success_status());
        self.bound_body::<TIn, F, Fut>(Method::Put, path, handler, response)
    }

    /// Completes registration and yields the recorded definitions.
    #[must_use]
    pub fn finish(self) -> EndpointDefinitions {
        self.definitions
    }

    fn bare<F, Fut>(mut self, method: Method, path: &str, handler: F) -> Self
    where
        F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        self.install(method, path, bare_adapter(handler));
        self.definitions.add(EndpointDefinition::bare(method, path));
        self
    }

    fn bound_query<TIn, F, Fut>(
        mut self,
        method: Method,
        path: &str,
        handler: F,
        response: EndpointResponse,
    ) -> Self
    where
        TIn: DeserializeOwned + JsonSchema + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        self.install(method, path, query_adapter::<TIn, F, Fut>(handler));
        self.record::<TIn>(method, path, response);
        self
    }

    fn bound_body<TIn, F, Fut>(
        mut self,
        method: Method,
        path: &str,
        handler: F,
        response: EndpointResponse,
    ) -> Self
    where
        TIn: DeserializeOwned + JsonSchema + Validate + Send + 'static,
        F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
    {
        let adapter = body_adapter::<TIn, F, Fut>(handler, self.options.max_body_bytes());
        self.install(method, path, adapter);
        self.record::<TIn>(method, path, response);
        self
    }

    fn install(&mut self, method: Method, path: &str, adapter: RouteAdapter) {
        tracing::debug!("registering endpoint {} {}", method, path);
        self.registry.register(method.to_http(), path, adapter);
    }

    fn record<TIn: JsonSchema>(&mut self, method: Method, path: &str, response: EndpointResponse) {
        if self.definitions.exists(path) {
            tracing::debug!("endpoint metadata for {} already recorded, skipping", path);
            return;
        }

        let type_name = TIn::schema_name().into_owned();
        let parameter = EndpointParameter {
            location: method.parameter_location(),
            name: type_name.clone(),
            type_name,
            example: example_of::<TIn>(),
        };
        self.definitions.add(EndpointDefinition::new(
            method,
            path,
            vec![parameter],
            vec![response],
        ));
    }
}

impl<R> fmt::Debug for EndpointsBuilder<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointsBuilder")
            .field("definitions", &self.definitions.len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn shaped_response<TOut: JsonSchema>(status_code: u16) -> EndpointResponse {
    EndpointResponse::shaped(
        status_code,
        TOut::schema_name().into_owned(),
        example_of::<TOut>(),
    )
}

// A null example adds nothing to the record.
fn example_of<T: JsonSchema>() -> Option<Value> {
    match example::of::<T>() {
        Value::Null => None,
        value => Some(value),
    }
}

fn bare_adapter<F, Fut>(handler: F) -> RouteAdapter
where
    F: Fn(RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
{
    let handler = Arc::new(handler);
    Arc::new(move |ctx: RequestContext| -> AdapterFuture {
        let handler = Arc::clone(&handler);
        Box::pin(async move { Ok(handler(ctx).await?) })
    })
}

fn query_adapter<TIn, F, Fut>(handler: F) -> RouteAdapter
where
    TIn: DeserializeOwned + Send + 'static,
    F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
{
    let handler = Arc::new(handler);
    Arc::new(move |ctx: RequestContext| -> AdapterFuture {
        let handler = Arc::clone(&handler);
        Box::pin(async move {
            let value: TIn = bind::bind_query(&ctx)?;
            Ok(handler(value, ctx).await?)
        })
    })
}

fn body_adapter<TIn, F, Fut>(handler: F, max_body_bytes: usize) -> RouteAdapter
where
    TIn: DeserializeOwned + Validate + Send + 'static,
    F: Fn(TIn, RequestContext) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response<Bytes>, EndpointError>> + Send + 'static,
{
    let handler = Arc::new(handler);
    Arc::new(move |ctx: RequestContext| -> AdapterFuture {
        let handler = Arc::clone(&handler);
        Box::pin(async move {
            match bind::bind_body::<TIn>(&ctx, max_body_bytes)? {
                Binding::Value(value) => Ok(handler(value, ctx).await?),
                Binding::Missing => Ok(respond::ok()),
                Binding::Rejected(response) => Ok(response),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{HeaderMap, Method as HttpMethod, StatusCode, Uri};
    use keryx_core::ValidationFailure;
    use keryx_docs::ParameterLocation;
    use keryx_router::{Params, RouteTable};
    use serde::{Deserialize, Serialize};
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Deserialize, JsonSchema)]
    struct CreateOrder {
        id: String,
        quantity: i32,
    }

    impl Validate for CreateOrder {
        fn validate(&self) -> Vec<ValidationFailure> {
            let mut failures = Vec::new();
            if self.quantity <= 0 {
                failures.push(ValidationFailure::new(
                    "quantity",
                    "quantity must be greater than zero",
                ));
            }
            failures
        }
    }

    #[derive(Debug, Deserialize, JsonSchema)]
    #[allow(dead_code)]
    struct CancelOrder {
        id: String,
    }

    impl Validate for CancelOrder {}

    #[derive(Debug, Default, Deserialize, JsonSchema)]
    #[serde(default)]
    struct SearchQuery {
        term: String,
        page: u32,
    }

    #[derive(Debug, Serialize, JsonSchema)]
    struct OrderCreated {
        id: String,
    }

    fn make_ctx(
        method: HttpMethod,
        uri: &'static str,
        body: &[u8],
        route_values: Params,
    ) -> RequestContext {
        RequestContext::new(
            method,
            Uri::from_static(uri),
            HeaderMap::new(),
            Bytes::from(body.to_vec()),
            route_values,
        )
    }

    #[test]
    fn test_bare_registration_records_definition() {
        let mut table = RouteTable::new();
        let definitions = EndpointsBuilder::new(&mut table)
            .get("/ping", |_ctx| async { Ok(respond::ok()) })
            .finish();

        assert_eq!(table.len(), 1);
        assert_eq!(definitions.len(), 1);

        let definition = definitions.iter().next().unwrap();
        assert_eq!(definition.method, Method::Get);
        assert_eq!(definition.path, "/ping");
        assert!(definition.parameters.is_empty());
        assert_eq!(definition.responses[0].status_code, 200);
    }

    #[test]
    fn test_bare_registration_always_appends() {
        let mut table = RouteTable::new();
        let definitions = EndpointsBuilder::new(&mut table)
            .get("/ping", |_ctx| async { Ok(respond::ok()) })
            .get("/ping", |_ctx| async { Ok(respond::ok()) })
            .finish();

        assert_eq!(table.len(), 2);
        assert_eq!(definitions.len(), 2);
    }

    #[test]
    fn test_post_bound_records_body_parameter() {
        let mut table = RouteTable::new();
        let definitions = EndpointsBuilder::new(&mut table)
            .post_bound("/orders", |_order: CreateOrder, _ctx| async {
                Ok(respond::accepted())
            })
            .finish();

        let definition = definitions.iter().next().unwrap();
        let parameter = &definition.parameters[0];
        assert_eq!(parameter.location, ParameterLocation::Body);
        assert_eq!(parameter.type_name, "CreateOrder");
        assert_eq!(parameter.example, Some(json!({"id": "", "quantity": 0})));
        assert_eq!(definition.responses[0].status_code, 202);
        assert!(definition.responses[0].type_name.is_none());
    }

    #[test]
    fn test_get_bound_records_query_parameter() {
        let mut table = RouteTable::new();
        let definitions = EndpointsBuilder::new(&mut table)
            .get_bound("/search", |_query: SearchQuery, _ctx| async {
                Ok(respond::ok())
            })
            .finish();

        let definition = definitions.iter().next().unwrap();
        assert_eq!(definition.parameters[0].location, ParameterLocation::Query);
        assert_eq!(definition.responses[0].status_code, 200);
    }

    #[test]
    fn test_returning_records_response_shape() {
        let mut table = RouteTable::new();
        let definitions = EndpointsBuilder::new(&mut table)
            .post_returning::<OrderCreated, _, _, _>(
                "/orders",
                |order: CreateOrder, _ctx| async move {
                    respond::created_json(&format!("/orders/{}", order.id), &OrderCreated {
                        id: order.id,
                    })
                },
            )
            .finish();

        let response = &definitions.iter().next().unwrap().responses[0];
        assert_eq!(response.status_code, 202);
        assert_eq!(response.type_name.as_deref(), Some("OrderCreated"));
        assert_eq!(response.example, Some(json!({"id": ""})));
    }

    #[test]
    fn test_duplicate_typed_path_keeps_first_metadata() {
        let mut table = RouteTable::new();
        let definitions = EndpointsBuilder::new(&mut table)
            .post_bound("/orders", |_order: CreateOrder, _ctx| async {
                Ok(respond::accepted())
            })
            .post_bound("/orders", |_order: CancelOrder, _ctx| async {
                Ok(respond::accepted())
            })
            .finish();

        // Both adapters are installed; only the first declaration is described.
        assert_eq!(table.len(), 2);
        assert_eq!(definitions.len(), 1);
        assert_eq!(
            definitions.iter().next().unwrap().parameters[0].type_name,
            "CreateOrder"
        );
    }

    #[tokio::test]
    async fn test_body_adapter_invokes_handler_with_bound_value() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invoked);

        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .post_bound("/orders", move |order: CreateOrder, _ctx| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    assert_eq!(order.id, "abc");
                    assert_eq!(order.quantity, 2);
                    Ok(respond::accepted())
                }
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::POST, "/orders").unwrap();
        let ctx = make_ctx(
            HttpMethod::POST,
            "/orders",
            br#"{"id": "abc", "quantity": 2}"#,
            params,
        );
        let response = adapter(ctx).await.unwrap();

        assert_eq!(response.status(), StatusCode::ACCEPTED);
        assert_eq!(invoked.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_body_adapter_rejects_failing_validation() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invoked);

        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .post_bound("/orders", move |_order: CreateOrder, _ctx| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(respond::accepted())
                }
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::POST, "/orders").unwrap();
        let ctx = make_ctx(
            HttpMethod::POST,
            "/orders",
            br#"{"id": "abc", "quantity": 0}"#,
            params,
        );
        let response = adapter(ctx).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(invoked.load(Ordering::SeqCst), 0);

        let failures: Vec<ValidationFailure> = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(failures[0].member, "quantity");
    }

    #[tokio::test]
    async fn test_body_adapter_answers_empty_body_with_ok() {
        let invoked = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&invoked);

        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .post_bound("/orders", move |_order: CreateOrder, _ctx| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    Ok(respond::accepted())
                }
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::POST, "/orders").unwrap();
        let ctx = make_ctx(HttpMethod::POST, "/orders", b"", params);
        let response = adapter(ctx).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.body().is_empty());
        assert_eq!(invoked.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_body_adapter_propagates_malformed_json() {
        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .post_bound("/orders", |_order: CreateOrder, _ctx| async {
                Ok(respond::accepted())
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::POST, "/orders").unwrap();
        let ctx = make_ctx(HttpMethod::POST, "/orders", br#"{"id": "abc""#, params);
        let error = adapter(ctx).await.unwrap_err();

        let endpoint_error = error.downcast_ref::<EndpointError>().unwrap();
        assert!(matches!(endpoint_error, EndpointError::BodyDecode { .. }));
    }

    #[tokio::test]
    async fn test_query_adapter_binds_merged_values() {
        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .get_bound("/search", |query: SearchQuery, _ctx| async move {
                respond::ok_json(&json!({"term": query.term, "page": query.page}))
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::GET, "/search").unwrap();
        let ctx = make_ctx(HttpMethod::GET, "/search?term=foo&page=2", b"", params);
        let response = adapter(ctx).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(value, json!({"term": "foo", "page": 2}));
    }

    #[tokio::test]
    async fn test_query_adapter_prefers_route_values() {
        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .get_bound("/items/{page}", |query: SearchQuery, _ctx| async move {
                respond::ok_json(&json!({"page": query.page}))
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::GET, "/items/9").unwrap();
        let ctx = make_ctx(HttpMethod::GET, "/items/9?page=2", b"", params);
        let response = adapter(ctx).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(value, json!({"page": 9}));
    }

    #[tokio::test]
    async fn test_body_cap_from_options() {
        let mut table = RouteTable::new();
        let _definitions =
            EndpointsBuilder::with_options(&mut table, EndpointsOptions::new(16))
                .post_bound("/orders", |_order: CreateOrder, _ctx| async {
                    Ok(respond::accepted())
                })
                .finish();

        let (adapter, params) = table.lookup(&HttpMethod::POST, "/orders").unwrap();
        let ctx = make_ctx(
            HttpMethod::POST,
            "/orders",
            br#"{"id": "abc", "quantity": 2}"#,
            params,
        );
        let error = adapter(ctx).await.unwrap_err();

        let endpoint_error = error.downcast_ref::<EndpointError>().unwrap();
        assert_eq!(
            endpoint_error.status_code(),
            http::StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[tokio::test]
    async fn test_bare_adapter_passes_raw_context() {
        let mut table = RouteTable::new();
        let _definitions = EndpointsBuilder::new(&mut table)
            .delete("/sessions/{id}", |ctx| async move {
                let id = ctx.route_values().get("id").unwrap_or("").to_owned();
                respond::ok_json(&json!({"deleted": id}))
            })
            .finish();

        let (adapter, params) = table.lookup(&HttpMethod::DELETE, "/sessions/s-1").unwrap();
        let ctx = make_ctx(HttpMethod::DELETE, "/sessions/s-1", b"", params);
        let response = adapter(ctx).await.unwrap();

        let value: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(value, json!({"deleted": "s-1"}));
    }
}
