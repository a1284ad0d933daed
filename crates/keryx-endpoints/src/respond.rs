//! Response builders for the statuses endpoints actually answer with.
//!
//! Handlers produce `http::Response<Bytes>` values; these helpers cover the
//! shapes the endpoint layer needs so handlers rarely touch
//! `Response::builder()` themselves.
//!
//! | Helper | Status | Body |
//! |--------|--------|------|
//! | [`ok`] / [`ok_json`] | 200 | empty / JSON |
//! | [`created`] / [`created_json`] | 201 + `Location` | empty / JSON |
//! | [`accepted`] | 202 | empty |
//! | [`no_content`] | 204 | empty |
//! | [`bad_request`] / [`bad_request_json`] | 400 | empty / JSON |
//! | [`not_found`] | 404 | empty |
//! | [`internal_server_error`] | 500 | empty |
//!
//! Helpers that serialize or set a `Location` header are fallible and return
//! [`EndpointError`]; the rest cannot fail.
//!
//! # Example
//!
//! ```rust
//! use keryx_endpoints::respond;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct OrderCreated {
//!     id: String,
//! }
//!
//! let response = respond::created_json(
//!     "/orders/42",
//!     &OrderCreated { id: "42".into() },
//! ).unwrap();
//!
//! assert_eq!(response.status(), http::StatusCode::CREATED);
//! assert_eq!(response.headers()[http::header::LOCATION], "/orders/42");
//! ```

use crate::EndpointError;
use bytes::Bytes;
use http::{header, HeaderValue, Response, StatusCode};
use serde::Serialize;

/// An empty 200 OK.
#[must_use]
pub fn ok() -> Response<Bytes> {
    status_only(StatusCode::OK)
}

/// A 200 OK carrying `data` as JSON.
pub fn ok_json<T: Serialize>(data: &T) -> Result<Response<Bytes>, EndpointError> {
    json(StatusCode::OK, data)
}

/// An empty 201 Created pointing at the new resource.
pub fn created(location: &str) -> Result<Response<Bytes>, EndpointError> {
    let location = location_value(location)?;
    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .header(header::LOCATION, location)
        .body(Bytes::new())
        .expect("Failed to build response"))
}

/// A 201 Created pointing at the new resource and carrying `data` as JSON.
pub fn created_json<T: Serialize>(
    location: &str,
    data: &T,
) -> Result<Response<Bytes>, EndpointError> {
    let location = location_value(location)?;
    let body = serde_json::to_vec(data).map_err(EndpointError::response_encode)?;
    Ok(Response::builder()
        .status(StatusCode::CREATED)
        .header(header::LOCATION, location)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Bytes::from(body))
        .expect("Failed to build response"))
}

/// An empty 202 Accepted.
#[must_use]
pub fn accepted() -> Response<Bytes> {
    status_only(StatusCode::ACCEPTED)
}

/// An empty 204 No Content.
#[must_use]
pub fn no_content() -> Response<Bytes> {
    status_only(StatusCode::NO_CONTENT)
}

/// An empty 400 Bad Request.
#[must_use]
pub fn bad_request() -> Response<Bytes> {
    status_only(StatusCode::BAD_REQUEST)
}

/// A 400 Bad Request carrying `data` as JSON, typically a validation
/// failure list.
pub fn bad_request_json<T: Serialize>(data: &T) -> Result<Response<Bytes>, EndpointError> {
    json(StatusCode::BAD_REQUEST, data)
}

/// An empty 404 Not Found.
#[must_use]
pub fn not_found() -> Response<Bytes> {
    status_only(StatusCode::NOT_FOUND)
}

/// An empty 500 Internal Server Error.
#[must_use]
pub fn internal_server_error() -> Response<Bytes> {
    status_only(StatusCode::INTERNAL_SERVER_ERROR)
}

fn status_only(status: StatusCode) -> Response<Bytes> {
    Response::builder()
        .status(status)
        .body(Bytes::new())
        .expect("Failed to build response")
}

fn json<T: Serialize>(status: StatusCode, data: &T) -> Result<Response<Bytes>, EndpointError> {
    let body = serde_json::to_vec(data).map_err(EndpointError::response_encode)?;
    Ok(Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Bytes::from(body))
        .expect("Failed to build response"))
}

fn location_value(location: &str) -> Result<HeaderValue, EndpointError> {
    HeaderValue::from_str(location).map_err(|_| EndpointError::invalid_location(location))
}
