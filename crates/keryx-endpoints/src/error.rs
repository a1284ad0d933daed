//! Error type for the endpoint layer.
//!
//! Binding and response building report through [`EndpointError`]. Each
//! variant maps to the HTTP status the host should answer with when the
//! error crosses the adapter boundary; validation rejections are not errors
//! and never appear here (the binder turns them into a prepared 400).

use http::StatusCode;
use keryx_core::DispatchError;
use thiserror::Error;

/// Everything that can go wrong between a raw request and a typed handler
/// call, or between a handler result and the wire.
///
/// # Example
///
/// ```rust
/// use keryx_endpoints::EndpointError;
/// use http::StatusCode;
///
/// let error = EndpointError::body_too_large(1024, 4096);
/// assert_eq!(error.status_code(), StatusCode::PAYLOAD_TOO_LARGE);
/// assert!(error.to_string().contains("4096"));
/// ```
#[derive(Error, Debug)]
pub enum EndpointError {
    /// The request body was present but not decodable into the declared type.
    #[error("failed to decode request body: {source}")]
    BodyDecode {
        /// The underlying JSON decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The request body exceeds the configured size cap.
    #[error("request body of {actual} bytes exceeds the {limit} byte limit")]
    BodyTooLarge {
        /// The configured cap in bytes.
        limit: usize,
        /// The size of the rejected body in bytes.
        actual: usize,
    },

    /// The merged route and query values did not decode into the declared type.
    #[error("failed to decode query values: {source}")]
    QueryDecode {
        /// The underlying urlencoded decode error.
        #[source]
        source: serde_urlencoded::de::Error,
    },

    /// The merged route and query values could not be re-encoded for decoding.
    #[error("failed to encode merged query values: {source}")]
    QueryEncode {
        /// The underlying urlencoded encode error.
        #[source]
        source: serde_urlencoded::ser::Error,
    },

    /// A response body failed to serialize.
    #[error("failed to encode response body: {source}")]
    ResponseEncode {
        /// The underlying JSON encode error.
        #[source]
        source: serde_json::Error,
    },

    /// A `Location` value was not a valid HTTP header value.
    #[error("invalid Location header value: {value}")]
    InvalidLocation {
        /// The offending value.
        value: String,
    },

    /// Dispatching to a registered handler failed.
    #[error("dispatch failed: {source}")]
    Dispatch {
        /// The underlying dispatch error.
        #[from]
        source: DispatchError,
    },

    /// Anything else a handler wants to surface as a server-side failure.
    #[error("{message}")]
    Internal {
        /// Human-readable error message.
        message: String,
    },
}

impl EndpointError {
    /// Creates a body decode error.
    #[must_use]
    pub fn body_decode(source: serde_json::Error) -> Self {
        Self::BodyDecode { source }
    }

    /// Creates a body size cap error.
    #[must_use]
    pub const fn body_too_large(limit: usize, actual: usize) -> Self {
        Self::BodyTooLarge { limit, actual }
    }

    /// Creates a query decode error.
    #[must_use]
    pub fn query_decode(source: serde_urlencoded::de::Error) -> Self {
        Self::QueryDecode { source }
    }

    /// Creates a query encode error.
    #[must_use]
    pub fn query_encode(source: serde_urlencoded::ser::Error) -> Self {
        Self::QueryEncode { source }
    }

    /// Creates a response encode error.
    #[must_use]
    pub fn response_encode(source: serde_json::Error) -> Self {
        Self::ResponseEncode { source }
    }

    /// Creates an invalid `Location` header error.
    #[must_use]
    pub fn invalid_location(value: impl Into<String>) -> Self {
        Self::InvalidLocation {
            value: value.into(),
        }
    }

    /// Creates an internal error with a message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns the HTTP status the host should answer with.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::BodyDecode { .. } | Self::QueryDecode { .. } => StatusCode::BAD_REQUEST,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Self::QueryEncode { .. }
            | Self::ResponseEncode { .. }
            | Self::InvalidLocation { .. }
            | Self::Dispatch { .. }
            | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
