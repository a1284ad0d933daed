//! Endpoint metadata records and their ordered store.
//!
//! One [`EndpointDefinition`] is recorded per declared route. The collection
//! is written during startup route declaration and read-only afterwards:
//! documentation generators enumerate it, nothing on the request path does.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::Method;

/// Where a declared parameter is read from at request time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Merged route template values and query string (GET/DELETE).
    Query,
    /// JSON request body (POST/PUT).
    Body,
}

impl std::fmt::Display for ParameterLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query => f.write_str("query"),
            Self::Body => f.write_str("body"),
        }
    }
}

/// The input shape declared for an endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointParameter {
    /// Where the value is bound from.
    pub location: ParameterLocation,
    /// Name of the input shape.
    pub name: String,
    /// Type name of the input shape.
    pub type_name: String,
    /// Representative instance of the shape, if synthesis produced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

/// One response an endpoint is declared to produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointResponse {
    /// HTTP status code of this response.
    pub status_code: u16,
    /// Type name of the response shape, when one was declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    /// Representative instance of the response shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

impl EndpointResponse {
    /// A response carrying only a status code.
    #[must_use]
    pub fn bare(status_code: u16) -> Self {
        Self {
            status_code,
            type_name: None,
            example: None,
        }
    }

    /// A response with a declared shape.
    #[must_use]
    pub fn shaped(status_code: u16, type_name: impl Into<String>, example: Option<Value>) -> Self {
        Self {
            status_code,
            type_name: Some(type_name.into()),
            example,
        }
    }
}

/// The static description of one declared route.
///
/// # Example
///
/// ```rust
/// use keryx_docs::{EndpointDefinition, EndpointResponse, Method};
///
/// let definition = EndpointDefinition::bare(Method::Get, "/health");
/// assert_eq!(definition.path, "/health");
/// assert_eq!(definition.responses, vec![EndpointResponse::bare(200)]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDefinition {
    /// Declared HTTP method.
    pub method: Method,
    /// Route template; the store's uniqueness key for typed registrations.
    pub path: String,
    /// Declared input shapes, in declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<EndpointParameter>,
    /// Declared responses, in declaration order.
    pub responses: Vec<EndpointResponse>,
}

impl EndpointDefinition {
    /// Creates a definition with explicit parameters and responses.
    #[must_use]
    pub fn new(
        method: Method,
        path: impl Into<String>,
        parameters: Vec<EndpointParameter>,
        responses: Vec<EndpointResponse>,
    ) -> Self {
        Self {
            method,
            path: path.into(),
            parameters,
            responses,
        }
    }

    /// Creates the minimal definition recorded for untyped registrations:
    /// no parameters, a single 200 response.
    #[must_use]
    pub fn bare(method: Method, path: impl Into<String>) -> Self {
        Self::new(method, path, Vec::new(), vec![EndpointResponse::bare(200)])
    }
}

/// Ordered collection of endpoint definitions.
///
/// The store itself accepts everything it is given; path uniqueness for
/// typed registrations is the registrar's job, checked through [`exists`]
/// before a record with generated metadata is built. Untyped records are
/// cheap and always append.
///
/// [`exists`]: EndpointDefinitions::exists
///
/// # Example
///
/// ```rust
/// use keryx_docs::{EndpointDefinition, EndpointDefinitions, Method};
///
/// let mut definitions = EndpointDefinitions::new();
/// definitions.add(EndpointDefinition::bare(Method::Get, "/health"));
///
/// assert!(definitions.exists("/health"));
/// assert!(!definitions.exists("/metrics"));
/// assert_eq!(definitions.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointDefinitions {
    definitions: Vec<EndpointDefinition>,
}

impl EndpointDefinitions {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition unconditionally.
    pub fn add(&mut self, definition: EndpointDefinition) {
        self.definitions.push(definition);
    }

    /// Returns true if any definition was recorded for `path`.
    ///
    /// Paths compare as the raw template strings handed to the registrar.
    #[must_use]
    pub fn exists(&self, path: &str) -> bool {
        self.definitions.iter().any(|d| d.path == path)
    }

    /// Iterates the definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &EndpointDefinition> {
        self.definitions.iter()
    }

    /// Returns the number of recorded definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Serializes the whole store for an external documentation consumer.
    ///
    /// # Errors
    ///
    /// Returns the underlying serialization error; with the value types used
    /// here that does not happen in practice.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl<'a> IntoIterator for &'a EndpointDefinitions {
    type Item = &'a EndpointDefinition;
    type IntoIter = std::slice::Iter<'a, EndpointDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.definitions.iter()
    }
}
