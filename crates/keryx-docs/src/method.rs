//! The declarative HTTP method set.

use serde::{Deserialize, Serialize};

use crate::ParameterLocation;

/// HTTP methods an endpoint can be declared with.
///
/// GET and DELETE are treated as side-effect-free reads bound from
/// route/query values; POST and PUT are state-changing writes bound from the
/// request body. That split drives both the parameter location recorded in
/// metadata and the default success status code.
///
/// # Example
///
/// ```rust
/// use keryx_docs::{Method, ParameterLocation};
///
/// assert_eq!(Method::Get.parameter_location(), ParameterLocation::Query);
/// assert_eq!(Method::Post.parameter_location(), ParameterLocation::Body);
/// assert_eq!(Method::Get.success_status(), 200);
/// assert_eq!(Method::Put.success_status(), 202);
/// assert_eq!(Method::Delete.to_string(), "DELETE");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    /// Side-effect-free read; binds from route/query values.
    Get,
    /// State-changing write; binds from the JSON body.
    Post,
    /// State-changing write; binds from the JSON body.
    Put,
    /// Side-effect-free removal; binds from route/query values.
    Delete,
}

impl Method {
    /// Returns the HTTP token for this method.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// Where a typed parameter declared for this method is read from.
    #[must_use]
    pub const fn parameter_location(self) -> ParameterLocation {
        match self {
            Self::Get | Self::Delete => ParameterLocation::Query,
            Self::Post | Self::Put => ParameterLocation::Body,
        }
    }

    /// The default success status recorded for typed registrations: 200 for
    /// GET, 202 for everything else.
    #[must_use]
    pub const fn success_status(self) -> u16 {
        match self {
            Self::Get => 200,
            _ => 202,
        }
    }

    /// Converts to the router boundary's [`http::Method`].
    #[must_use]
    pub fn to_http(self) -> http::Method {
        match self {
            Self::Get => http::Method::GET,
            Self::Post => http::Method::POST,
            Self::Put => http::Method::PUT,
            Self::Delete => http::Method::DELETE,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_serializes_as_http_token() {
        assert_eq!(serde_json::to_string(&Method::Get).unwrap(), "\"GET\"");
        assert_eq!(serde_json::to_string(&Method::Delete).unwrap(), "\"DELETE\"");

        let parsed: Method = serde_json::from_str("\"POST\"").unwrap();
        assert_eq!(parsed, Method::Post);
    }

    #[test]
    fn test_parameter_location_by_method() {
        assert_eq!(Method::Get.parameter_location(), ParameterLocation::Query);
        assert_eq!(Method::Delete.parameter_location(), ParameterLocation::Query);
        assert_eq!(Method::Post.parameter_location(), ParameterLocation::Body);
        assert_eq!(Method::Put.parameter_location(), ParameterLocation::Body);
    }

    #[test]
    fn test_success_status_by_method() {
        assert_eq!(Method::Get.success_status(), 200);
        assert_eq!(Method::Post.success_status(), 202);
        assert_eq!(Method::Put.success_status(), 202);
        assert_eq!(Method::Delete.success_status(), 202);
    }

    #[test]
    fn test_to_http() {
        assert_eq!(Method::Get.to_http(), http::Method::GET);
        assert_eq!(Method::Put.to_http(), http::Method::PUT);
    }
}
