//! Tunables for the endpoint layer.

use serde::Deserialize;

/// Default maximum accepted request body size (1 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Configuration for endpoint registration.
///
/// Deserializable so hosts can carry it inside their own configuration
/// tree; every field falls back to its default when absent.
///
/// # Example
///
/// ```rust
/// use keryx_endpoints::EndpointsOptions;
///
/// let options: EndpointsOptions = serde_json::from_str(r#"{"maxBodyBytes": 65536}"#).unwrap();
/// assert_eq!(options.max_body_bytes(), 65536);
///
/// let defaults = EndpointsOptions::default();
/// assert_eq!(defaults.max_body_bytes(), 1024 * 1024);
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EndpointsOptions {
    max_body_bytes: usize,
}

impl EndpointsOptions {
    /// Creates options with an explicit body size cap.
    #[must_use]
    pub const fn new(max_body_bytes: usize) -> Self {
        Self { max_body_bytes }
    }

    /// Returns the maximum accepted request body size in bytes.
    #[must_use]
    pub const fn max_body_bytes(&self) -> usize {
        self.max_body_bytes
    }
}

impl Default for EndpointsOptions {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
