//! Declarative validation boundary.
//!
//! The binding layer validates body-bound values before a handler ever sees
//! them. Rule *evaluation* is the implementing type's business; the binder
//! only consumes the resulting failure list, where empty means valid.

use serde::{Deserialize, Serialize};

/// One validation failure, addressed to a member of the validated value.
///
/// Serializes camelCase: this is the wire shape of the 400 response body a
/// rejected request receives.
///
/// # Example
///
/// ```rust
/// use keryx_core::ValidationFailure;
///
/// let failure = ValidationFailure::new("quantity", "quantity must be greater than zero");
/// let json = serde_json::to_string(&failure).unwrap();
/// assert_eq!(
///     json,
///     r#"{"member":"quantity","message":"quantity must be greater than zero"}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationFailure {
    /// Name of the offending member.
    pub member: String,
    /// Human-readable description of the rule that failed.
    pub message: String,
}

impl ValidationFailure {
    /// Creates a failure for `member` with the given message.
    #[must_use]
    pub fn new(member: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            message: message.into(),
        }
    }
}

/// Types that can check themselves against declarative rules.
///
/// The default implementation declares the value valid, so types without
/// rules opt in with an empty `impl` block. Body-bound request types go
/// through [`validate`](Validate::validate) before their handler runs;
/// query-bound values deliberately do not.
///
/// # Example
///
/// ```rust
/// use keryx_core::{Validate, ValidationFailure};
///
/// struct CreateOrder {
///     id: String,
///     quantity: i32,
/// }
///
/// impl Validate for CreateOrder {
///     fn validate(&self) -> Vec<ValidationFailure> {
///         let mut failures = Vec::new();
///         if self.id.is_empty() {
///             failures.push(ValidationFailure::new("id", "id must not be empty"));
///         }
///         if self.quantity <= 0 {
///             failures.push(ValidationFailure::new(
///                 "quantity",
///                 "quantity must be greater than zero",
///             ));
///         }
///         failures
///     }
/// }
///
/// let order = CreateOrder { id: "abc".into(), quantity: 0 };
/// let failures = order.validate();
/// assert_eq!(failures.len(), 1);
/// assert_eq!(failures[0].member, "quantity");
/// ```
pub trait Validate {
    /// Returns every rule violation found; an empty list means valid.
    fn validate(&self) -> Vec<ValidationFailure> {
        Vec::new()
    }
}
