//! Error types for request construction.
//!
//! Building a request can only fail validation: either a field the wire format
//! requires is missing, or two mutually exclusive inputs were supplied together.
//! Both are raised before any tree is serialized.

/// Validation error raised while building a request payload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// A field required by the wire format was not populated.
    #[error("{entity} is missing required field `{field}`")]
    MissingField {
        /// The entity (or sub-structure) being built.
        entity: &'static str,
        /// The missing field.
        field: &'static str,
    },

    /// Two mutually exclusive inputs were both supplied.
    #[error("cannot set both `{first}` and `{second}`")]
    Conflict {
        /// The first conflicting input.
        first: &'static str,
        /// The second conflicting input.
        second: &'static str,
    },
}

impl RequestError {
    /// Shorthand for [`RequestError::MissingField`].
    #[must_use]
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }

    /// Shorthand for [`RequestError::Conflict`].
    #[must_use]
    pub fn conflict(first: &'static str, second: &'static str) -> Self {
        Self::Conflict { first, second }
    }

    /// The field named by this error. For conflicts this is the first input.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field, .. } => field,
            Self::Conflict { first, .. } => first,
        }
    }
}

/// Convenience result type for request builders.
pub type RequestResult<T> = Result<T, RequestError>;

/// Errors raised while loading a [`ServerContext`](crate::ServerContext).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An API version string was not of the form `major.minor`.
    #[error("invalid API version: {0} (expected `major.minor`)")]
    InvalidApiVersion(String),
}
