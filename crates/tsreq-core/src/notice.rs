//! Non-fatal diagnostics raised while building requests.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A deprecation notice.
///
/// Notices never affect control flow: the request is still built using the
/// compatibility fallback. They are returned alongside the payload and logged
/// at `warn` level when raised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    /// The deprecated parameter or attribute.
    pub subject: String,
    /// Human-readable guidance.
    pub message: String,
}

impl Notice {
    /// Create a notice and emit it as a `tracing` warning.
    pub fn deprecated(subject: impl Into<String>, message: impl Into<String>) -> Self {
        let notice = Self {
            subject: subject.into(),
            message: message.into(),
        };
        tracing::warn!(subject = %notice.subject, "deprecated: {}", notice.message);
        notice
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is deprecated: {}", self.subject, self.message)
    }
}
