//! Server context supplied by the caller's session.
//!
//! The request builders are pure, but a few entity families render differently
//! depending on the REST API version of the target server. [`ServerContext`]
//! carries that information in read-only form.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::version::ApiVersion;

/// Read-only view of the server a request is built for.
///
/// # Examples
///
/// ```
/// use tsreq_core::{ApiVersion, ServerContext};
///
/// let ctx = ServerContext::builder().api_version(ApiVersion::new(3, 8)).build();
/// assert!(!ctx.use_new_flow_settings());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServerContext {
    /// REST API version negotiated with the server.
    #[builder(default)]
    pub api_version: ApiVersion,
}

impl ServerContext {
    /// Load the context from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `TSREQ_API_VERSION` | `3.10` |
    ///
    /// Unparseable values are logged and the default is kept.
    #[must_use]
    pub fn from_env() -> Self {
        let mut ctx = Self::default();

        if let Ok(v) = std::env::var("TSREQ_API_VERSION") {
            match v.parse() {
                Ok(version) => ctx.api_version = version,
                Err(e) => tracing::warn!(error = %e, "ignoring TSREQ_API_VERSION"),
            }
        }

        ctx
    }

    /// Whether the server expects the split `editingFlowsEnabled` /
    /// `schedulingFlowsEnabled` site settings instead of `flowsEnabled`.
    #[must_use]
    pub fn use_new_flow_settings(&self) -> bool {
        self.api_version >= ApiVersion::SPLIT_FLOW_SETTINGS
    }
}
