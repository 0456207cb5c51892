//! Entry point bound to one server.

use tsreq_core::{RequestResult, ServerContext};
use tsreq_model::SiteItem;
use tsreq_xml::request::site;
use typed_builder::TypedBuilder;

use crate::payload::EncodedRequest;

/// Builds the requests whose shape depends on the target server.
///
/// Every other request is server-independent and is built directly with the
/// functions in `tsreq_xml::request` and [`crate::publish`].
#[derive(Debug, Clone, Default, TypedBuilder)]
pub struct RequestFactory {
    /// The server requests are built for.
    #[builder(default)]
    server: ServerContext,
}

impl RequestFactory {
    /// A factory for `server`.
    #[must_use]
    pub fn new(server: ServerContext) -> Self {
        Self { server }
    }

    /// A factory for the server described by the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(ServerContext::from_env())
    }

    /// The server requests are built for.
    #[must_use]
    pub fn server(&self) -> &ServerContext {
        &self.server
    }

    /// Create a site, using the flow-settings scheme of this server.
    pub fn create_site(&self, item: &SiteItem) -> RequestResult<EncodedRequest> {
        site::create(item, Some(&self.server)).map(Into::into)
    }

    /// Update a site, using the flow-settings scheme of this server.
    pub fn update_site(&self, item: &SiteItem) -> RequestResult<EncodedRequest> {
        site::update(item, Some(&self.server)).map(Into::into)
    }
}
