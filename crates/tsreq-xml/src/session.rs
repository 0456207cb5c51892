//! The `tsRequest` envelope and the per-call builder session.
//!
//! Every request body is one document rooted at [`ROOT_TAG`]. [`ts_request`]
//! opens a fresh session, hands it to the entity-specific logic, and
//! serializes the tree when that logic returns successfully. A session lives
//! for exactly one call.

use bytes::Bytes;
use tsreq_core::{Notice, RequestResult};

use crate::element::Element;

/// Tag of the envelope every request body is wrapped in.
pub const ROOT_TAG: &str = "tsRequest";

/// Content type of a single-document request body.
pub const XML_CONTENT_TYPE: &str = "text/xml";

/// A serialized request document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlRequest {
    /// The serialized document. Its content type is [`XML_CONTENT_TYPE`].
    pub body: Bytes,
    /// Deprecation notices raised while building.
    pub notices: Vec<Notice>,
}

impl XmlRequest {
    /// The document as text.
    #[must_use]
    pub fn to_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Builder state for one request.
#[derive(Debug)]
pub struct Session {
    root: Element,
    notices: Vec<Notice>,
}

impl Session {
    fn new() -> Self {
        Self {
            root: Element::new(ROOT_TAG),
            notices: Vec::new(),
        }
    }

    /// The envelope element.
    pub fn root(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Append a child called `tag` to the envelope and return it.
    pub fn add(&mut self, tag: &str) -> &mut Element {
        self.root.child(tag)
    }

    /// Record a deprecation notice for the caller.
    pub fn notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    fn finish(self, kind: &'static str) -> XmlRequest {
        let body = Bytes::from(self.root.to_bytes());
        tracing::debug!(request = kind, bytes = body.len(), "built request document");
        XmlRequest {
            body,
            notices: self.notices,
        }
    }
}

/// Build one request document.
///
/// `kind` names the request in diagnostics. If `build` fails, nothing is
/// serialized and the error is returned unchanged.
pub fn ts_request<F>(kind: &'static str, build: F) -> RequestResult<XmlRequest>
where
    F: FnOnce(&mut Session) -> RequestResult<()>,
{
    let mut session = Session::new();
    build(&mut session)?;
    Ok(session.finish(kind))
}

/// A request consisting of the bare envelope.
pub fn empty() -> RequestResult<XmlRequest> {
    ts_request("empty", |_| Ok(()))
}
