//! The terminal output of every request builder.

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE, InvalidHeaderValue};
use http::{HeaderMap, HeaderValue};
use tsreq_core::Notice;
use tsreq_xml::{XML_CONTENT_TYPE, XmlRequest};

use crate::multipart::{self, Part};

/// A request body ready for transmission, with its content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedRequest {
    /// The body.
    pub body: Bytes,
    /// `text/xml` for single documents, `multipart/mixed; boundary=...` otherwise.
    pub content_type: String,
    /// Deprecation notices raised while building the metadata document.
    pub notices: Vec<Notice>,
}

impl EncodedRequest {
    /// Encode `parts` as a multipart body.
    pub fn multipart(parts: &[Part], notices: Vec<Notice>) -> Self {
        let (body, content_type) = multipart::encode(parts);
        Self {
            body,
            content_type,
            notices,
        }
    }

    /// Whether the body is a multipart message.
    #[must_use]
    pub fn is_multipart(&self) -> bool {
        self.mime().is_some_and(|m| m.type_() == mime::MULTIPART)
    }

    /// The parsed content type.
    #[must_use]
    pub fn mime(&self) -> Option<mime::Mime> {
        self.content_type.parse().ok()
    }

    /// `Content-Type` and `Content-Length` headers for this body.
    pub fn headers(&self) -> Result<HeaderMap, InvalidHeaderValue> {
        let mut headers = HeaderMap::with_capacity(2);
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(&self.content_type)?);
        headers.insert(CONTENT_LENGTH, HeaderValue::from(self.body.len()));
        Ok(headers)
    }
}

impl From<XmlRequest> for EncodedRequest {
    fn from(req: XmlRequest) -> Self {
        Self {
            body: req.body,
            content_type: XML_CONTENT_TYPE.to_owned(),
            notices: req.notices,
        }
    }
}
