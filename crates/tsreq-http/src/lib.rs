//! Wire encoder for tsreq.
//!
//! Turns the documents built by `tsreq-xml` into bodies ready for
//! transmission. Single documents go out as `text/xml`; publish operations and
//! upload chunks go out as `multipart/mixed` bodies whose first part is always
//! the metadata document.
//!
//! ```
//! use tsreq_http::publish::{FileContent, publish_flow};
//! use tsreq_model::FlowItem;
//!
//! let flow = FlowItem {
//!     project_id: Some("p1".to_owned()),
//!     ..FlowItem::default()
//! };
//! let req = publish_flow(&flow, FileContent::new("prep.tflx", &b"PK"[..]), None)?;
//! assert!(req.content_type.starts_with("multipart/mixed; boundary="));
//! # Ok::<(), tsreq_core::RequestError>(())
//! ```

pub mod factory;
pub mod multipart;
pub mod payload;
pub mod publish;

pub use factory::RequestFactory;
pub use payload::EncodedRequest;
