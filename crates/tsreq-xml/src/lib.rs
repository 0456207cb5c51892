//! Element tree builder for tsreq.
//!
//! Entities from `tsreq-model` are rendered as XML documents wrapped in a
//! `tsRequest` envelope. [`element`] holds the tree and its serializer,
//! [`fields`] the declarative attribute tables most entities are described
//! with, [`session`] the per-call envelope, and [`request`] one module of
//! builders per entity family.
//!
//! ```
//! use tsreq_model::UserItem;
//! use tsreq_model::types::SiteRole;
//!
//! let req = tsreq_xml::request::user::add(&UserItem::new("alice", SiteRole::Viewer))?;
//! assert_eq!(
//!     req.to_text(),
//!     r#"<tsRequest><user name="alice" siteRole="Viewer"/></tsRequest>"#
//! );
//! # Ok::<(), tsreq_core::RequestError>(())
//! ```

pub mod element;
pub mod fields;
pub mod request;
pub mod session;

pub use element::{Element, bool_str};
pub use session::{ROOT_TAG, Session, XML_CONTENT_TYPE, XmlRequest, empty, ts_request};
