//! Entity-specific request builders, one module per entity family.
//!
//! Every operation is a free function returning an [`XmlRequest`](crate::XmlRequest).
//! Required fields are checked before the tree is built; a failed check
//! produces no payload.

pub mod alert;
pub mod auth;
pub mod catalog;
pub mod connection;
pub mod datasource;
pub mod favorite;
pub mod flow;
pub mod group;
pub mod metric;
pub mod permission;
pub mod project;
pub mod schedule;
pub mod site;
pub mod subscription;
pub mod tag;
pub mod task;
pub mod user;
pub mod webhook;
pub mod workbook;

mod shared;
