//! Tags.

use std::collections::BTreeSet;

use tsreq_core::RequestResult;

use super::shared::add_tags;
use crate::session::{XmlRequest, ts_request};

/// Add tags to content. Labels are de-duplicated and sent in sorted order.
pub fn add<'a>(labels: impl IntoIterator<Item = &'a str>) -> RequestResult<XmlRequest> {
    let labels: BTreeSet<&str> = labels.into_iter().collect();
    ts_request("tag.add", |s| {
        add_tags(s.root(), labels);
        Ok(())
    })
}
