//! Metrics.

use tsreq_core::RequestResult;
use tsreq_model::MetricItem;

use super::shared::add_ref;
use crate::fields::{Field, apply, fields, flag, text};
use crate::session::{XmlRequest, ts_request};

const UPDATE: &[Field<MetricItem>] = fields!(MetricItem {
    "id" => |m| text(m.id.as_ref()),
    "name" => |m| text(m.name.as_ref()),
    "description" => |m| text(m.description.as_ref()),
    "suspended" => |m| flag(m.suspended),
});

/// Update a metric.
pub fn update(item: &MetricItem) -> RequestResult<XmlRequest> {
    ts_request("metric.update", |s| {
        let el = s.add("metric");
        apply(el, item, UPDATE);
        if let Some(project_id) = &item.project_id {
            add_ref(el, "project", project_id);
        }
        if let Some(owner_id) = &item.owner_id {
            add_ref(el, "owner", owner_id);
        }
        Ok(())
    })
}
