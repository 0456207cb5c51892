//! Flows.

use tsreq_core::RequestResult;
use tsreq_model::{ConnectionItem, FlowItem};

use super::shared::{add_connections, add_ref, add_ref_opt, required};
use crate::session::{XmlRequest, ts_request};

/// Move a flow or change its owner.
pub fn update(item: &FlowItem) -> RequestResult<XmlRequest> {
    ts_request("flow.update", |s| {
        let el = s.add("flow");
        add_ref_opt(el, "project", item.project_id.as_ref());
        add_ref_opt(el, "owner", item.owner_id.as_ref());
        Ok(())
    })
}

/// The metadata document sent with a flow publish. The project is required.
pub fn publish_metadata(
    item: &FlowItem,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<XmlRequest> {
    let project_id = required(item.project_id.as_ref(), "flow", "project_id")?;

    ts_request("flow.publish", |s| {
        let el = s.add("flow");
        el.set_opt("name", item.name.as_deref());
        add_ref(el, "project", project_id);
        if let Some(connections) = connections {
            add_connections(el, connections)?;
        }
        Ok(())
    })
}
