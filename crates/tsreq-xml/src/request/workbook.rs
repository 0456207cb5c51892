//! Workbooks.

use tsreq_core::{Notice, RequestResult};
use tsreq_model::{ConnectionCredentials, ConnectionItem, WorkbookItem};

use super::shared::{
    add_credentials_or_connections, add_hidden_views, add_ref, add_ref_opt, ensure_exclusive,
    required,
};
use crate::fields::{Field, apply, fields, flag, non_empty};
use crate::session::{XmlRequest, ts_request};

const UPDATE: &[Field<WorkbookItem>] = fields!(WorkbookItem {
    "name" => |w| non_empty(w.name.as_ref()),
    "showTabs" => |w| flag(w.show_tabs),
});

/// Update a workbook.
///
/// `<dataAccelerationConfig>` is only sent when acceleration is switched on or
/// off explicitly.
pub fn update(item: &WorkbookItem) -> RequestResult<XmlRequest> {
    ts_request("workbook.update", |s| {
        let el = s.add("workbook");
        apply(el, item, UPDATE);
        add_ref_opt(el, "project", item.project_id.as_ref());
        add_ref_opt(el, "owner", item.owner_id.as_ref());

        let acceleration = &item.data_acceleration;
        if let Some(enabled) = acceleration.acceleration_enabled {
            el.child("dataAccelerationConfig")
                .set_bool("accelerationEnabled", enabled)
                .set_opt("accelerateNow", flag(acceleration.accelerate_now));
        }
        Ok(())
    })
}

/// The metadata document sent with a workbook publish.
///
/// Name and project are required. Credentials and connections are mutually
/// exclusive. `hidden_views` is deprecated in favor of the workbook's own
/// list, which wins when both are set.
pub fn publish_metadata(
    item: &WorkbookItem,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
    hidden_views: Option<&[String]>,
) -> RequestResult<XmlRequest> {
    ensure_exclusive(credentials, connections)?;
    let name = required(item.name.as_ref(), "workbook", "name")?;
    let project_id = required(item.project_id.as_ref(), "workbook", "project_id")?;

    ts_request("workbook.publish", |s| {
        if hidden_views.is_some() {
            s.notice(Notice::deprecated(
                "hidden_views",
                "set hidden_views on the workbook instead",
            ));
        }

        let el = s.add("workbook");
        el.set("name", name);
        if item.show_tabs == Some(true) {
            el.set("showTabs", "true");
        }
        add_ref(el, "project", project_id);
        add_credentials_or_connections(el, credentials, connections)?;
        if let Some(views) = item.hidden_views.as_deref().or(hidden_views) {
            add_hidden_views(el, views);
        }
        Ok(())
    })
}

/// Convert live connections to embedded extracts.
///
/// With `include_all` every data source is converted; otherwise only the
/// listed ones are.
pub fn embedded_extract(include_all: bool, datasource_ids: &[String]) -> RequestResult<XmlRequest> {
    ts_request("workbook.embedded_extract", |s| {
        let list = s.add("datasources");
        if include_all {
            list.set("includeAll", "true");
        } else {
            for id in datasource_ids {
                add_ref(list, "datasource", id);
            }
        }
        Ok(())
    })
}
