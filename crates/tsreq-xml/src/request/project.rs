//! Projects.

use tsreq_core::RequestResult;
use tsreq_model::ProjectItem;

use super::shared::required;
use crate::fields::{Field, apply, display, fields, non_empty, text};
use crate::session::{XmlRequest, ts_request};

const CREATE: &[Field<ProjectItem>] = fields!(ProjectItem {
    "description" => |p| non_empty(p.description.as_ref()),
    "contentPermissions" => |p| display(p.content_permissions),
    "parentProjectId" => |p| non_empty(p.parent_id.as_ref()),
});

// An empty parent id moves the project to the top level, so it is sent as is.
const UPDATE: &[Field<ProjectItem>] = fields!(ProjectItem {
    "name" => |p| non_empty(p.name.as_ref()),
    "description" => |p| non_empty(p.description.as_ref()),
    "contentPermissions" => |p| display(p.content_permissions),
    "parentProjectId" => |p| text(p.parent_id.as_ref()),
});

/// Create a project. The name is required.
pub fn create(item: &ProjectItem) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "project", "name")?;
    ts_request("project.create", |s| {
        let el = s.add("project");
        el.set("name", name);
        apply(el, item, CREATE);
        Ok(())
    })
}

/// Update a project.
pub fn update(item: &ProjectItem) -> RequestResult<XmlRequest> {
    ts_request("project.update", |s| {
        apply(s.add("project"), item, UPDATE);
        Ok(())
    })
}
