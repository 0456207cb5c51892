//! Connection updates.

use tsreq_core::RequestResult;
use tsreq_model::ConnectionItem;

use crate::fields::{Field, apply, display, fields, flag, lower, text};
use crate::session::{XmlRequest, ts_request};

const UPDATE: &[Field<ConnectionItem>] = fields!(ConnectionItem {
    "serverAddress" => |c| lower(c.server_address.as_ref()),
    "serverPort" => |c| display(c.server_port),
    "userName" => |c| text(c.username.as_ref()),
    "password" => |c| text(c.password.as_ref()),
    "embedPassword" => |c| flag(c.embed_password),
});

/// Update a connection of a published data source or workbook.
pub fn update(item: &ConnectionItem) -> RequestResult<XmlRequest> {
    ts_request("connection.update", |s| {
        apply(s.add("connection"), item, UPDATE);
        Ok(())
    })
}
