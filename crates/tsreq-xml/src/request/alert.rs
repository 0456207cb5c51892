//! Data-driven alerts.

use tsreq_core::RequestResult;
use tsreq_model::DataAlertItem;

use crate::fields::{Field, apply, fields, flag, text};
use crate::session::{XmlRequest, ts_request};

const ALERT: &[Field<DataAlertItem>] = fields!(DataAlertItem {
    "subject" => |a| text(a.subject.as_ref()),
    "frequency" => |a| a.frequency.map(|f| f.as_str().to_lowercase()),
    "public" => |a| flag(a.public),
});

/// Update an alert. `<owner>` is always present, carrying an id when one is set.
pub fn update(item: &DataAlertItem) -> RequestResult<XmlRequest> {
    ts_request("alert.update", |s| {
        let el = s.add("dataAlert");
        apply(el, item, ALERT);
        el.child("owner").set_opt("id", item.owner_id.as_deref());
        Ok(())
    })
}

/// Add a recipient to an alert.
pub fn add_user(user_id: &str) -> RequestResult<XmlRequest> {
    ts_request("alert.add_user", |s| {
        s.add("user").set("id", user_id);
        Ok(())
    })
}
