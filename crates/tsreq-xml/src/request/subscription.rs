//! Subscriptions.

use tsreq_core::{RequestError, RequestResult};
use tsreq_model::SubscriptionItem;

use super::shared::{add_ref, required};
use crate::fields::{Field, apply, display, fields, flag, text};
use crate::session::{XmlRequest, ts_request};

const CREATE: &[Field<SubscriptionItem>] = fields!(SubscriptionItem {
    "attachImage" => |s| flag(s.attach_image),
    "attachPdf" => |s| flag(s.attach_pdf),
    "message" => |s| text(s.message.as_ref()),
    "pageOrientation" => |s| display(s.page_orientation),
    "pageSizeOption" => |s| display(s.page_size_option),
});

const UPDATE: &[Field<SubscriptionItem>] = fields!(SubscriptionItem {
    "subject" => |s| text(s.subject.as_ref()),
    "attachImage" => |s| flag(s.attach_image),
    "attachPdf" => |s| flag(s.attach_pdf),
    "pageOrientation" => |s| display(s.page_orientation),
    "pageSizeOption" => |s| display(s.page_size_option),
    "suspended" => |s| flag(s.suspended),
});

/// Create a subscription.
///
/// Subject, target content, schedule and user are required.
pub fn create(item: &SubscriptionItem) -> RequestResult<XmlRequest> {
    let subject = required(item.subject.as_ref(), "subscription", "subject")?;
    let target = item
        .target
        .as_ref()
        .ok_or_else(|| RequestError::missing("subscription", "target"))?;
    let schedule_id = required(item.schedule_id.as_ref(), "subscription", "schedule_id")?;
    let user_id = required(item.user_id.as_ref(), "subscription", "user_id")?;

    ts_request("subscription.create", |s| {
        let el = s.add("subscription");
        el.set("subject", subject);
        apply(el, item, CREATE);
        el.child("content")
            .set("id", target.id.as_str())
            .set("type", target.content_type.as_str())
            .set_opt("sendIfViewEmpty", flag(item.send_if_view_empty));
        add_ref(el, "schedule", schedule_id);
        add_ref(el, "user", user_id);
        Ok(())
    })
}

/// Update a subscription.
///
/// `<schedule>` and `<content>` are always present and carry only what is set.
pub fn update(item: &SubscriptionItem) -> RequestResult<XmlRequest> {
    ts_request("subscription.update", |s| {
        let el = s.add("subscription");
        apply(el, item, UPDATE);
        el.child("schedule").set_opt("id", item.schedule_id.as_deref());
        el.child("content")
            .set_opt("sendIfViewEmpty", flag(item.send_if_view_empty));
        Ok(())
    })
}
