//! Webhooks.

use tsreq_core::RequestResult;
use tsreq_model::WebhookItem;

use super::shared::required;
use crate::session::{XmlRequest, ts_request};

/// Create a webhook that POSTs to `url` when `event` fires.
///
/// Name, event and URL are required.
pub fn create(item: &WebhookItem) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "webhook", "name")?;
    let event = required(item.event.as_ref(), "webhook", "event")?;
    let url = required(item.url.as_ref(), "webhook", "url")?;

    ts_request("webhook.create", |s| {
        let el = s.add("webhook");
        el.set("name", name);
        el.child("webhook-source").child(event);
        el.child("webhook-destination")
            .child("webhook-destination-http")
            .set("method", "POST")
            .set("url", url);
        Ok(())
    })
}
