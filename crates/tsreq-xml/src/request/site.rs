//! Sites.
//!
//! Flow settings are versioned. Servers from API 3.10 on take separate
//! `editingFlowsEnabled` and `schedulingFlowsEnabled` attributes; older ones
//! take a single `flowsEnabled`. Exactly one scheme is written per request,
//! synthesized from whichever flags the caller populated.

use tsreq_core::{Notice, RequestError, RequestResult, ServerContext};
use tsreq_model::SiteItem;

use super::shared::required;
use crate::element::Element;
use crate::fields::{Field, apply, display, fields, flag, lower, non_empty, non_zero, text};
use crate::session::{Session, XmlRequest, ts_request};

/// Settings written before the flow flags.
const LEADING: &[Field<SiteItem>] = fields!(SiteItem {
    "adminMode" => |s| display(s.admin_mode),
    "userQuota" => |s| non_zero(s.user_quota),
    "storageQuota" => |s| non_zero(s.storage_quota),
    "disableSubscriptions" => |s| flag(s.disable_subscriptions),
    "subscribeOthersEnabled" => |s| flag(s.subscribe_others_enabled),
    "revisionLimit" => |s| non_zero(s.revision_limit),
    "revisionHistoryEnabled" => |s| flag(s.revision_history_enabled),
    "dataAccelerationMode" => |s| lower(s.data_acceleration_mode.as_ref()),
    "catalogingEnabled" => |s| flag(s.cataloging_enabled),
});

/// Settings written after the flow flags.
const TRAILING: &[Field<SiteItem>] = fields!(SiteItem {
    "allowSubscriptionAttachments" => |s| flag(s.allow_subscription_attachments),
    "guestAccessEnabled" => |s| flag(s.guest_access_enabled),
    "cacheWarmupEnabled" => |s| flag(s.cache_warmup_enabled),
    "commentingEnabled" => |s| flag(s.commenting_enabled),
    "extractEncryptionMode" => |s| lower(s.extract_encryption_mode.as_ref()),
    "requestAccessEnabled" => |s| flag(s.request_access_enabled),
    "runNowEnabled" => |s| flag(s.run_now_enabled),
    "tierCreatorCapacity" => |s| display(s.tier_creator_capacity),
    "tierExplorerCapacity" => |s| display(s.tier_explorer_capacity),
    "tierViewerCapacity" => |s| display(s.tier_viewer_capacity),
    "dataAlertsEnabled" => |s| flag(s.data_alerts_enabled),
    "commentingMentionsEnabled" => |s| flag(s.commenting_mentions_enabled),
    "catalogObfuscationEnabled" => |s| flag(s.catalog_obfuscation_enabled),
    "flowAutoSaveEnabled" => |s| flag(s.flow_auto_save_enabled),
    "webExtractionEnabled" => |s| flag(s.web_extraction_enabled),
    "metricsContentTypeEnabled" => |s| flag(s.metrics_content_type_enabled),
    "notifySiteAdminsOnThrottle" => |s| flag(s.notify_site_admins_on_throttle),
    "authoringEnabled" => |s| flag(s.authoring_enabled),
    "customSubscriptionEmailEnabled" => |s| flag(s.custom_subscription_email_enabled),
    "customSubscriptionEmail" => |s| lower(s.custom_subscription_email.as_ref()),
    "customSubscriptionFooterEnabled" => |s| flag(s.custom_subscription_footer_enabled),
    "customSubscriptionFooter" => |s| text(s.custom_subscription_footer.as_ref()),
    "askDataMode" => |s| text(s.ask_data_mode.as_ref()),
    "namedSharingEnabled" => |s| flag(s.named_sharing_enabled),
    "mobileBiometricsEnabled" => |s| flag(s.mobile_biometrics_enabled),
    "sheetImageEnabled" => |s| flag(s.sheet_image_enabled),
    "derivedPermissionsEnabled" => |s| flag(s.derived_permissions_enabled),
    "userVisibilityMode" => |s| text(s.user_visibility_mode.as_ref()),
    "useDefaultTimeZone" => |s| flag(s.use_default_time_zone),
    "timeZone" => |s| text(s.time_zone.as_ref()),
    "autoSuspendRefreshEnabled" => |s| flag(s.auto_suspend_refresh_enabled),
    "autoSuspendRefreshInactivityWindow" => |s| display(s.auto_suspend_refresh_inactivity_window),
});

/// Create a site. Name and content URL are required.
///
/// `server` selects the flow-settings scheme; `None` means a current server.
pub fn create(item: &SiteItem, server: Option<&ServerContext>) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "site", "name")?;
    let content_url = item
        .content_url
        .as_deref()
        .ok_or_else(|| RequestError::missing("site", "content_url"))?;

    ts_request("site.create", |s| {
        let mut el = Element::new("site");
        el.set("name", name).set("contentUrl", content_url);
        render(s, &mut el, item, server);
        s.root().push(el);
        Ok(())
    })
}

/// Update a site. Only populated settings are sent.
pub fn update(item: &SiteItem, server: Option<&ServerContext>) -> RequestResult<XmlRequest> {
    ts_request("site.update", |s| {
        let mut el = Element::new("site");
        el.set_opt("name", non_empty(item.name.as_ref()))
            .set_opt("contentUrl", non_empty(item.content_url.as_ref()))
            .set_opt("state", item.state.map(|state| state.as_str()));
        render(s, &mut el, item, server);
        s.root().push(el);
        Ok(())
    })
}

fn render(
    session: &mut Session,
    el: &mut Element,
    item: &SiteItem,
    server: Option<&ServerContext>,
) {
    apply(el, item, LEADING);
    let split = server.is_none_or(ServerContext::use_new_flow_settings);
    if let Some(notice) = flow_flags(el, item, split) {
        session.notice(notice);
    }
    apply(el, item, TRAILING);
}

/// Write the flow flags in the scheme the server expects.
///
/// Explicit values of the target scheme always win; the other scheme only
/// fills gaps. Populating the other scheme raises a notice.
fn flow_flags(el: &mut Element, item: &SiteItem, split: bool) -> Option<Notice> {
    let legacy = item.flows_enabled;
    let editing = item.editing_flows_enabled;
    let scheduling = item.scheduling_flows_enabled;

    if split {
        el.set_opt("editingFlowsEnabled", flag(editing.or(legacy)))
            .set_opt("schedulingFlowsEnabled", flag(scheduling.or(legacy)));
        return legacy.map(|_| {
            Notice::deprecated(
                "flows_enabled",
                "use editing_flows_enabled and scheduling_flows_enabled",
            )
        });
    }

    let any_split = editing.is_some() || scheduling.is_some();
    let combined = legacy.or_else(|| {
        any_split.then(|| editing.unwrap_or(false) || scheduling.unwrap_or(false))
    });
    el.set_opt("flowsEnabled", flag(combined));
    any_split.then(|| {
        Notice::deprecated(
            "editing_flows_enabled",
            "servers before API 3.10 only accept flows_enabled",
        )
    })
}
