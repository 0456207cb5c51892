use serde::{Deserialize, Serialize};

use crate::types::{ActiveState, AdminMode};

/// A site and its settings.
///
/// Flow settings come in two generations: servers before API 3.10 know a
/// single `flows_enabled` flag, newer servers split it into
/// `editing_flows_enabled` and `scheduling_flows_enabled`. Either generation
/// may be populated; the builder translates to whatever the server expects.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteItem {
    /// Display name. Required on create.
    pub name: Option<String>,
    /// URL segment of the site. Required on create.
    pub content_url: Option<String>,
    /// Site administrator scope.
    pub admin_mode: Option<AdminMode>,
    /// Maximum number of users.
    pub user_quota: Option<u32>,
    /// Whether the site is running.
    pub state: Option<ActiveState>,
    /// Maximum storage in megabytes.
    pub storage_quota: Option<u64>,
    pub disable_subscriptions: Option<bool>,
    pub subscribe_others_enabled: Option<bool>,
    /// Number of revisions kept per item.
    pub revision_limit: Option<u32>,
    pub revision_history_enabled: Option<bool>,
    /// Data acceleration mode, e.g. `enable_selective`.
    pub data_acceleration_mode: Option<String>,
    pub cataloging_enabled: Option<bool>,
    /// Legacy combined flow flag.
    pub flows_enabled: Option<bool>,
    pub editing_flows_enabled: Option<bool>,
    pub scheduling_flows_enabled: Option<bool>,
    pub allow_subscription_attachments: Option<bool>,
    pub guest_access_enabled: Option<bool>,
    pub cache_warmup_enabled: Option<bool>,
    pub commenting_enabled: Option<bool>,
    /// `enforced`, `enabled` or `disabled`.
    pub extract_encryption_mode: Option<String>,
    pub request_access_enabled: Option<bool>,
    pub run_now_enabled: Option<bool>,
    pub tier_creator_capacity: Option<u32>,
    pub tier_explorer_capacity: Option<u32>,
    pub tier_viewer_capacity: Option<u32>,
    pub data_alerts_enabled: Option<bool>,
    pub commenting_mentions_enabled: Option<bool>,
    pub catalog_obfuscation_enabled: Option<bool>,
    pub flow_auto_save_enabled: Option<bool>,
    pub web_extraction_enabled: Option<bool>,
    pub metrics_content_type_enabled: Option<bool>,
    pub notify_site_admins_on_throttle: Option<bool>,
    pub authoring_enabled: Option<bool>,
    pub custom_subscription_email_enabled: Option<bool>,
    /// Sender address for subscription emails.
    pub custom_subscription_email: Option<String>,
    pub custom_subscription_footer_enabled: Option<bool>,
    pub custom_subscription_footer: Option<String>,
    /// `EnabledByDefault`, `DisabledByDefault` or `DisabledAlways`.
    pub ask_data_mode: Option<String>,
    pub named_sharing_enabled: Option<bool>,
    pub mobile_biometrics_enabled: Option<bool>,
    pub sheet_image_enabled: Option<bool>,
    pub derived_permissions_enabled: Option<bool>,
    /// `FULL` or `LIMITED`.
    pub user_visibility_mode: Option<String>,
    pub use_default_time_zone: Option<bool>,
    pub time_zone: Option<String>,
    pub auto_suspend_refresh_enabled: Option<bool>,
    /// Days of inactivity before extract refreshes are suspended.
    pub auto_suspend_refresh_inactivity_window: Option<u32>,
}
