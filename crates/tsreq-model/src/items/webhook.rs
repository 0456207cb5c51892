use serde::{Deserialize, Serialize};

/// A webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookItem {
    /// Display name.
    pub name: Option<String>,
    /// Source event element, e.g. `webhook-source-event-datasource-refresh-started`.
    pub event: Option<String>,
    /// Destination URL that receives a POST.
    pub url: Option<String>,
}
