use serde::{Deserialize, Serialize};

use crate::types::AlertFrequency;

/// A data-driven alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataAlertItem {
    /// Email subject line.
    pub subject: Option<String>,
    /// How often the alert condition is checked.
    pub frequency: Option<AlertFrequency>,
    /// Whether other users may subscribe to the alert.
    pub public: Option<bool>,
    /// Owning user.
    pub owner_id: Option<String>,
}
