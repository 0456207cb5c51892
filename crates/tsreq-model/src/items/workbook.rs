use serde::{Deserialize, Serialize};

/// Data acceleration settings of a workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataAccelerationConfig {
    /// Whether acceleration is enabled. The config is only sent when set.
    pub acceleration_enabled: Option<bool>,
    /// Whether to accelerate immediately.
    pub accelerate_now: Option<bool>,
}

/// A workbook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbookItem {
    /// Display name. Required when publishing.
    pub name: Option<String>,
    /// Whether views are shown as tabs.
    pub show_tabs: Option<bool>,
    /// Containing project. Required when publishing.
    pub project_id: Option<String>,
    /// Owning user.
    pub owner_id: Option<String>,
    /// Names of views hidden after publishing.
    pub hidden_views: Option<Vec<String>>,
    /// Data acceleration settings.
    pub data_acceleration: DataAccelerationConfig,
}
