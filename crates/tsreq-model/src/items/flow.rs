use serde::{Deserialize, Serialize};

/// A prep flow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowItem {
    /// Display name.
    pub name: Option<String>,
    /// Containing project. Required when publishing.
    pub project_id: Option<String>,
    /// Owning user.
    pub owner_id: Option<String>,
}
