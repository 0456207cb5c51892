use serde::{Deserialize, Serialize};

/// A metric.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricItem {
    /// Metric id.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Whether refreshes are suspended.
    pub suspended: Option<bool>,
    /// Containing project.
    pub project_id: Option<String>,
    /// Owning user.
    pub owner_id: Option<String>,
}
