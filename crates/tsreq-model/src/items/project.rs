use serde::{Deserialize, Serialize};

use crate::types::ContentPermissions;

/// A project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectItem {
    /// Display name. Required on create.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// How permissions are managed.
    pub content_permissions: Option<ContentPermissions>,
    /// Parent project. On update an empty id moves the project to the top level.
    pub parent_id: Option<String>,
}
