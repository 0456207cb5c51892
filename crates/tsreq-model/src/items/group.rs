use serde::{Deserialize, Serialize};

use crate::types::{LicenseMode, SiteRole};

/// A group of users, either local or imported from a directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupItem {
    /// Group name. Required.
    pub name: Option<String>,
    /// Directory domain. `local` (or unset) for local groups.
    pub domain_name: Option<String>,
    /// Site role granted to members.
    pub minimum_site_role: Option<SiteRole>,
    /// When licenses are granted to imported members.
    pub license_mode: Option<LicenseMode>,
}

impl GroupItem {
    /// Domain name of groups that are not imported.
    pub const LOCAL_DOMAIN: &'static str = "local";

    /// A local group called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Whether this group is imported from a directory.
    #[must_use]
    pub fn is_directory_group(&self) -> bool {
        self.domain_name
            .as_deref()
            .is_some_and(|d| d != Self::LOCAL_DOMAIN)
    }
}
