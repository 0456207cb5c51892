use serde::{Deserialize, Serialize};

use crate::types::{AuthSetting, SiteRole};

/// A site user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserItem {
    /// Sign-in name. Required when adding.
    pub name: Option<String>,
    /// Site role. Required when adding.
    pub site_role: Option<SiteRole>,
    /// Authentication method.
    pub auth_setting: Option<AuthSetting>,
    /// Display name.
    pub fullname: Option<String>,
    /// Email address.
    pub email: Option<String>,
}

impl UserItem {
    /// A user called `name` with `site_role`.
    pub fn new(name: impl Into<String>, site_role: SiteRole) -> Self {
        Self {
            name: Some(name.into()),
            site_role: Some(site_role),
            ..Self::default()
        }
    }
}
