//! Users.

use tsreq_core::{RequestError, RequestResult};
use tsreq_model::UserItem;
use tsreq_model::types::SiteRole;

use super::shared::required;
use crate::fields::{Field, apply, display, fields, non_empty};
use crate::session::{XmlRequest, ts_request};

const UPDATE: &[Field<UserItem>] = fields!(UserItem {
    "fullName" => |u| non_empty(u.fullname.as_ref()),
    "email" => |u| non_empty(u.email.as_ref()),
    "siteRole" => |u| display(u.site_role.filter(|r| *r != SiteRole::ServerAdministrator)),
    "authSetting" => |u| display(u.auth_setting),
});

/// Add a user to the site. Name and site role are required.
pub fn add(item: &UserItem) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "user", "name")?;
    let site_role = item
        .site_role
        .ok_or_else(|| RequestError::missing("user", "site_role"))?;

    ts_request("user.add", |s| {
        s.add("user")
            .set("name", name)
            .set("siteRole", site_role.as_str())
            .set_opt("authSetting", item.auth_setting.map(|a| a.as_str()));
        Ok(())
    })
}

/// Update a user, optionally resetting the password.
///
/// A server administrator's role cannot be changed through this request, so
/// `siteRole` is left out for them.
pub fn update(item: &UserItem, password: Option<&str>) -> RequestResult<XmlRequest> {
    ts_request("user.update", |s| {
        let el = s.add("user");
        apply(el, item, UPDATE);
        el.set_opt("password", password.filter(|p| !p.is_empty()));
        Ok(())
    })
}
