//! Groups, local and imported from a directory.

use tsreq_core::{Notice, RequestError, RequestResult};
use tsreq_model::GroupItem;
use tsreq_model::types::SiteRole;

use super::shared::required;
use crate::element::Element;
use crate::session::{XmlRequest, ts_request};

/// Import source used for directory groups.
const DIRECTORY_SOURCE: &str = "ActiveDirectory";

/// Add a user to a group.
pub fn add_user(user_id: &str) -> RequestResult<XmlRequest> {
    ts_request("group.add_user", |s| {
        s.add("user").set("id", user_id);
        Ok(())
    })
}

/// Create a local group. The name is required.
pub fn create_local(item: &GroupItem) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "group", "name")?;
    ts_request("group.create_local", |s| {
        s.add("group")
            .set("name", name)
            .set_opt("minimumSiteRole", item.minimum_site_role.map(|r| r.as_str()));
        Ok(())
    })
}

/// Import a group from a directory. Name and domain are required.
pub fn create_ad(item: &GroupItem) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "group", "name")?;
    let domain = required(item.domain_name.as_ref(), "group", "domain_name")?;
    ts_request("group.create_ad", |s| {
        let el = s.add("group");
        el.set("name", name);
        directory_import(el, domain)
            .set_opt("grantLicenseMode", item.license_mode.map(|m| m.as_str()))
            .set_opt("siteRole", item.minimum_site_role.map(|r| r.as_str()));
        Ok(())
    })
}

/// Update a group.
///
/// `default_site_role` is deprecated: it raises a notice and only applies when
/// the item carries no minimum site role of its own. Directory groups must end
/// up with a site role; local groups never get an `<import>` element.
pub fn update(item: &GroupItem, default_site_role: Option<SiteRole>) -> RequestResult<XmlRequest> {
    let name = required(item.name.as_ref(), "group", "name")?;
    let site_role = item.minimum_site_role.or(default_site_role);
    let directory = item.domain_name.as_deref().filter(|_| item.is_directory_group());
    if directory.is_some() && site_role.is_none() {
        return Err(RequestError::missing("group", "minimum_site_role"));
    }

    ts_request("group.update", |s| {
        if default_site_role.is_some() {
            s.notice(Notice::deprecated(
                "default_site_role",
                "set minimum_site_role on the group instead",
            ));
        }

        let el = s.add("group");
        el.set("name", name);
        match directory {
            Some(domain) => {
                directory_import(el, domain)
                    .set_opt("siteRole", site_role.map(|r| r.as_str()))
                    .set_opt("grantLicenseMode", item.license_mode.map(|m| m.as_str()));
            }
            None => {
                el.set_opt("minimumSiteRole", site_role.map(|r| r.as_str()));
            }
        }
        Ok(())
    })
}

fn directory_import<'a>(group: &'a mut Element, domain: &str) -> &'a mut Element {
    group
        .child("import")
        .set("source", DIRECTORY_SOURCE)
        .set("domainName", domain)
}
