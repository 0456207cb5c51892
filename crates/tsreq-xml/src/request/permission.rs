//! Permission rules.

use tsreq_core::RequestResult;
use tsreq_model::PermissionsRule;

use super::shared::{add_capabilities, add_ref};
use crate::session::{XmlRequest, ts_request};

/// Grant or deny capabilities, one `<granteeCapabilities>` block per rule.
pub fn add(rules: &[PermissionsRule]) -> RequestResult<XmlRequest> {
    ts_request("permission.add", |s| {
        let permissions = s.add("permissions");
        for rule in rules {
            let grantee = permissions.child("granteeCapabilities");
            add_ref(grantee, rule.grantee.kind.as_str(), &rule.grantee.id);
            add_capabilities(grantee, &rule.capabilities);
        }
        Ok(())
    })
}
