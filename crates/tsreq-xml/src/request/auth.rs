//! Sign-in and site switching.

use tsreq_core::RequestResult;
use tsreq_model::SignIn;

use crate::session::{XmlRequest, ts_request};

/// Sign in with any credential kind.
///
/// The credential attributes depend on the kind; the target site is always
/// rendered, and an impersonated user is attached when set.
pub fn sign_in(auth: &SignIn) -> RequestResult<XmlRequest> {
    ts_request("auth.sign_in", |s| {
        let credentials = s.add("credentials");
        for (name, value) in auth.credentials.attributes() {
            credentials.set(name, value);
        }
        credentials
            .child("site")
            .set("contentUrl", auth.site_content_url.as_str());
        if let Some(user_id) = &auth.impersonate_user_id {
            credentials.child("user").set("id", user_id.as_str());
        }
        Ok(())
    })
}

/// Switch the signed-in session to another site.
pub fn switch_site(content_url: &str) -> RequestResult<XmlRequest> {
    ts_request("auth.switch_site", |s| {
        s.add("site").set("contentUrl", content_url);
        Ok(())
    })
}
