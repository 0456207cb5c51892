//! Data sources.

use tsreq_core::RequestResult;
use tsreq_model::{ConnectionCredentials, ConnectionItem, DatasourceItem};

use super::shared::{
    add_credentials_or_connections, add_ref, add_ref_opt, ensure_exclusive, required,
};
use crate::element::Element;
use crate::fields::{Field, always, apply, fields, flag, non_empty};
use crate::session::{XmlRequest, ts_request};

const UPDATE: &[Field<DatasourceItem>] = fields!(DatasourceItem {
    "name" => |d| non_empty(d.name.as_ref()),
    "isCertified" => |d| always(d.certified),
    "certificationNote" => |d| non_empty(d.certification_note.as_ref()),
    "encryptExtracts" => |d| flag(d.encrypt_extracts),
});

const PUBLISH: &[Field<DatasourceItem>] = fields!(DatasourceItem {
    "name" => |d| d.name.clone(),
    "description" => |d| non_empty(d.description.as_ref()),
    "useRemoteQueryAgent" => |d| flag(d.use_remote_query_agent),
});

/// Update a data source's settings.
pub fn update(item: &DatasourceItem) -> RequestResult<XmlRequest> {
    ts_request("datasource.update", |s| {
        let el = s.add("datasource");
        apply(el, item, UPDATE);
        add_ask_data(el, item);
        add_ref_opt(el, "project", item.project_id.as_ref());
        add_ref_opt(el, "owner", item.owner_id.as_ref());
        Ok(())
    })
}

/// The metadata document sent with a data source publish.
///
/// Name and project are required. Credentials and connections are mutually
/// exclusive.
pub fn publish_metadata(
    item: &DatasourceItem,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<XmlRequest> {
    ensure_exclusive(credentials, connections)?;
    required(item.name.as_ref(), "datasource", "name")?;
    let project_id = required(item.project_id.as_ref(), "datasource", "project_id")?;

    ts_request("datasource.publish", |s| {
        let el = s.add("datasource");
        apply(el, item, PUBLISH);
        add_ask_data(el, item);
        add_ref(el, "project", project_id);
        add_credentials_or_connections(el, credentials, connections)
    })
}

fn add_ask_data(el: &mut Element, item: &DatasourceItem) {
    if let Some(enablement) = item.ask_data_enablement {
        el.child("askData").set("enablement", enablement.as_str());
    }
}

#[cfg(test)]
mod tests {
    use tsreq_core::RequestError;
    use tsreq_model::types::AskDataEnablement;

    use super::*;

    fn sales() -> DatasourceItem {
        DatasourceItem {
            name: Some("Sales".to_owned()),
            project_id: Some("p1".to_owned()),
            ..DatasourceItem::default()
        }
    }

    #[test]
    fn test_should_render_update_children_in_order() {
        let item = DatasourceItem {
            owner_id: Some("u1".to_owned()),
            ask_data_enablement: Some(AskDataEnablement::Disabled),
            encrypt_extracts: Some(false),
            ..sales()
        };
        let req = update(&item).expect("valid request");
        assert_eq!(
            req.to_text(),
            concat!(
                r#"<tsRequest><datasource name="Sales" isCertified="false" encryptExtracts="false">"#,
                r#"<askData enablement="Disabled"/><project id="p1"/><owner id="u1"/>"#,
                r#"</datasource></tsRequest>"#
            )
        );
    }

    #[test]
    fn test_should_render_publish_with_credentials() {
        let creds = ConnectionCredentials::new("svc", "pw", true);
        let req = publish_metadata(&sales(), Some(&creds), None).expect("valid request");
        assert_eq!(
            req.to_text(),
            concat!(
                r#"<tsRequest><datasource name="Sales"><project id="p1"/>"#,
                r#"<connectionCredentials name="svc" password="pw" embed="true"/>"#,
                r#"</datasource></tsRequest>"#
            )
        );
    }

    #[test]
    fn test_should_render_publish_with_connections() {
        let item = DatasourceItem {
            description: Some("weekly".to_owned()),
            use_remote_query_agent: Some(true),
            ..sales()
        };
        let connections = vec![ConnectionItem::new("db.example.com")];
        let out = publish_metadata(&item, None, Some(&connections))
            .expect("valid request")
            .to_text();
        assert!(out.contains(r#"description="weekly" useRemoteQueryAgent="true""#));
        assert!(out.contains(
            r#"<connections><connection serverAddress="db.example.com"/></connections>"#
        ));
    }

    #[test]
    fn test_should_reject_publish_with_credentials_and_connections() {
        let creds = ConnectionCredentials::new("svc", "pw", true);
        let connections = vec![ConnectionItem::new("db")];
        let err = publish_metadata(&sales(), Some(&creds), Some(&connections))
            .expect_err("should fail");
        assert_eq!(err, RequestError::conflict("connections", "connection_credentials"));
    }

    #[test]
    fn test_should_reject_publish_without_project() {
        let item = DatasourceItem {
            project_id: None,
            ..sales()
        };
        let err = publish_metadata(&item, None, None).expect_err("should fail");
        assert_eq!(err, RequestError::missing("datasource", "project_id"));
    }
}
