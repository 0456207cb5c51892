//! Required fields and mutually exclusive inputs.

#[cfg(test)]
mod tests {
    use tsreq_core::RequestError;
    use tsreq_http::publish::{FileContent, publish_datasource, publish_workbook};
    use tsreq_model::types::SiteRole;
    use tsreq_model::{
        ConnectionCredentials, ConnectionItem, DatasourceItem, GroupItem, UserItem, WorkbookItem,
    };
    use tsreq_xml::request::{group, user};

    use crate::fixture;

    fn file() -> FileContent {
        FileContent::new("content.bin", &b"\x00"[..])
    }

    #[test]
    fn test_should_reject_user_without_name() {
        let item = UserItem {
            site_role: Some(SiteRole::Viewer),
            ..UserItem::default()
        };
        let err = user::add(&item).expect_err("should fail");
        assert!(matches!(err, RequestError::MissingField { field: "name", .. }));
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_should_accept_user_with_name_and_role() {
        let req = user::add(&UserItem::new("alice", SiteRole::Explorer)).expect("valid request");
        assert_eq!(
            req.to_text(),
            r#"<tsRequest><user name="alice" siteRole="Explorer"/></tsRequest>"#
        );
    }

    #[test]
    fn test_should_reject_group_without_name() {
        for result in [
            group::create_local(&GroupItem::default()),
            group::create_ad(&GroupItem::default()),
            group::update(&GroupItem::default(), None),
        ] {
            assert_eq!(result.expect_err("should fail"), RequestError::missing("group", "name"));
        }
    }

    #[test]
    fn test_should_reject_connection_without_address() -> anyhow::Result<()> {
        let item: DatasourceItem = fixture(r#"{"name": "Sales", "project_id": "p1"}"#)?;
        let connections = vec![ConnectionItem::default()];
        let err =
            publish_datasource(&item, file(), None, Some(&connections)).expect_err("should fail");
        assert_eq!(err, RequestError::missing("connection", "server_address"));
        Ok(())
    }

    #[test]
    fn test_should_reject_embedded_credentials_without_password() -> anyhow::Result<()> {
        let item: DatasourceItem = fixture(r#"{"name": "Sales", "project_id": "p1"}"#)?;
        let connections: Vec<ConnectionItem> = fixture(
            r#"[{"server_address": "db.example.com", "connection_credentials": {"name": "svc"}}]"#,
        )?;
        let err =
            publish_datasource(&item, file(), None, Some(&connections)).expect_err("should fail");
        assert_eq!(err, RequestError::missing("connection credentials", "password"));
        Ok(())
    }

    #[test]
    fn test_should_reject_credentials_with_connections_for_both_publishers() {
        let creds = ConnectionCredentials::new("svc", "pw", true);
        let connections = vec![ConnectionItem::new("db.example.com")];
        let conflict = RequestError::conflict("connections", "connection_credentials");

        let ds = DatasourceItem {
            name: Some("Sales".to_owned()),
            project_id: Some("p1".to_owned()),
            ..DatasourceItem::default()
        };
        let err = publish_datasource(&ds, file(), Some(&creds), Some(&connections))
            .expect_err("should fail");
        assert_eq!(err, conflict);

        let wb = WorkbookItem {
            name: Some("Quarterly".to_owned()),
            project_id: Some("p1".to_owned()),
            ..WorkbookItem::default()
        };
        let err = publish_workbook(&wb, file(), Some(&creds), Some(&connections), None)
            .expect_err("should fail");
        assert_eq!(err, conflict);
    }

    #[test]
    fn test_should_report_conflict_before_missing_fields() {
        let creds = ConnectionCredentials::new("svc", "pw", true);
        let connections = vec![ConnectionItem::new("db")];
        let item = DatasourceItem::default();
        let err = publish_datasource(&item, file(), Some(&creds), Some(&connections))
            .expect_err("should fail");
        assert!(matches!(err, RequestError::Conflict { .. }));
    }
}
