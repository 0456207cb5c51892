//! Unset fields produce no attributes; booleans render as lowercase words.

#[cfg(test)]
mod tests {
    use tsreq_http::EncodedRequest;
    use tsreq_model::{
        ColumnItem, DataAlertItem, DatabaseItem, DatasourceItem, FlowItem, MetricItem, ProjectItem,
        ScheduleItem, SiteItem, SubscriptionItem, TableItem, UserItem, WorkbookItem,
    };
    use tsreq_xml::request::{
        alert, catalog, datasource, flow, metric, project, schedule, site, subscription, user,
        workbook,
    };

    use crate::{fixture, init_tracing, text};

    fn encoded(req: tsreq_core::RequestResult<tsreq_xml::XmlRequest>) -> String {
        text(&EncodedRequest::from(req.expect("valid request")))
    }

    #[test]
    fn test_should_render_default_updates_without_attributes() {
        init_tracing();
        let documents = [
            encoded(catalog::update_column(&ColumnItem::default())),
            encoded(flow::update(&FlowItem::default())),
            encoded(metric::update(&MetricItem::default())),
            encoded(project::update(&ProjectItem::default())),
            encoded(schedule::update(&ScheduleItem::default())),
            encoded(site::update(&SiteItem::default(), None)),
            encoded(user::update(&UserItem::default(), None)),
            encoded(workbook::update(&WorkbookItem::default())),
        ];
        for doc in &documents {
            assert!(!doc.contains('='), "unexpected attribute in {doc}");
        }
    }

    #[test]
    fn test_should_always_render_certified_flags() {
        let docs = [
            encoded(catalog::update_database(&DatabaseItem::default())),
            encoded(catalog::update_table(&TableItem::default())),
            encoded(datasource::update(&DatasourceItem::default())),
        ];
        for doc in &docs {
            assert!(doc.contains(r#"isCertified="false""#), "{doc}");
            assert_eq!(doc.matches('=').count(), 1, "{doc}");
        }
    }

    #[test]
    fn test_should_render_booleans_as_lowercase_words() -> anyhow::Result<()> {
        let item: SiteItem = fixture(
            r#"{
                "name": "Ops",
                "content_url": "ops",
                "disable_subscriptions": true,
                "guest_access_enabled": false,
                "data_alerts_enabled": true,
                "commenting_enabled": false
            }"#,
        )?;
        let doc = encoded(site::update(&item, None));
        for value in doc.split('"').skip(1).step_by(2) {
            assert!(
                !matches!(value, "True" | "False" | "1" | "0"),
                "non-canonical boolean {value} in {doc}"
            );
        }
        assert!(doc.contains(r#"disableSubscriptions="true""#));
        assert!(doc.contains(r#"guestAccessEnabled="false""#));
        assert!(doc.contains(r#"dataAlertsEnabled="true""#));
        Ok(())
    }

    #[test]
    fn test_should_keep_empty_collections_out_of_update() {
        let doc = encoded(subscription::update(&SubscriptionItem::default()));
        assert_eq!(
            doc,
            "<tsRequest><subscription><schedule/><content/></subscription></tsRequest>"
        );

        let doc = encoded(alert::update(&DataAlertItem::default()));
        assert_eq!(doc, "<tsRequest><dataAlert><owner/></dataAlert></tsRequest>");
    }

    #[test]
    fn test_should_keep_line_breaks_in_attribute_values() -> anyhow::Result<()> {
        let item: ProjectItem =
            fixture(r#"{"name": "Finance", "description": "Ledgers\nand\tforecasts"}"#)?;
        let doc = encoded(project::create(&item));
        assert!(doc.contains(r#"description="Ledgers&#10;and&#9;forecasts""#));
        assert!(!doc.contains('\n'));
        Ok(())
    }
}
