//! Entities loaded from JSON, built end to end.

#[cfg(test)]
mod tests {
    use tsreq_http::EncodedRequest;
    use tsreq_model::{PermissionsRule, ScheduleItem, SignIn, SubscriptionItem};
    use tsreq_xml::request::{auth, permission, schedule, subscription, tag};

    use crate::{fixture, text};

    #[test]
    fn test_should_build_weekly_schedule_from_fixture() -> anyhow::Result<()> {
        let item: ScheduleItem = fixture(
            r#"{
                "name": "Weekday mornings",
                "priority": 20,
                "schedule_type": "Extract",
                "execution_order": "Serial",
                "interval": {
                    "frequency": "weekly",
                    "start_time": "07:30:00",
                    "weekdays": ["Monday", "Thursday"]
                }
            }"#,
        )?;
        let req = EncodedRequest::from(schedule::create(&item)?);
        assert_eq!(req.content_type, "text/xml");
        assert_eq!(
            text(&req),
            concat!(
                r#"<tsRequest><schedule name="Weekday mornings" priority="20" type="Extract" "#,
                r#"executionOrder="Serial" frequency="Weekly"><frequencyDetails start="07:30:00">"#,
                r#"<intervals><interval weekDay="Monday"/><interval weekDay="Thursday"/></intervals>"#,
                "</frequencyDetails></schedule></tsRequest>"
            )
        );
        Ok(())
    }

    #[test]
    fn test_should_build_hourly_update_from_fixture() -> anyhow::Result<()> {
        let item: ScheduleItem = fixture(
            r#"{
                "priority": 0,
                "interval": {
                    "frequency": "hourly",
                    "start_time": "00:00:00",
                    "end_time": "12:00:00",
                    "every": {"hours": 4}
                }
            }"#,
        )?;
        let doc = schedule::update(&item)?.to_text();
        assert!(!doc.contains("priority"));
        assert!(
            doc.contains(r#"frequency="Hourly"><frequencyDetails start="00:00:00" end="12:00:00">"#)
        );
        assert!(doc.contains(r#"<interval hours="4"/>"#));
        Ok(())
    }

    #[test]
    fn test_should_build_permissions_from_fixture() -> anyhow::Result<()> {
        let rules: Vec<PermissionsRule> = fixture(
            r#"[{
                "grantee": {"kind": "group", "id": "g-1"},
                "capabilities": [["Read", "Allow"], ["Delete", "Deny"]]
            }]"#,
        )?;
        let doc = permission::add(&rules)?.to_text();
        assert!(doc.contains(r#"<granteeCapabilities><group id="g-1"/><capabilities>"#));
        assert!(doc.contains(r#"<capability name="Delete" mode="Deny"/>"#));
        Ok(())
    }

    #[test]
    fn test_should_build_token_sign_in_from_fixture() -> anyhow::Result<()> {
        let auth: SignIn = fixture(
            r#"{
                "credentials": {
                    "kind": "personal_access_token",
                    "token_name": "ci",
                    "token_secret": "abc"
                },
                "site_content_url": "sales"
            }"#,
        )?;
        assert_eq!(
            auth::sign_in(&auth)?.to_text(),
            concat!(
                r#"<tsRequest><credentials personalAccessTokenName="ci" personalAccessTokenSecret="abc">"#,
                r#"<site contentUrl="sales"/></credentials></tsRequest>"#
            )
        );
        Ok(())
    }

    #[test]
    fn test_should_build_subscription_from_fixture() -> anyhow::Result<()> {
        let item: SubscriptionItem = fixture(
            r#"{
                "subject": "Daily KPIs",
                "attach_image": true,
                "page_size_option": "A4",
                "target": {"id": "wb-9", "content_type": "Workbook"},
                "schedule_id": "s-1",
                "user_id": "u-1"
            }"#,
        )?;
        let doc = subscription::create(&item)?.to_text();
        assert!(doc.contains(r#"subject="Daily KPIs" attachImage="true" pageSizeOption="A4""#));
        assert!(
            doc.contains(r#"<content id="wb-9" type="Workbook"/><schedule id="s-1"/><user id="u-1"/>"#)
        );
        Ok(())
    }

    #[test]
    fn test_should_sort_and_dedupe_tags() -> anyhow::Result<()> {
        let labels: Vec<String> = fixture(r#"["b", "a", "b"]"#)?;
        let doc = tag::add(labels.iter().map(String::as_str))?.to_text();
        assert_eq!(
            doc,
            r#"<tsRequest><tags><tag label="a"/><tag label="b"/></tags></tsRequest>"#
        );
        Ok(())
    }
}
