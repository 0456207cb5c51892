//! Site flow settings across API versions.

#[cfg(test)]
mod tests {
    use tsreq_core::{ApiVersion, ServerContext};
    use tsreq_http::RequestFactory;
    use tsreq_model::SiteItem;

    use crate::{fixture, text};

    fn factory(major: u16, minor: u16) -> RequestFactory {
        RequestFactory::new(
            ServerContext::builder()
                .api_version(ApiVersion::new(major, minor))
                .build(),
        )
    }

    fn site(flags: &str) -> anyhow::Result<SiteItem> {
        fixture(&format!(r#"{{"name": "Ops", "content_url": "ops"{flags}}}"#))
    }

    fn has_legacy(doc: &str) -> bool {
        doc.contains(" flowsEnabled=")
    }

    fn has_split(doc: &str) -> bool {
        doc.contains("editingFlowsEnabled=") || doc.contains("schedulingFlowsEnabled=")
    }

    #[test]
    fn test_should_never_emit_both_schemes() -> anyhow::Result<()> {
        let variants = [
            r#", "flows_enabled": true"#,
            r#", "editing_flows_enabled": false"#,
            r#", "flows_enabled": false, "scheduling_flows_enabled": true"#,
            r#", "flows_enabled": true, "editing_flows_enabled": true, "scheduling_flows_enabled": false"#,
        ];
        for flags in variants {
            let item = site(flags)?;
            for (major, minor) in [(3, 4), (3, 9), (3, 10), (3, 21)] {
                let factory = factory(major, minor);
                for req in [factory.create_site(&item)?, factory.update_site(&item)?] {
                    let doc = text(&req);
                    assert!(!(has_legacy(&doc) && has_split(&doc)), "{doc}");
                }
            }
        }
        Ok(())
    }

    #[test]
    fn test_should_split_legacy_flag_into_both_attributes() -> anyhow::Result<()> {
        let req = factory(3, 10).create_site(&site(r#", "flows_enabled": false"#)?)?;
        let doc = text(&req);
        assert!(doc.contains(r#"editingFlowsEnabled="false""#));
        assert!(doc.contains(r#"schedulingFlowsEnabled="false""#));
        assert!(!has_legacy(&doc));
        assert_eq!(req.notices.len(), 1);
        Ok(())
    }

    #[test]
    fn test_should_combine_single_split_flag_as_logical_or() -> anyhow::Result<()> {
        let req = factory(3, 9).update_site(&site(r#", "scheduling_flows_enabled": true"#)?)?;
        assert!(text(&req).contains(r#" flowsEnabled="true""#));

        let req = factory(3, 9).update_site(&site(r#", "editing_flows_enabled": false"#)?)?;
        assert!(text(&req).contains(r#" flowsEnabled="false""#));
        assert_eq!(req.notices.len(), 1);
        Ok(())
    }

    #[test]
    fn test_should_read_api_version_from_json_context() -> anyhow::Result<()> {
        let server: ServerContext = fixture(r#"{"apiVersion": "3.8"}"#)?;
        assert!(!server.use_new_flow_settings());
        let req = RequestFactory::new(server).create_site(&site(r#", "flows_enabled": true"#)?)?;
        assert!(has_legacy(&text(&req)));
        assert!(req.notices.is_empty());
        Ok(())
    }
}
