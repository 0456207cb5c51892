//! Multipart framing of publish and upload requests.

#[cfg(test)]
mod tests {
    use tsreq_http::multipart::METADATA_PART;
    use tsreq_http::publish::{
        DATASOURCE_PART, FILE_PART, FLOW_PART, FileContent, WORKBOOK_PART, file_upload_chunk,
        publish_datasource, publish_flow, publish_workbook, publish_workbook_chunked,
    };
    use tsreq_model::{DatasourceItem, FlowItem, WorkbookItem};

    use crate::{fixture, parts};

    fn workbook() -> anyhow::Result<WorkbookItem> {
        fixture(
            r#"{
                "name": "Quarterly",
                "project_id": "p1",
                "show_tabs": true,
                "hidden_views": ["Scratch"]
            }"#,
        )
    }

    #[test]
    fn test_should_publish_as_multipart_mixed() -> anyhow::Result<()> {
        let req = publish_workbook(
            &workbook()?,
            FileContent::new("quarterly.twbx", &b"PK\x03\x04"[..]),
            None,
            None,
            None,
        )?;

        let media: mime::Mime = req.content_type.parse()?;
        assert_eq!(media.type_(), mime::MULTIPART);
        assert_eq!(media.subtype().as_str(), "mixed");
        let boundary = media.get_param(mime::BOUNDARY).map(|b| b.as_str().to_owned());
        assert_eq!(boundary.map(|b| b.len()), Some(32));

        let parts = parts(&req)?;
        let names: Vec<_> = parts.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec![METADATA_PART, WORKBOOK_PART]);
        assert_eq!(parts[0].filename.as_deref(), Some(""));
        assert_eq!(parts[1].filename.as_deref(), Some("quarterly.twbx"));

        let metadata = String::from_utf8_lossy(&parts[0].data);
        assert_eq!(
            metadata,
            concat!(
                r#"<tsRequest><workbook name="Quarterly" showTabs="true"><project id="p1"/>"#,
                r#"<views><view name="Scratch" hidden="true"/></views></workbook></tsRequest>"#
            )
        );
        Ok(())
    }

    #[test]
    fn test_should_keep_quoted_filename_in_one_header_line() -> anyhow::Result<()> {
        let item: FlowItem = fixture(r#"{"name": "Prep", "project_id": "p1"}"#)?;
        let filename = "Q1 \"final\".tflx\r\nX-Injected: 1";
        let req = publish_flow(&item, FileContent::new(filename, &b"flow"[..]), None)?;

        let body = String::from_utf8_lossy(&req.body);
        assert!(body.contains(r#"filename="Q1 %22final%22.tflx%0D%0AX-Injected: 1""#));
        assert!(!body.contains("\r\nX-Injected"));

        let parts = parts(&req)?;
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].name, FLOW_PART);
        assert_eq!(parts[1].filename.as_deref(), Some(filename));
        assert_eq!(parts[1].data.as_ref(), b"flow");
        Ok(())
    }

    #[test]
    fn test_should_produce_identical_metadata_with_fresh_boundaries() -> anyhow::Result<()> {
        let item: DatasourceItem = fixture(r#"{"name": "Sales", "project_id": "p1"}"#)?;
        let first = publish_datasource(&item, FileContent::new("s.tds", &b"a"[..]), None, None)?;
        let second = publish_datasource(&item, FileContent::new("s.tds", &b"a"[..]), None, None)?;

        assert_ne!(first.content_type, second.content_type);
        let (first, second) = (parts(&first)?, parts(&second)?);
        assert_eq!(first[0].data, second[0].data);
        assert_eq!(first[1].name, DATASOURCE_PART);
        Ok(())
    }

    #[test]
    fn test_should_send_only_metadata_when_chunked() -> anyhow::Result<()> {
        let req = publish_workbook_chunked(&workbook()?, None, None, None)?;
        let parts = parts(&req)?;
        assert_eq!(parts.len(), 1);
        assert_eq!(parts[0].name, METADATA_PART);
        assert_eq!(parts[0].content_type.as_deref(), Some("text/xml"));
        Ok(())
    }

    #[test]
    fn test_should_frame_upload_chunks() -> anyhow::Result<()> {
        let chunk = vec![0xAB_u8; 4096];
        let req = file_upload_chunk(chunk.clone());
        let parts = parts(&req)?;
        assert_eq!(parts[0].name, METADATA_PART);
        assert!(parts[0].data.is_empty());
        assert_eq!(parts[1].name, FILE_PART);
        assert_eq!(parts[1].content_type.as_deref(), Some("application/octet-stream"));
        assert_eq!(parts[1].data.as_ref(), chunk.as_slice());
        Ok(())
    }

    #[test]
    fn test_should_render_transport_headers() -> anyhow::Result<()> {
        let req = file_upload_chunk(bytes::Bytes::from_static(b"xyz"));
        let headers = req.headers()?;
        assert_eq!(
            headers.get("content-length").map(|v| v.to_str()).transpose()?,
            Some(req.body.len().to_string().as_str())
        );
        Ok(())
    }
}
