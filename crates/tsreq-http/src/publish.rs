//! Publish, chunked publish and file-upload bodies.
//!
//! A publish body is the metadata document followed by the file itself. The
//! chunked variants carry only the metadata document; the file travels in
//! separate [`file_upload_chunk`] requests.

use bytes::Bytes;
use tsreq_core::RequestResult;
use tsreq_model::{ConnectionCredentials, ConnectionItem, DatasourceItem, FlowItem, WorkbookItem};
use tsreq_xml::XmlRequest;
use tsreq_xml::request::{datasource, flow, workbook};

use crate::multipart::Part;
use crate::payload::EncodedRequest;

/// Part carrying a data source file.
pub const DATASOURCE_PART: &str = "tableau_datasource";
/// Part carrying a flow file.
pub const FLOW_PART: &str = "tableau_flow";
/// Part carrying a workbook file.
pub const WORKBOOK_PART: &str = "tableau_workbook";
/// Part carrying one upload chunk.
pub const FILE_PART: &str = "tableau_file";
/// File name of every upload chunk.
pub const FILE_PART_FILENAME: &str = "file";

/// A file to publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContent {
    /// Name the server records for the file.
    pub filename: String,
    /// File bytes.
    pub data: Bytes,
}

impl FileContent {
    /// A file called `filename`.
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }
}

/// Publish a data source in one request.
pub fn publish_datasource(
    item: &DatasourceItem,
    file: FileContent,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<EncodedRequest> {
    let metadata = datasource::publish_metadata(item, credentials, connections)?;
    Ok(assemble(metadata, Some((DATASOURCE_PART, file))))
}

/// Start a chunked data source publish.
pub fn publish_datasource_chunked(
    item: &DatasourceItem,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<EncodedRequest> {
    let metadata = datasource::publish_metadata(item, credentials, connections)?;
    Ok(assemble(metadata, None))
}

/// Publish a flow in one request.
pub fn publish_flow(
    item: &FlowItem,
    file: FileContent,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<EncodedRequest> {
    let metadata = flow::publish_metadata(item, connections)?;
    Ok(assemble(metadata, Some((FLOW_PART, file))))
}

/// Start a chunked flow publish.
pub fn publish_flow_chunked(
    item: &FlowItem,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<EncodedRequest> {
    let metadata = flow::publish_metadata(item, connections)?;
    Ok(assemble(metadata, None))
}

/// Publish a workbook in one request.
///
/// `hidden_views` is deprecated; see [`workbook::publish_metadata`].
pub fn publish_workbook(
    item: &WorkbookItem,
    file: FileContent,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
    hidden_views: Option<&[String]>,
) -> RequestResult<EncodedRequest> {
    let metadata = workbook::publish_metadata(item, credentials, connections, hidden_views)?;
    Ok(assemble(metadata, Some((WORKBOOK_PART, file))))
}

/// Start a chunked workbook publish.
pub fn publish_workbook_chunked(
    item: &WorkbookItem,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
    hidden_views: Option<&[String]>,
) -> RequestResult<EncodedRequest> {
    let metadata = workbook::publish_metadata(item, credentials, connections, hidden_views)?;
    Ok(assemble(metadata, None))
}

/// One chunk of a file upload: an empty metadata part and the chunk bytes.
pub fn file_upload_chunk(chunk: impl Into<Bytes>) -> EncodedRequest {
    let parts = [
        Part::metadata(Bytes::new()),
        Part::binary(FILE_PART, FILE_PART_FILENAME, chunk.into()),
    ];
    EncodedRequest::multipart(&parts, Vec::new())
}

fn assemble(metadata: XmlRequest, file: Option<(&str, FileContent)>) -> EncodedRequest {
    let mut parts = Vec::with_capacity(2);
    parts.push(Part::metadata(metadata.body));
    if let Some((name, file)) = file {
        parts.push(Part::binary(name, file.filename, file.data));
    }
    EncodedRequest::multipart(&parts, metadata.notices)
}
