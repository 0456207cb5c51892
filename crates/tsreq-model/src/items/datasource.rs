use serde::{Deserialize, Serialize};

use crate::types::AskDataEnablement;

/// A published data source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasourceItem {
    /// Display name. Required when publishing.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Containing project. Required when publishing.
    pub project_id: Option<String>,
    /// Owning user.
    pub owner_id: Option<String>,
    /// Ask Data availability.
    pub ask_data_enablement: Option<AskDataEnablement>,
    /// Certification flag. Always sent on update; unset means not certified.
    pub certified: bool,
    /// Reason for the certification.
    pub certification_note: Option<String>,
    /// Whether extracts are encrypted at rest.
    pub encrypt_extracts: Option<bool>,
    /// Whether queries go through a remote query agent.
    pub use_remote_query_agent: Option<bool>,
}
