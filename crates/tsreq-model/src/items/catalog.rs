//! Catalog assets: columns, databases, tables, and data-quality warnings.

use serde::{Deserialize, Serialize};

use crate::types::WarningType;

/// A column of a published table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnItem {
    /// Free-form description.
    pub description: Option<String>,
}

/// A database known to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseItem {
    /// User to contact about the database.
    pub contact_id: Option<String>,
    /// Certification flag. Always sent; unset means not certified.
    pub certified: bool,
    /// Reason for the certification.
    pub certification_note: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// A table known to the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableItem {
    /// User to contact about the table.
    pub contact_id: Option<String>,
    /// Certification flag. Always sent; unset means not certified.
    pub certified: bool,
    /// Reason for the certification.
    pub certification_note: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
}

/// A data-quality warning attached to an asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DqwItem {
    /// Whether the warning is shown.
    pub active: bool,
    /// Whether the warning is flagged as severe.
    pub severe: bool,
    /// Kind of warning.
    pub warning_type: Option<WarningType>,
    /// Message shown to users.
    pub message: Option<String>,
}
