use serde::{Deserialize, Serialize};

use crate::types::{PageOrientation, PageSizeOption, SubscriptionContent};

/// The view or workbook a subscription delivers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionTarget {
    /// Content id.
    pub id: String,
    /// Content kind.
    pub content_type: SubscriptionContent,
}

/// An email subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionItem {
    /// Email subject. Required on create.
    pub subject: Option<String>,
    /// Whether an image is attached.
    pub attach_image: Option<bool>,
    /// Whether a PDF is attached.
    pub attach_pdf: Option<bool>,
    /// Email body.
    pub message: Option<String>,
    /// PDF orientation.
    pub page_orientation: Option<PageOrientation>,
    /// PDF page size.
    pub page_size_option: Option<PageSizeOption>,
    /// Delivered content. Required on create.
    pub target: Option<SubscriptionTarget>,
    /// Whether to send when the view has no data.
    pub send_if_view_empty: Option<bool>,
    /// Delivery schedule. Required on create.
    pub schedule_id: Option<String>,
    /// Recipient. Required on create.
    pub user_id: Option<String>,
    /// Whether delivery is suspended.
    pub suspended: Option<bool>,
}
