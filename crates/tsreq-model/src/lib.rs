//! Entity views rendered by the tsreq request builders.
//!
//! Each item is a read-only projection of a server-side object. Builders only
//! look at which fields are populated and how to format them; nothing in this
//! crate talks to a server.
#![allow(clippy::struct_excessive_bools)]

pub mod items;
pub mod types;

pub use items::{
    ColumnItem, ConnectionCredentials, ConnectionItem, Credentials, DataAccelerationConfig,
    DataAlertItem, DatabaseItem, DatasourceItem, DqwItem, FlowItem, GroupItem, HourlyPeriod,
    Interval, MetricItem, MonthDay, Occurrence, PermissionsRule, ProjectItem, Grantee,
    ScheduleItem, SignIn, SiteItem, SubscriptionItem, SubscriptionTarget, TableItem, UserItem,
    WebhookItem, WorkbookItem,
};
