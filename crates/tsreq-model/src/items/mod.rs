//! Entity views, one module per entity family.

mod alert;
mod auth;
mod catalog;
mod connection;
mod datasource;
mod flow;
mod group;
mod metric;
mod permission;
mod project;
mod schedule;
mod site;
mod subscription;
mod user;
mod webhook;
mod workbook;

pub use alert::DataAlertItem;
pub use auth::{Credentials, SignIn};
pub use catalog::{ColumnItem, DatabaseItem, DqwItem, TableItem};
pub use connection::{ConnectionCredentials, ConnectionItem};
pub use datasource::DatasourceItem;
pub use flow::FlowItem;
pub use group::GroupItem;
pub use metric::MetricItem;
pub use permission::{Grantee, PermissionsRule};
pub use project::ProjectItem;
pub use schedule::{HourlyPeriod, Interval, MonthDay, Occurrence, ScheduleItem};
pub use site::SiteItem;
pub use subscription::{SubscriptionItem, SubscriptionTarget};
pub use user::UserItem;
pub use webhook::WebhookItem;
pub use workbook::{DataAccelerationConfig, WorkbookItem};
