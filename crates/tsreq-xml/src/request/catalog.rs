//! Catalog metadata: columns, databases, tables and data-quality warnings.

use tsreq_core::{RequestError, RequestResult};
use tsreq_model::{ColumnItem, DatabaseItem, DqwItem, TableItem};

use super::shared::add_ref_opt;
use crate::fields::{Field, always, apply, display, fields, non_empty};
use crate::session::{XmlRequest, ts_request};

const COLUMN: &[Field<ColumnItem>] = fields!(ColumnItem {
    "description" => |c| non_empty(c.description.as_ref()),
});

const DATABASE: &[Field<DatabaseItem>] = fields!(DatabaseItem {
    "isCertified" => |d| always(d.certified),
    "certificationNote" => |d| non_empty(d.certification_note.as_ref()),
    "description" => |d| non_empty(d.description.as_ref()),
});

const TABLE: &[Field<TableItem>] = fields!(TableItem {
    "isCertified" => |t| always(t.certified),
    "certificationNote" => |t| non_empty(t.certification_note.as_ref()),
    "description" => |t| non_empty(t.description.as_ref()),
});

const WARNING: &[Field<DqwItem>] = fields!(DqwItem {
    "isActive" => |w| always(w.active),
    "isSevere" => |w| always(w.severe),
    "type" => |w| display(w.warning_type),
    "message" => |w| non_empty(w.message.as_ref()),
});

/// Update a column's description.
pub fn update_column(item: &ColumnItem) -> RequestResult<XmlRequest> {
    ts_request("column.update", |s| {
        apply(s.add("column"), item, COLUMN);
        Ok(())
    })
}

/// Update a database. `isCertified` is always sent.
pub fn update_database(item: &DatabaseItem) -> RequestResult<XmlRequest> {
    ts_request("database.update", |s| {
        let el = s.add("database");
        add_ref_opt(el, "contact", item.contact_id.as_ref());
        apply(el, item, DATABASE);
        Ok(())
    })
}

/// Update a table. `isCertified` is always sent.
pub fn update_table(item: &TableItem) -> RequestResult<XmlRequest> {
    ts_request("table.update", |s| {
        let el = s.add("table");
        add_ref_opt(el, "contact", item.contact_id.as_ref());
        apply(el, item, TABLE);
        Ok(())
    })
}

/// Attach a data-quality warning to an asset.
pub fn add_warning(item: &DqwItem) -> RequestResult<XmlRequest> {
    warning("dqw.add", item)
}

/// Update a data-quality warning.
pub fn update_warning(item: &DqwItem) -> RequestResult<XmlRequest> {
    warning("dqw.update", item)
}

fn warning(kind: &'static str, item: &DqwItem) -> RequestResult<XmlRequest> {
    if item.warning_type.is_none() {
        return Err(RequestError::missing("data quality warning", "warning_type"));
    }
    ts_request(kind, |s| {
        apply(s.add("dataQualityWarning"), item, WARNING);
        Ok(())
    })
}
