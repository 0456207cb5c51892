//! Favorites.

use tsreq_core::{RequestError, RequestResult};
use tsreq_model::types::FavoriteType;

use crate::session::{XmlRequest, ts_request};

/// Mark content as a favorite under `label`.
///
/// Both the content id and the label are required.
pub fn add(kind: FavoriteType, id: Option<&str>, label: Option<&str>) -> RequestResult<XmlRequest> {
    let id = id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RequestError::missing("favorite", "id"))?;
    let label = label
        .filter(|label| !label.is_empty())
        .ok_or_else(|| RequestError::missing("favorite", "label"))?;

    ts_request("favorite.add", |s| {
        let el = s.add("favorite");
        el.set("label", label);
        el.child(kind.as_str()).set("id", id);
        Ok(())
    })
}
