//! Sub-trees embedded by more than one entity.
//!
//! Each concept has exactly one rendering rule here, whichever parent embeds it.

use tsreq_core::{RequestError, RequestResult};
use tsreq_model::types::{Capability, CapabilityMode};
use tsreq_model::{ConnectionCredentials, ConnectionItem, Interval};

use crate::element::Element;

/// Attach `<tag id="..."/>` to `parent`.
pub(crate) fn add_ref(parent: &mut Element, tag: &str, id: &str) {
    parent.child(tag).set("id", id);
}

/// Attach `<tag id="..."/>` when `id` is set and non-empty.
pub(crate) fn add_ref_opt(parent: &mut Element, tag: &str, id: Option<&String>) {
    if let Some(id) = id.filter(|id| !id.is_empty()) {
        add_ref(parent, tag, id);
    }
}

/// Return the value of a required string field, rejecting unset and empty values.
pub(crate) fn required<'a>(
    value: Option<&'a String>,
    entity: &'static str,
    field: &'static str,
) -> RequestResult<&'a str> {
    value
        .map(String::as_str)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RequestError::missing(entity, field))
}

/// Name and password of a credential descriptor. Both are required.
fn credential_fields(credentials: &ConnectionCredentials) -> RequestResult<(&str, &str)> {
    let name = required(credentials.name.as_ref(), "connection credentials", "name")?;
    let password = required(
        credentials.password.as_ref(),
        "connection credentials",
        "password",
    )?;
    Ok((name, password))
}

/// Attach `<connectionCredentials>`.
pub(crate) fn add_credentials(
    parent: &mut Element,
    credentials: &ConnectionCredentials,
) -> RequestResult<()> {
    let (name, password) = credential_fields(credentials)?;

    let el = parent.child("connectionCredentials");
    el.set("name", name)
        .set("password", password)
        .set_bool("embed", credentials.embed);
    if credentials.oauth {
        el.set("oAuth", "true");
    }
    Ok(())
}

/// Attach one `<connection>` to a `<connections>` element.
///
/// The server address is required, as are the embedded credentials' fields.
pub(crate) fn add_connection(
    parent: &mut Element,
    connection: &ConnectionItem,
) -> RequestResult<()> {
    let address = required(
        connection.server_address.as_ref(),
        "connection",
        "server_address",
    )?;
    if let Some(credentials) = &connection.connection_credentials {
        credential_fields(credentials)?;
    }

    let el = parent.child("connection");
    el.set("serverAddress", address);
    el.set_opt("serverPort", connection.server_port.map(|p| p.to_string()));
    if let Some(credentials) = &connection.connection_credentials {
        add_credentials(el, credentials)?;
    }
    Ok(())
}

/// Attach either `<connectionCredentials>` or `<connections>`, never both.
pub(crate) fn add_credentials_or_connections(
    parent: &mut Element,
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<()> {
    if let Some(credentials) = credentials {
        add_credentials(parent, credentials)?;
    }
    if let Some(connections) = connections {
        add_connections(parent, connections)?;
    }
    Ok(())
}

/// Reject a call that supplies both a credential descriptor and a connection list.
pub(crate) fn ensure_exclusive(
    credentials: Option<&ConnectionCredentials>,
    connections: Option<&[ConnectionItem]>,
) -> RequestResult<()> {
    if credentials.is_some() && connections.is_some() {
        return Err(RequestError::conflict("connections", "connection_credentials"));
    }
    Ok(())
}

/// Attach `<connections>` with one child per connection.
pub(crate) fn add_connections(
    parent: &mut Element,
    connections: &[ConnectionItem],
) -> RequestResult<()> {
    let list = parent.child("connections");
    for connection in connections {
        add_connection(list, connection)?;
    }
    Ok(())
}

/// Attach `<views>` marking each named view hidden.
pub(crate) fn add_hidden_views(parent: &mut Element, names: &[String]) {
    let views = parent.child("views");
    for name in names {
        views.child("view").set("name", name).set("hidden", "true");
    }
}

/// Attach `<capabilities>` with one `<capability name mode/>` per entry.
pub(crate) fn add_capabilities(
    parent: &mut Element,
    capabilities: &[(Capability, CapabilityMode)],
) {
    let list = parent.child("capabilities");
    for (capability, mode) in capabilities {
        list.child("capability")
            .set("name", capability.as_str())
            .set("mode", mode.as_str());
    }
}

/// Attach `<tags>` with one `<tag label/>` per label.
pub(crate) fn add_tags<'a>(parent: &mut Element, labels: impl IntoIterator<Item = &'a str>) {
    let tags = parent.child("tags");
    for label in labels {
        tags.child("tag").set("label", label);
    }
}

/// Set `frequency` on a schedule and attach its `<frequencyDetails>`.
///
/// `<intervals>` is only attached when the interval has occurrences.
pub(crate) fn add_frequency(schedule: &mut Element, interval: &Interval) {
    schedule.set("frequency", interval.frequency());

    let details = schedule.child("frequencyDetails");
    details.set("start", format_time(interval.start_time()));
    details.set_opt("end", interval.end_time().map(format_time));

    let occurrences = interval.occurrences();
    if !occurrences.is_empty() {
        let intervals = details.child("intervals");
        for occurrence in occurrences {
            intervals.child("interval").set(occurrence.kind, occurrence.value);
        }
    }
}

fn format_time(time: chrono::NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}
