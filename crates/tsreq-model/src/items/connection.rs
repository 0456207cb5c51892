use serde::{Deserialize, Serialize};

/// Credentials embedded in a published connection.
///
/// Both `name` and `password` are required on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionCredentials {
    /// Username.
    pub name: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Whether the server should store the password.
    pub embed: bool,
    /// Whether `password` is an OAuth token.
    pub oauth: bool,
}

impl ConnectionCredentials {
    /// Username/password credentials.
    pub fn new(name: impl Into<String>, password: impl Into<String>, embed: bool) -> Self {
        Self {
            name: Some(name.into()),
            password: Some(password.into()),
            embed,
            oauth: false,
        }
    }
}

/// A data connection.
///
/// Used both as a descriptor when publishing content and as the entity of a
/// connection update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionItem {
    /// Host name or address of the data server.
    pub server_address: Option<String>,
    /// Port of the data server.
    pub server_port: Option<u16>,
    /// Username for a connection update.
    pub username: Option<String>,
    /// Password for a connection update.
    pub password: Option<String>,
    /// Whether the password is embedded, for a connection update.
    pub embed_password: Option<bool>,
    /// Credentials sent with a publish.
    pub connection_credentials: Option<ConnectionCredentials>,
}

impl ConnectionItem {
    /// A connection to `server_address`.
    pub fn new(server_address: impl Into<String>) -> Self {
        Self {
            server_address: Some(server_address.into()),
            ..Self::default()
        }
    }
}
