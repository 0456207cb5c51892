use serde::{Deserialize, Serialize};

/// Secrets presented when signing in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Credentials {
    /// Username and password.
    Password {
        /// Username.
        name: String,
        /// Password.
        password: String,
    },
    /// Personal access token.
    PersonalAccessToken {
        /// Token name.
        token_name: String,
        /// Token secret.
        token_secret: String,
    },
    /// Connected-app JSON web token.
    Jwt {
        /// Encoded token.
        jwt: String,
    },
}

impl Credentials {
    /// The credential attributes in wire order.
    #[must_use]
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::Password { name, password } => {
                vec![("name", name.as_str()), ("password", password.as_str())]
            }
            Self::PersonalAccessToken {
                token_name,
                token_secret,
            } => vec![
                ("personalAccessTokenName", token_name.as_str()),
                ("personalAccessTokenSecret", token_secret.as_str()),
            ],
            Self::Jwt { jwt } => vec![("jwt", jwt.as_str())],
        }
    }
}

/// A sign-in request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignIn {
    /// Secrets to present.
    pub credentials: Credentials,
    /// Content URL of the site. Empty for the default site.
    #[serde(default)]
    pub site_content_url: String,
    /// User to impersonate after signing in, if any.
    #[serde(default)]
    pub impersonate_user_id: Option<String>,
}

impl SignIn {
    /// Sign in to `site_content_url` with `credentials`.
    pub fn new(credentials: Credentials, site_content_url: impl Into<String>) -> Self {
        Self {
            credentials,
            site_content_url: site_content_url.into(),
            impersonate_user_id: None,
        }
    }
}
