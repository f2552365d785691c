//! Credentials for a Jira site.

use std::fmt;

use base64::Engine;

/// How requests authenticate against Jira.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Auth {
    /// Atlassian account email and API token, sent as HTTP basic auth.
    Basic {
        /// Account email.
        email: String,
        /// API token from <https://id.atlassian.com/manage-profile/security/api-tokens>.
        api_token: String,
    },
    /// OAuth 2.0 (3LO) access token or personal access token.
    Bearer(String),
    /// Session cookie, e.g. `JSESSIONID=...`, sent as the `Cookie` header.
    Session(String),
    /// Credentials are supplied by the host, e.g. a platform fetch bridge.
    #[default]
    Ambient,
}

impl Auth {
    /// Basic auth from an account email and API token.
    pub fn basic(email: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self::Basic {
            email: email.into(),
            api_token: api_token.into(),
        }
    }

    /// Bearer token auth.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    /// Session cookie auth.
    pub fn session(cookie: impl Into<String>) -> Self {
        Self::Session(cookie.into())
    }

    /// The header this credential is carried in, with its value.
    #[must_use]
    pub fn header(&self) -> Option<(&'static str, String)> {
        match self {
            Self::Basic { email, api_token } => {
                let encoded = base64::engine::general_purpose::STANDARD
                    .encode(format!("{email}:{api_token}"));
                Some(("Authorization", format!("Basic {encoded}")))
            }
            Self::Bearer(token) => Some(("Authorization", format!("Bearer {token}"))),
            Self::Session(cookie) => Some(("Cookie", cookie.clone())),
            Self::Ambient => None,
        }
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { email, .. } => f
                .debug_struct("Basic")
                .field("email", email)
                .field("api_token", &"<redacted>")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"<redacted>").finish(),
            Self::Session(_) => f.debug_tuple("Session").field(&"<redacted>").finish(),
            Self::Ambient => f.write_str("Ambient"),
        }
    }
}
