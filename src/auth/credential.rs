//! Credentials used to authorize requests.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ConfigError;

/// The credential a client authenticates with.
///
/// Exactly one variant is held by a client for its whole lifetime. The
/// variant selects how the `Authorization` header is computed.
///
/// # Security
///
/// The `Debug` implementation masks passwords and tokens.
///
/// # Example
///
/// ```rust
/// use moysklad::AuthCredential;
///
/// let auth = AuthCredential::token("t").unwrap();
/// assert_eq!(auth.authorization_header(), "Bearer t");
///
/// let auth = AuthCredential::basic("a", "b").unwrap();
/// assert_eq!(auth.authorization_header(), "Basic YTpi");
/// assert_eq!(format!("{auth:?}"), r#"Basic { login: "a", password: ***** }"#);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub enum AuthCredential {
    /// HTTP basic authentication with login and password.
    Basic {
        /// Account login, e.g. `admin@company`.
        login: String,
        /// Account password.
        password: String,
    },
    /// Bearer token authentication.
    Token {
        /// The access token.
        token: String,
    },
}

impl AuthCredential {
    /// Creates a basic-auth credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyLogin`] if `login` is empty.
    pub fn basic(login: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let login = login.into();
        if login.is_empty() {
            return Err(ConfigError::EmptyLogin);
        }
        Ok(Self::Basic {
            login,
            password: password.into(),
        })
    }

    /// Creates a bearer-token credential.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyToken`] if `token` is empty.
    pub fn token(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyToken);
        }
        Ok(Self::Token { token })
    }

    /// Returns the value of the `Authorization` header for this credential.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        match self {
            Self::Basic { login, password } => {
                format!("Basic {}", STANDARD.encode(format!("{login}:{password}")))
            }
            Self::Token { token } => format!("Bearer {token}"),
        }
    }
}

impl fmt::Debug for AuthCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic { login, .. } => write!(f, "Basic {{ login: {login:?}, password: ***** }}"),
            Self::Token { .. } => f.write_str("Token { token: ***** }"),
        }
    }
}
