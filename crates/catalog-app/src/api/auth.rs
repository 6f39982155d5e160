use super::ApiError;
use std::fmt;

/// The bearer credential passed into every data-access call.
///
/// An empty token is treated the same as no token.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    pub fn bearer(token: impl Into<String>) -> Self {
        let token = token.into();
        Self {
            token: (!token.trim().is_empty()).then_some(token),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The token, or `MissingCredential`.
    pub fn token(&self) -> Result<&str, ApiError> {
        self.token.as_deref().ok_or(ApiError::MissingCredential)
    }

    /// Fails fast when no token is present.
    pub fn require(&self) -> Result<(), ApiError> {
        self.token().map(|_| ())
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some()
    }
}

impl From<Option<String>> for Credentials {
    fn from(token: Option<String>) -> Self {
        token.map(Self::bearer).unwrap_or_default()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.token {
            Some(_) => f.write_str("Credentials(Bearer ***)"),
            None => f.write_str("Credentials(anonymous)"),
        }
    }
}
