use serde::{Deserialize, Serialize};
use std::fmt;

/// A password as typed into the form.
///
/// The value travels and is rendered in plaintext; the wrapper only keeps it
/// out of `Debug` output so it does not leak into log lines by accident.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the plaintext value.
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(***)")
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Login for one side of the comparison (source or target organization).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgCredentials {
    pub username: String,
    pub password: Secret,
    pub organization: String,
}

impl OrgCredentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<Secret>,
        organization: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            organization: organization.into(),
        }
    }
}
