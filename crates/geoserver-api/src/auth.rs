use secrecy::{ExposeSecret, SecretString};

/// HTTP Basic credentials attached to every request.
///
/// The password stays wrapped in a [`SecretString`] and is only exposed at
/// the moment the `Authorization` header is built.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Attach `Authorization: Basic ...` to a request.
    pub(crate) fn apply(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder.basic_auth(&self.username, Some(self.password.expose_secret()))
    }
}
