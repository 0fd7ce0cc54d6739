use core::marker::PhantomData;
use std::fmt;

use crate::error::{Error, Result};

/// Role marker for the credential identifying the calling application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsumerRole {}

/// Role marker for the credential identifying the resource owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenRole {}

/// Key/secret pair. The role parameter keeps consumers and tokens apart, so a
/// token can never be passed where a consumer is expected.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential<TRole> {
    key: String,
    secret: String,
    verifier: Option<String>,
    role: PhantomData<TRole>,
}

/// OAuth consumer (client) credential.
pub type Consumer = Credential<ConsumerRole>;

/// OAuth token credential (request token or access token).
pub type Token = Credential<TokenRole>;

impl<TRole> Credential<TRole> {
    pub fn new<TKey, TSecret>(key: TKey, secret: TSecret) -> Self
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        Credential {
            key: key.into(),
            secret: secret.into(),
            verifier: None,
            role: PhantomData::<TRole>,
        }
    }

    /// Build a credential from parts that may be absent.
    ///
    /// Fails with [`Error::InvalidCredential`] if either part is `None`.
    pub fn try_new<TKey, TSecret>(key: Option<TKey>, secret: Option<TSecret>) -> Result<Self>
    where
        TKey: Into<String>,
        TSecret: Into<String>,
    {
        let key = key.ok_or(Error::InvalidCredential { field: "key" })?;
        let secret = secret.ok_or(Error::InvalidCredential { field: "secret" })?;
        Ok(Self::new(key, secret))
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }
}

impl Credential<TokenRole> {
    /// Attach the `oauth_verifier` received after the user authorized a
    /// request token.
    pub fn with_verifier(mut self, verifier: impl Into<String>) -> Self {
        self.verifier = Some(verifier.into());
        self
    }

    pub fn verifier(&self) -> Option<&str> {
        self.verifier.as_deref()
    }
}

// secrets never show up in debug output
impl<TRole> fmt::Debug for Credential<TRole> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .field("verifier", &self.verifier)
            .finish()
    }
}
