use thiserror::Error;

/// Result that is a wrapper of `Result<T, oauth_hook::Error>`
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while building credentials or signing requests.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A credential was built without its key or secret.
    #[error("invalid credential: {field} must be set")]
    InvalidCredential { field: &'static str },

    /// `sign` was called without a consumer.
    #[error("missing credential: a consumer is required to sign a request")]
    MissingCredential,

    /// The request url could not be parsed for query delivery.
    #[error("invalid url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// A configuration value could not be interpreted.
    #[error("invalid config value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}

impl Error {
    /// Is this error caused by absent or incomplete credentials?
    pub fn is_credential_error(&self) -> bool {
        matches!(
            self,
            Error::InvalidCredential { .. } | Error::MissingCredential
        )
    }
}
