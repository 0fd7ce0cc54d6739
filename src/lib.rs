//! OAuth 1.0/1.0a request signing.
//!
//! Build a [`RequestDescription`], sign it with a [`SignatureMethod`] such as
//! [`HmacSha1`], and read `oauth_signature` back from its `oauth_params`:
//!
//! ```
//! use oauth_hook::{Consumer, HmacSha1, RequestDescription, SignatureMethod};
//!
//! let consumer = Consumer::new("ck", "cs");
//! let mut req = RequestDescription::new("GET", "http://example.com/resource")
//!     .oauth_param("oauth_consumer_key", "ck")
//!     .oauth_param("oauth_nonce", "abc123")
//!     .oauth_param("oauth_signature_method", "HMAC-SHA1")
//!     .oauth_param("oauth_timestamp", "1000000000")
//!     .oauth_param("oauth_version", "1.0");
//! HmacSha1.sign(&mut req, Some(&consumer), None).unwrap();
//! assert_eq!(req.signature(), Some("SfECeixw%2Bde%2BVsPBiIzMWoKfoAk"));
//! ```
//!
//! [`OAuthHook`] wraps the whole flow: it generates the protocol parameters,
//! signs, and hands back either an `Authorization` header or a url.

pub mod builder;
pub mod config;
pub mod credential;
pub mod error;
pub mod hook;
pub mod parameters;
pub mod request;
pub mod signature;
pub mod util;
pub mod values;

pub use builder::OAuthParamsBuilder;
pub use config::Config;
pub use credential::{Consumer, Credential, Token};
pub use error::{Error, Result};
pub use hook::{Authorization, OAuthHook};
pub use parameters::ParamSource;
pub use request::RequestDescription;
pub use signature::{escape, normalize_request_parameters, to_utf8, HmacSha1, SignatureMethod};
