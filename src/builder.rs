use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::credential::{Consumer, Token};
use crate::values::*;

/// Builder for the protocol parameters every signed request carries.
///
/// Nonce and timestamp are generated when not set explicitly.
#[derive(Clone, Debug)]
pub struct OAuthParamsBuilder<'a> {
    consumer: &'a Consumer,
    token: Option<&'a Token>,
    signature_method: &'static str,
    nonce: Option<String>,
    timestamp: Option<i64>,
    version: Option<String>,
}

impl<'a> OAuthParamsBuilder<'a> {
    pub fn new(consumer: &'a Consumer) -> Self {
        OAuthParamsBuilder {
            consumer,
            token: None,
            signature_method: OAUTH_VALUE_SIGMETHOD_HMACSHA1,
            nonce: None,
            timestamp: None,
            version: Some(OAUTH_VALUE_VERSION.into()),
        }
    }

    pub fn token(mut self, token: Option<&'a Token>) -> Self {
        self.token = token;
        self
    }

    pub fn signature_method(mut self, name: &'static str) -> Self {
        self.signature_method = name;
        self
    }

    pub fn nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Override `oauth_version`; `None` leaves it out.
    pub fn version(mut self, version: Option<impl Into<String>>) -> Self {
        self.version = version.map(|v| v.into());
        self
    }

    pub fn build(self) -> BTreeMap<String, String> {
        let timestamp = self
            .timestamp
            .unwrap_or_else(|| Utc::now().timestamp());
        let nonce = self
            .nonce
            .unwrap_or_else(|| Uuid::new_v4().simple().to_string());

        let mut params = vec![
            (OAUTH_PARAM_KEY_CONSUMER_KEY, Some(self.consumer.key().to_string())),
            (OAUTH_PARAM_KEY_TIMESTAMP, Some(timestamp.to_string())),
            (OAUTH_PARAM_KEY_NONCE, Some(nonce)),
            (OAUTH_PARAM_KEY_VERSION, self.version),
            (
                OAUTH_PARAM_KEY_SIGNATURE_METHOD,
                Some(self.signature_method.to_string()),
            ),
        ];
        if let Some(token) = self.token {
            params.push((OAUTH_PARAM_KEY_TOKEN, Some(token.key().to_string())));
            params.push((
                OAUTH_PARAM_KEY_VERIFIER,
                Some(token.verifier().unwrap_or_default().to_string()),
            ));
        }

        params
            .into_iter()
            // trim None value
            .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_fixed() {
        let consumer = Consumer::new("ck", "cs");
        let params = OAuthParamsBuilder::new(&consumer)
            .nonce("abc123")
            .timestamp(1_000_000_000)
            .build();

        let expected: BTreeMap<String, String> = [
            ("oauth_consumer_key", "ck"),
            ("oauth_nonce", "abc123"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1000000000"),
            ("oauth_version", "1.0"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn test_build_with_token() {
        let consumer = Consumer::new("ck", "cs");
        let token = Token::new("tk", "ts");
        let params = OAuthParamsBuilder::new(&consumer)
            .token(Some(&token))
            .version(None::<String>)
            .build();
        assert_eq!(params["oauth_token"], "tk");
        assert_eq!(params["oauth_verifier"], "");
        assert!(!params.contains_key("oauth_version"));

        let token = token.with_verifier("hfdp7dh39dks9884");
        let params = OAuthParamsBuilder::new(&consumer)
            .token(Some(&token))
            .build();
        assert_eq!(params["oauth_verifier"], "hfdp7dh39dks9884");
    }

    #[test]
    fn test_build_generates_nonce_and_timestamp() {
        let consumer = Consumer::new("ck", "cs");
        let before = Utc::now().timestamp();
        let first = OAuthParamsBuilder::new(&consumer).build();
        let second = OAuthParamsBuilder::new(&consumer).build();

        assert_eq!(first["oauth_nonce"].len(), 32);
        assert_ne!(first["oauth_nonce"], second["oauth_nonce"]);
        let timestamp: i64 = first["oauth_timestamp"].parse().unwrap();
        assert!(timestamp >= before);
    }
}
