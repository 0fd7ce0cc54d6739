use std::collections::HashMap;
use std::env;

use log::debug;

use crate::credential::{Consumer, Token};
use crate::error::{Error, Result};
use crate::hook::OAuthHook;

pub const OAUTH_CONSUMER_KEY: &str = "OAUTH_CONSUMER_KEY";
pub const OAUTH_CONSUMER_SECRET: &str = "OAUTH_CONSUMER_SECRET";
pub const OAUTH_TOKEN: &str = "OAUTH_TOKEN";
pub const OAUTH_TOKEN_SECRET: &str = "OAUTH_TOKEN_SECRET";
pub const OAUTH_VERIFIER: &str = "OAUTH_VERIFIER";
pub const OAUTH_HEADER_AUTH: &str = "OAUTH_HEADER_AUTH";

/// Settings for an [`OAuthHook`].
#[derive(Clone, Default)]
#[cfg_attr(test, derive(Debug))]
pub struct Config {
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN`]
    pub token: Option<String>,
    /// `token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_TOKEN_SECRET`]
    pub token_secret: Option<String>,
    /// `verifier` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_VERIFIER`]
    pub verifier: Option<String>,
    /// `header_auth` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`OAUTH_HEADER_AUTH`], one of `true`, `false`, `1`, `0`
    /// - default to `false`
    pub header_auth: Option<String>,
}

impl Config {
    /// Config with every field taken from the environment.
    pub fn from_env() -> Self {
        Config::default().load_via_env()
    }

    /// Fill fields that are still `None` from the environment.
    pub fn load_via_env(mut self) -> Self {
        let envs = env::vars().collect::<HashMap<_, _>>();

        for (key, field) in [
            (OAUTH_CONSUMER_KEY, &mut self.consumer_key),
            (OAUTH_CONSUMER_SECRET, &mut self.consumer_secret),
            (OAUTH_TOKEN, &mut self.token),
            (OAUTH_TOKEN_SECRET, &mut self.token_secret),
            (OAUTH_VERIFIER, &mut self.verifier),
            (OAUTH_HEADER_AUTH, &mut self.header_auth),
        ] {
            if let Some(v) = envs.get(key) {
                field.get_or_insert_with(|| v.clone());
            }
        }

        self
    }

    /// Build the hook, validating credentials on the way.
    ///
    /// A token is only built when both token and token secret are set.
    pub fn into_hook(self) -> Result<OAuthHook> {
        let consumer = Consumer::try_new(self.consumer_key, self.consumer_secret)?;

        let token = match (self.token, self.token_secret) {
            (Some(key), Some(secret)) => {
                let token = Token::new(key, secret);
                Some(match self.verifier {
                    Some(verifier) => token.with_verifier(verifier),
                    None => token,
                })
            }
            (key, secret) => {
                if key.is_some() || secret.is_some() {
                    debug!("token or token secret is missing, signing without token");
                }
                None
            }
        };

        let header_auth = match self.header_auth.as_deref() {
            None => false,
            Some(v) => parse_bool(v).ok_or_else(|| Error::InvalidConfig {
                key: OAUTH_HEADER_AUTH,
                value: v.to_string(),
            })?,
        };

        Ok(OAuthHook::new(consumer, token).header_auth(header_auth))
    }
}

fn parse_bool(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::RequestDescription;
    use crate::hook::Authorization;
    use pretty_assertions::assert_eq;

    const ALL_VARS: [&str; 6] = [
        OAUTH_CONSUMER_KEY,
        OAUTH_CONSUMER_SECRET,
        OAUTH_TOKEN,
        OAUTH_TOKEN_SECRET,
        OAUTH_VERIFIER,
        OAUTH_HEADER_AUTH,
    ];

    #[test]
    fn test_from_env() {
        temp_env::with_vars(
            vec![
                (OAUTH_CONSUMER_KEY, Some("ck")),
                (OAUTH_CONSUMER_SECRET, Some("cs")),
                (OAUTH_TOKEN, Some("tk")),
                (OAUTH_TOKEN_SECRET, Some("ts")),
                (OAUTH_VERIFIER, Some("v")),
                (OAUTH_HEADER_AUTH, Some("TRUE")),
            ],
            || {
                let hook = Config::from_env().into_hook().expect("config must be valid");
                assert_eq!(hook.consumer().key(), "ck");
                assert_eq!(hook.consumer().secret(), "cs");
                let token = hook.token().expect("token must be loaded");
                assert_eq!(token.key(), "tk");
                assert_eq!(token.verifier(), Some("v"));

                let mut req = RequestDescription::new("GET", "http://example.com/");
                let auth = hook.authorize(&mut req).expect("signing must succeed");
                assert!(matches!(auth, Authorization::Header(_)));
            },
        );
    }

    #[test]
    fn test_explicit_values_win() {
        temp_env::with_vars(
            vec![
                (OAUTH_CONSUMER_KEY, Some("env_ck")),
                (OAUTH_CONSUMER_SECRET, Some("env_cs")),
            ],
            || {
                let config = Config {
                    consumer_key: Some("ck".to_string()),
                    ..Default::default()
                }
                .load_via_env();
                assert_eq!(config.consumer_key.as_deref(), Some("ck"));
                assert_eq!(config.consumer_secret.as_deref(), Some("env_cs"));
            },
        );
    }

    #[test]
    fn test_missing_consumer() {
        temp_env::with_vars_unset(ALL_VARS.to_vec(), || {
            let err = Config::from_env().into_hook().unwrap_err();
            assert_eq!(err, Error::InvalidCredential { field: "key" });

            let err = Config {
                consumer_key: Some("ck".to_string()),
                ..Default::default()
            }
            .into_hook()
            .unwrap_err();
            assert_eq!(err, Error::InvalidCredential { field: "secret" });
        });
    }

    #[test]
    fn test_partial_token_is_ignored() {
        let hook = Config {
            consumer_key: Some("ck".to_string()),
            consumer_secret: Some("cs".to_string()),
            token: Some("tk".to_string()),
            ..Default::default()
        }
        .into_hook()
        .unwrap();
        assert!(hook.token().is_none());
    }

    #[test]
    fn test_invalid_header_auth() {
        let err = Config {
            consumer_key: Some("ck".to_string()),
            consumer_secret: Some("cs".to_string()),
            header_auth: Some("maybe".to_string()),
            ..Default::default()
        }
        .into_hook()
        .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidConfig {
                key: OAUTH_HEADER_AUTH,
                value: "maybe".to_string()
            }
        );
    }
}
