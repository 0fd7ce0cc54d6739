use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use log::debug;
use sha1::Sha1;

use super::{escape, normalize_request_parameters, SignatureMethod};
use crate::credential::{Consumer, Token};
use crate::error::{Error, Result};
use crate::request::RequestDescription;
use crate::values::{OAUTH_PARAM_KEY_SIGNATURE, OAUTH_VALUE_SIGMETHOD_HMACSHA1};

type HmacSha1Mac = Hmac<Sha1>;

/// HMAC-SHA1 signature method.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HmacSha1;

impl SignatureMethod for HmacSha1 {
    fn name(&self) -> &'static str {
        OAUTH_VALUE_SIGMETHOD_HMACSHA1
    }

    fn sign(
        &self,
        request: &mut RequestDescription,
        consumer: Option<&Consumer>,
        token: Option<&Token>,
    ) -> Result<()> {
        let consumer = consumer.ok_or(Error::MissingCredential)?;

        let normalized = normalize_request_parameters(request);
        let base_str = signature_base_string(&request.method, &request.url, &normalized);
        debug!("calculated signature base string: {base_str}");

        let sign_key = signing_key(consumer.secret(), token.map(|t| t.secret()));
        let signature = escape(&generate_signature(&sign_key, &base_str));

        request
            .oauth_params
            .insert(OAUTH_PARAM_KEY_SIGNATURE.to_string(), signature);
        Ok(())
    }
}

/// `method & url & params`, with every `=` escaped afterwards.
fn signature_base_string(http_method: &str, endpoint: &str, normalized: &str) -> String {
    [escape(http_method), escape(endpoint), normalized.to_string()]
        .join("&")
        .replace('=', "%3D")
}

fn signing_key(consumer_secret: &str, token_secret: Option<&str>) -> String {
    let token_secret = token_secret.map(|s| escape(s)).unwrap_or_default();
    format!("{}&{}", escape(consumer_secret), token_secret)
}

/// Base64 encoded HMAC-SHA1 digest, without padding.
fn generate_signature(sign_key: &str, base_str: &str) -> String {
    let mut mac = HmacSha1Mac::new_from_slice(sign_key.as_bytes())
        .expect("HMAC-SHA1 accepts keys of any size");
    mac.update(base_str.as_bytes());
    STANDARD_NO_PAD.encode(mac.finalize().into_bytes())
}
