//! Signature methods and the parameter normalization they share.

pub mod hmac_sha1;

pub use self::hmac_sha1::HmacSha1;

use std::borrow::Cow;

use log::debug;
use percent_encoding::{utf8_percent_encode, AsciiSet};

use crate::credential::{Consumer, Token};
use crate::error::Result;
use crate::request::RequestDescription;

// https://tools.ietf.org/html/rfc5849#section-3.6
// * ALPHA, DIGIT, '-', '.', '_', '~' MUST NOT be encoded.
// * All other characters MUST be encoded.
// * The two hexadecimal characters used to represent encoded
//   characters MUST be uppercase.
const TARGETS_FOR_PARAMS: &AsciiSet = &percent_encoding::NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A way of signing requests, e.g. HMAC-SHA1.
pub trait SignatureMethod {
    /// Value of `oauth_signature_method` for this method.
    fn name(&self) -> &'static str;

    /// Sign `request`, storing the result in
    /// `request.oauth_params["oauth_signature"]`.
    ///
    /// `token` may be `None` for token-less requests such as obtaining a
    /// request token. A missing `consumer` is an error.
    fn sign(
        &self,
        request: &mut RequestDescription,
        consumer: Option<&Consumer>,
        token: Option<&Token>,
    ) -> Result<()>;
}

/// Interpret `input` as UTF-8 text.
///
/// Valid input is borrowed as is; invalid sequences become U+FFFD.
pub fn to_utf8<T: AsRef<[u8]> + ?Sized>(input: &T) -> Cow<'_, str> {
    String::from_utf8_lossy(input.as_ref())
}

/// Percent-encode everything outside of `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
pub fn escape<T: AsRef<[u8]> + ?Sized>(input: &T) -> String {
    utf8_percent_encode(&to_utf8(input), TARGETS_FOR_PARAMS).to_string()
}

/// Build the normalized parameter string of `request`.
///
/// Every query and body pair is recorded into `request.oauth_params`; the
/// returned string covers those pairs plus everything `oauth_params` holds
/// afterwards, sorted by key then value.
pub fn normalize_request_parameters(request: &mut RequestDescription) -> String {
    let merged = [
        request.query_params.resolve(),
        request.body_params.resolve(),
    ]
    .concat();

    let mut normalized = Vec::with_capacity(merged.len() + request.oauth_params.len());
    for (k, v) in merged {
        let (k, v) = (to_utf8(&k).into_owned(), to_utf8(&v).into_owned());
        request.oauth_params.insert(k.clone(), v.clone());
        normalized.push((k, v));
    }
    normalized.extend(
        request
            .oauth_params
            .iter()
            .map(|(k, v)| (k.clone(), v.clone())),
    );

    // byte-wise on key, then value
    normalized.sort();

    // the unreserved table already yields `%20` for spaces and a literal `~`,
    // which is what form encoding gives after fixing up `+` and `%7E`.
    let normalized = normalized
        .iter()
        .map(|(k, v)| format!("{}={}", escape(k), escape(v)))
        .collect::<Vec<String>>()
        .join("&");
    debug!("normalized request parameters: {normalized}");
    normalized
}
