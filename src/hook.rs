use log::debug;
use percent_encoding::percent_decode_str;
use url::Url;

use crate::builder::OAuthParamsBuilder;
use crate::credential::{Consumer, Token};
use crate::error::{Error, Result};
use crate::request::RequestDescription;
use crate::signature::{escape, HmacSha1, SignatureMethod};
use crate::values::*;

/// Where the signed OAuth parameters ended up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Authorization {
    /// Value for the `Authorization` header.
    Header(String),
    /// The request url with every OAuth parameter appended to its query.
    Url(Url),
}

/// Signs outgoing requests with a fixed consumer and optional token.
///
/// ```
/// use oauth_hook::{Consumer, OAuthHook, RequestDescription, Authorization};
///
/// let hook = OAuthHook::new(Consumer::new("ck", "cs"), None).header_auth(true);
/// let mut req = RequestDescription::new("GET", "http://example.com/resource");
/// let auth = hook.authorize(&mut req).unwrap();
/// assert!(matches!(auth, Authorization::Header(h) if h.starts_with("OAuth realm=\"\"")));
/// ```
#[derive(Clone, Debug)]
pub struct OAuthHook<TSignature = HmacSha1> {
    consumer: Consumer,
    token: Option<Token>,
    header_auth: bool,
    signature: TSignature,
}

impl OAuthHook<HmacSha1> {
    pub fn new(consumer: Consumer, token: Option<Token>) -> Self {
        OAuthHook {
            consumer,
            token,
            header_auth: false,
            signature: HmacSha1,
        }
    }
}

impl<TSignature: SignatureMethod> OAuthHook<TSignature> {
    /// Deliver the parameters in the `Authorization` header instead of the
    /// url.
    pub fn header_auth(mut self, header_auth: bool) -> Self {
        self.header_auth = header_auth;
        self
    }

    pub fn signature_method<T: SignatureMethod>(self, signature: T) -> OAuthHook<T> {
        OAuthHook {
            consumer: self.consumer,
            token: self.token,
            header_auth: self.header_auth,
            signature,
        }
    }

    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }

    /// Fresh protocol parameters for one request.
    pub fn oauth_params(&self) -> OAuthParamsBuilder<'_> {
        OAuthParamsBuilder::new(&self.consumer)
            .token(self.token.as_ref())
            .signature_method(self.signature.name())
    }

    /// Populate, sign and deliver the OAuth parameters of `request`.
    pub fn authorize(&self, request: &mut RequestDescription) -> Result<Authorization> {
        self.authorize_with(request, self.oauth_params())
    }

    /// Like [`OAuthHook::authorize`], with caller supplied protocol
    /// parameters (e.g. a fixed nonce and timestamp).
    pub fn authorize_with(
        &self,
        request: &mut RequestDescription,
        params: OAuthParamsBuilder<'_>,
    ) -> Result<Authorization> {
        request.oauth_params.extend(params.build());

        // query wins over body when both carry a callback
        for source in [&mut request.body_params, &mut request.query_params] {
            if let Some(callback) = source.take(OAUTH_PARAM_KEY_CALLBACK) {
                request
                    .oauth_params
                    .insert(OAUTH_PARAM_KEY_CALLBACK.to_string(), callback);
            }
        }

        self.signature
            .sign(request, Some(&self.consumer), self.token.as_ref())?;

        if self.header_auth {
            debug!("delivering oauth parameters in the authorization header");
            Ok(Authorization::Header(authorization_header(request)))
        } else {
            debug!("delivering oauth parameters in the url query");
            url_with_params(request).map(Authorization::Url)
        }
    }
}

/// `OAuth realm="",k="v",...` over the `oauth_*` entries of the request.
pub fn authorization_header(request: &RequestDescription) -> String {
    let params = request
        .oauth_params
        .iter()
        .filter(|(k, _)| k.starts_with(OAUTH_PARAM_PREFIX))
        .map(|(k, v)| {
            // the signature is stored escaped already
            let v = if k == OAUTH_PARAM_KEY_SIGNATURE {
                v.clone()
            } else {
                escape(v)
            };
            format!(",{}=\"{}\"", k, v)
        })
        .collect::<String>();
    format!("{} realm=\"\"{}", OAUTH_HEADER, params)
}

/// The request url with every accumulated parameter set in its query.
/// Existing arguments of the same name are replaced.
pub fn url_with_params(request: &RequestDescription) -> Result<Url> {
    let mut url = Url::parse(&request.url).map_err(|err| Error::InvalidUrl {
        url: request.url.clone(),
        reason: err.to_string(),
    })?;

    let kept = url
        .query_pairs()
        .filter(|(k, _)| !request.oauth_params.contains_key(&**k))
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<(String, String)>>();

    let mut pairs = url.query_pairs_mut();
    pairs.clear().extend_pairs(kept);
    for (k, v) in &request.oauth_params {
        if k == OAUTH_PARAM_KEY_SIGNATURE {
            // decode once so the serializer encodes it exactly once
            pairs.append_pair(k, &percent_decode_str(v).decode_utf8_lossy());
        } else {
            pairs.append_pair(k, v);
        }
    }
    drop(pairs);
    Ok(url)
}
