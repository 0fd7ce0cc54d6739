use std::collections::BTreeMap;

use crate::parameters::ParamSource;

/// Description of an outgoing request, as far as signing is concerned.
///
/// `oauth_params` accumulates the protocol parameters, every query/body pair
/// seen during normalization and finally `oauth_signature`. It holds one
/// value per name, so a repeated query/body name keeps only its last value
/// there even though every occurrence is signed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestDescription {
    pub method: String,
    pub url: String,
    pub query_params: ParamSource,
    pub body_params: ParamSource,
    pub oauth_params: BTreeMap<String, String>,
}

impl RequestDescription {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        RequestDescription {
            method: method.into(),
            url: url.into(),
            ..Default::default()
        }
    }

    pub fn query_params(mut self, params: impl Into<ParamSource>) -> Self {
        self.query_params = params.into();
        self
    }

    pub fn body_params(mut self, params: impl Into<ParamSource>) -> Self {
        self.body_params = params.into();
        self
    }

    pub fn oauth_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.oauth_params.insert(key.into(), value.into());
        self
    }

    /// The computed signature, once the request has been signed.
    pub fn signature(&self) -> Option<&str> {
        self.oauth_params
            .get(crate::values::OAUTH_PARAM_KEY_SIGNATURE)
            .map(String::as_str)
    }
}
