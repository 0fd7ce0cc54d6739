use url::{Position, Url};

use crate::parameters::ParamSource;

/// Split an absolute url into the endpoint (scheme, authority and path) and
/// its raw query string.
pub fn split_url(url: &Url) -> (&str, ParamSource) {
    let endpoint = &url[..Position::AfterPath];
    let query = ParamSource::RawQueryString(url.query().unwrap_or_default().to_string());
    (endpoint, query)
}

/// Decode a query string into pairs, keeping their order and duplicates.
///
/// Segments whose value is empty (including segments without `=`) are
/// dropped.
pub fn query_to_pairs(query: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .filter(|(_, v)| !v.is_empty())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(v: &[(&str, &str)]) -> Vec<(String, String)> {
        v.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_split_url() {
        let s = "http://example.com/example+.html?quever?=salting=parsing&&&&&vir!@$========%^&*()_=askparity++++==&パラメータ=テストパラメータ#top";
        let u = Url::parse(s).unwrap();
        let (endpoint, query) = split_url(&u);
        assert_eq!(endpoint, "http://example.com/example+.html");
        assert_eq!(
            query.resolve(),
            pairs(&[
                ("quever?", "salting=parsing"),
                ("vir!@$", "=======%^"),
                ("*()_", "askparity    =="),
                ("パラメータ", "テストパラメータ"),
            ])
        );

        let n = "https://example.com/";
        let nu = Url::parse(n).unwrap();
        let (endpoint, query) = split_url(&nu);
        assert_eq!(endpoint, n);
        assert!(query.is_empty());
    }

    #[test]
    fn test_query_to_pairs() {
        let got = query_to_pairs("parameter=value&!%40%23%24%25^%26*()_%2B=!%40%23%24%25^%26*()_%2B%3D");
        assert_eq!(
            got,
            pairs(&[("parameter", "value"), ("!@#$%^&*()_+", "!@#$%^&*()_+=")])
        );

        let got = query_to_pairs("?a=1&a=2&blank=&flag&=orphan");
        assert_eq!(got, pairs(&[("a", "1"), ("a", "2"), ("", "orphan")]));

        assert!(query_to_pairs("").is_empty());
    }
}
