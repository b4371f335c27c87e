use std::mem;
use std::str::FromStr;
use std::time::Duration;

use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::uri::Scheme;
use http::HeaderMap;
use http::HeaderValue;
use http::Method;
use http::Uri;

use crate::Error;
use crate::Result;

/// Signing context for request.
///
/// Built fresh from `http::request::Parts` per signing call and applied back
/// once the signature material has been injected. Never cached across
/// requests.
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP scheme.
    pub scheme: Scheme,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path.
    pub path: String,
    /// HTTP query parameters.
    pub query: Vec<(String, String)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let uri = mem::take(&mut parts.uri).into_parts();
        let paq = uri
            .path_and_query
            .unwrap_or_else(|| PathAndQuery::from_static("/"));

        Ok(SigningRequest {
            method: parts.method.clone(),
            scheme: uri.scheme.unwrap_or(Scheme::HTTP),
            authority: uri.authority.ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: paq.path().to_string(),
            query: paq
                .query()
                .map(|v| {
                    form_urlencoded::parse(v.as_bytes())
                        .map(|(k, v)| (k.into_owned(), v.into_owned()))
                        .collect()
                })
                .unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        let query_size = self.query_size();

        // Return headers back.
        mem::swap(&mut parts.headers, &mut self.headers);
        parts.method = self.method;
        parts.uri = {
            let mut uri_parts = mem::take(&mut parts.uri).into_parts();
            // Return scheme back.
            uri_parts.scheme = Some(self.scheme);
            // Return authority back.
            uri_parts.authority = Some(self.authority);
            // Build path and query.
            uri_parts.path_and_query = {
                let paq = if query_size == 0 {
                    self.path
                } else {
                    let mut s = self.path;
                    s.reserve(query_size + 1);

                    s.push('?');
                    for (i, (k, v)) in self.query.iter().enumerate() {
                        if i > 0 {
                            s.push('&');
                        }

                        s.push_str(k);
                        if !v.is_empty() {
                            s.push('=');
                            s.push_str(v);
                        }
                    }

                    s
                };

                Some(PathAndQuery::from_str(&paq)?)
            };
            Uri::from_parts(uri_parts)?
        };

        Ok(())
    }

    /// Get query size.
    #[inline]
    pub fn query_size(&self) -> usize {
        self.query
            .iter()
            .map(|(k, v)| k.len() + v.len() + 1)
            .sum::<usize>()
    }

    /// Push a new query pair into query list.
    #[inline]
    pub fn query_push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Get query value by filter.
    pub fn query_to_vec_with_filter(&self, filter: impl Fn(&str) -> bool) -> Vec<(String, String)> {
        self.query
            .iter()
            // Filter all queries
            .filter(|(k, _)| filter(k))
            // Clone all queries
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Convert sorted query to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a=b&c=d"
    /// ```
    pub fn query_to_string(mut query: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via query name.
        query.sort();

        for (idx, (k, v)) in query.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            if !v.is_empty() {
                s.push_str(sep);
                s.push_str(&v);
            }
        }

        s
    }

    /// Get header value by name.
    ///
    /// Returns empty string if header not found.
    #[inline]
    pub fn header_get_or_default(&self, key: &HeaderName) -> Result<&str> {
        match self.headers.get(key) {
            Some(v) => Ok(v.to_str()?),
            None => Ok(""),
        }
    }

    /// Normalize header value.
    ///
    /// Surrounding whitespace is trimmed and internal runs of spaces or tabs
    /// collapse to a single space, as required for canonical header values.
    pub fn header_value_normalize(v: &mut HeaderValue) {
        let bs = v.as_bytes();

        let mut normalized = Vec::with_capacity(bs.len());
        let mut in_run = false;
        for &b in bs {
            if b == b' ' || b == b'\t' {
                in_run = true;
                continue;
            }
            if in_run && !normalized.is_empty() {
                normalized.push(b' ');
            }
            in_run = false;
            normalized.push(b);
        }

        // This can't fail because we started with a valid HeaderValue and then
        // only removed whitespace
        *v = HeaderValue::from_bytes(&normalized).expect("invalid header value")
    }

    /// Get header names as sorted vector.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }

    /// Get header names with given prefix.
    pub fn header_to_vec_with_prefix(&self, prefix: &str) -> Vec<(String, String)> {
        self.headers
            .iter()
            // Filter all header that starts with prefix
            .filter(|(k, _)| k.as_str().starts_with(prefix))
            // Convert all header name to lowercase
            .map(|(k, v)| {
                (
                    k.as_str().to_lowercase(),
                    v.to_str().expect("must be valid header").to_string(),
                )
            })
            .collect()
    }

    /// Convert sorted headers to string.
    ///
    /// ```shell
    /// [(a, b), (c, d)] => "a:b\nc:d"
    /// ```
    pub fn header_to_string(mut headers: Vec<(String, String)>, sep: &str, join: &str) -> String {
        let mut s = String::with_capacity(16);

        // Sort via header name.
        headers.sort();

        for (idx, (k, v)) in headers.into_iter().enumerate() {
            if idx != 0 {
                s.push_str(join);
            }

            s.push_str(&k);
            s.push_str(sep);
            s.push_str(&v);
        }

        s
    }
}

/// SigningMethod is the method that used in signing.
#[derive(Copy, Clone, PartialEq, Eq)]
pub enum SigningMethod {
    /// Signing with header.
    Header,
    /// Signing with query.
    Query(Duration),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_value_normalize_collapses_runs() {
        let cases = [
            ("a  b   c", "a b c"),
            ("  a b  ", "a b"),
            ("a\t \tb", "a b"),
            ("abc", "abc"),
            ("", ""),
        ];

        for (input, expected) in cases {
            let mut v = HeaderValue::from_str(input).expect("must be valid");
            SigningRequest::header_value_normalize(&mut v);
            assert_eq!(v.as_bytes(), expected.as_bytes(), "input: {input:?}");
        }
    }

    fn request_with_headers(headers: HeaderMap) -> SigningRequest {
        SigningRequest {
            method: Method::GET,
            scheme: Scheme::HTTP,
            authority: "example.com".parse().expect("must be valid"),
            path: "/".to_string(),
            query: vec![],
            headers,
        }
    }

    #[test]
    fn test_header_name_sorting_is_insertion_order_independent() {
        let mut a = HeaderMap::new();
        a.insert("x-amz-date", HeaderValue::from_static("d"));
        a.insert("host", HeaderValue::from_static("h"));
        a.insert("x-amz-content-sha256", HeaderValue::from_static("s"));

        let mut b = HeaderMap::new();
        b.insert("x-amz-content-sha256", HeaderValue::from_static("s"));
        b.insert("x-amz-date", HeaderValue::from_static("d"));
        b.insert("host", HeaderValue::from_static("h"));

        let sa = request_with_headers(a);
        let sb = request_with_headers(b);

        assert_eq!(
            sa.header_name_to_vec_sorted(),
            sb.header_name_to_vec_sorted()
        );
        assert_eq!(
            sa.header_name_to_vec_sorted(),
            vec!["host", "x-amz-content-sha256", "x-amz-date"]
        );
    }

    #[test]
    fn test_query_to_string_sorts_pairs() {
        let q = vec![
            ("prefix".to_string(), "photos".to_string()),
            ("delimiter".to_string(), "/".to_string()),
            ("max-keys".to_string(), "20".to_string()),
        ];
        assert_eq!(
            SigningRequest::query_to_string(q, "=", "&"),
            "delimiter=/&max-keys=20&prefix=photos"
        );
    }
}
