/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use super::{
    sha256_hex_string, PayloadChecksumKind, SignableBody, SigningError, SigningSettings,
    UriEncoding, X_AMZ_CONTENT_SHA_256, X_AMZ_DATE, X_AMZ_SECURITY_TOKEN,
};
use chrono::{DateTime, Utc};
use http::header::{AUTHORIZATION, HOST, USER_AGENT};
use http::{Method, Uri};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

pub(super) const HMAC_256: &str = "AWS4-HMAC-SHA256";

const UNSIGNED_PAYLOAD: &str = "UNSIGNED-PAYLOAD";

/// Everything except the RFC 3986 unreserved characters
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub(super) fn format_date(date_time: &DateTime<Utc>) -> String {
    date_time.format("%Y%m%d").to_string()
}

fn format_date_time(date_time: &DateTime<Utc>) -> String {
    date_time.format("%Y%m%dT%H%M%SZ").to_string()
}

#[derive(Debug, PartialEq)]
pub(super) struct CanonicalRequest {
    pub(super) method: Method,
    pub(super) path: String,
    pub(super) params: Option<String>,
    /// Lowercase header name to trimmed, comma-joined values, in signing order
    pub(super) headers: BTreeMap<String, String>,
    pub(super) signed_headers: SignedHeaders,
    pub(super) date_time: String,
    pub(super) content_sha256: String,
}

impl CanonicalRequest {
    /// Construct the canonical request for `req`
    ///
    /// Beyond the headers already on the request, the canonical request signs:
    /// - `host`, taken from the URI authority unless the request sets it
    /// - `x-amz-date`
    /// - `x-amz-security-token` when the credentials carry a session token
    /// - `x-amz-content-sha256` when the settings ask for it
    ///
    /// `user-agent` is never signed since proxies may rewrite it.
    pub(super) fn from<B>(
        req: &http::Request<B>,
        body: &SignableBody<'_>,
        settings: &SigningSettings,
        date_time: DateTime<Utc>,
        security_token: Option<&str>,
    ) -> Result<CanonicalRequest, SigningError> {
        let path = match req.uri().path() {
            "" => "/",
            path => path,
        };
        let path = match settings.uri_encoding {
            // The path is already URI encoded, only `%` needs to be encoded again
            UriEncoding::Double => path.replace('%', "%25"),
            UriEncoding::Single => path.to_string(),
        };
        let content_sha256 = Self::payload_hash(body);
        let date_time = format_date_time(&date_time);

        let mut headers = BTreeMap::new();
        for name in req.headers().keys() {
            if name == USER_AGENT || name == AUTHORIZATION {
                continue;
            }
            let mut values = Vec::new();
            for value in req.headers().get_all(name) {
                values.push(value.to_str()?.trim());
            }
            headers.insert(name.as_str().to_string(), values.join(","));
        }
        if !headers.contains_key(HOST.as_str()) {
            let authority = req
                .uri()
                .authority()
                .ok_or(SigningError::MissingAuthority)?;
            headers.insert(HOST.as_str().to_string(), authority.as_str().to_string());
        }
        headers.insert(X_AMZ_DATE.to_string(), date_time.clone());
        if let Some(token) = security_token {
            headers.insert(X_AMZ_SECURITY_TOKEN.to_string(), token.to_string());
        }
        if settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
            headers.insert(X_AMZ_CONTENT_SHA_256.to_string(), content_sha256.clone());
        }

        Ok(CanonicalRequest {
            method: req.method().clone(),
            path,
            params: Self::params(req.uri()),
            signed_headers: SignedHeaders::new(headers.keys().cloned().collect()),
            headers,
            date_time,
            content_sha256,
        })
    }

    fn payload_hash(body: &SignableBody<'_>) -> String {
        match body {
            SignableBody::Bytes(data) => sha256_hex_string(data),
            SignableBody::Precomputed(digest) => digest.clone(),
            SignableBody::UnsignedPayload => UNSIGNED_PAYLOAD.to_string(),
        }
    }

    fn params(uri: &Uri) -> Option<String> {
        let query = uri.query()?;
        let mut params: Vec<(Cow<'_, str>, Cow<'_, str>)> =
            form_urlencoded::parse(query.as_bytes()).collect();
        // Sort by param name, and then by param value
        params.sort();
        let encoded = params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(key, QUERY_ENCODE_SET),
                    utf8_percent_encode(value, QUERY_ENCODE_SET)
                )
            })
            .collect::<Vec<_>>();
        Some(encoded.join("&"))
    }
}

impl fmt::Display for CanonicalRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.params.as_deref().unwrap_or(""))?;
        for (name, value) in &self.headers {
            writeln!(f, "{}:{}", name, value)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.content_sha256)
    }
}

#[derive(Debug, PartialEq, Default)]
pub(super) struct SignedHeaders {
    inner: Vec<String>,
}

impl SignedHeaders {
    fn new(mut inner: Vec<String>) -> Self {
        inner.sort();
        SignedHeaders { inner }
    }
}

impl fmt::Display for SignedHeaders {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.join(";"))
    }
}

#[derive(PartialEq, Debug, Clone)]
pub(super) struct Scope<'a> {
    pub(super) date: String,
    pub(super) region: &'a str,
    pub(super) service: &'a str,
}

impl<'a> fmt::Display for Scope<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/aws4_request",
            self.date, self.region, self.service
        )
    }
}

#[derive(PartialEq, Debug)]
pub(super) struct StringToSign<'a> {
    pub(super) scope: Scope<'a>,
    pub(super) date_time: String,
    pub(super) hashed_creq: &'a str,
}

impl<'a> StringToSign<'a> {
    pub(super) fn new(
        date_time: DateTime<Utc>,
        region: &'a str,
        service: &'a str,
        hashed_creq: &'a str,
    ) -> Self {
        StringToSign {
            scope: Scope {
                date: format_date(&date_time),
                region,
                service,
            },
            date_time: format_date_time(&date_time),
            hashed_creq,
        }
    }
}

impl<'a> fmt::Display for StringToSign<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}\n{}",
            HMAC_256, self.date_time, self.scope, self.hashed_creq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CanonicalRequest, StringToSign};
    use crate::sigv4::{sha256_hex_string, SignableBody, SigningSettings, UriEncoding};
    use chrono::{DateTime, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn suite_date() -> DateTime<Utc> {
        Utc.timestamp_opt(1440938160, 0).unwrap()
    }

    fn creq(req: &http::Request<()>, settings: SigningSettings) -> String {
        CanonicalRequest::from(req, &SignableBody::Bytes(&[]), &settings, suite_date(), None)
            .unwrap()
            .to_string()
    }

    #[test]
    fn get_vanilla_canonical_request() {
        let req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let expected = "GET\n/\n\nhost:example.amazonaws.com\nx-amz-date:20150830T123600Z\n\nhost;x-amz-date\ne3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
        assert_eq!(creq(&req, SigningSettings::default()), expected);
    }

    #[test]
    fn get_vanilla_string_to_sign() {
        let req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let hashed = sha256_hex_string(creq(&req, SigningSettings::default()));
        let sts = StringToSign::new(suite_date(), "us-east-1", "service", &hashed);
        assert_eq!(
            sts.to_string(),
            "AWS4-HMAC-SHA256\n20150830T123600Z\n20150830/us-east-1/service/aws4_request\nbb579772317eb040ac9ed261061d46c1f17a8133879d6129b6e1c25292927e63"
        );
    }

    #[test]
    fn query_params_are_sorted_and_encoded() {
        let req = http::Request::builder()
            .uri("https://iot.us-east-1.amazonaws.com/things?nextToken=a%2Fb&maxResults=10&attributeValue=x+y")
            .body(())
            .unwrap();
        let creq = creq(&req, SigningSettings::default());
        let query_line = creq.lines().nth(2).unwrap();
        assert_eq!(
            query_line,
            "attributeValue=x%20y&maxResults=10&nextToken=a%2Fb"
        );
    }

    #[test]
    fn user_agent_is_not_signed_and_values_are_trimmed() {
        let req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .header("user-agent", "aws-sdk-rust/0.123.test")
            .header("x-amzn-iot-principal", "  arn:aws:iam::123456789012:user/test  ")
            .body(())
            .unwrap();
        let creq = creq(&req, SigningSettings::default());
        assert!(!creq.contains("user-agent"));
        assert!(creq.contains("\nx-amzn-iot-principal:arn:aws:iam::123456789012:user/test\n"));
        assert!(creq.contains("\nhost;x-amz-date;x-amzn-iot-principal\n"));
    }

    #[test]
    fn single_encoding_leaves_path_untouched() {
        let req = http::Request::builder()
            .uri("https://example.amazonaws.com/assets/a%2Fb")
            .body(())
            .unwrap();
        let single = SigningSettings {
            uri_encoding: UriEncoding::Single,
            ..SigningSettings::default()
        };
        assert_eq!(creq(&req, single).lines().nth(1), Some("/assets/a%2Fb"));
        assert_eq!(
            creq(&req, SigningSettings::default()).lines().nth(1),
            Some("/assets/a%252Fb")
        );
    }
}
