/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Header-based SigV4 signing for in-memory request bodies

mod canonical_request;

use canonical_request::{CanonicalRequest, StringToSign, HMAC_256};
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use http::header::{HeaderName, HeaderValue, AUTHORIZATION, HOST};
use sha2::{Digest, Sha256};
use std::time::SystemTime;

pub(crate) const X_AMZ_SECURITY_TOKEN: &str = "x-amz-security-token";
pub(crate) const X_AMZ_DATE: &str = "x-amz-date";
pub(crate) const X_AMZ_CONTENT_SHA_256: &str = "x-amz-content-sha256";

#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("the request URI must have an authority to be signed")]
    MissingAuthority,
    #[error("signing produced an invalid header value")]
    InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
    #[error("a request header is not valid for signing")]
    UnsignableHeader(#[from] http::header::ToStrError),
    #[error("the request URI could not be normalized")]
    InvalidUri(#[from] http::uri::InvalidUri),
    #[error("the request URI could not be rebuilt")]
    InvalidUriParts(#[from] http::uri::InvalidUriParts),
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum UriEncoding {
    /// Re-encode `%` in the already-encoded path as `%25`
    Double,
    Single,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum PayloadChecksumKind {
    /// Add an `x-amz-content-sha256` header carrying the payload hash
    XAmzSha256,
    NoHeader,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SigningSettings {
    pub uri_encoding: UriEncoding,
    pub payload_checksum_kind: PayloadChecksumKind,
}

impl Default for SigningSettings {
    fn default() -> Self {
        SigningSettings {
            uri_encoding: UriEncoding::Double,
            payload_checksum_kind: PayloadChecksumKind::NoHeader,
        }
    }
}

/// The body of a request as seen by the signer
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SignableBody<'a> {
    Bytes(&'a [u8]),
    UnsignedPayload,
    /// A hex-encoded SHA-256 of the payload computed elsewhere
    Precomputed(String),
}

pub(crate) struct SigningParams<'a> {
    pub(crate) access_key: &'a str,
    pub(crate) secret_key: &'a str,
    pub(crate) security_token: Option<&'a str>,
    pub(crate) region: &'a str,
    pub(crate) service_name: &'a str,
    pub(crate) time: SystemTime,
    pub(crate) settings: SigningSettings,
}

/// Sign `request` in place, returning the hex-encoded signature
///
/// `host`, `x-amz-date`, `authorization`, and when applicable `x-amz-security-token` and
/// `x-amz-content-sha256` are written to the request. A `host` header already on the request is
/// left as is.
pub(crate) fn sign<B>(
    request: &mut http::Request<B>,
    body: SignableBody<'_>,
    params: &SigningParams<'_>,
) -> Result<String, SigningError> {
    let date_time = DateTime::<Utc>::from(params.time);
    let creq = CanonicalRequest::from(
        request,
        &body,
        &params.settings,
        date_time,
        params.security_token,
    )?;
    let hashed_creq = sha256_hex_string(creq.to_string().as_bytes());
    let sts = StringToSign::new(date_time, params.region, params.service_name, &hashed_creq);
    let signing_key = generate_signing_key(
        params.secret_key,
        date_time,
        params.region,
        params.service_name,
    );
    let signature = calculate_signature(&signing_key, sts.to_string().as_bytes());

    let authorization = format!(
        "{} Credential={}/{}, SignedHeaders={}, Signature={}",
        HMAC_256, params.access_key, sts.scope, creq.signed_headers, signature
    );

    let headers = request.headers_mut();
    if !headers.contains_key(HOST) {
        if let Some(host) = creq.headers.get(HOST.as_str()) {
            headers.insert(HOST, HeaderValue::from_str(host)?);
        }
    }
    headers.insert(
        HeaderName::from_static(X_AMZ_DATE),
        HeaderValue::from_str(&creq.date_time)?,
    );
    if let Some(token) = params.security_token {
        let mut token = HeaderValue::from_str(token)?;
        token.set_sensitive(true);
        headers.insert(HeaderName::from_static(X_AMZ_SECURITY_TOKEN), token);
    }
    if params.settings.payload_checksum_kind == PayloadChecksumKind::XAmzSha256 {
        headers.insert(
            HeaderName::from_static(X_AMZ_CONTENT_SHA_256),
            HeaderValue::from_str(&creq.content_sha256)?,
        );
    }
    let mut authorization = HeaderValue::from_str(&authorization)?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    Ok(signature)
}

/// HashedPayload = Lowercase(HexEncode(Hash(requestPayload)))
pub(crate) fn sha256_hex_string(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(Sha256::digest(bytes.as_ref()))
}

fn hmac_sha256(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
    mac.update(data);
    mac.finalize().into_bytes().to_vec()
}

fn calculate_signature(signing_key: &[u8], string_to_sign: &[u8]) -> String {
    hex::encode(hmac_sha256(signing_key, string_to_sign))
}

fn generate_signing_key(
    secret: &str,
    date_time: DateTime<Utc>,
    region: &str,
    service: &str,
) -> Vec<u8> {
    // kSecret = your secret access key
    // kDate = HMAC("AWS4" + kSecret, Date)
    // kRegion = HMAC(kDate, Region)
    // kService = HMAC(kRegion, Service)
    // kSigning = HMAC(kService, "aws4_request")
    let secret = format!("AWS4{}", secret);
    let date = canonical_request::format_date(&date_time);
    let tag = hmac_sha256(secret.as_bytes(), date.as_bytes());
    let tag = hmac_sha256(&tag, region.as_bytes());
    let tag = hmac_sha256(&tag, service.as_bytes());
    hmac_sha256(&tag, b"aws4_request")
}

#[cfg(test)]
mod test {
    use super::{sign, SignableBody, SigningParams, SigningSettings};
    use crate::sigv4::PayloadChecksumKind;
    use http::header::AUTHORIZATION;
    use std::time::{Duration, UNIX_EPOCH};

    // 2015-08-30T12:36:00Z, the timestamp of the AWS SigV4 test suite
    fn suite_time() -> std::time::SystemTime {
        UNIX_EPOCH + Duration::from_secs(1440938160)
    }

    fn params<'a>(service_name: &'a str, security_token: Option<&'a str>) -> SigningParams<'a> {
        SigningParams {
            access_key: "AKIDEXAMPLE",
            secret_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            security_token,
            region: "us-east-1",
            service_name,
            time: suite_time(),
            settings: SigningSettings::default(),
        }
    }

    #[test]
    fn get_vanilla() {
        let mut req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let signature = sign(&mut req, SignableBody::Bytes(&[]), &params("service", None)).unwrap();
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(
            req.headers()[AUTHORIZATION],
            "AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20150830/us-east-1/service/aws4_request, SignedHeaders=host;x-amz-date, Signature=5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(req.headers()["x-amz-date"], "20150830T123600Z");
        assert_eq!(req.headers()["host"], "example.amazonaws.com");
    }

    #[test]
    fn get_vanilla_query_order_key_case() {
        let mut req = http::Request::builder()
            .uri("https://example.amazonaws.com/?Param2=value2&Param1=value1")
            .body(())
            .unwrap();
        let signature = sign(&mut req, SignableBody::Bytes(&[]), &params("service", None)).unwrap();
        assert_eq!(
            signature,
            "b97d918cfa904a5beff61c982a1b6f458b799221646efd99d3219ec94cdf2500"
        );
    }

    #[test]
    fn json_post_with_session_token() {
        let body = br#"{"QueryString":"SELECT 1"}"#;
        let mut req = http::Request::builder()
            .method("POST")
            .uri("https://athena.us-east-1.amazonaws.com/")
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AmazonAthena.StartQueryExecution")
            .header("user-agent", "aws-sdk-rust/0.123.test")
            .body(())
            .unwrap();
        let signature = sign(
            &mut req,
            SignableBody::Bytes(body),
            &params("athena", Some("session-token")),
        )
        .unwrap();
        assert_eq!(
            signature,
            "f086979ba24105fd23c7234e56f2a076e9ec5dbca17b1acc9a9a61c4fd2d7244"
        );
        assert_eq!(req.headers()["x-amz-security-token"], "session-token");
        assert!(req.headers()["x-amz-security-token"].is_sensitive());
        assert!(req.headers()[AUTHORIZATION]
            .to_str()
            .unwrap()
            .contains("SignedHeaders=content-type;host;x-amz-date;x-amz-security-token;x-amz-target,"));
    }

    #[test]
    fn percent_encoded_paths_are_double_encoded() {
        let mut req = http::Request::builder()
            .uri("https://iot.us-east-1.amazonaws.com/things/my%20thing")
            .body(())
            .unwrap();
        let signature = sign(
            &mut req,
            SignableBody::Bytes(&[]),
            &params("execute-api", None),
        )
        .unwrap();
        assert_eq!(
            signature,
            "89621a6b3cf34f1e6a4bb9ba8a44172641cbfaff20e7fbaab30406a3daaa56ce"
        );
    }

    #[test]
    fn content_sha256_header_when_requested() {
        let mut req = http::Request::builder()
            .uri("https://example.amazonaws.com/")
            .body(())
            .unwrap();
        let mut params = params("service", None);
        params.settings.payload_checksum_kind = PayloadChecksumKind::XAmzSha256;
        sign(&mut req, SignableBody::Bytes(&[]), &params).unwrap();
        assert_eq!(
            req.headers()["x-amz-content-sha256"],
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn explicit_host_header_is_kept() {
        let mut req = http::Request::builder()
            .uri("https://10.0.0.1:8443/")
            .header("host", "example.amazonaws.com")
            .body(())
            .unwrap();
        let signature = sign(&mut req, SignableBody::Bytes(&[]), &params("service", None)).unwrap();
        assert_eq!(
            signature,
            "5fa00fa31553b73ebf1942676e86291e8372ff2a2260956d9b8aae1d763fbf31"
        );
        assert_eq!(req.headers().get_all("host").iter().count(), 1);
        assert_eq!(req.headers()["host"], "example.amazonaws.com");
    }
}
