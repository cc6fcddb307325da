/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::sigv4::{self, PayloadChecksumKind, SigningParams, SigningSettings, UriEncoding};
use aws_types::region::SigningRegion;
use aws_types::{Credentials, SigningService};
use http::Uri;
use once_cell::sync::Lazy;
use regex::Regex;
use smithy_http::body::SdkBody;
use std::borrow::Cow;
use std::fmt;
use std::time::SystemTime;

pub use crate::sigv4::{SignableBody, SigningError};

const EXPIRED_CREDENTIALS_WARNING: &str =
    "The credentials used to sign this request have expired; the service will likely reject it.";

static TWO_OR_MORE_LEADING_FORWARD_SLASHES: Lazy<Regex> =
    Lazy::new(|| Regex::new("^(/|%2F){2,}").expect("valid regex"));

#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum SigningAlgorithm {
    SigV4,
}

/// Signing Configuration for an Operation
///
/// Although these fields MAY be customized on a per request basis, they are generally static
/// for a given operation
#[derive(Clone, PartialEq, Eq, Debug)]
#[non_exhaustive]
pub struct OperationSigningConfig {
    pub algorithm: SigningAlgorithm,
    pub signing_options: SigningOptions,
    pub signing_requirements: SigningRequirements,
}

impl OperationSigningConfig {
    /// The signing configuration used by most operations
    pub fn default_config() -> Self {
        OperationSigningConfig {
            algorithm: SigningAlgorithm::SigV4,
            signing_options: SigningOptions {
                double_uri_encode: true,
                content_sha256_header: false,
            },
            signing_requirements: SigningRequirements::Required,
        }
    }

    /// Signing configuration for operations that may be called without credentials
    pub fn optional() -> Self {
        OperationSigningConfig {
            signing_requirements: SigningRequirements::Optional,
            ..Self::default_config()
        }
    }
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum SigningRequirements {
    /// A signature MAY be added if credentials are defined
    Optional,

    /// A signature MUST be added.
    ///
    /// If no credentials are provided, this will return an error without dispatching the operation.
    Required,

    /// A signature MUST NOT be added.
    Disabled,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub struct SigningOptions {
    pub double_uri_encode: bool,
    pub content_sha256_header: bool,
}

/// Signing Configuration for an individual Request
///
/// These fields may vary on a per-request basis
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RequestConfig<'a> {
    pub request_ts: SystemTime,
    pub region: &'a SigningRegion,
    pub service: &'a SigningService,
    pub payload_override: Option<&'a SignableBody<'static>>,
}

/// The hex-encoded signature of a signed request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature(String);

impl Signature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Signature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Default)]
pub struct SigV4Signer {
    _private: (),
}

impl fmt::Debug for SigV4Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigV4Signer").finish()
    }
}

impl SigV4Signer {
    pub fn new() -> Self {
        SigV4Signer { _private: () }
    }

    fn settings(operation_config: &OperationSigningConfig) -> SigningSettings {
        SigningSettings {
            uri_encoding: if operation_config.signing_options.double_uri_encode {
                UriEncoding::Double
            } else {
                UriEncoding::Single
            },
            payload_checksum_kind: if operation_config.signing_options.content_sha256_header {
                PayloadChecksumKind::XAmzSha256
            } else {
                PayloadChecksumKind::NoHeader
            },
        }
    }

    fn signing_params<'a>(
        settings: SigningSettings,
        credentials: &'a Credentials,
        request_config: &'a RequestConfig<'a>,
    ) -> SigningParams<'a> {
        if let Some(expiry) = credentials.expiry() {
            if request_config.request_ts >= expiry {
                tracing::warn!(
                    provider = credentials.provider_name(),
                    "{}",
                    EXPIRED_CREDENTIALS_WARNING
                );
            }
        }
        SigningParams {
            access_key: credentials.access_key_id(),
            secret_key: credentials.secret_access_key(),
            security_token: credentials.session_token(),
            region: request_config.region.as_ref(),
            service_name: request_config.service.as_ref(),
            time: request_config.request_ts,
            settings,
        }
    }

    /// Sign a request using the SigV4 Protocol
    ///
    /// Although this function may be used, end users will not typically
    /// interact with this code. It is generally used via middleware in the request pipeline. See [`SigV4SigningStage`](crate::middleware::SigV4SigningStage).
    pub fn sign(
        &self,
        operation_config: &OperationSigningConfig,
        request_config: &RequestConfig<'_>,
        credentials: &Credentials,
        request: &mut http::Request<SdkBody>,
    ) -> Result<Signature, SigningError> {
        let settings = Self::settings(operation_config);
        let signing_params = Self::signing_params(settings, credentials, request_config);

        // Multiple leading forward slashes must be removed from the request itself, not only
        // from the canonical request, or the service computes a different signature.
        if let Cow::Owned(forward_slashes_deduped) =
            dedupe_leading_forward_slashes(request.uri().path())
        {
            let path_and_query = match request.uri().query() {
                Some(query) => format!("{}?{}", forward_slashes_deduped, query),
                None => forward_slashes_deduped,
            };
            let mut parts = request.uri().clone().into_parts();
            parts.path_and_query = Some(path_and_query.parse()?);
            *request.uri_mut() = Uri::from_parts(parts)?;
        }

        // A body that is already in memory is hashed directly. Anything else is signed as
        // UNSIGNED-PAYLOAD.
        let signable_body = request_config.payload_override.cloned().unwrap_or_else(|| {
            request
                .body()
                .bytes()
                .map(|bytes| SignableBody::Precomputed(sigv4::sha256_hex_string(bytes)))
                .unwrap_or(SignableBody::UnsignedPayload)
        });
        let signature = sigv4::sign(request, signable_body, &signing_params)?;
        Ok(Signature(signature))
    }
}

fn dedupe_leading_forward_slashes(uri_path: &str) -> Cow<'_, str> {
    TWO_OR_MORE_LEADING_FORWARD_SLASHES.replace(uri_path, "/")
}

#[cfg(test)]
mod tests {
    use super::{
        dedupe_leading_forward_slashes, OperationSigningConfig, RequestConfig, SigV4Signer,
        EXPIRED_CREDENTIALS_WARNING,
    };
    use crate::sigv4::SigningSettings;
    use aws_types::region::SigningRegion;
    use aws_types::{Credentials, SigningService};
    use http::Uri;
    use smithy_http::body::SdkBody;
    use std::borrow::Cow;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};
    use tracing_test::traced_test;

    #[test]
    #[traced_test]
    fn expiration_warning() {
        let now = SystemTime::UNIX_EPOCH + Duration::from_secs(1000);
        let credentials = Credentials::new(
            "test-access-key",
            "test-secret-key",
            Some("test-session-token".into()),
            Some(now + Duration::from_secs(100)),
            "test",
        );
        let region = SigningRegion::from_static("test");
        let service = SigningService::from_static("test");
        let request_config = RequestConfig {
            request_ts: now,
            region: &region,
            service: &service,
            payload_override: None,
        };
        SigV4Signer::signing_params(SigningSettings::default(), &credentials, &request_config);
        assert!(!logs_contain(EXPIRED_CREDENTIALS_WARNING));

        let later = RequestConfig {
            request_ts: now + Duration::from_secs(200),
            ..request_config.clone()
        };
        SigV4Signer::signing_params(SigningSettings::default(), &credentials, &later);
        assert!(logs_contain(EXPIRED_CREDENTIALS_WARNING));
    }

    #[test]
    fn sign_request_with_leading_slashes() {
        let creds = Credentials::from_keys("AKIDEXAMPLE", "secret", None);
        let region = SigningRegion::from_static("us-east-1");
        let service = SigningService::from_static("mediapackage-vod");
        let request_config = RequestConfig {
            request_ts: UNIX_EPOCH + Duration::from_secs(1440938160),
            region: &region,
            service: &service,
            payload_override: None,
        };
        let mut req = http::Request::builder()
            .uri("https://mediapackage-vod.us-east-1.amazonaws.com//assets?maxResults=1")
            .body(SdkBody::from(""))
            .unwrap();
        let signature = SigV4Signer::new()
            .sign(
                &OperationSigningConfig::default_config(),
                &request_config,
                &creds,
                &mut req,
            )
            .expect("signing succeeds");
        assert_eq!(signature.as_str().len(), 64);
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://mediapackage-vod.us-east-1.amazonaws.com/assets?maxResults=1")
        );
        assert!(req.headers().contains_key("authorization"));
    }

    #[test]
    fn dedupe_leading_forward_slashes_should_work_when_input_contains_leading_forward_slashes() {
        assert_eq!(
            dedupe_leading_forward_slashes("//foo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
        assert_eq!(
            dedupe_leading_forward_slashes("///foo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
    }

    #[test]
    fn dedupe_leading_forward_slashes_should_work_when_input_contains_percent_encoded_leading_forward_slashes(
    ) {
        assert_eq!(
            dedupe_leading_forward_slashes("/%2Ffoo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
        assert_eq!(
            dedupe_leading_forward_slashes("//%2Ffoo/bar"),
            Cow::<'_, str>::Owned("/foo/bar".to_owned())
        );
    }

    #[test]
    fn dedupe_leading_forward_slashes_should_not_modify_input_when_multiple_slashes_appear_in_the_middle_of_input(
    ) {
        assert_eq!(
            dedupe_leading_forward_slashes("/foo//bar"),
            Cow::<'_, str>::Borrowed("/foo//bar")
        );
        assert_eq!(
            dedupe_leading_forward_slashes("/foo/%2Fbar"),
            Cow::<'_, str>::Borrowed("/foo/%2Fbar")
        );
    }
}
