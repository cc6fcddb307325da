/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::signer::{
    OperationSigningConfig, RequestConfig, SigV4Signer, SigningError, SigningRequirements,
};
use aws_auth::{Credentials, CredentialsError, CredentialsProvider};
use aws_types::{SigningRegion, SigningService};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;
use std::time::SystemTime;
use thiserror::Error;

/// Middleware stage to sign requests with SigV4
///
/// SigV4SigningStage will load configuration from the request property bag and add
/// a signature.
///
/// Prior to signing, the following fields MUST be present in the property bag:
/// - [`SigningRegion`](SigningRegion): The region used when signing the request, eg. `us-east-1`
/// - [`SigningService`](SigningService): The name of the service to use when signing the request, eg. `athena`
/// - [`CredentialsProvider`](CredentialsProvider): A credentials provider to retrieve credentials
/// - [`OperationSigningConfig`](OperationSigningConfig): Operation specific signing configuration, eg.
///   changes to URL encoding behavior, or whether a signature is required at all.
/// If any of these fields are missing, the middleware will return an error. Operations whose
/// signing requirements are `Optional` are sent unsigned instead when no credentials can be loaded.
///
/// The following fields MAY be present in the property bag:
/// - [`SystemTime`](SystemTime): The timestamp to use when signing the request. If this field is not present
///   [`SystemTime::now`](SystemTime::now) will be used.
///
/// After signing, the [`Signature`](crate::signer::Signature) is written back into the property bag.
#[derive(Clone, Debug)]
pub struct SigV4SigningStage {
    signer: SigV4Signer,
}

impl SigV4SigningStage {
    pub fn new(signer: SigV4Signer) -> Self {
        Self { signer }
    }
}

#[derive(Debug, Error)]
pub enum SigningStageError {
    #[error("No credentials provider in the property bag")]
    MissingCredentialsProvider,
    #[error("No signing region in the property bag")]
    MissingSigningRegion,
    #[error("No signing service in the property bag")]
    MissingSigningService,
    #[error("No signing configuration in the property bag")]
    MissingSigningConfig,
    #[error("Signing failed")]
    SigningFailure(#[from] SigningError),
    #[error("Failed to load credentials from the credentials provider")]
    CredentialsLoadingError(#[from] CredentialsError),
}

fn load_credentials(config: &PropertyBag) -> Result<Credentials, SigningStageError> {
    let cred_provider = config
        .get::<CredentialsProvider>()
        .ok_or(SigningStageError::MissingCredentialsProvider)?;
    Ok(cred_provider.provide_credentials()?)
}

/// Extract the per-request signing inputs from a [`PropertyBag`](smithy_http::property_bag::PropertyBag)
fn request_config(config: &PropertyBag) -> Result<RequestConfig<'_>, SigningStageError> {
    let region = config
        .get::<SigningRegion>()
        .ok_or(SigningStageError::MissingSigningRegion)?;
    let signing_service = config
        .get::<SigningService>()
        .ok_or(SigningStageError::MissingSigningService)?;
    Ok(RequestConfig {
        request_ts: config
            .get::<SystemTime>()
            .copied()
            .unwrap_or_else(SystemTime::now),
        region,
        service: signing_service,
        payload_override: None,
    })
}

impl MapRequest for SigV4SigningStage {
    type Error = SigningStageError;

    fn apply(&self, req: Request) -> Result<Request, Self::Error> {
        req.augment(|mut req, config| {
            let operation_config = config
                .get::<OperationSigningConfig>()
                .ok_or(SigningStageError::MissingSigningConfig)?;
            let creds = match operation_config.signing_requirements {
                SigningRequirements::Disabled => return Ok(req),
                SigningRequirements::Optional => match load_credentials(config) {
                    Ok(creds) => creds,
                    Err(err) => {
                        tracing::debug!(error = %err, "no credentials available; sending the request unsigned");
                        return Ok(req);
                    }
                },
                SigningRequirements::Required => load_credentials(config)?,
            };
            let request_config = request_config(config)?;
            let signature = self
                .signer
                .sign(operation_config, &request_config, &creds, &mut req)?;
            config.insert(signature);
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::{SigV4SigningStage, SigningStageError};
    use crate::signer::{OperationSigningConfig, SigV4Signer, Signature, SigningRequirements};
    use aws_auth::{set_provider, Credentials, CredentialsProvider};
    use aws_endpoint::{set_endpoint_resolver, AwsEndpointStage, DefaultAwsEndpointResolver};
    use aws_types::region::Region;
    use aws_types::SigningService;
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;
    use std::sync::Arc;
    use std::time::{Duration, UNIX_EPOCH};

    fn request(signing_config: OperationSigningConfig, creds: Option<Credentials>) -> operation::Request {
        let req = http::Request::builder()
            .uri("/")
            .body(SdkBody::from("{}"))
            .unwrap();
        let mut req = operation::Request::new(req);
        {
            let mut config = req.config_mut();
            config.insert(Region::new("us-east-1"));
            config.insert(SigningService::from_static("cognito-identity"));
            config.insert(UNIX_EPOCH + Duration::new(1611160427, 0));
            config.insert(signing_config);
            set_endpoint_resolver(
                &mut config,
                Arc::new(DefaultAwsEndpointResolver::for_service("cognito-identity")),
            );
            if let Some(creds) = creds {
                set_provider(&mut config, Arc::new(creds));
            }
        }
        AwsEndpointStage.apply(req).expect("endpoint resolves")
    }

    fn signer() -> SigV4SigningStage {
        SigV4SigningStage::new(SigV4Signer::new())
    }

    #[test]
    fn signs_request_after_endpoint_resolution() {
        let req = request(
            OperationSigningConfig::default_config(),
            Some(Credentials::from_keys("AKID", "secret", None)),
        );
        let req = signer().apply(req).expect("signing succeeds");
        assert!(req.config().get::<Signature>().is_some());
        let (req, _) = req.into_parts();
        let authorization = req.headers()[AUTHORIZATION].to_str().unwrap();
        assert!(authorization.starts_with(
            "AWS4-HMAC-SHA256 Credential=AKID/20210120/us-east-1/cognito-identity/aws4_request, SignedHeaders=host;x-amz-date, Signature="
        ));
        assert_eq!(req.headers()["x-amz-date"], "20210120T163347Z");
        assert_eq!(req.headers()["host"], "cognito-identity.us-east-1.amazonaws.com");
    }

    #[test]
    fn required_signing_without_credentials_fails() {
        let req = request(OperationSigningConfig::default_config(), None);
        match signer().apply(req) {
            Err(SigningStageError::MissingCredentialsProvider) => {}
            other => panic!("expected a missing provider, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn optional_signing_without_credentials_is_unsigned() {
        let req = request(OperationSigningConfig::optional(), None);
        let req = signer().apply(req).expect("unsigned requests are allowed");
        assert!(req.config().get::<Signature>().is_none());
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn optional_signing_with_credentials_is_signed() {
        let req = request(
            OperationSigningConfig::optional(),
            Some(Credentials::from_keys("AKID", "secret", None)),
        );
        let req = signer().apply(req).expect("signing succeeds");
        assert!(req.http().headers().contains_key(AUTHORIZATION));
    }

    #[test]
    fn disabled_signing_never_signs() {
        let mut config = OperationSigningConfig::default_config();
        config.signing_requirements = SigningRequirements::Disabled;
        let req = request(config, Some(Credentials::from_keys("AKID", "secret", None)));
        let req = signer().apply(req).expect("nothing to sign");
        assert!(req.http().headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn per_request_credentials_replace_configured_credentials() {
        let mut req = request(
            OperationSigningConfig::default_config(),
            Some(Credentials::from_keys("CONFIGURED", "secret", None)),
        );
        let override_provider: CredentialsProvider =
            Arc::new(Credentials::from_keys("PER_REQUEST", "secret", Some("token".into())));
        set_provider(&mut req.config_mut(), override_provider);
        let req = signer().apply(req).expect("signing succeeds");
        let headers = req.http().headers();
        assert!(headers[AUTHORIZATION]
            .to_str()
            .unwrap()
            .contains("Credential=PER_REQUEST/"));
        assert_eq!(headers["x-amz-security-token"], "token");
    }
}
