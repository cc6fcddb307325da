/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error;
use std::sync::Arc;

use http::Uri;
use smithy_http::endpoint::{Endpoint, EndpointPrefix, InvalidEndpoint};
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use smithy_http::property_bag::PropertyBag;

use aws_types::region::{Region, SigningRegion};
use aws_types::SigningService;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Endpoint to connect to an AWS Service
///
/// An `AwsEndpoint` captures all necessary information needed to connect to an AWS service, including:
/// - The URI of the endpoint (needed to actually send the request)
/// - The name of the service (needed downstream for signing)
/// - The signing region (which may differ from the actual region)
#[derive(Clone, Debug)]
pub struct AwsEndpoint {
    endpoint: Endpoint,
    credential_scope: CredentialScope,
}

impl AwsEndpoint {
    pub fn new(endpoint: Endpoint, credential_scope: CredentialScope) -> Self {
        AwsEndpoint {
            endpoint,
            credential_scope,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn credential_scope(&self) -> &CredentialScope {
        &self.credential_scope
    }

    pub fn set_endpoint(
        &self,
        uri: &mut http::Uri,
        endpoint_prefix: Option<&EndpointPrefix>,
    ) -> Result<(), InvalidEndpoint> {
        self.endpoint.set_endpoint(uri, endpoint_prefix)
    }
}

/// Signing overrides attached to a resolved endpoint
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialScope {
    region: Option<SigningRegion>,
    service: Option<SigningService>,
}

impl CredentialScope {
    pub fn builder() -> credential_scope::Builder {
        credential_scope::Builder::default()
    }

    pub fn region(&self) -> Option<&SigningRegion> {
        self.region.as_ref()
    }

    pub fn service(&self) -> Option<&SigningService> {
        self.service.as_ref()
    }
}

pub mod credential_scope {
    use crate::CredentialScope;
    use aws_types::region::SigningRegion;
    use aws_types::SigningService;

    #[derive(Debug, Default)]
    pub struct Builder {
        region: Option<SigningRegion>,
        service: Option<SigningService>,
    }

    impl Builder {
        pub fn region(mut self, region: impl Into<SigningRegion>) -> Self {
            self.region = Some(region.into());
            self
        }

        pub fn service(mut self, service: impl Into<SigningService>) -> Self {
            self.service = Some(service.into());
            self
        }

        pub fn build(self) -> CredentialScope {
            CredentialScope {
                region: self.region,
                service: self.service,
            }
        }
    }
}

/// Resolve the AWS Endpoint for a given region
///
/// [`Endpoint`](smithy_http::endpoint::Endpoint) implements this trait, which is how a service
/// config is pointed at a fixed endpoint such as a local mock:
/// ```rust
/// use aws_endpoint::ResolveAwsEndpoint;
/// use aws_types::region::Region;
/// use http::Uri;
/// use smithy_http::endpoint::Endpoint;
///
/// let local = Endpoint::immutable(Uri::from_static("http://localhost:8080"));
/// let resolved = local.endpoint(&Region::new("us-east-1")).unwrap();
/// assert_eq!(resolved.endpoint().uri(), &Uri::from_static("http://localhost:8080"));
/// ```
pub trait ResolveAwsEndpoint: Send + Sync {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError>;
}

/// The default endpoint resolver: `https://{service}.{region}.amazonaws.com`
///
/// Regions in the `cn-` partition resolve under `amazonaws.com.cn`.
#[derive(Clone, Debug)]
pub struct DefaultAwsEndpointResolver {
    service: &'static str,
}

impl DefaultAwsEndpointResolver {
    pub fn for_service(service: &'static str) -> Self {
        Self { service }
    }
}

impl ResolveAwsEndpoint for DefaultAwsEndpointResolver {
    fn endpoint(&self, region: &Region) -> Result<AwsEndpoint, BoxError> {
        let dns_suffix = if region.as_ref().starts_with("cn-") {
            "amazonaws.com.cn"
        } else {
            "amazonaws.com"
        };
        let uri = Uri::from_maybe_shared(format!(
            "https://{}.{}.{}",
            self.service,
            region.as_ref(),
            dns_suffix
        ))?;
        Ok(AwsEndpoint {
            endpoint: Endpoint::mutable(uri),
            credential_scope: Default::default(),
        })
    }
}

impl ResolveAwsEndpoint for Endpoint {
    fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
        Ok(AwsEndpoint {
            endpoint: self.clone(),
            credential_scope: Default::default(),
        })
    }
}

type AwsEndpointResolver = Arc<dyn ResolveAwsEndpoint>;
pub fn get_endpoint_resolver(config: &PropertyBag) -> Option<&AwsEndpointResolver> {
    config.get()
}

pub fn set_endpoint_resolver(config: &mut PropertyBag, provider: AwsEndpointResolver) {
    config.insert(provider);
}

/// Middleware Stage to Add an Endpoint to a Request
///
/// AwsEndpointStage implements [`MapRequest`](smithy_http::middleware::MapRequest). It will:
/// 1. Load an endpoint provider from the property bag.
/// 2. Load an endpoint given the [`Region`](aws_types::region::Region) in the property bag.
/// 3. Apply the endpoint to the URI in the request
/// 4. Set the `SigningRegion` and `SigningService` in the property bag to drive downstream
/// signing middleware.
#[derive(Clone, Copy, Debug, Default)]
pub struct AwsEndpointStage;

#[derive(Debug, thiserror::Error)]
pub enum AwsEndpointStageError {
    #[error("no endpoint resolver in the property bag")]
    NoEndpointResolver,
    #[error("no region in the property bag; set a region on the service config")]
    NoRegion,
    #[error("failed to resolve an endpoint: {0}")]
    EndpointResolutionError(#[source] BoxError),
    #[error("the resolved endpoint could not be applied to the request")]
    InvalidEndpoint(#[from] InvalidEndpoint),
}

impl MapRequest for AwsEndpointStage {
    type Error = AwsEndpointStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut http_req, config| {
            let provider =
                get_endpoint_resolver(config).ok_or(AwsEndpointStageError::NoEndpointResolver)?;
            let region = config
                .get::<Region>()
                .ok_or(AwsEndpointStageError::NoRegion)?;
            let endpoint = provider
                .endpoint(region)
                .map_err(AwsEndpointStageError::EndpointResolutionError)?;
            tracing::debug!(endpoint = ?endpoint, base_region = ?region, "resolved endpoint");
            let signing_region = endpoint
                .credential_scope()
                .region()
                .cloned()
                .unwrap_or_else(|| region.clone().into());
            config.insert::<SigningRegion>(signing_region);
            if let Some(signing_service) = endpoint.credential_scope().service() {
                config.insert::<SigningService>(signing_service.clone());
            }
            endpoint.set_endpoint(http_req.uri_mut(), config.get::<EndpointPrefix>())?;
            Ok(http_req)
        })
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use http::header::HOST;
    use http::Uri;

    use smithy_http::body::SdkBody;
    use smithy_http::endpoint::{Endpoint, EndpointPrefix};
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    use aws_types::region::{Region, SigningRegion};
    use aws_types::SigningService;

    use crate::{
        set_endpoint_resolver, AwsEndpoint, AwsEndpointStage, AwsEndpointStageError, BoxError,
        CredentialScope, DefaultAwsEndpointResolver, ResolveAwsEndpoint,
    };

    fn request_with(
        region: Option<Region>,
        resolver: Arc<dyn ResolveAwsEndpoint>,
        uri: &'static str,
    ) -> operation::Request {
        let mut req = http::Request::new(SdkBody::from(""));
        *req.uri_mut() = Uri::from_static(uri);
        let mut req = operation::Request::new(req);
        {
            let mut config = req.config_mut();
            if let Some(region) = region {
                config.insert(region);
            }
            config.insert(SigningService::from_static("athena"));
            set_endpoint_resolver(&mut config, resolver);
        };
        req
    }

    #[test]
    fn default_endpoint_updates_request() {
        let region = Region::new("us-east-1");
        let req = request_with(
            Some(region.clone()),
            Arc::new(DefaultAwsEndpointResolver::for_service("athena")),
            "/",
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(req.config().get(), Some(&SigningRegion::from(region)));
        assert_eq!(
            req.config().get(),
            Some(&SigningService::from_static("athena"))
        );

        let (req, _conf) = req.into_parts();
        assert_eq!(
            req.uri(),
            &Uri::from_static("https://athena.us-east-1.amazonaws.com/")
        );
        assert!(req.headers().get(HOST).is_none());
    }

    #[test]
    fn china_regions_use_their_own_suffix() {
        let endpoint = DefaultAwsEndpointResolver::for_service("iot")
            .endpoint(&Region::new("cn-north-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://iot.cn-north-1.amazonaws.com.cn")
        );
    }

    #[test]
    fn static_endpoint_keeps_path_and_query() {
        let req = request_with(
            Some(Region::new("us-west-2")),
            Arc::new(Endpoint::immutable(Uri::from_static("http://localhost:8000"))),
            "/things/my-thing?expectedVersion=3",
        );
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("http://localhost:8000/things/my-thing?expectedVersion=3")
        );
    }

    #[test]
    fn endpoint_prefix_is_applied_to_mutable_endpoints() {
        let mut req = request_with(
            Some(Region::new("us-west-2")),
            Arc::new(DefaultAwsEndpointResolver::for_service("iot")),
            "/endpoint",
        );
        req.config_mut()
            .insert(EndpointPrefix::new("data.").expect("valid prefix"));
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.http().uri(),
            &Uri::from_static("https://data.iot.us-west-2.amazonaws.com/endpoint")
        );
    }

    #[test]
    fn missing_region_is_an_error() {
        let req = request_with(
            None,
            Arc::new(DefaultAwsEndpointResolver::for_service("athena")),
            "/",
        );
        match AwsEndpointStage.apply(req) {
            Err(AwsEndpointStageError::NoRegion) => {}
            other => panic!("expected NoRegion, got {:?}", other.map(|_| ())),
        }
    }

    struct OverrideResolver;
    impl ResolveAwsEndpoint for OverrideResolver {
        fn endpoint(&self, _region: &Region) -> Result<AwsEndpoint, BoxError> {
            Ok(AwsEndpoint::new(
                Endpoint::mutable(Uri::from_static("http://www.service.com")),
                CredentialScope::builder()
                    .service(SigningService::from_static("execute-api-override"))
                    .region(SigningRegion::from_static("us-east-override"))
                    .build(),
            ))
        }
    }

    #[test]
    fn sets_service_override_when_set() {
        let req = request_with(Some(Region::new("us-east-1")), Arc::new(OverrideResolver), "/");
        let req = AwsEndpointStage.apply(req).expect("should succeed");
        assert_eq!(
            req.config().get(),
            Some(&SigningRegion::from(Region::new("us-east-override")))
        );
        assert_eq!(
            req.config().get(),
            Some(&SigningService::from_static("execute-api-override"))
        );
    }
}
