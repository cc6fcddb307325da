/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::{CredentialsProvider, ProvideCredentials};
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver, ResolveAwsEndpoint};
use aws_http::user_agent::AwsUserAgent;
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::os_shim_internal::Env;
use aws_types::region::{ProvideRegion, Region};
use aws_types::SigningService;
use smithy_http::property_bag::PropertyBag;
use std::fmt;
use std::sync::Arc;

/// Service configuration for AWS IoT
///
/// Control plane requests are signed for `execute-api` but sent to `iot.{region}.amazonaws.com`.
/// The data plane endpoint of an account is returned by `DescribeEndpoint`.
pub struct Config {
    pub(crate) region: Option<Region>,
    pub(crate) credentials_provider: CredentialsProvider,
    pub(crate) endpoint_resolver: Arc<dyn ResolveAwsEndpoint>,
    #[cfg(feature = "client")]
    pub(crate) retry_config: aws_hyper::RetryConfig,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut config = f.debug_struct("Config");
        config.field("region", &self.region);
        config.finish()
    }
}

impl Config {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Configuration with the region taken from `AWS_REGION` (or `AWS_DEFAULT_REGION`)
    pub fn from_env() -> Self {
        Builder::default()
            .region(aws_types::region::default_provider())
            .build()
    }

    pub fn region(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Populate an operation's property bag with everything the middleware stack reads
    pub(crate) fn configure(&self, bag: &mut PropertyBag, signing_config: OperationSigningConfig) {
        set_endpoint_resolver(bag, self.endpoint_resolver.clone());
        aws_auth::set_provider(bag, self.credentials_provider.clone());
        if let Some(region) = &self.region {
            bag.insert(region.clone());
        }
        bag.insert(SigningService::from_static(crate::SIGNING_NAME));
        bag.insert(signing_config);
        bag.insert(AwsUserAgent::new_from_environment(
            Env::real(),
            crate::API_METADATA,
        ));
    }
}

#[derive(Default)]
pub struct Builder {
    region: Option<Region>,
    credentials_provider: Option<CredentialsProvider>,
    endpoint_resolver: Option<Arc<dyn ResolveAwsEndpoint>>,
    #[cfg(feature = "client")]
    retry_config: Option<aws_hyper::RetryConfig>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region(mut self, region_provider: impl ProvideRegion) -> Self {
        self.region = region_provider.region();
        self
    }

    pub fn credentials_provider(mut self, provider: impl ProvideCredentials + 'static) -> Self {
        self.credentials_provider = Some(Arc::new(provider));
        self
    }

    /// Override the endpoint, eg. `smithy_http::endpoint::Endpoint::immutable(uri)`
    pub fn endpoint_resolver(mut self, resolver: impl ResolveAwsEndpoint + 'static) -> Self {
        self.endpoint_resolver = Some(Arc::new(resolver));
        self
    }

    #[cfg(feature = "client")]
    pub fn retry_config(mut self, retry_config: aws_hyper::RetryConfig) -> Self {
        self.retry_config = Some(retry_config);
        self
    }

    pub fn build(self) -> Config {
        Config {
            region: self.region,
            credentials_provider: self
                .credentials_provider
                .unwrap_or_else(|| Arc::new(aws_auth::default_provider())),
            endpoint_resolver: self.endpoint_resolver.unwrap_or_else(|| {
                Arc::new(DefaultAwsEndpointResolver::for_service(crate::ENDPOINT_PREFIX))
            }),
            #[cfg(feature = "client")]
            retry_config: self.retry_config.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::Config;
    use aws_sig_auth::signer::OperationSigningConfig;
    use aws_types::region::Region;
    use aws_types::SigningService;
    use http::Uri;
    use smithy_http::endpoint::Endpoint;
    use smithy_http::property_bag::PropertyBag;

    #[test]
    fn default_endpoint() {
        let config = Config::builder().build();
        let endpoint = config
            .endpoint_resolver
            .endpoint(&Region::new("eu-central-1"))
            .expect("valid endpoint");
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("https://iot.eu-central-1.amazonaws.com")
        );
    }

    #[test]
    fn endpoint_override() {
        let config = Config::builder()
            .endpoint_resolver(Endpoint::immutable(Uri::from_static("http://localhost:4566")))
            .build();
        let endpoint = config
            .endpoint_resolver
            .endpoint(&Region::new("us-east-1"))
            .unwrap();
        assert_eq!(
            endpoint.endpoint().uri(),
            &Uri::from_static("http://localhost:4566")
        );
    }

    #[test]
    fn configure_without_region() {
        let config = Config::builder().build();
        let mut bag = PropertyBag::new();
        config.configure(&mut bag, OperationSigningConfig::default_config());
        assert!(bag.get::<Region>().is_none());
        assert_eq!(
            bag.get::<SigningService>(),
            Some(&SigningService::from_static("execute-api"))
        );
    }
}
