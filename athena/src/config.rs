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

/// Service configuration for Amazon Athena
///
/// A `Config` is shared by every operation built from it. Use [`Config::builder`] to set each
/// field explicitly or [`Config::from_env`] to load the region from the environment.
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
    use aws_types::os_shim_internal::Env;
    use aws_types::region::{EnvironmentProvider, Region};

    #[test]
    fn region_is_optional() {
        let config = Config::builder().build();
        assert_eq!(config.region(), None);
        let config = Config::builder().region(Region::new("eu-west-1")).build();
        assert_eq!(config.region(), Some(&Region::new("eu-west-1")));
    }

    #[test]
    fn region_from_environment() {
        let env = Env::from_slice(&[("AWS_DEFAULT_REGION", "us-west-2")]);
        let config = Config::builder()
            .region(EnvironmentProvider::from_env(env))
            .build();
        assert_eq!(config.region(), Some(&Region::new("us-west-2")));
        assert_eq!(
            format!("{:?}", config),
            "Config { region: Some(Region(\"us-west-2\")) }"
        );
    }
}
