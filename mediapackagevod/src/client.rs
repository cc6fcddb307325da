/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A fluent client for AWS Elemental MediaPackage VOD
//!
//! ```no_run
//! # async fn docs() -> Result<(), mediapackagevod::Error> {
//! let client = mediapackagevod::Client::from_env();
//! let asset = client
//!     .create_asset()
//!     .id("big-buck-bunny")
//!     .packaging_group_id("vod-group")
//!     .source_arn("arn:aws:s3:::vod-sources/big-buck-bunny.smil")
//!     .source_role_arn("arn:aws:iam::123456789012:role/MediaPackageVodS3Access")
//!     .send()
//!     .await?;
//! for endpoint in asset.egress_endpoints.unwrap_or_default() {
//!     println!("{:?}", endpoint.url);
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::Config;
use aws_hyper::conn::Standard;
use std::sync::Arc;

#[derive(Debug)]
pub(crate) struct Handle {
    client: aws_hyper::Client<Standard>,
    conf: Config,
}

#[derive(Clone, Debug)]
pub struct Client {
    handle: Arc<Handle>,
}

impl Client {
    /// Construct a client that sends requests over `conn`
    pub fn from_conf_conn(conf: Config, conn: Standard) -> Self {
        let client = aws_hyper::Client::new(conn).with_retry_config(conf.retry_config.clone());
        Self {
            handle: Arc::new(Handle { client, conf }),
        }
    }

    pub fn from_conf(conf: Config) -> Self {
        Self::from_conf_conn(conf, Standard::https())
    }

    /// Construct a client from the environment
    ///
    /// See [`Config::from_env`](crate::Config::from_env)
    pub fn from_env() -> Self {
        Self::from_conf(Config::from_env())
    }

    pub fn conf(&self) -> &Config {
        &self.handle.conf
    }

    /// Request counters for every operation sent by this client and its clones
    pub fn metrics(&self) -> &aws_hyper::ClientMetrics {
        self.handle.client.metrics()
    }

    pub fn create_asset(&self) -> fluent_builders::CreateAsset {
        fluent_builders::CreateAsset::new(self.handle.clone())
    }

    pub fn describe_asset(&self) -> fluent_builders::DescribeAsset {
        fluent_builders::DescribeAsset::new(self.handle.clone())
    }

    pub fn delete_asset(&self) -> fluent_builders::DeleteAsset {
        fluent_builders::DeleteAsset::new(self.handle.clone())
    }

    pub fn create_packaging_configuration(&self) -> fluent_builders::CreatePackagingConfiguration {
        fluent_builders::CreatePackagingConfiguration::new(self.handle.clone())
    }

    pub fn describe_packaging_configuration(&self) -> fluent_builders::DescribePackagingConfiguration {
        fluent_builders::DescribePackagingConfiguration::new(self.handle.clone())
    }

    pub fn list_packaging_configurations(&self) -> fluent_builders::ListPackagingConfigurations {
        fluent_builders::ListPackagingConfigurations::new(self.handle.clone())
    }

    pub fn delete_packaging_configuration(&self) -> fluent_builders::DeletePackagingConfiguration {
        fluent_builders::DeletePackagingConfiguration::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use crate::client::Handle;
    use crate::model::{CmafPackage, DashPackage, HlsPackage, MssPackage};
    use smithy_http::result::SdkError;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct CreateAsset {
        handle: Arc<Handle>,
        inner: crate::input::create_asset_input::Builder,
    }

    impl CreateAsset {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::CreateAssetOutput, SdkError<crate::error::CreateAssetError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }

        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }

        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.packaging_group_id(inp);
            self
        }

        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_packaging_group_id(inp);
            self
        }

        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.resource_id(inp);
            self
        }

        pub fn set_resource_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_resource_id(inp);
            self
        }

        pub fn source_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.source_arn(inp);
            self
        }

        pub fn set_source_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_source_arn(inp);
            self
        }

        pub fn source_role_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.source_role_arn(inp);
            self
        }

        pub fn set_source_role_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_source_role_arn(inp);
            self
        }

        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }

        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeAsset {
        handle: Arc<Handle>,
        inner: crate::input::describe_asset_input::Builder,
    }

    impl DescribeAsset {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeAssetOutput, SdkError<crate::error::DescribeAssetError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }

        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteAsset {
        handle: Arc<Handle>,
        inner: crate::input::delete_asset_input::Builder,
    }

    impl DeleteAsset {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DeleteAssetOutput, SdkError<crate::error::DeleteAssetError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }

        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct CreatePackagingConfiguration {
        handle: Arc<Handle>,
        inner: crate::input::create_packaging_configuration_input::Builder,
    }

    impl CreatePackagingConfiguration {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::CreatePackagingConfigurationOutput, SdkError<crate::error::CreatePackagingConfigurationError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn cmaf_package(mut self, inp: CmafPackage) -> Self {
            self.inner = self.inner.cmaf_package(inp);
            self
        }

        pub fn set_cmaf_package(mut self, inp: Option<CmafPackage>) -> Self {
            self.inner = self.inner.set_cmaf_package(inp);
            self
        }

        pub fn dash_package(mut self, inp: DashPackage) -> Self {
            self.inner = self.inner.dash_package(inp);
            self
        }

        pub fn set_dash_package(mut self, inp: Option<DashPackage>) -> Self {
            self.inner = self.inner.set_dash_package(inp);
            self
        }

        pub fn hls_package(mut self, inp: HlsPackage) -> Self {
            self.inner = self.inner.hls_package(inp);
            self
        }

        pub fn set_hls_package(mut self, inp: Option<HlsPackage>) -> Self {
            self.inner = self.inner.set_hls_package(inp);
            self
        }

        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }

        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }

        pub fn mss_package(mut self, inp: MssPackage) -> Self {
            self.inner = self.inner.mss_package(inp);
            self
        }

        pub fn set_mss_package(mut self, inp: Option<MssPackage>) -> Self {
            self.inner = self.inner.set_mss_package(inp);
            self
        }

        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.packaging_group_id(inp);
            self
        }

        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_packaging_group_id(inp);
            self
        }

        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.tags(k, v);
            self
        }

        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_tags(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribePackagingConfiguration {
        handle: Arc<Handle>,
        inner: crate::input::describe_packaging_configuration_input::Builder,
    }

    impl DescribePackagingConfiguration {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribePackagingConfigurationOutput, SdkError<crate::error::DescribePackagingConfigurationError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }

        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListPackagingConfigurations {
        handle: Arc<Handle>,
        inner: crate::input::list_packaging_configurations_input::Builder,
    }

    impl ListPackagingConfigurations {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListPackagingConfigurationsOutput, SdkError<crate::error::ListPackagingConfigurationsError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn max_results(mut self, inp: i32) -> Self {
            self.inner = self.inner.max_results(inp);
            self
        }

        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.inner = self.inner.set_max_results(inp);
            self
        }

        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.next_token(inp);
            self
        }

        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_next_token(inp);
            self
        }

        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.packaging_group_id(inp);
            self
        }

        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_packaging_group_id(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeletePackagingConfiguration {
        handle: Arc<Handle>,
        inner: crate::input::delete_packaging_configuration_input::Builder,
    }

    impl DeletePackagingConfiguration {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DeletePackagingConfigurationOutput, SdkError<crate::error::DeletePackagingConfigurationError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.id(inp);
            self
        }

        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_id(inp);
            self
        }
    }
}
