/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs

use crate::config::Config;
use crate::model::{CmafPackage, DashPackage, HlsPackage, MssPackage};
use aws_http::AwsErrorRetryPolicy;
use smithy_http::operation::{BuildError, Operation};
use smithy_http::query;
use std::collections::HashMap;

/// See [`CreateAssetInput`](crate::input::CreateAssetInput)
pub mod create_asset_input {
    use crate::input::CreateAssetInput;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`CreateAssetInput`](crate::input::CreateAssetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
        packaging_group_id: Option<String>,
        resource_id: Option<String>,
        source_arn: Option<String>,
        source_role_arn: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.packaging_group_id = Some(inp.into());
            self
        }
        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.packaging_group_id = inp;
            self
        }
        pub fn resource_id(mut self, inp: impl Into<String>) -> Self {
            self.resource_id = Some(inp.into());
            self
        }
        pub fn set_resource_id(mut self, inp: Option<String>) -> Self {
            self.resource_id = inp;
            self
        }
        pub fn source_arn(mut self, inp: impl Into<String>) -> Self {
            self.source_arn = Some(inp.into());
            self
        }
        pub fn set_source_arn(mut self, inp: Option<String>) -> Self {
            self.source_arn = inp;
            self
        }
        pub fn source_role_arn(mut self, inp: impl Into<String>) -> Self {
            self.source_role_arn = Some(inp.into());
            self
        }
        pub fn set_source_role_arn(mut self, inp: Option<String>) -> Self {
            self.source_role_arn = inp;
            self
        }
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateAssetInput`](crate::input::CreateAssetInput)
        pub fn build(self) -> Result<CreateAssetInput, BuildError> {
            Ok(CreateAssetInput {
                id: self.id,
                packaging_group_id: self.packaging_group_id,
                resource_id: self.resource_id,
                source_arn: self.source_arn,
                source_role_arn: self.source_role_arn,
                tags: self.tags,
            })
        }
    }
}
impl CreateAssetInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateAsset, AwsErrorRetryPolicy>, BuildError> {
        let request = crate::protocol::with_json_body(
            crate::protocol::request_builder(http::Method::POST, String::from("/assets")),
            self,
        )?;
        crate::protocol::build_operation(
            config,
            "CreateAsset",
            request,
            crate::operation::CreateAsset::new(),
        )
    }
    pub fn builder() -> crate::input::create_asset_input::Builder {
        crate::input::create_asset_input::Builder::default()
    }
}

/// See [`DescribeAssetInput`](crate::input::DescribeAssetInput)
pub mod describe_asset_input {
    use crate::input::DescribeAssetInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeAssetInput`](crate::input::DescribeAssetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeAssetInput`](crate::input::DescribeAssetInput)
        pub fn build(self) -> Result<DescribeAssetInput, BuildError> {
            Ok(DescribeAssetInput {
                id: self.id,
            })
        }
    }
}
impl DescribeAssetInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeAsset, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/assets/{}",
            crate::protocol::label("id", self.id.as_deref())?
        );
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::GET,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DescribeAsset",
            request,
            crate::operation::DescribeAsset::new(),
        )
    }
    pub fn builder() -> crate::input::describe_asset_input::Builder {
        crate::input::describe_asset_input::Builder::default()
    }
}

/// See [`DeleteAssetInput`](crate::input::DeleteAssetInput)
pub mod delete_asset_input {
    use crate::input::DeleteAssetInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteAssetInput`](crate::input::DeleteAssetInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteAssetInput`](crate::input::DeleteAssetInput)
        pub fn build(self) -> Result<DeleteAssetInput, BuildError> {
            Ok(DeleteAssetInput {
                id: self.id,
            })
        }
    }
}
impl DeleteAssetInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteAsset, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/assets/{}",
            crate::protocol::label("id", self.id.as_deref())?
        );
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::DELETE,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DeleteAsset",
            request,
            crate::operation::DeleteAsset::new(),
        )
    }
    pub fn builder() -> crate::input::delete_asset_input::Builder {
        crate::input::delete_asset_input::Builder::default()
    }
}

/// See [`CreatePackagingConfigurationInput`](crate::input::CreatePackagingConfigurationInput)
pub mod create_packaging_configuration_input {
    use crate::input::CreatePackagingConfigurationInput;
    use crate::model::{CmafPackage, DashPackage, HlsPackage, MssPackage};
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`CreatePackagingConfigurationInput`](crate::input::CreatePackagingConfigurationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        cmaf_package: Option<CmafPackage>,
        dash_package: Option<DashPackage>,
        hls_package: Option<HlsPackage>,
        id: Option<String>,
        mss_package: Option<MssPackage>,
        packaging_group_id: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn cmaf_package(mut self, inp: CmafPackage) -> Self {
            self.cmaf_package = Some(inp);
            self
        }
        pub fn set_cmaf_package(mut self, inp: Option<CmafPackage>) -> Self {
            self.cmaf_package = inp;
            self
        }
        pub fn dash_package(mut self, inp: DashPackage) -> Self {
            self.dash_package = Some(inp);
            self
        }
        pub fn set_dash_package(mut self, inp: Option<DashPackage>) -> Self {
            self.dash_package = inp;
            self
        }
        pub fn hls_package(mut self, inp: HlsPackage) -> Self {
            self.hls_package = Some(inp);
            self
        }
        pub fn set_hls_package(mut self, inp: Option<HlsPackage>) -> Self {
            self.hls_package = inp;
            self
        }
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        pub fn mss_package(mut self, inp: MssPackage) -> Self {
            self.mss_package = Some(inp);
            self
        }
        pub fn set_mss_package(mut self, inp: Option<MssPackage>) -> Self {
            self.mss_package = inp;
            self
        }
        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.packaging_group_id = Some(inp.into());
            self
        }
        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.packaging_group_id = inp;
            self
        }
        pub fn tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.tags = Some(hash_map);
            self
        }
        pub fn set_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.tags = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreatePackagingConfigurationInput`](crate::input::CreatePackagingConfigurationInput)
        pub fn build(self) -> Result<CreatePackagingConfigurationInput, BuildError> {
            Ok(CreatePackagingConfigurationInput {
                cmaf_package: self.cmaf_package,
                dash_package: self.dash_package,
                hls_package: self.hls_package,
                id: self.id,
                mss_package: self.mss_package,
                packaging_group_id: self.packaging_group_id,
                tags: self.tags,
            })
        }
    }
}
impl CreatePackagingConfigurationInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreatePackagingConfiguration, AwsErrorRetryPolicy>, BuildError> {
        let request = crate::protocol::with_json_body(
            crate::protocol::request_builder(http::Method::POST, String::from("/packaging_configurations")),
            self,
        )?;
        crate::protocol::build_operation(
            config,
            "CreatePackagingConfiguration",
            request,
            crate::operation::CreatePackagingConfiguration::new(),
        )
    }
    pub fn builder() -> crate::input::create_packaging_configuration_input::Builder {
        crate::input::create_packaging_configuration_input::Builder::default()
    }
}

/// See [`DescribePackagingConfigurationInput`](crate::input::DescribePackagingConfigurationInput)
pub mod describe_packaging_configuration_input {
    use crate::input::DescribePackagingConfigurationInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribePackagingConfigurationInput`](crate::input::DescribePackagingConfigurationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribePackagingConfigurationInput`](crate::input::DescribePackagingConfigurationInput)
        pub fn build(self) -> Result<DescribePackagingConfigurationInput, BuildError> {
            Ok(DescribePackagingConfigurationInput {
                id: self.id,
            })
        }
    }
}
impl DescribePackagingConfigurationInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribePackagingConfiguration, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/packaging_configurations/{}",
            crate::protocol::label("id", self.id.as_deref())?
        );
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::GET,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DescribePackagingConfiguration",
            request,
            crate::operation::DescribePackagingConfiguration::new(),
        )
    }
    pub fn builder() -> crate::input::describe_packaging_configuration_input::Builder {
        crate::input::describe_packaging_configuration_input::Builder::default()
    }
}

/// See [`ListPackagingConfigurationsInput`](crate::input::ListPackagingConfigurationsInput)
pub mod list_packaging_configurations_input {
    use crate::input::ListPackagingConfigurationsInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`ListPackagingConfigurationsInput`](crate::input::ListPackagingConfigurationsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        max_results: Option<i32>,
        next_token: Option<String>,
        packaging_group_id: Option<String>,
    }
    impl Builder {
        pub fn max_results(mut self, inp: i32) -> Self {
            self.max_results = Some(inp);
            self
        }
        pub fn set_max_results(mut self, inp: Option<i32>) -> Self {
            self.max_results = inp;
            self
        }
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn packaging_group_id(mut self, inp: impl Into<String>) -> Self {
            self.packaging_group_id = Some(inp.into());
            self
        }
        pub fn set_packaging_group_id(mut self, inp: Option<String>) -> Self {
            self.packaging_group_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListPackagingConfigurationsInput`](crate::input::ListPackagingConfigurationsInput)
        pub fn build(self) -> Result<ListPackagingConfigurationsInput, BuildError> {
            Ok(ListPackagingConfigurationsInput {
                max_results: self.max_results,
                next_token: self.next_token,
                packaging_group_id: self.packaging_group_id,
            })
        }
    }
}
impl ListPackagingConfigurationsInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListPackagingConfigurations, AwsErrorRetryPolicy>, BuildError> {
        let mut uri = String::from("/packaging_configurations");
        let mut query = query::Writer::new(&mut uri);
        query.push_opt("maxResults", self.max_results.map(|v| v.to_string()));
        query.push_opt("nextToken", self.next_token.as_ref());
        query.push_opt("packagingGroupId", self.packaging_group_id.as_ref());
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::GET,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "ListPackagingConfigurations",
            request,
            crate::operation::ListPackagingConfigurations::new(),
        )
    }
    pub fn builder() -> crate::input::list_packaging_configurations_input::Builder {
        crate::input::list_packaging_configurations_input::Builder::default()
    }
}

/// See [`DeletePackagingConfigurationInput`](crate::input::DeletePackagingConfigurationInput)
pub mod delete_packaging_configuration_input {
    use crate::input::DeletePackagingConfigurationInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeletePackagingConfigurationInput`](crate::input::DeletePackagingConfigurationInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        id: Option<String>,
    }
    impl Builder {
        pub fn id(mut self, inp: impl Into<String>) -> Self {
            self.id = Some(inp.into());
            self
        }
        pub fn set_id(mut self, inp: Option<String>) -> Self {
            self.id = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeletePackagingConfigurationInput`](crate::input::DeletePackagingConfigurationInput)
        pub fn build(self) -> Result<DeletePackagingConfigurationInput, BuildError> {
            Ok(DeletePackagingConfigurationInput {
                id: self.id,
            })
        }
    }
}
impl DeletePackagingConfigurationInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeletePackagingConfiguration, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/packaging_configurations/{}",
            crate::protocol::label("id", self.id.as_deref())?
        );
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::DELETE,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DeletePackagingConfiguration",
            request,
            crate::operation::DeletePackagingConfiguration::new(),
        )
    }
    pub fn builder() -> crate::input::delete_packaging_configuration_input::Builder {
        crate::input::delete_packaging_configuration_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct CreateAssetInput {
    /// <p>The unique identifier for the Asset.</p>
    #[serde(rename = "id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// <p>The ID of the PackagingGroup for the Asset.</p>
    #[serde(rename = "packagingGroupId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_group_id: Option<String>,
    /// <p>The resource ID to include in SPEKE key requests.</p>
    #[serde(rename = "resourceId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    /// <p>ARN of the source object in S3.</p>
    #[serde(rename = "sourceArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_arn: Option<String>,
    /// <p>The IAM role ARN used to access the source S3 bucket.</p>
    #[serde(rename = "sourceRoleArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_role_arn: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DescribeAssetInput {
    /// <p>The ID of an MediaPackage VOD Asset resource.</p>
    pub id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DeleteAssetInput {
    /// <p>The ID of the MediaPackage VOD Asset resource to delete.</p>
    pub id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct CreatePackagingConfigurationInput {
    #[serde(rename = "cmafPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cmaf_package: Option<CmafPackage>,
    #[serde(rename = "dashPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_package: Option<DashPackage>,
    #[serde(rename = "hlsPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hls_package: Option<HlsPackage>,
    /// <p>The ID of the PackagingConfiguration.</p>
    #[serde(rename = "id")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "mssPackage")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mss_package: Option<MssPackage>,
    /// <p>The ID of a PackagingGroup.</p>
    #[serde(rename = "packagingGroupId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packaging_group_id: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DescribePackagingConfigurationInput {
    /// <p>The ID of a MediaPackage VOD PackagingConfiguration resource.</p>
    pub id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct ListPackagingConfigurationsInput {
    /// <p>Upper bound on number of records to return.</p>
    pub max_results: Option<i32>,
    /// <p>A token used to resume pagination from the end of a previous request.</p>
    pub next_token: Option<String>,
    /// <p>Returns MediaPackage VOD PackagingConfigurations associated with the specified
    /// PackagingGroup.</p>
    pub packaging_group_id: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DeletePackagingConfigurationInput {
    /// <p>The ID of the MediaPackage VOD PackagingConfiguration resource to delete.</p>
    pub id: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::input::{
        CreatePackagingConfigurationInput, DeleteAssetInput, DescribePackagingConfigurationInput,
        ListPackagingConfigurationsInput,
    };
    use crate::model::{DashManifest, DashPackage, ManifestLayout};
    use crate::{Config, Region};
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder().region(Region::new("us-west-2")).build()
    }

    #[test]
    fn create_packaging_configuration_request() {
        let op = CreatePackagingConfigurationInput::builder()
            .id("dash")
            .packaging_group_id("vod-group")
            .dash_package(
                DashPackage::builder()
                    .dash_manifests(
                        DashManifest::builder()
                            .manifest_layout(ManifestLayout::Full)
                            .build(),
                    )
                    .build(),
            )
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri(), "/packaging_configurations");
        assert_eq!(
            std::str::from_utf8(request.body().bytes().unwrap()).unwrap(),
            r#"{"dashPackage":{"dashManifests":[{"manifestLayout":"FULL"}]},"id":"dash","packagingGroupId":"vod-group"}"#
        );
        assert_eq!(
            request.headers().get("content-length").unwrap(),
            "104"
        );
    }

    #[test]
    fn id_is_a_label() {
        let op = DescribePackagingConfigurationInput::builder()
            .id("hls v2")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/packaging_configurations/hls%20v2"
        );
        let err = DeleteAssetInput::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .err()
            .expect("id is required");
        assert!(matches!(err, BuildError::MissingField { field: "id", .. }));
    }

    #[test]
    fn list_packaging_configurations_query() {
        let op = ListPackagingConfigurationsInput::builder()
            .packaging_group_id("vod-group")
            .max_results(50)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/packaging_configurations?maxResults=50&packagingGroupId=vod-group"
        );
    }
}
