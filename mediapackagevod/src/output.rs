/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{
    CmafPackage, DashPackage, EgressEndpoint, HlsPackage, MssPackage, PackagingConfiguration,
};
use std::collections::HashMap;

/// See [`CreateAssetOutput`](crate::output::CreateAssetOutput)
pub mod create_asset_output {
    use crate::model::EgressEndpoint;
    use crate::output::CreateAssetOutput;
    use std::collections::HashMap;

    /// A builder for [`CreateAssetOutput`](crate::output::CreateAssetOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        arn: Option<String>,
        created_at: Option<String>,
        egress_endpoints: Option<Vec<EgressEndpoint>>,
        id: Option<String>,
        packaging_group_id: Option<String>,
        resource_id: Option<String>,
        source_arn: Option<String>,
        source_role_arn: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: Option<String>) -> Self {
            self.arn = inp;
            self
        }
        pub fn created_at(mut self, inp: impl Into<String>) -> Self {
            self.created_at = Some(inp.into());
            self
        }
        pub fn set_created_at(mut self, inp: Option<String>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn egress_endpoints(mut self, inp: impl Into<EgressEndpoint>) -> Self {
            let mut v = self.egress_endpoints.unwrap_or_default();
            v.push(inp.into());
            self.egress_endpoints = Some(v);
            self
        }
        pub fn set_egress_endpoints(mut self, inp: Option<Vec<EgressEndpoint>>) -> Self {
            self.egress_endpoints = inp;
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
        /// Consumes the builder and constructs a [`CreateAssetOutput`](crate::output::CreateAssetOutput)
        pub fn build(self) -> CreateAssetOutput {
            CreateAssetOutput {
                arn: self.arn,
                created_at: self.created_at,
                egress_endpoints: self.egress_endpoints,
                id: self.id,
                packaging_group_id: self.packaging_group_id,
                resource_id: self.resource_id,
                source_arn: self.source_arn,
                source_role_arn: self.source_role_arn,
                tags: self.tags,
            }
        }
    }
}
impl CreateAssetOutput {
    /// Creates a new builder-style object to manufacture [`CreateAssetOutput`](crate::output::CreateAssetOutput)
    pub fn builder() -> crate::output::create_asset_output::Builder {
        crate::output::create_asset_output::Builder::default()
    }
}

/// See [`DescribeAssetOutput`](crate::output::DescribeAssetOutput)
pub mod describe_asset_output {
    use crate::model::EgressEndpoint;
    use crate::output::DescribeAssetOutput;
    use std::collections::HashMap;

    /// A builder for [`DescribeAssetOutput`](crate::output::DescribeAssetOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        arn: Option<String>,
        created_at: Option<String>,
        egress_endpoints: Option<Vec<EgressEndpoint>>,
        id: Option<String>,
        packaging_group_id: Option<String>,
        resource_id: Option<String>,
        source_arn: Option<String>,
        source_role_arn: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: Option<String>) -> Self {
            self.arn = inp;
            self
        }
        pub fn created_at(mut self, inp: impl Into<String>) -> Self {
            self.created_at = Some(inp.into());
            self
        }
        pub fn set_created_at(mut self, inp: Option<String>) -> Self {
            self.created_at = inp;
            self
        }
        pub fn egress_endpoints(mut self, inp: impl Into<EgressEndpoint>) -> Self {
            let mut v = self.egress_endpoints.unwrap_or_default();
            v.push(inp.into());
            self.egress_endpoints = Some(v);
            self
        }
        pub fn set_egress_endpoints(mut self, inp: Option<Vec<EgressEndpoint>>) -> Self {
            self.egress_endpoints = inp;
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
        /// Consumes the builder and constructs a [`DescribeAssetOutput`](crate::output::DescribeAssetOutput)
        pub fn build(self) -> DescribeAssetOutput {
            DescribeAssetOutput {
                arn: self.arn,
                created_at: self.created_at,
                egress_endpoints: self.egress_endpoints,
                id: self.id,
                packaging_group_id: self.packaging_group_id,
                resource_id: self.resource_id,
                source_arn: self.source_arn,
                source_role_arn: self.source_role_arn,
                tags: self.tags,
            }
        }
    }
}
impl DescribeAssetOutput {
    /// Creates a new builder-style object to manufacture [`DescribeAssetOutput`](crate::output::DescribeAssetOutput)
    pub fn builder() -> crate::output::describe_asset_output::Builder {
        crate::output::describe_asset_output::Builder::default()
    }
}

/// See [`DeleteAssetOutput`](crate::output::DeleteAssetOutput)
pub mod delete_asset_output {
    use crate::output::DeleteAssetOutput;

    /// A builder for [`DeleteAssetOutput`](crate::output::DeleteAssetOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteAssetOutput`](crate::output::DeleteAssetOutput)
        pub fn build(self) -> DeleteAssetOutput {
            DeleteAssetOutput {}
        }
    }
}
impl DeleteAssetOutput {
    /// Creates a new builder-style object to manufacture [`DeleteAssetOutput`](crate::output::DeleteAssetOutput)
    pub fn builder() -> crate::output::delete_asset_output::Builder {
        crate::output::delete_asset_output::Builder::default()
    }
}

/// See [`CreatePackagingConfigurationOutput`](crate::output::CreatePackagingConfigurationOutput)
pub mod create_packaging_configuration_output {
    use crate::model::{CmafPackage, DashPackage, HlsPackage, MssPackage};
    use crate::output::CreatePackagingConfigurationOutput;
    use std::collections::HashMap;

    /// A builder for [`CreatePackagingConfigurationOutput`](crate::output::CreatePackagingConfigurationOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        arn: Option<String>,
        cmaf_package: Option<CmafPackage>,
        dash_package: Option<DashPackage>,
        hls_package: Option<HlsPackage>,
        id: Option<String>,
        mss_package: Option<MssPackage>,
        packaging_group_id: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: Option<String>) -> Self {
            self.arn = inp;
            self
        }
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
        /// Consumes the builder and constructs a [`CreatePackagingConfigurationOutput`](crate::output::CreatePackagingConfigurationOutput)
        pub fn build(self) -> CreatePackagingConfigurationOutput {
            CreatePackagingConfigurationOutput {
                arn: self.arn,
                cmaf_package: self.cmaf_package,
                dash_package: self.dash_package,
                hls_package: self.hls_package,
                id: self.id,
                mss_package: self.mss_package,
                packaging_group_id: self.packaging_group_id,
                tags: self.tags,
            }
        }
    }
}
impl CreatePackagingConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`CreatePackagingConfigurationOutput`](crate::output::CreatePackagingConfigurationOutput)
    pub fn builder() -> crate::output::create_packaging_configuration_output::Builder {
        crate::output::create_packaging_configuration_output::Builder::default()
    }
}

/// See [`DescribePackagingConfigurationOutput`](crate::output::DescribePackagingConfigurationOutput)
pub mod describe_packaging_configuration_output {
    use crate::model::{CmafPackage, DashPackage, HlsPackage, MssPackage};
    use crate::output::DescribePackagingConfigurationOutput;
    use std::collections::HashMap;

    /// A builder for [`DescribePackagingConfigurationOutput`](crate::output::DescribePackagingConfigurationOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        arn: Option<String>,
        cmaf_package: Option<CmafPackage>,
        dash_package: Option<DashPackage>,
        hls_package: Option<HlsPackage>,
        id: Option<String>,
        mss_package: Option<MssPackage>,
        packaging_group_id: Option<String>,
        tags: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn arn(mut self, inp: impl Into<String>) -> Self {
            self.arn = Some(inp.into());
            self
        }
        pub fn set_arn(mut self, inp: Option<String>) -> Self {
            self.arn = inp;
            self
        }
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
        /// Consumes the builder and constructs a [`DescribePackagingConfigurationOutput`](crate::output::DescribePackagingConfigurationOutput)
        pub fn build(self) -> DescribePackagingConfigurationOutput {
            DescribePackagingConfigurationOutput {
                arn: self.arn,
                cmaf_package: self.cmaf_package,
                dash_package: self.dash_package,
                hls_package: self.hls_package,
                id: self.id,
                mss_package: self.mss_package,
                packaging_group_id: self.packaging_group_id,
                tags: self.tags,
            }
        }
    }
}
impl DescribePackagingConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DescribePackagingConfigurationOutput`](crate::output::DescribePackagingConfigurationOutput)
    pub fn builder() -> crate::output::describe_packaging_configuration_output::Builder {
        crate::output::describe_packaging_configuration_output::Builder::default()
    }
}

/// See [`ListPackagingConfigurationsOutput`](crate::output::ListPackagingConfigurationsOutput)
pub mod list_packaging_configurations_output {
    use crate::model::PackagingConfiguration;
    use crate::output::ListPackagingConfigurationsOutput;

    /// A builder for [`ListPackagingConfigurationsOutput`](crate::output::ListPackagingConfigurationsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        next_token: Option<String>,
        packaging_configurations: Option<Vec<PackagingConfiguration>>,
    }
    impl Builder {
        pub fn next_token(mut self, inp: impl Into<String>) -> Self {
            self.next_token = Some(inp.into());
            self
        }
        pub fn set_next_token(mut self, inp: Option<String>) -> Self {
            self.next_token = inp;
            self
        }
        pub fn packaging_configurations(mut self, inp: impl Into<PackagingConfiguration>) -> Self {
            let mut v = self.packaging_configurations.unwrap_or_default();
            v.push(inp.into());
            self.packaging_configurations = Some(v);
            self
        }
        pub fn set_packaging_configurations(mut self, inp: Option<Vec<PackagingConfiguration>>) -> Self {
            self.packaging_configurations = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListPackagingConfigurationsOutput`](crate::output::ListPackagingConfigurationsOutput)
        pub fn build(self) -> ListPackagingConfigurationsOutput {
            ListPackagingConfigurationsOutput {
                next_token: self.next_token,
                packaging_configurations: self.packaging_configurations,
            }
        }
    }
}
impl ListPackagingConfigurationsOutput {
    /// Creates a new builder-style object to manufacture [`ListPackagingConfigurationsOutput`](crate::output::ListPackagingConfigurationsOutput)
    pub fn builder() -> crate::output::list_packaging_configurations_output::Builder {
        crate::output::list_packaging_configurations_output::Builder::default()
    }
}

/// See [`DeletePackagingConfigurationOutput`](crate::output::DeletePackagingConfigurationOutput)
pub mod delete_packaging_configuration_output {
    use crate::output::DeletePackagingConfigurationOutput;

    /// A builder for [`DeletePackagingConfigurationOutput`](crate::output::DeletePackagingConfigurationOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeletePackagingConfigurationOutput`](crate::output::DeletePackagingConfigurationOutput)
        pub fn build(self) -> DeletePackagingConfigurationOutput {
            DeletePackagingConfigurationOutput {}
        }
    }
}
impl DeletePackagingConfigurationOutput {
    /// Creates a new builder-style object to manufacture [`DeletePackagingConfigurationOutput`](crate::output::DeletePackagingConfigurationOutput)
    pub fn builder() -> crate::output::delete_packaging_configuration_output::Builder {
        crate::output::delete_packaging_configuration_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct CreateAssetOutput {
    /// <p>The ARN of the Asset.</p>
    #[serde(rename = "arn")]
    pub arn: Option<String>,
    /// <p>The time the Asset was initially submitted for Ingest.</p>
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    /// <p>The list of egress endpoints available for the Asset.</p>
    #[serde(rename = "egressEndpoints")]
    pub egress_endpoints: Option<Vec<EgressEndpoint>>,
    /// <p>The unique identifier for the Asset.</p>
    #[serde(rename = "id")]
    pub id: Option<String>,
    /// <p>The ID of the PackagingGroup for the Asset.</p>
    #[serde(rename = "packagingGroupId")]
    pub packaging_group_id: Option<String>,
    /// <p>The resource ID to include in SPEKE key requests.</p>
    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,
    /// <p>ARN of the source object in S3.</p>
    #[serde(rename = "sourceArn")]
    pub source_arn: Option<String>,
    /// <p>The IAM role_arn used to access the source S3 bucket.</p>
    #[serde(rename = "sourceRoleArn")]
    pub source_role_arn: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    pub tags: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DescribeAssetOutput {
    /// <p>The ARN of the Asset.</p>
    #[serde(rename = "arn")]
    pub arn: Option<String>,
    /// <p>The time the Asset was initially submitted for Ingest.</p>
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    /// <p>The list of egress endpoints available for the Asset.</p>
    #[serde(rename = "egressEndpoints")]
    pub egress_endpoints: Option<Vec<EgressEndpoint>>,
    /// <p>The unique identifier for the Asset.</p>
    #[serde(rename = "id")]
    pub id: Option<String>,
    /// <p>The ID of the PackagingGroup for the Asset.</p>
    #[serde(rename = "packagingGroupId")]
    pub packaging_group_id: Option<String>,
    /// <p>The resource ID to include in SPEKE key requests.</p>
    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,
    /// <p>ARN of the source object in S3.</p>
    #[serde(rename = "sourceArn")]
    pub source_arn: Option<String>,
    /// <p>The IAM role_arn used to access the source S3 bucket.</p>
    #[serde(rename = "sourceRoleArn")]
    pub source_role_arn: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    pub tags: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DeleteAssetOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct CreatePackagingConfigurationOutput {
    /// <p>The ARN of the PackagingConfiguration.</p>
    #[serde(rename = "arn")]
    pub arn: Option<String>,
    #[serde(rename = "cmafPackage")]
    pub cmaf_package: Option<CmafPackage>,
    #[serde(rename = "dashPackage")]
    pub dash_package: Option<DashPackage>,
    #[serde(rename = "hlsPackage")]
    pub hls_package: Option<HlsPackage>,
    /// <p>The ID of the PackagingConfiguration.</p>
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "mssPackage")]
    pub mss_package: Option<MssPackage>,
    /// <p>The ID of a PackagingGroup.</p>
    #[serde(rename = "packagingGroupId")]
    pub packaging_group_id: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    pub tags: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DescribePackagingConfigurationOutput {
    /// <p>The ARN of the PackagingConfiguration.</p>
    #[serde(rename = "arn")]
    pub arn: Option<String>,
    #[serde(rename = "cmafPackage")]
    pub cmaf_package: Option<CmafPackage>,
    #[serde(rename = "dashPackage")]
    pub dash_package: Option<DashPackage>,
    #[serde(rename = "hlsPackage")]
    pub hls_package: Option<HlsPackage>,
    /// <p>The ID of the PackagingConfiguration.</p>
    #[serde(rename = "id")]
    pub id: Option<String>,
    #[serde(rename = "mssPackage")]
    pub mss_package: Option<MssPackage>,
    /// <p>The ID of a PackagingGroup.</p>
    #[serde(rename = "packagingGroupId")]
    pub packaging_group_id: Option<String>,
    /// <p>A collection of tags associated with a resource</p>
    #[serde(rename = "tags")]
    pub tags: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListPackagingConfigurationsOutput {
    /// <p>A token that can be used to resume pagination from the end of the collection.</p>
    #[serde(rename = "nextToken")]
    pub next_token: Option<String>,
    /// <p>A list of MediaPackage VOD PackagingConfiguration resources.</p>
    #[serde(rename = "packagingConfigurations")]
    pub packaging_configurations: Option<Vec<PackagingConfiguration>>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DeletePackagingConfigurationOutput {}

#[cfg(test)]
mod test {
    use crate::model::EgressEndpoint;
    use crate::output::{DeleteAssetOutput, DescribeAssetOutput};

    #[test]
    fn describe_asset_output() {
        let output: DescribeAssetOutput = serde_json::from_str(
            r#"{
                "arn": "arn:aws:mediapackage-vod:us-west-2:123456789012:assets/big-buck-bunny",
                "createdAt": "2021-03-08T17:10:11Z",
                "egressEndpoints": [{
                    "packagingConfigurationId": "hls",
                    "status": "PLAYABLE",
                    "url": "https://c4af3793bf76b33c.egress.mediapackage-vod.us-west-2.amazonaws.com/out/v1/index.m3u8"
                }],
                "id": "big-buck-bunny",
                "packagingGroupId": "vod-group",
                "sourceArn": "arn:aws:s3:::vod-sources/big-buck-bunny.smil"
            }"#,
        )
        .unwrap();
        assert_eq!(output.id.as_deref(), Some("big-buck-bunny"));
        assert_eq!(output.created_at.as_deref(), Some("2021-03-08T17:10:11Z"));
        assert_eq!(
            output.egress_endpoints,
            Some(vec![EgressEndpoint::builder()
                .packaging_configuration_id("hls")
                .status("PLAYABLE")
                .url("https://c4af3793bf76b33c.egress.mediapackage-vod.us-west-2.amazonaws.com/out/v1/index.m3u8")
                .build()])
        );
        assert_eq!(output.tags, None);
    }

    #[test]
    fn empty_output() {
        let output: DeleteAssetOutput = serde_json::from_str("{}").unwrap();
        assert_eq!(output, DeleteAssetOutput::builder().build());
    }
}
