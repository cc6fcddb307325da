/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers for each MediaPackage VOD operation

use bytes::Bytes;
use smithy_http::response::ParseStrictResponse;

macro_rules! operation {
    ($($(#[$meta:meta])* $name:ident($input:ident, $output:ident, $error:ident),)*) => {
        $(
            $(#[$meta])*
            #[derive(std::clone::Clone, std::default::Default, std::fmt::Debug)]
            pub struct $name {
                _private: (),
            }

            impl $name {
                pub fn builder() -> crate::input::$input::Builder {
                    crate::input::$input::Builder::default()
                }

                pub fn new() -> Self {
                    Self { _private: () }
                }
            }

            impl ParseStrictResponse for $name {
                type Output = Result<crate::output::$output, crate::error::$error>;

                fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
                    crate::protocol::parse_response(response)
                }
            }
        )*
    };
}

operation! {
    /// <p>Creates a new MediaPackage VOD Asset resource.</p>
    CreateAsset(create_asset_input, CreateAssetOutput, CreateAssetError),
    /// <p>Returns a description of a MediaPackage VOD Asset resource.</p>
    DescribeAsset(describe_asset_input, DescribeAssetOutput, DescribeAssetError),
    /// <p>Deletes an MediaPackage VOD Asset resource.</p>
    DeleteAsset(delete_asset_input, DeleteAssetOutput, DeleteAssetError),
    /// <p>Creates a new MediaPackage VOD PackagingConfiguration resource.</p>
    CreatePackagingConfiguration(create_packaging_configuration_input, CreatePackagingConfigurationOutput, CreatePackagingConfigurationError),
    /// <p>Returns a description of a MediaPackage VOD PackagingConfiguration resource.</p>
    DescribePackagingConfiguration(describe_packaging_configuration_input, DescribePackagingConfigurationOutput, DescribePackagingConfigurationError),
    /// <p>Returns a collection of MediaPackage VOD PackagingConfiguration resources.</p>
    ListPackagingConfigurations(list_packaging_configurations_input, ListPackagingConfigurationsOutput, ListPackagingConfigurationsError),
    /// <p>Deletes a MediaPackage VOD PackagingConfiguration resource.</p>
    DeletePackagingConfiguration(delete_packaging_configuration_input, DeletePackagingConfigurationOutput, DeletePackagingConfigurationError),
}
