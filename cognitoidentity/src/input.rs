/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! `GetId`, `GetCredentialsForIdentity` and `GetOpenIdToken` are called by unauthenticated
//! devices, so they are only signed when the configured credentials provider has credentials.

use crate::config::Config;
use aws_http::AwsErrorRetryPolicy;
use aws_sig_auth::signer::OperationSigningConfig;
use smithy_http::operation::{BuildError, Operation};
use std::collections::HashMap;

/// See [`GetIdInput`](crate::input::GetIdInput)
pub mod get_id_input {
    use crate::input::GetIdInput;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`GetIdInput`](crate::input::GetIdInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        account_id: Option<String>,
        identity_pool_id: Option<String>,
        logins: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.account_id = Some(inp.into());
            self
        }
        pub fn set_account_id(mut self, inp: Option<String>) -> Self {
            self.account_id = inp;
            self
        }
        pub fn identity_pool_id(mut self, inp: impl Into<String>) -> Self {
            self.identity_pool_id = Some(inp.into());
            self
        }
        pub fn set_identity_pool_id(mut self, inp: Option<String>) -> Self {
            self.identity_pool_id = inp;
            self
        }
        pub fn logins(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.logins.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.logins = Some(hash_map);
            self
        }
        pub fn set_logins(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.logins = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetIdInput`](crate::input::GetIdInput)
        pub fn build(self) -> Result<GetIdInput, BuildError> {
            Ok(GetIdInput {
                account_id: self.account_id,
                identity_pool_id: self.identity_pool_id,
                logins: self.logins,
            })
        }
    }
}
impl GetIdInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetId, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetId",
            self,
            crate::operation::GetId::new(),
            OperationSigningConfig::optional(),
        )
    }
    pub fn builder() -> crate::input::get_id_input::Builder {
        crate::input::get_id_input::Builder::default()
    }
}

/// See [`GetCredentialsForIdentityInput`](crate::input::GetCredentialsForIdentityInput)
pub mod get_credentials_for_identity_input {
    use crate::input::GetCredentialsForIdentityInput;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`GetCredentialsForIdentityInput`](crate::input::GetCredentialsForIdentityInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_id: Option<String>,
        logins: Option<HashMap<String, String>>,
        custom_role_arn: Option<String>,
    }
    impl Builder {
        pub fn identity_id(mut self, inp: impl Into<String>) -> Self {
            self.identity_id = Some(inp.into());
            self
        }
        pub fn set_identity_id(mut self, inp: Option<String>) -> Self {
            self.identity_id = inp;
            self
        }
        pub fn logins(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.logins.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.logins = Some(hash_map);
            self
        }
        pub fn set_logins(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.logins = inp;
            self
        }
        pub fn custom_role_arn(mut self, inp: impl Into<String>) -> Self {
            self.custom_role_arn = Some(inp.into());
            self
        }
        pub fn set_custom_role_arn(mut self, inp: Option<String>) -> Self {
            self.custom_role_arn = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetCredentialsForIdentityInput`](crate::input::GetCredentialsForIdentityInput)
        pub fn build(self) -> Result<GetCredentialsForIdentityInput, BuildError> {
            Ok(GetCredentialsForIdentityInput {
                identity_id: self.identity_id,
                logins: self.logins,
                custom_role_arn: self.custom_role_arn,
            })
        }
    }
}
impl GetCredentialsForIdentityInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetCredentialsForIdentity, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetCredentialsForIdentity",
            self,
            crate::operation::GetCredentialsForIdentity::new(),
            OperationSigningConfig::optional(),
        )
    }
    pub fn builder() -> crate::input::get_credentials_for_identity_input::Builder {
        crate::input::get_credentials_for_identity_input::Builder::default()
    }
}

/// See [`GetOpenIdTokenInput`](crate::input::GetOpenIdTokenInput)
pub mod get_open_id_token_input {
    use crate::input::GetOpenIdTokenInput;
    use smithy_http::operation::BuildError;
    use std::collections::HashMap;

    /// A builder for [`GetOpenIdTokenInput`](crate::input::GetOpenIdTokenInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_id: Option<String>,
        logins: Option<HashMap<String, String>>,
    }
    impl Builder {
        pub fn identity_id(mut self, inp: impl Into<String>) -> Self {
            self.identity_id = Some(inp.into());
            self
        }
        pub fn set_identity_id(mut self, inp: Option<String>) -> Self {
            self.identity_id = inp;
            self
        }
        pub fn logins(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.logins.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.logins = Some(hash_map);
            self
        }
        pub fn set_logins(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.logins = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetOpenIdTokenInput`](crate::input::GetOpenIdTokenInput)
        pub fn build(self) -> Result<GetOpenIdTokenInput, BuildError> {
            Ok(GetOpenIdTokenInput {
                identity_id: self.identity_id,
                logins: self.logins,
            })
        }
    }
}
impl GetOpenIdTokenInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::GetOpenIdToken, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "GetOpenIdToken",
            self,
            crate::operation::GetOpenIdToken::new(),
            OperationSigningConfig::optional(),
        )
    }
    pub fn builder() -> crate::input::get_open_id_token_input::Builder {
        crate::input::get_open_id_token_input::Builder::default()
    }
}

/// See [`ListIdentitiesInput`](crate::input::ListIdentitiesInput)
pub mod list_identities_input {
    use crate::input::ListIdentitiesInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`ListIdentitiesInput`](crate::input::ListIdentitiesInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_pool_id: Option<String>,
        max_results: Option<i32>,
        next_token: Option<String>,
        hide_disabled: Option<bool>,
    }
    impl Builder {
        pub fn identity_pool_id(mut self, inp: impl Into<String>) -> Self {
            self.identity_pool_id = Some(inp.into());
            self
        }
        pub fn set_identity_pool_id(mut self, inp: Option<String>) -> Self {
            self.identity_pool_id = inp;
            self
        }
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
        pub fn hide_disabled(mut self, inp: bool) -> Self {
            self.hide_disabled = Some(inp);
            self
        }
        pub fn set_hide_disabled(mut self, inp: Option<bool>) -> Self {
            self.hide_disabled = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListIdentitiesInput`](crate::input::ListIdentitiesInput)
        pub fn build(self) -> Result<ListIdentitiesInput, BuildError> {
            Ok(ListIdentitiesInput {
                identity_pool_id: self.identity_pool_id,
                max_results: self.max_results,
                next_token: self.next_token,
                hide_disabled: self.hide_disabled,
            })
        }
    }
}
impl ListIdentitiesInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListIdentities, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "ListIdentities",
            self,
            crate::operation::ListIdentities::new(),
            OperationSigningConfig::default_config(),
        )
    }
    pub fn builder() -> crate::input::list_identities_input::Builder {
        crate::input::list_identities_input::Builder::default()
    }
}

/// See [`DescribeIdentityPoolInput`](crate::input::DescribeIdentityPoolInput)
pub mod describe_identity_pool_input {
    use crate::input::DescribeIdentityPoolInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeIdentityPoolInput`](crate::input::DescribeIdentityPoolInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_pool_id: Option<String>,
    }
    impl Builder {
        pub fn identity_pool_id(mut self, inp: impl Into<String>) -> Self {
            self.identity_pool_id = Some(inp.into());
            self
        }
        pub fn set_identity_pool_id(mut self, inp: Option<String>) -> Self {
            self.identity_pool_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeIdentityPoolInput`](crate::input::DescribeIdentityPoolInput)
        pub fn build(self) -> Result<DescribeIdentityPoolInput, BuildError> {
            Ok(DescribeIdentityPoolInput {
                identity_pool_id: self.identity_pool_id,
            })
        }
    }
}
impl DescribeIdentityPoolInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeIdentityPool, AwsErrorRetryPolicy>, BuildError> {
        crate::protocol::build_operation(
            config,
            "DescribeIdentityPool",
            self,
            crate::operation::DescribeIdentityPool::new(),
            OperationSigningConfig::default_config(),
        )
    }
    pub fn builder() -> crate::input::describe_identity_pool_input::Builder {
        crate::input::describe_identity_pool_input::Builder::default()
    }
}

/// <p>Generates (or retrieves) a Cognito ID. Supplying multiple logins will create an implicit
/// linked account.</p>
/// <p>This is a public API. You do not need any credentials to call this API.</p>
#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetIdInput {
    /// <p>A standard AWS account ID (9+ digits).</p>
    #[serde(rename = "AccountId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    /// <p>An identity pool ID in the format REGION:GUID.</p>
    #[serde(rename = "IdentityPoolId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
    /// <p>A set of optional name-value pairs that map provider names to provider tokens.</p>
    #[serde(rename = "Logins")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetCredentialsForIdentityInput {
    /// <p>A unique identifier in the format REGION:GUID.</p>
    #[serde(rename = "IdentityId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(rename = "Logins")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<HashMap<String, String>>,
    /// <p>The Amazon Resource Name (ARN) of the role to be assumed when multiple roles were
    /// received in the token from the identity provider.</p>
    #[serde(rename = "CustomRoleArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_role_arn: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct GetOpenIdTokenInput {
    #[serde(rename = "IdentityId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    #[serde(rename = "Logins")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<HashMap<String, String>>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct ListIdentitiesInput {
    #[serde(rename = "IdentityPoolId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
    /// <p>The maximum number of identities to return.</p>
    #[serde(rename = "MaxResults")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<i32>,
    /// <p>A pagination token.</p>
    #[serde(rename = "NextToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_token: Option<String>,
    /// <p>An optional boolean parameter that allows you to hide disabled identities.</p>
    #[serde(rename = "HideDisabled")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_disabled: Option<bool>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct DescribeIdentityPoolInput {
    #[serde(rename = "IdentityPoolId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_pool_id: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::input::{GetIdInput, ListIdentitiesInput};
    use crate::{Config, Region};
    use aws_sig_auth::signer::{OperationSigningConfig, SigningRequirements};

    fn config() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    #[test]
    fn get_id_request() {
        let op = GetIdInput::builder()
            .identity_pool_id("us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e")
            .logins("graph.facebook.com", "EAAB")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(
            request.headers().get("x-amz-target").unwrap(),
            "AWSCognitoIdentityService.GetId"
        );
        assert_eq!(
            std::str::from_utf8(request.body().bytes().unwrap()).unwrap(),
            r#"{"IdentityPoolId":"us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e","Logins":{"graph.facebook.com":"EAAB"}}"#
        );
    }

    #[test]
    fn public_operations_sign_optionally() {
        let op = GetIdInput::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.config()
                .get::<OperationSigningConfig>()
                .map(|config| config.signing_requirements),
            Some(SigningRequirements::Optional)
        );
        let op = ListIdentitiesInput::builder()
            .identity_pool_id("us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e")
            .max_results(10)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.config()
                .get::<OperationSigningConfig>()
                .map(|config| config.signing_requirements),
            Some(SigningRequirements::Required)
        );
    }

    #[test]
    fn booleans_serialize_as_json_booleans() {
        let input = ListIdentitiesInput::builder()
            .identity_pool_id("pool")
            .max_results(60)
            .hide_disabled(true)
            .build()
            .unwrap();
        assert_eq!(
            serde_json::to_string(&input).unwrap(),
            r#"{"IdentityPoolId":"pool","MaxResults":60,"HideDisabled":true}"#
        );
    }
}
