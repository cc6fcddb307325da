/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::{CognitoIdentityProvider, Credentials, IdentityDescription};
use std::collections::HashMap;

/// See [`GetIdOutput`](crate::output::GetIdOutput)
pub mod get_id_output {
    use crate::output::GetIdOutput;

    /// A builder for [`GetIdOutput`](crate::output::GetIdOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_id: Option<String>,
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
        /// Consumes the builder and constructs a [`GetIdOutput`](crate::output::GetIdOutput)
        pub fn build(self) -> GetIdOutput {
            GetIdOutput {
                identity_id: self.identity_id,
            }
        }
    }
}
impl GetIdOutput {
    /// Creates a new builder-style object to manufacture [`GetIdOutput`](crate::output::GetIdOutput)
    pub fn builder() -> crate::output::get_id_output::Builder {
        crate::output::get_id_output::Builder::default()
    }
}

/// See [`GetCredentialsForIdentityOutput`](crate::output::GetCredentialsForIdentityOutput)
pub mod get_credentials_for_identity_output {
    use crate::output::GetCredentialsForIdentityOutput;
    use crate::model::Credentials;

    /// A builder for [`GetCredentialsForIdentityOutput`](crate::output::GetCredentialsForIdentityOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_id: Option<String>,
        credentials: Option<Credentials>,
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
        pub fn credentials(mut self, inp: Credentials) -> Self {
            self.credentials = Some(inp);
            self
        }
        pub fn set_credentials(mut self, inp: Option<Credentials>) -> Self {
            self.credentials = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetCredentialsForIdentityOutput`](crate::output::GetCredentialsForIdentityOutput)
        pub fn build(self) -> GetCredentialsForIdentityOutput {
            GetCredentialsForIdentityOutput {
                identity_id: self.identity_id,
                credentials: self.credentials,
            }
        }
    }
}
impl GetCredentialsForIdentityOutput {
    /// Creates a new builder-style object to manufacture [`GetCredentialsForIdentityOutput`](crate::output::GetCredentialsForIdentityOutput)
    pub fn builder() -> crate::output::get_credentials_for_identity_output::Builder {
        crate::output::get_credentials_for_identity_output::Builder::default()
    }
}

/// See [`GetOpenIdTokenOutput`](crate::output::GetOpenIdTokenOutput)
pub mod get_open_id_token_output {
    use crate::output::GetOpenIdTokenOutput;

    /// A builder for [`GetOpenIdTokenOutput`](crate::output::GetOpenIdTokenOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_id: Option<String>,
        token: Option<String>,
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
        pub fn token(mut self, inp: impl Into<String>) -> Self {
            self.token = Some(inp.into());
            self
        }
        pub fn set_token(mut self, inp: Option<String>) -> Self {
            self.token = inp;
            self
        }
        /// Consumes the builder and constructs a [`GetOpenIdTokenOutput`](crate::output::GetOpenIdTokenOutput)
        pub fn build(self) -> GetOpenIdTokenOutput {
            GetOpenIdTokenOutput {
                identity_id: self.identity_id,
                token: self.token,
            }
        }
    }
}
impl GetOpenIdTokenOutput {
    /// Creates a new builder-style object to manufacture [`GetOpenIdTokenOutput`](crate::output::GetOpenIdTokenOutput)
    pub fn builder() -> crate::output::get_open_id_token_output::Builder {
        crate::output::get_open_id_token_output::Builder::default()
    }
}

/// See [`ListIdentitiesOutput`](crate::output::ListIdentitiesOutput)
pub mod list_identities_output {
    use crate::output::ListIdentitiesOutput;
    use crate::model::IdentityDescription;

    /// A builder for [`ListIdentitiesOutput`](crate::output::ListIdentitiesOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_pool_id: Option<String>,
        identities: Option<Vec<IdentityDescription>>,
        next_token: Option<String>,
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
        pub fn identities(mut self, inp: impl Into<IdentityDescription>) -> Self {
            let mut v = self.identities.unwrap_or_default();
            v.push(inp.into());
            self.identities = Some(v);
            self
        }
        pub fn set_identities(mut self, inp: Option<Vec<IdentityDescription>>) -> Self {
            self.identities = inp;
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
        /// Consumes the builder and constructs a [`ListIdentitiesOutput`](crate::output::ListIdentitiesOutput)
        pub fn build(self) -> ListIdentitiesOutput {
            ListIdentitiesOutput {
                identity_pool_id: self.identity_pool_id,
                identities: self.identities,
                next_token: self.next_token,
            }
        }
    }
}
impl ListIdentitiesOutput {
    /// Creates a new builder-style object to manufacture [`ListIdentitiesOutput`](crate::output::ListIdentitiesOutput)
    pub fn builder() -> crate::output::list_identities_output::Builder {
        crate::output::list_identities_output::Builder::default()
    }
}

/// See [`DescribeIdentityPoolOutput`](crate::output::DescribeIdentityPoolOutput)
pub mod describe_identity_pool_output {
    use crate::output::DescribeIdentityPoolOutput;
    use crate::model::CognitoIdentityProvider;
    use std::collections::HashMap;

    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_pool_id: Option<String>,
        identity_pool_name: Option<String>,
        allow_unauthenticated_identities: Option<bool>,
        allow_classic_flow: Option<bool>,
        supported_login_providers: Option<HashMap<String, String>>,
        developer_provider_name: Option<String>,
        open_id_connect_provider_ar_ns: Option<Vec<String>>,
        cognito_identity_providers: Option<Vec<CognitoIdentityProvider>>,
        saml_provider_ar_ns: Option<Vec<String>>,
        identity_pool_tags: Option<HashMap<String, String>>,
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
        pub fn identity_pool_name(mut self, inp: impl Into<String>) -> Self {
            self.identity_pool_name = Some(inp.into());
            self
        }
        pub fn set_identity_pool_name(mut self, inp: Option<String>) -> Self {
            self.identity_pool_name = inp;
            self
        }
        pub fn allow_unauthenticated_identities(mut self, inp: bool) -> Self {
            self.allow_unauthenticated_identities = Some(inp);
            self
        }
        pub fn set_allow_unauthenticated_identities(mut self, inp: Option<bool>) -> Self {
            self.allow_unauthenticated_identities = inp;
            self
        }
        pub fn allow_classic_flow(mut self, inp: bool) -> Self {
            self.allow_classic_flow = Some(inp);
            self
        }
        pub fn set_allow_classic_flow(mut self, inp: Option<bool>) -> Self {
            self.allow_classic_flow = inp;
            self
        }
        pub fn supported_login_providers(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.supported_login_providers.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.supported_login_providers = Some(hash_map);
            self
        }
        pub fn set_supported_login_providers(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.supported_login_providers = inp;
            self
        }
        pub fn developer_provider_name(mut self, inp: impl Into<String>) -> Self {
            self.developer_provider_name = Some(inp.into());
            self
        }
        pub fn set_developer_provider_name(mut self, inp: Option<String>) -> Self {
            self.developer_provider_name = inp;
            self
        }
        pub fn open_id_connect_provider_ar_ns(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.open_id_connect_provider_ar_ns.unwrap_or_default();
            v.push(inp.into());
            self.open_id_connect_provider_ar_ns = Some(v);
            self
        }
        pub fn set_open_id_connect_provider_ar_ns(mut self, inp: Option<Vec<String>>) -> Self {
            self.open_id_connect_provider_ar_ns = inp;
            self
        }
        pub fn cognito_identity_providers(mut self, inp: impl Into<CognitoIdentityProvider>) -> Self {
            let mut v = self.cognito_identity_providers.unwrap_or_default();
            v.push(inp.into());
            self.cognito_identity_providers = Some(v);
            self
        }
        pub fn set_cognito_identity_providers(mut self, inp: Option<Vec<CognitoIdentityProvider>>) -> Self {
            self.cognito_identity_providers = inp;
            self
        }
        pub fn saml_provider_ar_ns(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.saml_provider_ar_ns.unwrap_or_default();
            v.push(inp.into());
            self.saml_provider_ar_ns = Some(v);
            self
        }
        pub fn set_saml_provider_ar_ns(mut self, inp: Option<Vec<String>>) -> Self {
            self.saml_provider_ar_ns = inp;
            self
        }
        pub fn identity_pool_tags(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.identity_pool_tags.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.identity_pool_tags = Some(hash_map);
            self
        }
        pub fn set_identity_pool_tags(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.identity_pool_tags = inp;
            self
        }
        pub fn build(self) -> DescribeIdentityPoolOutput {
            DescribeIdentityPoolOutput {
                identity_pool_id: self.identity_pool_id,
                identity_pool_name: self.identity_pool_name,
                allow_unauthenticated_identities: self.allow_unauthenticated_identities,
                allow_classic_flow: self.allow_classic_flow,
                supported_login_providers: self.supported_login_providers,
                developer_provider_name: self.developer_provider_name,
                open_id_connect_provider_ar_ns: self.open_id_connect_provider_ar_ns,
                cognito_identity_providers: self.cognito_identity_providers,
                saml_provider_ar_ns: self.saml_provider_ar_ns,
                identity_pool_tags: self.identity_pool_tags,
            }
        }
    }
}
impl DescribeIdentityPoolOutput {
    /// Creates a new builder-style object to manufacture [`DescribeIdentityPoolOutput`](crate::output::DescribeIdentityPoolOutput)
    pub fn builder() -> crate::output::describe_identity_pool_output::Builder {
        crate::output::describe_identity_pool_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetIdOutput {
    /// <p>A unique identifier in the format REGION:GUID.</p>
    #[serde(rename = "IdentityId")]
    pub identity_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetCredentialsForIdentityOutput {
    #[serde(rename = "IdentityId")]
    pub identity_id: Option<String>,
    /// <p>Credentials for the provided identity ID.</p>
    #[serde(rename = "Credentials")]
    pub credentials: Option<Credentials>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct GetOpenIdTokenOutput {
    #[serde(rename = "IdentityId")]
    pub identity_id: Option<String>,
    /// <p>An OpenID token, valid for 10 minutes.</p>
    #[serde(rename = "Token")]
    pub token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListIdentitiesOutput {
    #[serde(rename = "IdentityPoolId")]
    pub identity_pool_id: Option<String>,
    /// <p>An object containing a set of identities and associated mappings.</p>
    #[serde(rename = "Identities")]
    pub identities: Option<Vec<IdentityDescription>>,
    #[serde(rename = "NextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DescribeIdentityPoolOutput {
    #[serde(rename = "IdentityPoolId")]
    pub identity_pool_id: Option<String>,
    /// <p>A string that you provide.</p>
    #[serde(rename = "IdentityPoolName")]
    pub identity_pool_name: Option<String>,
    /// <p>TRUE if the identity pool supports unauthenticated logins.</p>
    #[serde(rename = "AllowUnauthenticatedIdentities")]
    pub allow_unauthenticated_identities: Option<bool>,
    #[serde(rename = "AllowClassicFlow")]
    pub allow_classic_flow: Option<bool>,
    /// <p>Optional key:value pairs mapping provider names to provider app IDs.</p>
    #[serde(rename = "SupportedLoginProviders")]
    pub supported_login_providers: Option<HashMap<String, String>>,
    #[serde(rename = "DeveloperProviderName")]
    pub developer_provider_name: Option<String>,
    /// <p>The ARNs of the OpenID Connect providers.</p>
    #[serde(rename = "OpenIdConnectProviderARNs")]
    pub open_id_connect_provider_ar_ns: Option<Vec<String>>,
    /// <p>A list representing an Amazon Cognito user pool and its client ID.</p>
    #[serde(rename = "CognitoIdentityProviders")]
    pub cognito_identity_providers: Option<Vec<CognitoIdentityProvider>>,
    /// <p>An array of Amazon Resource Names (ARNs) of the SAML provider for your identity
    /// pool.</p>
    #[serde(rename = "SamlProviderARNs")]
    pub saml_provider_ar_ns: Option<Vec<String>>,
    /// <p>The tags that are assigned to the identity pool.</p>
    #[serde(rename = "IdentityPoolTags")]
    pub identity_pool_tags: Option<HashMap<String, String>>,
}
