/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use smithy_types::Instant;

/// <p>Credentials for the provided identity ID.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct Credentials {
    /// <p>The Access Key portion of the credentials.</p>
    #[serde(rename = "AccessKeyId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,
    /// <p>The Secret Access Key portion of the credentials</p>
    #[serde(rename = "SecretKey")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_key: Option<String>,
    /// <p>The Session Token portion of the credentials</p>
    #[serde(rename = "SessionToken")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
    /// <p>The date at which these credentials will expire.</p>
    #[serde(rename = "Expiration")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<Instant>,
}
/// See [`Credentials`](crate::model::Credentials)
pub mod credentials {
    use crate::model::Credentials;
    use smithy_types::Instant;

    /// A builder for [`Credentials`](crate::model::Credentials)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        access_key_id: Option<String>,
        secret_key: Option<String>,
        session_token: Option<String>,
        expiration: Option<Instant>,
    }
    impl Builder {
        pub fn access_key_id(mut self, inp: impl Into<String>) -> Self {
            self.access_key_id = Some(inp.into());
            self
        }
        pub fn set_access_key_id(mut self, inp: Option<String>) -> Self {
            self.access_key_id = inp;
            self
        }
        pub fn secret_key(mut self, inp: impl Into<String>) -> Self {
            self.secret_key = Some(inp.into());
            self
        }
        pub fn set_secret_key(mut self, inp: Option<String>) -> Self {
            self.secret_key = inp;
            self
        }
        pub fn session_token(mut self, inp: impl Into<String>) -> Self {
            self.session_token = Some(inp.into());
            self
        }
        pub fn set_session_token(mut self, inp: Option<String>) -> Self {
            self.session_token = inp;
            self
        }
        pub fn expiration(mut self, inp: Instant) -> Self {
            self.expiration = Some(inp);
            self
        }
        pub fn set_expiration(mut self, inp: Option<Instant>) -> Self {
            self.expiration = inp;
            self
        }
        /// Consumes the builder and constructs a [`Credentials`](crate::model::Credentials)
        pub fn build(self) -> Credentials {
            Credentials {
                access_key_id: self.access_key_id,
                secret_key: self.secret_key,
                session_token: self.session_token,
                expiration: self.expiration,
            }
        }
    }
}
impl Credentials {
    /// Creates a new builder-style object to manufacture [`Credentials`](crate::model::Credentials)
    pub fn builder() -> crate::model::credentials::Builder {
        crate::model::credentials::Builder::default()
    }
}

/// <p>A description of the identity.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct IdentityDescription {
    /// <p>A unique identifier in the format REGION:GUID.</p>
    #[serde(rename = "IdentityId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_id: Option<String>,
    /// <p>The provider names.</p>
    #[serde(rename = "Logins")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins: Option<Vec<String>>,
    /// <p>Date on which the identity was created.</p>
    #[serde(rename = "CreationDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Instant>,
    /// <p>Date on which the identity was last modified.</p>
    #[serde(rename = "LastModifiedDate")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date: Option<Instant>,
}
/// See [`IdentityDescription`](crate::model::IdentityDescription)
pub mod identity_description {
    use crate::model::IdentityDescription;
    use smithy_types::Instant;

    /// A builder for [`IdentityDescription`](crate::model::IdentityDescription)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        identity_id: Option<String>,
        logins: Option<Vec<String>>,
        creation_date: Option<Instant>,
        last_modified_date: Option<Instant>,
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
        pub fn logins(mut self, inp: impl Into<String>) -> Self {
            let mut v = self.logins.unwrap_or_default();
            v.push(inp.into());
            self.logins = Some(v);
            self
        }
        pub fn set_logins(mut self, inp: Option<Vec<String>>) -> Self {
            self.logins = inp;
            self
        }
        pub fn creation_date(mut self, inp: Instant) -> Self {
            self.creation_date = Some(inp);
            self
        }
        pub fn set_creation_date(mut self, inp: Option<Instant>) -> Self {
            self.creation_date = inp;
            self
        }
        pub fn last_modified_date(mut self, inp: Instant) -> Self {
            self.last_modified_date = Some(inp);
            self
        }
        pub fn set_last_modified_date(mut self, inp: Option<Instant>) -> Self {
            self.last_modified_date = inp;
            self
        }
        /// Consumes the builder and constructs a [`IdentityDescription`](crate::model::IdentityDescription)
        pub fn build(self) -> IdentityDescription {
            IdentityDescription {
                identity_id: self.identity_id,
                logins: self.logins,
                creation_date: self.creation_date,
                last_modified_date: self.last_modified_date,
            }
        }
    }
}
impl IdentityDescription {
    /// Creates a new builder-style object to manufacture [`IdentityDescription`](crate::model::IdentityDescription)
    pub fn builder() -> crate::model::identity_description::Builder {
        crate::model::identity_description::Builder::default()
    }
}

/// <p>A provider representing an Amazon Cognito user pool and its client ID.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct CognitoIdentityProvider {
    /// <p>The provider name for an Amazon Cognito user pool. For example,
    /// <code>cognito-idp.us-east-1.amazonaws.com/us-east-1_123456789</code>.</p>
    #[serde(rename = "ProviderName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    /// <p>The client ID for the Amazon Cognito user pool.</p>
    #[serde(rename = "ClientId")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// <p>TRUE if server-side token validation is enabled for the identity provider’s
    /// token.</p>
    #[serde(rename = "ServerSideTokenCheck")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_side_token_check: Option<bool>,
}
/// See [`CognitoIdentityProvider`](crate::model::CognitoIdentityProvider)
pub mod cognito_identity_provider {
    use crate::model::CognitoIdentityProvider;

    /// A builder for [`CognitoIdentityProvider`](crate::model::CognitoIdentityProvider)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        provider_name: Option<String>,
        client_id: Option<String>,
        server_side_token_check: Option<bool>,
    }
    impl Builder {
        pub fn provider_name(mut self, inp: impl Into<String>) -> Self {
            self.provider_name = Some(inp.into());
            self
        }
        pub fn set_provider_name(mut self, inp: Option<String>) -> Self {
            self.provider_name = inp;
            self
        }
        pub fn client_id(mut self, inp: impl Into<String>) -> Self {
            self.client_id = Some(inp.into());
            self
        }
        pub fn set_client_id(mut self, inp: Option<String>) -> Self {
            self.client_id = inp;
            self
        }
        pub fn server_side_token_check(mut self, inp: bool) -> Self {
            self.server_side_token_check = Some(inp);
            self
        }
        pub fn set_server_side_token_check(mut self, inp: Option<bool>) -> Self {
            self.server_side_token_check = inp;
            self
        }
        /// Consumes the builder and constructs a [`CognitoIdentityProvider`](crate::model::CognitoIdentityProvider)
        pub fn build(self) -> CognitoIdentityProvider {
            CognitoIdentityProvider {
                provider_name: self.provider_name,
                client_id: self.client_id,
                server_side_token_check: self.server_side_token_check,
            }
        }
    }
}
impl CognitoIdentityProvider {
    /// Creates a new builder-style object to manufacture [`CognitoIdentityProvider`](crate::model::CognitoIdentityProvider)
    pub fn builder() -> crate::model::cognito_identity_provider::Builder {
        crate::model::cognito_identity_provider::Builder::default()
    }
}

#[cfg(test)]
mod test {
    use crate::model::{CognitoIdentityProvider, Credentials, IdentityDescription};
    use smithy_types::Instant;

    #[test]
    fn credentials_from_json() {
        let json = r#"{
            "AccessKeyId": "ASIAEXAMPLE",
            "SecretKey": "secret",
            "SessionToken": "token",
            "Expiration": 1.6149556E9
        }"#;
        let parsed: Credentials = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            Credentials::builder()
                .access_key_id("ASIAEXAMPLE")
                .secret_key("secret")
                .session_token("token")
                .expiration(Instant::from_epoch_seconds(1614955600))
                .build()
        );
    }

    #[test]
    fn identity_description_round_trip() {
        let identity = IdentityDescription::builder()
            .identity_id("us-east-1:6a1b7f2c-5e1f-4a7b-9d3c-0b1e2f3a4b5c")
            .logins("graph.facebook.com")
            .logins("accounts.google.com")
            .creation_date(Instant::from_epoch_seconds(1600000000))
            .build();
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(
            json,
            r#"{"IdentityId":"us-east-1:6a1b7f2c-5e1f-4a7b-9d3c-0b1e2f3a4b5c","Logins":["graph.facebook.com","accounts.google.com"],"CreationDate":1600000000}"#
        );
        let parsed: IdentityDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, identity);
    }

    #[test]
    fn equality_is_structural() {
        let a = CognitoIdentityProvider::builder()
            .provider_name("cognito-idp.us-east-1.amazonaws.com/us-east-1_123456789")
            .client_id("abc")
            .build();
        let b = CognitoIdentityProvider::builder()
            .set_provider_name(Some(
                "cognito-idp.us-east-1.amazonaws.com/us-east-1_123456789".to_string(),
            ))
            .set_client_id(Some("abc".to_string()))
            .build();
        assert_eq!(a, b);
        let mut checked = b.clone();
        checked.server_side_token_check = Some(true);
        assert_ne!(a, checked);
    }
}
