/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A fluent client for Amazon Cognito Identity
//!
//! ```no_run
//! # async fn docs() -> Result<(), cognitoidentity::Error> {
//! let client = cognitoidentity::Client::from_env();
//! let id = client
//!     .get_id()
//!     .identity_pool_id("us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e")
//!     .send()
//!     .await?;
//! let credentials = client
//!     .get_credentials_for_identity()
//!     .set_identity_id(id.identity_id)
//!     .send()
//!     .await?;
//! println!("{:?}", credentials.credentials);
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

    pub fn get_id(&self) -> fluent_builders::GetId {
        fluent_builders::GetId::new(self.handle.clone())
    }

    pub fn get_credentials_for_identity(&self) -> fluent_builders::GetCredentialsForIdentity {
        fluent_builders::GetCredentialsForIdentity::new(self.handle.clone())
    }

    pub fn get_open_id_token(&self) -> fluent_builders::GetOpenIdToken {
        fluent_builders::GetOpenIdToken::new(self.handle.clone())
    }

    pub fn list_identities(&self) -> fluent_builders::ListIdentities {
        fluent_builders::ListIdentities::new(self.handle.clone())
    }

    pub fn describe_identity_pool(&self) -> fluent_builders::DescribeIdentityPool {
        fluent_builders::DescribeIdentityPool::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use crate::client::Handle;
    use smithy_http::result::SdkError;
    use std::collections::HashMap;
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct GetId {
        handle: Arc<Handle>,
        inner: crate::input::get_id_input::Builder,
    }

    impl GetId {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::GetIdOutput, SdkError<crate::error::GetIdError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn account_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.account_id(inp);
            self
        }

        pub fn set_account_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_account_id(inp);
            self
        }

        pub fn identity_pool_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.identity_pool_id(inp);
            self
        }

        pub fn set_identity_pool_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_identity_pool_id(inp);
            self
        }

        pub fn logins(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.logins(k, v);
            self
        }

        pub fn set_logins(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_logins(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetCredentialsForIdentity {
        handle: Arc<Handle>,
        inner: crate::input::get_credentials_for_identity_input::Builder,
    }

    impl GetCredentialsForIdentity {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::GetCredentialsForIdentityOutput, SdkError<crate::error::GetCredentialsForIdentityError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn identity_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.identity_id(inp);
            self
        }

        pub fn set_identity_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_identity_id(inp);
            self
        }

        pub fn logins(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.logins(k, v);
            self
        }

        pub fn set_logins(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_logins(inp);
            self
        }

        pub fn custom_role_arn(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.custom_role_arn(inp);
            self
        }

        pub fn set_custom_role_arn(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_custom_role_arn(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct GetOpenIdToken {
        handle: Arc<Handle>,
        inner: crate::input::get_open_id_token_input::Builder,
    }

    impl GetOpenIdToken {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::GetOpenIdTokenOutput, SdkError<crate::error::GetOpenIdTokenError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn identity_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.identity_id(inp);
            self
        }

        pub fn set_identity_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_identity_id(inp);
            self
        }

        pub fn logins(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            self.inner = self.inner.logins(k, v);
            self
        }

        pub fn set_logins(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.inner = self.inner.set_logins(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListIdentities {
        handle: Arc<Handle>,
        inner: crate::input::list_identities_input::Builder,
    }

    impl ListIdentities {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListIdentitiesOutput, SdkError<crate::error::ListIdentitiesError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn identity_pool_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.identity_pool_id(inp);
            self
        }

        pub fn set_identity_pool_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_identity_pool_id(inp);
            self
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

        pub fn hide_disabled(mut self, inp: bool) -> Self {
            self.inner = self.inner.hide_disabled(inp);
            self
        }

        pub fn set_hide_disabled(mut self, inp: Option<bool>) -> Self {
            self.inner = self.inner.set_hide_disabled(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeIdentityPool {
        handle: Arc<Handle>,
        inner: crate::input::describe_identity_pool_input::Builder,
    }

    impl DescribeIdentityPool {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeIdentityPoolOutput, SdkError<crate::error::DescribeIdentityPoolError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn identity_pool_id(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.identity_pool_id(inp);
            self
        }

        pub fn set_identity_pool_id(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_identity_pool_id(inp);
            self
        }
    }
}
