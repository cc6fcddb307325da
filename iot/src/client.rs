/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! A fluent client for AWS IoT
//!
//! ```no_run
//! # async fn docs() -> Result<(), iot::Error> {
//! let client = iot::Client::from_env();
//! let thing = client
//!     .create_thing()
//!     .thing_name("lamp-post-17")
//!     .thing_type_name("street-light")
//!     .send()
//!     .await?;
//! println!("created {:?}", thing.thing_arn);
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

    pub fn create_thing(&self) -> fluent_builders::CreateThing {
        fluent_builders::CreateThing::new(self.handle.clone())
    }

    pub fn describe_thing(&self) -> fluent_builders::DescribeThing {
        fluent_builders::DescribeThing::new(self.handle.clone())
    }

    pub fn update_thing(&self) -> fluent_builders::UpdateThing {
        fluent_builders::UpdateThing::new(self.handle.clone())
    }

    pub fn delete_thing(&self) -> fluent_builders::DeleteThing {
        fluent_builders::DeleteThing::new(self.handle.clone())
    }

    pub fn list_things(&self) -> fluent_builders::ListThings {
        fluent_builders::ListThings::new(self.handle.clone())
    }

    pub fn attach_principal_policy(&self) -> fluent_builders::AttachPrincipalPolicy {
        fluent_builders::AttachPrincipalPolicy::new(self.handle.clone())
    }

    pub fn describe_endpoint(&self) -> fluent_builders::DescribeEndpoint {
        fluent_builders::DescribeEndpoint::new(self.handle.clone())
    }
}

pub mod fluent_builders {
    use crate::client::Handle;
    use crate::model::AttributePayload;
    use smithy_http::result::SdkError;
    use std::sync::Arc;

    #[derive(Debug)]
    pub struct CreateThing {
        handle: Arc<Handle>,
        inner: crate::input::create_thing_input::Builder,
    }

    impl CreateThing {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::CreateThingOutput, SdkError<crate::error::CreateThingError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_name(inp);
            self
        }

        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_name(inp);
            self
        }

        pub fn thing_type_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_type_name(inp);
            self
        }

        pub fn set_thing_type_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_type_name(inp);
            self
        }

        pub fn attribute_payload(mut self, inp: AttributePayload) -> Self {
            self.inner = self.inner.attribute_payload(inp);
            self
        }

        pub fn set_attribute_payload(mut self, inp: Option<AttributePayload>) -> Self {
            self.inner = self.inner.set_attribute_payload(inp);
            self
        }

        pub fn billing_group_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.billing_group_name(inp);
            self
        }

        pub fn set_billing_group_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_billing_group_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeThing {
        handle: Arc<Handle>,
        inner: crate::input::describe_thing_input::Builder,
    }

    impl DescribeThing {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeThingOutput, SdkError<crate::error::DescribeThingError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_name(inp);
            self
        }

        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct UpdateThing {
        handle: Arc<Handle>,
        inner: crate::input::update_thing_input::Builder,
    }

    impl UpdateThing {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::UpdateThingOutput, SdkError<crate::error::UpdateThingError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_name(inp);
            self
        }

        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_name(inp);
            self
        }

        pub fn thing_type_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_type_name(inp);
            self
        }

        pub fn set_thing_type_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_type_name(inp);
            self
        }

        pub fn attribute_payload(mut self, inp: AttributePayload) -> Self {
            self.inner = self.inner.attribute_payload(inp);
            self
        }

        pub fn set_attribute_payload(mut self, inp: Option<AttributePayload>) -> Self {
            self.inner = self.inner.set_attribute_payload(inp);
            self
        }

        pub fn expected_version(mut self, inp: i64) -> Self {
            self.inner = self.inner.expected_version(inp);
            self
        }

        pub fn set_expected_version(mut self, inp: Option<i64>) -> Self {
            self.inner = self.inner.set_expected_version(inp);
            self
        }

        pub fn remove_thing_type(mut self, inp: bool) -> Self {
            self.inner = self.inner.remove_thing_type(inp);
            self
        }

        pub fn set_remove_thing_type(mut self, inp: Option<bool>) -> Self {
            self.inner = self.inner.set_remove_thing_type(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DeleteThing {
        handle: Arc<Handle>,
        inner: crate::input::delete_thing_input::Builder,
    }

    impl DeleteThing {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DeleteThingOutput, SdkError<crate::error::DeleteThingError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_name(inp);
            self
        }

        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_name(inp);
            self
        }

        pub fn expected_version(mut self, inp: i64) -> Self {
            self.inner = self.inner.expected_version(inp);
            self
        }

        pub fn set_expected_version(mut self, inp: Option<i64>) -> Self {
            self.inner = self.inner.set_expected_version(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct ListThings {
        handle: Arc<Handle>,
        inner: crate::input::list_things_input::Builder,
    }

    impl ListThings {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::ListThingsOutput, SdkError<crate::error::ListThingsError>> {
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

        pub fn attribute_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.attribute_name(inp);
            self
        }

        pub fn set_attribute_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_attribute_name(inp);
            self
        }

        pub fn attribute_value(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.attribute_value(inp);
            self
        }

        pub fn set_attribute_value(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_attribute_value(inp);
            self
        }

        pub fn thing_type_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.thing_type_name(inp);
            self
        }

        pub fn set_thing_type_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_thing_type_name(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct AttachPrincipalPolicy {
        handle: Arc<Handle>,
        inner: crate::input::attach_principal_policy_input::Builder,
    }

    impl AttachPrincipalPolicy {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::AttachPrincipalPolicyOutput, SdkError<crate::error::AttachPrincipalPolicyError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn policy_name(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.policy_name(inp);
            self
        }

        pub fn set_policy_name(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_policy_name(inp);
            self
        }

        pub fn principal(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.principal(inp);
            self
        }

        pub fn set_principal(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_principal(inp);
            self
        }
    }

    #[derive(Debug)]
    pub struct DescribeEndpoint {
        handle: Arc<Handle>,
        inner: crate::input::describe_endpoint_input::Builder,
    }

    impl DescribeEndpoint {
        pub(crate) fn new(handle: Arc<Handle>) -> Self {
            Self {
                handle,
                inner: Default::default(),
            }
        }

        pub async fn send(
            self,
        ) -> Result<crate::output::DescribeEndpointOutput, SdkError<crate::error::DescribeEndpointError>> {
            let input = self
                .inner
                .build()
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            let op = input
                .make_operation(&self.handle.conf)
                .map_err(|err| SdkError::ConstructionFailure(err.into()))?;
            self.handle.client.call(op).await
        }

        pub fn endpoint_type(mut self, inp: impl Into<String>) -> Self {
            self.inner = self.inner.endpoint_type(inp);
            self
        }

        pub fn set_endpoint_type(mut self, inp: Option<String>) -> Self {
            self.inner = self.inner.set_endpoint_type(inp);
            self
        }
    }
}
