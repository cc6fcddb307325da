/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Operation inputs
//!
//! Members bound to the URI, the query string or a header are never part of the JSON body.

use crate::config::Config;
use crate::model::AttributePayload;
use aws_http::AwsErrorRetryPolicy;
use http::HeaderValue;
use smithy_http::operation::{BuildError, Operation};
use smithy_http::query;

/// See [`CreateThingInput`](crate::input::CreateThingInput)
pub mod create_thing_input {
    use crate::input::CreateThingInput;
    use crate::model::AttributePayload;
    use smithy_http::operation::BuildError;

    /// A builder for [`CreateThingInput`](crate::input::CreateThingInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        thing_name: Option<String>,
        thing_type_name: Option<String>,
        attribute_payload: Option<AttributePayload>,
        billing_group_name: Option<String>,
    }
    impl Builder {
        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_name = Some(inp.into());
            self
        }
        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.thing_name = inp;
            self
        }
        pub fn thing_type_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_type_name = Some(inp.into());
            self
        }
        pub fn set_thing_type_name(mut self, inp: Option<String>) -> Self {
            self.thing_type_name = inp;
            self
        }
        pub fn attribute_payload(mut self, inp: AttributePayload) -> Self {
            self.attribute_payload = Some(inp);
            self
        }
        pub fn set_attribute_payload(mut self, inp: Option<AttributePayload>) -> Self {
            self.attribute_payload = inp;
            self
        }
        pub fn billing_group_name(mut self, inp: impl Into<String>) -> Self {
            self.billing_group_name = Some(inp.into());
            self
        }
        pub fn set_billing_group_name(mut self, inp: Option<String>) -> Self {
            self.billing_group_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateThingInput`](crate::input::CreateThingInput)
        pub fn build(self) -> Result<CreateThingInput, BuildError> {
            Ok(CreateThingInput {
                thing_name: self.thing_name,
                thing_type_name: self.thing_type_name,
                attribute_payload: self.attribute_payload,
                billing_group_name: self.billing_group_name,
            })
        }
    }
}
impl CreateThingInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::CreateThing, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/things/{}",
            crate::protocol::label("thingName", self.thing_name.as_deref())?
        );
        let request = crate::protocol::with_json_body(
            crate::protocol::request_builder(http::Method::POST, uri),
            self,
        )?;
        crate::protocol::build_operation(
            config,
            "CreateThing",
            request,
            crate::operation::CreateThing::new(),
        )
    }
    pub fn builder() -> crate::input::create_thing_input::Builder {
        crate::input::create_thing_input::Builder::default()
    }
}

/// See [`DescribeThingInput`](crate::input::DescribeThingInput)
pub mod describe_thing_input {
    use crate::input::DescribeThingInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeThingInput`](crate::input::DescribeThingInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        thing_name: Option<String>,
    }
    impl Builder {
        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_name = Some(inp.into());
            self
        }
        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.thing_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeThingInput`](crate::input::DescribeThingInput)
        pub fn build(self) -> Result<DescribeThingInput, BuildError> {
            Ok(DescribeThingInput {
                thing_name: self.thing_name,
            })
        }
    }
}
impl DescribeThingInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeThing, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/things/{}",
            crate::protocol::label("thingName", self.thing_name.as_deref())?
        );
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::GET,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DescribeThing",
            request,
            crate::operation::DescribeThing::new(),
        )
    }
    pub fn builder() -> crate::input::describe_thing_input::Builder {
        crate::input::describe_thing_input::Builder::default()
    }
}

/// See [`UpdateThingInput`](crate::input::UpdateThingInput)
pub mod update_thing_input {
    use crate::input::UpdateThingInput;
    use crate::model::AttributePayload;
    use smithy_http::operation::BuildError;

    /// A builder for [`UpdateThingInput`](crate::input::UpdateThingInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        thing_name: Option<String>,
        thing_type_name: Option<String>,
        attribute_payload: Option<AttributePayload>,
        expected_version: Option<i64>,
        remove_thing_type: Option<bool>,
    }
    impl Builder {
        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_name = Some(inp.into());
            self
        }
        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.thing_name = inp;
            self
        }
        pub fn thing_type_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_type_name = Some(inp.into());
            self
        }
        pub fn set_thing_type_name(mut self, inp: Option<String>) -> Self {
            self.thing_type_name = inp;
            self
        }
        pub fn attribute_payload(mut self, inp: AttributePayload) -> Self {
            self.attribute_payload = Some(inp);
            self
        }
        pub fn set_attribute_payload(mut self, inp: Option<AttributePayload>) -> Self {
            self.attribute_payload = inp;
            self
        }
        pub fn expected_version(mut self, inp: i64) -> Self {
            self.expected_version = Some(inp);
            self
        }
        pub fn set_expected_version(mut self, inp: Option<i64>) -> Self {
            self.expected_version = inp;
            self
        }
        pub fn remove_thing_type(mut self, inp: bool) -> Self {
            self.remove_thing_type = Some(inp);
            self
        }
        pub fn set_remove_thing_type(mut self, inp: Option<bool>) -> Self {
            self.remove_thing_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`UpdateThingInput`](crate::input::UpdateThingInput)
        pub fn build(self) -> Result<UpdateThingInput, BuildError> {
            Ok(UpdateThingInput {
                thing_name: self.thing_name,
                thing_type_name: self.thing_type_name,
                attribute_payload: self.attribute_payload,
                expected_version: self.expected_version,
                remove_thing_type: self.remove_thing_type,
            })
        }
    }
}
impl UpdateThingInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::UpdateThing, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/things/{}",
            crate::protocol::label("thingName", self.thing_name.as_deref())?
        );
        let request = crate::protocol::with_json_body(
            crate::protocol::request_builder(http::Method::PATCH, uri),
            self,
        )?;
        crate::protocol::build_operation(
            config,
            "UpdateThing",
            request,
            crate::operation::UpdateThing::new(),
        )
    }
    pub fn builder() -> crate::input::update_thing_input::Builder {
        crate::input::update_thing_input::Builder::default()
    }
}

/// See [`DeleteThingInput`](crate::input::DeleteThingInput)
pub mod delete_thing_input {
    use crate::input::DeleteThingInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DeleteThingInput`](crate::input::DeleteThingInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        thing_name: Option<String>,
        expected_version: Option<i64>,
    }
    impl Builder {
        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_name = Some(inp.into());
            self
        }
        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.thing_name = inp;
            self
        }
        pub fn expected_version(mut self, inp: i64) -> Self {
            self.expected_version = Some(inp);
            self
        }
        pub fn set_expected_version(mut self, inp: Option<i64>) -> Self {
            self.expected_version = inp;
            self
        }
        /// Consumes the builder and constructs a [`DeleteThingInput`](crate::input::DeleteThingInput)
        pub fn build(self) -> Result<DeleteThingInput, BuildError> {
            Ok(DeleteThingInput {
                thing_name: self.thing_name,
                expected_version: self.expected_version,
            })
        }
    }
}
impl DeleteThingInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DeleteThing, AwsErrorRetryPolicy>, BuildError> {
        let mut uri = format!(
            "/things/{}",
            crate::protocol::label("thingName", self.thing_name.as_deref())?
        );
        let mut query = query::Writer::new(&mut uri);
        query.push_opt(
            "expectedVersion",
            self.expected_version.map(|v| v.to_string()),
        );
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::DELETE,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DeleteThing",
            request,
            crate::operation::DeleteThing::new(),
        )
    }
    pub fn builder() -> crate::input::delete_thing_input::Builder {
        crate::input::delete_thing_input::Builder::default()
    }
}

/// See [`ListThingsInput`](crate::input::ListThingsInput)
pub mod list_things_input {
    use crate::input::ListThingsInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`ListThingsInput`](crate::input::ListThingsInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        max_results: Option<i32>,
        next_token: Option<String>,
        attribute_name: Option<String>,
        attribute_value: Option<String>,
        thing_type_name: Option<String>,
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
        pub fn attribute_name(mut self, inp: impl Into<String>) -> Self {
            self.attribute_name = Some(inp.into());
            self
        }
        pub fn set_attribute_name(mut self, inp: Option<String>) -> Self {
            self.attribute_name = inp;
            self
        }
        pub fn attribute_value(mut self, inp: impl Into<String>) -> Self {
            self.attribute_value = Some(inp.into());
            self
        }
        pub fn set_attribute_value(mut self, inp: Option<String>) -> Self {
            self.attribute_value = inp;
            self
        }
        pub fn thing_type_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_type_name = Some(inp.into());
            self
        }
        pub fn set_thing_type_name(mut self, inp: Option<String>) -> Self {
            self.thing_type_name = inp;
            self
        }
        /// Consumes the builder and constructs a [`ListThingsInput`](crate::input::ListThingsInput)
        pub fn build(self) -> Result<ListThingsInput, BuildError> {
            Ok(ListThingsInput {
                max_results: self.max_results,
                next_token: self.next_token,
                attribute_name: self.attribute_name,
                attribute_value: self.attribute_value,
                thing_type_name: self.thing_type_name,
            })
        }
    }
}
impl ListThingsInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::ListThings, AwsErrorRetryPolicy>, BuildError> {
        let mut uri = String::from("/things");
        let mut query = query::Writer::new(&mut uri);
        query.push_opt("maxResults", self.max_results.map(|v| v.to_string()));
        query.push_opt("nextToken", self.next_token.as_ref());
        query.push_opt("attributeName", self.attribute_name.as_ref());
        query.push_opt("attributeValue", self.attribute_value.as_ref());
        query.push_opt("thingTypeName", self.thing_type_name.as_ref());
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::GET,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "ListThings",
            request,
            crate::operation::ListThings::new(),
        )
    }
    pub fn builder() -> crate::input::list_things_input::Builder {
        crate::input::list_things_input::Builder::default()
    }
}

/// See [`AttachPrincipalPolicyInput`](crate::input::AttachPrincipalPolicyInput)
pub mod attach_principal_policy_input {
    use crate::input::AttachPrincipalPolicyInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`AttachPrincipalPolicyInput`](crate::input::AttachPrincipalPolicyInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        policy_name: Option<String>,
        principal: Option<String>,
    }
    impl Builder {
        pub fn policy_name(mut self, inp: impl Into<String>) -> Self {
            self.policy_name = Some(inp.into());
            self
        }
        pub fn set_policy_name(mut self, inp: Option<String>) -> Self {
            self.policy_name = inp;
            self
        }
        pub fn principal(mut self, inp: impl Into<String>) -> Self {
            self.principal = Some(inp.into());
            self
        }
        pub fn set_principal(mut self, inp: Option<String>) -> Self {
            self.principal = inp;
            self
        }
        /// Consumes the builder and constructs a [`AttachPrincipalPolicyInput`](crate::input::AttachPrincipalPolicyInput)
        pub fn build(self) -> Result<AttachPrincipalPolicyInput, BuildError> {
            Ok(AttachPrincipalPolicyInput {
                policy_name: self.policy_name,
                principal: self.principal,
            })
        }
    }
}
impl AttachPrincipalPolicyInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::AttachPrincipalPolicy, AwsErrorRetryPolicy>, BuildError> {
        let uri = format!(
            "/principal-policies/{}",
            crate::protocol::label("policyName", self.policy_name.as_deref())?
        );
        let mut builder = crate::protocol::request_builder(http::Method::PUT, uri);
        if let Some(principal) = &self.principal {
            let value = HeaderValue::from_str(principal).map_err(|err| BuildError::InvalidField {
                field: "principal",
                details: format!("`{}` cannot be used as a header value: {}", principal, err),
            })?;
            builder = builder.header("x-amzn-iot-principal", value);
        }
        let request = crate::protocol::with_empty_body(builder)?;
        crate::protocol::build_operation(
            config,
            "AttachPrincipalPolicy",
            request,
            crate::operation::AttachPrincipalPolicy::new(),
        )
    }
    pub fn builder() -> crate::input::attach_principal_policy_input::Builder {
        crate::input::attach_principal_policy_input::Builder::default()
    }
}

/// See [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
pub mod describe_endpoint_input {
    use crate::input::DescribeEndpointInput;
    use smithy_http::operation::BuildError;

    /// A builder for [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        endpoint_type: Option<String>,
    }
    impl Builder {
        pub fn endpoint_type(mut self, inp: impl Into<String>) -> Self {
            self.endpoint_type = Some(inp.into());
            self
        }
        pub fn set_endpoint_type(mut self, inp: Option<String>) -> Self {
            self.endpoint_type = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEndpointInput`](crate::input::DescribeEndpointInput)
        pub fn build(self) -> Result<DescribeEndpointInput, BuildError> {
            Ok(DescribeEndpointInput {
                endpoint_type: self.endpoint_type,
            })
        }
    }
}
impl DescribeEndpointInput {
    /// Consumes the input and constructs an [`Operation`](smithy_http::operation::Operation)
    pub fn make_operation(
        &self,
        config: &Config,
    ) -> Result<Operation<crate::operation::DescribeEndpoint, AwsErrorRetryPolicy>, BuildError> {
        let mut uri = String::from("/endpoint");
        let mut query = query::Writer::new(&mut uri);
        query.push_opt("endpointType", self.endpoint_type.as_ref());
        let request = crate::protocol::with_empty_body(crate::protocol::request_builder(
            http::Method::GET,
            uri,
        ))?;
        crate::protocol::build_operation(
            config,
            "DescribeEndpoint",
            request,
            crate::operation::DescribeEndpoint::new(),
        )
    }
    pub fn builder() -> crate::input::describe_endpoint_input::Builder {
        crate::input::describe_endpoint_input::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct CreateThingInput {
    /// <p>The name of the thing to create.</p>
    /// <p>You can't change a thing's name after you create it.</p>
    #[serde(skip)]
    pub thing_name: Option<String>,
    /// <p>The name of the thing type associated with the new thing.</p>
    #[serde(rename = "thingTypeName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_type_name: Option<String>,
    /// <p>The attribute payload, which consists of up to three name/value pairs in a JSON document.</p>
    #[serde(rename = "attributePayload")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_payload: Option<AttributePayload>,
    /// <p>The name of the billing group the thing will be added to.</p>
    #[serde(rename = "billingGroupName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_group_name: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DescribeThingInput {
    /// <p>The name of the thing.</p>
    pub thing_name: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Serialize, Clone, PartialEq, Debug)]
pub struct UpdateThingInput {
    /// <p>The name of the thing to update.</p>
    #[serde(skip)]
    pub thing_name: Option<String>,
    /// <p>The name of the thing type.</p>
    #[serde(rename = "thingTypeName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_type_name: Option<String>,
    /// <p>A list of thing attributes, a JSON string containing name-value pairs.</p>
    #[serde(rename = "attributePayload")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute_payload: Option<AttributePayload>,
    /// <p>The expected version of the thing record in the registry. If the version of the record in
    /// the registry does not match the expected version specified in the request, the
    /// <code>UpdateThing</code> request is rejected with a <code>VersionConflictException</code>.</p>
    #[serde(rename = "expectedVersion")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_version: Option<i64>,
    /// <p>Remove a thing type association. If <b>true</b>, the association is removed.</p>
    #[serde(rename = "removeThingType")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_thing_type: Option<bool>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DeleteThingInput {
    /// <p>The name of the thing to delete.</p>
    pub thing_name: Option<String>,
    /// <p>The expected version of the thing record in the registry. If the version of the record in
    /// the registry does not match the expected version specified in the request, the
    /// <code>DeleteThing</code> request is rejected with a <code>VersionConflictException</code>.</p>
    pub expected_version: Option<i64>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct ListThingsInput {
    /// <p>The maximum number of results to return in this operation.</p>
    pub max_results: Option<i32>,
    /// <p>To retrieve the next set of results, the <code>nextToken</code> value from a previous
    /// response; otherwise <b>null</b> to receive the first set of results.</p>
    pub next_token: Option<String>,
    /// <p>The attribute name used to search for things.</p>
    pub attribute_name: Option<String>,
    /// <p>The attribute value used to search for things.</p>
    pub attribute_value: Option<String>,
    /// <p>The name of the thing type used to search for things.</p>
    pub thing_type_name: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct AttachPrincipalPolicyInput {
    /// <p>The policy name.</p>
    pub policy_name: Option<String>,
    /// <p>The principal, which can be a certificate ARN (as returned from the CreateCertificate
    /// operation) or an Amazon Cognito ID.</p>
    pub principal: Option<String>,
}

#[non_exhaustive]
#[derive(Clone, PartialEq, Debug)]
pub struct DescribeEndpointInput {
    /// <p>The endpoint type. Valid endpoint types include <code>iot:Data-ATS</code> for the data plane
    /// and <code>iot:CredentialProvider</code> for the credentials provider.</p>
    pub endpoint_type: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::input::{
        AttachPrincipalPolicyInput, CreateThingInput, DeleteThingInput, DescribeThingInput,
        ListThingsInput,
    };
    use crate::model::AttributePayload;
    use crate::{Config, Region};
    use smithy_http::operation::BuildError;

    fn config() -> Config {
        Config::builder().region(Region::new("us-east-1")).build()
    }

    fn body(request: &http::Request<smithy_http::body::SdkBody>) -> &str {
        std::str::from_utf8(request.body().bytes().unwrap()).unwrap()
    }

    #[test]
    fn create_thing_request() {
        let op = CreateThingInput::builder()
            .thing_name("lamp-post-17")
            .thing_type_name("street-light")
            .attribute_payload(AttributePayload::builder().attributes("color", "amber").build())
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::POST);
        assert_eq!(request.uri(), "/things/lamp-post-17");
        assert_eq!(
            request.headers().get("content-type").unwrap(),
            "application/json"
        );
        assert_eq!(
            body(request),
            r#"{"thingTypeName":"street-light","attributePayload":{"attributes":{"color":"amber"}}}"#
        );
        assert_eq!(op.metadata().unwrap().name(), "CreateThing");
    }

    #[test]
    fn labels_are_encoded() {
        let op = DescribeThingInput::builder()
            .thing_name("lamp post/17")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::GET);
        assert_eq!(request.uri(), "/things/lamp%20post%2F17");
        assert_eq!(body(request), "");
    }

    #[test]
    fn labels_are_required() {
        let err = DescribeThingInput::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .err()
            .expect("thingName is unset");
        assert!(
            matches!(err, BuildError::MissingField { field: "thingName", .. }),
            "{}",
            err
        );
        let err = DeleteThingInput::builder()
            .thing_name("")
            .build()
            .unwrap()
            .make_operation(&config())
            .err()
            .expect("thingName is empty");
        assert!(
            matches!(err, BuildError::InvalidField { field: "thingName", .. }),
            "{}",
            err
        );
    }

    #[test]
    fn query_parameters_are_only_sent_when_set() {
        let op = ListThingsInput::builder()
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(op.request().http().uri(), "/things");

        let op = ListThingsInput::builder()
            .max_results(10)
            .thing_type_name("street light")
            .attribute_name("color")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        assert_eq!(
            op.request().http().uri(),
            "/things?maxResults=10&attributeName=color&thingTypeName=street%20light"
        );
    }

    #[test]
    fn delete_thing_request() {
        let op = DeleteThingInput::builder()
            .thing_name("lamp-post-17")
            .expected_version(4)
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::DELETE);
        assert_eq!(request.uri(), "/things/lamp-post-17?expectedVersion=4");
    }

    #[test]
    fn principal_is_sent_as_a_header() {
        let op = AttachPrincipalPolicyInput::builder()
            .policy_name("lamp-policy")
            .principal("us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e")
            .build()
            .unwrap()
            .make_operation(&config())
            .unwrap();
        let request = op.request().http();
        assert_eq!(request.method(), http::Method::PUT);
        assert_eq!(request.uri(), "/principal-policies/lamp-policy");
        assert_eq!(
            request.headers().get("x-amzn-iot-principal").unwrap(),
            "us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e"
        );

        let err = AttachPrincipalPolicyInput::builder()
            .policy_name("lamp-policy")
            .principal("line\nbreak")
            .build()
            .unwrap()
            .make_operation(&config())
            .err()
            .expect("newlines are not valid in headers");
        assert!(matches!(err, BuildError::InvalidField { field: "principal", .. }));
    }

    #[test]
    fn setters_are_interchangeable() {
        assert_eq!(
            CreateThingInput::builder().thing_name("lamp").build().unwrap(),
            CreateThingInput::builder()
                .set_thing_name(Some("lamp".to_string()))
                .build()
                .unwrap()
        );
    }
}
