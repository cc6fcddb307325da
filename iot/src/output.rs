/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::model::ThingAttribute;
use std::collections::HashMap;

/// See [`CreateThingOutput`](crate::output::CreateThingOutput)
pub mod create_thing_output {
    use crate::output::CreateThingOutput;

    /// A builder for [`CreateThingOutput`](crate::output::CreateThingOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        thing_name: Option<String>,
        thing_arn: Option<String>,
        thing_id: Option<String>,
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
        pub fn thing_arn(mut self, inp: impl Into<String>) -> Self {
            self.thing_arn = Some(inp.into());
            self
        }
        pub fn set_thing_arn(mut self, inp: Option<String>) -> Self {
            self.thing_arn = inp;
            self
        }
        pub fn thing_id(mut self, inp: impl Into<String>) -> Self {
            self.thing_id = Some(inp.into());
            self
        }
        pub fn set_thing_id(mut self, inp: Option<String>) -> Self {
            self.thing_id = inp;
            self
        }
        /// Consumes the builder and constructs a [`CreateThingOutput`](crate::output::CreateThingOutput)
        pub fn build(self) -> CreateThingOutput {
            CreateThingOutput {
                thing_name: self.thing_name,
                thing_arn: self.thing_arn,
                thing_id: self.thing_id,
            }
        }
    }
}
impl CreateThingOutput {
    /// Creates a new builder-style object to manufacture [`CreateThingOutput`](crate::output::CreateThingOutput)
    pub fn builder() -> crate::output::create_thing_output::Builder {
        crate::output::create_thing_output::Builder::default()
    }
}

/// See [`DescribeThingOutput`](crate::output::DescribeThingOutput)
pub mod describe_thing_output {
    use crate::output::DescribeThingOutput;
    use std::collections::HashMap;

    /// A builder for [`DescribeThingOutput`](crate::output::DescribeThingOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        default_client_id: Option<String>,
        thing_name: Option<String>,
        thing_id: Option<String>,
        thing_arn: Option<String>,
        thing_type_name: Option<String>,
        attributes: Option<HashMap<String, String>>,
        version: Option<i64>,
        billing_group_name: Option<String>,
    }
    impl Builder {
        pub fn default_client_id(mut self, inp: impl Into<String>) -> Self {
            self.default_client_id = Some(inp.into());
            self
        }
        pub fn set_default_client_id(mut self, inp: Option<String>) -> Self {
            self.default_client_id = inp;
            self
        }
        pub fn thing_name(mut self, inp: impl Into<String>) -> Self {
            self.thing_name = Some(inp.into());
            self
        }
        pub fn set_thing_name(mut self, inp: Option<String>) -> Self {
            self.thing_name = inp;
            self
        }
        pub fn thing_id(mut self, inp: impl Into<String>) -> Self {
            self.thing_id = Some(inp.into());
            self
        }
        pub fn set_thing_id(mut self, inp: Option<String>) -> Self {
            self.thing_id = inp;
            self
        }
        pub fn thing_arn(mut self, inp: impl Into<String>) -> Self {
            self.thing_arn = Some(inp.into());
            self
        }
        pub fn set_thing_arn(mut self, inp: Option<String>) -> Self {
            self.thing_arn = inp;
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
        pub fn attributes(mut self, k: impl Into<String>, v: impl Into<String>) -> Self {
            let mut hash_map = self.attributes.unwrap_or_default();
            hash_map.insert(k.into(), v.into());
            self.attributes = Some(hash_map);
            self
        }
        pub fn set_attributes(mut self, inp: Option<HashMap<String, String>>) -> Self {
            self.attributes = inp;
            self
        }
        pub fn version(mut self, inp: i64) -> Self {
            self.version = Some(inp);
            self
        }
        pub fn set_version(mut self, inp: Option<i64>) -> Self {
            self.version = inp;
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
        /// Consumes the builder and constructs a [`DescribeThingOutput`](crate::output::DescribeThingOutput)
        pub fn build(self) -> DescribeThingOutput {
            DescribeThingOutput {
                default_client_id: self.default_client_id,
                thing_name: self.thing_name,
                thing_id: self.thing_id,
                thing_arn: self.thing_arn,
                thing_type_name: self.thing_type_name,
                attributes: self.attributes,
                version: self.version,
                billing_group_name: self.billing_group_name,
            }
        }
    }
}
impl DescribeThingOutput {
    /// Creates a new builder-style object to manufacture [`DescribeThingOutput`](crate::output::DescribeThingOutput)
    pub fn builder() -> crate::output::describe_thing_output::Builder {
        crate::output::describe_thing_output::Builder::default()
    }
}

/// See [`UpdateThingOutput`](crate::output::UpdateThingOutput)
pub mod update_thing_output {
    use crate::output::UpdateThingOutput;

    /// A builder for [`UpdateThingOutput`](crate::output::UpdateThingOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`UpdateThingOutput`](crate::output::UpdateThingOutput)
        pub fn build(self) -> UpdateThingOutput {
            UpdateThingOutput {}
        }
    }
}
impl UpdateThingOutput {
    /// Creates a new builder-style object to manufacture [`UpdateThingOutput`](crate::output::UpdateThingOutput)
    pub fn builder() -> crate::output::update_thing_output::Builder {
        crate::output::update_thing_output::Builder::default()
    }
}

/// See [`DeleteThingOutput`](crate::output::DeleteThingOutput)
pub mod delete_thing_output {
    use crate::output::DeleteThingOutput;

    /// A builder for [`DeleteThingOutput`](crate::output::DeleteThingOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`DeleteThingOutput`](crate::output::DeleteThingOutput)
        pub fn build(self) -> DeleteThingOutput {
            DeleteThingOutput {}
        }
    }
}
impl DeleteThingOutput {
    /// Creates a new builder-style object to manufacture [`DeleteThingOutput`](crate::output::DeleteThingOutput)
    pub fn builder() -> crate::output::delete_thing_output::Builder {
        crate::output::delete_thing_output::Builder::default()
    }
}

/// See [`ListThingsOutput`](crate::output::ListThingsOutput)
pub mod list_things_output {
    use crate::output::ListThingsOutput;
    use crate::model::ThingAttribute;

    /// A builder for [`ListThingsOutput`](crate::output::ListThingsOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        things: Option<Vec<ThingAttribute>>,
        next_token: Option<String>,
    }
    impl Builder {
        pub fn things(mut self, inp: impl Into<ThingAttribute>) -> Self {
            let mut v = self.things.unwrap_or_default();
            v.push(inp.into());
            self.things = Some(v);
            self
        }
        pub fn set_things(mut self, inp: Option<Vec<ThingAttribute>>) -> Self {
            self.things = inp;
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
        /// Consumes the builder and constructs a [`ListThingsOutput`](crate::output::ListThingsOutput)
        pub fn build(self) -> ListThingsOutput {
            ListThingsOutput {
                things: self.things,
                next_token: self.next_token,
            }
        }
    }
}
impl ListThingsOutput {
    /// Creates a new builder-style object to manufacture [`ListThingsOutput`](crate::output::ListThingsOutput)
    pub fn builder() -> crate::output::list_things_output::Builder {
        crate::output::list_things_output::Builder::default()
    }
}

/// See [`AttachPrincipalPolicyOutput`](crate::output::AttachPrincipalPolicyOutput)
pub mod attach_principal_policy_output {
    use crate::output::AttachPrincipalPolicyOutput;

    /// A builder for [`AttachPrincipalPolicyOutput`](crate::output::AttachPrincipalPolicyOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {}
    impl Builder {
        /// Consumes the builder and constructs a [`AttachPrincipalPolicyOutput`](crate::output::AttachPrincipalPolicyOutput)
        pub fn build(self) -> AttachPrincipalPolicyOutput {
            AttachPrincipalPolicyOutput {}
        }
    }
}
impl AttachPrincipalPolicyOutput {
    /// Creates a new builder-style object to manufacture [`AttachPrincipalPolicyOutput`](crate::output::AttachPrincipalPolicyOutput)
    pub fn builder() -> crate::output::attach_principal_policy_output::Builder {
        crate::output::attach_principal_policy_output::Builder::default()
    }
}

/// See [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
pub mod describe_endpoint_output {
    use crate::output::DescribeEndpointOutput;

    /// A builder for [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        endpoint_address: Option<String>,
    }
    impl Builder {
        pub fn endpoint_address(mut self, inp: impl Into<String>) -> Self {
            self.endpoint_address = Some(inp.into());
            self
        }
        pub fn set_endpoint_address(mut self, inp: Option<String>) -> Self {
            self.endpoint_address = inp;
            self
        }
        /// Consumes the builder and constructs a [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
        pub fn build(self) -> DescribeEndpointOutput {
            DescribeEndpointOutput {
                endpoint_address: self.endpoint_address,
            }
        }
    }
}
impl DescribeEndpointOutput {
    /// Creates a new builder-style object to manufacture [`DescribeEndpointOutput`](crate::output::DescribeEndpointOutput)
    pub fn builder() -> crate::output::describe_endpoint_output::Builder {
        crate::output::describe_endpoint_output::Builder::default()
    }
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct CreateThingOutput {
    /// <p>The name of the new thing.</p>
    #[serde(rename = "thingName")]
    pub thing_name: Option<String>,
    /// <p>The ARN of the new thing.</p>
    #[serde(rename = "thingArn")]
    pub thing_arn: Option<String>,
    /// <p>The thing ID.</p>
    #[serde(rename = "thingId")]
    pub thing_id: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DescribeThingOutput {
    /// <p>The default MQTT client ID. For a typical device, the thing name is also used as the default
    /// MQTT client ID.</p>
    #[serde(rename = "defaultClientId")]
    pub default_client_id: Option<String>,
    /// <p>The name of the thing.</p>
    #[serde(rename = "thingName")]
    pub thing_name: Option<String>,
    /// <p>The ID of the thing to describe.</p>
    #[serde(rename = "thingId")]
    pub thing_id: Option<String>,
    /// <p>The ARN of the thing to describe.</p>
    #[serde(rename = "thingArn")]
    pub thing_arn: Option<String>,
    /// <p>The thing type name.</p>
    #[serde(rename = "thingTypeName")]
    pub thing_type_name: Option<String>,
    /// <p>The thing attributes.</p>
    #[serde(rename = "attributes")]
    pub attributes: Option<HashMap<String, String>>,
    /// <p>The current version of the thing record in the registry.</p>
    #[serde(rename = "version")]
    pub version: Option<i64>,
    /// <p>The name of the billing group the thing belongs to.</p>
    #[serde(rename = "billingGroupName")]
    pub billing_group_name: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct UpdateThingOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DeleteThingOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct ListThingsOutput {
    /// <p>The things.</p>
    #[serde(rename = "things")]
    pub things: Option<Vec<ThingAttribute>>,
    /// <p>The token to use to get the next set of results. Will not be returned if operation has
    /// returned all results.</p>
    #[serde(rename = "nextToken")]
    pub next_token: Option<String>,
}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct AttachPrincipalPolicyOutput {}

#[non_exhaustive]
#[derive(serde::Deserialize, Clone, PartialEq, Debug)]
pub struct DescribeEndpointOutput {
    /// <p>The endpoint. The format of the endpoint is as follows: <i>identifier</i>.iot.<i>region</i>.amazonaws.com.</p>
    #[serde(rename = "endpointAddress")]
    pub endpoint_address: Option<String>,
}

#[cfg(test)]
mod test {
    use crate::output::{DescribeThingOutput, ListThingsOutput, UpdateThingOutput};

    #[test]
    fn describe_thing_output() {
        let output: DescribeThingOutput = serde_json::from_str(
            r#"{
                "defaultClientId": "lamp-post-17",
                "thingName": "lamp-post-17",
                "thingId": "8d1f3a9e-2b4c-4c1e-9e6a-0f2d7b5c3a11",
                "thingArn": "arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17",
                "thingTypeName": "street-light",
                "attributes": {"color": "amber"},
                "version": 2
            }"#,
        )
        .unwrap();
        assert_eq!(
            output,
            DescribeThingOutput::builder()
                .default_client_id("lamp-post-17")
                .thing_name("lamp-post-17")
                .thing_id("8d1f3a9e-2b4c-4c1e-9e6a-0f2d7b5c3a11")
                .thing_arn("arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17")
                .thing_type_name("street-light")
                .attributes("color", "amber")
                .version(2)
                .build()
        );
    }

    #[test]
    fn list_things_output() {
        let output: ListThingsOutput = serde_json::from_str(
            r#"{"things":[{"thingName":"a","version":1},{"thingName":"b","version":7}],"nextToken":"abc"}"#,
        )
        .unwrap();
        let things = output.things.unwrap();
        assert_eq!(things.len(), 2);
        assert_eq!(things[1].thing_name.as_deref(), Some("b"));
        assert_eq!(things[1].version, Some(7));
        assert_eq!(output.next_token.as_deref(), Some("abc"));
    }

    #[test]
    fn empty_output() {
        let output: UpdateThingOutput = serde_json::from_str("{}").unwrap();
        assert_eq!(output, UpdateThingOutput::builder().build());
    }
}
