/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::collections::HashMap;

/// <p>The attribute payload.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct AttributePayload {
    /// <p>A JSON string containing up to three key-value pair in JSON format. For example:</p>
    /// <p><code>{"attributes":{"string1":"string2"}}</code></p>
    #[serde(rename = "attributes")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    /// <p>Specifies whether the list of attributes provided in the <code>AttributePayload</code> is
    /// merged with the attributes stored in the registry, instead of overwriting them.</p>
    /// <p>To remove an attribute, call <code>UpdateThing</code> with an empty attribute value.</p>
    #[serde(rename = "merge")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<bool>,
}
/// See [`AttributePayload`](crate::model::AttributePayload)
pub mod attribute_payload {
    use crate::model::AttributePayload;
    use std::collections::HashMap;

    /// A builder for [`AttributePayload`](crate::model::AttributePayload)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        attributes: Option<HashMap<String, String>>,
        merge: Option<bool>,
    }
    impl Builder {
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
        pub fn merge(mut self, inp: bool) -> Self {
            self.merge = Some(inp);
            self
        }
        pub fn set_merge(mut self, inp: Option<bool>) -> Self {
            self.merge = inp;
            self
        }
        /// Consumes the builder and constructs a [`AttributePayload`](crate::model::AttributePayload)
        pub fn build(self) -> AttributePayload {
            AttributePayload {
                attributes: self.attributes,
                merge: self.merge,
            }
        }
    }
}
impl AttributePayload {
    /// Creates a new builder-style object to manufacture [`AttributePayload`](crate::model::AttributePayload)
    pub fn builder() -> crate::model::attribute_payload::Builder {
        crate::model::attribute_payload::Builder::default()
    }
}

/// <p>The properties of the thing, including thing name, thing type name, and a list of thing
/// attributes.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, serde::Serialize, Clone, PartialEq, Debug)]
pub struct ThingAttribute {
    /// <p>The name of the thing.</p>
    #[serde(rename = "thingName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_name: Option<String>,
    /// <p>The name of the thing type, if the thing has been associated with a type.</p>
    #[serde(rename = "thingTypeName")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_type_name: Option<String>,
    /// <p>The thing ARN.</p>
    #[serde(rename = "thingArn")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thing_arn: Option<String>,
    /// <p>A list of thing attributes which are name-value pairs.</p>
    #[serde(rename = "attributes")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
    /// <p>The version of the thing record in the registry.</p>
    #[serde(rename = "version")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}
/// See [`ThingAttribute`](crate::model::ThingAttribute)
pub mod thing_attribute {
    use crate::model::ThingAttribute;
    use std::collections::HashMap;

    /// A builder for [`ThingAttribute`](crate::model::ThingAttribute)
    #[non_exhaustive]
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct Builder {
        thing_name: Option<String>,
        thing_type_name: Option<String>,
        thing_arn: Option<String>,
        attributes: Option<HashMap<String, String>>,
        version: Option<i64>,
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
        pub fn thing_arn(mut self, inp: impl Into<String>) -> Self {
            self.thing_arn = Some(inp.into());
            self
        }
        pub fn set_thing_arn(mut self, inp: Option<String>) -> Self {
            self.thing_arn = inp;
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
        /// Consumes the builder and constructs a [`ThingAttribute`](crate::model::ThingAttribute)
        pub fn build(self) -> ThingAttribute {
            ThingAttribute {
                thing_name: self.thing_name,
                thing_type_name: self.thing_type_name,
                thing_arn: self.thing_arn,
                attributes: self.attributes,
                version: self.version,
            }
        }
    }
}
impl ThingAttribute {
    /// Creates a new builder-style object to manufacture [`ThingAttribute`](crate::model::ThingAttribute)
    pub fn builder() -> crate::model::thing_attribute::Builder {
        crate::model::thing_attribute::Builder::default()
    }
}

#[cfg(test)]
mod test {
    use crate::model::{AttributePayload, ThingAttribute};

    #[test]
    fn attribute_payload_merge() {
        let payload = AttributePayload::builder()
            .attributes("color", "amber")
            .attributes("height", "6m")
            .merge(true)
            .build();
        let json: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"attributes": {"color": "amber", "height": "6m"}, "merge": true})
        );
    }

    #[test]
    fn absent_members_are_omitted() {
        let payload = AttributePayload::builder().merge(false).build();
        assert_eq!(serde_json::to_string(&payload).unwrap(), r#"{"merge":false}"#);
    }

    #[test]
    fn thing_attribute() {
        let thing: ThingAttribute = serde_json::from_str(
            r#"{"thingName":"lamp-post-17","thingArn":"arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17","attributes":{"color":"amber"},"version":3,"unknownField":true}"#,
        )
        .unwrap();
        assert_eq!(
            thing,
            ThingAttribute::builder()
                .thing_name("lamp-post-17")
                .thing_arn("arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17")
                .attributes("color", "amber")
                .version(3)
                .build()
        );
        assert_eq!(thing.thing_type_name, None);
    }
}
