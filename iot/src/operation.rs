/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers for each IoT operation

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
    /// <p>Creates a thing record in the registry. If this call is made multiple times using the same
    /// thing name and configuration, the call will succeed. If this call is made with the same thing
    /// name but different configuration a <code>ResourceAlreadyExistsException</code> is thrown.</p>
    CreateThing(create_thing_input, CreateThingOutput, CreateThingError),
    /// <p>Gets information about the specified thing.</p>
    DescribeThing(describe_thing_input, DescribeThingOutput, DescribeThingError),
    /// <p>Updates the data for a thing.</p>
    UpdateThing(update_thing_input, UpdateThingOutput, UpdateThingError),
    /// <p>Deletes the specified thing. Returns successfully with no error if the deletion is successful
    /// or you specify a thing that doesn't exist.</p>
    DeleteThing(delete_thing_input, DeleteThingOutput, DeleteThingError),
    /// <p>Lists your things. Use the <b>attributeName</b> and <b>attributeValue</b> parameters to filter
    /// your things.</p>
    ListThings(list_things_input, ListThingsOutput, ListThingsError),
    /// <p>Attaches the specified policy to the specified principal (certificate or other
    /// credential).</p>
    AttachPrincipalPolicy(attach_principal_policy_input, AttachPrincipalPolicyOutput, AttachPrincipalPolicyError),
    /// <p>Returns a unique endpoint specific to the AWS account making the call.</p>
    DescribeEndpoint(describe_endpoint_input, DescribeEndpointOutput, DescribeEndpointError),
}
