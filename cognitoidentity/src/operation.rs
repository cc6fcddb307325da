/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Response handlers for each Cognito Identity operation

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
    /// <p>Generates (or retrieves) a Cognito ID. Supplying multiple logins will create an implicit
    /// linked account.</p>
    /// <p>This is a public API. You do not need any credentials to call this API.</p>
    GetId(get_id_input, GetIdOutput, GetIdError),
    /// <p>Returns credentials for the provided identity ID. Any provided logins will be validated
    /// against supported login providers. If the token is for cognito-identity.amazonaws.com, it
    /// will be passed through to AWS Security Token Service with the appropriate role for the
    /// token.</p>
    /// <p>This is a public API. You do not need any credentials to call this API.</p>
    GetCredentialsForIdentity(get_credentials_for_identity_input, GetCredentialsForIdentityOutput, GetCredentialsForIdentityError),
    /// <p>Gets an OpenID token, using a known Cognito ID. This known Cognito ID is returned by
    /// <a>GetId</a>.</p>
    /// <p>The OpenID token is valid for 10 minutes.</p>
    GetOpenIdToken(get_open_id_token_input, GetOpenIdTokenOutput, GetOpenIdTokenError),
    /// <p>Lists the identities in an identity pool.</p>
    /// <p>You must use AWS Developer credentials to call this API.</p>
    ListIdentities(list_identities_input, ListIdentitiesOutput, ListIdentitiesError),
    /// <p>Gets details about a particular identity pool, including the pool name, ID description,
    /// creation date, and current number of users.</p>
    /// <p>You must use AWS Developer credentials to call this API.</p>
    DescribeIdentityPool(describe_identity_pool_input, DescribeIdentityPoolOutput, DescribeIdentityPoolError),
}
