/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Cognito Federated Identities
//!
//! Amazon Cognito Federated Identities is a web service that delivers scoped temporary
//! credentials to mobile devices and other untrusted environments. It uniquely identifies a
//! device and supplies the user with a consistent identity over the lifetime of an
//! application.
//!
//! The authenticated flow is `GetId` followed by `GetCredentialsForIdentity`. Neither call
//! requires AWS credentials.

#[macro_use]
mod macros;

#[cfg(feature = "client")]
mod client;
pub mod config;
pub mod error;
pub mod input;
pub mod model;
pub mod operation;
pub mod output;
mod protocol;

#[cfg(feature = "client")]
pub use client::{fluent_builders, Client};
pub use config::Config;
pub use error::Error;

pub use aws_auth::Credentials;
pub use aws_types::region::Region;
pub use smithy_http::result::SdkError;

use aws_http::user_agent::ApiMetadata;

pub static PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

const SIGNING_NAME: &str = "cognito-identity";
const ENDPOINT_PREFIX: &str = "cognito-identity";
const SERVICE_NAME: &str = "cognitoidentity";
const TARGET_PREFIX: &str = "AWSCognitoIdentityService";

pub(crate) const API_METADATA: ApiMetadata =
    ApiMetadata::new("cognitoidentity", env!("CARGO_PKG_VERSION"));
