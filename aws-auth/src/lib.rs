/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod provider;

pub use aws_types::Credentials;
pub use provider::{
    default_provider, set_provider, CredentialsError, CredentialsProvider, ProvideCredentials,
};
