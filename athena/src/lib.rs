/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Amazon Athena
//!
//! Athena is an interactive query service that lets you analyze data directly in Amazon S3
//! using standard SQL. Queries are started with `StartQueryExecution`, polled with
//! `GetQueryExecution` and their results paged through with `GetQueryResults`.

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

const SIGNING_NAME: &str = "athena";
const ENDPOINT_PREFIX: &str = "athena";
const SERVICE_NAME: &str = "athena";
const TARGET_PREFIX: &str = "AmazonAthena";

pub(crate) const API_METADATA: ApiMetadata = ApiMetadata::new("athena", env!("CARGO_PKG_VERSION"));
