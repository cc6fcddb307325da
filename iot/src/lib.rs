/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS IoT
//!
//! AWS IoT provides secure, bi-directional communication between Internet-connected devices
//! (such as sensors, actuators, embedded devices, or smart appliances) and the AWS cloud. You
//! can discover your custom IoT-Data endpoint to communicate with, configure rules for data
//! processing and integration with other services, organize resources associated with each
//! device (Registry), configure logging, and create and manage policies and credentials to
//! authenticate devices.
//!
//! This crate covers the thing registry, policy attachment and endpoint discovery.

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

const SIGNING_NAME: &str = "execute-api";
const ENDPOINT_PREFIX: &str = "iot";
const SERVICE_NAME: &str = "iot";

pub(crate) const API_METADATA: ApiMetadata = ApiMetadata::new("iot", env!("CARGO_PKG_VERSION"));
