/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Elemental MediaPackage VOD
//!
//! Ingests video-on-demand assets from S3 and packages them on request as HLS, DASH, CMAF or
//! Microsoft Smooth Streaming according to the packaging configurations of the asset's
//! packaging group.

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

const SIGNING_NAME: &str = "mediapackage-vod";
const ENDPOINT_PREFIX: &str = "mediapackage-vod";
const SERVICE_NAME: &str = "mediapackagevod";

pub(crate) const API_METADATA: ApiMetadata =
    ApiMetadata::new("mediapackagevod", env!("CARGO_PKG_VERSION"));
