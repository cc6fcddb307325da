/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! AWS Signature Version 4 request signing
//!
//! [`SigV4Signer`](signer::SigV4Signer) signs a single `http::Request`. Service crates rarely call
//! it directly: [`SigV4SigningStage`](middleware::SigV4SigningStage) reads the signing inputs from
//! the operation property bag and signs each request on its way to the connector.

pub mod middleware;
pub mod signer;
mod sigv4;
