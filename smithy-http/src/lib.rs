/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Core HTTP plumbing for AWS service clients: request bodies, operations, middleware and
//! response parsing.

pub mod body;
pub mod endpoint;
pub mod label;
pub mod middleware;
pub mod operation;
pub mod property_bag;
pub mod query;
pub mod response;
pub mod result;
pub mod retry;
