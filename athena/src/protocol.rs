/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `awsJson1.1` request serialization and response parsing

use crate::config::Config;
use aws_http::AwsErrorRetryPolicy;
use aws_sig_auth::signer::OperationSigningConfig;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, BuildError, Metadata, Operation};

/// Construct an operation error from an unsuccessful response
pub(crate) trait ErrorResponse: Sized {
    fn from_response(response: &http::Response<Bytes>) -> Self;

    fn unhandled(err: serde_json::Error) -> Self;
}

/// Empty bodies are read as an empty JSON object
pub(crate) fn json_body(body: &[u8]) -> &[u8] {
    if body.is_empty() {
        &b"{}"[..]
    } else {
        body
    }
}

/// Serialize `input` and attach everything the middleware stack needs to send it
pub(crate) fn build_operation<H, T: Serialize>(
    config: &Config,
    operation_name: &'static str,
    input: &T,
    handler: H,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let target = format!("{}.{}", crate::TARGET_PREFIX, operation_name);
    let mut request = operation::Request::new(serialize_request(&target, input)?);
    config.configure(
        &mut request.config_mut(),
        OperationSigningConfig::default_config(),
    );
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, crate::SERVICE_NAME))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
}

/// `POST /` with the input serialized as the body, dispatched by the `x-amz-target` header
pub(crate) fn serialize_request<T: Serialize>(
    target: &str,
    input: &T,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body =
        serde_json::to_vec(input).map_err(|err| BuildError::SerializationError(err.into()))?;
    Ok(http::Request::builder()
        .method(http::Method::POST)
        .uri("/")
        .header(CONTENT_TYPE, "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .header(CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?)
}

pub(crate) fn parse_response<O, E>(response: &http::Response<Bytes>) -> Result<O, E>
where
    O: DeserializeOwned,
    E: ErrorResponse,
{
    if !response.status().is_success() {
        return Err(E::from_response(response));
    }
    serde_json::from_slice(json_body(response.body())).map_err(E::unhandled)
}
