/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The `restJson1` protocol
//!
//! Each operation binds some input members to the URI path, the query string or headers and
//! sends the remaining members as a JSON document.

use crate::config::Config;
use aws_http::AwsErrorRetryPolicy;
use aws_sig_auth::signer::OperationSigningConfig;
use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use smithy_http::body::SdkBody;
use smithy_http::operation::{self, BuildError, Metadata, Operation};

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

/// Format a required URI label
///
/// An empty label would address the collection instead of one of its members.
pub(crate) fn label(field: &'static str, value: Option<&str>) -> Result<String, BuildError> {
    match value {
        None => Err(BuildError::MissingField {
            field,
            details: "cannot be empty or unset",
        }),
        Some("") => Err(BuildError::InvalidField {
            field,
            details: "cannot be empty or unset".to_string(),
        }),
        Some(value) => Ok(smithy_http::label::fmt_string(value, false)),
    }
}

pub(crate) fn request_builder(method: http::Method, uri: String) -> http::request::Builder {
    http::Request::builder().method(method).uri(uri)
}

/// Finish `builder` with `payload` serialized as the JSON body
///
/// Members bound to the URI or headers are skipped by the payload's `Serialize` impl.
pub(crate) fn with_json_body<T: Serialize>(
    builder: http::request::Builder,
    payload: &T,
) -> Result<http::Request<SdkBody>, BuildError> {
    let body =
        serde_json::to_vec(payload).map_err(|err| BuildError::SerializationError(err.into()))?;
    Ok(builder
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, body.len())
        .body(SdkBody::from(body))?)
}

pub(crate) fn with_empty_body(
    builder: http::request::Builder,
) -> Result<http::Request<SdkBody>, BuildError> {
    Ok(builder.body(SdkBody::from(""))?)
}

pub(crate) fn build_operation<H>(
    config: &Config,
    operation_name: &'static str,
    request: http::Request<SdkBody>,
    handler: H,
) -> Result<Operation<H, AwsErrorRetryPolicy>, BuildError> {
    let mut request = operation::Request::new(request);
    config.configure(
        &mut request.config_mut(),
        OperationSigningConfig::default_config(),
    );
    Ok(Operation::new(request, handler)
        .with_metadata(Metadata::new(operation_name, crate::SERVICE_NAME))
        .with_retry_policy(AwsErrorRetryPolicy::new()))
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

#[cfg(test)]
mod test {
    use crate::error::{DeleteAssetError, DeleteAssetErrorKind};
    use crate::output::DeleteAssetOutput;
    use crate::protocol::{label, parse_response};
    use bytes::Bytes;
    use smithy_http::operation::BuildError;

    #[test]
    fn labels() {
        assert_eq!(label("id", Some("hls/v2:ts")).unwrap(), "hls%2Fv2%3Ats");
        assert!(matches!(
            label("id", Some("")),
            Err(BuildError::InvalidField { field: "id", .. })
        ));
    }

    #[test]
    fn error_bodies_are_optional() {
        let response = http::Response::builder()
            .status(503)
            .header("x-amzn-errortype", "ServiceUnavailableException")
            .body(Bytes::new())
            .unwrap();
        let err = parse_response::<DeleteAssetOutput, DeleteAssetError>(&response)
            .expect_err("503 is an error");
        assert!(matches!(
            err.kind,
            DeleteAssetErrorKind::ServiceUnavailableException(_)
        ));
    }
}
