/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::{HeaderMap, HeaderValue};
use smithy_http::result::{SdkError, SdkSuccess};

/// Implementers add a function to return an AWS request ID
pub trait RequestId {
    /// Returns the request ID if it's available.
    fn request_id(&self) -> Option<&str>;
}

impl<E> RequestId for SdkError<E> {
    fn request_id(&self) -> Option<&str> {
        self.raw_response()
            .and_then(|raw| extract_request_id(raw.headers()))
    }
}

impl<O> RequestId for SdkSuccess<O> {
    fn request_id(&self) -> Option<&str> {
        extract_request_id(self.raw.headers())
    }
}

impl RequestId for smithy_types::Error {
    fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

/// Extracts a request ID from HTTP response headers
///
/// `x-amzn-requestid` is preferred over the S3-style `x-amz-request-id`.
pub fn extract_request_id(headers: &HeaderMap<HeaderValue>) -> Option<&str> {
    headers
        .get("x-amzn-requestid")
        .or_else(|| headers.get("x-amz-request-id"))
        .and_then(|value| value.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smithy_http::middleware::ResponseBody;

    #[test]
    fn prefers_amzn_request_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-amz-request-id", HeaderValue::from_static("s3-style"));
        assert_eq!(Some("s3-style"), extract_request_id(&headers));
        headers.insert("x-amzn-requestid", HeaderValue::from_static("json-style"));
        assert_eq!(Some("json-style"), extract_request_id(&headers));
    }

    #[test]
    fn request_id_from_sdk_error() {
        let raw = http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "some-request-id")
            .body(ResponseBody::from_static("{}"))
            .unwrap();
        let err: SdkError<smithy_types::Error> = SdkError::ServiceError {
            err: Default::default(),
            raw,
        };
        assert_eq!(Some("some-request-id"), err.request_id());

        let err: SdkError<smithy_types::Error> = SdkError::DispatchFailure("timeout".into());
        assert_eq!(None, err.request_id());
    }
}
