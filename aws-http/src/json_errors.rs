/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Error parsing shared by the `awsJson1.1` and `restJson1` protocols

use crate::request_id::extract_request_id;
use bytes::Bytes;
use serde_json::{Map, Value};

/// Trim a trailing URL (after `:`) and a prefixing namespace (before `#`) from an error code
///
/// `aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/` becomes `FooError`.
pub fn sanitize_error_code(error_code: &str) -> &str {
    let error_code = match error_code.find(':') {
        Some(idx) => &error_code[..idx],
        None => error_code,
    };
    match error_code.find('#') {
        Some(idx) => &error_code[idx + 1..],
        None => error_code,
    }
}

fn body_string<'a>(body: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| body.get(*key).and_then(Value::as_str))
}

/// Parse the generic error envelope of an AWS JSON error response
///
/// The code comes from the `x-amzn-errortype` header, then the body's `__type`, then `code`.
/// The message comes from `message` or `Message`. Unreadable bodies produce an error with only
/// the header-derived fields set.
pub fn parse_generic_error(response: &http::Response<Bytes>) -> smithy_types::Error {
    let body = match serde_json::from_slice::<Value>(response.body()) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    };
    let code = response
        .headers()
        .get("x-amzn-errortype")
        .and_then(|value| value.to_str().ok())
        .or_else(|| body_string(&body, &["__type", "code", "Code"]))
        .map(|code| sanitize_error_code(code).to_string());
    smithy_types::Error {
        code,
        message: body_string(&body, &["message", "Message", "errorMessage"]).map(str::to_string),
        request_id: extract_request_id(response.headers()).map(str::to_string),
    }
}

#[cfg(test)]
mod test {
    use crate::json_errors::{parse_generic_error, sanitize_error_code};
    use bytes::Bytes;

    #[test]
    fn generic_error() {
        let response = http::Response::builder()
            .header("x-amzn-requestid", "1234")
            .body(Bytes::from_static(
                br#"{ "__type": "FooError", "message": "Go to foo" }"#,
            ))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response),
            smithy_types::Error {
                code: Some("FooError".to_string()),
                message: Some("Go to foo".to_string()),
                request_id: Some("1234".to_string()),
            }
        )
    }

    #[test]
    fn error_type_header_wins() {
        let response = http::Response::builder()
            .header(
                "x-amzn-errortype",
                "ResourceNotFoundException:http://internal.amazon.com/coral/com.amazonaws.mediapackagevod/",
            )
            .body(Bytes::from_static(br#"{ "__type": "Other", "Message": "no such asset" }"#))
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), Some("ResourceNotFoundException"));
        assert_eq!(err.message(), Some("no such asset"));
    }

    #[test]
    fn code_field_and_empty_bodies() {
        let response = http::Response::builder()
            .body(Bytes::from_static(br#"{ "code": "ThrottlingException" }"#))
            .unwrap();
        assert_eq!(
            parse_generic_error(&response).code(),
            Some("ThrottlingException")
        );

        let response = http::Response::builder()
            .status(500)
            .body(Bytes::new())
            .unwrap();
        let err = parse_generic_error(&response);
        assert_eq!(err.code(), None);
        assert_eq!(err.message(), None);
    }

    #[test]
    fn sanitize_namespace_and_url() {
        assert_eq!(
            sanitize_error_code("aws.protocoltests.restjson#FooError:http://internal.amazon.com/coral/com.amazon.coral.validate/"),
            "FooError"
        );
        assert_eq!(sanitize_error_code("FooError:http://internal.amazon.com/"), "FooError");
        assert_eq!(sanitize_error_code("aws.protocoltests.restjson#FooError"), "FooError");
        assert_eq!(sanitize_error_code("FooError"), "FooError");
    }
}
