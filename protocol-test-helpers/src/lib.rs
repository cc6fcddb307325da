/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use assert_json_diff::{assert_json_matches_no_panic, CompareMode, Config};
use http::Request;
use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ProtocolTestFailure {
    #[error("invalid header value for key `{key}`: expected `{expected}`, found `{found}`")]
    InvalidHeader {
        key: String,
        expected: String,
        found: String,
    },
    #[error("missing required header: `{expected}`")]
    MissingHeader { expected: String },

    #[error("body did not match. Hint:\n{hint}\nexpected: {expected}\nfound: {found}")]
    BodyDidNotMatch {
        expected: String,
        found: String,
        hint: String,
    },
    #[error("expected body to be valid {expected} but it was not: {found}")]
    InvalidBodyFormat { expected: String, found: String },
}

/// Check that the protocol test succeeded & print the pretty error
/// if it did not
///
/// The primary motivation is making multiline debug output
/// readable & using the cleaner Display implementation
#[track_caller]
pub fn assert_ok(inp: Result<(), ProtocolTestFailure>) {
    if let Err(e) = inp {
        eprintln!("{}", e);
        panic!("Protocol test failed");
    }
}

pub fn validate_headers<B>(
    request: &Request<B>,
    expected_headers: &[(&str, &str)],
) -> Result<(), ProtocolTestFailure> {
    for (key, expected_value) in expected_headers {
        // Protocol tests store header lists as comma-delimited
        if !request.headers().contains_key(*key) {
            return Err(ProtocolTestFailure::MissingHeader {
                expected: key.to_string(),
            });
        }
        let actual_value: String = request
            .headers()
            .get_all(*key)
            .iter()
            .map(|hv| hv.to_str().unwrap_or("<non-ascii header value>"))
            .collect::<Vec<_>>()
            .join(", ");
        if *expected_value != actual_value {
            return Err(ProtocolTestFailure::InvalidHeader {
                key: key.to_string(),
                expected: expected_value.to_string(),
                found: actual_value,
            });
        }
    }
    Ok(())
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MediaType {
    /// Json media types are deserialized and compared structurally
    Json,
    /// Other media types are compared literally
    Other,
}

impl<T: AsRef<str>> From<T> for MediaType {
    fn from(inp: T) -> Self {
        match inp.as_ref() {
            "application/json" | "application/x-amz-json-1.1" => MediaType::Json,
            _ => MediaType::Other,
        }
    }
}

/// Compare a request body against the expected body
///
/// JSON bodies are compared structurally so that member ordering and whitespace do not matter.
pub fn validate_body<T: AsRef<[u8]>>(
    actual_body: T,
    expected_body: &str,
    media_type: MediaType,
) -> Result<(), ProtocolTestFailure> {
    let body_str = std::str::from_utf8(actual_body.as_ref());
    match (media_type, body_str) {
        (MediaType::Json, Ok(actual_body)) => validate_json_body(actual_body, expected_body),
        (MediaType::Json, Err(_)) => Err(ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: "input was not valid UTF-8".to_owned(),
        }),
        (MediaType::Other, Ok(actual_body)) if actual_body == expected_body => Ok(()),
        (MediaType::Other, Ok(actual_body)) => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected_body.to_string(),
            found: actual_body.to_string(),
            hint: "bodies differ".to_string(),
        }),
        (MediaType::Other, Err(_)) => Err(ProtocolTestFailure::BodyDidNotMatch {
            expected: expected_body.to_string(),
            found: format!("{:?}", actual_body.as_ref()),
            hint: "body was not valid UTF-8".to_string(),
        }),
    }
}

fn validate_json_body(actual: &str, expected: &str) -> Result<(), ProtocolTestFailure> {
    let actual_json: serde_json::Value =
        serde_json::from_str(actual).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: e.to_string() + actual,
        })?;
    let expected_json: serde_json::Value =
        serde_json::from_str(expected).map_err(|e| ProtocolTestFailure::InvalidBodyFormat {
            expected: "json".to_owned(),
            found: format!("the expected body was invalid ({}): {}", e, expected),
        })?;
    assert_json_matches_no_panic(
        &actual_json,
        &expected_json,
        Config::new(CompareMode::Strict),
    )
    .map_err(|hint| ProtocolTestFailure::BodyDidNotMatch {
        expected: expected.to_string(),
        found: actual.to_string(),
        hint,
    })
}
