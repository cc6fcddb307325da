/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod json_errors;
pub mod request_id;
pub mod user_agent;

use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
use std::time::Duration;

/// A retry policy that classifies AWS error codes and status codes
///
/// In order of priority:
/// 1. The `x-amz-retry-after` header is checked
/// 2. The modeled error retry mode is checked
/// 3. The code is checked against a predetermined list of throttling errors & transient error codes
/// 4. The status code is checked against a predetermined list of status codes
///
/// Requests that never received a response (dispatch failures) are transient. Requests that
/// failed to build, and responses that could not be read, are not retried.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct AwsErrorRetryPolicy;

const SERVER_ERROR_STATUS_CODES: [u16; 4] = [500, 502, 503, 504];
const THROTTLING_ERRORS: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "ThrottledException",
    "RequestThrottledException",
    "TooManyRequestsException",
    "ProvisionedThroughputExceededException",
    "TransactionInProgressException",
    "RequestLimitExceeded",
    "BandwidthLimitExceeded",
    "LimitExceededException",
    "RequestThrottled",
    "SlowDown",
    "PriorRequestNotComplete",
    "EC2ThrottledException",
];
const TRANSIENT_ERRORS: &[&str] = &["RequestTimeout", "RequestTimeoutException"];

impl AwsErrorRetryPolicy {
    /// Create an `AwsErrorRetryPolicy` with the default set of known error & status codes
    pub fn new() -> Self {
        AwsErrorRetryPolicy
    }
}

impl Default for AwsErrorRetryPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> ClassifyResponse<SdkSuccess<T>, SdkError<E>> for AwsErrorRetryPolicy
where
    E: ProvideErrorKind,
{
    fn classify(&self, response: Result<&SdkSuccess<T>, &SdkError<E>>) -> RetryKind {
        let (err, response) = match response {
            Ok(_) => return RetryKind::NotRetryable,
            Err(SdkError::ServiceError { err, raw }) => (err, raw),
            Err(SdkError::DispatchFailure(_)) => {
                return RetryKind::Error(ErrorKind::TransientError)
            }
            Err(_) => return RetryKind::NotRetryable,
        };
        if let Some(retry_after_delay) = response
            .headers()
            .get("x-amz-retry-after")
            .and_then(|header| header.to_str().ok())
            .and_then(|header| header.parse::<u64>().ok())
        {
            return RetryKind::Explicit(Duration::from_millis(retry_after_delay));
        }
        if let Some(kind) = err.retryable_error_kind() {
            return RetryKind::Error(kind);
        };
        if let Some(code) = err.code() {
            if THROTTLING_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::ThrottlingError);
            }
            if TRANSIENT_ERRORS.contains(&code) {
                return RetryKind::Error(ErrorKind::TransientError);
            }
        };
        if SERVER_ERROR_STATUS_CODES.contains(&response.status().as_u16()) {
            return RetryKind::Error(ErrorKind::ServerError);
        };
        RetryKind::NotRetryable
    }
}

#[cfg(test)]
mod test {
    use crate::AwsErrorRetryPolicy;
    use smithy_http::middleware::ResponseBody;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};
    use std::time::Duration;

    struct UnmodeledError;

    struct CodedError {
        code: &'static str,
    }

    impl ProvideErrorKind for UnmodeledError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            None
        }
    }

    impl ProvideErrorKind for CodedError {
        fn retryable_error_kind(&self) -> Option<ErrorKind> {
            None
        }

        fn code(&self) -> Option<&str> {
            Some(self.code)
        }
    }

    fn make_err<E>(err: E, raw: http::Response<&'static str>) -> SdkError<E> {
        SdkError::ServiceError {
            err,
            raw: raw.map(ResponseBody::from_static),
        }
    }

    fn classify<E: ProvideErrorKind>(err: SdkError<E>) -> RetryKind {
        ClassifyResponse::<SdkSuccess<()>, SdkError<E>>::classify(
            &AwsErrorRetryPolicy::new(),
            Err(&err),
        )
    }

    #[test]
    fn not_an_error() {
        let policy = AwsErrorRetryPolicy::new();
        let success = SdkSuccess {
            raw: http::Response::new(ResponseBody::from_static("OK")),
            parsed: (),
        };
        assert_eq!(
            ClassifyResponse::<SdkSuccess<()>, SdkError<UnmodeledError>>::classify(
                &policy,
                Ok(&success)
            ),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_response_status() {
        let test_resp = http::Response::builder()
            .status(503)
            .body("error!")
            .unwrap();
        assert_eq!(
            classify(make_err(UnmodeledError, test_resp)),
            RetryKind::Error(ErrorKind::ServerError)
        );
        let test_resp = http::Response::builder()
            .status(400)
            .body("error!")
            .unwrap();
        assert_eq!(
            classify(make_err(UnmodeledError, test_resp)),
            RetryKind::NotRetryable
        );
    }

    #[test]
    fn classify_by_error_code() {
        assert_eq!(
            classify(make_err(
                CodedError { code: "Throttling" },
                http::Response::new("OK")
            )),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );

        assert_eq!(
            classify(make_err(
                CodedError {
                    code: "RequestTimeout"
                },
                http::Response::new("OK"),
            )),
            RetryKind::Error(ErrorKind::TransientError)
        )
    }

    #[test]
    fn classify_generic() {
        let err = smithy_types::Error {
            code: Some("SlowDown".to_string()),
            message: None,
            request_id: None,
        };
        assert_eq!(
            classify(make_err(err, http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }

    #[test]
    fn classify_by_error_kind() {
        struct ModeledRetries;
        impl ProvideErrorKind for ModeledRetries {
            fn retryable_error_kind(&self) -> Option<ErrorKind> {
                Some(ErrorKind::ClientError)
            }

            fn code(&self) -> Option<&str> {
                // code should not be called when `error_kind` is provided
                unimplemented!()
            }
        }

        assert_eq!(
            classify(make_err(ModeledRetries, http::Response::new("OK"))),
            RetryKind::Error(ErrorKind::ClientError)
        );
    }

    #[test]
    fn test_retry_after_header() {
        let test_response = http::Response::builder()
            .header("x-amz-retry-after", "5000")
            .body("retry later")
            .unwrap();

        assert_eq!(
            classify(make_err(UnmodeledError, test_response)),
            RetryKind::Explicit(Duration::from_millis(5000))
        );
    }

    #[test]
    fn dispatch_failures_are_transient() {
        let err: SdkError<UnmodeledError> = SdkError::DispatchFailure("connection reset".into());
        assert_eq!(classify(err), RetryKind::Error(ErrorKind::TransientError));
        let err: SdkError<UnmodeledError> =
            SdkError::ConstructionFailure("missing region".into());
        assert_eq!(classify(err), RetryKind::NotRetryable);
    }
}
