/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::Credentials;
use aws_endpoint::{set_endpoint_resolver, DefaultAwsEndpointResolver};
use aws_http::user_agent::AwsUserAgent;
use aws_http::AwsErrorRetryPolicy;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::{Client, RetryConfig, SdkError};
use aws_sig_auth::signer::OperationSigningConfig;
use aws_types::region::Region;
use aws_types::SigningService;
use bytes::Bytes;
use http::header::{AUTHORIZATION, USER_AGENT};
use http::{Response, Uri};
use smithy_http::body::SdkBody;
use smithy_http::operation;
use smithy_http::operation::{Metadata, Operation};
use smithy_http::response::ParseStrictResponse;
use smithy_types::retry::{ErrorKind, ProvideErrorKind};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, UNIX_EPOCH};

#[derive(Debug)]
struct TestError(u16);

impl fmt::Display for TestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "service returned {}", self.0)
    }
}

impl std::error::Error for TestError {}

impl ProvideErrorKind for TestError {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        None
    }
}

#[derive(Clone)]
struct TestOperationParser;

impl ParseStrictResponse for TestOperationParser {
    type Output = Result<String, TestError>;

    fn parse(&self, response: &Response<Bytes>) -> Self::Output {
        if response.status().is_success() {
            Ok(String::from_utf8_lossy(response.body()).to_string())
        } else {
            Err(TestError(response.status().as_u16()))
        }
    }
}

fn test_operation(region: Option<Region>) -> Operation<TestOperationParser, AwsErrorRetryPolicy> {
    let req = operation::Request::new(http::Request::new(SdkBody::from("request body")))
        .augment(|req, conf| {
            set_endpoint_resolver(
                conf,
                Arc::new(DefaultAwsEndpointResolver::for_service("test-service")),
            );
            aws_auth::set_provider(
                conf,
                Arc::new(Credentials::from_keys("access_key", "secret_key", None)),
            );
            if let Some(region) = region {
                conf.insert(region);
            }
            conf.insert(SigningService::from_static("test-service"));
            conf.insert(OperationSigningConfig::default_config());
            conf.insert(AwsUserAgent::for_tests());
            conf.insert(UNIX_EPOCH + Duration::from_secs(1613414417));
            Result::<_, Infallible>::Ok(req)
        })
        .unwrap();
    Operation::new(req, TestOperationParser)
        .with_metadata(Metadata::new("TestOperation", "test-service"))
        .with_retry_policy(AwsErrorRetryPolicy::new())
}

fn expected_request() -> http::Request<SdkBody> {
    http::Request::builder()
        .header(USER_AGENT, "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
        .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
        .header(AUTHORIZATION, "AWS4-HMAC-SHA256 Credential=access_key/20210215/test-region/test-service/aws4_request, SignedHeaders=host;x-amz-date;x-amz-user-agent, Signature=a61c1b0b04d448e7de2a987ff154452ed90906185b3b8d9083b4aa4214bac17d")
        .header("x-amz-date", "20210215T184017Z")
        .uri(Uri::from_static("https://test-service.test-region.amazonaws.com/"))
        .body(SdkBody::from("request body"))
        .unwrap()
}

fn no_backoff() -> RetryConfig {
    RetryConfig::default().with_static_base(|| 0_f64)
}

#[tokio::test]
async fn e2e_test() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(200)
            .body("response body")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone());
    let resp = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await;
    let resp = resp.expect("successful operation");
    assert_eq!(resp, "response body");

    assert_eq!(conn.requests().len(), 1);
    conn.assert_requests_match(&[]);
    let requests = conn.requests();
    assert_eq!(requests[0].actual.headers().len(), 4);
    assert_eq!(client.metrics().requests(), 1);
    assert_eq!(client.metrics().successes(), 1);
}

#[tokio::test]
async fn server_errors_are_retried() {
    let events = vec![
        (
            expected_request(),
            http::Response::builder()
                .status(500)
                .body("internal failure")
                .unwrap(),
        ),
        (
            expected_request(),
            http::Response::builder()
                .status(200)
                .body("response body")
                .unwrap(),
        ),
    ];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let resp = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await
        .expect("the second attempt succeeds");
    assert_eq!(resp, "response body");
    conn.assert_requests_match(&[]);
    assert_eq!(client.metrics().requests(), 1);
    assert_eq!(client.metrics().successes(), 1);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(400)
            .body("bad request")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let err = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await
        .expect_err("400 is an error");
    match err {
        SdkError::ServiceError { err, raw } => {
            assert_eq!(err.0, 400);
            assert_eq!(raw.body().bytes(), Some(&b"bad request"[..]));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert_eq!(conn.requests().len(), 1);
    assert_eq!(client.metrics().service_errors(), 1);
}

#[tokio::test]
async fn dispatch_failures_exhaust_attempts() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone()).with_retry_config(no_backoff());
    let err = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await
        .expect_err("no responses are loaded");
    assert!(matches!(err, SdkError::DispatchFailure(_)), "{:?}", err);
    assert_eq!(client.metrics().other_errors(), 1);
}

#[tokio::test]
async fn disabled_retries_send_once() {
    let events = vec![(
        expected_request(),
        http::Response::builder()
            .status(503)
            .body("unavailable")
            .unwrap(),
    )];
    let conn = TestConnection::new(events);
    let client = Client::new(conn.clone()).with_retry_config(RetryConfig::disabled());
    let err = client
        .call(test_operation(Some(Region::new("test-region"))))
        .await
        .expect_err("503 is an error");
    assert_eq!(err.service_error().map(|e| e.0), Some(503));
    assert_eq!(conn.requests().len(), 1);
}

#[tokio::test]
async fn missing_region_is_a_construction_failure() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let client = Client::new(conn.clone());
    let err = client
        .call(test_operation(None))
        .await
        .expect_err("no region is set");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
    assert_eq!(client.metrics().other_errors(), 1);
}
