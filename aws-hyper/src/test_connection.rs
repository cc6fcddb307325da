/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Canned connections for testing service crates without a network

use http::header::{HeaderName, CONTENT_TYPE};
use http::Request;
use protocol_test_helpers::{assert_ok, validate_body, validate_headers, MediaType};
use smithy_http::body::SdkBody;
use std::future::Ready;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::task::{Context, Poll};
use tower::BoxError;

type ConnectVec<B> = Vec<(http::Request<SdkBody>, http::Response<B>)>;

/// A request received by a [`TestConnection`] paired with the request it expected
#[derive(Debug)]
pub struct ValidateRequest {
    pub expected: http::Request<SdkBody>,
    pub actual: http::Request<SdkBody>,
}

impl ValidateRequest {
    /// Assert that the actual request matches the expected request
    ///
    /// Every header on the expected request must be present with the same value, except for the
    /// headers named in `ignore_headers` (eg. `authorization` when the signing time is not
    /// fixed). Headers only present on the actual request are not checked. JSON bodies are
    /// compared structurally.
    #[track_caller]
    pub fn assert_matches(&self, ignore_headers: &[HeaderName]) {
        let (actual, expected) = (&self.actual, &self.expected);
        assert_eq!(actual.method(), expected.method(), "method mismatch");
        assert_eq!(actual.uri(), expected.uri(), "uri mismatch");
        let expected_headers = expected
            .headers()
            .iter()
            .filter(|(name, _)| !ignore_headers.contains(name))
            .map(|(name, value)| {
                let value = value
                    .to_str()
                    .expect("expected header values are written as strings");
                (name.as_str(), value)
            })
            .collect::<Vec<_>>();
        assert_ok(validate_headers(actual, &expected_headers));
        let media_type = expected
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|ct| ct.to_str().ok())
            .map(MediaType::from)
            .unwrap_or(MediaType::Other);
        let expected_body = std::str::from_utf8(expected.body().bytes().unwrap_or_default())
            .expect("expected bodies are written as strings");
        assert_ok(validate_body(
            actual.body().bytes().unwrap_or_default(),
            expected_body,
            media_type,
        ));
    }
}

/// TestConnection for use with a [`aws_hyper::Client`](crate::Client)
///
/// A basic test connection. It will:
/// - Respond to requests with a preloaded series of responses
/// - Record requests for future examination
///
/// Once the preloaded responses run out, requests fail with a dispatch error.
///
/// Usage example:
/// ```rust
/// use aws_hyper::test_connection::TestConnection;
/// use smithy_http::body::SdkBody;
/// let events = vec![(
///    http::Request::new(SdkBody::from("request body")),
///    http::Response::builder()
///        .status(200)
///        .body("response body")
///        .unwrap(),
/// )];
/// let conn = TestConnection::new(events);
/// let client = aws_hyper::Client::new(conn);
/// ```
#[derive(Debug)]
pub struct TestConnection<B> {
    data: Arc<Mutex<ConnectVec<B>>>,
    requests: Arc<Mutex<Vec<ValidateRequest>>>,
}

// Derived `Clone` would require `B: Clone`
impl<B> Clone for TestConnection<B> {
    fn clone(&self) -> Self {
        TestConnection {
            data: self.data.clone(),
            requests: self.requests.clone(),
        }
    }
}

impl<B> TestConnection<B> {
    pub fn new(mut data: ConnectVec<B>) -> Self {
        data.reverse();
        TestConnection {
            data: Arc::new(Mutex::new(data)),
            requests: Default::default(),
        }
    }

    /// Every request received so far, in order
    pub fn requests(&self) -> impl Deref<Target = Vec<ValidateRequest>> + '_ {
        lock(&self.requests)
    }

    /// Assert that every request received so far matches its expected request
    #[track_caller]
    pub fn assert_requests_match(&self, ignore_headers: &[HeaderName]) {
        for req in self.requests().iter() {
            req.assert_matches(ignore_headers)
        }
        let remaining = lock(&self.data).len();
        assert_eq!(remaining, 0, "{} expected requests were never sent", remaining);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<B> tower::Service<http::Request<SdkBody>> for TestConnection<B>
where
    B: Into<hyper::Body>,
{
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = Ready<Result<Self::Response, Self::Error>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, actual: Request<SdkBody>) -> Self::Future {
        if let Some((expected, resp)) = lock(&self.data).pop() {
            lock(&self.requests).push(ValidateRequest { expected, actual });
            std::future::ready(Ok(resp.map(|body| body.into())))
        } else {
            std::future::ready(Err("No more data".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::test_connection::{TestConnection, ValidateRequest};
    use http::header::AUTHORIZATION;
    use smithy_http::body::SdkBody;
    use tower::{BoxError, Service};

    /// Validate that the `TestConnection` meets the required trait bounds to be used with a aws-hyper service
    #[test]
    fn meets_trait_bounds() {
        fn check() -> impl tower::Service<
            http::Request<SdkBody>,
            Response = http::Response<hyper::Body>,
            Error = BoxError,
            Future = impl Send,
        > + Clone {
            TestConnection::<String>::new(vec![])
        }
        let _ = check();
    }

    #[tokio::test]
    async fn responses_are_replayed_in_order() {
        let mut conn = TestConnection::new(vec![
            (
                http::Request::new(SdkBody::from("first")),
                http::Response::new("one"),
            ),
            (
                http::Request::new(SdkBody::from("second")),
                http::Response::new("two"),
            ),
        ]);
        let first = conn
            .call(http::Request::new(SdkBody::from("first")))
            .await
            .unwrap();
        assert_eq!(hyper::body::to_bytes(first.into_body()).await.unwrap(), "one");
        let second = conn
            .call(http::Request::new(SdkBody::from("second")))
            .await
            .unwrap();
        assert_eq!(hyper::body::to_bytes(second.into_body()).await.unwrap(), "two");
        conn.call(http::Request::new(SdkBody::empty()))
            .await
            .expect_err("no more responses");
        assert_eq!(conn.requests().len(), 2);
        conn.assert_requests_match(&[]);
    }

    #[test]
    fn json_bodies_are_compared_structurally() {
        let validate = ValidateRequest {
            expected: http::Request::builder()
                .header("content-type", "application/x-amz-json-1.1")
                .header(AUTHORIZATION, "expected")
                .body(SdkBody::from(r#"{"A": 1, "B": "two"}"#))
                .unwrap(),
            actual: http::Request::builder()
                .header("content-type", "application/x-amz-json-1.1")
                .header(AUTHORIZATION, "actual")
                .header("x-extra", "ignored")
                .body(SdkBody::from(r#"{"B":"two","A":1}"#))
                .unwrap(),
        };
        validate.assert_matches(&[AUTHORIZATION]);
    }

    #[test]
    #[should_panic]
    fn mismatched_headers_panic() {
        let validate = ValidateRequest {
            expected: http::Request::builder()
                .header("x-amz-target", "AmazonAthena.GetQueryExecution")
                .body(SdkBody::empty())
                .unwrap(),
            actual: http::Request::builder()
                .header("x-amz-target", "AmazonAthena.StopQueryExecution")
                .body(SdkBody::empty())
                .unwrap(),
        };
        validate.assert_matches(&[]);
    }
}
