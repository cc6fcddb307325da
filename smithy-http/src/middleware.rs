/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This modules defines the core, framework agnostic, HTTP middleware interface
//! used by the SDK
//!
//! smithy-http-tower provides Tower-specific middleware utilities

use crate::operation;
use crate::response::ParseHttpResponse;
use crate::result::{SdkError, SdkSuccess};
use bytes::Bytes;
use std::error::Error;
use std::fmt;

type BoxError = Box<dyn Error + Send + Sync>;

/// The body of a response after it has been handed to the response parser
///
/// Loaded bodies keep their bytes for inspection. Bodies that were handed off without being read,
/// or that failed while being read, record only that fact.
#[derive(Clone)]
pub struct ResponseBody(Inner);

#[derive(Clone)]
enum Inner {
    Bytes(Bytes),
    Streaming,
    Err,
}

impl ResponseBody {
    pub fn from_static(s: &'static str) -> Self {
        ResponseBody(Inner::Bytes(Bytes::from_static(s.as_bytes())))
    }

    /// The bytes of the response if it was loaded into memory
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.0 {
            Inner::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }
}

impl From<Bytes> for ResponseBody {
    fn from(bytes: Bytes) -> Self {
        ResponseBody(Inner::Bytes(bytes))
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Inner::Bytes(bytes) => match std::str::from_utf8(bytes) {
                Ok(s) => write!(f, "ResponseBody({:?})", s),
                Err(_) => write!(f, "ResponseBody({:?})", bytes),
            },
            Inner::Streaming => write!(f, "ResponseBody(Streaming)"),
            Inner::Err => write!(f, "ResponseBody(Err)"),
        }
    }
}

/// [`MapRequest`] defines a synchronous middleware that transforms an [`operation::Request`].
///
/// Typically, these middleware will read configuration from the `PropertyBag` and use it to
/// augment the request. Most fundamental middleware is expressed as `MapRequest`, including
/// signing & endpoint resolution.
///
/// ```rust
/// # use smithy_http::middleware::MapRequest;
/// # use std::convert::Infallible;
/// # use smithy_http::operation;
/// use http::header::{HeaderName, HeaderValue};
/// struct AddHeader(HeaderName, HeaderValue);
/// /// Signaling struct added to the request property bag if a header should be added
/// struct NeedsHeader;
/// impl MapRequest for AddHeader {
///     type Error = Infallible;
///     fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error> {
///         request.augment(|mut request, properties| {
///             if properties.get::<NeedsHeader>().is_some() {
///                 request.headers_mut().append(
///                     self.0.clone(),
///                     self.1.clone(),
///                 );
///             }
///             Ok(request)
///         })
///     }
/// }
/// ```
pub trait MapRequest {
    /// The Error type returned by this operation.
    ///
    /// If this middleware never fails use [std::convert::Infallible] or similar.
    type Error: Into<BoxError>;

    /// Apply this middleware to a request.
    ///
    /// Typically, implementations will use [`request.augment`](crate::operation::Request::augment)
    /// to be able to transform an owned `http::Request`.
    fn apply(&self, request: operation::Request) -> Result<operation::Request, Self::Error>;
}

/// Load a response using `handler` to parse the results.
///
/// This function is intended to be used on the response side of a middleware chain.
///
/// Success and failure will be split and mapped into `SdkSuccess` and `SdkError`.
/// Generic Parameters:
/// - `B`: The Response Body
/// - `O`: The Http response handler that returns `Result<T, E>`
/// - `T`/`E`: `Result<T, E>` returned by `handler`.
pub async fn load_response<B, T, E, O>(
    mut response: http::Response<B>,
    handler: &O,
) -> Result<SdkSuccess<T>, SdkError<E>>
where
    B: http_body::Body,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>>,
{
    if let Some(parsed_response) = handler.parse_unloaded(&mut response) {
        return sdk_result(
            parsed_response,
            response.map(|_| ResponseBody(Inner::Streaming)),
        );
    }

    let (parts, body) = response.into_parts();
    let body = match hyper::body::to_bytes(body).await {
        Ok(body) => body,
        Err(e) => {
            return Err(SdkError::ResponseError {
                raw: http::Response::from_parts(parts, ResponseBody(Inner::Err)),
                err: e.into(),
            });
        }
    };
    tracing::trace!(status = %parts.status, body = ?ResponseBody::from(body.clone()), "loaded response");

    let response = http::Response::from_parts(parts, body);
    let parsed = handler.parse_loaded(&response);
    sdk_result(parsed, response.map(ResponseBody::from))
}

/// Convert a `Result<T, E>` into an `SdkResult` that includes the raw HTTP response
fn sdk_result<T, E>(
    parsed: Result<T, E>,
    raw: http::Response<ResponseBody>,
) -> Result<SdkSuccess<T>, SdkError<E>> {
    match parsed {
        Ok(parsed) => Ok(SdkSuccess { raw, parsed }),
        Err(err) => Err(SdkError::ServiceError { raw, err }),
    }
}

#[cfg(test)]
mod test {
    use crate::middleware::load_response;
    use crate::response::ParseStrictResponse;
    use crate::result::SdkError;
    use bytes::Bytes;

    struct StatusParser;

    impl ParseStrictResponse for StatusParser {
        type Output = Result<String, u16>;

        fn parse(&self, response: &http::Response<Bytes>) -> Self::Output {
            if response.status().is_success() {
                Ok(String::from_utf8_lossy(response.body()).to_string())
            } else {
                Err(response.status().as_u16())
            }
        }
    }

    #[tokio::test]
    async fn loaded_bodies_are_parsed() {
        let resp = http::Response::new(hyper::Body::from("hello"));
        let success = load_response(resp, &StatusParser)
            .await
            .expect("200 is a success");
        assert_eq!(success.parsed, "hello");
        assert_eq!(success.raw.body().bytes(), Some(&b"hello"[..]));
    }

    #[tokio::test]
    async fn errors_keep_the_raw_response() {
        let resp = http::Response::builder()
            .status(400)
            .body(hyper::Body::from("bad request"))
            .unwrap();
        match load_response(resp, &StatusParser).await {
            Err(SdkError::ServiceError { raw, err }) => {
                assert_eq!(err, 400);
                assert_eq!(raw.body().bytes(), Some(&b"bad request"[..]));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
