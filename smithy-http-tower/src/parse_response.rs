/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::SendOperationError;
use smithy_http::middleware::load_response;
use smithy_http::operation;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
use smithy_http::result::{SdkError, SdkSuccess};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::{BoxError, Layer, Service};
use tracing::{debug_span, Instrument};

/// Sends the request half of an [`Operation`] to the inner service and hands the response to the
/// operation's response handler
///
/// The inner service is normally the signing and endpoint stages wrapped around a `DispatchService`.
pub struct ParseResponseService<S, O, R> {
    inner: S,
    _output_type: PhantomData<fn() -> (O, R)>,
}

impl<S: Clone, O, R> Clone for ParseResponseService<S, O, R> {
    fn clone(&self) -> Self {
        ParseResponseService {
            inner: self.inner.clone(),
            _output_type: Default::default(),
        }
    }
}

/// Layer producing a [`ParseResponseService`] for operations with handler `O` and retry policy `R`
pub struct ParseResponseLayer<O, R> {
    _output_type: PhantomData<fn() -> (O, R)>,
}

impl<O, R> ParseResponseLayer<O, R> {
    pub fn new() -> Self {
        ParseResponseLayer {
            _output_type: Default::default(),
        }
    }
}

impl<O, R> Default for ParseResponseLayer<O, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, O, R> Layer<S> for ParseResponseLayer<O, R>
where
    S: Service<operation::Request>,
{
    type Service = ParseResponseService<S, O, R>;

    fn layer(&self, inner: S) -> Self::Service {
        ParseResponseService {
            inner,
            _output_type: Default::default(),
        }
    }
}

type BoxedResultFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

// `O` parses a `http::Response<B>` into `Result<T, E>`. The retry layer above keeps its own copy
// of the operation, so the retry policy `R` is unused here.
impl<S, O, T, E, B, R> tower::Service<operation::Operation<O, R>> for ParseResponseService<S, O, R>
where
    S: Service<operation::Request, Response = http::Response<B>, Error = SendOperationError>,
    S::Future: Send + 'static,
    B: http_body::Body + Send + 'static,
    B::Data: Send,
    B::Error: Into<BoxError>,
    O: ParseHttpResponse<B, Output = Result<T, E>> + Send + Sync + 'static,
    T: Send + 'static,
    E: Send + 'static,
    R: Send + 'static,
{
    type Response = SdkSuccess<T>;
    type Error = SdkError<E>;
    type Future = BoxedResultFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: Operation<O, R>) -> Self::Future {
        let (req, parts) = req.into_request_response();
        let span = match &parts.metadata {
            Some(metadata) => debug_span!(
                "load_response",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => debug_span!("load_response"),
        };
        let resp = self.inner.call(req);
        let fut = async move {
            match resp.await {
                Err(e) => Err(e.into()),
                Ok(resp) => load_response(resp, &parts.response_handler).await,
            }
        };
        Box::pin(fut.instrument(span))
    }
}
