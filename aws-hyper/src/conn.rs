/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::BoxError;
use hyper::client::{HttpConnector, ResponseFuture};
use hyper_tls::HttpsConnector;
use smithy_http::body::SdkBody;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tower::Service;

type BoxFuture = Pin<Box<dyn Future<Output = Result<http::Response<hyper::Body>, BoxError>> + Send>>;

/// A good base connection type for most use cases
///
/// This supports two options:
/// 1. HTTPS through hyper
/// 2. Any implementation of the `HttpService` trait, eg. a
///    [`TestConnection`](crate::test_connection::TestConnection)
#[derive(Clone)]
pub struct Standard(Connector);

#[derive(Clone)]
enum Connector {
    Https(hyper::Client<HttpsConnector<HttpConnector>, SdkBody>),
    Dyn(Box<dyn HttpService>),
}

impl Standard {
    /// An HTTPS connection using hyper and the platform's native TLS implementation
    pub fn https() -> Self {
        let https = HttpsConnector::new();
        Standard(Connector::Https(
            hyper::Client::builder().build::<_, SdkBody>(https),
        ))
    }

    /// Wrap any connection, type-erasing it
    pub fn new(conn: impl HttpService + 'static) -> Self {
        Standard(Connector::Dyn(Box::new(conn)))
    }
}

impl fmt::Debug for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Connector::Https(_) => f.write_str("Standard::Https"),
            Connector::Dyn(_) => f.write_str("Standard::Dyn"),
        }
    }
}

impl Clone for Box<dyn HttpService> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// An object-safe HTTP connection
///
/// Implemented for every cloneable tower service that sends `http::Request<SdkBody>` and returns
/// `http::Response<hyper::Body>`.
pub trait HttpService: Send + Sync {
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>>;

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture;

    fn clone_box(&self) -> Box<dyn HttpService>;
}

impl<S> HttpService for S
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Sync
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), BoxError>> {
        Service::poll_ready(self, cx).map_err(|err| err.into())
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> BoxFuture {
        let fut = Service::call(self, req);
        Box::pin(async move { fut.await.map_err(|err| err.into()) })
    }

    fn clone_box(&self) -> Box<dyn HttpService> {
        Box::new(self.clone())
    }
}

impl Service<http::Request<SdkBody>> for Standard {
    type Response = http::Response<hyper::Body>;
    type Error = BoxError;
    type Future = StandardFuture;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        match &mut self.0 {
            Connector::Https(https) => Service::poll_ready(https, cx).map_err(|err| err.into()),
            Connector::Dyn(conn) => conn.poll_ready(cx),
        }
    }

    fn call(&mut self, req: http::Request<SdkBody>) -> Self::Future {
        match &mut self.0 {
            Connector::Https(https) => StandardFuture::Https(Service::call(https, req)),
            Connector::Dyn(conn) => StandardFuture::Dyn(conn.call(req)),
        }
    }
}

#[pin_project::pin_project(project = FutProj)]
pub enum StandardFuture {
    Https(#[pin] ResponseFuture),
    Dyn(#[pin] BoxFuture),
}

impl Future for StandardFuture {
    type Output = Result<http::Response<hyper::Body>, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match self.project() {
            FutProj::Https(fut) => fut.poll(cx).map_err(|err| err.into()),
            FutProj::Dyn(dyn_fut) => dyn_fut.poll(cx),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::conn::Standard;
    use smithy_http::body::SdkBody;
    use tower::{service_fn, BoxError, Service, ServiceExt};

    #[tokio::test]
    async fn dyn_connections_are_cloneable() {
        let conn = service_fn(|req: http::Request<SdkBody>| async move {
            let body = req.body().bytes().unwrap_or_default().to_vec();
            Ok::<_, BoxError>(http::Response::new(hyper::Body::from(body)))
        });
        let mut standard = Standard::new(conn);
        let mut cloned = standard.clone();
        let resp = standard
            .ready()
            .await
            .unwrap()
            .call(http::Request::new(SdkBody::from("ping")))
            .await
            .expect("service_fn never fails");
        let body = hyper::body::to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(body, "ping");
        cloned
            .ready()
            .await
            .unwrap()
            .call(http::Request::new(SdkBody::empty()))
            .await
            .expect("the clone is usable too");
        assert_eq!(format!("{:?}", cloned), "Standard::Dyn");
    }
}
