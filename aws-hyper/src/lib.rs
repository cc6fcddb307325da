/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! The HTTP execution engine shared by the AWS service crates
//!
//! [`Client`] accepts a fully built [`Operation`](smithy_http::operation::Operation) and runs it
//! through the AWS middleware stack:
//!
//! 1. Retries, using the [standard retry strategy](RetryConfig)
//! 2. Response parsing into `SdkSuccess` / `SdkError`
//! 3. Endpoint resolution and region selection
//! 4. User agent headers
//! 5. SigV4 signing
//! 6. Dispatch over the connector (hyper with TLS by default)

pub mod conn;
mod retry;
#[cfg(feature = "test-util")]
pub mod test_connection;

pub use retry::RetryConfig;

use crate::conn::Standard;
use crate::retry::StandardRetryStrategy;
use aws_endpoint::AwsEndpointStage;
use aws_http::user_agent::UserAgentStage;
use aws_sig_auth::middleware::SigV4SigningStage;
use aws_sig_auth::signer::SigV4Signer;
use smithy_http::body::SdkBody;
use smithy_http::operation::Operation;
use smithy_http::response::ParseHttpResponse;
pub use smithy_http::result::{SdkError, SdkSuccess};
use smithy_http::retry::ClassifyResponse;
use smithy_http_tower::dispatch::DispatchLayer;
use smithy_http_tower::map_request::MapRequestLayer;
use smithy_http_tower::parse_response::ParseResponseLayer;
use smithy_types::retry::ProvideErrorKind;
use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::Instrument;

type BoxError = Box<dyn Error + Send + Sync>;

/// AWS Service Client
///
/// Hyper-based AWS Service Client. Most customers will want to construct a client with
/// [`Client::https()`](Client::https). For testing & other more advanced use cases, a custom
/// connector may be used via [`Client::new(connector)`](Client::new).
///
/// The client is cheap to clone. Clones share the connection pool, the retry quota, and the
/// metrics counters.
pub struct Client<S> {
    inner: S,
    retry_strategy: StandardRetryStrategy,
    metrics: Arc<ClientMetrics>,
}

impl<S: Clone> Clone for Client<S> {
    fn clone(&self) -> Self {
        Client {
            inner: self.inner.clone(),
            retry_strategy: self.retry_strategy.clone(),
            metrics: self.metrics.clone(),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Client<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("inner", &self.inner)
            .field("metrics", &self.metrics)
            .finish()
    }
}

impl<S> Client<S> {
    /// Construct a new `Client` with a custom connector
    pub fn new(connector: S) -> Self {
        Client {
            inner: connector,
            retry_strategy: StandardRetryStrategy::new(RetryConfig::default()),
            metrics: Default::default(),
        }
    }

    /// Replace the retry configuration
    ///
    /// The retry quota starts over from the new configuration.
    pub fn with_retry_config(mut self, retry_config: RetryConfig) -> Self {
        self.retry_strategy = StandardRetryStrategy::new(retry_config);
        self
    }

    /// Request counters shared by every clone of this client
    pub fn metrics(&self) -> &ClientMetrics {
        &self.metrics
    }
}

impl Client<Standard> {
    /// Construct an `https` based client
    pub fn https() -> Self {
        Client::new(Standard::https())
    }
}

impl<S> Client<S>
where
    S: Service<http::Request<SdkBody>, Response = http::Response<hyper::Body>>
        + Send
        + Clone
        + 'static,
    S::Error: Into<BoxError> + Send + Sync + 'static,
    S::Future: Send + 'static,
{
    /// Dispatch this request to the network
    ///
    /// For ergonomics, this does not include the raw response for successful responses. To
    /// access the raw response use `call_raw`.
    pub async fn call<O, T, E, Retry>(&self, input: Operation<O, Retry>) -> Result<T, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        E: Error + ProvideErrorKind + Send + 'static,
        T: Send + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + Sync + 'static,
    {
        self.call_raw(input).await.map(|res| res.parsed)
    }

    /// Dispatch this request to the network
    ///
    /// The returned result contains the raw HTTP response which can be useful for debugging or
    /// implementing unsupported features.
    pub async fn call_raw<O, T, E, Retry>(
        &self,
        input: Operation<O, Retry>,
    ) -> Result<SdkSuccess<T>, SdkError<E>>
    where
        O: ParseHttpResponse<hyper::Body, Output = Result<T, E>> + Send + Sync + Clone + 'static,
        E: Error + ProvideErrorKind + Send + 'static,
        T: Send + 'static,
        Retry: ClassifyResponse<SdkSuccess<T>, SdkError<E>> + Send + Sync + 'static,
    {
        let span = match input.metadata() {
            Some(metadata) => tracing::debug_span!(
                "send_operation",
                operation = metadata.name(),
                service = metadata.service()
            ),
            None => tracing::debug_span!("send_operation"),
        };
        let signer = MapRequestLayer::for_mapper(SigV4SigningStage::new(SigV4Signer::new()));
        let endpoint_resolver = MapRequestLayer::for_mapper(AwsEndpointStage);
        let user_agent = MapRequestLayer::for_mapper(UserAgentStage::new());
        let inner = self.inner.clone();
        let mut svc = ServiceBuilder::new()
            .retry(self.retry_strategy.new_request_policy())
            .layer(ParseResponseLayer::<O, Retry>::new())
            .layer(endpoint_resolver)
            .layer(user_agent)
            .layer(signer)
            .layer(DispatchLayer::new())
            .service(inner);
        self.metrics.requests.fetch_add(1, Ordering::Relaxed);
        let result = async {
            let result = svc.ready().await?.call(input).await;
            match &result {
                Ok(_) => tracing::debug!("operation succeeded"),
                Err(err) => tracing::debug!(error = %err, "operation failed"),
            }
            result
        }
        .instrument(span)
        .await;
        self.metrics.record(&result);
        result
    }
}

/// Counters for the operations sent through a [`Client`]
///
/// Every operation is counted once, regardless of how many attempts it took.
#[derive(Debug, Default)]
pub struct ClientMetrics {
    requests: AtomicU64,
    successes: AtomicU64,
    service_errors: AtomicU64,
    other_errors: AtomicU64,
}

impl ClientMetrics {
    fn record<T, E>(&self, result: &Result<SdkSuccess<T>, SdkError<E>>) {
        let counter = match result {
            Ok(_) => &self.successes,
            Err(SdkError::ServiceError { .. }) => &self.service_errors,
            Err(_) => &self.other_errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Operations sent, including those still in flight
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Operations that completed with a successful response
    pub fn successes(&self) -> u64 {
        self.successes.load(Ordering::Relaxed)
    }

    /// Operations that completed with an error response from the service
    pub fn service_errors(&self) -> u64 {
        self.service_errors.load(Ordering::Relaxed)
    }

    /// Operations that failed without a parseable service response: construction failures,
    /// dispatch failures and unreadable responses
    pub fn other_errors(&self) -> u64 {
        self.other_errors.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use crate::Client;

    #[test]
    fn client_is_send_sync_and_clone() {
        fn check<T: Send + Sync + Clone>() {}
        check::<Client<crate::conn::Standard>>();
    }

    #[test]
    fn metrics_start_at_zero() {
        let client = Client::new(());
        let cloned = client.clone();
        assert_eq!(cloned.metrics().requests(), 0);
        assert_eq!(cloned.metrics().successes(), 0);
        assert_eq!(cloned.metrics().service_errors(), 0);
        assert_eq!(cloned.metrics().other_errors(), 0);
    }
}
