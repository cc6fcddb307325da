/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use crate::body::SdkBody;
use crate::property_bag::PropertyBag;
use std::borrow::Cow;
use std::error::Error;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;

type BoxError = Box<dyn Error + Send + Sync>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Metadata {
    operation: Cow<'static, str>,
    service: Cow<'static, str>,
}

impl Metadata {
    pub fn name(&self) -> &str {
        &self.operation
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn new(
        operation: impl Into<Cow<'static, str>>,
        service: impl Into<Cow<'static, str>>,
    ) -> Self {
        Metadata {
            operation: operation.into(),
            service: service.into(),
        }
    }
}

#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct Parts<H, R> {
    pub response_handler: H,
    pub retry_policy: R,
    pub metadata: Option<Metadata>,
}

/// An error that occurs while turning an operation input into an HTTP request
///
/// No request is dispatched when building fails.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("missing required field `{field}`: {details}")]
    MissingField {
        field: &'static str,
        details: &'static str,
    },
    #[error("invalid field `{field}`: {details}")]
    InvalidField { field: &'static str, details: String },
    #[error("failed to serialize the request body")]
    SerializationError(#[source] BoxError),
    #[error("failed to construct the HTTP request")]
    InvalidRequest(#[from] http::Error),
}

/// A request paired with everything required to interpret its response
///
/// `H` parses the HTTP response into the operation output and `R` classifies failed attempts for
/// retries.
#[derive(Debug)]
pub struct Operation<H, R> {
    request: Request,
    parts: Parts<H, R>,
}

impl<H, R> Operation<H, R> {
    pub fn into_request_response(self) -> (Request, Parts<H, R>) {
        (self.request, self.parts)
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.parts.metadata = Some(metadata);
        self
    }

    pub fn metadata(&self) -> Option<&Metadata> {
        self.parts.metadata.as_ref()
    }

    pub fn with_retry_policy<R2>(self, retry_policy: R2) -> Operation<H, R2> {
        Operation {
            request: self.request,
            parts: Parts {
                response_handler: self.parts.response_handler,
                retry_policy,
                metadata: self.parts.metadata,
            },
        }
    }

    pub fn retry_policy(&self) -> &R {
        &self.parts.retry_policy
    }

    pub fn config_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.request.config_mut()
    }

    pub fn config(&self) -> MutexGuard<'_, PropertyBag> {
        self.request.config()
    }

    pub fn request(&self) -> &Request {
        &self.request
    }

    pub fn request_mut(&mut self) -> &mut Request {
        &mut self.request
    }

    pub fn try_clone(&self) -> Option<Self>
    where
        H: Clone,
        R: Clone,
    {
        let request = self.request.try_clone()?;
        Some(Self {
            request,
            parts: self.parts.clone(),
        })
    }
}

impl<H> Operation<H, ()> {
    pub fn new(request: Request, response_handler: H) -> Self {
        Operation {
            request,
            parts: Parts {
                response_handler,
                retry_policy: (),
                metadata: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Request {
    /// The underlying HTTP Request
    inner: http::Request<SdkBody>,

    /// Property bag of configuration options
    ///
    /// Middleware can read and write from the property bag and use its
    /// contents to augment the request (see `Request::augment`)
    ///
    /// The bag is shared between clones of a request so that retries observe the state written
    /// by earlier middleware.
    configuration: Arc<Mutex<PropertyBag>>,
}

impl Request {
    pub fn new(base: http::Request<SdkBody>) -> Self {
        Request {
            inner: base,
            configuration: Arc::new(Mutex::new(PropertyBag::new())),
        }
    }

    pub fn from_parts(
        inner: http::Request<SdkBody>,
        configuration: Arc<Mutex<PropertyBag>>,
    ) -> Self {
        Request {
            inner,
            configuration,
        }
    }

    pub fn augment<T>(
        self,
        f: impl FnOnce(http::Request<SdkBody>, &mut PropertyBag) -> Result<http::Request<SdkBody>, T>,
    ) -> Result<Request, T> {
        let inner = {
            let mut configuration = self
                .configuration
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            f(self.inner, &mut configuration)?
        };
        Ok(Request {
            inner,
            configuration: self.configuration,
        })
    }

    pub fn config_mut(&mut self) -> MutexGuard<'_, PropertyBag> {
        self.config()
    }

    pub fn config(&self) -> MutexGuard<'_, PropertyBag> {
        self.configuration
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn http(&self) -> &http::Request<SdkBody> {
        &self.inner
    }

    pub fn http_mut(&mut self) -> &mut http::Request<SdkBody> {
        &mut self.inner
    }

    pub fn try_clone(&self) -> Option<Request> {
        let cloned_body = self.inner.body().try_clone()?;
        let mut cloned_request = http::Request::new(cloned_body);
        *cloned_request.uri_mut() = self.inner.uri().clone();
        *cloned_request.method_mut() = self.inner.method().clone();
        *cloned_request.version_mut() = self.inner.version();
        *cloned_request.headers_mut() = self.inner.headers().clone();
        Some(Request {
            inner: cloned_request,
            configuration: self.configuration.clone(),
        })
    }

    pub fn into_parts(self) -> (http::Request<SdkBody>, Arc<Mutex<PropertyBag>>) {
        (self.inner, self.configuration)
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use crate::operation::{Metadata, Operation, Request};
    use http::header::{AUTHORIZATION, CONTENT_LENGTH};
    use http::Uri;

    #[test]
    fn try_clone_clones_all_data() {
        let mut request = Request::new(
            http::Request::builder()
                .uri(Uri::from_static("http://www.amazon.com"))
                .method("POST")
                .header(CONTENT_LENGTH, 456)
                .header(AUTHORIZATION, "Token: hello")
                .body(SdkBody::from("hello world!"))
                .expect("valid request"),
        );
        request.config_mut().insert("hello");
        let cloned = request.try_clone().expect("request is cloneable");

        let (request, config) = cloned.into_parts();
        assert_eq!(request.uri(), &Uri::from_static("http://www.amazon.com"));
        assert_eq!(request.method(), "POST");
        assert_eq!(request.headers().len(), 2);
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Token: hello"
        );
        assert_eq!(request.headers().get(CONTENT_LENGTH).unwrap(), "456");
        assert_eq!(request.body().bytes().unwrap(), "hello world!".as_bytes());
        assert_eq!(config.lock().unwrap().get::<&str>(), Some(&"hello"));
    }

    #[test]
    fn operation_clone_shares_configuration() {
        let request = Request::new(http::Request::new(SdkBody::from("body")));
        let mut op = Operation::new(request, "handler")
            .with_metadata(Metadata::new("GetQueryExecution", "athena"))
            .with_retry_policy(7u8);
        let cloned = op.try_clone().expect("cloneable");
        op.config_mut().insert(42u32);
        assert_eq!(cloned.config().get::<u32>(), Some(&42));
        assert_eq!(cloned.retry_policy(), &7u8);
        assert_eq!(cloned.metadata().map(|m| m.name()), Some("GetQueryExecution"));
    }
}
