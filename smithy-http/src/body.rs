/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use bytes::Bytes;
use http::{HeaderMap, HeaderValue};
use http_body::SizeHint;
use std::error::Error;
use std::pin::Pin;
use std::task::{Context, Poll};

type BodyError = Box<dyn Error + Send + Sync>;

/// SdkBody type
///
/// This is the Body used for dispatching all HTTP Requests.
/// For handling responses, the type of the body will be controlled
/// by the HTTP stack.
///
/// Every request body produced by the service crates is fully in memory, which keeps
/// requests cheap to clone for retries and lets the signer hash the payload.
#[derive(Debug)]
pub enum SdkBody {
    Once(Option<Bytes>),
}

impl SdkBody {
    pub fn empty() -> Self {
        SdkBody::Once(None)
    }

    fn poll_inner(&mut self) -> Poll<Option<Result<Bytes, BodyError>>> {
        match self {
            SdkBody::Once(ref mut opt) => {
                let data = opt.take();
                match data {
                    Some(bytes) if !bytes.is_empty() => Poll::Ready(Some(Ok(bytes))),
                    _ => Poll::Ready(None),
                }
            }
        }
    }

    /// If possible, return a reference to this body as `&[u8]`
    ///
    /// If this SdkBody is NOT streaming, this will return the byte slab
    /// If this SdkBody is streaming, this will return `None`
    pub fn bytes(&self) -> Option<&[u8]> {
        match self {
            SdkBody::Once(Some(b)) => Some(b),
            SdkBody::Once(None) => Some(&[]),
        }
    }

    pub fn try_clone(&self) -> Option<Self> {
        match self {
            SdkBody::Once(bytes) => Some(SdkBody::Once(bytes.clone())),
        }
    }

    pub fn content_length(&self) -> Option<u64> {
        self.bytes().map(|b| b.len() as u64)
    }
}

impl From<&str> for SdkBody {
    fn from(s: &str) -> Self {
        SdkBody::Once(Some(Bytes::copy_from_slice(s.as_bytes())))
    }
}

impl From<String> for SdkBody {
    fn from(s: String) -> Self {
        SdkBody::from(Bytes::from(s))
    }
}

impl From<Bytes> for SdkBody {
    fn from(bytes: Bytes) -> Self {
        SdkBody::Once(Some(bytes))
    }
}

impl From<Vec<u8>> for SdkBody {
    fn from(data: Vec<u8>) -> SdkBody {
        Self::from(Bytes::from(data))
    }
}

impl http_body::Body for SdkBody {
    type Data = Bytes;
    type Error = BodyError;

    fn poll_data(
        mut self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Option<Result<Self::Data, Self::Error>>> {
        self.poll_inner()
    }

    fn poll_trailers(
        self: Pin<&mut Self>,
        _cx: &mut Context<'_>,
    ) -> Poll<Result<Option<HeaderMap<HeaderValue>>, Self::Error>> {
        Poll::Ready(Ok(None))
    }

    fn is_end_stream(&self) -> bool {
        match self {
            SdkBody::Once(None) => true,
            SdkBody::Once(Some(bytes)) => bytes.is_empty(),
        }
    }

    fn size_hint(&self) -> SizeHint {
        match self.content_length() {
            Some(len) => SizeHint::with_exact(len),
            None => SizeHint::default(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::body::SdkBody;
    use http_body::Body;

    #[tokio::test]
    async fn body_is_read_once() {
        let body = SdkBody::from("hello world!");
        let cloned = body.try_clone().expect("in-memory bodies can be cloned");
        let data = hyper::body::to_bytes(body).await.expect("in memory");
        assert_eq!(data.as_ref(), b"hello world!");
        assert_eq!(cloned.bytes(), Some(&b"hello world!"[..]));
    }

    #[test]
    fn empty_body_is_end_of_stream() {
        assert!(SdkBody::empty().is_end_stream());
        assert!(SdkBody::from("").is_end_stream());
        assert_eq!(SdkBody::from("abc").size_hint().exact(), Some(3));
    }
}
