/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use http::uri::{Authority, InvalidUri, Uri};
use std::borrow::Cow;
use std::str::FromStr;
use thiserror::Error;

/// API Endpoint
///
/// An endpoint supplies the scheme and authority of a request (and optionally a base path);
/// the operation supplies the rest of the path and the query string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    uri: http::Uri,

    /// If true, the endpoint prefix of an operation is ignored when setting the endpoint
    immutable: bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EndpointPrefix(String);

impl EndpointPrefix {
    pub fn new(prefix: impl Into<String>) -> Result<Self, InvalidEndpoint> {
        let prefix = prefix.into();
        match Authority::from_str(&prefix) {
            Ok(_) => Ok(EndpointPrefix(prefix)),
            Err(err) => Err(InvalidEndpoint::InvalidUri(err)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum InvalidEndpoint {
    #[error("endpoint must contain a valid authority")]
    EndpointMustHaveAuthority,
    #[error("endpoint must contain a scheme")]
    EndpointMustHaveScheme,
    #[error("invalid uri")]
    InvalidUri(#[from] InvalidUri),
    #[error("the endpoint could not be applied to the request")]
    InvalidParts(#[from] http::Error),
}

impl Endpoint {
    /// Create a new endpoint from a URI
    ///
    /// Certain operations will augment the endpoint with additional metadata, like a host prefix.
    /// If your endpoint does not support this (for example, when communicating with localhost),
    /// use [`Endpoint::immutable`].
    pub fn mutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: false,
        }
    }

    /// Create a new immutable endpoint from a URI
    ///
    /// ```rust
    /// # use smithy_http::endpoint::Endpoint;
    /// use http::Uri;
    /// let endpoint = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
    /// ```
    pub fn immutable(uri: Uri) -> Self {
        Endpoint {
            uri,
            immutable: true,
        }
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Sets the endpoint on `uri`, potentially applying the specified `prefix` in the process.
    pub fn set_endpoint(
        &self,
        uri: &mut http::Uri,
        prefix: Option<&EndpointPrefix>,
    ) -> Result<(), InvalidEndpoint> {
        let prefix = prefix.map(|p| p.0.as_str()).unwrap_or("");
        let authority = self
            .uri
            .authority()
            .ok_or(InvalidEndpoint::EndpointMustHaveAuthority)?
            .as_str();
        let authority = if !self.immutable && !prefix.is_empty() {
            Authority::from_str(&format!("{}{}", prefix, authority))?
        } else {
            Authority::from_str(authority)?
        };
        let scheme = self
            .uri
            .scheme()
            .ok_or(InvalidEndpoint::EndpointMustHaveScheme)?;
        let new_uri = Uri::builder()
            .authority(authority)
            .scheme(scheme.clone())
            .path_and_query(Self::merge_paths(&self.uri, uri).as_ref())
            .build()?;
        *uri = new_uri;
        Ok(())
    }

    fn merge_paths<'a>(endpoint: &'a Uri, uri: &'a Uri) -> Cow<'a, str> {
        if let Some(query) = endpoint.path_and_query().and_then(|pq| pq.query()) {
            tracing::warn!(query = %query, "query specified in endpoint will be ignored during endpoint resolution");
        }
        let endpoint_path = endpoint.path();
        let uri_path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");
        if endpoint_path.is_empty() || endpoint_path == "/" {
            Cow::Borrowed(uri_path_and_query)
        } else {
            let ep_no_slash = endpoint_path.strip_suffix('/').unwrap_or(endpoint_path);
            let uri_path_no_slash = uri_path_and_query
                .strip_prefix('/')
                .unwrap_or(uri_path_and_query);
            Cow::Owned(format!("{}/{}", ep_no_slash, uri_path_no_slash))
        }
    }
}

#[cfg(test)]
mod test {
    use crate::endpoint::{Endpoint, EndpointPrefix};
    use http::Uri;

    #[test]
    fn prefix_endpoint() {
        let ep = Endpoint::mutable(Uri::from_static("https://us-east-1.dynamo.amazonaws.com"));
        let mut uri = Uri::from_static("/list_tables?k=v");
        ep.set_endpoint(
            &mut uri,
            Some(&EndpointPrefix::new("subregion.").expect("valid prefix")),
        )
        .expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("https://subregion.us-east-1.dynamo.amazonaws.com/list_tables?k=v")
        );
    }

    #[test]
    fn immutable_endpoints_ignore_prefix() {
        let ep = Endpoint::immutable(Uri::from_static("http://localhost:8000"));
        let mut uri = Uri::from_static("/things/lamp");
        ep.set_endpoint(
            &mut uri,
            Some(&EndpointPrefix::new("data.").expect("valid prefix")),
        )
        .expect("valid endpoint");
        assert_eq!(uri, Uri::from_static("http://localhost:8000/things/lamp"));
    }

    #[test]
    fn endpoint_with_path() {
        let ep = Endpoint::immutable(Uri::from_static("https://proxy.example.com/iot/"));
        let mut uri = Uri::from_static("/things?maxResults=2");
        ep.set_endpoint(&mut uri, None).expect("valid endpoint");
        assert_eq!(
            uri,
            Uri::from_static("https://proxy.example.com/iot/things?maxResults=2")
        );
    }

    #[test]
    fn endpoint_requires_authority() {
        let ep = Endpoint::immutable(Uri::from_static("/no-authority"));
        let mut uri = Uri::from_static("/");
        ep.set_endpoint(&mut uri, None)
            .expect_err("endpoint has no authority");
    }
}
