/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod env;

use crate::Credentials;
use smithy_http::property_bag::PropertyBag;
use std::error::Error;
use std::fmt;
use std::fmt::{Debug, Display, Formatter};
use std::sync::Arc;

#[derive(Debug)]
#[non_exhaustive]
pub enum CredentialsError {
    CredentialsNotLoaded,
    Unhandled(Box<dyn Error + Send + Sync + 'static>),
}

impl Display for CredentialsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::CredentialsNotLoaded => write!(f, "CredentialsNotLoaded"),
            CredentialsError::Unhandled(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CredentialsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CredentialsError::Unhandled(e) => Some(e.as_ref() as _),
            _ => None,
        }
    }
}

pub type CredentialsResult = Result<Credentials, CredentialsError>;

/// A source of AWS credentials
///
/// Signing happens inside a synchronous request middleware, so providers must be able to answer
/// without blocking on I/O. Providers that need to refresh should cache and hand out the current value.
pub trait ProvideCredentials: Send + Sync {
    fn provide_credentials(&self) -> CredentialsResult;
}

pub type CredentialsProvider = Arc<dyn ProvideCredentials>;

pub fn default_provider() -> impl ProvideCredentials {
    env::EnvironmentVariableCredentialsProvider::new()
}

impl ProvideCredentials for Credentials {
    fn provide_credentials(&self) -> CredentialsResult {
        Ok(self.clone())
    }
}

impl<T: ProvideCredentials + ?Sized> ProvideCredentials for Arc<T> {
    fn provide_credentials(&self) -> CredentialsResult {
        self.as_ref().provide_credentials()
    }
}

/// Insert a credentials provider into an operation's property bag
///
/// A provider set this way on a single operation takes precedence over the one from the
/// service configuration.
pub fn set_provider(config: &mut PropertyBag, provider: CredentialsProvider) {
    config.insert(provider);
}
