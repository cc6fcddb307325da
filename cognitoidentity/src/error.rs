/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Cognito Identity

use smithy_http::result::SdkError;
use smithy_types::retry::ErrorKind;
use std::fmt;

/// <p>An exception thrown when a dependent service such as Facebook or Twitter is not
/// responding</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ExternalServiceException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ExternalServiceException);

/// <p>Thrown when the service encounters an error during processing the request.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InternalErrorException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(InternalErrorException);

/// <p>Thrown if the identity pool has no role associated for the given auth type
/// (auth/unauth) or if the AssumeRole fails.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InvalidIdentityPoolConfigurationException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(InvalidIdentityPoolConfigurationException);

/// <p>Thrown for missing or bad input parameter(s).</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InvalidParameterException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(InvalidParameterException);

/// <p>Thrown when the total number of user pools has exceeded a preset limit.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct LimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(LimitExceededException);

/// <p>Thrown when a user is not authorized to access the requested resource.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct NotAuthorizedException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(NotAuthorizedException);

/// <p>Thrown when a user tries to use a login which is already linked to another
/// account.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ResourceConflictException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ResourceConflictException);

/// <p>Thrown when the requested resource (for example, a dataset or record) does not
/// exist.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ResourceNotFoundException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ResourceNotFoundException);

/// <p>Thrown when a request is throttled.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct TooManyRequestsException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(TooManyRequestsException, Some(ErrorKind::ThrottlingError));

operation_error!(
    /// Error type for the `GetId` operation
    GetIdError,
    GetIdErrorKind {
        InvalidParameterException,
        ResourceNotFoundException,
        NotAuthorizedException,
        ResourceConflictException,
        TooManyRequestsException,
        InternalErrorException,
        LimitExceededException,
        ExternalServiceException,
    }
);

operation_error!(
    /// Error type for the `GetCredentialsForIdentity` operation
    GetCredentialsForIdentityError,
    GetCredentialsForIdentityErrorKind {
        InvalidParameterException,
        ResourceNotFoundException,
        NotAuthorizedException,
        ResourceConflictException,
        TooManyRequestsException,
        InvalidIdentityPoolConfigurationException,
        InternalErrorException,
        ExternalServiceException,
    }
);

operation_error!(
    /// Error type for the `GetOpenIdToken` operation
    GetOpenIdTokenError,
    GetOpenIdTokenErrorKind {
        InvalidParameterException,
        ResourceNotFoundException,
        NotAuthorizedException,
        ResourceConflictException,
        TooManyRequestsException,
        InternalErrorException,
        ExternalServiceException,
    }
);

operation_error!(
    /// Error type for the `ListIdentities` operation
    ListIdentitiesError,
    ListIdentitiesErrorKind {
        InvalidParameterException,
        ResourceNotFoundException,
        NotAuthorizedException,
        TooManyRequestsException,
        InternalErrorException,
    }
);

operation_error!(
    /// Error type for the `DescribeIdentityPool` operation
    DescribeIdentityPoolError,
    DescribeIdentityPoolErrorKind {
        InvalidParameterException,
        ResourceNotFoundException,
        NotAuthorizedException,
        TooManyRequestsException,
        InternalErrorException,
    }
);

/// Any error returned by Cognito Identity
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    ExternalServiceException(ExternalServiceException),
    InternalErrorException(InternalErrorException),
    InvalidIdentityPoolConfigurationException(InvalidIdentityPoolConfigurationException),
    InvalidParameterException(InvalidParameterException),
    LimitExceededException(LimitExceededException),
    NotAuthorizedException(NotAuthorizedException),
    ResourceConflictException(ResourceConflictException),
    ResourceNotFoundException(ResourceNotFoundException),
    TooManyRequestsException(TooManyRequestsException),
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ExternalServiceException(inner) => fmt::Display::fmt(inner, f),
            Error::InternalErrorException(inner) => fmt::Display::fmt(inner, f),
            Error::InvalidIdentityPoolConfigurationException(inner) => fmt::Display::fmt(inner, f),
            Error::InvalidParameterException(inner) => fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => fmt::Display::fmt(inner, f),
            Error::NotAuthorizedException(inner) => fmt::Display::fmt(inner, f),
            Error::ResourceConflictException(inner) => fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => fmt::Display::fmt(inner, f),
            Error::TooManyRequestsException(inner) => fmt::Display::fmt(inner, f),
            Error::Unhandled(inner) => fmt::Display::fmt(inner, f),
        }
    }
}

impl std::error::Error for Error {}

impl<E> From<SdkError<E>> for Error
where
    E: Into<Error> + std::error::Error + Send + Sync + 'static,
{
    fn from(err: SdkError<E>) -> Self {
        match err {
            SdkError::ServiceError { err, .. } => err.into(),
            _ => Error::Unhandled(err.into()),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::error::{
        GetCredentialsForIdentityError, GetCredentialsForIdentityErrorKind, GetIdError,
        GetIdErrorKind,
    };
    use crate::protocol::ErrorResponse;
    use bytes::Bytes;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};

    #[test]
    fn error_type_header_takes_precedence() {
        let response = http::Response::builder()
            .status(400)
            .header("x-amzn-errortype", "NotAuthorizedException:http://internal.amazon.com/coral/com.amazonaws.cognito.identity.model/")
            .header("x-amzn-requestid", "3b8f2d1c-1f0e-4c1a-9a9e-5b6c7d8e9f00")
            .body(Bytes::from_static(br#"{"__type":"ResourceNotFoundException","message":"Logins don't match."}"#))
            .unwrap();
        let err = GetIdError::from_response(&response);
        match &err.kind {
            GetIdErrorKind::NotAuthorizedException(inner) => {
                assert_eq!(inner.message(), Some("Logins don't match."))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.request_id(), Some("3b8f2d1c-1f0e-4c1a-9a9e-5b6c7d8e9f00"));
        assert_eq!(err.to_string(), "NotAuthorizedException: Logins don't match.");
    }

    #[test]
    fn throttling() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(br#"{"__type":"com.amazonaws.cognito.identity#TooManyRequestsException","message":"Rate exceeded"}"#))
            .unwrap();
        let err = GetCredentialsForIdentityError::from_response(&response);
        assert!(matches!(
            err.kind,
            GetCredentialsForIdentityErrorKind::TooManyRequestsException(_)
        ));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
        let err: crate::Error = err.into();
        assert!(matches!(err, crate::Error::TooManyRequestsException(_)));
    }

    #[test]
    fn identity_pool_configuration_is_only_modeled_where_documented() {
        let response = http::Response::builder()
            .status(400)
            .body(Bytes::from_static(br#"{"__type":"InvalidIdentityPoolConfigurationException","message":"no role"}"#))
            .unwrap();
        assert!(matches!(
            GetCredentialsForIdentityError::from_response(&response).kind,
            GetCredentialsForIdentityErrorKind::InvalidIdentityPoolConfigurationException(_)
        ));
        let err = GetIdError::from_response(&response);
        assert!(matches!(err.kind, GetIdErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("InvalidIdentityPoolConfigurationException"));
    }
}
