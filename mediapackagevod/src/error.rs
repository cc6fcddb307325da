/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by MediaPackage VOD

use smithy_http::result::SdkError;
use smithy_types::retry::ErrorKind;
use std::fmt;

/// <p>The client is not authorized to access the requested resource.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ForbiddenException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ForbiddenException);

/// <p>An unexpected error occurred.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InternalServerErrorException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(InternalServerErrorException, Some(ErrorKind::ServerError));

/// <p>The requested resource does not exist.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct NotFoundException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(NotFoundException);

/// <p>An unexpected error occurred.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ServiceUnavailableException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ServiceUnavailableException, Some(ErrorKind::ServerError));

/// <p>The client has exceeded their resource or throttling limits.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct TooManyRequestsException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(TooManyRequestsException, Some(ErrorKind::ThrottlingError));

/// <p>The parameters sent in the request are not valid.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct UnprocessableEntityException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(UnprocessableEntityException);

operation_error!(
    /// Error type for the `CreateAsset` operation
    CreateAssetError,
    CreateAssetErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

operation_error!(
    /// Error type for the `DescribeAsset` operation
    DescribeAssetError,
    DescribeAssetErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

operation_error!(
    /// Error type for the `DeleteAsset` operation
    DeleteAssetError,
    DeleteAssetErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

operation_error!(
    /// Error type for the `CreatePackagingConfiguration` operation
    CreatePackagingConfigurationError,
    CreatePackagingConfigurationErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

operation_error!(
    /// Error type for the `DescribePackagingConfiguration` operation
    DescribePackagingConfigurationError,
    DescribePackagingConfigurationErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

operation_error!(
    /// Error type for the `ListPackagingConfigurations` operation
    ListPackagingConfigurationsError,
    ListPackagingConfigurationsErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

operation_error!(
    /// Error type for the `DeletePackagingConfiguration` operation
    DeletePackagingConfigurationError,
    DeletePackagingConfigurationErrorKind {
        ForbiddenException,
        InternalServerErrorException,
        NotFoundException,
        ServiceUnavailableException,
        TooManyRequestsException,
        UnprocessableEntityException,
    }
);

/// Any error returned by MediaPackage VOD
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    ForbiddenException(ForbiddenException),
    InternalServerErrorException(InternalServerErrorException),
    NotFoundException(NotFoundException),
    ServiceUnavailableException(ServiceUnavailableException),
    TooManyRequestsException(TooManyRequestsException),
    UnprocessableEntityException(UnprocessableEntityException),
    /// Unmodeled service errors and failures that never reached the service
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ForbiddenException(inner) => fmt::Display::fmt(inner, f),
            Error::InternalServerErrorException(inner) => fmt::Display::fmt(inner, f),
            Error::NotFoundException(inner) => fmt::Display::fmt(inner, f),
            Error::ServiceUnavailableException(inner) => fmt::Display::fmt(inner, f),
            Error::TooManyRequestsException(inner) => fmt::Display::fmt(inner, f),
            Error::UnprocessableEntityException(inner) => fmt::Display::fmt(inner, f),
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
    use crate::error::{CreateAssetError, CreateAssetErrorKind};
    use crate::protocol::ErrorResponse;
    use bytes::Bytes;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};

    #[test]
    fn unprocessable_entity() {
        let response = http::Response::builder()
            .status(422)
            .header("x-amzn-errortype", "UnprocessableEntityException")
            .header("x-amzn-requestid", "5f0a2b8c-9d3e-4f1a-8b7c-6d5e4f3a2b1c")
            .body(Bytes::from_static(
                br#"{"Message":"sourceArn must be an S3 object ARN"}"#,
            ))
            .unwrap();
        let err = CreateAssetError::from_response(&response);
        assert!(matches!(
            err.kind,
            CreateAssetErrorKind::UnprocessableEntityException(_)
        ));
        assert_eq!(
            err.to_string(),
            "UnprocessableEntityException: sourceArn must be an S3 object ARN"
        );
        assert_eq!(err.request_id(), Some("5f0a2b8c-9d3e-4f1a-8b7c-6d5e4f3a2b1c"));
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn too_many_requests_is_throttling() {
        let response = http::Response::builder()
            .status(429)
            .body(Bytes::from_static(
                br#"{"__type":"TooManyRequestsException","message":"Too many requests"}"#,
            ))
            .unwrap();
        let err = CreateAssetError::from_response(&response);
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));
        let err: crate::Error = err.into();
        assert!(matches!(err, crate::Error::TooManyRequestsException(_)));
    }

    #[test]
    fn gateway_error_pages_keep_the_error_metadata() {
        let response = http::Response::builder()
            .status(503)
            .header("x-amzn-errortype", "ServiceUnavailableException")
            .header("x-amzn-requestid", "9c1d7e2f-3a4b-4c5d-8e6f-7a8b9c0d1e2f")
            .body(Bytes::from_static(b"<html><body>Service Unavailable</body></html>"))
            .unwrap();
        let err = CreateAssetError::from_response(&response);
        assert!(matches!(err.kind, CreateAssetErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("ServiceUnavailableException"));
        assert_eq!(err.request_id(), Some("9c1d7e2f-3a4b-4c5d-8e6f-7a8b9c0d1e2f"));
    }
}
