/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by AWS IoT

use smithy_http::result::SdkError;
use smithy_types::retry::ErrorKind;
use std::fmt;

/// <p>An unexpected error has occurred.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InternalFailureException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(InternalFailureException, Some(ErrorKind::ServerError));

/// <p>The request is not valid.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InvalidRequestException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(InvalidRequestException);

/// <p>A limit has been exceeded.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct LimitExceededException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(LimitExceededException);

/// <p>The resource already exists.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ResourceAlreadyExistsException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
    /// <p>The ID of the resource that caused the exception.</p>
    #[serde(rename = "resourceId")]
    pub resource_id: Option<String>,
    /// <p>The ARN of the resource that caused the exception.</p>
    #[serde(rename = "resourceArn")]
    pub resource_arn: Option<String>,
}
error_shape!(ResourceAlreadyExistsException);

/// <p>The specified resource does not exist.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ResourceNotFoundException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ResourceNotFoundException);

/// <p>The service is temporarily unavailable.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ServiceUnavailableException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ServiceUnavailableException, Some(ErrorKind::ServerError));

/// <p>The rate exceeds the limit.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ThrottlingException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(ThrottlingException, Some(ErrorKind::ThrottlingError));

/// <p>You are not authorized to perform this operation.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct UnauthorizedException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(UnauthorizedException);

/// <p>An exception thrown when the version of an entity specified with the
/// <code>expectedVersion</code> parameter does not match the latest version in the system.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct VersionConflictException {
    #[serde(rename = "message", alias = "Message")]
    pub message: Option<String>,
}
error_shape!(VersionConflictException);

operation_error!(
    /// Error type for the `CreateThing` operation
    CreateThingError,
    CreateThingErrorKind {
        InvalidRequestException,
        ThrottlingException,
        UnauthorizedException,
        ServiceUnavailableException,
        InternalFailureException,
        ResourceAlreadyExistsException,
        ResourceNotFoundException,
    }
);

operation_error!(
    /// Error type for the `DescribeThing` operation
    DescribeThingError,
    DescribeThingErrorKind {
        InvalidRequestException,
        ResourceNotFoundException,
        ThrottlingException,
        UnauthorizedException,
        ServiceUnavailableException,
        InternalFailureException,
    }
);

operation_error!(
    /// Error type for the `UpdateThing` operation
    UpdateThingError,
    UpdateThingErrorKind {
        InvalidRequestException,
        VersionConflictException,
        ResourceNotFoundException,
        ThrottlingException,
        UnauthorizedException,
        ServiceUnavailableException,
        InternalFailureException,
    }
);

operation_error!(
    /// Error type for the `DeleteThing` operation
    DeleteThingError,
    DeleteThingErrorKind {
        ResourceNotFoundException,
        VersionConflictException,
        InvalidRequestException,
        ThrottlingException,
        UnauthorizedException,
        ServiceUnavailableException,
        InternalFailureException,
    }
);

operation_error!(
    /// Error type for the `ListThings` operation
    ListThingsError,
    ListThingsErrorKind {
        InvalidRequestException,
        ThrottlingException,
        UnauthorizedException,
        ServiceUnavailableException,
        InternalFailureException,
    }
);

operation_error!(
    /// Error type for the `AttachPrincipalPolicy` operation
    AttachPrincipalPolicyError,
    AttachPrincipalPolicyErrorKind {
        ResourceNotFoundException,
        InvalidRequestException,
        ThrottlingException,
        UnauthorizedException,
        ServiceUnavailableException,
        InternalFailureException,
        LimitExceededException,
    }
);

operation_error!(
    /// Error type for the `DescribeEndpoint` operation
    DescribeEndpointError,
    DescribeEndpointErrorKind {
        InternalFailureException,
        InvalidRequestException,
        UnauthorizedException,
        ThrottlingException,
    }
);

/// Any error returned by AWS IoT
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    InternalFailureException(InternalFailureException),
    InvalidRequestException(InvalidRequestException),
    LimitExceededException(LimitExceededException),
    ResourceAlreadyExistsException(ResourceAlreadyExistsException),
    ResourceNotFoundException(ResourceNotFoundException),
    ServiceUnavailableException(ServiceUnavailableException),
    ThrottlingException(ThrottlingException),
    UnauthorizedException(UnauthorizedException),
    VersionConflictException(VersionConflictException),
    /// Unmodeled service errors and failures that never reached the service
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InternalFailureException(inner) => fmt::Display::fmt(inner, f),
            Error::InvalidRequestException(inner) => fmt::Display::fmt(inner, f),
            Error::LimitExceededException(inner) => fmt::Display::fmt(inner, f),
            Error::ResourceAlreadyExistsException(inner) => fmt::Display::fmt(inner, f),
            Error::ResourceNotFoundException(inner) => fmt::Display::fmt(inner, f),
            Error::ServiceUnavailableException(inner) => fmt::Display::fmt(inner, f),
            Error::ThrottlingException(inner) => fmt::Display::fmt(inner, f),
            Error::UnauthorizedException(inner) => fmt::Display::fmt(inner, f),
            Error::VersionConflictException(inner) => fmt::Display::fmt(inner, f),
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
        CreateThingError, CreateThingErrorKind, DescribeEndpointError, DescribeEndpointErrorKind,
        ListThingsError, ListThingsErrorKind, UpdateThingError, UpdateThingErrorKind,
    };
    use crate::protocol::ErrorResponse;
    use aws_http::AwsErrorRetryPolicy;
    use bytes::Bytes;
    use smithy_http::middleware::ResponseBody;
    use smithy_http::result::{SdkError, SdkSuccess};
    use smithy_http::retry::ClassifyResponse;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind, RetryKind};

    fn response(status: u16, error_type: &str, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-errortype", error_type)
            .header("x-amzn-requestid", "0d7c5f3a-6b1e-4e2f-8a9c-1b2d3e4f5a6b")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn resource_already_exists() {
        let err = CreateThingError::from_response(&response(
            409,
            "ResourceAlreadyExistsException:http://internal.amazon.com/coral/com.amazonaws.iot/",
            r#"{"message":"Thing lamp-post-17 already exists in account with different attributes","resourceId":"8d1f3a9e","resourceArn":"arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17"}"#,
        ));
        match &err.kind {
            CreateThingErrorKind::ResourceAlreadyExistsException(inner) => {
                assert_eq!(inner.resource_id.as_deref(), Some("8d1f3a9e"));
                assert_eq!(
                    inner.resource_arn.as_deref(),
                    Some("arn:aws:iot:us-east-1:123456789012:thing/lamp-post-17")
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.code(), Some("ResourceAlreadyExistsException"));
        assert_eq!(err.request_id(), Some("0d7c5f3a-6b1e-4e2f-8a9c-1b2d3e4f5a6b"));
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn version_conflict() {
        let err = UpdateThingError::from_response(&response(
            409,
            "VersionConflictException",
            r#"{"message":"The version for thing lamp-post-17 does not match the expected version."}"#,
        ));
        assert!(matches!(
            err.kind,
            UpdateThingErrorKind::VersionConflictException(_)
        ));
        assert_eq!(
            err.to_string(),
            "VersionConflictException: The version for thing lamp-post-17 does not match the expected version."
        );
    }

    #[test]
    fn retryable_errors() {
        let err = DescribeEndpointError::from_response(&response(
            429,
            "ThrottlingException",
            r#"{"message":"Rate exceeded"}"#,
        ));
        assert!(matches!(
            err.kind,
            DescribeEndpointErrorKind::ThrottlingException(_)
        ));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ThrottlingError));

        let err = DescribeEndpointError::from_response(&response(
            500,
            "InternalFailureException",
            "",
        ));
        assert!(matches!(
            err.kind,
            DescribeEndpointErrorKind::InternalFailureException(_)
        ));
        assert_eq!(err.retryable_error_kind(), Some(ErrorKind::ServerError));
    }

    #[test]
    fn unparseable_modeled_error_keeps_its_code() {
        let raw = response(429, "ThrottlingException", "<html>Rate exceeded</html>");
        let err = ListThingsError::from_response(&raw);
        assert!(matches!(err.kind, ListThingsErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.request_id(), Some("0d7c5f3a-6b1e-4e2f-8a9c-1b2d3e4f5a6b"));

        let err = SdkError::ServiceError {
            err,
            raw: raw.map(ResponseBody::from),
        };
        assert_eq!(
            ClassifyResponse::<SdkSuccess<()>, _>::classify(&AwsErrorRetryPolicy::new(), Err(&err)),
            RetryKind::Error(ErrorKind::ThrottlingError)
        );
    }
}
