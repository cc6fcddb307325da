/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Errors returned by Athena
//!
//! Every operation has its own error type (eg. [`StartQueryExecutionError`]) whose `kind` lists
//! the errors that operation is documented to return. [`Error`] is the union of all of them.

use crate::model::ThrottleReason;
use smithy_http::result::SdkError;
use smithy_types::retry::ErrorKind;
use std::fmt;

/// <p>Indicates a platform issue, which may be due to a transient condition or outage.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InternalServerException {
    #[serde(rename = "Message", alias = "message")]
    pub message: Option<String>,
}
error_shape!(InternalServerException);

/// <p>Indicates that something is wrong with the input to the request. For example, a required
/// parameter may be missing or out of range.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct InvalidRequestException {
    /// <p>The error code returned when the query execution failed to process, or when the
    /// processing request for the named query failed.</p>
    #[serde(rename = "AthenaErrorCode")]
    pub athena_error_code: Option<String>,
    #[serde(rename = "Message", alias = "message")]
    pub message: Option<String>,
}
error_shape!(InvalidRequestException);

/// <p>Indicates that the request was throttled.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct TooManyRequestsException {
    #[serde(rename = "Message", alias = "message")]
    pub message: Option<String>,
    #[serde(rename = "Reason")]
    pub reason: Option<ThrottleReason>,
}
error_shape!(TooManyRequestsException, Some(ErrorKind::ThrottlingError));

/// <p>A resource, such as a workgroup, was not found.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct ResourceNotFoundException {
    #[serde(rename = "Message", alias = "message")]
    pub message: Option<String>,
    /// <p>The name of the Amazon resource.</p>
    #[serde(rename = "ResourceName")]
    pub resource_name: Option<String>,
}
error_shape!(ResourceNotFoundException);

/// <p>An exception that Athena received when it called a custom metastore.</p>
#[non_exhaustive]
#[derive(serde::Deserialize, Clone, Default, PartialEq, Debug)]
pub struct MetadataException {
    #[serde(rename = "Message", alias = "message")]
    pub message: Option<String>,
}
error_shape!(MetadataException);

operation_error!(
    /// Error type for the `StartQueryExecution` operation
    StartQueryExecutionError,
    StartQueryExecutionErrorKind {
        InternalServerException,
        InvalidRequestException,
        TooManyRequestsException,
    }
);

operation_error!(
    /// Error type for the `StopQueryExecution` operation
    StopQueryExecutionError,
    StopQueryExecutionErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetQueryExecution` operation
    GetQueryExecutionError,
    GetQueryExecutionErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetQueryResults` operation
    GetQueryResultsError,
    GetQueryResultsErrorKind {
        InternalServerException,
        InvalidRequestException,
        TooManyRequestsException,
    }
);

operation_error!(
    /// Error type for the `ListQueryExecutions` operation
    ListQueryExecutionsError,
    ListQueryExecutionsErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `CreateNamedQuery` operation
    CreateNamedQueryError,
    CreateNamedQueryErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetNamedQuery` operation
    GetNamedQueryError,
    GetNamedQueryErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `DeleteNamedQuery` operation
    DeleteNamedQueryError,
    DeleteNamedQueryErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `ListNamedQueries` operation
    ListNamedQueriesError,
    ListNamedQueriesErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `BatchGetNamedQuery` operation
    BatchGetNamedQueryError,
    BatchGetNamedQueryErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetDatabase` operation
    GetDatabaseError,
    GetDatabaseErrorKind {
        InternalServerException,
        InvalidRequestException,
        MetadataException,
    }
);

operation_error!(
    /// Error type for the `ListTagsForResource` operation
    ListTagsForResourceError,
    ListTagsForResourceErrorKind {
        InternalServerException,
        InvalidRequestException,
        ResourceNotFoundException,
    }
);

operation_error!(
    /// Error type for the `BatchGetQueryExecution` operation
    BatchGetQueryExecutionError,
    BatchGetQueryExecutionErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `CreateDataCatalog` operation
    CreateDataCatalogError,
    CreateDataCatalogErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `DeleteDataCatalog` operation
    DeleteDataCatalogError,
    DeleteDataCatalogErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetDataCatalog` operation
    GetDataCatalogError,
    GetDataCatalogErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `ListDataCatalogs` operation
    ListDataCatalogsError,
    ListDataCatalogsErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `UpdateDataCatalog` operation
    UpdateDataCatalogError,
    UpdateDataCatalogErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `CreateWorkGroup` operation
    CreateWorkGroupError,
    CreateWorkGroupErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `DeleteWorkGroup` operation
    DeleteWorkGroupError,
    DeleteWorkGroupErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetWorkGroup` operation
    GetWorkGroupError,
    GetWorkGroupErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `ListWorkGroups` operation
    ListWorkGroupsError,
    ListWorkGroupsErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `UpdateWorkGroup` operation
    UpdateWorkGroupError,
    UpdateWorkGroupErrorKind {
        InternalServerException,
        InvalidRequestException,
    }
);

operation_error!(
    /// Error type for the `GetTableMetadata` operation
    GetTableMetadataError,
    GetTableMetadataErrorKind {
        InternalServerException,
        InvalidRequestException,
        MetadataException,
    }
);

operation_error!(
    /// Error type for the `ListTableMetadata` operation
    ListTableMetadataError,
    ListTableMetadataErrorKind {
        InternalServerException,
        InvalidRequestException,
        MetadataException,
    }
);

operation_error!(
    /// Error type for the `ListDatabases` operation
    ListDatabasesError,
    ListDatabasesErrorKind {
        InternalServerException,
        InvalidRequestException,
        MetadataException,
    }
);

operation_error!(
    /// Error type for the `TagResource` operation
    TagResourceError,
    TagResourceErrorKind {
        InternalServerException,
        InvalidRequestException,
        ResourceNotFoundException,
    }
);

operation_error!(
    /// Error type for the `UntagResource` operation
    UntagResourceError,
    UntagResourceErrorKind {
        InternalServerException,
        InvalidRequestException,
        ResourceNotFoundException,
    }
);

/// Any error returned by Athena
///
/// Operation errors convert into this type, as does an `SdkError` of any operation, which makes
/// it convenient to use with `?` when a caller does not need to distinguish between operations.
#[non_exhaustive]
#[derive(Debug)]
pub enum Error {
    InternalServerException(InternalServerException),
    InvalidRequestException(InvalidRequestException),
    MetadataException(MetadataException),
    ResourceNotFoundException(ResourceNotFoundException),
    TooManyRequestsException(TooManyRequestsException),
    /// Unmodeled service errors and failures that never reached the service
    Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InternalServerException(inner) => fmt::Display::fmt(inner, f),
            Error::InvalidRequestException(inner) => fmt::Display::fmt(inner, f),
            Error::MetadataException(inner) => fmt::Display::fmt(inner, f),
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
        GetQueryExecutionError, GetQueryExecutionErrorKind, ListDatabasesError,
        ListDatabasesErrorKind, StartQueryExecutionError, StartQueryExecutionErrorKind,
        TagResourceError, TagResourceErrorKind,
    };
    use crate::model::ThrottleReason;
    use crate::protocol::ErrorResponse;
    use bytes::Bytes;
    use smithy_types::retry::{ErrorKind, ProvideErrorKind};

    fn response(status: u16, body: &'static str) -> http::Response<Bytes> {
        http::Response::builder()
            .status(status)
            .header("x-amzn-requestid", "e8f3a2b1")
            .body(Bytes::from_static(body.as_bytes()))
            .unwrap()
    }

    #[test]
    fn modeled_error() {
        let err = StartQueryExecutionError::from_response(&response(
            400,
            r#"{"__type":"TooManyRequestsException","Message":"Slow down","Reason":"CONCURRENT_QUERY_LIMIT_EXCEEDED"}"#,
        ));
        match &err.kind {
            StartQueryExecutionErrorKind::TooManyRequestsException(inner) => {
                assert_eq!(inner.message(), Some("Slow down"));
                assert_eq!(
                    inner.reason,
                    Some(ThrottleReason::ConcurrentQueryLimitExceeded)
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.code(), Some("TooManyRequestsException"));
        assert_eq!(err.request_id(), Some("e8f3a2b1"));
        assert_eq!(
            err.retryable_error_kind(),
            Some(ErrorKind::ThrottlingError)
        );
        assert_eq!(err.to_string(), "TooManyRequestsException: Slow down");
    }

    #[test]
    fn namespaced_error_codes_are_sanitized() {
        let err = GetQueryExecutionError::from_response(&response(
            400,
            r#"{"__type":"com.amazonaws.athena#InvalidRequestException","AthenaErrorCode":"INVALID_INPUT","Message":"bad id"}"#,
        ));
        match err.kind {
            GetQueryExecutionErrorKind::InvalidRequestException(inner) => {
                assert_eq!(inner.athena_error_code.as_deref(), Some("INVALID_INPUT"));
                assert_eq!(inner.to_string(), "InvalidRequestException: bad id");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn unmodeled_errors_are_unhandled() {
        let err = GetQueryExecutionError::from_response(&response(
            400,
            r#"{"__type":"TooManyRequestsException","Message":"Slow down"}"#,
        ));
        assert!(matches!(err.kind, GetQueryExecutionErrorKind::Unhandled(_)));
        assert_eq!(err.code(), Some("TooManyRequestsException"));
        assert_eq!(err.message(), Some("Slow down"));
        assert_eq!(err.retryable_error_kind(), None);
    }

    #[test]
    fn errors_convert_into_the_service_error() {
        let err = StartQueryExecutionError::from_response(&response(
            500,
            r#"{"__type":"InternalServerException"}"#,
        ));
        let err: crate::Error = err.into();
        assert!(matches!(err, crate::Error::InternalServerException(_)));
        assert_eq!(err.to_string(), "InternalServerException");
    }

    #[test]
    fn tagging_a_missing_resource() {
        let err = TagResourceError::from_response(&response(
            400,
            r#"{"__type":"ResourceNotFoundException","Message":"workgroup not found","ResourceName":"analysts"}"#,
        ));
        match &err.kind {
            TagResourceErrorKind::ResourceNotFoundException(inner) => {
                assert_eq!(inner.resource_name.as_deref(), Some("analysts"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(err.retryable_error_kind(), None);
        let err: crate::Error = err.into();
        assert!(matches!(err, crate::Error::ResourceNotFoundException(_)));
    }

    #[test]
    fn metastore_failures() {
        let err = ListDatabasesError::from_response(&response(
            400,
            r#"{"__type":"MetadataException","Message":"catalog unreachable"}"#,
        ));
        assert!(matches!(
            err.kind,
            ListDatabasesErrorKind::MetadataException(_)
        ));
        assert_eq!(err.message(), Some("catalog unreachable"));
    }
}
