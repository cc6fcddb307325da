/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! This module defines types that describe when to retry given a response.

use std::time::Duration;

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum ErrorKind {
    /// A connection level error such as a socket timeout, socket connect error or
    /// tls negotiation timeout.
    ///
    /// Transient errors are not modeled by services. They are determined from provider
    /// level errors and the response status code.
    TransientError,

    /// The server explicitly told the client to back off, such as a 429 or 503 HTTP error.
    ThrottlingError,

    /// Server error that isn't explicitly throttling but is considered by the client
    /// to be something that should be retried.
    ServerError,

    /// Doesn't count against any budgets. This could be something like a 401 challenge in Http.
    ClientError,
}

pub trait ProvideErrorKind {
    /// Returns the `ErrorKind` when the error is modeled as retryable
    ///
    /// If the error kind cannot be determined (eg. the error is unmodeled or the kind depends
    /// on an HTTP status code), return `None`.
    fn retryable_error_kind(&self) -> Option<ErrorKind>;

    /// Returns the `code` for this error if one exists
    fn code(&self) -> Option<&str>;
}

#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum RetryKind {
    /// Retry due to a specific `ErrorKind`
    Error(ErrorKind),

    /// An Explicit retry (eg. from `x-amz-retry-after`).
    ///
    /// Note: The specified `Duration` is considered a suggestion and may be ignored. For example:
    /// - No retry tokens are available.
    /// - The retry duration exceeds that maximum backoff configured by the client.
    Explicit(Duration),

    /// This response should not be retried
    NotRetryable,
}
