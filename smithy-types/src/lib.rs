/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub mod instant;
pub mod retry;

use crate::retry::{ErrorKind, ProvideErrorKind};
use std::fmt;

pub use crate::instant::Instant;

/// Generic Error type
///
/// For many services, Errors are modeled. However, many services only partially model errors or don't
/// model errors at all. In these cases, the SDK will return this generic error type to expose the
/// `code`, `message` and `request_id`.
#[derive(Debug, Eq, PartialEq, Default, Clone)]
pub struct Error {
    pub code: Option<String>,
    pub message: Option<String>,
    pub request_id: Option<String>,
}

impl Error {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

impl ProvideErrorKind for Error {
    fn retryable_error_kind(&self) -> Option<ErrorKind> {
        None
    }

    fn code(&self) -> Option<&str> {
        Error::code(self)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fmt = f.debug_struct("Error");
        if let Some(code) = &self.code {
            fmt.field("code", code);
        }
        if let Some(message) = &self.message {
            fmt.field("message", message);
        }
        if let Some(req_id) = &self.request_id {
            fmt.field("request_id", req_id);
        }
        fmt.finish()
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use crate::Error;

    #[test]
    fn generic_error_display() {
        let err = Error {
            code: Some("InvalidRequestException".to_string()),
            message: Some("bad".to_string()),
            request_id: None,
        };
        assert_eq!(
            format!("{}", err),
            "Error { code: \"InvalidRequestException\", message: \"bad\" }"
        );
        assert_eq!(err.code(), Some("InvalidRequestException"));
    }
}
