/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

/// A closed set of string values that tolerates values added to the service later
///
/// Unrecognized values deserialize into `Unknown` and serialize back unchanged.
macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal),* $(,)? }) => {
        $(#[$meta])*
        #[non_exhaustive]
        #[derive(std::clone::Clone, std::cmp::Eq, std::cmp::Ord, std::cmp::PartialEq, std::cmp::PartialOrd, std::fmt::Debug, std::hash::Hash)]
        pub enum $name {
            $($variant,)*
            /// A value not known to this version of the crate
            Unknown(String),
        }

        impl $name {
            pub fn as_str(&self) -> &str {
                match self {
                    $($name::$variant => $value,)*
                    $name::Unknown(s) => s.as_ref(),
                }
            }

            /// Every value known to this version of the crate
            pub fn values() -> &'static [&'static str] {
                &[$($value),*]
            }
        }

        impl<'a> std::convert::From<&'a str> for $name {
            fn from(s: &'a str) -> Self {
                match s {
                    $($value => $name::$variant,)*
                    other => $name::Unknown(other.to_owned()),
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($name::from(s))
            }
        }

        impl std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let data = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from(data.as_str()))
            }
        }
    };
}

/// `Display`, `Error` and retry classification for a modeled error shape
///
/// The shape must have a `message: Option<String>` field.
macro_rules! error_shape {
    ($shape:ident) => {
        error_shape!($shape, None);
    };
    ($shape:ident, $kind:expr) => {
        impl $shape {
            pub fn message(&self) -> Option<&str> {
                self.message.as_deref()
            }

            pub fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
                $kind
            }
        }

        impl std::fmt::Display for $shape {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(stringify!($shape))?;
                if let Some(inner) = &self.message {
                    write!(f, ": {}", inner)?;
                }
                Ok(())
            }
        }

        impl std::error::Error for $shape {}
    };
}

/// The error type of a single operation: one variant per modeled error, plus `Unhandled`
macro_rules! operation_error {
    ($(#[$meta:meta])* $error:ident, $kind:ident { $($variant:ident),* $(,)? }) => {
        $(#[$meta])*
        #[derive(std::fmt::Debug)]
        pub struct $error {
            pub kind: $kind,
            pub(crate) meta: smithy_types::Error,
        }

        #[non_exhaustive]
        #[derive(std::fmt::Debug)]
        pub enum $kind {
            $($variant(crate::error::$variant),)*
            /// An unexpected error, eg. invalid JSON returned by the service or an unknown error code
            Unhandled(Box<dyn std::error::Error + Send + Sync + 'static>),
        }

        impl $error {
            pub fn new(kind: $kind, meta: smithy_types::Error) -> Self {
                Self { kind, meta }
            }

            pub fn unhandled(err: impl Into<Box<dyn std::error::Error + Send + Sync + 'static>>) -> Self {
                Self {
                    kind: $kind::Unhandled(err.into()),
                    meta: Default::default(),
                }
            }

            pub fn generic(err: smithy_types::Error) -> Self {
                Self {
                    meta: err.clone(),
                    kind: $kind::Unhandled(err.into()),
                }
            }

            pub fn message(&self) -> Option<&str> {
                self.meta.message()
            }

            pub fn meta(&self) -> &smithy_types::Error {
                &self.meta
            }

            pub fn request_id(&self) -> Option<&str> {
                self.meta.request_id()
            }

            pub fn code(&self) -> Option<&str> {
                self.meta.code()
            }
        }

        impl crate::protocol::ErrorResponse for $error {
            fn from_response(response: &http::Response<bytes::Bytes>) -> Self {
                let generic = aws_http::json_errors::parse_generic_error(response);
                let body = crate::protocol::json_body(response.body());
                let parsed = match generic.code() {
                    $(Some(stringify!($variant)) => {
                        Some(serde_json::from_slice(body).map($kind::$variant))
                    })*
                    _ => None,
                };
                match parsed {
                    Some(Ok(kind)) => Self::new(kind, generic),
                    // keep the code and request id so the error can still be retried
                    Some(Err(err)) => Self {
                        kind: $kind::Unhandled(err.into()),
                        meta: generic,
                    },
                    None => Self::generic(generic),
                }
            }

            fn unhandled(err: serde_json::Error) -> Self {
                $error::unhandled(err)
            }
        }

        impl std::fmt::Display for $error {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match &self.kind {
                    $($kind::$variant(inner) => std::fmt::Display::fmt(inner, f),)*
                    $kind::Unhandled(inner) => std::fmt::Display::fmt(inner, f),
                }
            }
        }

        impl smithy_types::retry::ProvideErrorKind for $error {
            fn code(&self) -> Option<&str> {
                $error::code(self)
            }

            fn retryable_error_kind(&self) -> Option<smithy_types::retry::ErrorKind> {
                match &self.kind {
                    $($kind::$variant(inner) => inner.retryable_error_kind(),)*
                    $kind::Unhandled(_) => None,
                }
            }
        }

        impl std::error::Error for $error {
            fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
                match &self.kind {
                    $($kind::$variant(inner) => Some(inner),)*
                    $kind::Unhandled(inner) => Some(inner.as_ref()),
                }
            }
        }

        impl std::convert::From<$error> for crate::Error {
            fn from(err: $error) -> Self {
                match err.kind {
                    $($kind::$variant(inner) => crate::Error::$variant(inner),)*
                    $kind::Unhandled(inner) => crate::Error::Unhandled(inner),
                }
            }
        }
    };
}
