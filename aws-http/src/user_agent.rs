/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! `User-Agent` and `x-amz-user-agent` headers
//!
//! Both headers are a space separated list of `name/value` segments:
//! ```text
//! x-amz-user-agent: aws-sdk-rust/<core version> api/<service>/<crate version> os/<family>[/<version>] lang/rust/<rustc version> [exec-env/<env>]
//! user-agent:       aws-sdk-rust/<core version> os/<family>[/<version>] lang/rust/<rustc version>
//! ```

use aws_types::build_metadata::BUILD_METADATA;
use aws_types::os_shim_internal::Env;
use http::header::{HeaderName, InvalidHeaderValue, USER_AGENT};
use http::HeaderValue;
use smithy_http::middleware::MapRequest;
use smithy_http::operation::Request;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::fmt;
use thiserror::Error;

/// The service id and version of the service crate making the request
#[derive(Clone, Debug)]
pub struct ApiMetadata {
    service_id: Cow<'static, str>,
    version: &'static str,
}

impl ApiMetadata {
    pub const fn new(service_id: &'static str, version: &'static str) -> Self {
        Self {
            service_id: Cow::Borrowed(service_id),
            version,
        }
    }
}

impl fmt::Display for ApiMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "api/{}/{}", self.service_id, self.version)
    }
}

/// User agent of a single service client
///
/// Service configs insert this into the property bag of every operation; [`UserAgentStage`]
/// turns it into headers.
#[derive(Clone, Debug)]
pub struct AwsUserAgent {
    sdk_version: &'static str,
    api_metadata: ApiMetadata,
    os_family: &'static str,
    os_version: Option<String>,
    rust_version: &'static str,
    exec_env: Option<String>,
}

impl AwsUserAgent {
    /// User agent for the platform this crate was built for
    ///
    /// `AWS_EXECUTION_ENV` (set by Lambda and other AWS hosted runtimes) is read from `env`.
    pub fn new_from_environment(env: Env, api_metadata: ApiMetadata) -> Self {
        AwsUserAgent {
            sdk_version: BUILD_METADATA.core_pkg_version,
            api_metadata,
            os_family: os_family(std::env::consts::OS),
            os_version: None,
            rust_version: BUILD_METADATA.rust_version,
            exec_env: env.get("AWS_EXECUTION_ENV").ok(),
        }
    }

    /// A platform independent user agent, so that signed test requests are reproducible
    pub fn for_tests() -> Self {
        AwsUserAgent {
            sdk_version: "0.123.test",
            api_metadata: ApiMetadata::new("test-service", "0.123"),
            os_family: "windows",
            os_version: Some("XPSP3".to_string()),
            rust_version: "1.50.0",
            exec_env: None,
        }
    }

    fn sdk_segment(&self) -> String {
        format!("aws-sdk-rust/{}", self.sdk_version)
    }

    fn os_segment(&self) -> String {
        match &self.os_version {
            Some(version) => format!("os/{}/{}", self.os_family, version),
            None => format!("os/{}", self.os_family),
        }
    }

    fn lang_segment(&self) -> String {
        format!("lang/rust/{}", self.rust_version)
    }

    /// Value of the `x-amz-user-agent` header
    pub fn aws_ua_header(&self) -> String {
        let mut segments = vec![
            self.sdk_segment(),
            self.api_metadata.to_string(),
            self.os_segment(),
            self.lang_segment(),
        ];
        segments.extend(self.exec_env.iter().map(|env| format!("exec-env/{}", env)));
        segments.join(" ")
    }

    /// Value of the `User-Agent` header, which omits the service and execution environment
    pub fn ua_header(&self) -> String {
        [self.sdk_segment(), self.os_segment(), self.lang_segment()].join(" ")
    }
}

fn os_family(os: &'static str) -> &'static str {
    match os {
        "windows" | "linux" | "macos" | "android" | "ios" => os,
        _ => "other",
    }
}

/// Sets both user agent headers from the [`AwsUserAgent`] in the property bag
#[non_exhaustive]
#[derive(Default, Clone, Debug)]
pub struct UserAgentStage;

impl UserAgentStage {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Error)]
pub enum UserAgentStageError {
    #[error("no user agent in the property bag")]
    UserAgentMissing,
    #[error("the user agent is not a valid header value")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

lazy_static::lazy_static! {
    static ref X_AMZ_USER_AGENT: HeaderName = HeaderName::from_static("x-amz-user-agent");
}

impl MapRequest for UserAgentStage {
    type Error = UserAgentStageError;

    fn apply(&self, request: Request) -> Result<Request, Self::Error> {
        request.augment(|mut req, conf| {
            let ua = conf
                .get::<AwsUserAgent>()
                .ok_or(UserAgentStageError::UserAgentMissing)?;
            let headers = req.headers_mut();
            headers.insert(USER_AGENT, HeaderValue::try_from(ua.ua_header())?);
            headers.insert(
                X_AMZ_USER_AGENT.clone(),
                HeaderValue::try_from(ua.aws_ua_header())?,
            );
            Ok(req)
        })
    }
}

#[cfg(test)]
mod test {
    use crate::user_agent::{
        os_family, ApiMetadata, AwsUserAgent, UserAgentStage, UserAgentStageError,
        X_AMZ_USER_AGENT,
    };
    use aws_types::os_shim_internal::Env;
    use http::header::USER_AGENT;
    use smithy_http::body::SdkBody;
    use smithy_http::middleware::MapRequest;
    use smithy_http::operation;

    fn pinned(env: &[(&str, &str)], api_metadata: ApiMetadata) -> AwsUserAgent {
        let mut ua = AwsUserAgent::new_from_environment(Env::from_slice(env), api_metadata);
        ua.sdk_version = "0.1";
        ua.rust_version = "1.50.0";
        ua.os_family = "macos";
        ua.os_version = Some("1.15".to_string());
        ua
    }

    #[test]
    fn service_is_only_in_the_aws_header() {
        let ua = pinned(&[], ApiMetadata::new("athena", "123"));
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/athena/123 os/macos/1.15 lang/rust/1.50.0"
        );
        assert_eq!(
            ua.ua_header(),
            "aws-sdk-rust/0.1 os/macos/1.15 lang/rust/1.50.0"
        );
    }

    #[test]
    fn execution_environment_is_appended() {
        let ua = pinned(
            &[("AWS_EXECUTION_ENV", "AWS_Lambda_rust")],
            ApiMetadata::new("iot", "123"),
        );
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.1 api/iot/123 os/macos/1.15 lang/rust/1.50.0 exec-env/AWS_Lambda_rust"
        );
        assert_eq!(
            ua.ua_header(),
            "aws-sdk-rust/0.1 os/macos/1.15 lang/rust/1.50.0"
        );
    }

    #[test]
    fn unknown_platforms_are_other() {
        assert_eq!(os_family("linux"), "linux");
        assert_eq!(os_family("freebsd"), "other");
    }

    #[test]
    fn test_user_agent_is_stable() {
        let ua = AwsUserAgent::for_tests();
        assert_eq!(
            ua.ua_header(),
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
        );
        assert_eq!(
            ua.aws_ua_header(),
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
    }

    #[test]
    fn ua_stage_adds_headers() {
        let stage = UserAgentStage::new();
        let req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        match stage.apply(req) {
            Err(UserAgentStageError::UserAgentMissing) => {}
            other => panic!("expected a missing user agent, got {:?}", other.map(|_| ())),
        }

        let mut req = operation::Request::new(http::Request::new(SdkBody::from("some body")));
        req.config_mut().insert(AwsUserAgent::for_tests());
        let (req, _) = stage
            .apply(req)
            .expect("setting user agent should succeed")
            .into_parts();
        assert_eq!(
            req.headers()[USER_AGENT],
            "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0"
        );
        assert_eq!(
            req.headers()[&*X_AMZ_USER_AGENT],
            "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0"
        );
    }
}
