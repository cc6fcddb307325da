/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use aws_auth::provider::env::EnvironmentVariableCredentialsProvider;
use aws_http::user_agent::AwsUserAgent;
use aws_hyper::conn::Standard;
use aws_hyper::test_connection::TestConnection;
use aws_hyper::RetryConfig;
use aws_types::os_shim_internal::Env;
use cognitoidentity::error::{GetOpenIdTokenErrorKind, ListIdentitiesErrorKind};
use cognitoidentity::input::DescribeIdentityPoolInput;
use cognitoidentity::model::CognitoIdentityProvider;
use cognitoidentity::{Client, Config, Credentials, Region, SdkError};
use http::header::AUTHORIZATION;
use http::Uri;
use pretty_assertions::assert_eq;
use smithy_http::body::SdkBody;
use smithy_types::Instant;
use std::time::{Duration, UNIX_EPOCH};

const POOL_ID: &str = "us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e";
const IDENTITY_ID: &str = "us-east-1:8f7e6d5c-4b3a-2918-0706-f5e4d3c2b1a0";

fn request(target: &str, body: &'static str) -> http::Request<SdkBody> {
    http::Request::builder()
        .header("content-type", "application/x-amz-json-1.1")
        .header("x-amz-target", target)
        .uri(Uri::from_static(
            "https://cognito-identity.us-east-1.amazonaws.com/",
        ))
        .method("POST")
        .body(SdkBody::from(body))
        .unwrap()
}

fn developer_credentials() -> Credentials {
    Credentials::from_keys(
        "ANOTREAL",
        "notrealrnrELgWzOk3IfjzDKtFBhDby",
        Some("notarealsessiontoken".to_string()),
    )
}

/// A device without AWS credentials
fn no_credentials() -> EnvironmentVariableCredentialsProvider {
    EnvironmentVariableCredentialsProvider::new_with_env(Env::from_slice(&[]))
}

#[tokio::test]
async fn describe_identity_pool() {
    let conn = TestConnection::new(vec![(
        http::Request::builder()
            .header("content-type", "application/x-amz-json-1.1")
            .header("x-amz-target", "AWSCognitoIdentityService.DescribeIdentityPool")
            .header("content-length", "67")
            .header("host", "cognito-identity.us-east-1.amazonaws.com")
            .header("authorization", "AWS4-HMAC-SHA256 Credential=ANOTREAL/20210305/us-east-1/cognito-identity/aws4_request, SignedHeaders=content-length;content-type;host;x-amz-date;x-amz-security-token;x-amz-target;x-amz-user-agent, Signature=f6d251aead093cb8f20fcf947b1d6d1074acf3eb1eec10c7e04aa9337c967ab4")
            .header("x-amz-date", "20210305T144724Z")
            .header("x-amz-security-token", "notarealsessiontoken")
            .header("user-agent", "aws-sdk-rust/0.123.test os/windows/XPSP3 lang/rust/1.50.0")
            .header("x-amz-user-agent", "aws-sdk-rust/0.123.test api/test-service/0.123 os/windows/XPSP3 lang/rust/1.50.0")
            .uri(Uri::from_static("https://cognito-identity.us-east-1.amazonaws.com/"))
            .method("POST")
            .body(SdkBody::from(r#"{"IdentityPoolId":"us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e"}"#))
            .unwrap(),
        http::Response::builder()
            .status(200)
            .body(r#"{
                "IdentityPoolId": "us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e",
                "IdentityPoolName": "MyIdentityPool",
                "AllowUnauthenticatedIdentities": false,
                "SupportedLoginProviders": {"graph.facebook.com": "123456789012345"},
                "CognitoIdentityProviders": [{
                    "ProviderName": "cognito-idp.us-east-1.amazonaws.com/us-east-1_Q2b4c6d8e",
                    "ClientId": "6ljf0d8v2ubfn9s8kn2umpq2gk",
                    "ServerSideTokenCheck": false
                }]
            }"#)
            .unwrap(),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(developer_credentials())
        .build();
    let client = aws_hyper::Client::new(conn.clone());
    let mut op = DescribeIdentityPoolInput::builder()
        .identity_pool_id(POOL_ID)
        .build()
        .unwrap()
        .make_operation(&conf)
        .unwrap();
    op.config_mut()
        .insert(UNIX_EPOCH + Duration::from_secs(1614955644));
    op.config_mut().insert(AwsUserAgent::for_tests());
    let pool = client.call(op).await.expect("request should succeed");
    assert_eq!(pool.identity_pool_name.as_deref(), Some("MyIdentityPool"));
    assert_eq!(pool.allow_unauthenticated_identities, Some(false));
    assert_eq!(
        pool.supported_login_providers
            .unwrap()
            .get("graph.facebook.com")
            .map(String::as_str),
        Some("123456789012345")
    );
    assert_eq!(
        pool.cognito_identity_providers,
        Some(vec![CognitoIdentityProvider::builder()
            .provider_name("cognito-idp.us-east-1.amazonaws.com/us-east-1_Q2b4c6d8e")
            .client_id("6ljf0d8v2ubfn9s8kn2umpq2gk")
            .server_side_token_check(false)
            .build()])
    );
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn unauthenticated_flow_is_unsigned() {
    let conn = TestConnection::new(vec![
        (
            request(
                "AWSCognitoIdentityService.GetId",
                r#"{"IdentityPoolId":"us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(r#"{"IdentityId":"us-east-1:8f7e6d5c-4b3a-2918-0706-f5e4d3c2b1a0"}"#)
                .unwrap(),
        ),
        (
            request(
                "AWSCognitoIdentityService.GetCredentialsForIdentity",
                r#"{"IdentityId":"us-east-1:8f7e6d5c-4b3a-2918-0706-f5e4d3c2b1a0"}"#,
            ),
            http::Response::builder()
                .status(200)
                .body(
                    r#"{"IdentityId":"us-east-1:8f7e6d5c-4b3a-2918-0706-f5e4d3c2b1a0",
                        "Credentials":{"AccessKeyId":"ASIAEXAMPLE","SecretKey":"secret","SessionToken":"token","Expiration":1.6149592E9}}"#,
                )
                .unwrap(),
        ),
    ]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(no_credentials())
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let id = client
        .get_id()
        .identity_pool_id(POOL_ID)
        .send()
        .await
        .expect("GetId does not need credentials");
    assert_eq!(id.identity_id.as_deref(), Some(IDENTITY_ID));
    let resp = client
        .get_credentials_for_identity()
        .set_identity_id(id.identity_id)
        .send()
        .await
        .expect("GetCredentialsForIdentity does not need credentials");
    let credentials = resp.credentials.unwrap();
    assert_eq!(credentials.access_key_id.as_deref(), Some("ASIAEXAMPLE"));
    assert_eq!(
        credentials.expiration,
        Some(Instant::from_epoch_seconds(1614959200))
    );
    for req in conn.requests().iter() {
        assert!(req.actual.headers().get(AUTHORIZATION).is_none());
    }
    conn.assert_requests_match(&[]);
}

#[tokio::test]
async fn developer_operations_require_credentials() {
    let conn = TestConnection::<&'static str>::new(vec![]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(no_credentials())
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let err = client
        .list_identities()
        .identity_pool_id(POOL_ID)
        .max_results(10)
        .send()
        .await
        .expect_err("no credentials");
    assert!(matches!(err, SdkError::ConstructionFailure(_)), "{:?}", err);
    assert!(conn.requests().is_empty());
}

#[tokio::test]
async fn list_identities_error() {
    let conn = TestConnection::new(vec![(
        request(
            "AWSCognitoIdentityService.ListIdentities",
            r#"{"IdentityPoolId":"us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e","MaxResults":10}"#,
        ),
        http::Response::builder()
            .status(400)
            .header("x-amzn-requestid", "d2f4c0e6-1b3a-4c5d-8e7f-9a0b1c2d3e4f")
            .body(r#"{"__type":"ResourceNotFoundException","message":"IdentityPool 'us-east-1:2d8a6b3c-0c2e-4f49-bd1f-9e5a8b7c6d5e' not found."}"#)
            .unwrap(),
    )]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(developer_credentials())
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let err = client
        .list_identities()
        .identity_pool_id(POOL_ID)
        .max_results(10)
        .send()
        .await
        .expect_err("pool does not exist");
    let err = err.service_error().expect("modeled error");
    assert!(matches!(
        err.kind,
        ListIdentitiesErrorKind::ResourceNotFoundException(_)
    ));
    assert_eq!(err.request_id(), Some("d2f4c0e6-1b3a-4c5d-8e7f-9a0b1c2d3e4f"));
    conn.assert_requests_match(&[AUTHORIZATION]);
}

#[tokio::test]
async fn throttled_requests_are_retried() {
    let throttled = || {
        http::Response::builder()
            .status(400)
            .body(r#"{"__type":"TooManyRequestsException","message":"Rate exceeded"}"#)
            .unwrap()
    };
    let get_token = || {
        request(
            "AWSCognitoIdentityService.GetOpenIdToken",
            r#"{"IdentityId":"us-east-1:8f7e6d5c-4b3a-2918-0706-f5e4d3c2b1a0"}"#,
        )
    };
    let conn = TestConnection::new(vec![
        (get_token(), throttled()),
        (get_token(), throttled()),
        (get_token(), throttled()),
    ]);
    let conf = Config::builder()
        .region(Region::new("us-east-1"))
        .credentials_provider(no_credentials())
        .retry_config(RetryConfig::default().with_static_base(|| 0_f64))
        .build();
    let client = Client::from_conf_conn(conf, Standard::new(conn.clone()));
    let err = client
        .get_open_id_token()
        .identity_id(IDENTITY_ID)
        .send()
        .await
        .expect_err("every attempt is throttled");
    assert!(matches!(
        err.service_error().map(|err| &err.kind),
        Some(GetOpenIdTokenErrorKind::TooManyRequestsException(_))
    ));
    assert_eq!(conn.requests().len(), 3);
    conn.assert_requests_match(&[]);
}
